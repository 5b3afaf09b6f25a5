// SPDX-License-Identifier: MPL-2.0
//! The carousel/modal controller.
//!
//! `CarouselController` is the single owner of carousel state. Hosts drive it
//! through its operations and observe it either through the `Transition`
//! each operation returns or through [`CarouselController::subscribe`].
//!
//! Manual input always stops auto-play; timer ticks never do. Each timer is
//! identified by a [`TickToken`] and the controller only honours the token it
//! issued last.

use super::auto_advance::TickToken;
use super::gesture::{SwipeDirection, SwipeThreshold, SwipeTracker};
use super::keyboard::{command_for_key, Command, NavKey};
use super::scroll_lock::{ScrollLock, ScrollLockGuard};
use super::state::{CarouselState, Transition, TransitionKind};
use super::CarouselError;
use crate::content::{Gallery, MediaItem};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Behaviour knobs read from the `[carousel]` settings section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSettings {
    /// Whether opening a gallery starts auto-play.
    pub autoplay_on_open: bool,
    pub swipe_threshold: SwipeThreshold,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            autoplay_on_open: crate::config::DEFAULT_AUTOPLAY_ON_OPEN,
            swipe_threshold: SwipeThreshold::default(),
        }
    }
}

pub struct CarouselController<L: ScrollLock + Clone> {
    lock: L,
    /// Held exactly while a gallery is open.
    scroll_guard: Option<ScrollLockGuard<L>>,
    gallery: Option<Arc<Gallery>>,
    active_index: usize,
    auto_playing: bool,
    /// Bumped on every transition that invalidates a running timer.
    generation: u64,
    settings: CarouselSettings,
    swipe: SwipeTracker,
    subscribers: Vec<mpsc::UnboundedSender<Transition>>,
}

impl<L: ScrollLock + Clone> std::fmt::Debug for CarouselController<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselController")
            .field("state", &self.state())
            .field("generation", &self.generation)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<L: ScrollLock + Clone> CarouselController<L> {
    pub fn new(lock: L) -> Self {
        Self {
            lock,
            scroll_guard: None,
            gallery: None,
            active_index: 0,
            auto_playing: false,
            generation: 0,
            settings: CarouselSettings::default(),
            swipe: SwipeTracker::new(),
            subscribers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: CarouselSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn set_settings(&mut self, settings: CarouselSettings) {
        self.settings = settings;
    }

    #[must_use]
    pub fn settings(&self) -> CarouselSettings {
        self.settings
    }

    // ------------------------------------------------------------------
    // Observation
    // ------------------------------------------------------------------

    /// Registers an observer. Every later transition is delivered once, in
    /// order. Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<Transition> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscribers.push(sender);
        receiver
    }

    #[must_use]
    pub fn state(&self) -> CarouselState {
        CarouselState {
            active_index: self.active_index,
            is_open: self.gallery.is_some(),
            is_auto_playing: self.auto_playing,
            selected_gallery: self.gallery.as_ref().map(|gallery| gallery.id()),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.gallery.is_some()
    }

    #[must_use]
    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn selected_gallery(&self) -> Option<&Arc<Gallery>> {
        self.gallery.as_ref()
    }

    /// Slide currently displayed, if a gallery is open.
    #[must_use]
    pub fn active_item(&self) -> Option<&MediaItem> {
        self.gallery.as_ref()?.slide(self.active_index)
    }

    /// Number of slides of the open gallery, 0 when closed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.gallery.as_ref().map_or(0, |gallery| gallery.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Token the auto-advance timer must carry, or `None` when no timer
    /// should be running at all.
    #[must_use]
    pub fn tick_token(&self) -> Option<TickToken> {
        let gallery = self.gallery.as_ref()?;
        (self.auto_playing && gallery.len() > 1).then_some(TickToken {
            gallery: gallery.id(),
            generation: self.generation,
        })
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Opens `gallery` at its first slide, replacing any gallery already open.
    pub fn open(&mut self, gallery: Arc<Gallery>) -> Option<Transition> {
        let before = self.state();

        // Release before re-acquiring so hosts with a boolean lock see a
        // clean suspend after the resume.
        self.scroll_guard = None;
        self.scroll_guard = Some(ScrollLockGuard::acquire(self.lock.clone()));

        self.auto_playing = self.settings.autoplay_on_open && gallery.len() > 1;
        self.active_index = 0;
        self.gallery = Some(gallery);
        self.swipe.cancel();
        self.generation += 1;

        tracing::debug!(
            gallery = ?self.state().selected_gallery,
            slides = self.len(),
            auto_playing = self.auto_playing,
            "carousel opened"
        );
        self.commit(before, TransitionKind::Opened)
    }

    /// Closes the modal. Closing an already closed carousel does nothing.
    pub fn close(&mut self) -> Option<Transition> {
        if self.gallery.is_none() {
            return None;
        }
        let before = self.state();

        self.gallery = None;
        self.active_index = 0;
        self.auto_playing = false;
        self.swipe.cancel();
        self.scroll_guard = None;
        self.generation += 1;

        tracing::debug!("carousel closed");
        self.commit(before, TransitionKind::Closed)
    }

    // ------------------------------------------------------------------
    // Manual navigation
    // ------------------------------------------------------------------

    pub fn next(&mut self) -> Option<Transition> {
        self.navigate(|index, len| (index + 1) % len)
    }

    pub fn previous(&mut self) -> Option<Transition> {
        self.navigate(|index, len| (index + len - 1) % len)
    }

    /// Shows slide `index`.
    ///
    /// The index must be in range. Debug builds assert it; release builds
    /// clamp it to the last slide.
    pub fn jump_to(&mut self, index: usize) -> Option<Transition> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        debug_assert!(index < len, "jump_to({index}) with {len} slides");
        let target = if index < len {
            index
        } else {
            tracing::warn!(index, len, "jump_to index out of range, clamping");
            len - 1
        };
        self.navigate(|_, _| target)
    }

    /// Checked variant of [`jump_to`](Self::jump_to) for indices that come
    /// from outside the controller.
    pub fn try_jump_to(&mut self, index: usize) -> Result<Option<Transition>, CarouselError> {
        let len = self.len();
        if index >= len {
            return Err(CarouselError::OutOfRange { index, len });
        }
        Ok(self.navigate(|_, _| index))
    }

    pub fn toggle_auto_play(&mut self) -> Option<Transition> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let before = self.state();

        self.auto_playing = !self.auto_playing && len > 1;
        self.generation += 1;

        self.commit(before, TransitionKind::AutoPlayToggled)
    }

    fn navigate(&mut self, step: impl FnOnce(usize, usize) -> usize) -> Option<Transition> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let before = self.state();

        self.active_index = step(self.active_index, len);
        self.auto_playing = false;
        self.generation += 1;

        self.commit(before, TransitionKind::Navigated)
    }

    // ------------------------------------------------------------------
    // Timer
    // ------------------------------------------------------------------

    /// Advances one slide on behalf of the auto-advance timer.
    ///
    /// Ticks carrying anything other than the current [`tick_token`](Self::tick_token)
    /// are dropped, so a timer left over from a previous gallery or a
    /// previous generation cannot move the carousel.
    pub fn tick(&mut self, token: TickToken) -> Option<Transition> {
        if self.tick_token() != Some(token) {
            tracing::debug!(?token, current = ?self.tick_token(), "ignoring stale auto-advance tick");
            return None;
        }
        let before = self.state();

        self.active_index = (self.active_index + 1) % self.len();

        self.commit(before, TransitionKind::AutoAdvanced)
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    pub fn apply(&mut self, command: Command) -> Option<Transition> {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::JumpTo(index) => self.jump_to(index),
            Command::ToggleAutoPlay => self.toggle_auto_play(),
            Command::Close => self.close(),
        }
    }

    /// Key presses only act while a gallery is open.
    pub fn handle_key(&mut self, key: NavKey) -> Option<Transition> {
        if !self.is_open() {
            return None;
        }
        self.apply(command_for_key(key))
    }

    pub fn touch_start(&mut self, x: f32) {
        if self.is_open() {
            self.swipe.begin(x);
        }
    }

    pub fn touch_move(&mut self, x: f32) {
        self.swipe.update(x);
    }

    /// Ends the touch and navigates if it was a swipe.
    pub fn touch_end(&mut self) -> Option<Transition> {
        match self.swipe.finish(self.settings.swipe_threshold)? {
            SwipeDirection::Next => self.next(),
            SwipeDirection::Previous => self.previous(),
        }
    }

    pub fn touch_cancel(&mut self) {
        self.swipe.cancel();
    }

    // ------------------------------------------------------------------

    /// Reports a transition if the operation changed observable state.
    fn commit(&mut self, before: CarouselState, kind: TransitionKind) -> Option<Transition> {
        let state = self.state();
        if state == before && kind != TransitionKind::Opened {
            return None;
        }

        let transition = Transition { kind, state };
        self.subscribers
            .retain(|subscriber| subscriber.send(transition).is_ok());
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::SharedScrollLock;
    use crate::content::{GalleryId, MediaItem};

    fn gallery(id: u32, slides: usize) -> Arc<Gallery> {
        let items = (0..slides)
            .map(|i| MediaItem::image(format!("/media/{id}/{i}.jpg"), format!("Slide {i}")))
            .collect();
        Arc::new(Gallery::new(GalleryId(id), items).expect("valid gallery"))
    }

    fn controller() -> (CarouselController<SharedScrollLock>, SharedScrollLock) {
        let lock = SharedScrollLock::new();
        (CarouselController::new(lock.clone()), lock)
    }

    fn tick_current(carousel: &mut CarouselController<SharedScrollLock>) -> Option<Transition> {
        let token = carousel.tick_token().expect("timer should be running");
        carousel.tick(token)
    }

    #[test]
    fn open_resets_to_first_slide_with_auto_play() {
        let (mut carousel, lock) = controller();
        let transition = carousel.open(gallery(1, 3)).expect("open reports");

        assert_eq!(transition.kind, TransitionKind::Opened);
        assert_eq!(
            transition.state,
            CarouselState {
                active_index: 0,
                is_open: true,
                is_auto_playing: true,
                selected_gallery: Some(GalleryId(1)),
            }
        );
        assert!(lock.is_locked());
    }

    #[test]
    fn single_slide_gallery_never_auto_plays() {
        let (mut carousel, _lock) = controller();
        carousel.open(gallery(1, 1));

        assert!(!carousel.is_auto_playing());
        assert_eq!(carousel.tick_token(), None);

        carousel.toggle_auto_play();
        assert!(!carousel.is_auto_playing());
    }

    #[test]
    fn single_slide_tick_has_no_effect() {
        let (mut carousel, _lock) = controller();
        carousel.open(gallery(1, 1));
        let token = TickToken {
            gallery: GalleryId(1),
            generation: 1,
        };

        assert_eq!(carousel.tick(token), None);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn close_resets_state_and_releases_scroll() {
        let (mut carousel, lock) = controller();
        carousel.open(gallery(1, 4));
        carousel.next();
        carousel.next();

        let transition = carousel.close().expect("close reports");
        assert_eq!(transition.kind, TransitionKind::Closed);
        assert_eq!(transition.state, CarouselState::default());
        assert!(!lock.is_locked());
        assert_eq!(carousel.tick_token(), None);
    }

    #[test]
    fn close_is_idempotent() {
        let (mut carousel, lock) = controller();
        assert_eq!(carousel.close(), None);

        carousel.open(gallery(1, 2));
        carousel.close();
        assert_eq!(carousel.close(), None);
        assert_eq!(lock.depth(), 0);
    }

    #[test]
    fn next_wraps_and_stops_auto_play() {
        let (mut carousel, _lock) = controller();
        carousel.open(gallery(1, 3));

        carousel.next();
        assert_eq!(carousel.active_index(), 1);
        assert!(!carousel.is_auto_playing());

        carousel.next();
        carousel.next();
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn previous_wraps_to_last() {
        let (mut carousel, _lock) = controller();
        carousel.open(gallery(1, 3));

        let transition = carousel.previous().expect("navigation reports");
        assert_eq!(transition.kind, TransitionKind::Navigated);
        assert_eq!(carousel.active_index(), 2);
        assert!(!carousel.is_auto_playing());
    }

    #[test]
    fn navigation_when_closed_is_a_no_op() {
        let (mut carousel, _lock) = controller();
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.previous(), None);
        assert_eq!(carousel.jump_to(0), None);
        assert_eq!(carousel.toggle_auto_play(), None);
        assert_eq!(carousel.state(), CarouselState::default());
    }

    #[test]
    fn jump_to_selects_slide_and_stops_auto_play() {
        let (mut carousel, _lock) = controller();
        carousel.open(gallery(1, 5));

        carousel.jump_to(3);
        assert_eq!(carousel.active_index(), 3);
        assert!(!carousel.is_auto_playing());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "jump_to(9) with 3 slides")]
    fn jump_to_out_of_range_asserts_in_debug() {
        let (mut carousel, _lock) = controller();
        carousel.open(gallery(1, 3));
        carousel.jump_to(9);
    }

    #[test]
    fn try_jump_to_rejects_out_of_range() {
        let (mut carousel, _lock) = controller();
        carousel.open(gallery(1, 3));

        assert_eq!(
            carousel.try_jump_to(3),
            Err(CarouselError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(carousel.active_index(), 0);
        assert!(carousel.is_auto_playing());

        assert!(carousel.try_jump_to(2).is_ok());
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn toggle_auto_play_keeps_index() {
        let (mut carousel, _lock) = controller();
        carousel.open(gallery(1, 4));
        carousel.jump_to(2);

        carousel.toggle_auto_play();
        assert!(carousel.is_auto_playing());
        assert_eq!(carousel.active_index(), 2);

        carousel.toggle_auto_play();
        assert!(!carousel.is_auto_playing());
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn ticks_advance_and_wrap_without_stopping_auto_play() {
        let (mut carousel, _lock) = controller();
        carousel.open(gallery(1, 5));

        for _ in 0..4 {
            let transition = tick_current(&mut carousel).expect("tick reports");
            assert_eq!(transition.kind, TransitionKind::AutoAdvanced);
            assert!(transition.state.is_auto_playing);
        }
        assert_eq!(carousel.active_index(), 4);

        tick_current(&mut carousel);
        assert_eq!(carousel.active_index(), 0);
        assert!(carousel.is_auto_playing());
    }

    #[test]
    fn tick_does_not_change_token() {
        let (mut carousel, _lock) = controller();
        carousel.open(gallery(1, 3));
        let token = carousel.tick_token();

        tick_current(&mut carousel);
        assert_eq!(carousel.tick_token(), token);
    }

    #[test]
    fn manual_navigation_invalidates_pending_tick() {
        let (mut carousel, _lock) = controller();
        carousel.open(gallery(1, 3));
        let stale = carousel.tick_token().expect("timer running");

        carousel.next();
        carousel.toggle_auto_play();

        assert_eq!(carousel.tick(stale), None);
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn opening_another_gallery_replaces_state_and_timer() {
        let (mut carousel, lock) = controller();
        carousel.open(gallery(1, 4));
        tick_current(&mut carousel);
        tick_current(&mut carousel);
        let stale = carousel.tick_token().expect("timer running for A");

        carousel.open(gallery(2, 3));
        assert_eq!(
            carousel.state(),
            CarouselState {
                active_index: 0,
                is_open: true,
                is_auto_playing: true,
                selected_gallery: Some(GalleryId(2)),
            }
        );
        assert_eq!(lock.depth(), 1);

        assert_eq!(carousel.tick(stale), None);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn reopening_same_gallery_invalidates_old_timer() {
        let (mut carousel, _lock) = controller();
        let shared = gallery(1, 3);
        carousel.open(Arc::clone(&shared));
        let stale = carousel.tick_token().expect("timer running");

        carousel.close();
        carousel.open(shared);

        assert_ne!(carousel.tick_token(), Some(stale));
        assert_eq!(carousel.tick(stale), None);
    }

    #[test]
    fn autoplay_on_open_can_be_disabled() {
        let lock = SharedScrollLock::new();
        let mut carousel = CarouselController::new(lock).with_settings(CarouselSettings {
            autoplay_on_open: false,
            ..CarouselSettings::default()
        });

        carousel.open(gallery(1, 3));
        assert!(!carousel.is_auto_playing());
        assert_eq!(carousel.tick_token(), None);
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let (mut carousel, _lock) = controller();
        assert_eq!(carousel.handle_key(NavKey::ArrowRight), None);
        assert_eq!(carousel.handle_key(NavKey::Escape), None);
    }

    #[test]
    fn keys_navigate_and_close() {
        let (mut carousel, lock) = controller();
        carousel.open(gallery(1, 3));

        carousel.handle_key(NavKey::ArrowRight);
        assert_eq!(carousel.active_index(), 1);
        carousel.handle_key(NavKey::ArrowLeft);
        carousel.handle_key(NavKey::ArrowLeft);
        assert_eq!(carousel.active_index(), 2);

        let transition = carousel.handle_key(NavKey::Escape).expect("close reports");
        assert_eq!(transition.kind, TransitionKind::Closed);
        assert!(!lock.is_locked());
    }

    #[test]
    fn swipe_past_threshold_navigates_once() {
        let (mut carousel, _lock) = controller();
        carousel.open(gallery(1, 3));

        carousel.touch_start(100.0);
        carousel.touch_move(40.0);
        let transition = carousel.touch_end().expect("swipe navigates");
        assert_eq!(transition.kind, TransitionKind::Navigated);
        assert_eq!(carousel.active_index(), 1);

        // The interaction is consumed.
        assert_eq!(carousel.touch_end(), None);
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn short_swipe_does_nothing() {
        let (mut carousel, _lock) = controller();
        carousel.open(gallery(1, 3));

        carousel.touch_start(100.0);
        carousel.touch_move(70.0);
        assert_eq!(carousel.touch_end(), None);
        assert_eq!(carousel.active_index(), 0);
        assert!(carousel.is_auto_playing());
    }

    #[test]
    fn rightward_swipe_goes_previous() {
        let (mut carousel, _lock) = controller();
        carousel.open(gallery(1, 3));

        carousel.touch_start(40.0);
        carousel.touch_move(100.0);
        carousel.touch_end();
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn subscribers_see_every_transition_in_order() {
        let (mut carousel, _lock) = controller();
        let mut receiver = carousel.subscribe();

        carousel.open(gallery(1, 3));
        tick_current(&mut carousel);
        carousel.next();
        carousel.close();
        carousel.close();

        let kinds: Vec<_> = std::iter::from_fn(|| receiver.try_recv().ok())
            .map(|transition| transition.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TransitionKind::Opened,
                TransitionKind::AutoAdvanced,
                TransitionKind::Navigated,
                TransitionKind::Closed,
            ]
        );
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let (mut carousel, _lock) = controller();
        let receiver = carousel.subscribe();
        drop(receiver);

        carousel.open(gallery(1, 2));
        assert_eq!(carousel.subscribers.len(), 0);
    }

    #[test]
    fn unchanged_state_emits_nothing() {
        let (mut carousel, _lock) = controller();
        carousel.open(gallery(1, 1));

        // One slide: index stays, auto-play already off.
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.jump_to(0), None);
    }

    #[test]
    fn dropping_controller_releases_scroll_lock() {
        let (mut carousel, lock) = controller();
        carousel.open(gallery(1, 2));
        assert!(lock.is_locked());

        drop(carousel);
        assert!(!lock.is_locked());
    }

    #[test]
    fn active_item_follows_index() {
        let (mut carousel, _lock) = controller();
        assert!(carousel.active_item().is_none());

        carousel.open(gallery(7, 3));
        carousel.jump_to(2);
        assert_eq!(
            carousel.active_item().map(MediaItem::url),
            Some("/media/7/2.jpg")
        );
    }
}
