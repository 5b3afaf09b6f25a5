// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The auto-advance timer is keyed by the carousel's tick token: whenever the
//! token changes (new gallery, manual navigation, toggle) iced drops the old
//! timer and starts a fresh one, and ticks from the old one that are already
//! queued are rejected by the controller.

use super::{Message, TouchInput};
use crate::carousel::{AutoAdvanceInterval, NavKey, TickToken};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, touch, window, Event, Subscription};
use std::time::Duration;

/// How often toasts are checked for expiry.
const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

/// Timer for the open gallery, or nothing when auto-play is off.
pub fn create_auto_advance_subscription(
    token: Option<TickToken>,
    interval: AutoAdvanceInterval,
) -> Subscription<Message> {
    match token {
        Some(token) => time::every(interval.as_duration())
            .with(token)
            .map(|(token, _at)| Message::Tick(token)),
        None => Subscription::none(),
    }
}

/// Keyboard and touch routing while a modal is open.
///
/// Escape, the arrows and Space are only meaningful on top of a modal, so the
/// page itself never sees them.
pub fn create_modal_input_subscription(modal_open: bool) -> Subscription<Message> {
    if !modal_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            let key = nav_key(&key)?;
            // Space on a focused button is that button's activation.
            if key == NavKey::Space && matches!(status, event::Status::Captured) {
                return None;
            }
            Some(Message::Key(key))
        }
        Event::Touch(touch_event) => touch_input(touch_event).map(Message::Touch),
        _ => None,
    })
}

/// Window width drives the grid columns and the compact navbar.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size.width)),
        _ => None,
    })
}

/// Periodic expiry check, only while toasts are showing.
pub fn create_notification_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK).map(|_| {
            Message::Notification(crate::ui::notifications::NotificationMessage::Tick)
        })
    } else {
        Subscription::none()
    }
}

fn nav_key(key: &Key) -> Option<NavKey> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(NavKey::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(NavKey::ArrowRight),
        Key::Named(Named::Escape) => Some(NavKey::Escape),
        Key::Named(Named::Space) => Some(NavKey::Space),
        _ => None,
    }
}

fn touch_input(event: touch::Event) -> Option<TouchInput> {
    match event {
        touch::Event::FingerPressed { position, .. } => Some(TouchInput::Start(position.x)),
        touch::Event::FingerMoved { position, .. } => Some(TouchInput::Move(position.x)),
        touch::Event::FingerLifted { .. } => Some(TouchInput::End),
        touch::Event::FingerLost { .. } => Some(TouchInput::Cancel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    #[test]
    fn only_carousel_keys_are_mapped() {
        assert_eq!(nav_key(&Key::Named(Named::ArrowLeft)), Some(NavKey::ArrowLeft));
        assert_eq!(nav_key(&Key::Named(Named::ArrowRight)), Some(NavKey::ArrowRight));
        assert_eq!(nav_key(&Key::Named(Named::Escape)), Some(NavKey::Escape));
        assert_eq!(nav_key(&Key::Named(Named::Space)), Some(NavKey::Space));
        assert_eq!(nav_key(&Key::Named(Named::Enter)), None);
        assert_eq!(nav_key(&Key::Character("a".into())), None);
    }

    #[test]
    fn finger_events_become_touch_input() {
        let id = touch::Finger(0);
        assert_eq!(
            touch_input(touch::Event::FingerPressed {
                id,
                position: Point::new(120.0, 5.0)
            }),
            Some(TouchInput::Start(120.0))
        );
        assert_eq!(
            touch_input(touch::Event::FingerLifted {
                id,
                position: Point::ORIGIN
            }),
            Some(TouchInput::End)
        );
        assert_eq!(
            touch_input(touch::Event::FingerLost {
                id,
                position: Point::ORIGIN
            }),
            Some(TouchInput::Cancel)
        );
    }
}
