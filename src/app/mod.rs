// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page, the modals and
//! the carousel controller.
//!
//! The `App` struct owns the content catalog, the localization bundles and
//! the single [`CarouselController`]. Views only ever see snapshots; every
//! change goes through `update`, which is also where side effects (clipboard,
//! downloads, config persistence) are started.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, TouchInput};
pub use screen::Screen;

use crate::carousel::{AutoAdvanceInterval, CarouselController, ScrollLockGuard, SharedScrollLock};
use crate::config::{self, Config};
use crate::content::{Catalog, ContactCard};
use crate::i18n::fluent::I18n;
use crate::ui::contact_modal::QrImage;
use crate::ui::navbar::NavVisibility;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    /// Directory given with `--config-dir`, used again when saving.
    config_dir: Option<PathBuf>,
    catalog: Catalog,
    contact: ContactCard,
    media_root: Option<PathBuf>,
    /// Shared with the controller and the contact modal; the page scrollable
    /// stops reacting to wheel and touch input while it is held.
    scroll_lock: SharedScrollLock,
    carousel: CarouselController<SharedScrollLock>,
    interval: AutoAdvanceInterval,
    /// Held while the contact modal is open.
    contact_guard: Option<ScrollLockGuard<SharedScrollLock>>,
    qr_code: QrImage,
    vcard_downloading: bool,
    nav: NavVisibility,
    menu_open: bool,
    window_width: f32,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("carousel", &self.carousel.state())
            .field("contact_open", &self.contact_guard.is_some())
            .field("scroll_locked", &self.scroll_lock.is_locked())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced asks for an `Fn` boot closure; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let scroll_lock = SharedScrollLock::new();
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            config: Config::default(),
            config_dir: None,
            catalog: Catalog::builtin(),
            contact: ContactCard::default(),
            media_root: None,
            carousel: CarouselController::new(scroll_lock.clone()),
            scroll_lock,
            interval: AutoAdvanceInterval::default(),
            contact_guard: None,
            qr_code: QrImage::default(),
            vcard_downloading: false,
            nav: NavVisibility::default(),
            menu_open: false,
            window_width: config::WINDOW_DEFAULT_WIDTH,
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Loads config, localization and the catalog, reporting every fallback
    /// as a warning toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let config_dir = flags.config_dir.map(PathBuf::from);

        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);

        let catalog_path = flags.catalog.or_else(|| config.content.catalog_path.clone());
        let (catalog, catalog_warning) = Catalog::load_or_builtin(catalog_path.as_deref());

        // Site-relative media paths default to the catalog's own directory.
        let media_root = config.content.media_root.clone().or_else(|| {
            catalog_path
                .as_deref()
                .and_then(|path| path.parent())
                .map(PathBuf::from)
        });

        let mut app = App {
            i18n,
            config_dir,
            catalog,
            media_root,
            interval: config.carousel.interval(),
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };
        app.carousel.set_settings(config.carousel.settings());
        app.config = config;

        for warning in [config_warning, catalog_warning].into_iter().flatten() {
            app.notifications.push(Notification::warning(warning));
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            engagements = app.catalog.engagements.len(),
            videos = app.catalog.videos.len(),
            interval_ms = app.interval.value(),
            "application started"
        );

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.open_engagement() {
            Some(engagement) => format!("{} - {app_name}", engagement.title),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let timer = subscription::create_auto_advance_subscription(
            self.carousel.tick_token(),
            self.interval,
        );
        let modal_input = subscription::create_modal_input_subscription(self.is_modal_open());
        let window = subscription::create_window_subscription();
        let toasts =
            subscription::create_notification_subscription(self.notifications.has_notifications());

        Subscription::batch([timer, modal_input, window, toasts])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            config: &mut self.config,
            config_dir: &self.config_dir,
            catalog: &self.catalog,
            contact: &self.contact,
            scroll_lock: &self.scroll_lock,
            carousel: &mut self.carousel,
            contact_guard: &mut self.contact_guard,
            qr_code: &mut self.qr_code,
            vcard_downloading: &mut self.vcard_downloading,
            nav: &mut self.nav,
            menu_open: &mut self.menu_open,
            window_width: &mut self.window_width,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(&mut ctx, navbar_message),
            Message::Talks(talks_message) => update::handle_talks_message(&mut ctx, talks_message),
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::MediaModal(modal_message) => {
                update::handle_media_modal_message(&mut ctx, modal_message)
            }
            Message::ContactModal(modal_message) => {
                update::handle_contact_modal_message(&mut ctx, modal_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(token) => {
                ctx.carousel.tick(token);
                Task::none()
            }
            Message::Key(key) => update::handle_key(&mut ctx, key),
            Message::Touch(input) => update::handle_touch(&mut ctx, input),
            Message::PageScrolled(offset) => {
                ctx.nav.on_scroll(offset);
                Task::none()
            }
            Message::WindowResized(width) => update::handle_window_resized(&mut ctx, width),
            Message::QrCodeLoaded(result) => update::handle_qr_code_loaded(&mut ctx, result),
            Message::VCardDownloaded(result) => update::handle_vcard_downloaded(&mut ctx, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            catalog: &self.catalog,
            contact: &self.contact,
            media_root: self.media_root.as_deref(),
            carousel: self.carousel.state(),
            engagement: self.open_engagement(),
            contact_open: self.contact_guard.is_some(),
            qr_code: &self.qr_code,
            vcard_downloading: self.vcard_downloading,
            scroll_locked: self.scroll_lock.is_locked(),
            nav_visible: self.nav.is_visible(),
            menu_open: self.menu_open,
            window_width: self.window_width,
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
        })
    }

    fn is_modal_open(&self) -> bool {
        self.carousel.is_open() || self.contact_guard.is_some()
    }

    /// Engagement whose gallery the carousel currently shows.
    fn open_engagement(&self) -> Option<&crate::content::SpeakingEngagement> {
        let gallery = self.carousel.selected_gallery()?;
        self.catalog.engagement(gallery.id().0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{Command, NavKey};
    use crate::ui::{media_modal, navbar, talks};

    fn app() -> App {
        let mut app = App {
            i18n: I18n::new(Some("en-US".to_string()), &Config::default()),
            ..App::default()
        };
        app.carousel.set_settings(Config::default().carousel.settings());
        app
    }

    fn first_multi_slide_engagement(app: &App) -> u32 {
        app.catalog
            .engagements
            .iter()
            .find(|engagement| engagement.gallery.len() > 1)
            .map(|engagement| engagement.id)
            .expect("builtin catalog has a multi-slide gallery")
    }

    #[test]
    fn opening_an_engagement_locks_scroll_and_starts_the_timer() {
        let mut app = app();
        let id = first_multi_slide_engagement(&app);

        let _ = app.update(Message::Talks(talks::Message::OpenEngagement(id)));

        assert!(app.carousel.is_open());
        assert!(app.scroll_lock.is_locked());
        assert!(app.carousel.tick_token().is_some());
        assert!(app.title().starts_with(&app.open_engagement().expect("open").title));
    }

    #[test]
    fn escape_closes_media_modal_and_releases_scroll() {
        let mut app = app();
        let id = first_multi_slide_engagement(&app);
        let _ = app.update(Message::Talks(talks::Message::OpenEngagement(id)));

        let _ = app.update(Message::Key(NavKey::Escape));

        assert!(!app.carousel.is_open());
        assert!(!app.scroll_lock.is_locked());
        assert_eq!(app.title(), "FolioReel");
    }

    #[test]
    fn stale_tick_after_reopen_is_ignored() {
        let mut app = app();
        let id = first_multi_slide_engagement(&app);
        let _ = app.update(Message::Talks(talks::Message::OpenEngagement(id)));
        let stale = app.carousel.tick_token().expect("token");

        let _ = app.update(Message::MediaModal(media_modal::Message::Carousel(Command::Close)));
        let _ = app.update(Message::Talks(talks::Message::OpenEngagement(id)));
        let _ = app.update(Message::Tick(stale));

        assert_eq!(app.carousel.active_index(), 0);
    }

    #[test]
    fn unknown_engagement_does_not_open_modal() {
        let mut app = app();
        let _ = app.update(Message::Talks(talks::Message::OpenEngagement(9999)));
        assert!(!app.carousel.is_open());
        assert!(!app.scroll_lock.is_locked());
    }

    #[test]
    fn contact_modal_holds_scroll_lock_until_escape() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::ShowContactCard));
        assert!(app.contact_guard.is_some());
        assert!(app.scroll_lock.is_locked());
        assert!(matches!(app.qr_code, QrImage::Loading));

        let _ = app.update(Message::Key(NavKey::Escape));
        assert!(app.contact_guard.is_none());
        assert!(!app.scroll_lock.is_locked());
    }

    #[test]
    fn contact_card_replaces_open_media_modal() {
        let mut app = app();
        let id = first_multi_slide_engagement(&app);
        let _ = app.update(Message::Talks(talks::Message::OpenEngagement(id)));
        let _ = app.update(Message::Navbar(navbar::Message::ShowContactCard));

        assert!(!app.carousel.is_open());
        assert_eq!(app.scroll_lock.depth(), 1);
    }

    #[test]
    fn failed_qr_download_shows_fallback() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::ShowContactCard));
        let _ = app.update(Message::QrCodeLoaded(Err(crate::error::Error::Network(
            "offline".into(),
        ))));
        assert!(matches!(app.qr_code, QrImage::Failed));
    }

    #[test]
    fn scrolling_hides_navbar() {
        let mut app = app();
        let _ = app.update(Message::PageScrolled(300.0));
        assert!(!app.nav.is_visible());
        let _ = app.update(Message::PageScrolled(120.0));
        assert!(app.nav.is_visible());
    }

    #[test]
    fn touch_swipe_advances_open_gallery() {
        let mut app = app();
        let id = first_multi_slide_engagement(&app);
        let _ = app.update(Message::Talks(talks::Message::OpenEngagement(id)));

        let _ = app.update(Message::Touch(TouchInput::Start(100.0)));
        let _ = app.update(Message::Touch(TouchInput::Move(40.0)));
        let _ = app.update(Message::Touch(TouchInput::End));

        assert_eq!(app.carousel.active_index(), 1);
        assert!(!app.carousel.is_auto_playing());
    }

    #[test]
    fn navigating_screens_resets_navbar() {
        let mut app = app();
        let _ = app.update(Message::PageScrolled(300.0));
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(
            navbar::Section::Contact,
        )));
        assert_eq!(app.screen, Screen::Contact);
        assert!(app.nav.is_visible());
    }

    #[test]
    fn view_renders_with_modal_open() {
        let mut app = app();
        let id = first_multi_slide_engagement(&app);
        let _ = app.update(Message::Talks(talks::Message::OpenEngagement(id)));
        let _element = app.view();
    }
}
