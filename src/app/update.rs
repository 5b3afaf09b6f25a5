// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler takes the [`UpdateContext`] borrowed from `App` and returns
//! the task to run next. Carousel changes all go through the controller so
//! the scroll lock and tick tokens stay consistent.

use super::{Message, Screen, TouchInput};
use crate::carousel::{CarouselController, NavKey, ScrollLockGuard, SharedScrollLock};
use crate::config::{self, Config};
use crate::content::{remote, Catalog, ContactCard};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::contact::{self, Message as ContactMessage};
use crate::ui::contact_modal::{self, QrImage};
use crate::ui::media_modal;
use crate::ui::navbar::{self, Event as NavbarEvent, NavVisibility, COMPACT_BREAKPOINT};
use crate::ui::notifications::{self, Notification};
use crate::ui::talks;
use crate::ui::theming::ThemeMode;
use iced::widget::image::Handle;
use iced::Task;
use std::path::PathBuf;

/// Mutable view of the app state handed to every handler.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub config: &'a mut Config,
    pub config_dir: &'a Option<PathBuf>,
    pub catalog: &'a Catalog,
    pub contact: &'a ContactCard,
    pub scroll_lock: &'a SharedScrollLock,
    pub carousel: &'a mut CarouselController<SharedScrollLock>,
    pub contact_guard: &'a mut Option<ScrollLockGuard<SharedScrollLock>>,
    pub qr_code: &'a mut QrImage,
    pub vcard_downloading: &'a mut bool,
    pub nav: &'a mut NavVisibility,
    pub menu_open: &'a mut bool,
    pub window_width: &'a mut f32,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    fn persist_config(&mut self) {
        if let Err(err) = config::save_with_override(self.config, self.config_dir.clone()) {
            tracing::warn!(error = %err, "failed to save settings");
            self.notifications
                .push(Notification::warning("notification-config-save-error"));
        }
    }
}

// ----------------------------------------------------------------------------
// Navigation
// ----------------------------------------------------------------------------

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(section) => handle_screen_switch(ctx, section.into()),
        NavbarEvent::ShowContactCard => open_contact_modal(ctx),
        NavbarEvent::CycleTheme => {
            *ctx.theme_mode = ctx.theme_mode.next();
            ctx.config.general.theme_mode = *ctx.theme_mode;
            tracing::debug!(mode = ?ctx.theme_mode, "theme changed");
            ctx.persist_config();
            Task::none()
        }
        NavbarEvent::CycleLanguage => {
            let locale = ctx.i18n.next_locale();
            ctx.i18n.set_locale(locale.clone());
            ctx.config.general.language = Some(locale.to_string());
            tracing::debug!(%locale, "language changed");
            ctx.persist_config();
            Task::none()
        }
    }
}

pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen == target {
        return Task::none();
    }
    *ctx.screen = target;
    ctx.nav.reset();

    // The contact screen shows the QR code inline.
    if target == Screen::Contact {
        request_qr_code(ctx)
    } else {
        Task::none()
    }
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, width: f32) -> Task<Message> {
    *ctx.window_width = width;
    if width >= COMPACT_BREAKPOINT {
        *ctx.menu_open = false;
    }
    Task::none()
}

// ----------------------------------------------------------------------------
// Talks and the media modal
// ----------------------------------------------------------------------------

pub fn handle_talks_message(ctx: &mut UpdateContext<'_>, message: talks::Message) -> Task<Message> {
    match message {
        talks::Message::OpenEngagement(id) => {
            let Some(gallery) = ctx
                .catalog
                .engagement(id)
                .map(|engagement| engagement.gallery.clone())
            else {
                tracing::warn!(id, "unknown engagement");
                return Task::none();
            };
            close_contact_modal(ctx);
            ctx.carousel.open(gallery);
            Task::none()
        }
        talks::Message::CopyLink(url) => copy_link(ctx, &url),
    }
}

pub fn handle_media_modal_message(
    ctx: &mut UpdateContext<'_>,
    message: media_modal::Message,
) -> Task<Message> {
    match message {
        media_modal::Message::Carousel(command) => {
            ctx.carousel.apply(command);
            Task::none()
        }
        media_modal::Message::CopyLink(url) => copy_link(ctx, &url),
    }
}

/// Keys reach the topmost modal only.
pub fn handle_key(ctx: &mut UpdateContext<'_>, key: NavKey) -> Task<Message> {
    if ctx.contact_guard.is_some() {
        if key == NavKey::Escape {
            close_contact_modal(ctx);
        }
    } else if ctx.carousel.is_open() {
        ctx.carousel.handle_key(key);
    }
    Task::none()
}

pub fn handle_touch(ctx: &mut UpdateContext<'_>, input: TouchInput) -> Task<Message> {
    if !ctx.carousel.is_open() || ctx.contact_guard.is_some() {
        return Task::none();
    }
    match input {
        TouchInput::Start(x) => ctx.carousel.touch_start(x),
        TouchInput::Move(x) => ctx.carousel.touch_move(x),
        TouchInput::End => {
            ctx.carousel.touch_end();
        }
        TouchInput::Cancel => ctx.carousel.touch_cancel(),
    }
    Task::none()
}

// ----------------------------------------------------------------------------
// Contact screen and contact modal
// ----------------------------------------------------------------------------

pub fn handle_contact_message(ctx: &mut UpdateContext<'_>, message: ContactMessage) -> Task<Message> {
    match message {
        contact::Message::CopyLink(url) => copy_link(ctx, &url),
        contact::Message::ShowQrModal => open_contact_modal(ctx),
        contact::Message::DownloadVCard => download_vcard(ctx),
    }
}

pub fn handle_contact_modal_message(
    ctx: &mut UpdateContext<'_>,
    message: contact_modal::Message,
) -> Task<Message> {
    match message {
        contact_modal::Message::Close => {
            close_contact_modal(ctx);
            Task::none()
        }
        contact_modal::Message::CopyLink(url) => copy_link(ctx, &url),
        contact_modal::Message::RetryQr => request_qr_code(ctx),
    }
}

/// Only one modal is shown at a time; the media modal gives way.
fn open_contact_modal(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.carousel.is_open() {
        ctx.carousel.close();
    }
    if ctx.contact_guard.is_none() {
        *ctx.contact_guard = Some(ScrollLockGuard::acquire(ctx.scroll_lock.clone()));
        tracing::debug!("contact modal opened");
    }
    request_qr_code(ctx)
}

fn close_contact_modal(ctx: &mut UpdateContext<'_>) {
    if ctx.contact_guard.take().is_some() {
        tracing::debug!("contact modal closed");
    }
}

fn request_qr_code(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !ctx.qr_code.needs_fetch() {
        return Task::none();
    }
    *ctx.qr_code = QrImage::Loading;
    Task::perform(remote::fetch_image(ctx.contact.qr_code_url()), Message::QrCodeLoaded)
}

pub fn handle_qr_code_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<u8>, Error>,
) -> Task<Message> {
    *ctx.qr_code = match result {
        Ok(bytes) => QrImage::Ready(Handle::from_bytes(bytes)),
        Err(err) => {
            tracing::warn!(error = %err, "QR code unavailable");
            QrImage::Failed
        }
    };
    Task::none()
}

fn download_vcard(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.vcard_downloading {
        return Task::none();
    }
    let Some(directory) = dirs::download_dir().or_else(dirs::home_dir) else {
        ctx.notifications
            .push(Notification::error("notification-vcard-no-download-dir"));
        return Task::none();
    };

    *ctx.vcard_downloading = true;
    Task::perform(
        remote::download_file(
            ctx.contact.vcard_url.clone(),
            directory,
            ctx.contact.download_name.clone(),
        ),
        Message::VCardDownloaded,
    )
}

pub fn handle_vcard_downloaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    *ctx.vcard_downloading = false;
    match result {
        Ok(_) => ctx
            .notifications
            .push(Notification::success("notification-vcard-saved")),
        Err(err) => {
            tracing::warn!(error = %err, "vCard download failed");
            ctx.notifications.push(Notification::error(err.i18n_key()));
        }
    }
    Task::none()
}

// ----------------------------------------------------------------------------
// Clipboard
// ----------------------------------------------------------------------------

fn copy_link(ctx: &mut UpdateContext<'_>, url: &str) -> Task<Message> {
    let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(url));
    match result {
        Ok(()) => {
            tracing::debug!(%url, "link copied");
            ctx.notifications
                .push(Notification::success("notification-link-copied"));
        }
        Err(err) => {
            tracing::warn!(%url, error = %err, "clipboard unavailable");
            ctx.notifications
                .push(Notification::error("notification-clipboard-error"));
        }
    }
    Task::none()
}
