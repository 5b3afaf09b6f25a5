// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::carousel::{NavKey, TickToken};
use crate::error::Error;
use crate::ui::contact;
use crate::ui::contact_modal;
use crate::ui::media_modal;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::talks;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Talks(talks::Message),
    Contact(contact::Message),
    MediaModal(media_modal::Message),
    ContactModal(contact_modal::Message),
    Notification(notifications::NotificationMessage),
    /// Auto-advance timer fired for the schedule identified by the token.
    Tick(TickToken),
    /// Navigation key pressed while a modal is open.
    Key(NavKey),
    Touch(TouchInput),
    /// Vertical offset of the page scrollable.
    PageScrolled(f32),
    WindowResized(f32),
    QrCodeLoaded(Result<Vec<u8>, Error>),
    VCardDownloaded(Result<PathBuf, Error>),
}

/// Horizontal touch input over an open media modal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchInput {
    Start(f32),
    Move(f32),
    End,
    Cancel,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`).
    pub lang: Option<String>,
    /// Optional config directory, overriding `FOLIO_REEL_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Optional catalog file, overriding `[content] catalog_path`.
    pub catalog: Option<PathBuf>,
}
