// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for user feedback.
//!
//! Messages are i18n keys resolved at render time. Success toasts leave on
//! their own after a few seconds, warnings a little later, errors only when
//! dismissed. At most three are visible; the rest are queued.
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-link-copied"));
//! let overlay = notifications::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::view_overlay;
