// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each view
//! takes a `ViewContext` borrowed from the app and emits its own `Message`
//! type, which the app wraps.
//!
//! # Screens
//!
//! - [`talks`] - Speaking engagement grid and featured videos
//! - [`contact`] - Digital contact card and contact details
//!
//! # Overlays
//!
//! - [`media_modal`] - Engagement details with the media carousel
//! - [`contact_modal`] - vCard QR code
//! - [`modal`] - Backdrop layering shared by both modals
//! - [`notifications`] - Toasts for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Navigation bar with hide-on-scroll and compact menu
//! - [`widgets`] - Custom widgets (scroll gate)
//! - [`styles`] - Button, container and text styles
//! - [`design_tokens`] - Colors, spacing, sizing
//! - [`theming`] - Light/Dark/System theme mode

pub mod contact;
pub mod contact_modal;
pub mod design_tokens;
pub mod media_modal;
pub mod modal;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod talks;
pub mod theming;
pub mod widgets;
