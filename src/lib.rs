// SPDX-License-Identifier: MPL-2.0
//! `folio_reel` is a speaker portfolio built with the Iced GUI framework.
//!
//! It shows talk engagements as cards; each card opens a modal with a media
//! carousel that auto-advances, responds to arrows, dots, keys and swipes,
//! and locks page scrolling while open. The carousel logic lives in
//! [`carousel`] and has no dependency on the UI toolkit.

#![doc(html_root_url = "https://docs.rs/folio_reel/0.1.0")]

pub mod app;
pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod ui;
