// SPDX-License-Identifier: MPL-2.0
//! Observable carousel state and the transitions reported to observers.

use crate::content::GalleryId;

/// Snapshot of the carousel as the rendering layer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState {
    pub active_index: usize,
    pub is_open: bool,
    pub is_auto_playing: bool,
    pub selected_gallery: Option<GalleryId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Opened,
    Closed,
    /// Manual navigation (buttons, dots, keys, swipe).
    Navigated,
    /// Timer-driven advance.
    AutoAdvanced,
    AutoPlayToggled,
}

/// One observable state change, with the state it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub kind: TransitionKind,
    pub state: CarouselState,
}
