// SPDX-License-Identifier: MPL-2.0
//! Media carousel and modal navigation.
//!
//! This module is independent of the GUI toolkit. The [`CarouselController`]
//! owns the open gallery, the active slide and the auto-play flag; the
//! submodules provide its collaborators:
//!
//! - [`auto_advance`]: interval newtype and the [`TickToken`] that ties a
//!   timer to one gallery and one controller generation
//! - [`gesture`]: two-sample horizontal swipe detection
//! - [`keyboard`]: key-to-command bindings
//! - [`scroll_lock`]: scoped suspension of background page scrolling
//! - [`state`]: the observable snapshot and transitions

pub mod auto_advance;
pub mod controller;
pub mod gesture;
pub mod keyboard;
pub mod scroll_lock;
pub mod state;

pub use auto_advance::{AutoAdvanceInterval, TickToken};
pub use controller::{CarouselController, CarouselSettings};
pub use gesture::{swipe_direction, SwipeDirection, SwipeThreshold, SwipeTracker};
pub use keyboard::{command_for_key, Command, NavKey};
pub use scroll_lock::{ScrollLock, ScrollLockGuard, SharedScrollLock};
pub use state::{CarouselState, Transition, TransitionKind};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("slide index {index} is out of range for a gallery of {len}")]
    OutOfRange { index: usize, len: usize },
}
