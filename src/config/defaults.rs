// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Carousel**: Auto-advance interval, swipe threshold, auto-play on open
//! - **Page**: Navigation bar reveal offset
//! - **Window**: Default and minimum window size

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Delay between two automatic slide changes (in milliseconds).
pub const DEFAULT_AUTO_ADVANCE_MS: u64 = 4000;

/// Fastest supported auto-advance (in milliseconds).
pub const MIN_AUTO_ADVANCE_MS: u64 = 1000;

/// Slowest supported auto-advance (in milliseconds).
pub const MAX_AUTO_ADVANCE_MS: u64 = 60_000;

/// Horizontal travel needed for a touch to count as a swipe (logical pixels).
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Smallest accepted swipe threshold (logical pixels).
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Largest accepted swipe threshold (logical pixels).
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

/// Whether opening a gallery starts auto-play.
pub const DEFAULT_AUTOPLAY_ON_OPEN: bool = true;

// ==========================================================================
// Page Defaults
// ==========================================================================

/// Below this scroll offset the navigation bar is always shown (logical pixels).
pub const NAV_REVEAL_OFFSET_PX: f32 = 10.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;
