// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection.
//!
//! A swipe is decided from two samples only: where the touch started and
//! where it was last seen. There is no velocity or multi-touch handling.

use crate::config::{DEFAULT_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX, MIN_SWIPE_THRESHOLD_PX};

/// Navigation requested by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right-to-left: show the next slide.
    Next,
    /// Finger moved left-to-right: show the previous slide.
    Previous,
}

/// Minimum horizontal travel, in logical pixels, for a touch to count as a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a threshold, clamping to the supported range. NaN falls back
    /// to the default.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_nan() {
            return Self::default();
        }
        Self(pixels.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

/// Classifies a touch from its start and end x-coordinates.
///
/// `start - end` above the threshold is a swipe to the next slide, below the
/// negated threshold a swipe to the previous one. Travel of exactly the
/// threshold does not count.
#[must_use]
pub fn swipe_direction(start_x: f32, end_x: f32, threshold: SwipeThreshold) -> Option<SwipeDirection> {
    let distance = start_x - end_x;
    if distance > threshold.value() {
        Some(SwipeDirection::Next)
    } else if distance < -threshold.value() {
        Some(SwipeDirection::Previous)
    } else {
        None
    }
}

/// Samples of the touch currently in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    end_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new interaction, discarding any unfinished one.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
        self.end_x = None;
    }

    pub fn update(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.end_x = Some(x);
        }
    }

    /// Ends the interaction and classifies it. A touch that never moved is
    /// not a swipe.
    pub fn finish(&mut self, threshold: SwipeThreshold) -> Option<SwipeDirection> {
        let start = self.start_x.take();
        let end = self.end_x.take();
        swipe_direction(start?, end?, threshold)
    }

    /// Drops the interaction without classifying it (touch lost).
    pub fn cancel(&mut self) {
        self.start_x = None;
        self.end_x = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
