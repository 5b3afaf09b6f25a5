// SPDX-License-Identifier: MPL-2.0
//! Auto-advance timing: the interval newtype and the tick token.

use crate::config::{DEFAULT_AUTO_ADVANCE_MS, MAX_AUTO_ADVANCE_MS, MIN_AUTO_ADVANCE_MS};
use crate::content::GalleryId;
use std::time::Duration;

/// Delay between two automatic slide changes, in milliseconds.
///
/// # Example
///
/// ```
/// use folio_reel::carousel::AutoAdvanceInterval;
///
/// let interval = AutoAdvanceInterval::new(4000);
/// assert_eq!(interval.value(), 4000);
///
/// // Values outside range are clamped
/// let too_fast = AutoAdvanceInterval::new(10);
/// assert_eq!(too_fast.value(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoAdvanceInterval(u64);

impl AutoAdvanceInterval {
    /// Creates a new interval, clamping to the supported range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_AUTO_ADVANCE_MS, MAX_AUTO_ADVANCE_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AutoAdvanceInterval {
    fn default() -> Self {
        Self(DEFAULT_AUTO_ADVANCE_MS)
    }
}

/// Identity of one auto-advance schedule.
///
/// A token is issued for the currently selected gallery and the current
/// controller generation. Any open, close, manual navigation or auto-play
/// toggle moves the generation forward, so a timer started under an older
/// token can no longer advance the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken {
    pub gallery: GalleryId,
    pub generation: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(AutoAdvanceInterval::new(0).value(), MIN_AUTO_ADVANCE_MS);
        assert_eq!(
            AutoAdvanceInterval::new(u64::MAX).value(),
            MAX_AUTO_ADVANCE_MS
        );
    }

    #[test]
    fn default_matches_reference_interval() {
        assert_eq!(AutoAdvanceInterval::default().value(), 4000);
        assert_eq!(
            AutoAdvanceInterval::default().as_duration(),
            Duration::from_secs(4)
        );
    }

    #[test]
    fn tokens_differ_by_generation_or_gallery() {
        let base = TickToken {
            gallery: GalleryId(1),
            generation: 3,
        };
        assert_ne!(
            base,
            TickToken {
                generation: 4,
                ..base
            }
        );
        assert_ne!(
            base,
            TickToken {
                gallery: GalleryId(2),
                ..base
            }
        );
    }
}
