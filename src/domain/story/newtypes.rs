// SPDX-License-Identifier: MPL-2.0
//! Story newtypes.
//!
//! Type-safe wrappers for the timing and gesture values the viewer works
//! with, ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Display Duration
// =============================================================================

/// Display duration bounds in milliseconds (1 s to 60 s).
pub mod duration_bounds {
    /// Minimum display duration in milliseconds.
    pub const MIN_MS: u64 = 1_000;
    /// Maximum display duration in milliseconds.
    pub const MAX_MS: u64 = 60_000;
    /// Default display duration in milliseconds.
    pub const DEFAULT_MS: u64 = 5_000;
}

/// How long a story item stays on screen before auto-advancing.
///
/// # Example
///
/// ```
/// use talka_stories::domain::story::DisplayDuration;
///
/// let duration = DisplayDuration::from_millis(3_000);
/// assert_eq!(duration.as_millis(), 3_000);
///
/// // Values outside range are clamped
/// assert_eq!(DisplayDuration::from_millis(10).as_millis(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayDuration(u64);

impl DisplayDuration {
    /// Creates a display duration, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(duration_bounds::MIN_MS, duration_bounds::MAX_MS))
    }

    /// Creates a display duration from a [`Duration`], clamping to the valid range.
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Self::from_millis(millis)
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self(duration_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Swipe Threshold
// =============================================================================

/// Swipe threshold bounds in logical pixels.
pub mod swipe_bounds {
    /// Minimum horizontal distance for a swipe.
    pub const MIN_PX: f32 = 20.0;
    /// Maximum horizontal distance for a swipe.
    pub const MAX_PX: f32 = 400.0;
    /// Default horizontal distance for a swipe.
    pub const DEFAULT_PX: f32 = 80.0;
}

/// Horizontal drag distance a release must reach to count as a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping to the valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if !px.is_finite() {
            return Self::default();
        }
        Self(px.clamp(swipe_bounds::MIN_PX, swipe_bounds::MAX_PX))
    }

    /// Returns the threshold in pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if the given horizontal distance reaches the threshold.
    #[must_use]
    pub fn is_reached_by(self, delta_x: f32) -> bool {
        delta_x.abs() >= self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_bounds::DEFAULT_PX)
    }
}

// =============================================================================
// Tap Zone Split
// =============================================================================

/// Tap zone split bounds, as a percentage of the item width.
pub mod tap_zone_bounds {
    /// Minimum width of the "back" zone.
    pub const MIN_PERCENT: f32 = 10.0;
    /// Maximum width of the "back" zone.
    pub const MAX_PERCENT: f32 = 90.0;
    /// Default width of the "back" zone.
    pub const DEFAULT_PERCENT: f32 = 33.0;
}

/// Which side of the item a tap landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapZone {
    /// The "back" zone on the left.
    Left,
    /// The "forward" zone covering the rest of the item.
    Right,
}

/// Fraction of the item width, measured from the left edge, that acts as the
/// "back" tap zone. Everything to the right of it is the "forward" zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapZoneSplit(f32);

impl TapZoneSplit {
    /// Creates a new split from a percentage, clamping to the valid range.
    #[must_use]
    pub fn from_percent(percent: f32) -> Self {
        if !percent.is_finite() {
            return Self::default();
        }
        Self(percent.clamp(tap_zone_bounds::MIN_PERCENT, tap_zone_bounds::MAX_PERCENT))
    }

    /// Returns the split as a percentage.
    #[must_use]
    pub fn percent(self) -> f32 {
        self.0
    }

    /// Classifies a tap at `x` within an area of the given `width`.
    ///
    /// A degenerate width counts every tap as forward.
    #[must_use]
    pub fn classify(self, x: f32, width: f32) -> TapZone {
        if width <= 0.0 || !width.is_finite() {
            return TapZone::Right;
        }
        if x < width * (self.0 / 100.0) {
            TapZone::Left
        } else {
            TapZone::Right
        }
    }
}

impl Default for TapZoneSplit {
    fn default() -> Self {
        Self(tap_zone_bounds::DEFAULT_PERCENT)
    }
}

// =============================================================================
// Hold Delay
// =============================================================================

/// Hold delay bounds in milliseconds.
pub mod hold_bounds {
    /// Minimum press duration before it counts as a hold.
    pub const MIN_MS: u64 = 50;
    /// Maximum press duration before it counts as a hold.
    pub const MAX_MS: u64 = 1_000;
    /// Default press duration before it counts as a hold.
    pub const DEFAULT_MS: u64 = 200;
}

/// Press duration after which a press becomes a hold (and pauses playback).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldDelay(u64);

impl HoldDelay {
    /// Creates a new hold delay, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(hold_bounds::MIN_MS, hold_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for HoldDelay {
    fn default() -> Self {
        Self(hold_bounds::DEFAULT_MS)
    }
}
