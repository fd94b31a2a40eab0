// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Single source of truth for the defaults and bounds used across the
//! application. The domain newtypes clamp to the same bounds; tests keep the
//! two in sync.
//!
//! # Categories
//!
//! - **Stories**: Item display duration
//! - **Gestures**: Hold delay, swipe threshold, tap zones
//! - **Diagnostics**: Transition history size
//! - **Shell**: Tick rate and toast lifetime

// ==========================================================================
// Story Defaults
// ==========================================================================

/// Default display duration of an image item (in milliseconds).
pub const DEFAULT_IMAGE_DURATION_MS: u64 = 5_000;

/// Minimum display duration (in milliseconds).
pub const MIN_IMAGE_DURATION_MS: u64 = 1_000;

/// Maximum display duration (in milliseconds).
pub const MAX_IMAGE_DURATION_MS: u64 = 60_000;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Press duration before a still press pauses playback (in milliseconds).
pub const DEFAULT_HOLD_DELAY_MS: u64 = 200;

/// Minimum hold delay (in milliseconds).
pub const MIN_HOLD_DELAY_MS: u64 = 50;

/// Maximum hold delay (in milliseconds).
pub const MAX_HOLD_DELAY_MS: u64 = 1_000;

/// Horizontal distance that turns a drag into a swipe (logical pixels).
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 80.0;

/// Minimum swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 20.0;

/// Maximum swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

/// Width share of the "back" tap zone, in percent.
pub const DEFAULT_TAP_BACK_ZONE_PERCENT: f32 = 33.0;

/// Minimum "back" zone share.
pub const MIN_TAP_BACK_ZONE_PERCENT: f32 = 10.0;

/// Maximum "back" zone share.
pub const MAX_TAP_BACK_ZONE_PERCENT: f32 = 90.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of transitions kept in the diagnostics history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// Minimum history capacity.
pub const MIN_HISTORY_CAPACITY: usize = 16;

/// Maximum history capacity.
pub const MAX_HISTORY_CAPACITY: usize = 4096;

// ==========================================================================
// Shell Defaults
// ==========================================================================

/// Tick interval while the viewer is open (in milliseconds, ~60 Hz).
pub const VIEWER_TICK_MS: u64 = 16;

/// Lifetime of a toast notification (in seconds).
pub const TOAST_DURATION_SECS: u64 = 3;

/// Maximum number of toasts shown at once.
pub const MAX_VISIBLE_TOASTS: usize = 3;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Story duration validation
    assert!(MIN_IMAGE_DURATION_MS > 0);
    assert!(DEFAULT_IMAGE_DURATION_MS >= MIN_IMAGE_DURATION_MS);
    assert!(DEFAULT_IMAGE_DURATION_MS <= MAX_IMAGE_DURATION_MS);

    // Hold delay validation
    assert!(MIN_HOLD_DELAY_MS > 0);
    assert!(DEFAULT_HOLD_DELAY_MS >= MIN_HOLD_DELAY_MS);
    assert!(DEFAULT_HOLD_DELAY_MS <= MAX_HOLD_DELAY_MS);

    // Swipe validation
    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);

    // Tap zone validation
    assert!(MIN_TAP_BACK_ZONE_PERCENT > 0.0);
    assert!(MAX_TAP_BACK_ZONE_PERCENT < 100.0);
    assert!(DEFAULT_TAP_BACK_ZONE_PERCENT >= MIN_TAP_BACK_ZONE_PERCENT);
    assert!(DEFAULT_TAP_BACK_ZONE_PERCENT <= MAX_TAP_BACK_ZONE_PERCENT);

    // History validation
    assert!(MIN_HISTORY_CAPACITY > 0);
    assert!(DEFAULT_HISTORY_CAPACITY >= MIN_HISTORY_CAPACITY);
    assert!(DEFAULT_HISTORY_CAPACITY <= MAX_HISTORY_CAPACITY);

    // Shell validation
    assert!(VIEWER_TICK_MS > 0);
    assert!(VIEWER_TICK_MS < MIN_HOLD_DELAY_MS);
    assert!(MAX_VISIBLE_TOASTS > 0);
};
