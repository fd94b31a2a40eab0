// SPDX-License-Identifier: MPL-2.0
//! Story domain types.
//!
//! Media items, their owners and the collections they are grouped into,
//! plus the bounded timing and gesture values the viewer uses.

pub mod newtypes;
pub mod types;

pub use newtypes::{
    duration_bounds, hold_bounds, swipe_bounds, tap_zone_bounds, DisplayDuration, HoldDelay,
    SwipeThreshold, TapZone, TapZoneSplit,
};
pub use types::{
    Collection, MediaId, MediaItem, MediaKind, MediaSource, Overlay, OverlayPosition, Owner,
};
