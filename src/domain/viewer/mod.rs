// SPDX-License-Identifier: MPL-2.0
//! Story viewer domain logic.
//!
//! - [`machine`]: the Playing / Paused / Closed state machine
//! - [`progress`]: the per-item progress segment projection

pub mod machine;
pub mod progress;

pub use machine::{
    CloseReason, Cursor, Input, StoryLayout, SwipeDirection, Transition, ViewerState,
};
pub use progress::{segments, SegmentState};
