// SPDX-License-Identifier: MPL-2.0
//! Story viewer use case.
//!
//! - [`ItemTimer`]: pausable per-item countdown
//! - [`GestureTracker`]: pointer events to viewer inputs
//! - [`StoryViewer`]: the session tying the state machine to its ports

mod gesture;
mod session;
mod timer;

pub use gesture::{GestureSettings, GestureTracker, Position, DEFAULT_DRAG_SLOP_PX};
pub use session::{MediaStatus, Neighbors, StoryViewer, ViewerSettings};
pub use timer::ItemTimer;
