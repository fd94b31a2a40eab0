// SPDX-License-Identifier: MPL-2.0
//! Viewer diagnostics.
//!
//! The session records every applied input in a memory-bounded
//! [`CircularBuffer`] of [`TransitionRecord`]s. The history can be exported
//! as JSON for offline inspection (`--diagnostics <file>`).

mod buffer;
mod events;
mod export;

pub use buffer::{CircularBuffer, HistoryCapacity};
pub use events::{CloseRecord, InputRecord, StateSnapshot, TransitionRecord};
pub use export::{export_json, generate_default_filename, to_json, write_atomic, HistoryReport};
