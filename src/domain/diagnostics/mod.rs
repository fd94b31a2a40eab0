// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`HistoryCapacity`]: how many viewer transitions are kept for export

mod newtypes;

pub use newtypes::{history_capacity_bounds, HistoryCapacity};
