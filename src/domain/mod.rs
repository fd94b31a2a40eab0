// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core story logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics value types ([`HistoryCapacity`](diagnostics::HistoryCapacity))
//! - [`error`]: Domain error types ([`StoryError`](error::StoryError),
//!   [`MediaError`](error::MediaError))
//! - [`story`]: Story types ([`Collection`](story::Collection),
//!   [`MediaItem`](story::MediaItem), [`DisplayDuration`](story::DisplayDuration))
//! - [`viewer`]: The viewer state machine ([`ViewerState`](viewer::ViewerState))
//!   and its progress projection

pub mod diagnostics;
pub mod error;
pub mod story;
pub mod viewer;
