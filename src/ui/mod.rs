// SPDX-License-Identifier: MPL-2.0
//! User interface of the desktop host shell.
//!
//! Follows the Elm-style "state down, messages up" pattern: each screen
//! exposes a `Message` type and a `view` taking a borrowed `ViewContext`.
//!
//! # Screens
//!
//! - [`story_tray`] - Ringed avatars, one per collection
//! - [`story_viewer`] - Full story card with progress, gestures and replies
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod notifications;
pub mod story_tray;
pub mod story_viewer;
pub mod theming;
