// SPDX-License-Identifier: MPL-2.0
//! `talka_stories` is the story and reel viewer of the Talka client.
//!
//! The viewer core lives in [`domain`] (state machine, progress) and
//! [`application`] (the session that drives media, timers and the host). The
//! Iced shell in [`app`] and [`ui`] hosts it on the desktop with a tray of
//! demo stories, localization through Fluent and persisted settings.

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
