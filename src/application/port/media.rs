// SPDX-License-Identifier: MPL-2.0
//! Media control port definition.
//!
//! This module defines the [`MediaController`] trait, the small platform
//! capability the viewer uses to show, play and pause an item's media.
//! The viewer only issues commands; buffering and decoding belong to the
//! implementation.
//!
//! # Lifecycle
//!
//! 1. `load()` when an item becomes active
//! 2. `play()` / `pause()` as the viewer is held and released
//! 3. `stop()` before the next item is loaded
//! 4. `release()` once, when the viewer closes or is dropped

use crate::domain::error::MediaError;
use crate::domain::story::MediaItem;
use std::time::Duration;

/// Information reported by the media pipeline after a successful load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaInfo {
    /// Natural playback length, for videos whose length is known once loaded.
    pub natural_length: Option<Duration>,
}

/// Port for controlling the active item's media.
pub trait MediaController {
    /// Prepares the item's media for display.
    ///
    /// # Errors
    ///
    /// Returns a [`MediaError`] when the source cannot be shown. The viewer
    /// keeps running; only the content area degrades.
    fn load(&mut self, item: &MediaItem) -> Result<MediaInfo, MediaError>;

    /// Starts or resumes playback of the loaded media.
    fn play(&mut self);

    /// Pauses playback, keeping the current position.
    fn pause(&mut self);

    /// Stops playback of the loaded media.
    fn stop(&mut self);

    /// Releases every resource held for playback.
    fn release(&mut self);
}

/// Media controller that accepts everything and does nothing.
///
/// Useful for hosts that render media themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMedia;

impl MediaController for NullMedia {
    fn load(&mut self, _item: &MediaItem) -> Result<MediaInfo, MediaError> {
        Ok(MediaInfo::default())
    }

    fn play(&mut self) {}

    fn pause(&mut self) {}

    fn stop(&mut self) {}

    fn release(&mut self) {}
}
