// SPDX-License-Identifier: MPL-2.0
//! Media controller for the desktop preview shell.
//!
//! Validates that an item can be shown and tracks the playback state the
//! shell renders. Images are drawn by the view layer from their path; videos
//! are represented by their poster area and playback clock, the length being
//! taken from the catalog.

use std::path::Path;

use crate::application::port::{MediaController, MediaInfo};
use crate::domain::error::MediaError;
use crate::domain::story::{MediaId, MediaItem, MediaKind};

use super::mock_catalog::MOCK_SCHEME;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "bmp"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "mkv"];

/// Playback state of the preview pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Loaded,
    Playing,
    Paused,
    Released,
}

/// [`MediaController`] backed by the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct PreviewMedia {
    current: Option<MediaId>,
    state: PlaybackState,
}

impl PreviewMedia {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// The loaded item, if any.
    #[must_use]
    pub fn current(&self) -> Option<&MediaId> {
        self.current.as_ref()
    }

    /// Returns true if the source is drawn as a generated placeholder.
    #[must_use]
    pub fn is_placeholder(source: &str) -> bool {
        source.starts_with(MOCK_SCHEME)
    }

    fn check_source(item: &MediaItem) -> Result<(), MediaError> {
        let source = item.source.as_str();
        if Self::is_placeholder(source) {
            return Ok(());
        }

        let path = Path::new(source);
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let known = match item.kind {
            MediaKind::Image => IMAGE_EXTENSIONS,
            MediaKind::Video { .. } => VIDEO_EXTENSIONS,
        };
        if !known.contains(&extension.as_str()) {
            return Err(MediaError::UnsupportedFormat(source.to_string()));
        }
        if !path.is_file() {
            return Err(MediaError::NotFound(source.to_string()));
        }
        Ok(())
    }
}

impl MediaController for PreviewMedia {
    fn load(&mut self, item: &MediaItem) -> Result<MediaInfo, MediaError> {
        self.current = None;
        Self::check_source(item)?;

        self.current = Some(item.id.clone());
        self.state = PlaybackState::Loaded;
        let natural_length = match item.kind {
            MediaKind::Video { length } => length,
            MediaKind::Image => None,
        };
        Ok(MediaInfo { natural_length })
    }

    fn play(&mut self) {
        if self.current.is_some() {
            self.state = PlaybackState::Playing;
        }
    }

    fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    fn stop(&mut self) {
        if self.current.is_some() {
            self.state = PlaybackState::Loaded;
        }
    }

    fn release(&mut self) {
        self.current = None;
        self.state = PlaybackState::Released;
    }
}
