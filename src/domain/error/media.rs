// SPDX-License-Identifier: MPL-2.0
//! Media loading errors.
//!
//! A failed load never stops the viewer: the session keeps its timer and
//! navigation running and only the content area shows a placeholder.

use std::fmt;

/// Reasons a story item's media could not be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// The media source does not exist.
    NotFound(String),

    /// The media source exists but its format is not supported.
    UnsupportedFormat(String),

    /// The media pipeline failed while loading or playing.
    Playback(String),
}

impl MediaError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            MediaError::NotFound(_) => "error-media-not-found",
            MediaError::UnsupportedFormat(_) => "error-media-unsupported-format",
            MediaError::Playback(_) => "error-media-playback",
        }
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::NotFound(source) => write!(f, "Media not found: {source}"),
            MediaError::UnsupportedFormat(source) => {
                write!(f, "Unsupported media format: {source}")
            }
            MediaError::Playback(msg) => write!(f, "Playback failed: {msg}"),
        }
    }
}

impl std::error::Error for MediaError {}
