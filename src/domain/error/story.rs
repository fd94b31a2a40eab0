// SPDX-License-Identifier: MPL-2.0
//! Errors raised while building or driving a story viewer.

use std::fmt;

/// Reasons a viewer cannot be opened or an action cannot be taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryError {
    /// The host supplied no collections at all.
    NoCollections,

    /// A collection has no items.
    EmptyCollection {
        /// Handle of the collection owner.
        owner: String,
    },

    /// The initial collection index is outside the supplied list.
    StartOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of collections supplied.
        len: usize,
    },

    /// A reply was submitted without any text.
    EmptyReply,

    /// An action was requested after the viewer closed.
    ViewerClosed,
}

impl StoryError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            StoryError::NoCollections => "error-story-no-collections",
            StoryError::EmptyCollection { .. } => "error-story-empty-collection",
            StoryError::StartOutOfRange { .. } => "error-story-start-out-of-range",
            StoryError::EmptyReply => "error-story-empty-reply",
            StoryError::ViewerClosed => "error-story-viewer-closed",
        }
    }
}

impl fmt::Display for StoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoryError::NoCollections => write!(f, "No story collections to show"),
            StoryError::EmptyCollection { owner } => {
                write!(f, "Story collection of @{owner} has no items")
            }
            StoryError::StartOutOfRange { index, len } => {
                write!(f, "Start index {index} is out of range for {len} collections")
            }
            StoryError::EmptyReply => write!(f, "Reply text is empty"),
            StoryError::ViewerClosed => write!(f, "Story viewer is closed"),
        }
    }
}

impl std::error::Error for StoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_owner() {
        let err = StoryError::EmptyCollection {
            owner: "mira".to_string(),
        };
        assert!(err.to_string().contains("@mira"));
    }

    #[test]
    fn display_mentions_index_and_len() {
        let err = StoryError::StartOutOfRange { index: 4, len: 2 };
        let message = err.to_string();
        assert!(message.contains('4'));
        assert!(message.contains('2'));
    }

    #[test]
    fn i18n_keys_are_prefixed() {
        for err in [
            StoryError::NoCollections,
            StoryError::EmptyReply,
            StoryError::ViewerClosed,
        ] {
            assert!(err.i18n_key().starts_with("error-story-"));
        }
    }
}
