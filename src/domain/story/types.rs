// SPDX-License-Identifier: MPL-2.0
//! Core story types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.
//! Collections are built by a provider before the viewer opens and are never
//! mutated by the viewer.

use super::newtypes::DisplayDuration;
use crate::domain::error::StoryError;
use std::fmt;
use std::time::{Duration, SystemTime};

/// Unique identifier of a story item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaId(String);

impl MediaId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to where the media lives (a path or URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaSource(String);

impl MediaSource {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of media a story item carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Still image shown for its display duration.
    Image,
    /// Video clip. `length` is the natural playback length when the provider
    /// already knows it; the media controller may report it on load instead.
    Video { length: Option<Duration> },
}

impl MediaKind {
    #[must_use]
    pub fn is_video(&self) -> bool {
        matches!(self, MediaKind::Video { .. })
    }
}

/// Normalized overlay anchor, `(0.0, 0.0)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayPosition {
    x: f32,
    y: f32,
}

impl OverlayPosition {
    /// Creates a position, clamping both coordinates into `0.0..=1.0`.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        let clamp = |v: f32| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.5 };
        Self {
            x: clamp(x),
            y: clamp(y),
        }
    }

    #[must_use]
    pub fn x(self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> f32 {
        self.y
    }
}

impl Default for OverlayPosition {
    fn default() -> Self {
        Self { x: 0.5, y: 0.5 }
    }
}

/// Text drawn on top of a story item.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub text: String,
    pub position: OverlayPosition,
}

/// One displayable unit within a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub id: MediaId,
    pub kind: MediaKind,
    pub source: MediaSource,
    /// Per-item display duration. `None` uses the viewer's default.
    pub duration: Option<DisplayDuration>,
    pub overlay: Option<Overlay>,
}

impl MediaItem {
    /// Creates an image item with the viewer's default duration.
    #[must_use]
    pub fn image(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: MediaId::new(id),
            kind: MediaKind::Image,
            source: MediaSource::new(source),
            duration: None,
            overlay: None,
        }
    }

    /// Creates a video item.
    #[must_use]
    pub fn video(id: impl Into<String>, source: impl Into<String>, length: Option<Duration>) -> Self {
        Self {
            id: MediaId::new(id),
            kind: MediaKind::Video { length },
            source: MediaSource::new(source),
            duration: None,
            overlay: None,
        }
    }

    /// Sets an explicit display duration.
    #[must_use]
    pub fn with_duration(mut self, duration: DisplayDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Attaches an overlay caption.
    #[must_use]
    pub fn with_overlay(mut self, text: impl Into<String>, position: OverlayPosition) -> Self {
        self.overlay = Some(Overlay {
            text: text.into(),
            position,
        });
        self
    }

    /// Resolves how long this item should play.
    ///
    /// Videos use their natural length (from the item or as reported by the
    /// media pipeline) when `use_video_length` is set; everything else uses
    /// the item's own duration or `fallback`.
    #[must_use]
    pub fn playback_duration(
        &self,
        reported_length: Option<Duration>,
        fallback: DisplayDuration,
        use_video_length: bool,
    ) -> Duration {
        let display = self.duration.unwrap_or(fallback).as_duration();
        match self.kind {
            MediaKind::Video { length } if use_video_length => reported_length
                .or(length)
                .filter(|d| !d.is_zero())
                .unwrap_or(display),
            _ => display,
        }
    }
}

/// The person a collection belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub id: String,
    pub handle: String,
    pub display_name: String,
    pub avatar: MediaSource,
}

impl Owner {
    #[must_use]
    pub fn new(id: impl Into<String>, handle: impl Into<String>, display_name: impl Into<String>) -> Self {
        let id = id.into();
        let avatar = MediaSource::new(format!("avatars/{id}.png"));
        Self {
            id,
            handle: handle.into(),
            display_name: display_name.into(),
            avatar,
        }
    }

    /// Replaces the default avatar location.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = MediaSource::new(avatar);
        self
    }

    /// One or two uppercase initials for avatar placeholders.
    #[must_use]
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Ordered, non-empty sequence of items from one owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    owner: Owner,
    items: Vec<MediaItem>,
    has_unseen: bool,
    posted_at: SystemTime,
}

impl Collection {
    /// Creates a collection, rejecting an empty item list.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::EmptyCollection`] if `items` is empty.
    pub fn new(owner: Owner, items: Vec<MediaItem>) -> Result<Self, StoryError> {
        if items.is_empty() {
            return Err(StoryError::EmptyCollection {
                owner: owner.handle.clone(),
            });
        }
        Ok(Self {
            owner,
            items,
            has_unseen: true,
            posted_at: SystemTime::now(),
        })
    }

    /// Sets whether the collection holds unseen items.
    #[must_use]
    pub fn with_unseen(mut self, has_unseen: bool) -> Self {
        self.has_unseen = has_unseen;
        self
    }

    /// Sets when the collection was posted.
    #[must_use]
    pub fn posted_at(mut self, at: SystemTime) -> Self {
        self.posted_at = at;
        self
    }

    #[must_use]
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Items in presentation order.
    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    /// Number of items, always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn has_unseen(&self) -> bool {
        self.has_unseen
    }

    #[must_use]
    pub fn posted(&self) -> SystemTime {
        self.posted_at
    }

    /// Marks every item as seen.
    pub fn mark_seen(&mut self) {
        self.has_unseen = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> Owner {
        Owner::new("u1", "mira", "Mira")
    }

    #[test]
    fn owner_initials_use_first_two_words() {
        assert_eq!(Owner::new("u2", "theo", "théo van dijk").initials(), "TV");
        assert_eq!(owner().initials(), "M");
    }

    #[test]
    fn collection_rejects_empty_items() {
        let result = Collection::new(owner(), Vec::new());
        assert_eq!(
            result,
            Err(StoryError::EmptyCollection {
                owner: "mira".to_string()
            })
        );
    }

    #[test]
    fn collection_preserves_order() {
        let items = vec![MediaItem::image("a", "a.jpg"), MediaItem::image("b", "b.jpg")];
        let collection = Collection::new(owner(), items).expect("non-empty");
        let ids: Vec<_> = collection.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(collection.has_unseen());
    }

    #[test]
    fn mark_seen_clears_flag() {
        let mut collection =
            Collection::new(owner(), vec![MediaItem::image("a", "a.jpg")]).expect("non-empty");
        collection.mark_seen();
        assert!(!collection.has_unseen());
    }

    #[test]
    fn image_uses_own_duration_then_fallback() {
        let fallback = DisplayDuration::from_millis(5_000);
        let plain = MediaItem::image("a", "a.jpg");
        assert_eq!(
            plain.playback_duration(None, fallback, true),
            Duration::from_millis(5_000)
        );

        let timed = plain.with_duration(DisplayDuration::from_millis(3_000));
        assert_eq!(
            timed.playback_duration(Some(Duration::from_secs(9)), fallback, true),
            Duration::from_millis(3_000)
        );
    }

    #[test]
    fn video_prefers_reported_length() {
        let fallback = DisplayDuration::default();
        let video = MediaItem::video("v", "v.mp4", Some(Duration::from_secs(12)));
        assert_eq!(
            video.playback_duration(Some(Duration::from_secs(8)), fallback, true),
            Duration::from_secs(8)
        );
        assert_eq!(
            video.playback_duration(None, fallback, true),
            Duration::from_secs(12)
        );
    }

    #[test]
    fn video_uses_display_duration_when_length_disabled() {
        let fallback = DisplayDuration::from_millis(4_000);
        let video = MediaItem::video("v", "v.mp4", Some(Duration::from_secs(12)));
        assert_eq!(
            video.playback_duration(None, fallback, false),
            Duration::from_millis(4_000)
        );
    }

    #[test]
    fn video_zero_length_falls_back() {
        let fallback = DisplayDuration::from_millis(4_000);
        let video = MediaItem::video("v", "v.mp4", None);
        assert_eq!(
            video.playback_duration(Some(Duration::ZERO), fallback, true),
            Duration::from_millis(4_000)
        );
    }

    #[test]
    fn overlay_position_clamps() {
        let pos = OverlayPosition::new(-1.0, 2.0);
        assert_eq!(pos.x(), 0.0);
        assert_eq!(pos.y(), 1.0);
    }
}
