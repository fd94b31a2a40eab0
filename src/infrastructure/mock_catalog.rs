// SPDX-License-Identifier: MPL-2.0
//! In-memory story catalog.
//!
//! Serves either the built-in demo stories or a TOML catalog file:
//!
//! ```toml
//! [[collections]]
//! owner = { id = "u1", handle = "mira", name = "Mira Okafor" }
//! posted_at = "2026-10-17T08:30:00Z"
//! unseen = true
//!
//! [[collections.items]]
//! id = "mira-1"
//! kind = "image"
//! source = "stories/mira/1.jpg"
//! duration_ms = 4000
//! overlay = { text = "Sunrise run", x = 0.5, y = 0.85 }
//!
//! [[collections.items]]
//! id = "mira-2"
//! kind = "video"
//! source = "stories/mira/2.mp4"
//! length_ms = 9000
//! ```
//!
//! Relative sources resolve against the catalog file's directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::application::port::CollectionProvider;
use crate::domain::story::{Collection, DisplayDuration, MediaItem, OverlayPosition, Owner};
use crate::error::{Error, Result};

/// URI scheme of built-in placeholder media.
pub const MOCK_SCHEME: &str = "mock://";

// =============================================================================
// Catalog DTOs
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    collections: Vec<CollectionEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CollectionEntry {
    owner: OwnerEntry,
    #[serde(default)]
    posted_at: Option<DateTime<Utc>>,
    #[serde(default = "default_unseen")]
    unseen: bool,
    #[serde(default)]
    items: Vec<ItemEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OwnerEntry {
    id: String,
    handle: String,
    name: String,
    #[serde(default)]
    avatar: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum KindEntry {
    Image,
    Video,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ItemEntry {
    id: String,
    kind: KindEntry,
    source: String,
    #[serde(default)]
    duration_ms: Option<u64>,
    #[serde(default)]
    length_ms: Option<u64>,
    #[serde(default)]
    overlay: Option<OverlayEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverlayEntry {
    text: String,
    #[serde(default = "default_overlay_x")]
    x: f32,
    #[serde(default = "default_overlay_y")]
    y: f32,
}

fn default_unseen() -> bool {
    true
}

fn default_overlay_x() -> f32 {
    0.5
}

fn default_overlay_y() -> f32 {
    0.5
}

impl ItemEntry {
    fn into_item(self, base_dir: Option<&Path>) -> MediaItem {
        let source = resolve_source(&self.source, base_dir);
        let mut item = match self.kind {
            KindEntry::Image => MediaItem::image(self.id, source),
            KindEntry::Video => {
                MediaItem::video(self.id, source, self.length_ms.map(Duration::from_millis))
            }
        };
        if let Some(ms) = self.duration_ms {
            item = item.with_duration(DisplayDuration::from_millis(ms));
        }
        if let Some(overlay) = self.overlay {
            item = item.with_overlay(overlay.text, OverlayPosition::new(overlay.x, overlay.y));
        }
        item
    }
}

impl CollectionEntry {
    fn into_collection(self, base_dir: Option<&Path>) -> Result<Collection> {
        let mut owner = Owner::new(self.owner.id, self.owner.handle, self.owner.name);
        if let Some(avatar) = self.owner.avatar {
            owner = owner.with_avatar(resolve_source(&avatar, base_dir));
        }
        let items = self
            .items
            .into_iter()
            .map(|item| item.into_item(base_dir))
            .collect();
        let mut collection = Collection::new(owner, items)?.with_unseen(self.unseen);
        if let Some(posted_at) = self.posted_at {
            collection = collection.posted_at(SystemTime::from(posted_at));
        }
        Ok(collection)
    }
}

fn resolve_source(source: &str, base_dir: Option<&Path>) -> String {
    if source.starts_with(MOCK_SCHEME) {
        return source.to_string();
    }
    match base_dir {
        Some(dir) if Path::new(source).is_relative() => {
            dir.join(source).to_string_lossy().into_owned()
        }
        _ => source.to_string(),
    }
}

// =============================================================================
// MockCatalog
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum CatalogSource {
    Builtin,
    File(PathBuf),
}

/// Collection provider over built-in demo data or a TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCatalog {
    source: CatalogSource,
}

impl MockCatalog {
    /// Catalog serving the built-in demo stories.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            source: CatalogSource::Builtin,
        }
    }

    /// Catalog reading a TOML file on every request.
    #[must_use]
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: CatalogSource::File(path.into()),
        }
    }

    /// Parses catalog TOML. Relative sources resolve against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] for malformed TOML and
    /// [`Error::Story`] for a collection without items.
    pub fn parse(content: &str, base_dir: Option<&Path>) -> Result<Vec<Collection>> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|err| Error::Catalog(err.to_string()))?;
        file.collections
            .into_iter()
            .map(|entry| entry.into_collection(base_dir))
            .collect()
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CollectionProvider for MockCatalog {
    fn collections(&self) -> Result<Vec<Collection>> {
        match &self.source {
            CatalogSource::Builtin => builtin_collections(SystemTime::now()),
            CatalogSource::File(path) => {
                let content = fs::read_to_string(path)?;
                let collections = Self::parse(&content, path.parent())?;
                tracing::info!(path = %path.display(), count = collections.len(), "catalog loaded");
                Ok(collections)
            }
        }
    }
}

// =============================================================================
// Built-in demo data
// =============================================================================

fn minutes_ago(now: SystemTime, minutes: u64) -> SystemTime {
    now.checked_sub(Duration::from_secs(minutes * 60))
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

fn mock(path: &str) -> String {
    format!("{MOCK_SCHEME}{path}")
}

fn builtin_collections(now: SystemTime) -> Result<Vec<Collection>> {
    let bottom = OverlayPosition::new(0.5, 0.85);
    let top = OverlayPosition::new(0.5, 0.15);

    Ok(vec![
        Collection::new(
            Owner::new("u-mira", "mira", "Mira Okafor"),
            vec![
                MediaItem::image("mira-1", mock("mira/sunrise")).with_overlay("6 km before coffee", bottom),
                MediaItem::image("mira-2", mock("mira/coffee"))
                    .with_duration(DisplayDuration::from_millis(3_000)),
                MediaItem::video("mira-3", mock("mira/harbour"), Some(Duration::from_secs(8)))
                    .with_overlay("harbour at 7am", top),
            ],
        )?
        .posted_at(minutes_ago(now, 42)),
        Collection::new(
            Owner::new("u-theo", "theo.vd", "Théo van Dijk"),
            vec![
                MediaItem::image("theo-1", mock("theo/studio")),
                MediaItem::image("theo-2", mock("theo/sketch")).with_overlay("new series, wip", bottom),
            ],
        )?
        .posted_at(minutes_ago(now, 3 * 60)),
        Collection::new(
            Owner::new("u-ana", "ana.lu", "Ana Lúcia"),
            vec![MediaItem::video("ana-1", mock("ana/concert"), Some(Duration::from_secs(12)))],
        )?
        .posted_at(minutes_ago(now, 9 * 60)),
        Collection::new(
            Owner::new("u-kenji", "kenji", "Kenji Mori"),
            vec![
                MediaItem::image("kenji-1", mock("kenji/ramen")),
                MediaItem::image("kenji-2", mock("kenji/station")),
                MediaItem::image("kenji-3", mock("kenji/night")).with_overlay("last train", top),
                MediaItem::image("kenji-4", mock("kenji/home")),
            ],
        )?
        .with_unseen(false)
        .posted_at(minutes_ago(now, 20 * 60)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::StoryError;
    use crate::domain::story::MediaKind;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
        [[collections]]
        owner = { id = "u1", handle = "mira", name = "Mira Okafor" }
        posted_at = "2026-10-17T08:30:00Z"

        [[collections.items]]
        id = "mira-1"
        kind = "image"
        source = "stories/1.jpg"
        duration_ms = 4000
        overlay = { text = "Sunrise run", y = 0.85 }

        [[collections.items]]
        id = "mira-2"
        kind = "video"
        source = "/abs/2.mp4"
        length_ms = 9000

        [[collections]]
        owner = { id = "u2", handle = "theo", name = "Theo" }
        unseen = false

        [[collections.items]]
        id = "theo-1"
        kind = "image"
        source = "mock://theo/1"
    "#;

    #[test]
    fn builtin_catalog_is_non_empty() {
        let collections = MockCatalog::builtin().collections().expect("builtin");
        assert!(collections.len() >= 3);
        assert!(collections.iter().all(|c| !c.is_empty()));
        assert!(collections.iter().any(|c| !c.has_unseen()));
    }

    #[test]
    fn parse_builds_collections_in_order() {
        let collections = MockCatalog::parse(SAMPLE, Some(Path::new("/data"))).expect("parses");
        assert_eq!(collections.len(), 2);

        let mira = &collections[0];
        assert_eq!(mira.owner().handle, "mira");
        assert!(mira.has_unseen());
        assert_eq!(mira.len(), 2);

        let first = mira.item(0).expect("first item");
        assert_eq!(
            first.source.as_str(),
            Path::new("/data").join("stories/1.jpg").to_string_lossy()
        );
        assert_eq!(first.duration.map(DisplayDuration::as_millis), Some(4_000));
        assert_eq!(first.overlay.as_ref().map(|o| o.text.as_str()), Some("Sunrise run"));

        let second = mira.item(1).expect("second item");
        assert_eq!(second.source.as_str(), "/abs/2.mp4");
        assert_eq!(
            second.kind,
            MediaKind::Video {
                length: Some(Duration::from_millis(9_000))
            }
        );

        let theo = &collections[1];
        assert!(!theo.has_unseen());
        assert_eq!(theo.item(0).map(|i| i.source.as_str()), Some("mock://theo/1"));
    }

    #[test]
    fn parse_rejects_empty_collection() {
        let content = r#"
            [[collections]]
            owner = { id = "u1", handle = "mira", name = "Mira" }
        "#;
        let result = MockCatalog::parse(content, None);
        assert!(matches!(
            result,
            Err(Error::Story(StoryError::EmptyCollection { .. }))
        ));
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        let content = r#"
            [[collections]]
            owner = { id = "u1", handle = "mira", name = "Mira" }
            [[collections.items]]
            id = "x"
            kind = "hologram"
            source = "x"
        "#;
        assert!(matches!(MockCatalog::parse(content, None), Err(Error::Catalog(_))));
    }

    #[test]
    fn file_catalog_reads_from_disk() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("catalog.toml");
        fs::write(&path, SAMPLE).expect("write catalog");

        let collections = MockCatalog::from_file(&path).collections().expect("loads");
        assert_eq!(collections.len(), 2);
        let source = collections[0].item(0).map(|i| i.source.to_string());
        assert_eq!(
            source,
            Some(dir.path().join("stories/1.jpg").to_string_lossy().into_owned())
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = MockCatalog::from_file("/definitely/not/here.toml").collections();
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
