// SPDX-License-Identifier: MPL-2.0
use std::fs;

use talka_stories::application::port::CollectionProvider;
use talka_stories::config::{self, Config, DEFAULT_IMAGE_DURATION_MS, MAX_SWIPE_THRESHOLD_PX};
use talka_stories::i18n::fluent::I18n;
use talka_stories::infrastructure::MockCatalog;
use talka_stories::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("viewer-close"), "Close");

    let mut french = loaded;
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config");

    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("viewer-close"), "Fermer");
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());

    let i18n = I18n::new(Some("fr".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn missing_settings_file_yields_defaults_without_warning() {
    let dir = tempdir().expect("temp dir");
    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert!(warning.is_none());
}

#[test]
fn corrupt_settings_file_falls_back_with_warning() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("settings.toml"), "[general\ntheme_mode = ").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn sectioned_settings_feed_viewer_settings() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[general]
theme_mode = "Dark"

[gestures]
swipe_threshold_px = 9000.0
"#,
    )
    .expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.general.theme_mode, ThemeMode::Dark);

    let settings = config.viewer_settings();
    assert_eq!(
        settings.image_duration.as_millis(),
        DEFAULT_IMAGE_DURATION_MS
    );
    assert_eq!(
        settings.gestures.swipe_threshold.value(),
        MAX_SWIPE_THRESHOLD_PX
    );
}

#[test]
fn save_with_override_round_trips_theme() {
    let dir = tempdir().expect("temp dir");
    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Light;

    config::save_with_override(&config, Some(dir.path().to_path_buf())).expect("save");
    let (loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
}

#[test]
fn catalog_file_resolves_relative_sources() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("catalog.toml");
    fs::write(
        &path,
        r#"
[[collections]]
owner = { id = "u1", handle = "mira", name = "Mira Okafor" }

[[collections.items]]
id = "mira-1"
kind = "image"
source = "stories/1.jpg"
duration_ms = 4000

[[collections.items]]
id = "mira-2"
kind = "image"
source = "mock://mira/2"
"#,
    )
    .expect("write");

    let collections = MockCatalog::from_file(&path)
        .collections()
        .expect("catalog parses");

    assert_eq!(collections.len(), 1);
    let items = collections[0].items();
    assert_eq!(items.len(), 2);
    assert_eq!(
        items[0].source.as_str(),
        dir.path().join("stories/1.jpg").to_string_lossy()
    );
    assert_eq!(items[1].source.as_str(), "mock://mira/2");
}

#[test]
fn catalog_with_empty_collection_is_rejected() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("catalog.toml");
    fs::write(
        &path,
        r#"
[[collections]]
owner = { id = "u1", handle = "mira", name = "Mira Okafor" }
"#,
    )
    .expect("write");

    assert!(MockCatalog::from_file(&path).collections().is_err());
}
