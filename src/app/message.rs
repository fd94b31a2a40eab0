// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::story_tray;
use crate::ui::story_viewer;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Tray(story_tray::Message),
    Viewer(story_viewer::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TALKA_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Optional catalog file; the built-in demo stories are used otherwise.
    pub catalog: Option<String>,
    /// Open the viewer on this collection right away.
    pub start: Option<usize>,
    /// Directory receiving a JSON transition history each time the viewer
    /// closes.
    pub history_dir: Option<String>,
}
