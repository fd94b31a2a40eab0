// SPDX-License-Identifier: MPL-2.0
//! JSON export of the transition history.

use std::fs;
use std::io;
use std::path::Path;

use chrono::Local;
use serde::Serialize;

use super::events::TransitionRecord;

/// Exported history document.
#[derive(Debug, Serialize)]
pub struct HistoryReport<'a> {
    /// Local time of the export, RFC 3339.
    pub generated_at: String,
    pub app_version: &'static str,
    pub transitions: Vec<&'a TransitionRecord>,
}

impl<'a> HistoryReport<'a> {
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = &'a TransitionRecord>) -> Self {
        Self {
            generated_at: Local::now().to_rfc3339(),
            app_version: env!("CARGO_PKG_VERSION"),
            transitions: records.into_iter().collect(),
        }
    }
}

/// Generates a default filename for history exports.
///
/// Format: `talka_history_YYYYMMDD_HHMMSS.json`
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!("talka_history_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Serializes the records as a pretty-printed report.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json<'a>(
    records: impl IntoIterator<Item = &'a TransitionRecord>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&HistoryReport::new(records))
}

/// Writes the records to `path` as JSON.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn export_json<'a>(
    path: &Path,
    records: impl IntoIterator<Item = &'a TransitionRecord>,
) -> crate::error::Result<()> {
    let json = to_json(records)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    write_atomic(path, &json)?;
    Ok(())
}

/// Writes content through a temporary file and renames it into place.
///
/// # Errors
///
/// Returns an error if writing or renaming fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}
