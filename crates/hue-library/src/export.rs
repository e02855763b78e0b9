//! JSON export of the whole library.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::library::{Library, SavedColor, SavedPalette};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LibraryExport<'a> {
    colors: &'a [SavedColor],
    palettes: &'a [SavedPalette],
    exported_at: String,
}

/// Pretty-printed export document:
/// `{ "colors": [...], "palettes": [...], "exportedAt": "<ISO 8601>" }`.
///
/// # Errors
///
/// Only if JSON serialization fails.
pub fn export_json(library: &Library, now: DateTime<Utc>) -> Result<String> {
    let doc = LibraryExport {
        colors: &library.colors,
        palettes: &library.palettes,
        exported_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Suggested file name for an export made at `now`.
#[must_use]
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("huekit-library-{}.json", now.timestamp_millis())
}
