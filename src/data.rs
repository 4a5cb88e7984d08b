//! Filesystem locale-data backend.
//!
//! The resolver treats "which locales exist" as an external question; this
//! module answers it for the binary by listing locale data files in the
//! project's locales directory. One file per locale, file stem = locale id.

use anyhow::{Context, Result};
use std::path::Path;

/// File extensions recognized as locale data.
const LOCALE_EXTENSIONS: [&str; 3] = ["yml", "yaml", "json"];

/// Enumerate all locales present in a locales directory.
///
/// Returns the file stems of recognized locale data files, sorted, so "all"
/// resolves deterministically. Subdirectories are not descended into.
pub fn enumerate_locales(dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read locales directory {}", dir.display()))?;

    let mut locales = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read entry in {}", dir.display()))?
            .path();
        if !path.is_file() {
            continue;
        }
        let has_locale_ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| LOCALE_EXTENSIONS.contains(&ext));
        if !has_locale_ext {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            locales.push(stem.to_string());
        }
    }

    locales.sort();
    Ok(locales)
}
