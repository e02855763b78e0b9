//! Flat-file persistence for the library.
//!
//! The library lives in one directory as two JSON arrays, one for colors
//! and one for palettes. A missing file is an empty list.
//!
//! Saving writes both lists to temporary files first and then renames
//! them over the old ones, so a failed write leaves the previous files
//! intact. The two renames are separate steps: a crash between them can
//! still pair new colors with old palettes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::library::Library;

/// File holding the saved colors.
pub const COLORS_FILE: &str = "huekit_saved_colors.json";

/// File holding the saved palettes.
pub const PALETTES_FILE: &str = "huekit_saved_palettes.json";

/// Reads and writes a [`Library`] in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryStore {
    dir: PathBuf,
}

impl LibraryStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn colors_path(&self) -> PathBuf {
        self.dir.join(COLORS_FILE)
    }

    #[must_use]
    pub fn palettes_path(&self) -> PathBuf {
        self.dir.join(PALETTES_FILE)
    }

    /// Load both lists. Stored colors come back as lowercase `#rrggbb`.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read or parsed, or
    /// holds a color that is not hex.
    pub fn load(&self) -> Result<Library> {
        let mut library = Library {
            colors: read_list(&self.colors_path())?,
            palettes: read_list(&self.palettes_path())?,
        };
        library.normalize_colors()?;
        tracing::debug!(
            colors = library.colors.len(),
            palettes = library.palettes.len(),
            dir = %self.dir.display(),
            "library loaded"
        );
        Ok(library)
    }

    /// Write both lists, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or either file cannot be written.
    pub fn save(&self, library: &Library) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let colors = self.colors_path();
        let palettes = self.palettes_path();
        let colors_tmp = write_temp(&colors, &library.colors)?;
        let palettes_tmp = match write_temp(&palettes, &library.palettes) {
            Ok(path) => path,
            Err(err) => {
                let _ = fs::remove_file(&colors_tmp);
                return Err(err);
            }
        };
        fs::rename(&colors_tmp, &colors)?;
        fs::rename(&palettes_tmp, &palettes)?;
        tracing::debug!(
            colors = library.colors.len(),
            palettes = library.palettes.len(),
            dir = %self.dir.display(),
            "library saved"
        );
        Ok(())
    }
}

fn read_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    match fs::read_to_string(path) {
        Ok(text) if text.trim().is_empty() => Ok(Vec::new()),
        Ok(text) => Ok(serde_json::from_str(&text)?),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no saved file, starting empty");
            Ok(Vec::new())
        }
        Err(err) => Err(err.into()),
    }
}

/// Write `items` next to `path` under a temporary name and return that name.
fn write_temp<T: Serialize>(path: &Path, items: &[T]) -> Result<PathBuf> {
    let json = serde_json::to_string(items)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    Ok(tmp)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
