//! The saved library — colors and palettes the user chose to keep.
//!
//! [`Library`] is a plain in-memory model. It never touches the clock or
//! the filesystem on its own: callers pass the current time in
//! milliseconds and persist through [`LibraryStore`](crate::LibraryStore).
//!
//! Every way into the library (adding, importing a share token, loading a
//! saved file) goes through the same checks: trimmed non-blank names,
//! lowercase `#rrggbb` colors, and at least one color per palette.
//!
//! Ids are the creation time in milliseconds, as strings. Two items
//! created in the same millisecond get consecutive ids.

use std::cmp::Ordering;

use hue_color::hex_to_rgb;
use serde::{Deserialize, Serialize};

use crate::error::{LibraryError, Result};

/// A single saved color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedColor {
    pub id: String,
    /// Always lowercase `#rrggbb`.
    pub hex: String,
    pub name: String,
    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(default)]
    pub favorite: bool,
}

/// A saved palette: an ordered list of hex colors with a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPalette {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub colors: Vec<String>,
    pub timestamp: i64,
    #[serde(default)]
    pub favorite: bool,
}

/// What filtering and sorting need to know about a library item.
pub trait Entry {
    fn name(&self) -> &str;
    fn timestamp(&self) -> i64;
    fn is_favorite(&self) -> bool;
}

impl Entry for SavedColor {
    fn name(&self) -> &str {
        &self.name
    }
    fn timestamp(&self) -> i64 {
        self.timestamp
    }
    fn is_favorite(&self) -> bool {
        self.favorite
    }
}

impl Entry for SavedPalette {
    fn name(&self) -> &str {
        &self.name
    }
    fn timestamp(&self) -> i64 {
        self.timestamp
    }
    fn is_favorite(&self) -> bool {
        self.favorite
    }
}

// ---------------------------------------------------------------------------
// Filtering and sorting
// ---------------------------------------------------------------------------

/// Listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Newest,
    Oldest,
    /// Case-insensitive by name.
    Name,
}

impl SortMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Name => "name",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "newest" => Some(Self::Newest),
            "oldest" => Some(Self::Oldest),
            "name" => Some(Self::Name),
            _ => None,
        }
    }

    fn compare<E: Entry>(self, a: &E, b: &E) -> Ordering {
        match self {
            Self::Newest => b.timestamp().cmp(&a.timestamp()),
            Self::Oldest => a.timestamp().cmp(&b.timestamp()),
            Self::Name => a
                .name()
                .to_lowercase()
                .cmp(&b.name().to_lowercase())
                .then_with(|| a.name().cmp(b.name())),
        }
    }
}

/// Search text, favorites filter and sort order for a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryQuery {
    /// Case-insensitive substring of the name. Empty matches everything.
    pub search: String,
    pub favorites_only: bool,
    pub sort: SortMode,
}

impl LibraryQuery {
    #[must_use]
    pub fn matches<E: Entry>(&self, item: &E) -> bool {
        if self.favorites_only && !item.is_favorite() {
            return false;
        }
        item.name().to_lowercase().contains(&self.search.to_lowercase())
    }

    /// Matching items in query order. Items that compare equal keep their
    /// library order.
    #[must_use]
    pub fn apply<'a, E: Entry>(&self, items: &'a [E]) -> Vec<&'a E> {
        let mut out: Vec<&E> = items.iter().filter(|item| self.matches(*item)).collect();
        out.sort_by(|a, b| self.sort.compare(*a, *b));
        out
    }
}

// ---------------------------------------------------------------------------
// Library
// ---------------------------------------------------------------------------

/// Validate a hex color and return it as lowercase `#rrggbb`.
///
/// # Errors
///
/// [`LibraryError::InvalidHex`] when the text is not a 6-digit hex color.
pub fn normalize_hex(hex: &str) -> Result<String> {
    hex_to_rgb(hex.trim())
        .map(|rgb| rgb.to_hex())
        .ok_or_else(|| LibraryError::InvalidHex(hex.to_string()))
}

/// Trim a name, rejecting one that is blank.
pub(crate) fn clean_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LibraryError::EmptyName);
    }
    Ok(name.to_string())
}

/// Normalize palette colors, skipping blank entries. At least one must
/// remain.
pub(crate) fn clean_colors<S: AsRef<str>>(colors: &[S]) -> Result<Vec<String>> {
    let colors = colors
        .iter()
        .map(|c| c.as_ref())
        .filter(|c| !c.trim().is_empty())
        .map(normalize_hex)
        .collect::<Result<Vec<_>>>()?;
    if colors.is_empty() {
        return Err(LibraryError::EmptyPalette);
    }
    Ok(colors)
}

/// A trimmed description, or none when blank.
pub(crate) fn clean_description(description: &str) -> Option<String> {
    let description = description.trim();
    (!description.is_empty()).then(|| description.to_string())
}

/// The user's saved colors and palettes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    pub colors: Vec<SavedColor>,
    pub palettes: Vec<SavedPalette>,
}

impl Library {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.palettes.is_empty()
    }

    fn id_taken(&self, id: &str) -> bool {
        self.colors.iter().any(|c| c.id == id) || self.palettes.iter().any(|p| p.id == id)
    }

    fn next_id(&self, now: i64) -> String {
        let mut candidate = now;
        while self.id_taken(&candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    /// Save a color at the front of the list.
    ///
    /// # Errors
    ///
    /// [`LibraryError::EmptyName`] for a blank name,
    /// [`LibraryError::InvalidHex`] for a malformed color.
    pub fn add_color(&mut self, hex: &str, name: &str, now: i64) -> Result<&SavedColor> {
        let name = clean_name(name)?;
        let color = SavedColor {
            id: self.next_id(now),
            hex: normalize_hex(hex)?,
            name,
            timestamp: now,
            favorite: false,
        };
        self.colors.insert(0, color);
        Ok(&self.colors[0])
    }

    /// Save a palette at the front of the list. Blank color entries are
    /// skipped; a blank description is stored as none.
    ///
    /// # Errors
    ///
    /// [`LibraryError::EmptyName`], [`LibraryError::EmptyPalette`] when no
    /// colors remain, or [`LibraryError::InvalidHex`] for the first bad
    /// color.
    pub fn add_palette<S: AsRef<str>>(
        &mut self,
        name: &str,
        description: &str,
        colors: &[S],
        now: i64,
    ) -> Result<&SavedPalette> {
        let name = clean_name(name)?;
        let colors = clean_colors(colors)?;
        let palette = SavedPalette {
            id: self.next_id(now),
            name,
            description: clean_description(description),
            colors,
            timestamp: now,
            favorite: false,
        };
        self.palettes.insert(0, palette);
        Ok(&self.palettes[0])
    }

    #[must_use]
    pub fn color(&self, id: &str) -> Option<&SavedColor> {
        self.colors.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn palette(&self, id: &str) -> Option<&SavedPalette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    /// Remove a color, returning it.
    ///
    /// # Errors
    ///
    /// [`LibraryError::NotFound`] for an unknown id.
    pub fn delete_color(&mut self, id: &str) -> Result<SavedColor> {
        let pos = self
            .colors
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))?;
        Ok(self.colors.remove(pos))
    }

    /// Remove a palette, returning it.
    ///
    /// # Errors
    ///
    /// [`LibraryError::NotFound`] for an unknown id.
    pub fn delete_palette(&mut self, id: &str) -> Result<SavedPalette> {
        let pos = self
            .palettes
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))?;
        Ok(self.palettes.remove(pos))
    }

    /// Flip a color's favorite flag and return the new value.
    ///
    /// # Errors
    ///
    /// [`LibraryError::NotFound`] for an unknown id.
    pub fn toggle_favorite_color(&mut self, id: &str) -> Result<bool> {
        let color = self
            .colors
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))?;
        color.favorite = !color.favorite;
        Ok(color.favorite)
    }

    /// Flip a palette's favorite flag and return the new value.
    ///
    /// # Errors
    ///
    /// [`LibraryError::NotFound`] for an unknown id.
    pub fn toggle_favorite_palette(&mut self, id: &str) -> Result<bool> {
        let palette = self
            .palettes
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))?;
        palette.favorite = !palette.favorite;
        Ok(palette.favorite)
    }

    /// Append a shared color unless one with the same hex is already saved.
    /// The imported color is checked like [`Library::add_color`] and gets a
    /// fresh id. Returns whether it was added.
    ///
    /// # Errors
    ///
    /// [`LibraryError::EmptyName`] or [`LibraryError::InvalidHex`].
    pub fn import_color(&mut self, mut color: SavedColor, now: i64) -> Result<bool> {
        color.name = clean_name(&color.name)?;
        color.hex = normalize_hex(&color.hex)?;
        if self.colors.iter().any(|c| c.hex == color.hex) {
            return Ok(false);
        }
        color.id = self.next_id(now);
        self.colors.push(color);
        Ok(true)
    }

    /// Append a shared palette unless one with the same name is already
    /// saved. The imported palette is checked like
    /// [`Library::add_palette`] and gets a fresh id. Returns whether it was
    /// added.
    ///
    /// # Errors
    ///
    /// [`LibraryError::EmptyName`], [`LibraryError::EmptyPalette`] or
    /// [`LibraryError::InvalidHex`].
    pub fn import_palette(&mut self, mut palette: SavedPalette, now: i64) -> Result<bool> {
        palette.name = clean_name(&palette.name)?;
        palette.colors = clean_colors(&palette.colors)?;
        palette.description = palette.description.as_deref().and_then(clean_description);
        if self.palettes.iter().any(|p| p.name == palette.name) {
            return Ok(false);
        }
        palette.id = self.next_id(now);
        self.palettes.push(palette);
        Ok(true)
    }

    /// Bring every stored hex back to lowercase `#rrggbb`.
    ///
    /// # Errors
    ///
    /// [`LibraryError::InvalidHex`] for the first color that is not hex.
    pub(crate) fn normalize_colors(&mut self) -> Result<()> {
        for color in &mut self.colors {
            color.hex = normalize_hex(&color.hex)?;
        }
        for palette in &mut self.palettes {
            for hex in &mut palette.colors {
                *hex = normalize_hex(hex)?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
