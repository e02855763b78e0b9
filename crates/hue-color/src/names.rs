// SPDX-License-Identifier: MIT
//
// Nearest named color — "what would a person call this?"
//
// A linear scan over the named-color table by Euclidean distance in RGB.
// RGB distance is not perceptual, but the table is small and coarse enough
// that the answer reads right, and the metric keeps results exact and easy
// to reason about (`#010101` is `sqrt(3)` from Black, full stop).
//
// The lookup sits behind the `ColorNamer` trait so a different source of
// names (a remote naming service, a localized table) can replace the
// built-in table without touching callers.

use crate::color::Rgb;
use crate::hex::hex_to_rgb;
use crate::named::{NAMED_COLORS, NamedColor};

/// Name reported when the query is not a valid color.
pub const UNKNOWN_NAME: &str = "Unknown";

/// The result of a name lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMatch {
    pub name: String,
    /// Distance from the query to the matched color (0 for exact hits).
    pub distance: f64,
    /// The matched color, lowercase `#rrggbb`, when the source provides it.
    pub hex: Option<String>,
}

impl ColorMatch {
    /// The "Unknown" result. A valid answer, not an error.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            distance: 0.0,
            hex: None,
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_NAME && self.hex.is_none()
    }

    #[must_use]
    pub fn is_exact(&self) -> bool {
        !self.is_unknown() && self.distance == 0.0
    }
}

/// A source of human names for colors.
pub trait ColorNamer {
    /// Name an RGB color.
    fn name_rgb(&self, rgb: Rgb) -> ColorMatch;

    /// Name a hex color. Invalid hex yields [`ColorMatch::unknown`].
    fn name_hex(&self, hex: &str) -> ColorMatch {
        hex_to_rgb(hex).map_or_else(ColorMatch::unknown, |rgb| self.name_rgb(rgb))
    }
}

/// Names colors from a fixed, ordered table.
#[derive(Debug, Clone, Copy)]
pub struct LocalNamer {
    table: &'static [NamedColor],
}

impl Default for LocalNamer {
    fn default() -> Self {
        Self { table: NAMED_COLORS }
    }
}

impl LocalNamer {
    /// Use a custom table. Ties go to the earlier entry.
    #[must_use]
    pub const fn with_table(table: &'static [NamedColor]) -> Self {
        Self { table }
    }
}

impl ColorNamer for LocalNamer {
    fn name_rgb(&self, rgb: Rgb) -> ColorMatch {
        let mut best: Option<(&NamedColor, f64)> = None;

        for entry in self.table {
            let Some(named) = hex_to_rgb(entry.hex) else {
                continue;
            };
            let dist = rgb.distance(named);
            // Strict `<`: the first minimum in table order wins.
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((entry, dist));
            }
        }

        best.map_or_else(ColorMatch::unknown, |(entry, distance)| ColorMatch {
            name: entry.name.to_string(),
            distance,
            hex: Some(entry.hex.to_string()),
        })
    }
}

/// Nearest built-in name for a hex color.
///
/// ```
/// use hue_color::closest_color_name;
///
/// let m = closest_color_name("#010101");
/// assert_eq!(m.name, "Black");
/// assert!((m.distance - 3f64.sqrt()).abs() < 1e-12);
///
/// assert_eq!(closest_color_name("#nope").name, "Unknown");
/// ```
#[must_use]
pub fn closest_color_name(hex: &str) -> ColorMatch {
    LocalNamer::default().name_hex(hex)
}

/// Nearest built-in name for an RGB color.
#[must_use]
pub fn closest_color_name_rgb(rgb: Rgb) -> ColorMatch {
    LocalNamer::default().name_rgb(rgb)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
