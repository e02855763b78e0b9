// SPDX-License-Identifier: MIT
//
// Free-form color input — what a user types into a single color field.
//
// The field accepts either hex (`#3b82f6`, `3B82F6`) or three RGB numbers
// (`59 130 246`, `59,130,246`, `rgb(59, 130, 246)`). Detection runs the
// permissive "looks like" predicates first and only then the strict
// parsers, so half-typed input is recognized as *some* format without
// producing a color:
//
//   "#3b8"        looks like hex, not a color yet   -> None
//   "59 130"      looks like nothing                -> None
//   "59 130 246"  looks like rgb, parses            -> Some(Rgb)

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::color::Rgb;
use crate::hex::{hex_to_rgb, looks_like_hex};

static RGB_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,]+").expect("valid regex"));

/// Which notation a piece of input was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputFormat {
    Hex,
    Rgb,
}

impl InputFormat {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "HEX",
            Self::Rgb => "RGB",
        }
    }
}

/// A successfully parsed input together with its detected notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorInput {
    pub rgb: Rgb,
    pub format: InputFormat,
}

/// Error returned by the `FromStr` impl on [`Rgb`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("empty color string")]
    Empty,
    #[error("unrecognized color `{0}`")]
    Unrecognized(String),
}

/// Split RGB text into its three numeric parts.
///
/// Parts are separated by any run of whitespace and/or commas. An optional
/// `rgb(...)` wrapper is accepted.
fn rgb_parts(s: &str) -> Option<[f64; 3]> {
    let s = s.trim();
    let s = s
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
        .map_or(s, str::trim);

    let mut parts = RGB_SEPARATOR.split(s);
    let mut out = [0.0; 3];
    for slot in &mut out {
        let n: f64 = parts.next()?.parse().ok()?;
        if !(0.0..=255.0).contains(&n) {
            return None;
        }
        *slot = n;
    }
    parts.next().is_none().then_some(out)
}

/// Whether `s` looks like three RGB channel numbers.
///
/// Each number must be within 0–255. Unlike numeric channel input, typed
/// text outside that range is not clamped: `300 0 0` is not RGB text.
#[must_use]
pub fn looks_like_rgb(s: &str) -> bool {
    rgb_parts(s).is_some()
}

/// Parse RGB channel text such as `59 130 246` or `rgb(59,130,246)`.
///
/// Fractional channels are rounded.
#[must_use]
pub fn parse_rgb_text(s: &str) -> Option<Rgb> {
    rgb_parts(s).map(|[r, g, b]| Rgb::clamped(r, g, b))
}

/// Interpret one color field's text.
///
/// Hex is tried first when the text looks like hex; otherwise RGB when it
/// looks like RGB. Returns `None` for anything incomplete or malformed;
/// callers keep their previous color in that case.
#[must_use]
pub fn parse_color_input(s: &str) -> Option<ColorInput> {
    if looks_like_hex(s) {
        hex_to_rgb(s.trim()).map(|rgb| ColorInput { rgb, format: InputFormat::Hex })
    } else {
        parse_rgb_text(s).map(|rgb| ColorInput { rgb, format: InputFormat::Rgb })
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseColorError::Empty);
        }
        parse_color_input(s)
            .map(|input| input.rgb)
            .ok_or_else(|| ParseColorError::Unrecognized(s.trim().to_string()))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
