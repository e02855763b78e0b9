// SPDX-License-Identifier: MIT
//
// Hex color text — the strict parser and the permissive "looks like" check.
//
// Two different questions get asked of hex text, and they have different
// answers on purpose:
//
//   looks_like_hex  "is the user plausibly typing a hex color?"
//                   accepts `abc`, `#abc`, `aabbcc`, `#aabbcc`, padded
//   hex_to_rgb      "what exact color is this?"
//                   accepts only `#rrggbb` / `rrggbb`, no shorthand
//
// A live input field uses the first to decide which parser to try, and
// the second to get a value. `#abc` therefore looks like hex but does not
// convert; the caller keeps its last good color.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::Rgb;

static LOOKS_LIKE_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid regex"));

/// Parse a strict 6-digit hex color, with or without a leading `#`.
///
/// Case-insensitive. Returns `None` for any other length (including 3-digit
/// shorthand) or any non-hex character. Surrounding whitespace is not
/// stripped.
///
/// ```
/// use hue_color::{Rgb, hex_to_rgb};
///
/// assert_eq!(hex_to_rgb("#FF8000"), Some(Rgb::new(255, 128, 0)));
/// assert_eq!(hex_to_rgb("ff8000"), Some(Rgb::new(255, 128, 0)));
/// assert_eq!(hex_to_rgb("#f80"), None);
/// ```
#[must_use]
pub fn hex_to_rgb(s: &str) -> Option<Rgb> {
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();
    if digits.len() != 6 {
        return None;
    }

    let r = parse_hex_byte(&digits[0..2])?;
    let g = parse_hex_byte(&digits[2..4])?;
    let b = parse_hex_byte(&digits[4..6])?;
    Some(Rgb::new(r, g, b))
}

/// Whether [`hex_to_rgb`] would accept `s`.
#[must_use]
pub fn is_strict_hex(s: &str) -> bool {
    hex_to_rgb(s).is_some()
}

/// Whether `s` looks like a hex color while being typed.
///
/// Trims whitespace, drops one leading `#`, then accepts exactly 3 or 6 hex
/// digits. This is a plausibility check only; shorthand passes here but is
/// rejected by [`hex_to_rgb`].
#[must_use]
pub fn looks_like_hex(s: &str) -> bool {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    LOOKS_LIKE_HEX.is_match(digits)
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
