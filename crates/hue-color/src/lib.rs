// SPDX-License-Identifier: MIT
//
// hue-color — the color codec for huekit.
//
// Everything in huekit funnels through three representations of the same
// color: a `#rrggbb` hex string, an 8-bit RGB triple, and an HSL triple in
// degrees and percent. This crate converts between them with a fixed
// rounding and clamping policy, so a color typed into one field comes back
// identical in every other field.
//
//   hex text ─┐                     ┌─> Hsl (palette math)
//             ├─> Rgb (canonical) ──┤
//   rgb text ─┘                     └─> nearest named color
//
// The crate is pure: no I/O, no global state, no logging. Parsers return
// `Option` for malformed text; numeric channels are clamped, never
// rejected.

pub mod color;
pub mod hex;
pub mod input;
pub mod named;
pub mod names;

pub use color::{Hsl, Rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use hex::{hex_to_rgb, is_strict_hex, looks_like_hex};
pub use input::{ColorInput, InputFormat, ParseColorError, parse_color_input};
pub use names::{ColorMatch, ColorNamer, LocalNamer, closest_color_name, closest_color_name_rgb};
