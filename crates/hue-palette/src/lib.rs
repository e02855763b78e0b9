//! # hue-palette — palette generation from a single base color
//!
//! Derives ordered sets of related colors (tints, shades and the classic
//! color-wheel harmonies) from one HSL base color. Every recipe is a named
//! constant in [`recipe`], so the exact offsets behind each palette are
//! auditable and testable.
//!
//! # Architecture
//!
//! ```text
//! Hsl base color + PaletteOptions
//!     │
//!     ▼
//! recipe.rs:   offset tables per palette kind (pure data)
//!     │
//!     ▼
//! generate.rs: one pure function per kind, Hsl -> Vec<Hsl>
//!     │        (jitter.rs: optional injected variation for analogous)
//!     ▼
//! group.rs:    PaletteGroup with title/description, swatches for display
//! ```
//!
//! # Determinism
//!
//! All generators are pure. The only source of variation is a
//! [`jitter::JitterSource`] the caller passes in explicitly; the default
//! options use none, so the same input always yields the same palette.

// Single-char math variables (h, s, l) are standard in color code.
#![allow(clippy::many_single_char_names)]
// PRNG draws are u32-to-float casts.
#![allow(clippy::cast_precision_loss)]

pub mod generate;
pub mod group;
pub mod jitter;
pub mod options;
pub mod recipe;

pub use group::{PaletteGroup, Swatch, generate_all, generate_group};
pub use jitter::{JitterSource, NoJitter, Xorshift32};
pub use options::{OptionError, PaletteOptions, SetDirective};
pub use recipe::{AnalogousVariant, PaletteKind, SplitVariant, ToneVariant};
