//! Palette groups — titled, ordered palettes ready for display.

use hue_color::{Hsl, Rgb};

use crate::generate;
use crate::jitter::{JitterSource, NoJitter, Xorshift32};
use crate::options::PaletteOptions;
use crate::recipe::PaletteKind;

/// One generated palette: its kind, display title, and colors in recipe
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteGroup {
    pub kind: PaletteKind,
    pub title: &'static str,
    pub colors: Vec<Hsl>,
}

/// A palette color in every representation a swatch needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub hsl: Hsl,
    pub rgb: Rgb,
    pub hex: String,
}

impl Swatch {
    #[must_use]
    pub fn new(hsl: Hsl) -> Self {
        let rgb = hsl.to_rgb();
        Self { hsl, rgb, hex: rgb.to_hex() }
    }
}

impl PaletteGroup {
    #[must_use]
    pub fn new(kind: PaletteKind, colors: Vec<Hsl>) -> Self {
        Self { kind, title: kind.title(), colors }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.kind.description()
    }

    #[must_use]
    pub fn swatches(&self) -> Vec<Swatch> {
        self.colors.iter().copied().map(Swatch::new).collect()
    }

    #[must_use]
    pub fn hexes(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }
}

fn build(
    kind: PaletteKind,
    base: Hsl,
    options: &PaletteOptions,
    jitter: impl JitterSource,
) -> PaletteGroup {
    let colors = match kind {
        PaletteKind::Shades => generate::shades_with(base, options.shades),
        PaletteKind::Tints => generate::tints_with(base, options.tints),
        PaletteKind::Complementary => generate::complementary(base),
        PaletteKind::Analogous => generate::analogous_with(base, options.analogous, jitter),
        PaletteKind::SplitComplementary => generate::split_complementary_with(base, options.split),
        PaletteKind::Triadic => generate::triadic(base),
        PaletteKind::Tetradic => generate::tetradic(base),
        PaletteKind::Monochromatic => generate::monochromatic(base),
    };
    PaletteGroup::new(kind, colors)
}

/// Generate a single palette group.
///
/// Jitter, when enabled in `options`, is seeded from `options.jitter` so
/// the same options give the same group.
#[must_use]
pub fn generate_group(kind: PaletteKind, base: Hsl, options: &PaletteOptions) -> PaletteGroup {
    match options.jitter {
        Some(seed) => build(kind, base, options, Xorshift32::new(seed)),
        None => build(kind, base, options, NoJitter),
    }
}

/// Generate every palette kind, in [`PaletteKind::all`] order.
#[must_use]
pub fn generate_all(base: Hsl, options: &PaletteOptions) -> Vec<PaletteGroup> {
    PaletteKind::all()
        .iter()
        .map(|&kind| generate_group(kind, base, options))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
