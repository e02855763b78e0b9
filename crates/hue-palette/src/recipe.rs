//! Palette recipes — the offset tables behind every palette kind.
//!
//! Several kinds have more than one reasonable recipe. Each alternative is
//! a variant of a small enum rather than a literal buried in a generator,
//! and [`PaletteOptions`](crate::PaletteOptions) picks one per kind. The
//! `Default` of every variant enum is the canonical recipe.

/// The kind of palette derived from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    /// Darker variations of the base (lightness decreased).
    Shades,
    /// Lighter variations of the base (lightness increased).
    Tints,
    /// Base plus the opposite hue.
    Complementary,
    /// Hues next to the base on the wheel.
    Analogous,
    /// The two neighbors of the complement.
    SplitComplementary,
    /// Three hues 120° apart.
    Triadic,
    /// Four hues 90° apart.
    Tetradic,
    /// One hue across saturation and lightness.
    Monochromatic,
}

impl PaletteKind {
    /// Machine name, used on the command line and in option directives.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shades => "shades",
            Self::Tints => "tints",
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::SplitComplementary => "split-complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Shades => "Shades",
            Self::Tints => "Tints",
            Self::Complementary => "Complementary",
            Self::Analogous => "Analogous",
            Self::SplitComplementary => "Split-Complementary",
            Self::Triadic => "Triadic",
            Self::Tetradic => "Tetradic",
            Self::Monochromatic => "Monochromatic",
        }
    }

    /// One-line description shown under the title.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Shades => "Darker variations of the same hue",
            Self::Tints => "Lighter variations of the same hue",
            Self::Complementary => "High-contrast opposing colors",
            Self::Analogous => "Harmonious neighboring hues",
            Self::SplitComplementary => "Softer contrast from the complement's neighbors",
            Self::Triadic => "Three hues evenly spaced around the wheel",
            Self::Tetradic => "Two complementary pairs, 90° apart",
            Self::Monochromatic => "One hue across saturation and lightness",
        }
    }

    /// Parse a kind from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|k| k.name() == lower).copied()
    }

    /// All kinds, in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Shades,
            Self::Tints,
            Self::Complementary,
            Self::Analogous,
            Self::SplitComplementary,
            Self::Triadic,
            Self::Tetradic,
            Self::Monochromatic,
        ]
    }
}

// ---------------------------------------------------------------------------
// Tints and shades
// ---------------------------------------------------------------------------

/// Lightness steps of the simple tint/shade recipe.
pub const SIMPLE_TONE_OFFSETS: [f64; 5] = [10.0, 25.0, 40.0, 55.0, 70.0];

/// Lightness steps of the refined tint/shade recipe.
pub const REFINED_TONE_OFFSETS: [f64; 5] = [15.0, 30.0, 45.0, 60.0, 75.0];

/// Refined tints lose `offset * 0.3` saturation.
pub const REFINED_TINT_DESATURATION: f64 = 0.3;

/// Refined shades lose `offset * 0.25` saturation.
pub const REFINED_SHADE_DESATURATION: f64 = 0.25;

/// Recipe for tints and shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToneVariant {
    /// Lightness `±{10,25,40,55,70}`, saturation unchanged.
    #[default]
    Simple,
    /// Lightness `±{15,30,45,60,75}` with saturation eased off as the
    /// color moves away from the base.
    Refined,
}

impl ToneVariant {
    #[must_use]
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            Self::Simple => &SIMPLE_TONE_OFFSETS,
            Self::Refined => &REFINED_TONE_OFFSETS,
        }
    }

    /// Saturation lost per unit of lightness offset.
    #[must_use]
    pub const fn desaturation(self, kind: PaletteKind) -> f64 {
        match (self, kind) {
            (Self::Refined, PaletteKind::Tints) => REFINED_TINT_DESATURATION,
            (Self::Refined, PaletteKind::Shades) => REFINED_SHADE_DESATURATION,
            _ => 0.0,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Refined => "refined",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "simple" => Some(Self::Simple),
            "refined" => Some(Self::Refined),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Hue rotations
// ---------------------------------------------------------------------------

/// Analogous neighbors without the base.
pub const ANALOGOUS_NEIGHBOR_OFFSETS: [f64; 4] = [-30.0, -15.0, 15.0, 30.0];

/// Analogous neighbors with the base in the middle.
pub const ANALOGOUS_WITH_BASE_OFFSETS: [f64; 5] = [-30.0, -15.0, 0.0, 15.0, 30.0];

/// Largest jitter (either direction) added to analogous `s`/`l`.
pub const ANALOGOUS_JITTER: f64 = 5.0;

pub const COMPLEMENTARY_OFFSETS: [f64; 2] = [0.0, 180.0];

/// Split complement as a pair around the opposite hue.
pub const SPLIT_PAIR_OFFSETS: [f64; 2] = [-150.0, 150.0];

/// Split complement led by the base.
pub const SPLIT_WITH_BASE_OFFSETS: [f64; 3] = [0.0, 150.0, 210.0];

pub const TRIADIC_OFFSETS: [f64; 3] = [0.0, 120.0, 240.0];

pub const TETRADIC_OFFSETS: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

/// `(saturation delta, lightness delta)` per monochromatic step.
pub const MONOCHROMATIC_STEPS: [(f64, f64); 5] = [
    (-30.0, 30.0),
    (-15.0, 15.0),
    (0.0, 0.0),
    (15.0, -15.0),
    (30.0, -30.0),
];

/// Recipe for analogous palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalogousVariant {
    /// Four neighbors at `{-30,-15,+15,+30}`.
    #[default]
    Neighbors,
    /// Five hues at `{-30,-15,0,+15,+30}`, base included.
    WithBase,
}

impl AnalogousVariant {
    #[must_use]
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            Self::Neighbors => &ANALOGOUS_NEIGHBOR_OFFSETS,
            Self::WithBase => &ANALOGOUS_WITH_BASE_OFFSETS,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Neighbors => "neighbors",
            Self::WithBase => "with-base",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "neighbors" => Some(Self::Neighbors),
            "with-base" => Some(Self::WithBase),
            _ => None,
        }
    }
}

/// Recipe for split-complementary palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SplitVariant {
    /// Two hues at `{-150,+150}`.
    #[default]
    Pair,
    /// Base followed by `+150` and `+210`.
    WithBase,
}

impl SplitVariant {
    #[must_use]
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            Self::Pair => &SPLIT_PAIR_OFFSETS,
            Self::WithBase => &SPLIT_WITH_BASE_OFFSETS,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pair => "pair",
            Self::WithBase => "with-base",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "pair" => Some(Self::Pair),
            "with-base" => Some(Self::WithBase),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
