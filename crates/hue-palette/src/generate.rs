//! Palette generators — one pure function per palette kind.
//!
//! Each generator takes a base [`Hsl`] and returns its colors in recipe
//! order. Hue arithmetic wraps into `[0, 360)` and saturation/lightness are
//! clamped to `[0, 100]` after every step (both enforced by [`Hsl::new`]),
//! so no offset can push a color off the wheel.
//!
//! The plain functions (`tints`, `analogous`, ...) use the canonical recipe.
//! The `*_with` forms take an explicit variant from [`recipe`](crate::recipe).

use hue_color::Hsl;

use crate::jitter::{JitterSource, NoJitter};
use crate::recipe::{
    ANALOGOUS_JITTER, AnalogousVariant, COMPLEMENTARY_OFFSETS, MONOCHROMATIC_STEPS,
    PaletteKind, SplitVariant, TETRADIC_OFFSETS, TRIADIC_OFFSETS, ToneVariant,
};

/// Rotate `base` by each offset, keeping `s` and `l`.
fn rotations(base: Hsl, offsets: &[f64]) -> Vec<Hsl> {
    offsets.iter().map(|&offset| base.shift_hue(offset)).collect()
}

/// Lightness steps in `direction` (+1 lighter, -1 darker), easing
/// saturation off by the variant's desaturation factor.
fn tones(base: Hsl, variant: ToneVariant, kind: PaletteKind, direction: f64) -> Vec<Hsl> {
    let desaturation = variant.desaturation(kind);
    variant
        .offsets()
        .iter()
        .map(|&offset| {
            Hsl::new(base.h, base.s - offset * desaturation, base.l + direction * offset)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tints and shades
// ---------------------------------------------------------------------------

/// Five lighter versions of `base`: lightness `+{10,25,40,55,70}`.
#[must_use]
pub fn tints(base: Hsl) -> Vec<Hsl> {
    tints_with(base, ToneVariant::default())
}

#[must_use]
pub fn tints_with(base: Hsl, variant: ToneVariant) -> Vec<Hsl> {
    tones(base, variant, PaletteKind::Tints, 1.0)
}

/// Five darker versions of `base`: lightness `-{10,25,40,55,70}`.
#[must_use]
pub fn shades(base: Hsl) -> Vec<Hsl> {
    shades_with(base, ToneVariant::default())
}

#[must_use]
pub fn shades_with(base: Hsl, variant: ToneVariant) -> Vec<Hsl> {
    tones(base, variant, PaletteKind::Shades, -1.0)
}

// ---------------------------------------------------------------------------
// Hue-wheel harmonies
// ---------------------------------------------------------------------------

/// Neighbors at `{-30,-15,+15,+30}` degrees, same `s`/`l`.
#[must_use]
pub fn analogous(base: Hsl) -> Vec<Hsl> {
    analogous_with(base, AnalogousVariant::default(), NoJitter)
}

/// Analogous hues with an explicit recipe and jitter source.
///
/// Each output's saturation and lightness get an independent offset of up
/// to ±[`ANALOGOUS_JITTER`] from `jitter` (then clamped). Hues are never
/// jittered. With [`NoJitter`] the output is exact.
#[must_use]
pub fn analogous_with(
    base: Hsl,
    variant: AnalogousVariant,
    mut jitter: impl JitterSource,
) -> Vec<Hsl> {
    rotations(base, variant.offsets())
        .into_iter()
        .map(|c| {
            let ds = jitter.jitter(ANALOGOUS_JITTER);
            let dl = jitter.jitter(ANALOGOUS_JITTER);
            c.adjust(ds, dl)
        })
        .collect()
}

/// Base and its opposite: `[base, h+180]`.
#[must_use]
pub fn complementary(base: Hsl) -> Vec<Hsl> {
    rotations(base, &COMPLEMENTARY_OFFSETS)
}

/// The complement's neighbors: hues `{-150,+150}`.
#[must_use]
pub fn split_complementary(base: Hsl) -> Vec<Hsl> {
    split_complementary_with(base, SplitVariant::default())
}

#[must_use]
pub fn split_complementary_with(base: Hsl, variant: SplitVariant) -> Vec<Hsl> {
    rotations(base, variant.offsets())
}

/// `{0,+120,+240}`, base first.
#[must_use]
pub fn triadic(base: Hsl) -> Vec<Hsl> {
    rotations(base, &TRIADIC_OFFSETS)
}

/// `{0,+90,+180,+270}`, base first.
#[must_use]
pub fn tetradic(base: Hsl) -> Vec<Hsl> {
    rotations(base, &TETRADIC_OFFSETS)
}

/// Five colors trading saturation for lightness around the base:
/// `(s-30, l+30) … (s, l) … (s+30, l-30)`.
#[must_use]
pub fn monochromatic(base: Hsl) -> Vec<Hsl> {
    MONOCHROMATIC_STEPS
        .iter()
        .map(|&(ds, dl)| base.adjust(ds, dl))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jitter::Xorshift32;
    use pretty_assertions::assert_eq;

    fn hsl(h: f64, s: f64, l: f64) -> Hsl {
        Hsl::new(h, s, l)
    }

    fn hues(colors: &[Hsl]) -> Vec<f64> {
        colors.iter().map(|c| c.h).collect()
    }

    fn lightness(colors: &[Hsl]) -> Vec<f64> {
        colors.iter().map(|c| c.l).collect()
    }

    fn saturation(colors: &[Hsl]) -> Vec<f64> {
        colors.iter().map(|c| c.s).collect()
    }

    // ── Tints / shades ────────────────────────────────────────────────────

    #[test]
    fn tints_step_up_and_clamp() {
        let t = tints(hsl(200.0, 60.0, 50.0));
        assert_eq!(lightness(&t), [60.0, 75.0, 90.0, 100.0, 100.0]);
        assert_eq!(saturation(&t), [60.0; 5]);
        assert_eq!(hues(&t), [200.0; 5]);
    }

    #[test]
    fn shades_step_down_and_clamp() {
        let s = shades(hsl(200.0, 60.0, 50.0));
        assert_eq!(lightness(&s), [40.0, 25.0, 10.0, 0.0, 0.0]);
        assert_eq!(saturation(&s), [60.0; 5]);
    }

    #[test]
    fn refined_tints_desaturate() {
        let t = tints_with(hsl(10.0, 50.0, 20.0), ToneVariant::Refined);
        assert_eq!(lightness(&t), [35.0, 50.0, 65.0, 80.0, 95.0]);
        assert_eq!(saturation(&t), [45.5, 41.0, 36.5, 32.0, 27.5]);
    }

    #[test]
    fn refined_shades_desaturate() {
        let s = shades_with(hsl(10.0, 50.0, 50.0), ToneVariant::Refined);
        assert_eq!(lightness(&s), [35.0, 20.0, 5.0, 0.0, 0.0]);
        assert_eq!(saturation(&s), [46.25, 42.5, 38.75, 35.0, 31.25]);
    }

    #[test]
    fn refined_saturation_never_negative() {
        let t = tints_with(hsl(10.0, 5.0, 0.0), ToneVariant::Refined);
        assert!(t.iter().all(|c| c.s >= 0.0));
        assert_eq!(t[4].s, 0.0);
    }

    // ── Analogous ─────────────────────────────────────────────────────────

    #[test]
    fn analogous_neighbors() {
        let a = analogous(hsl(100.0, 50.0, 50.0));
        assert_eq!(hues(&a), [70.0, 85.0, 115.0, 130.0]);
        assert_eq!(saturation(&a), [50.0; 4]);
        assert_eq!(lightness(&a), [50.0; 4]);
    }

    #[test]
    fn analogous_wraps_around_zero() {
        let a = analogous(hsl(10.0, 50.0, 50.0));
        assert_eq!(hues(&a), [340.0, 355.0, 25.0, 40.0]);
    }

    #[test]
    fn analogous_with_base() {
        let a = analogous_with(hsl(100.0, 50.0, 50.0), AnalogousVariant::WithBase, NoJitter);
        assert_eq!(hues(&a), [70.0, 85.0, 100.0, 115.0, 130.0]);
    }

    #[test]
    fn analogous_jitter_is_bounded_and_repeatable() {
        let base = hsl(100.0, 50.0, 50.0);
        let a = analogous_with(base, AnalogousVariant::Neighbors, Xorshift32::new(42));
        let b = analogous_with(base, AnalogousVariant::Neighbors, Xorshift32::new(42));
        assert_eq!(a, b);
        assert_eq!(hues(&a), [70.0, 85.0, 115.0, 130.0]);
        for c in &a {
            assert!((c.s - 50.0).abs() <= ANALOGOUS_JITTER, "s drifted: {}", c.s);
            assert!((c.l - 50.0).abs() <= ANALOGOUS_JITTER, "l drifted: {}", c.l);
        }
        assert_ne!(a, analogous(base));
    }

    #[test]
    fn analogous_jitter_clamps() {
        let a =
            analogous_with(hsl(0.0, 100.0, 0.0), AnalogousVariant::Neighbors, Xorshift32::new(9));
        for c in &a {
            assert!(c.s <= 100.0 && c.l >= 0.0);
        }
    }

    // ── Complementary family ──────────────────────────────────────────────

    #[test]
    fn complementary_of_red_is_cyan() {
        let c = complementary(hsl(0.0, 100.0, 50.0));
        assert_eq!(c, [hsl(0.0, 100.0, 50.0), hsl(180.0, 100.0, 50.0)]);
        assert_eq!(c[1].to_hex(), "#00ffff");
    }

    #[test]
    fn complementary_wraps() {
        let c = complementary(hsl(270.0, 40.0, 40.0));
        assert_eq!(hues(&c), [270.0, 90.0]);
    }

    #[test]
    fn split_pair() {
        let s = split_complementary(hsl(30.0, 50.0, 50.0));
        assert_eq!(hues(&s), [240.0, 180.0]);
    }

    #[test]
    fn split_with_base() {
        let s = split_complementary_with(hsl(30.0, 50.0, 50.0), SplitVariant::WithBase);
        assert_eq!(hues(&s), [30.0, 180.0, 240.0]);
    }

    #[test]
    fn triadic_hues() {
        let t = triadic(hsl(10.0, 50.0, 50.0));
        assert_eq!(hues(&t), [10.0, 130.0, 250.0]);
        assert!(t.iter().all(|c| c.s == 50.0 && c.l == 50.0));
    }

    #[test]
    fn tetradic_hues() {
        let t = tetradic(hsl(300.0, 50.0, 50.0));
        assert_eq!(hues(&t), [300.0, 30.0, 120.0, 210.0]);
    }

    // ── Monochromatic ─────────────────────────────────────────────────────

    #[test]
    fn monochromatic_trades_s_for_l() {
        let m = monochromatic(hsl(200.0, 50.0, 50.0));
        assert_eq!(lightness(&m), [80.0, 65.0, 50.0, 35.0, 20.0]);
        assert_eq!(saturation(&m), [20.0, 35.0, 50.0, 65.0, 80.0]);
        assert_eq!(hues(&m), [200.0; 5]);
    }

    #[test]
    fn monochromatic_clamps() {
        let m = monochromatic(hsl(200.0, 90.0, 10.0));
        assert_eq!(lightness(&m), [40.0, 25.0, 10.0, 0.0, 0.0]);
        assert_eq!(saturation(&m), [60.0, 75.0, 90.0, 100.0, 100.0]);
    }

    // ── Properties ────────────────────────────────────────────────────────

    #[test]
    fn generators_are_pure() {
        let base = hsl(123.0, 45.0, 67.0);
        assert_eq!(tints(base), tints(base));
        assert_eq!(analogous(base), analogous(base));
        assert_eq!(monochromatic(base), monochromatic(base));
    }

    #[test]
    fn outputs_stay_in_range() {
        type Generator = fn(Hsl) -> Vec<Hsl>;
        let all: [Generator; 8] = [
            tints,
            shades,
            analogous,
            complementary,
            split_complementary,
            triadic,
            tetradic,
            monochromatic,
        ];
        for generator in all {
            for h in [0.0, 45.0, 180.0, 359.0] {
                for (s, l) in [(0.0, 0.0), (100.0, 100.0), (50.0, 50.0), (5.0, 95.0)] {
                    for c in generator(hsl(h, s, l)) {
                        assert!((0.0..360.0).contains(&c.h), "hue {}", c.h);
                        assert!((0.0..=100.0).contains(&c.s), "s {}", c.s);
                        assert!((0.0..=100.0).contains(&c.l), "l {}", c.l);
                    }
                }
            }
        }
    }
}
