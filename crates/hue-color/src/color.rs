// SPDX-License-Identifier: MIT
//
// RGB and HSL color values and the conversions between them.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// RGB is the interchange form: it is what hex strings and `rgb()` text
// encode, and it is exact. HSL is the working form for palette math,
// because rotating hue and shifting lightness only make geometric sense
// there. Conversions round to the integer grid in their final step:
//
//   Rgb (u8 × 3) ──rgb_to_hsl──> Hsl (degrees, percent, rounded)
//   Hsl (f64 × 3) ──hsl_to_rgb──> Rgb (rounded, clamped to 0–255)

use std::fmt;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color.
///
/// The canonical display and interchange form. Every `Rgb` has an exact
/// `#rrggbb` spelling and back.
///
/// # Examples
///
/// ```
/// use hue_color::Rgb;
///
/// let coral = Rgb::new(255, 127, 80);
/// assert_eq!(coral.to_hex(), "#ff7f50");
/// assert_eq!(coral.to_string(), "rgb(255, 127, 80)");
///
/// // Out-of-range numeric input is clamped, not rejected.
/// assert_eq!(Rgb::clamped(300.0, -10.0, 128.0), Rgb::new(255, 0, 128));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from arbitrary numeric channels.
    ///
    /// Each channel is rounded to the nearest integer and clamped to
    /// 0–255. This is the permissive path used for user-typed numbers.
    #[must_use]
    pub fn clamped(r: f64, g: f64, b: f64) -> Self {
        Self::new(channel(r), channel(g), channel(b))
    }

    /// Build from unit-range channels (0.0–1.0).
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::clamped(r * 255.0, g * 255.0, b * 255.0)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Euclidean distance in RGB space.
    ///
    /// Not perceptual, but it is what the named-color lookup is defined
    /// against: `#000000` to `#010101` is exactly `sqrt(3)`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        db.mul_add(db, dr.mul_add(dr, dg * dg)).sqrt()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color as hue / saturation / lightness.
///
/// - `h`: hue in degrees, always in `[0, 360)`
/// - `s`: saturation percent, always in `[0, 100]`
/// - `l`: lightness percent, always in `[0, 100]`
///
/// Values coming out of [`rgb_to_hsl`] are whole numbers. Palette recipes
/// may introduce fractions (e.g. `s - offset * 0.3`); those survive until
/// the final conversion back to RGB.
///
/// [`Hsl::new`] and every adjustment method normalize. The fields are
/// public, so a struct literal such as `Hsl { h: 400.0, .. }` skips that;
/// [`hsl_to_rgb`] wraps and clamps again before converting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create a color, wrapping `h` into `[0, 360)` and clamping `s`/`l`
    /// into `[0, 100]`.
    #[must_use]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    /// Rotate the hue by `degrees` (wraps around 360°).
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    /// Add `ds` to saturation and `dl` to lightness, clamping both.
    #[inline]
    #[must_use]
    pub fn adjust(self, ds: f64, dl: f64) -> Self {
        Self::new(self.h, self.s + ds, self.l + dl)
    }

    /// Get the complementary color (hue shifted 180°).
    #[inline]
    #[must_use]
    pub fn complement(self) -> Self {
        self.shift_hue(180.0)
    }

    /// Whether hue is meaningless for this color (gray, black or white).
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.s == 0.0 || self.l == 0.0 || self.l == 100.0
    }

    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsl()
    }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

/// Format numeric channels as lowercase `#rrggbb`.
///
/// Channels are clamped to 0–255 and rounded first, so
/// `rgb_to_hex(300.0, -10.0, 128.0)` is `"#ff0080"`.
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Rgb::clamped(r, g, b).to_hex()
}

/// Convert 8-bit RGB to HSL with whole-number components.
///
/// The usual min/max/delta construction. Achromatic input gets `h = 0,
/// s = 0`. A hue that rounds up to 360 wraps to 0.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, (l * 100.0).round());
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new((h * 60.0).round(), (s * 100.0).round(), (l * 100.0).round())
}

/// Convert HSL (degrees, percent, percent) to 8-bit RGB.
///
/// Hue is wrapped and `s`/`l` clamped before conversion; each channel is
/// rounded to the nearest integer.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = normalize_hue(h) / 360.0;
    let s = clamp_percent(s) / 100.0;
    let l = clamp_percent(l) / 100.0;

    if s == 0.0 {
        return Rgb::from_unit(l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::from_unit(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

/// `hsl_to_rgb` followed by `to_hex`.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(h, s, l).to_hex()
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Wrap a hue angle into `[0, 360)`.
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Clamp a saturation or lightness percentage into `[0, 100]`.
#[inline]
#[must_use]
pub fn clamp_percent(v: f64) -> f64 {
    v.clamp(0.0, 100.0)
}

/// One channel of the piecewise-linear hue ramp.
///
/// Plain arithmetic in the reference evaluation order: fusing with
/// `mul_add` shifts some channels by one at exact half steps.
#[allow(clippy::suboptimal_flops)]
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Round and clamp a channel value to a byte.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Helper: shortest distance between two hues on the wheel.
    fn hue_gap(a: f64, b: f64) -> f64 {
        let d = (a - b).abs() % 360.0;
        d.min(360.0 - d)
    }

    // ── rgb_to_hex ────────────────────────────────────────────────────────

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(rgb_to_hex(10.0, 171.0, 255.0), "#0aabff");
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn hex_clamps_out_of_range() {
        assert_eq!(rgb_to_hex(300.0, -10.0, 128.0), "#ff0080");
        assert_eq!(rgb_to_hex(300.0, -10.0, 128.0), rgb_to_hex(255.0, 0.0, 128.0));
    }

    #[test]
    fn hex_rounds_fractional_channels() {
        assert_eq!(rgb_to_hex(127.5, 0.4, 254.6), "#8000ff");
    }

    // ── rgb_to_hsl ────────────────────────────────────────────────────────

    #[test]
    fn primaries_to_hsl() {
        assert_eq!(rgb_to_hsl(255, 0, 0), Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(0, 255, 0), Hsl::new(120.0, 100.0, 50.0));
        assert_eq!(rgb_to_hsl(0, 0, 255), Hsl::new(240.0, 100.0, 50.0));
    }

    #[test]
    fn teal_to_hsl() {
        assert_eq!(rgb_to_hsl(0, 128, 128), Hsl::new(180.0, 100.0, 25.0));
    }

    #[test]
    fn grays_are_achromatic() {
        assert_eq!(rgb_to_hsl(128, 128, 128), Hsl::new(0.0, 0.0, 50.0));
        assert_eq!(rgb_to_hsl(255, 255, 255), Hsl::new(0.0, 0.0, 100.0));
        assert_eq!(rgb_to_hsl(0, 0, 0), Hsl::new(0.0, 0.0, 0.0));
        assert!(rgb_to_hsl(77, 77, 77).is_achromatic());
    }

    #[test]
    fn red_branch_wraps_negative_hue() {
        // Magenta-ish red: max is red, g < b.
        let hsl = rgb_to_hsl(255, 0, 128);
        assert_eq!(hsl.h, 330.0);
    }

    #[test]
    fn hue_rounding_to_360_wraps() {
        // h ≈ 359.76 before rounding.
        let hsl = rgb_to_hsl(255, 0, 1);
        assert_eq!(hsl.h, 0.0);
    }

    // ── hsl_to_rgb ────────────────────────────────────────────────────────

    #[test]
    fn hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), Rgb::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(60.0, 100.0, 50.0), Rgb::new(255, 255, 0));
    }

    #[test]
    fn hsl_dark_cyan_half_steps() {
        // Green lands a hair under 127.5, blue exactly on it.
        assert_eq!(hsl_to_rgb(180.0, 100.0, 25.0), Rgb::new(0, 127, 128));
    }

    #[test]
    fn hsl_gray_rounds_half_up() {
        assert_eq!(hsl_to_rgb(0.0, 0.0, 50.0), Rgb::new(128, 128, 128));
        assert_eq!(hsl_to_rgb(200.0, 0.0, 100.0), Rgb::WHITE);
    }

    #[test]
    fn hsl_hue_360_equals_0() {
        assert_eq!(hsl_to_rgb(360.0, 80.0, 40.0), hsl_to_rgb(0.0, 80.0, 40.0));
        assert_eq!(hsl_to_rgb(-120.0, 80.0, 40.0), hsl_to_rgb(240.0, 80.0, 40.0));
    }

    #[test]
    fn hsl_out_of_range_is_clamped() {
        assert_eq!(hsl_to_rgb(0.0, 150.0, 50.0), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(0.0, 100.0, -20.0), Rgb::BLACK);
    }

    #[test]
    fn hsl_to_hex_composes() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
        assert_eq!(hsl_to_hex(180.0, 100.0, 25.0), "#007f80");
    }

    // ── Round trips ───────────────────────────────────────────────────────

    // Band where 8-bit rounding keeps every channel within 1.
    const CHROMATIC_S: std::ops::RangeInclusive<u32> = 35..=100;
    const CHROMATIC_L: std::ops::RangeInclusive<u32> = 20..=80;

    // Upper bound on the passes `settle` needs anywhere on the RGB cube.
    const MAX_SETTLE_PASSES: usize = 32;

    /// Apply `rgb -> hsl -> rgb` until the color stops moving. Returns the
    /// fixed point and the number of passes that changed it.
    fn settle(start: Rgb) -> (Rgb, usize) {
        let mut rgb = start;
        for passes in 0..=MAX_SETTLE_PASSES {
            let next = rgb.to_hsl().to_rgb();
            if next == rgb {
                return (rgb, passes);
            }
            rgb = next;
        }
        panic!("{start} still moving after {MAX_SETTLE_PASSES} passes (at {rgb})");
    }

    #[test]
    fn hsl_roundtrip_within_one_on_chromatic_band() {
        for h in 0..360 {
            for s in CHROMATIC_S {
                for l in CHROMATIC_L {
                    let (h, s, l) = (f64::from(h), f64::from(s), f64::from(l));
                    let back = hsl_to_rgb(h, s, l).to_hsl();
                    assert!(
                        hue_gap(back.h, h) <= 1.0
                            && (back.s - s).abs() <= 1.0
                            && (back.l - l).abs() <= 1.0,
                        "hsl({h}, {s}, {l}) came back as {back}"
                    );
                }
            }
        }
    }

    #[test]
    fn hsl_roundtrip_drifts_outside_chromatic_band() {
        // One step past each edge of the band.
        assert_eq!(hsl_to_rgb(2.0, 35.0, 19.0), Rgb::new(65, 33, 31));
        assert_eq!(Rgb::new(65, 33, 31).to_hsl(), Hsl::new(4.0, 35.0, 19.0));
        assert_eq!(hsl_to_rgb(21.0, 35.0, 81.0).to_hsl(), Hsl::new(19.0, 35.0, 81.0));
        assert_eq!(hsl_to_rgb(2.0, 30.0, 21.0).to_hsl(), Hsl::new(4.0, 31.0, 21.0));
        // Nearly black: saturation is all rounding noise.
        assert_eq!(hsl_to_rgb(0.0, 2.0, 1.0), Rgb::new(3, 2, 2));
        assert_eq!(hsl_to_rgb(0.0, 2.0, 1.0).to_hsl(), Hsl::new(0.0, 20.0, 1.0));
    }

    #[test]
    fn rgb_roundtrip_needs_several_passes() {
        let start = Rgb::new(0, 25, 30);
        assert_eq!(start.to_hsl().to_rgb(), Rgb::new(0, 25, 31));
        assert_eq!(settle(start), (Rgb::new(0, 23, 31), 3));
    }

    #[test]
    fn rgb_roundtrip_is_idempotent_once_settled() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let (fixed, _) = settle(Rgb::new(r, g, b));
                    let again = fixed.to_hsl().to_rgb();
                    assert_eq!(again, fixed);
                    assert_eq!(again.to_hsl().to_rgb(), fixed);
                }
            }
        }
    }

    #[test]
    fn achromatic_roundtrip_keeps_lightness() {
        for l in 0..=100 {
            let l = f64::from(l);
            let back = hsl_to_rgb(123.0, 0.0, l).to_hsl();
            assert_eq!(back.s, 0.0);
            assert!((back.l - l).abs() <= 1.0, "l={l} came back as {}", back.l);
        }
    }

    // ── Hsl helpers ───────────────────────────────────────────────────────

    #[test]
    fn new_normalizes() {
        let c = Hsl::new(-30.0, 120.0, -5.0);
        assert_eq!(c, Hsl { h: 330.0, s: 100.0, l: 0.0 });
        assert_eq!(Hsl::new(360.0, 50.0, 50.0).h, 0.0);
        assert_eq!(Hsl::new(725.0, 50.0, 50.0).h, 5.0);
    }

    #[test]
    fn adjustments_clamp() {
        let c = Hsl::new(10.0, 90.0, 90.0);
        assert_eq!(c.adjust(0.0, 30.0).l, 100.0);
        assert_eq!(c.adjust(0.0, -200.0).l, 0.0);
        assert_eq!(c.adjust(25.0, 0.0).s, 100.0);
        assert_eq!(c.complement().h, 190.0);
        assert_eq!(c.shift_hue(-20.0).h, 350.0);
    }

    #[test]
    fn display_forms() {
        assert_eq!(Hsl::new(210.0, 80.0, 45.0).to_string(), "hsl(210, 80%, 45%)");
        assert_eq!(Hsl::new(0.0, 46.25, 35.0).to_string(), "hsl(0, 46.25%, 35%)");
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "rgb(1, 2, 3)");
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Rgb::BLACK.distance(Rgb::BLACK), 0.0);
        assert!((Rgb::BLACK.distance(Rgb::new(1, 1, 1)) - 3f64.sqrt()).abs() < 1e-12);
        assert!((Rgb::new(3, 4, 0).distance(Rgb::BLACK) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn from_impls_agree() {
        let rgb = Rgb::from((255, 0, 0));
        assert_eq!(Hsl::from(rgb), rgb.to_hsl());
        assert_eq!(Rgb::from(Hsl::from(rgb)), rgb);
    }
}
