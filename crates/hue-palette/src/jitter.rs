//! Jitter sources — explicit, injectable variation for "creative" palettes.
//!
//! Generators never reach for ambient randomness. A caller that wants
//! variation passes a [`JitterSource`]; [`NoJitter`] keeps output exact,
//! and [`Xorshift32`] gives repeatable variation from a seed.

/// Supplies small random offsets.
pub trait JitterSource {
    /// A value in `[-amplitude, amplitude]`.
    fn jitter(&mut self, amplitude: f64) -> f64;
}

/// Always zero. Generators fed this are exact.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn jitter(&mut self, _amplitude: f64) -> f64 {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Xorshift32 — a minimal deterministic PRNG
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG. No external `rand` crate needed.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Seed the generator. A zero seed is bumped to 1 (zero is a fixed
    /// point of xorshift).
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub const fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Random f64 in [lo, hi].
    pub fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        let t = f64::from(self.next_u32()) / f64::from(u32::MAX);
        (hi - lo).mul_add(t, lo)
    }
}

impl JitterSource for Xorshift32 {
    fn jitter(&mut self, amplitude: f64) -> f64 {
        self.range_f64(-amplitude, amplitude)
    }
}

impl<J: JitterSource + ?Sized> JitterSource for &mut J {
    fn jitter(&mut self, amplitude: f64) -> f64 {
        (**self).jitter(amplitude)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
