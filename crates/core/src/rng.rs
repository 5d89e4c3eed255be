//! RNG module - per-frame segment colors
//!
//! The tunnel scene repaints every square with a fresh random color each
//! frame. A small LCG keeps this deterministic under a fixed seed, which the
//! tests and benchmarks rely on.

use crate::types::Color3;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a value in `[0, 1]`.
    pub fn next_unit(&mut self) -> f64 {
        // The low bits of an LCG have short periods; use the high 24.
        (self.next_u32() >> 8) as f64 / ((1u32 << 24) - 1) as f64
    }

    /// Generate a color with each channel uniform in `[0, 1]`.
    pub fn next_color(&mut self) -> Color3 {
        let r = self.next_unit();
        let g = self.next_unit();
        let b = self.next_unit();
        Color3::new(r, g, b)
    }

    /// Current RNG state (reseeding with it reproduces the remaining sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
