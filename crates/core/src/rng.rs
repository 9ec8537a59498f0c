//! RNG module - deterministic randomness for food, obstacles and power-ups
//!
//! The whole game draws from one seeded LCG so that a seed plus an input
//! sequence fully determines a game (replays, tests, benchmarks).
//!
//! Cell sampling uses rejection sampling: uniform coordinates are drawn until
//! one lands outside the caller's exclusion set.

use crate::types::Point;

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

    /// Generate random value in range [0, max)
    ///
    /// Multiply-shift reduction keeps the high bits; the low bits of a
    /// power-of-two LCG cycle with a tiny period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// True with probability `percent / 100`.
    pub fn chance_percent(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent
    }

    /// A uniformly random cell of a `width x height` grid.
    pub fn next_point(&mut self, width: u16, height: u16) -> Point {
        let x = self.next_range(width as u32) as i16;
        let y = self.next_range(height as u32) as i16;
        Point::new(x, y)
    }

    /// Draw cells until one is not rejected by `occupied`.
    ///
    /// No retry bound: callers must make sure at least one free cell exists.
    pub fn sample_free(
        &mut self,
        width: u16,
        height: u16,
        mut occupied: impl FnMut(Point) -> bool,
    ) -> Point {
        loop {
            let p = self.next_point(width, height);
            if !occupied(p) {
                return p;
            }
        }
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
