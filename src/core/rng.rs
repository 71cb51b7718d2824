//! RNG module - seeded random source for spawning
//!
//! A simple LCG (Numerical Recipes constants) owned by whoever needs
//! randomness, instead of a process-global generator. Deterministic under a
//! fixed seed, which keeps spawn-dependent tests reproducible.

use crate::types::Position;

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
        // LCG formula: (a * state + c) mod 2^32, a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Bernoulli trial: true with probability `percent`/100.
    pub fn roll_percent(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent
    }

    /// Uniform cell on a `width` x `height` grid.
    pub fn next_position(&mut self, width: i16, height: i16) -> Position {
        let x = self.next_range(width as u32) as i16;
        let y = self.next_range(height as u32) as i16;
        Position::new(x, y)
    }

    /// Pick one element of a non-empty slice uniformly.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.next_range(items.len() as u32) as usize]
    }
}
