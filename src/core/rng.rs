//! RNG module - seeded starting-player selection
//!
//! A simple LCG keeps the coin flip deterministic under a fixed seed, so
//! tests can pin which player opens a session.

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

    /// Fair-ish coin flip from the top bit (low LCG bits are weak)
    pub fn coin_flip(&mut self) -> bool {
        self.next_u32() & 0x8000_0000 != 0
    }
}
