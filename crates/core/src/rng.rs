//! RNG module - seeded uniform kind drawing
//!
//! A small LCG keeps the engine dependency-free and fully deterministic:
//! a seed determines the initial board and every refill after it, which is
//! what makes sessions replayable.

use crate::types::TokenKind;

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
        // LCG formula: (a * state + c) mod 2^32, a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    ///
    /// Multiply-shift on the high bits; an LCG's low bits cycle with short
    /// periods (bit 0 alternates every step), so reducing by modulo would
    /// make small-range draws strictly patterned.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (usable as a seed to continue the stream)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform draw over a fixed kind alphabet.
///
/// This is the engine-owned implementation of the configurable kind picker:
/// board generation and cascade refill both draw through it. Code that
/// needs scripted draws (tests, replays) passes its own closure to
/// [`crate::grid::Grid::generate`] / [`crate::cascade::resolve`] instead.
#[derive(Debug, Clone)]
pub struct KindPicker {
    kinds: Vec<TokenKind>,
    rng: SimpleRng,
}

impl KindPicker {
    /// Create a picker over `kinds` with the given seed.
    ///
    /// Panics if `kinds` is empty; configurations are validated before a
    /// picker is built.
    pub fn new(kinds: &[TokenKind], seed: u32) -> Self {
        assert!(!kinds.is_empty(), "kind alphabet must be non-empty");
        Self {
            kinds: kinds.to_vec(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw one kind uniformly from the alphabet
    pub fn draw(&mut self) -> TokenKind {
        let idx = self.rng.next_range(self.kinds.len() as u32) as usize;
        self.kinds[idx]
    }

    /// The alphabet this picker draws from
    pub fn kinds(&self) -> &[TokenKind] {
        &self.kinds
    }

    /// Current RNG state (for continuing the stream across a reset)
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}
