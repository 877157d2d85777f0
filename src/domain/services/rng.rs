//! Randomness sources for attribute and stat rolls
//!
//! Two implementations sit behind the [`RandomSource`] trait: an entropy-backed
//! source for normal play and a seeded 32-bit mix-and-avalanche generator for
//! reproducible rolls. Given the same seed, [`SeededRandom`] produces the same
//! sequence of draws bit-for-bit.

use rand::Rng;

/// A source of uniform floats in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform float in `[0, 1)`.
    fn next(&mut self) -> f64;

    /// Uniform integer in `[min, max]` inclusive.
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        (self.next() * (max - min + 1) as f64).floor() as i64 + min
    }

    /// Uniform float in `[min, max)`.
    fn next_float(&mut self, min: f64, max: f64) -> f64 {
        self.next() * (max - min) + min
    }
}

/// Non-deterministic source backed by the platform's ambient entropy.
#[derive(Default)]
pub struct EntropyRandom {
    rng: rand::rngs::ThreadRng,
}

impl EntropyRandom {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RandomSource for EntropyRandom {
    fn next(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Deterministic source: 32-bit state advanced by a fixed odd constant, then
/// avalanched through multiply/xor/shift steps (mulberry32).
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl RandomSource for SeededRandom {
    fn next(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }
}
