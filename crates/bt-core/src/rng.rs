//! Deterministic RNG helpers.
//!
//! Intentionally small and dependency-free. Not cryptographic.

/// SplitMix64: small deterministic generator, also good for seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        mix64(self.state)
    }

    /// Uniform in [0, 1) with 24 bits of mantissa.
    pub fn next_f32_unit(&mut self) -> f32 {
        let x = (self.next_u64() as u32) >> 8;
        (x as f32) / ((1u32 << 24) as f32)
    }
}

pub fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// Decorrelates a draw from the global seed, the current tick, and a
/// per-consumer stream id, so every `(seed, tick, stream)` triple yields an
/// independent reproducible generator.
pub fn derive_seed(global_seed: u64, tick: u64, stream: u64) -> u64 {
    let x = global_seed ^ mix64(tick.wrapping_add(0x9E3779B97F4A7C15)) ^ mix64(stream);
    mix64(x)
}
