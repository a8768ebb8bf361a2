use crate::rng::{self, SplitMix64};

/// Per-tick evaluation context supplied by the external driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
    pub seed: u64,
}

impl TickContext {
    /// Deterministic generator for this tick, decorrelated per stream
    /// (typically a node's stable id).
    pub fn rng_for(&self, stream: u64) -> SplitMix64 {
        SplitMix64::new(rng::derive_seed(self.seed, self.tick, stream))
    }
}
