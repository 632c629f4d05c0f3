// gradlet-core/src/nn/init.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lower bound of the initial weight and bias range.
pub const INIT_LOW: f64 = -1.0;
/// Upper bound of the initial weight and bias range.
pub const INIT_HIGH: f64 = 1.0;

/// Source of uniformly distributed reals used to initialise parameters.
pub trait UniformSource {
    /// Returns a value in `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform(low, high)
    }
}

/// Adapts any [`rand::Rng`] into a [`UniformSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Deterministic source: the same seed always yields the same network.
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        RngSource::new(StdRng::from_entropy())
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// Values are clamped into the requested range. Handy for tests that need
/// exact weights.
#[derive(Debug, Clone, Default)]
pub struct CyclicSource {
    values: Vec<f64>,
    cursor: usize,
}

impl CyclicSource {
    pub fn new(values: Vec<f64>) -> Self {
        CyclicSource { values, cursor: 0 }
    }

    /// Number of values drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for CyclicSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if self.values.is_empty() {
            return (low + high) / 2.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(low.min(high), high.max(low))
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
