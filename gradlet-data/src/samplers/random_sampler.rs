// gradlet-data/src/samplers/random_sampler.rs

use super::traits::Sampler;
use log::warn;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Mutex;

/// Visits every index exactly once per epoch, in shuffled order.
///
/// The generator is kept across epochs, so successive calls to
/// [`Sampler::iter`] yield different permutations. A seeded sampler yields
/// the same sequence of permutations on every run.
#[derive(Debug)]
pub struct RandomSampler {
    rng: Mutex<StdRng>,
}

impl RandomSampler {
    /// Shuffles with a generator seeded from OS entropy.
    pub fn new() -> Self {
        RandomSampler {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomSampler {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        RandomSampler::new()
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        let mut indices: Vec<usize> = (0..dataset_len).collect();
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| {
            warn!("RandomSampler generator lock was poisoned; reusing its state");
            poisoned.into_inner()
        });
        indices.shuffle(&mut *rng);
        Box::new(indices.into_iter())
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
