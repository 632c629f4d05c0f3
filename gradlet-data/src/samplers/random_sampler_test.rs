// gradlet-data/src/samplers/random_sampler_test.rs

use super::*;
use std::collections::HashSet;

#[test]
fn test_random_sampler_is_a_permutation() {
    let sampler = RandomSampler::with_seed(3);
    let indices: Vec<usize> = sampler.iter(50).collect();
    assert_eq!(indices.len(), 50);
    let unique: HashSet<usize> = indices.iter().copied().collect();
    assert_eq!(unique.len(), 50);
    assert!(indices.iter().all(|&i| i < 50));
    assert_eq!(sampler.len(50), 50);
}

#[test]
fn test_seeded_samplers_agree() {
    let a = RandomSampler::with_seed(17);
    let b = RandomSampler::with_seed(17);
    for _ in 0..3 {
        assert_eq!(a.iter(20).collect::<Vec<_>>(), b.iter(20).collect::<Vec<_>>());
    }
}

#[test]
fn test_successive_epochs_reshuffle() {
    let sampler = RandomSampler::with_seed(5);
    let first: Vec<usize> = sampler.iter(30).collect();
    let second: Vec<usize> = sampler.iter(30).collect();
    // 30! permutations: a repeat would mean the generator state was reset.
    assert_ne!(first, second);
}

#[test]
fn test_random_sampler_empty_dataset() {
    assert_eq!(RandomSampler::new().iter(0).count(), 0);
}
