// gradlet-data/src/datasets/fixtures.rs

//! Small in-memory datasets for demos and tests.

use super::sample::Sample;
use super::vec_dataset::VecDataset;

/// Four 3-input samples with ±1 targets; the classic toy regression set for
/// an `Mlp(3, [4, 4, 1])`.
pub fn tiny_regression() -> VecDataset<Sample> {
    VecDataset::new(vec![
        Sample::scalar(vec![2.0, 3.0, -1.0], 1.0),
        Sample::scalar(vec![3.0, -1.0, 0.5], -1.0),
        Sample::scalar(vec![0.5, 1.0, 1.0], -1.0),
        Sample::scalar(vec![1.0, 1.0, -1.0], 1.0),
    ])
}

/// Logical AND over ±1 inputs: +1 only when both inputs are +1. Linearly
/// separable.
pub fn and_gate() -> VecDataset<Sample> {
    VecDataset::new(vec![
        Sample::scalar(vec![1.0, 1.0], 1.0),
        Sample::scalar(vec![1.0, -1.0], -1.0),
        Sample::scalar(vec![-1.0, 1.0], -1.0),
        Sample::scalar(vec![-1.0, -1.0], -1.0),
    ])
}
