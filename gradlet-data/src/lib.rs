//! Datasets, samplers and mini-batch loading for `gradlet-core` training.

pub mod dataloader;
pub mod datasets;
pub mod samplers;

// Re-export main components
pub use dataloader::DataLoader;
pub use datasets::{Dataset, Sample, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
