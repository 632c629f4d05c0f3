// dataloader.rs
//! # DataLoader
//!
//! Groups dataset samples into batches, in the order chosen by a
//! [`Sampler`].
//!
//! ```rust
//! use gradlet_data::dataloader::DataLoader;
//! use gradlet_data::datasets::VecDataset;
//! use gradlet_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false);
//! let batches: Vec<Vec<i32>> = loader.collect::<Result<_, _>>().unwrap();
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use gradlet_core::GradletError;
use log::debug;

/// Iterator over batches of `D::Item`.
///
/// One pass over the loader is one epoch. Call [`DataLoader::reset`] to draw
/// a fresh index order from the sampler for the next epoch.
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
    indices_iter: Box<dyn Iterator<Item = usize> + Send + Sync>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// A `batch_size` of 0 is treated as 1.
    pub fn new(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Self {
        let indices_iter = sampler.iter(dataset.len());
        Self {
            dataset,
            batch_size: batch_size.max(1),
            sampler,
            drop_last,
            indices_iter,
        }
    }

    /// Starts a new epoch.
    pub fn reset(&mut self) {
        debug!(
            "DataLoader reset: {} samples, batch size {}",
            self.dataset.len(),
            self.batch_size
        );
        self.indices_iter = self.sampler.iter(self.dataset.len());
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches one full epoch yields.
    pub fn num_batches(&self) -> usize {
        let samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            samples / self.batch_size
        } else {
            samples.div_ceil(self.batch_size)
        }
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<D::Item>, GradletError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for index in self.indices_iter.by_ref().take(self.batch_size) {
            match self.dataset.get(index) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        Some(Ok(batch))
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
