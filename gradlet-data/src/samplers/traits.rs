// gradlet-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Decides the order in which a `DataLoader` visits dataset indices.
pub trait Sampler: Debug + Send + Sync {
    /// Returns one epoch's worth of indices into a dataset of `dataset_len`
    /// items.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Number of indices [`Sampler::iter`] yields for `dataset_len` items.
    fn len(&self, dataset_len: usize) -> usize {
        dataset_len
    }
}
