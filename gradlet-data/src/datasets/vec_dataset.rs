// gradlet-data/src/datasets/vec_dataset.rs

use super::sample::Sample;
use super::traits::Dataset;
use gradlet_core::GradletError;

/// A dataset backed by a `Vec`; `get` clones the stored item.
#[derive(Debug, Clone, PartialEq)]
pub struct VecDataset<T: Clone + Send + 'static> {
    data: Vec<T>,
}

impl<T: Clone + Send + 'static> VecDataset<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl VecDataset<Sample> {
    /// Pairs `inputs[i]` with `targets[i]`.
    ///
    /// # Errors
    /// [`GradletError::DatasetLengthMismatch`] when the two lists differ in
    /// length.
    pub fn supervised(
        inputs: Vec<Vec<f64>>,
        targets: Vec<Vec<f64>>,
    ) -> Result<Self, GradletError> {
        if inputs.len() != targets.len() {
            return Err(GradletError::DatasetLengthMismatch {
                inputs: inputs.len(),
                targets: targets.len(),
            });
        }
        Ok(Self::new(
            inputs
                .into_iter()
                .zip(targets)
                .map(|(inputs, targets)| Sample::new(inputs, targets))
                .collect(),
        ))
    }

    /// Splits the samples back into the `(inputs, targets)` lists the
    /// trainer consumes.
    pub fn unzip(&self) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        super::sample::unzip(&self.data)
    }
}

impl<T: Clone + Send + 'static> Dataset for VecDataset<T> {
    type Item = T;

    fn get(&self, index: usize) -> Result<Self::Item, GradletError> {
        self.data
            .get(index)
            .cloned()
            .ok_or(GradletError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
