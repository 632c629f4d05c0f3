// gradlet-data/src/datasets/traits.rs

use gradlet_core::GradletError;

/// Indexed access to a collection of samples.
pub trait Dataset {
    /// The type of a single sample.
    type Item: Send + 'static;

    /// Returns the sample at `index`.
    ///
    /// # Errors
    /// [`GradletError::IndexOutOfBounds`] when `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Item, GradletError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
