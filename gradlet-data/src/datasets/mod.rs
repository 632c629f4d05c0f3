pub mod fixtures;
pub mod sample;
pub mod traits;
pub mod vec_dataset;

pub use sample::{unzip, Sample};
pub use traits::Dataset;
pub use vec_dataset::VecDataset;
