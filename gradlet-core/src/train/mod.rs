// gradlet-core/src/train/mod.rs

//! Gradient-descent training loop, progress reporting and evaluation.

pub mod inference;
pub mod observer;
pub mod trainer;

pub use inference::{evaluate, predict, predict_one, rmse};
pub use observer::{format_report, EpochReport, LogObserver, NoopObserver, TrainingObserver};
pub use trainer::Trainer;
