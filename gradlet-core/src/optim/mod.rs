// gradlet-core/src/optim/mod.rs

//! Optimizers for training networks.
//!
//! This module provides the `Optimizer` trait and the plain gradient
//! descent rule the trainer uses.

pub mod optimizer_trait;
pub mod sgd;

// Re-export key items for easier access
pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;

// Declare test module conditionally
#[cfg(test)]
mod sgd_test;
