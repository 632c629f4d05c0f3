// src/nn/mod.rs
// Neurons, layers, the MLP container, the loss and parameter initialisation.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module
pub mod parameter; // struct Parameter

// Re-export common items
pub use init::{CyclicSource, RngSource, UniformSource};
pub use layers::{Layer, Mlp, Neuron};
pub use losses::SseLoss;
pub use module::Module;
pub use parameter::Parameter;
