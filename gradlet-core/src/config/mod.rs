//! Training configuration.
//!
//! Load from environment via [`from_env`] and validate with
//! [`TrainConfig::validate`]. Defaults and env key names live in the
//! `constants` submodule.

mod builder;
mod constants;

use constants::{
    DEFAULT_EPOCHS, DEFAULT_INPUT_SIZE, DEFAULT_LAYER_SIZES, DEFAULT_LEARNING_RATE,
    DEFAULT_LOG_EVERY, DEFAULT_SEED,
};

pub use crate::error::ConfigError;
pub use builder::{env_key, env_list, env_parsed, env_string, from_env};

/// Hyperparameters for building and training an [`Mlp`](crate::nn::Mlp).
#[derive(Clone, Debug, PartialEq)]
pub struct TrainConfig {
    /// Seed for the parameter initialisation source.
    pub seed: u64,
    /// Number of network inputs.
    pub input_size: usize,
    /// Width of every layer, last one being the output arity.
    pub layer_sizes: Vec<usize>,
    /// Full passes over the dataset.
    pub epochs: usize,
    /// Gradient descent step size.
    pub learning_rate: f64,
    /// Report the loss every this many epochs.
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            input_size: DEFAULT_INPUT_SIZE,
            layer_sizes: DEFAULT_LAYER_SIZES.to_vec(),
            epochs: DEFAULT_EPOCHS,
            learning_rate: DEFAULT_LEARNING_RATE,
            log_every: DEFAULT_LOG_EVERY,
        }
    }
}

impl TrainConfig {
    /// Checks the invariants the trainer and network rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layer_sizes.is_empty() {
            return Err(ConfigError::Validation(
                "layer_sizes must name at least one layer".to_string(),
            ));
        }
        if self.layer_sizes.contains(&0) {
            return Err(ConfigError::Validation(format!(
                "layer_sizes must not contain zero widths, got {:?}",
                self.layer_sizes
            )));
        }
        if self.epochs == 0 {
            return Err(ConfigError::Validation("epochs must be > 0".to_string()));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "learning_rate must be finite and > 0, got {}",
                self.learning_rate
            )));
        }
        if self.log_every == 0 {
            return Err(ConfigError::Validation("log_every must be > 0".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
