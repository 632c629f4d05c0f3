//! Build [`TrainConfig`] from environment variables.
//!
//! Key names live in [`crate::config::constants`]; every set-but-invalid
//! variable surfaces as a typed [`ConfigError`].

use super::constants::{
    ENV_EPOCHS, ENV_INPUT_SIZE, ENV_LAYER_SIZES, ENV_LEARNING_RATE, ENV_LOG_EVERY, ENV_PREFIX,
    ENV_SEED,
};
use super::TrainConfig;
use crate::error::ConfigError;

/// Returns the full environment variable key for a suffix (`EPOCHS` → `GRADLET_EPOCHS`).
#[must_use]
pub fn env_key(suffix: &str) -> String {
    format!("{ENV_PREFIX}{suffix}")
}

/// Reads an environment variable as a string.
///
/// `Ok(None)` when unset; `Err(ConfigError::EnvVar)` when set but not Unicode.
pub fn env_string(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(s) => Ok(Some(s)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Reads an environment variable and parses it into `T`.
pub fn env_parsed<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(s) = env_string(key)? else {
        return Ok(None);
    };
    match s.trim().parse() {
        Ok(t) => Ok(Some(t)),
        Err(e) => Err(ConfigError::Parse {
            key: key.to_string(),
            value: s,
            message: e.to_string(),
        }),
    }
}

/// Reads a comma-separated list (e.g. `4,4,1`), parsing each item into `T`.
pub fn env_list<T>(key: &str) -> Result<Option<Vec<T>>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(s) = env_string(key)? else {
        return Ok(None);
    };
    s.split(',')
        .map(|item| {
            item.trim().parse::<T>().map_err(|e| ConfigError::Parse {
                key: key.to_string(),
                value: s.clone(),
                message: format!("item {:?}: {}", item.trim(), e),
            })
        })
        .collect::<Result<Vec<T>, ConfigError>>()
        .map(Some)
}

/// Builds [`TrainConfig`] from `GRADLET_*` variables, falling back to
/// [`TrainConfig::default`] for unset values. Does not validate.
pub fn from_env() -> Result<TrainConfig, ConfigError> {
    let default = TrainConfig::default();

    let seed = env_parsed::<u64>(&env_key(ENV_SEED))?.unwrap_or(default.seed);
    let input_size = env_parsed::<usize>(&env_key(ENV_INPUT_SIZE))?.unwrap_or(default.input_size);
    let layer_sizes = env_list::<usize>(&env_key(ENV_LAYER_SIZES))?
        .unwrap_or_else(|| default.layer_sizes.clone());
    let epochs = env_parsed::<usize>(&env_key(ENV_EPOCHS))?.unwrap_or(default.epochs);
    let learning_rate =
        env_parsed::<f64>(&env_key(ENV_LEARNING_RATE))?.unwrap_or(default.learning_rate);
    let log_every = env_parsed::<usize>(&env_key(ENV_LOG_EVERY))?.unwrap_or(default.log_every);

    Ok(TrainConfig {
        seed,
        input_size,
        layer_sizes,
        epochs,
        learning_rate,
        log_every,
    })
}
