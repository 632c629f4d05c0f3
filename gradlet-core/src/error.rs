use thiserror::Error;

/// Error type for the gradlet engine, network and trainer.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum GradletError {
    #[error("Input arity mismatch: expected {expected} inputs, got {actual}")]
    InputArity { expected: usize, actual: usize },

    #[error("Target arity mismatch: network produces {expected} outputs, target has {actual}")]
    TargetArity { expected: usize, actual: usize },

    #[error("Domain error: {base} cannot be raised to the power {exponent}")]
    Domain { base: f64, exponent: f64 },

    #[error("Division by zero error")]
    DivisionByZero,

    #[error("Dataset length mismatch: {inputs} input samples but {targets} targets")]
    DatasetLengthMismatch { inputs: usize, targets: usize },

    #[error("Cannot train or evaluate on an empty dataset")]
    EmptyDataset,

    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Optimizer does not manage {unmanaged} of the network's {total} parameters")]
    UnmanagedParameters { unmanaged: usize, total: usize },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while building or validating a [`TrainConfig`](crate::config::TrainConfig).
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Validation(String),

    #[error("Environment variable {key} could not be read: {message}")]
    EnvVar { key: String, message: String },

    #[error("Environment variable {key}={value:?} could not be parsed: {message}")]
    Parse {
        key: String,
        value: String,
        message: String,
    },
}
