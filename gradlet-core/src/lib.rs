//! Scalar reverse-mode automatic differentiation, with a small multi-layer
//! perceptron and a gradient-descent trainer built on top of it.
//!
//! ```
//! use gradlet_core::{Graph, GradletError};
//!
//! # fn main() -> Result<(), GradletError> {
//! let mut graph = Graph::new();
//! let x = graph.leaf(2.0);
//! let y = graph.leaf(3.0);
//! let xy = graph.mul(x, y);
//! let f = graph.add(xy, x);
//! graph.backward(f);
//! assert_eq!(graph.value(f), 8.0);
//! assert_eq!(graph.grad(x), 4.0);
//! assert_eq!(graph.grad(y), 2.0);
//! # Ok(())
//! # }
//! ```

pub mod autograd;
pub mod config;
pub mod ops;

pub mod nn;
pub mod optim;
pub mod train;

pub mod error;

pub use autograd::{Graph, Value};
pub use config::TrainConfig;
pub use error::{ConfigError, GradletError};
pub use nn::{Layer, Mlp, Module, Neuron, Parameter};
pub use ops::Operand;
pub use train::Trainer;
