// gradlet-core/src/autograd/mod.rs

//! Scalar computation graph and reverse-mode differentiation.
//!
//! Nodes live in a [`Graph`] arena and are addressed through `Copy` handles
//! ([`Value`]). Each node records the [`Op`] that produced it, and
//! [`Graph::backward`] walks the graph in reverse topological order applying
//! each op's local derivative.

pub mod backward;
pub mod grad_check;
pub mod graph;
pub mod op;

pub use grad_check::{check_grad, GradCheckError};
pub use graph::{Graph, Node, Store, Value};
pub use op::Op;
