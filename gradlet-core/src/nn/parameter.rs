// gradlet-core/src/nn/parameter.rs

use crate::autograd::{Graph, Value};
use std::ops::Deref;

/// A handle to a learnable scalar living in the graph's persistent store.
///
/// Parameters survive [`Graph::clear_tape`], so a network can hold them for
/// its whole lifetime while intermediate nodes come and go every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Parameter(Value);

impl Parameter {
    /// Allocates a new parameter initialised to `value`.
    pub fn new(graph: &mut Graph, value: f64) -> Self {
        Parameter(graph.alloc_parameter(value))
    }

    pub fn handle(&self) -> Value {
        self.0
    }

    /// Current payload.
    pub fn data(&self, graph: &Graph) -> f64 {
        graph.value(self.0)
    }

    pub fn grad(&self, graph: &Graph) -> f64 {
        graph.grad(self.0)
    }
}

// Allow using a Parameter wherever a node handle is expected.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Parameter> for Value {
    fn from(parameter: Parameter) -> Self {
        parameter.0
    }
}

impl From<&Parameter> for Value {
    fn from(parameter: &Parameter) -> Self {
        parameter.0
    }
}
