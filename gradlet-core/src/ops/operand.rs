// gradlet-core/src/ops/operand.rs

use crate::autograd::{Graph, Value};
use crate::nn::Parameter;

/// Either an existing node or a plain number to be wrapped as a tape leaf.
///
/// Every operator takes `impl Into<Operand>`, so `graph.mul(x, 2.0)` and
/// `graph.mul(x, y)` are both valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Node(Value),
    Constant(f64),
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Node(value)
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Operand::Node(*value)
    }
}

impl From<Parameter> for Operand {
    fn from(parameter: Parameter) -> Self {
        Operand::Node(parameter.handle())
    }
}

impl From<&Parameter> for Operand {
    fn from(parameter: &Parameter) -> Self {
        Operand::Node(parameter.handle())
    }
}

impl From<f64> for Operand {
    fn from(constant: f64) -> Self {
        Operand::Constant(constant)
    }
}

impl From<i32> for Operand {
    fn from(constant: i32) -> Self {
        Operand::Constant(f64::from(constant))
    }
}

impl Graph {
    /// Returns the node behind `operand`, pushing a leaf for constants.
    pub fn resolve(&mut self, operand: impl Into<Operand>) -> Value {
        match operand.into() {
            Operand::Node(value) => value,
            Operand::Constant(constant) => self.leaf(constant),
        }
    }
}
