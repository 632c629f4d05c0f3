// gradlet-core/src/ops/activation/relu.rs

use crate::autograd::{Graph, Op, Value};
use crate::ops::Operand;

/// Rectified linear unit: `max(0, a)`.
///
/// The gradient at exactly zero is taken as 0.
pub fn relu_op(graph: &mut Graph, a: impl Into<Operand>) -> Value {
    let a = graph.resolve(a);
    let input = graph.value(a);
    let result = if input > 0.0 { input } else { 0.0 };
    graph.push(result, Op::Relu(a))
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
