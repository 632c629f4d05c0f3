// gradlet-core/src/ops/activation/tanh.rs

use crate::autograd::{Graph, Op, Value};
use crate::ops::Operand;

/// Hyperbolic tangent. Backward: `(1 - tanh(a)^2) * grad`, computed from
/// the stored output.
pub fn tanh_op(graph: &mut Graph, a: impl Into<Operand>) -> Value {
    let a = graph.resolve(a);
    let result = graph.value(a).tanh();
    graph.push(result, Op::Tanh(a))
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
