// gradlet-core/src/ops/arithmetic/mul.rs

use crate::autograd::{Graph, Op, Value};
use crate::ops::Operand;

/// `a * b`. Backward: each operand receives the other's value times the
/// output gradient.
pub fn mul_op(graph: &mut Graph, a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
    let a = graph.resolve(a);
    let b = graph.resolve(b);
    let result = graph.value(a) * graph.value(b);
    graph.push(result, Op::Mul(a, b))
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
