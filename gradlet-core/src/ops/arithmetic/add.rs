// gradlet-core/src/ops/arithmetic/add.rs

use crate::autograd::{Graph, Op, Value};
use crate::ops::Operand;

/// `a + b`. Backward: both operands receive the output gradient unchanged.
pub fn add_op(graph: &mut Graph, a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
    let a = graph.resolve(a);
    let b = graph.resolve(b);
    let result = graph.value(a) + graph.value(b);
    graph.push(result, Op::Add(a, b))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
