// gradlet-core/src/ops/activation/exp.rs

use crate::autograd::{Graph, Op, Value};
use crate::ops::Operand;

/// `e^a`. Backward: the output times the incoming gradient.
pub fn exp_op(graph: &mut Graph, a: impl Into<Operand>) -> Value {
    let a = graph.resolve(a);
    let result = graph.value(a).exp();
    graph.push(result, Op::Exp(a))
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
