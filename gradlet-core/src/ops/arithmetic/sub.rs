// gradlet-core/src/ops/arithmetic/sub.rs

use super::{add_op, neg_op};
use crate::autograd::{Graph, Value};
use crate::ops::Operand;

/// `a - b`, composed as `a + (-b)`.
pub fn sub_op(graph: &mut Graph, a: impl Into<Operand>, b: impl Into<Operand>) -> Value {
    let a = graph.resolve(a);
    let negated = neg_op(graph, b);
    add_op(graph, a, negated)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
