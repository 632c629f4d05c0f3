// gradlet-core/src/ops/arithmetic/neg.rs

use crate::autograd::{Graph, Op, Value};
use crate::ops::Operand;

/// `-a`, with its own backward rule rather than `a * -1`.
pub fn neg_op(graph: &mut Graph, a: impl Into<Operand>) -> Value {
    let a = graph.resolve(a);
    let result = -graph.value(a);
    graph.push(result, Op::Neg(a))
}
