// gradlet-core/src/autograd/op.rs

use super::graph::{Graph, Value};

/// The operation that produced a node, carrying handles to its operands.
///
/// The backward pass dispatches on this tag to apply the local chain rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Leaf,
    Add(Value, Value),
    Mul(Value, Value),
    /// Power with a constant exponent.
    Pow(Value, f64),
    Neg(Value),
    Tanh(Value),
    Exp(Value),
    Relu(Value),
}

impl Op {
    pub fn operands(&self) -> Vec<Value> {
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow(a, _) | Op::Neg(a) | Op::Tanh(a) | Op::Exp(a) | Op::Relu(a) => vec![a],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "leaf",
            Op::Add(..) => "add",
            Op::Mul(..) => "mul",
            Op::Pow(..) => "pow",
            Op::Neg(_) => "neg",
            Op::Tanh(_) => "tanh",
            Op::Exp(_) => "exp",
            Op::Relu(_) => "relu",
        }
    }

    /// Adds this node's contribution to each operand's gradient.
    ///
    /// `out_value` and `out_grad` are the payload and accumulated gradient of
    /// the node this op produced. Operand payloads are read at call time.
    pub(crate) fn propagate(&self, graph: &mut Graph, out_value: f64, out_grad: f64) {
        match *self {
            Op::Leaf => {}
            Op::Add(a, b) => {
                graph.accumulate_grad(a, out_grad);
                graph.accumulate_grad(b, out_grad);
            }
            Op::Mul(a, b) => {
                let (a_value, b_value) = (graph.value(a), graph.value(b));
                graph.accumulate_grad(a, b_value * out_grad);
                graph.accumulate_grad(b, a_value * out_grad);
            }
            Op::Pow(a, exponent) => {
                let base = graph.value(a);
                graph.accumulate_grad(a, exponent * base.powf(exponent - 1.0) * out_grad);
            }
            Op::Neg(a) => graph.accumulate_grad(a, -out_grad),
            Op::Tanh(a) => graph.accumulate_grad(a, (1.0 - out_value * out_value) * out_grad),
            Op::Exp(a) => graph.accumulate_grad(a, out_value * out_grad),
            Op::Relu(a) => {
                let local = if out_value > 0.0 { 1.0 } else { 0.0 };
                graph.accumulate_grad(a, local * out_grad);
            }
        }
    }
}
