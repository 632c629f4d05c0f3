// gradlet-core/src/ops/arithmetic/sum.rs

use super::add_op;
use crate::autograd::{Graph, Value};
use crate::ops::Operand;

/// Folds `add` over `items` left to right, starting from `start`.
///
/// An empty `items` yields `start` itself (resolved to a node).
pub fn sum_op<I>(graph: &mut Graph, start: impl Into<Operand>, items: I) -> Value
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    let start = graph.resolve(start);
    items
        .into_iter()
        .fold(start, |acc, item| add_op(graph, acc, item))
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
