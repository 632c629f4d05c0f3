// gradlet-core/src/ops/arithmetic/div.rs

use super::{mul_op, pow_op};
use crate::autograd::{Graph, Value};
use crate::error::GradletError;
use crate::ops::Operand;

/// `a / b`, composed as `a * b^-1`.
///
/// # Errors
/// [`GradletError::DivisionByZero`] when `b` is zero.
pub fn div_op(
    graph: &mut Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<Value, GradletError> {
    let a = graph.resolve(a);
    let reciprocal = pow_op(graph, b, -1.0)?;
    Ok(mul_op(graph, a, reciprocal))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
