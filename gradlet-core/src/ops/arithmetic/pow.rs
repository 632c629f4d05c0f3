// gradlet-core/src/ops/arithmetic/pow.rs

use crate::autograd::{Graph, Op, Value};
use crate::error::GradletError;
use crate::ops::Operand;

/// Raises `base` to a constant `exponent`.
///
/// Backward: `exponent * base^(exponent - 1) * grad`.
///
/// # Errors
/// * [`GradletError::DivisionByZero`] for a zero base with a negative exponent.
/// * [`GradletError::Domain`] for a zero base with `0 <= exponent < 1` (the
///   derivative is undefined there) or a negative base with a fractional
///   exponent.
pub fn pow_op(
    graph: &mut Graph,
    base: impl Into<Operand>,
    exponent: f64,
) -> Result<Value, GradletError> {
    let base = graph.resolve(base);
    let base_value = graph.value(base);
    check_domain(base_value, exponent)?;
    Ok(graph.push(base_value.powf(exponent), Op::Pow(base, exponent)))
}

fn check_domain(base: f64, exponent: f64) -> Result<(), GradletError> {
    if base == 0.0 {
        if exponent < 0.0 {
            return Err(GradletError::DivisionByZero);
        }
        if exponent < 1.0 {
            return Err(GradletError::Domain { base, exponent });
        }
    } else if base < 0.0 && exponent.fract() != 0.0 {
        return Err(GradletError::Domain { base, exponent });
    }
    Ok(())
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
