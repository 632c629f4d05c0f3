// gradlet-core/src/autograd/grad_check.rs

use super::graph::{Graph, Value};
use crate::error::GradletError;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical} != numerical grad {numerical}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Gradient for input {input_index} is NaN or infinite: {value}")]
    NonFinite { input_index: usize, value: f64 },

    #[error("Graph construction failed during gradient check: {0}")]
    Graph(#[from] GradletError),
}

/// Compares the gradients produced by [`Graph::backward`] against central
/// finite differences.
///
/// `func` builds a scalar output from leaves holding `inputs`. It is run once
/// on a fresh graph for the analytical gradients, then twice per input with
/// that input shifted by `±epsilon`. A gradient passes when either its
/// absolute or its relative difference is within `tolerance`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[Value]) -> Result<Value, GradletError>,
{
    let mut graph = Graph::new();
    let leaves = graph.leaves(inputs);
    let output = func(&mut graph, &leaves)?;
    graph.backward(output);

    for (input_index, &leaf) in leaves.iter().enumerate() {
        let analytical = graph.grad(leaf);
        if !analytical.is_finite() {
            return Err(GradCheckError::NonFinite {
                input_index,
                value: analytical,
            });
        }

        let plus = evaluate_shifted(&func, inputs, input_index, epsilon)?;
        let minus = evaluate_shifted(&func, inputs, input_index, -epsilon)?;
        let numerical = (plus - minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NonFinite {
                input_index,
                value: numerical,
            });
        }

        let difference = (analytical - numerical).abs();
        let relative = difference / (analytical.abs().max(numerical.abs()) + f64::EPSILON);
        if difference > tolerance && relative > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical,
                numerical,
                difference,
            });
        }
    }
    Ok(())
}

fn evaluate_shifted<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    shift: f64,
) -> Result<f64, GradletError>
where
    F: Fn(&mut Graph, &[Value]) -> Result<Value, GradletError>,
{
    let mut shifted = inputs.to_vec();
    shifted[index] += shift;
    let mut graph = Graph::new();
    let leaves = graph.leaves(&shifted);
    let output = func(&mut graph, &leaves)?;
    Ok(graph.value(output))
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
