// gradlet-core/src/train/inference.rs

use super::trainer::validate_dataset;
use crate::autograd::Graph;
use crate::error::GradletError;
use crate::nn::Mlp;

/// Forward pass for a single sample, returning plain numbers.
///
/// Clears the tape before and after, so no nodes outlive the call.
pub fn predict_one(graph: &mut Graph, mlp: &Mlp, input: &[f64]) -> Result<Vec<f64>, GradletError> {
    graph.clear_tape();
    let outputs = mlp.forward_values(graph, input)?;
    let values = outputs.iter().map(|&out| graph.value(out)).collect();
    graph.clear_tape();
    Ok(values)
}

/// Forward pass for every sample; never returns graph nodes.
pub fn predict(
    graph: &mut Graph,
    mlp: &Mlp,
    inputs: &[Vec<f64>],
) -> Result<Vec<Vec<f64>>, GradletError> {
    inputs
        .iter()
        .map(|input| predict_one(graph, mlp, input))
        .collect()
}

/// Root-mean-squared error of the network over `inputs` against `labels`.
pub fn evaluate(
    graph: &mut Graph,
    mlp: &Mlp,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
) -> Result<f64, GradletError> {
    validate_dataset(mlp, inputs, labels)?;
    let predictions = predict(graph, mlp, inputs)?;
    rmse(&predictions, labels)
}

/// `sqrt(Σ (label - prediction)^2 / n)` where `n` counts scalar pairs.
pub fn rmse(predictions: &[Vec<f64>], labels: &[Vec<f64>]) -> Result<f64, GradletError> {
    if predictions.len() != labels.len() {
        return Err(GradletError::DatasetLengthMismatch {
            inputs: predictions.len(),
            targets: labels.len(),
        });
    }
    let mut squared_error = 0.0;
    let mut pairs = 0usize;
    for (prediction, label) in predictions.iter().zip(labels) {
        if prediction.len() != label.len() {
            return Err(GradletError::TargetArity {
                expected: prediction.len(),
                actual: label.len(),
            });
        }
        for (p, l) in prediction.iter().zip(label) {
            squared_error += (l - p).powi(2);
            pairs += 1;
        }
    }
    if pairs == 0 {
        return Err(GradletError::EmptyDataset);
    }
    Ok((squared_error / pairs as f64).sqrt())
}
