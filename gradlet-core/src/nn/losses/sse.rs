// gradlet-core/src/nn/losses/sse.rs

use crate::autograd::{Graph, Value};
use crate::error::GradletError;

/// Sum-of-squared-errors loss.
///
/// Sums `(prediction - target)^2` over every sample and every output. The
/// total is not divided by the sample count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SseLoss;

impl SseLoss {
    pub fn new() -> Self {
        SseLoss
    }

    /// Builds the loss node for a batch.
    ///
    /// `predictions[i]` holds the network outputs for sample `i` and
    /// `targets[i]` the matching ground truth.
    ///
    /// # Errors
    /// * [`GradletError::EmptyDataset`] for an empty batch.
    /// * [`GradletError::DatasetLengthMismatch`] when the batch sizes differ.
    /// * [`GradletError::TargetArity`] when a target's length differs from
    ///   its prediction's.
    pub fn calculate(
        &self,
        graph: &mut Graph,
        predictions: &[Vec<Value>],
        targets: &[Vec<f64>],
    ) -> Result<Value, GradletError> {
        if predictions.len() != targets.len() {
            return Err(GradletError::DatasetLengthMismatch {
                inputs: predictions.len(),
                targets: targets.len(),
            });
        }
        if predictions.is_empty() {
            return Err(GradletError::EmptyDataset);
        }

        let mut squared_errors = Vec::new();
        for (prediction, target) in predictions.iter().zip(targets) {
            if prediction.len() != target.len() {
                return Err(GradletError::TargetArity {
                    expected: prediction.len(),
                    actual: target.len(),
                });
            }
            for (&out, &truth) in prediction.iter().zip(target) {
                let diff = graph.sub(out, truth);
                squared_errors.push(graph.pow(diff, 2.0)?);
            }
        }
        Ok(graph.sum(0.0, squared_errors))
    }
}

#[cfg(test)]
#[path = "sse_test.rs"]
mod tests;
