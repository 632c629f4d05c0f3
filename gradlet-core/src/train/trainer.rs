// gradlet-core/src/train/trainer.rs

use super::observer::{EpochReport, TrainingObserver};
use crate::autograd::Graph;
use crate::config::TrainConfig;
use crate::error::GradletError;
use crate::nn::{Mlp, Module, SseLoss};
use crate::optim::{Optimizer, Sgd};
use log::{debug, info};
use std::collections::HashSet;

/// Full-batch gradient descent over an [`Mlp`].
///
/// Each step clears the tape, runs the forward pass for every sample, builds
/// the sum-of-squared-errors loss, zeroes the gradients, backpropagates and
/// lets the optimizer update the parameters.
#[derive(Debug, Clone)]
pub struct Trainer<O: Optimizer = Sgd> {
    optimizer: O,
    epochs: usize,
    loss: SseLoss,
}

impl Trainer<Sgd> {
    /// Plain SGD over every parameter of `mlp`.
    pub fn sgd(mlp: &Mlp, epochs: usize, learning_rate: f64) -> Self {
        Trainer::with_optimizer(Sgd::new(mlp.parameters(), learning_rate), epochs)
    }

    /// Validates `config` and builds an SGD trainer from it.
    pub fn from_config(mlp: &Mlp, config: &TrainConfig) -> Result<Self, GradletError> {
        config.validate()?;
        Ok(Trainer::sgd(mlp, config.epochs, config.learning_rate))
    }
}

impl<O: Optimizer> Trainer<O> {
    pub fn with_optimizer(optimizer: O, epochs: usize) -> Self {
        Trainer {
            optimizer,
            epochs,
            loss: SseLoss::new(),
        }
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    pub fn optimizer_mut(&mut self) -> &mut O {
        &mut self.optimizer
    }

    /// One forward/loss/reset/backward/update cycle over `inputs`.
    ///
    /// Returns the loss computed by the forward pass, before the update.
    /// Tape handles created before the call become stale. Fails with
    /// [`GradletError::UnmanagedParameters`] when `mlp` is not the network the
    /// optimizer was built for.
    pub fn step(
        &mut self,
        graph: &mut Graph,
        mlp: &Mlp,
        inputs: &[Vec<f64>],
        targets: &[Vec<f64>],
    ) -> Result<f64, GradletError> {
        validate_dataset(mlp, inputs, targets)?;
        self.check_managed(mlp)?;
        graph.clear_tape();

        let predictions = inputs
            .iter()
            .map(|x| mlp.forward_values(graph, x))
            .collect::<Result<Vec<_>, _>>()?;
        let loss = self.loss.calculate(graph, &predictions, targets)?;
        let loss_value = graph.value(loss);

        self.optimizer.zero_grad(graph);
        graph.backward(loss);
        self.optimizer.step(graph);

        debug!(
            "step over {} samples: loss {:.6}, tape {} nodes",
            inputs.len(),
            loss_value,
            graph.tape_len()
        );
        Ok(loss_value)
    }

    fn check_managed(&self, mlp: &Mlp) -> Result<(), GradletError> {
        let managed: HashSet<_> = self.optimizer.params().iter().collect();
        let params = mlp.parameters();
        let unmanaged = params.iter().filter(|p| !managed.contains(p)).count();
        if unmanaged > 0 {
            return Err(GradletError::UnmanagedParameters {
                unmanaged,
                total: params.len(),
            });
        }
        Ok(())
    }

    /// Runs [`Trainer::step`] once per epoch, reporting each epoch to
    /// `observer`, and returns the full history.
    pub fn train<Obs: TrainingObserver + ?Sized>(
        &mut self,
        graph: &mut Graph,
        mlp: &Mlp,
        inputs: &[Vec<f64>],
        targets: &[Vec<f64>],
        observer: &mut Obs,
    ) -> Result<Vec<EpochReport>, GradletError> {
        validate_dataset(mlp, inputs, targets)?;
        self.check_managed(mlp)?;
        info!(
            "training {} parameters on {} samples for {} epochs (lr {})",
            mlp.parameter_count(),
            inputs.len(),
            self.epochs,
            self.optimizer.learning_rate()
        );

        let mut history = Vec::with_capacity(self.epochs);
        for epoch in 1..=self.epochs {
            let loss = self.step(graph, mlp, inputs, targets)?;
            let report = EpochReport { epoch, loss };
            observer.on_epoch(&report);
            history.push(report);
        }
        Ok(history)
    }
}

/// Checks sample counts and target arities before any node is built.
pub(crate) fn validate_dataset(
    mlp: &Mlp,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
) -> Result<(), GradletError> {
    if inputs.len() != targets.len() {
        return Err(GradletError::DatasetLengthMismatch {
            inputs: inputs.len(),
            targets: targets.len(),
        });
    }
    if inputs.is_empty() {
        return Err(GradletError::EmptyDataset);
    }
    let expected = mlp.output_size();
    if let Some(target) = targets.iter().find(|t| t.len() != expected) {
        return Err(GradletError::TargetArity {
            expected,
            actual: target.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
