// gradlet-core/src/nn/layers/neuron.rs

use crate::autograd::{Graph, Value};
use crate::error::GradletError;
use crate::nn::init::{UniformSource, INIT_HIGH, INIT_LOW};
use crate::nn::{Module, Parameter};

/// A single tanh unit: `tanh(bias + Σ wᵢ·xᵢ)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
}

impl Neuron {
    /// Creates a neuron with `input_count` weights and one bias, each drawn
    /// from `[-1, 1]` (weights first, then the bias).
    pub fn new<S: UniformSource + ?Sized>(
        graph: &mut Graph,
        input_count: usize,
        source: &mut S,
    ) -> Self {
        let weights = (0..input_count)
            .map(|_| Parameter::new(graph, source.uniform(INIT_LOW, INIT_HIGH)))
            .collect();
        let bias = Parameter::new(graph, source.uniform(INIT_LOW, INIT_HIGH));
        Neuron { weights, bias }
    }

    /// Builds a neuron around existing parameters.
    pub fn from_parameters(weights: Vec<Parameter>, bias: Parameter) -> Self {
        Neuron { weights, bias }
    }

    pub fn input_count(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> Parameter {
        self.bias
    }

    /// # Errors
    /// [`GradletError::InputArity`] when `inputs.len()` differs from the
    /// number of weights.
    pub fn forward(&self, graph: &mut Graph, inputs: &[Value]) -> Result<Value, GradletError> {
        if inputs.len() != self.weights.len() {
            return Err(GradletError::InputArity {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let products: Vec<Value> = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(w, x)| graph.mul(w, x))
            .collect();
        let activation = graph.sum(self.bias, products);
        Ok(graph.tanh(activation))
    }
}

impl Module for Neuron {
    fn parameters(&self) -> Vec<Parameter> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        let mut named: Vec<(String, Parameter)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w.{}", i), *w))
            .collect();
        named.push(("bias".to_string(), self.bias));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
