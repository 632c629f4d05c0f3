// gradlet-core/src/nn/layers/layer.rs

use crate::autograd::{Graph, Value};
use crate::error::GradletError;
use crate::nn::init::UniformSource;
use crate::nn::module::prefixed;
use crate::nn::{Module, Neuron, Parameter};

/// A row of neurons that all read the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    input_count: usize,
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<S: UniformSource + ?Sized>(
        graph: &mut Graph,
        input_count: usize,
        output_count: usize,
        source: &mut S,
    ) -> Self {
        let neurons = (0..output_count)
            .map(|_| Neuron::new(graph, input_count, source))
            .collect();
        Layer {
            input_count,
            neurons,
        }
    }

    pub fn input_count(&self) -> usize {
        self.input_count
    }

    pub fn output_count(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Applies every neuron to `inputs`. Always returns one value per
    /// neuron, even for a single-neuron layer.
    pub fn forward(&self, graph: &mut Graph, inputs: &[Value]) -> Result<Vec<Value>, GradletError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(graph, inputs))
            .collect()
    }
}

impl Module for Layer {
    fn parameters(&self) -> Vec<Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| prefixed(&format!("neurons.{}", i), n.named_parameters()))
            .collect()
    }
}
