// gradlet-core/src/nn/layers/mlp.rs

use crate::autograd::{Graph, Value};
use crate::error::GradletError;
use crate::nn::init::UniformSource;
use crate::nn::module::prefixed;
use crate::nn::{Layer, Module, Parameter};
use log::debug;

/// Multi-layer perceptron: layers chained over `[input_size] + layer_sizes`.
#[derive(Debug, Clone)]
pub struct Mlp {
    input_size: usize,
    layers: Vec<Layer>,
}

impl Mlp {
    /// # Errors
    /// [`GradletError::InvalidArchitecture`] when `layer_sizes` is empty or
    /// contains a zero width.
    pub fn new<S: UniformSource + ?Sized>(
        graph: &mut Graph,
        input_size: usize,
        layer_sizes: &[usize],
        source: &mut S,
    ) -> Result<Self, GradletError> {
        if layer_sizes.is_empty() {
            return Err(GradletError::InvalidArchitecture(
                "at least one layer is required".to_string(),
            ));
        }
        if let Some(position) = layer_sizes.iter().position(|&width| width == 0) {
            return Err(GradletError::InvalidArchitecture(format!(
                "layer {} has zero width",
                position
            )));
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = input_size;
        for &width in layer_sizes {
            layers.push(Layer::new(graph, fan_in, width, source));
            fan_in = width;
        }
        let mlp = Mlp { input_size, layers };
        debug!(
            "built MLP {}->{:?} with {} parameters",
            input_size,
            layer_sizes,
            mlp.parameter_count()
        );
        Ok(mlp)
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, Layer::output_count)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Feeds `inputs` through every layer; the last layer's outputs are the
    /// prediction.
    pub fn forward(&self, graph: &mut Graph, inputs: &[Value]) -> Result<Vec<Value>, GradletError> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(graph, &activations)?;
        }
        Ok(activations)
    }

    /// Lifts plain numbers into tape leaves, then runs [`Mlp::forward`].
    pub fn forward_values(&self, graph: &mut Graph, inputs: &[f64]) -> Result<Vec<Value>, GradletError> {
        let leaves = graph.leaves(inputs);
        self.forward(graph, &leaves)
    }
}

impl Module for Mlp {
    fn parameters(&self) -> Vec<Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Parameter)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| prefixed(&format!("layers.{}", i), l.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
