// gradlet-core/src/nn/module.rs

use crate::autograd::Graph;
use crate::nn::Parameter;

/// The base trait for network components that own parameters.
///
/// Forward passes differ in arity between a neuron (one output) and a layer
/// (many), so `forward` is an inherent method on each type rather than part
/// of this trait.
pub trait Module: std::fmt::Debug {
    /// Every learnable parameter, in a stable order.
    fn parameters(&self) -> Vec<Parameter>;

    /// Parameters with hierarchical names (e.g. `"layers.1.neurons.3.bias"`).
    fn named_parameters(&self) -> Vec<(String, Parameter)>;

    fn parameter_count(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter to 0.
    fn zero_grad(&self, graph: &mut Graph) {
        for parameter in self.parameters() {
            graph.zero_grad(parameter);
        }
    }

    /// Current payloads of every parameter, in `parameters()` order.
    fn parameter_values(&self, graph: &Graph) -> Vec<f64> {
        self.parameters().iter().map(|p| p.data(graph)).collect()
    }
}

/// Prefixes every name in `named` with `prefix.`.
pub(crate) fn prefixed(prefix: &str, named: Vec<(String, Parameter)>) -> Vec<(String, Parameter)> {
    named
        .into_iter()
        .map(|(name, parameter)| (format!("{}.{}", prefix, name), parameter))
        .collect()
}
