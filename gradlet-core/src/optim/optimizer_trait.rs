use crate::autograd::Graph;
use crate::nn::Parameter;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers update model parameters in place from the gradients left in
/// the graph by the last backward pass.
pub trait Optimizer {
    /// Performs a single optimization step on every managed parameter.
    fn step(&mut self, graph: &mut Graph);

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Call this before the backward pass of each iteration, otherwise
    /// gradients from earlier iterations accumulate.
    fn zero_grad(&mut self, graph: &mut Graph);

    /// Parameters this optimizer updates.
    fn params(&self) -> &[Parameter];

    fn learning_rate(&self) -> f64;

    fn set_learning_rate(&mut self, learning_rate: f64);
}
