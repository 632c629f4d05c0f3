use crate::autograd::Graph;
use crate::nn::Parameter;
use crate::optim::optimizer_trait::Optimizer;
use log::warn;

/// Plain stochastic gradient descent: `value -= learning_rate * grad`.
///
/// No momentum, no weight decay, a fixed learning rate.
#[derive(Debug, Clone)]
pub struct Sgd {
    params: Vec<Parameter>,
    learning_rate: f64,
}

impl Sgd {
    /// Creates a new `Sgd` over `params`.
    ///
    /// A non-positive learning rate is accepted but logged, since it either
    /// freezes the parameters or climbs the loss.
    pub fn new(params: impl IntoIterator<Item = Parameter>, learning_rate: f64) -> Self {
        if learning_rate <= 0.0 {
            warn!("SGD created with non-positive learning rate {}", learning_rate);
        }
        Sgd {
            params: params.into_iter().collect(),
            learning_rate,
        }
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, graph: &mut Graph) {
        for param in &self.params {
            let updated = graph.value(param) - self.learning_rate * graph.grad(param);
            graph.set_value(param, updated);
        }
    }

    fn zero_grad(&mut self, graph: &mut Graph) {
        for param in &self.params {
            graph.zero_grad(param);
        }
    }

    fn params(&self) -> &[Parameter] {
        &self.params
    }

    fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, learning_rate: f64) {
        self.learning_rate = learning_rate;
    }
}
