use super::*;
use crate::nn::init::{CyclicSource, RngSource};
use approx::assert_relative_eq;

#[test]
fn test_neuron_draws_weights_then_bias() {
    let mut graph = Graph::new();
    let mut source = CyclicSource::new(vec![0.1, 0.2, 0.3, 0.4]);
    let neuron = Neuron::new(&mut graph, 3, &mut source);

    assert_eq!(neuron.input_count(), 3);
    let weights: Vec<f64> = neuron.weights().iter().map(|w| w.data(&graph)).collect();
    assert_eq!(weights, vec![0.1, 0.2, 0.3]);
    assert_eq!(neuron.bias().data(&graph), 0.4);
    assert_eq!(source.drawn(), 4);
}

#[test]
fn test_neuron_forward_value() -> Result<(), GradletError> {
    let mut graph = Graph::new();
    let mut source = CyclicSource::new(vec![0.5, -0.25, 0.1]);
    let neuron = Neuron::new(&mut graph, 2, &mut source);
    let inputs = graph.leaves(&[2.0, 4.0]);

    let out = neuron.forward(&mut graph, &inputs)?;
    // 0.1 + 0.5*2 - 0.25*4 = 0.1
    assert_relative_eq!(graph.value(out), 0.1f64.tanh(), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_neuron_forward_gradients() -> Result<(), GradletError> {
    let mut graph = Graph::new();
    let mut source = CyclicSource::new(vec![0.5, -0.25, 0.1]);
    let neuron = Neuron::new(&mut graph, 2, &mut source);
    let inputs = graph.leaves(&[2.0, 4.0]);
    let out = neuron.forward(&mut graph, &inputs)?;
    graph.backward(out);

    let t = 0.1f64.tanh();
    let local = 1.0 - t * t;
    assert_relative_eq!(neuron.weights()[0].grad(&graph), 2.0 * local, epsilon = 1e-12);
    assert_relative_eq!(neuron.weights()[1].grad(&graph), 4.0 * local, epsilon = 1e-12);
    assert_relative_eq!(neuron.bias().grad(&graph), local, epsilon = 1e-12);
    assert_relative_eq!(graph.grad(inputs[1]), -0.25 * local, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_neuron_rejects_wrong_arity() {
    let mut graph = Graph::new();
    let neuron = Neuron::new(&mut graph, 3, &mut RngSource::seeded(1));
    let inputs = graph.leaves(&[1.0, 2.0]);
    assert_eq!(
        neuron.forward(&mut graph, &inputs),
        Err(GradletError::InputArity {
            expected: 3,
            actual: 2
        })
    );
}

#[test]
fn test_neuron_named_parameters() {
    let mut graph = Graph::new();
    let neuron = Neuron::new(&mut graph, 2, &mut RngSource::seeded(1));
    let names: Vec<String> = neuron.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["w.0", "w.1", "bias"]);
    assert_eq!(neuron.parameter_count(), 3);
}

#[test]
fn test_zero_input_neuron_is_tanh_of_bias() -> Result<(), GradletError> {
    let mut graph = Graph::new();
    let bias = Parameter::new(&mut graph, 0.7);
    let neuron = Neuron::from_parameters(Vec::new(), bias);
    let out = neuron.forward(&mut graph, &[])?;
    assert_relative_eq!(graph.value(out), 0.7f64.tanh());
    Ok(())
}
