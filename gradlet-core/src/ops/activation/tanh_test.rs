use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_tanh_at_zero() {
    let mut graph = Graph::new();
    let x = graph.leaf(0.0);
    let y = tanh_op(&mut graph, x);
    assert_eq!(graph.value(y), 0.0);
    graph.backward(y);
    assert_eq!(graph.grad(x), 1.0);
}

#[test]
fn test_tanh_saturates() {
    let mut graph = Graph::new();
    let x = graph.leaf(20.0);
    let y = tanh_op(&mut graph, x);
    assert_relative_eq!(graph.value(y), 1.0, epsilon = 1e-12);
    graph.backward(y);
    assert!(graph.grad(x).abs() < 1e-12);
}

#[test]
fn test_tanh_known_derivative() {
    let mut graph = Graph::new();
    let x = graph.leaf(0.5);
    let y = tanh_op(&mut graph, x);
    graph.backward(y);
    let t = 0.5f64.tanh();
    assert_relative_eq!(graph.grad(x), 1.0 - t * t, epsilon = 1e-12);
}

#[test]
fn test_tanh_grad_check() {
    for input in [-1.5, -0.2, 0.0, 0.9] {
        let result = check_grad(|graph, inputs| Ok(tanh_op(graph, inputs[0])), &[input], 1e-6, 1e-6);
        assert!(result.is_ok(), "input {}: {:?}", input, result);
    }
}
