use super::*;
use crate::error::GradletError;
use crate::nn::Parameter;

#[test]
fn test_topological_order_puts_operands_first() {
    let mut graph = Graph::new();
    let a = graph.leaf(1.0);
    let b = graph.leaf(2.0);
    let c = graph.mul(a, b);
    let d = graph.add(c, a);

    let order = graph.topological_order(d);
    let position = |v: Value| order.iter().position(|&o| o == v).unwrap();
    assert_eq!(order.len(), 4);
    assert_eq!(*order.last().unwrap(), d);
    assert!(position(a) < position(c));
    assert!(position(b) < position(c));
    assert!(position(c) < position(d));
}

#[test]
fn test_diamond_visits_shared_node_once() {
    // b = a*2 feeds both c and d; e = c + d
    let mut graph = Graph::new();
    let a = graph.leaf(3.0);
    let b = graph.mul(a, 2.0);
    let c = graph.tanh(b);
    let d = graph.exp(b);
    let e = graph.add(c, d);

    let order = graph.topological_order(e);
    assert_eq!(order.iter().filter(|&&v| v == b).count(), 1);

    graph.backward(e);
    let t = 6.0f64.tanh();
    let expected = 2.0 * ((1.0 - t * t) + 6.0f64.exp());
    assert!((graph.grad(a) - expected).abs() < 1e-9);
}

#[test]
fn test_backward_sets_root_gradient_to_one() {
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let y = graph.mul(x, 5.0);
    graph.backward(y);
    assert_eq!(graph.grad(y), 1.0);
    graph.backward(y);
    assert_eq!(graph.grad(y), 1.0);
}

#[test]
fn test_backward_without_reset_accumulates() {
    let mut graph = Graph::new();
    let x = Parameter::new(&mut graph, 2.0);
    let y = Parameter::new(&mut graph, 3.0);
    let z = graph.mul(x, y);

    graph.backward(z);
    assert_eq!(graph.grad(x), 3.0);
    assert_eq!(graph.grad(y), 2.0);

    graph.backward(z);
    assert_eq!(graph.grad(x), 6.0);
    assert_eq!(graph.grad(y), 4.0);
}

#[test]
fn test_backward_from_leaf() {
    let mut graph = Graph::new();
    let x = graph.leaf(42.0);
    graph.backward(x);
    assert_eq!(graph.grad(x), 1.0);
}

#[test]
fn test_nodes_unreachable_from_root_are_untouched() {
    let mut graph = Graph::new();
    let x = graph.leaf(1.0);
    let y = graph.leaf(2.0);
    let unrelated = graph.mul(y, 3.0);
    let root = graph.mul(x, 4.0);
    graph.backward(root);
    assert_eq!(graph.grad(x), 4.0);
    assert_eq!(graph.grad(y), 0.0);
    assert_eq!(graph.grad(unrelated), 0.0);
}

#[test]
fn test_long_chain_does_not_overflow_stack() -> Result<(), GradletError> {
    let mut graph = Graph::new();
    let x = graph.leaf(1.0);
    let mut acc = graph.leaf(0.0);
    for _ in 0..100_000 {
        acc = graph.add(acc, x);
    }
    let y = graph.pow(acc, 1.0)?;
    graph.backward(y);
    assert_eq!(graph.value(y), 100_000.0);
    assert_eq!(graph.grad(x), 100_000.0);
    Ok(())
}
