#[cfg(test)]
mod tests {
    use crate::autograd::Graph;
    use crate::nn::init::CyclicSource;
    use crate::nn::{Mlp, Module, Parameter};
    use crate::optim::{Optimizer, Sgd};
    use approx::assert_relative_eq;

    #[test]
    fn test_sgd_basic_step() {
        let mut graph = Graph::new();
        let a = Parameter::new(&mut graph, 1.0);
        let b = Parameter::new(&mut graph, -2.0);
        // loss = 3a + b^2  => grads (3, -4)
        let three_a = graph.mul(a, 3.0);
        let b_sq = graph.mul(b, b);
        let loss = graph.add(three_a, b_sq);
        graph.backward(loss);

        let mut optimizer = Sgd::new(vec![a, b], 0.1);
        optimizer.step(&mut graph);

        assert_relative_eq!(a.data(&graph), 1.0 - 0.1 * 3.0);
        assert_relative_eq!(b.data(&graph), -2.0 - 0.1 * -4.0);
    }

    #[test]
    fn test_sgd_zero_grad() {
        let mut graph = Graph::new();
        let a = Parameter::new(&mut graph, 1.0);
        let y = graph.mul(a, 5.0);
        graph.backward(y);
        assert_eq!(a.grad(&graph), 5.0);

        let mut optimizer = Sgd::new(vec![a], 0.05);
        optimizer.zero_grad(&mut graph);
        assert_eq!(a.grad(&graph), 0.0);
    }

    #[test]
    fn test_sgd_zero_learning_rate_leaves_params() {
        let mut graph = Graph::new();
        let a = Parameter::new(&mut graph, 0.4);
        let y = graph.mul(a, a);
        graph.backward(y);
        let mut optimizer = Sgd::new(vec![a], 0.0);
        optimizer.step(&mut graph);
        assert_eq!(a.data(&graph), 0.4);
    }

    #[test]
    fn test_sgd_set_learning_rate() {
        let mut optimizer = Sgd::new(Vec::<Parameter>::new(), 0.05);
        assert_eq!(optimizer.learning_rate(), 0.05);
        optimizer.set_learning_rate(0.2);
        assert_eq!(optimizer.learning_rate(), 0.2);
    }

    #[test]
    fn test_sgd_over_mlp_parameters_touches_only_those() {
        let mut graph = Graph::new();
        let mlp = Mlp::new(&mut graph, 2, &[1], &mut CyclicSource::new(vec![0.5, -0.5, 0.0]))
            .unwrap();
        let outsider = Parameter::new(&mut graph, 9.0);
        let out = mlp.forward_values(&mut graph, &[1.0, 1.0]).unwrap();
        let joined = graph.add(out[0], outsider);
        graph.backward(joined);

        let before = mlp.parameter_values(&graph);
        let mut optimizer = Sgd::new(mlp.parameters(), 0.1);
        optimizer.step(&mut graph);

        assert_ne!(mlp.parameter_values(&graph), before);
        assert_eq!(outsider.data(&graph), 9.0);
        assert_eq!(optimizer.params().len(), 3);
    }
}
