use gradlet_core::nn::RngSource;
use gradlet_core::{GradletError, Graph, Mlp};

/// Four 2-input samples labelled +1 only when both inputs are positive.
#[allow(dead_code)]
pub(crate) fn and_gate() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let inputs = vec![
        vec![1.0, 1.0],
        vec![1.0, -1.0],
        vec![-1.0, 1.0],
        vec![-1.0, -1.0],
    ];
    let targets = vec![vec![1.0], vec![-1.0], vec![-1.0], vec![-1.0]];
    (inputs, targets)
}

/// Builds a seeded network in a fresh graph.
#[allow(dead_code)]
pub(crate) fn seeded_mlp(
    input_size: usize,
    layer_sizes: &[usize],
    seed: u64,
) -> Result<(Graph, Mlp), GradletError> {
    let mut graph = Graph::new();
    let mlp = Mlp::new(&mut graph, input_size, layer_sizes, &mut RngSource::seeded(seed))?;
    Ok((graph, mlp))
}

/// Installs a test logger once; repeated calls are harmless.
#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
