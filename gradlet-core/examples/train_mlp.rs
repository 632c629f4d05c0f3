//! # Training a small MLP on four samples
//!
//! Builds `Mlp(3, [4, 4, 1])`, trains it with plain gradient descent on a
//! tiny regression set, then prints the predictions and the RMSE.
//!
//! Hyperparameters come from `GRADLET_*` environment variables (see
//! `gradlet_core::config`), e.g.
//!
//! `RUST_LOG=info GRADLET_EPOCHS=100 GRADLET_LOG_EVERY=10 cargo run --example train_mlp`

use gradlet_core::config::from_env;
use gradlet_core::nn::{Module, RngSource};
use gradlet_core::train::{evaluate, predict, LogObserver};
use gradlet_core::{GradletError, Graph, Mlp, Trainer};

fn main() -> Result<(), GradletError> {
    env_logger::init();

    let config = from_env()?;
    config.validate()?;

    let inputs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let targets = vec![vec![1.0], vec![-1.0], vec![-1.0], vec![1.0]];

    let mut graph = Graph::new();
    let mut source = RngSource::seeded(config.seed);
    let mlp = Mlp::new(&mut graph, config.input_size, &config.layer_sizes, &mut source)?;
    println!(
        "MLP {} -> {:?}: {} parameters",
        config.input_size,
        config.layer_sizes,
        mlp.parameter_count()
    );

    let mut trainer = Trainer::from_config(&mlp, &config)?;
    let mut observer = LogObserver::new(config.log_every);
    let history = trainer.train(&mut graph, &mlp, &inputs, &targets, &mut observer)?;

    if let (Some(first), Some(last)) = (history.first(), history.last()) {
        println!("loss {:.4} (epoch {}) -> {:.4} (epoch {})", first.loss, first.epoch, last.loss, last.epoch);
    }

    for (input, prediction) in inputs.iter().zip(predict(&mut graph, &mlp, &inputs)?) {
        println!("{:?} -> {:.4}", input, prediction[0]);
    }
    println!("rmse {:.4}", evaluate(&mut graph, &mlp, &inputs, &targets)?);
    Ok(())
}
