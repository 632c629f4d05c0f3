//! # Mini-batch training with a DataLoader
//!
//! Trains a 2-4-1 network on the AND gate, feeding shuffled batches of two
//! samples through `Trainer::step` instead of the full-batch `train` loop.
//!
//! `RUST_LOG=debug cargo run --example minibatch_training`

use gradlet_core::nn::RngSource;
use gradlet_core::train::{evaluate, format_report, EpochReport};
use gradlet_core::{GradletError, Graph, Mlp, Trainer};
use gradlet_data::datasets::fixtures::and_gate;
use gradlet_data::datasets::unzip;
use gradlet_data::{DataLoader, RandomSampler};
use log::info;

const EPOCHS: usize = 200;

fn main() -> Result<(), GradletError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let dataset = and_gate();
    let (inputs, targets) = dataset.unzip();

    let mut graph = Graph::new();
    let mlp = Mlp::new(&mut graph, 2, &[4, 1], &mut RngSource::seeded(7))?;
    let mut trainer = Trainer::sgd(&mlp, EPOCHS, 0.05);
    let mut loader = DataLoader::new(dataset, 2, RandomSampler::with_seed(7), false);

    for epoch in 1..=EPOCHS {
        let mut epoch_loss = 0.0;
        for batch in loader.by_ref() {
            let (xs, ys) = unzip(&batch?);
            epoch_loss += trainer.step(&mut graph, &mlp, &xs, &ys)?;
        }
        loader.reset();
        if epoch % 20 == 0 {
            info!("{}", format_report(&EpochReport { epoch, loss: epoch_loss }));
        }
    }

    println!("rmse {:.4}", evaluate(&mut graph, &mlp, &inputs, &targets)?);
    Ok(())
}
