use gradlet_core::nn::Module;
use gradlet_core::train::{evaluate, predict, LogObserver, NoopObserver};
use gradlet_core::{GradletError, TrainConfig, Trainer};

mod common;
use common::{and_gate, init_logging, seeded_mlp};

#[test]
fn test_mlp_learns_linearly_separable_data() -> Result<(), GradletError> {
    init_logging();
    let (inputs, targets) = and_gate();
    let (mut graph, mlp) = seeded_mlp(2, &[4, 1], 42)?;
    let mut trainer = Trainer::sgd(&mlp, 1000, 0.05);

    let history = trainer.train(&mut graph, &mlp, &inputs, &targets, &mut LogObserver::new(100))?;

    for pair in history.windows(2) {
        assert!(
            pair[1].loss < pair[0].loss,
            "loss did not decrease at epoch {}: {} -> {}",
            pair[1].epoch,
            pair[0].loss,
            pair[1].loss
        );
    }

    let rmse = evaluate(&mut graph, &mlp, &inputs, &targets)?;
    assert!(rmse < 0.3, "rmse too high after training: {}", rmse);

    let predictions = predict(&mut graph, &mlp, &inputs)?;
    for (prediction, target) in predictions.iter().zip(&targets) {
        assert_eq!(prediction[0].signum(), target[0].signum());
    }
    Ok(())
}

#[test]
fn test_training_is_deterministic_for_a_seed() -> Result<(), GradletError> {
    let (inputs, targets) = and_gate();
    let run = || -> Result<Vec<f64>, GradletError> {
        let (mut graph, mlp) = seeded_mlp(2, &[3, 1], 9)?;
        Trainer::sgd(&mlp, 20, 0.05).train(&mut graph, &mlp, &inputs, &targets, &mut NoopObserver)?;
        Ok(mlp.parameter_values(&graph))
    };
    assert_eq!(run()?, run()?);
    Ok(())
}

#[test]
fn test_default_config_runs_the_three_input_network() -> Result<(), GradletError> {
    let config = TrainConfig::default();
    let (mut graph, mlp) = seeded_mlp(config.input_size, &config.layer_sizes, config.seed)?;
    assert_eq!(mlp.parameter_count(), 41);

    let inputs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let targets = vec![vec![1.0], vec![-1.0], vec![-1.0], vec![1.0]];
    let mut trainer = Trainer::from_config(&mlp, &config)?;
    let history = trainer.train(&mut graph, &mlp, &inputs, &targets, &mut LogObserver::default())?;
    assert_eq!(history.len(), 1);
    assert!(history[0].loss.is_finite() && history[0].loss >= 0.0);
    Ok(())
}
