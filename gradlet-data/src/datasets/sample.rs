// gradlet-data/src/datasets/sample.rs

/// One supervised example: network inputs and the expected outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub inputs: Vec<f64>,
    pub targets: Vec<f64>,
}

impl Sample {
    pub fn new(inputs: Vec<f64>, targets: Vec<f64>) -> Self {
        Sample { inputs, targets }
    }

    /// A sample with a single target value.
    pub fn scalar(inputs: Vec<f64>, target: f64) -> Self {
        Sample::new(inputs, vec![target])
    }
}

/// Splits a batch into parallel `(inputs, targets)` lists.
pub fn unzip(samples: &[Sample]) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    samples
        .iter()
        .map(|s| (s.inputs.clone(), s.targets.clone()))
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_sample() {
        let s = Sample::scalar(vec![1.0, 2.0], -1.0);
        assert_eq!(s.targets, vec![-1.0]);
    }

    #[test]
    fn test_unzip_preserves_order() {
        let batch = vec![
            Sample::scalar(vec![1.0], 10.0),
            Sample::scalar(vec![2.0], 20.0),
        ];
        let (inputs, targets) = unzip(&batch);
        assert_eq!(inputs, vec![vec![1.0], vec![2.0]]);
        assert_eq!(targets, vec![vec![10.0], vec![20.0]]);
    }
}
