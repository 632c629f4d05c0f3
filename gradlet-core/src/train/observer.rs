// gradlet-core/src/train/observer.rs

use log::info;

/// Progress of one training epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochReport {
    /// 1-based epoch index.
    pub epoch: usize,
    /// Sum-of-squared-errors loss computed during the epoch's forward pass.
    pub loss: f64,
}

/// Receives an [`EpochReport`] after every epoch.
///
/// Any `FnMut(&EpochReport)` closure is an observer.
pub trait TrainingObserver {
    fn on_epoch(&mut self, report: &EpochReport);
}

impl<F: FnMut(&EpochReport)> TrainingObserver for F {
    fn on_epoch(&mut self, report: &EpochReport) {
        self(report)
    }
}

/// Logs `epoch N | loss X.XX` at `info` level every `every` epochs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    every: usize,
}

impl LogObserver {
    /// `every` is clamped to at least 1.
    pub fn new(every: usize) -> Self {
        LogObserver {
            every: every.max(1),
        }
    }

    pub fn every(&self) -> usize {
        self.every
    }

    pub fn should_log(&self, epoch: usize) -> bool {
        epoch % self.every == 0
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        LogObserver::new(1)
    }
}

impl TrainingObserver for LogObserver {
    fn on_epoch(&mut self, report: &EpochReport) {
        if self.should_log(report.epoch) {
            info!("{}", format_report(report));
        }
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl TrainingObserver for NoopObserver {
    fn on_epoch(&mut self, _report: &EpochReport) {}
}

pub fn format_report(report: &EpochReport) -> String {
    format!("epoch {} | loss {:.2}", report.epoch, report.loss)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_report() {
        let report = EpochReport {
            epoch: 3,
            loss: 1.23456,
        };
        assert_eq!(format_report(&report), "epoch 3 | loss 1.23");
    }

    #[test]
    fn test_log_observer_cadence() {
        let observer = LogObserver::new(10);
        assert!(!observer.should_log(1));
        assert!(observer.should_log(10));
        assert!(observer.should_log(20));
        assert_eq!(LogObserver::new(0).every(), 1);
        assert!(LogObserver::default().should_log(1));
    }

    #[test]
    fn test_closure_is_an_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |r: &EpochReport| seen.push(r.epoch);
            observer.on_epoch(&EpochReport { epoch: 1, loss: 0.5 });
            observer.on_epoch(&EpochReport { epoch: 2, loss: 0.4 });
        }
        assert_eq!(seen, vec![1, 2]);
    }
}
