#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::{Duration, Epoch};

/// Estimator parametrization.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Interval between intermediate attitude samples.
    /// Smaller steps increase fidelity and sample count, the estimate
    /// itself is step-size invariant up to discretization error.
    pub step_size: Duration,
    /// Maneuver start [Epoch]
    pub start: Epoch,
    /// Report the end-of-maneuver per-axis bias profile values
    /// in addition to the attitude error
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_size: Duration::from_seconds(1.0),
            start: Epoch::from_gregorian_tai_at_midnight(2020, 1, 1),
            verbose: false,
        }
    }
}

impl Config {
    pub fn with_step_size(mut self, step_size: Duration) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn with_start(mut self, start: Epoch) -> Self {
        self.start = start;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use crate::prelude::Duration;

    #[test]
    fn builder() {
        let cfg = Config::default()
            .with_step_size(Duration::from_seconds(0.5))
            .with_verbose(true);
        assert_eq!(cfg.step_size, Duration::from_seconds(0.5));
        assert!(cfg.verbose);
    }
}
