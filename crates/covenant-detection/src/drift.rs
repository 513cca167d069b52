//! EWMA drift detection over guilt-score windows.
//!
//! Decides whether the latest value in a window has drifted from the
//! established baseline. The baseline is an exponentially weighted moving
//! average over all but the last value, seeded with the first value, so the
//! newest observation never dilutes the baseline it is judged against.
//!
//! The threshold scales with the window's spread but never falls below a
//! configured floor, which keeps near-zero-variance windows from flagging
//! noise-level deviations.

use serde::{Deserialize, Serialize};
use tracing::debug;

use covenant_core::DriftAssessment;

use crate::stats;

/// Drift detection configuration.
///
/// The smoothing factor and multiplier are tunables, not fixed law: the
/// defaults reproduce the established alerting behavior but carry no
/// derivation beyond field calibration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DriftConfig {
    /// EWMA smoothing factor
    pub alpha: f64,
    /// Threshold multiplier applied to the window's standard deviation
    pub multiplier: f64,
    /// Minimum threshold, guards near-zero-variance windows
    pub floor_threshold: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            multiplier: 2.0,
            floor_threshold: 0.1,
        }
    }
}

/// Evaluates the latest guilt score against its trailing EWMA baseline.
#[derive(Debug, Clone, Default)]
pub struct DriftDetector {
    config: DriftConfig,
}

impl DriftDetector {
    /// Create a detector with the given tuning.
    pub fn new(config: DriftConfig) -> Self {
        Self { config }
    }

    /// Evaluate the latest value in `guilt_values` against the baseline.
    ///
    /// `std_dev` is the population standard deviation of the full window, as
    /// computed by the statistics engine. With fewer than two values drift
    /// cannot be evaluated: the assessment reports `drifting: false` and a
    /// zero deviation rather than guessing.
    pub fn detect(&self, guilt_values: &[f64], std_dev: f64) -> DriftAssessment {
        let threshold = self
            .config
            .floor_threshold
            .max(self.config.multiplier * std_dev);

        let Some((latest, history)) = guilt_values.split_last().filter(|(_, h)| !h.is_empty())
        else {
            // Insufficient data; report the baseline we do have.
            return DriftAssessment {
                drifting: false,
                deviation: 0.0,
                threshold,
                ewma: guilt_values.first().copied().unwrap_or(0.0),
            };
        };
        let baseline = stats::ewma(history, self.config.alpha);
        let deviation = (latest - baseline).abs();
        let drifting = deviation > threshold;

        if drifting {
            debug!(
                deviation,
                threshold,
                ewma = baseline,
                latest,
                "guilt score drifted from baseline"
            );
        }

        DriftAssessment {
            drifting,
            deviation,
            threshold,
            ewma: baseline,
        }
    }
}
