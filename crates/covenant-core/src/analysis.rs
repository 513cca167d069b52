//! Result types produced by the detection engine.
//!
//! These are the output contract consumed by alerting and reporting
//! collaborators: JSON-serializable without loss, no behavior beyond
//! zero-default constructors for the "no data" states.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AgentId, AlertLevel};

/// Descriptive statistics over one window of guilt scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation (divide by N)
    pub std_dev: f64,
    /// Ordinary least-squares slope of value against index
    pub slope: f64,
}

/// Outcome of evaluating the latest value against the trailing EWMA baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DriftAssessment {
    /// Whether the deviation exceeded the threshold
    pub drifting: bool,
    /// Absolute distance of the latest value from the baseline
    pub deviation: f64,
    /// Threshold the deviation was compared against
    pub threshold: f64,
    /// The exponentially weighted baseline (excludes the latest value)
    pub ewma: f64,
}

/// Emergence-risk score for a block of free text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentEmergence {
    /// Normalized theme-weight total, clamped to `[0, 1]`
    pub score: f64,
    /// One `"theme:<name> matched"` entry per matching theme
    pub reasons: Vec<String>,
}

/// Unified output of analyzing one ordered window of declarations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowAnalysisResult {
    /// False when the window held zero declarations
    pub ok: bool,
    /// Guilt scores in window order
    pub guilt_values: Vec<f64>,
    /// Successive differences, first element 0
    pub deltas: Vec<f64>,
    /// Descriptive statistics over `guilt_values`
    pub stats: WindowStats,
    /// Drift evaluation of the latest value
    pub drift: DriftAssessment,
    /// Emergence analysis of the most recent usable notes
    pub content_emergence: ContentEmergence,
    /// Fraction of declarations that were critical failures
    pub critical_fail_rate: f64,
}

impl WindowAnalysisResult {
    /// The zero-default result for an empty window.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Headline numbers carried alongside the alert classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    /// Whether drift fired in the analyzed window
    pub drift_detected: bool,
    /// Emergence score of the analyzed notes
    pub content_emergence_score: f64,
    /// Critical-failure fraction of the window
    pub critical_fail_rate: f64,
    /// Mean guilt score of the window
    pub average_guilt_score: f64,
}

/// Classifier output: the alert verdict plus its explanation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmergenceMetrics {
    /// False when the underlying window analysis had no data
    pub has_data: bool,
    /// Maximum severity among triggered conditions
    pub alert_level: AlertLevel,
    /// Every triggered condition, not just the winning one
    pub alert_reasons: Vec<String>,
    /// Headline numbers for dashboards
    pub metrics: MetricSummary,
}

impl EmergenceMetrics {
    /// The verdict for a window with no declarations.
    pub fn no_data() -> Self {
        Self::default()
    }
}

/// Per-agent aggregate state held by the metrics aggregator.
///
/// Created on the first declaration seen for an agent, overwritten on every
/// subsequent one. Never deleted by this core; retention is an external
/// concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentMetricsRecord {
    /// The agent this record tracks
    pub agent_id: AgentId,
    /// Latest compliance score
    pub compliance_score: f64,
    /// Latest guilt score
    pub guilt_score: f64,
    /// Guilt score change since the previous declaration
    pub score_delta: f64,
    /// Count of analyses that flagged drift for this agent
    pub drift_events: u64,
    /// Latest content emergence score
    pub content_emergence_score: f64,
    /// Latest critical-failure rate
    pub critical_fail_rate: f64,
    /// When this record was last written
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_is_not_ok() {
        let result = WindowAnalysisResult::empty();
        assert!(!result.ok);
        assert!(result.guilt_values.is_empty());
        assert_eq!(result.critical_fail_rate, 0.0);
        assert!(!result.drift.drifting);
    }

    #[test]
    fn no_data_metrics_default_to_normal() {
        let metrics = EmergenceMetrics::no_data();
        assert!(!metrics.has_data);
        assert_eq!(metrics.alert_level, AlertLevel::Normal);
        assert!(metrics.alert_reasons.is_empty());
    }
}
