//! Alert classification: maps a window analysis to an alert level with
//! human-readable reasons.
//!
//! Trigger conditions are evaluated independently and their reasons unioned;
//! the final level is the maximum severity among everything that fired, so a
//! reader always sees the full explanation and not just the winning signal.

use serde::{Deserialize, Serialize};
use tracing::debug;

use covenant_core::{AlertLevel, EmergenceMetrics, MetricSummary, WindowAnalysisResult};

/// Alert threshold configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Emergence score at or above which the content signal fires high
    pub emergence_high: f64,
    /// Emergence score at or above which a warning is raised
    pub emergence_warn: f64,
    /// Critical-failure rate above which the window is critical
    pub critical_fail_high: f64,
    /// Critical-failure rate above which a warning is raised
    pub critical_fail_warn: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            emergence_high: 0.6,
            emergence_warn: 0.3,
            critical_fail_high: 0.3,
            critical_fail_warn: 0.1,
        }
    }
}

/// Maps window analysis results to classified, explainable alerts.
#[derive(Debug, Clone, Default)]
pub struct AlertClassifier {
    config: ClassifierConfig,
}

impl AlertClassifier {
    /// Create a classifier with the given thresholds.
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify one window analysis result.
    ///
    /// A result with `ok: false` classifies as no-data: Normal level, no
    /// reasons, `has_data: false`.
    pub fn classify(&self, result: &WindowAnalysisResult) -> EmergenceMetrics {
        if !result.ok {
            return EmergenceMetrics::no_data();
        }

        let mut level = AlertLevel::Normal;
        let mut reasons = Vec::new();

        let drifting = result.drift.drifting;
        let emergence = result.content_emergence.score;
        let fail_rate = result.critical_fail_rate;

        if drifting {
            level = level.max(AlertLevel::High);
            reasons.push(format!(
                "score drift detected (deviation={:.3}, threshold={:.3})",
                result.drift.deviation, result.drift.threshold
            ));
        }

        if emergence >= self.config.emergence_high {
            level = level.max(AlertLevel::High);
            reasons.push(format!(
                "content emergence patterns detected (score={:.2})",
                emergence
            ));
            if drifting {
                level = level.max(AlertLevel::Critical);
                reasons.push("compound drift and emergence signal".to_string());
            }
        }

        if fail_rate > self.config.critical_fail_high {
            level = level.max(AlertLevel::Critical);
            reasons.push(format!(
                "high critical failure rate ({:.1}%)",
                fail_rate * 100.0
            ));
        }

        // Sub-threshold signals only matter when nothing above fired.
        if level == AlertLevel::Normal {
            if emergence >= self.config.emergence_warn {
                level = AlertLevel::Warning;
                reasons.push(format!("elevated content emergence (score={:.2})", emergence));
            }
            if fail_rate > self.config.critical_fail_warn {
                level = AlertLevel::Warning;
                reasons.push(format!(
                    "elevated critical failure rate ({:.1}%)",
                    fail_rate * 100.0
                ));
            }
        }

        metrics::counter!("covenant_alerts_classified_total", "level" => level.as_str())
            .increment(1);
        debug!(
            level = %level,
            reasons = reasons.len(),
            drifting,
            emergence,
            fail_rate,
            "window classified"
        );

        EmergenceMetrics {
            has_data: true,
            alert_level: level,
            alert_reasons: reasons,
            metrics: MetricSummary {
                drift_detected: drifting,
                content_emergence_score: emergence,
                critical_fail_rate: fail_rate,
                average_guilt_score: result.stats.mean,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_core::{ContentEmergence, DriftAssessment, WindowStats};

    fn result(
        drifting: bool,
        emergence: f64,
        fail_rate: f64,
    ) -> WindowAnalysisResult {
        WindowAnalysisResult {
            ok: true,
            guilt_values: vec![0.1, 0.2],
            deltas: vec![0.0, 0.1],
            stats: WindowStats {
                mean: 0.15,
                std_dev: 0.05,
                slope: 0.1,
            },
            drift: DriftAssessment {
                drifting,
                deviation: if drifting { 0.7 } else { 0.01 },
                threshold: 0.1,
                ewma: 0.1,
            },
            content_emergence: ContentEmergence {
                score: emergence,
                reasons: vec![],
            },
            critical_fail_rate: fail_rate,
        }
    }

    #[test]
    fn no_data_result_classifies_as_no_data() {
        let metrics = AlertClassifier::default().classify(&WindowAnalysisResult::empty());
        assert!(!metrics.has_data);
        assert_eq!(metrics.alert_level, AlertLevel::Normal);
        assert!(metrics.alert_reasons.is_empty());
    }

    #[test]
    fn quiet_window_is_normal() {
        let metrics = AlertClassifier::default().classify(&result(false, 0.0, 0.0));
        assert!(metrics.has_data);
        assert_eq!(metrics.alert_level, AlertLevel::Normal);
        assert!(metrics.alert_reasons.is_empty());
        assert!((metrics.metrics.average_guilt_score - 0.15).abs() < 1e-9);
    }

    #[test]
    fn drift_alone_is_high() {
        let metrics = AlertClassifier::default().classify(&result(true, 0.0, 0.0));
        assert_eq!(metrics.alert_level, AlertLevel::High);
        assert!(metrics.alert_reasons[0].starts_with("score drift detected"));
        assert!(metrics.metrics.drift_detected);
    }

    #[test]
    fn emergence_alone_is_high() {
        let metrics = AlertClassifier::default().classify(&result(false, 0.7, 0.0));
        assert_eq!(metrics.alert_level, AlertLevel::High);
        assert!(metrics.alert_reasons[0].starts_with("content emergence patterns detected"));
    }

    #[test]
    fn compound_drift_and_emergence_is_critical() {
        let metrics = AlertClassifier::default().classify(&result(true, 0.7, 0.0));
        assert_eq!(metrics.alert_level, AlertLevel::Critical);
        assert!(metrics
            .alert_reasons
            .iter()
            .any(|r| r.starts_with("score drift detected")));
        assert!(metrics
            .alert_reasons
            .iter()
            .any(|r| r == "compound drift and emergence signal"));
    }

    #[test]
    fn high_failure_rate_is_critical() {
        let metrics = AlertClassifier::default().classify(&result(false, 0.0, 0.5));
        assert_eq!(metrics.alert_level, AlertLevel::Critical);
        assert!(metrics.alert_reasons[0].starts_with("high critical failure rate"));
    }

    #[test]
    fn sub_threshold_signals_warn() {
        let metrics = AlertClassifier::default().classify(&result(false, 0.4, 0.0));
        assert_eq!(metrics.alert_level, AlertLevel::Warning);

        let metrics = AlertClassifier::default().classify(&result(false, 0.0, 0.2));
        assert_eq!(metrics.alert_level, AlertLevel::Warning);
    }

    #[test]
    fn warning_does_not_downgrade_high() {
        // Emergence is warn-level, drift fires: the warning branch must not run.
        let metrics = AlertClassifier::default().classify(&result(true, 0.4, 0.0));
        assert_eq!(metrics.alert_level, AlertLevel::High);
        assert!(!metrics
            .alert_reasons
            .iter()
            .any(|r| r.starts_with("elevated")));
    }

    #[test]
    fn all_triggered_reasons_are_listed() {
        let metrics = AlertClassifier::default().classify(&result(true, 0.7, 0.5));
        assert_eq!(metrics.alert_level, AlertLevel::Critical);
        assert_eq!(metrics.alert_reasons.len(), 4);
    }

    #[test]
    fn boundary_values_respect_spec_comparisons() {
        // emergence uses >=, fail rate uses strict >
        let metrics = AlertClassifier::default().classify(&result(false, 0.6, 0.0));
        assert_eq!(metrics.alert_level, AlertLevel::High);

        let metrics = AlertClassifier::default().classify(&result(false, 0.0, 0.3));
        assert_eq!(metrics.alert_level, AlertLevel::Warning);

        let metrics = AlertClassifier::default().classify(&result(false, 0.0, 0.1));
        assert_eq!(metrics.alert_level, AlertLevel::Normal);
    }
}
