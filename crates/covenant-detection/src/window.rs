//! Window analysis: orchestrates the drift, emergence, and critical-failure
//! analyses over one agent's declaration window.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use covenant_core::{ContentEmergence, TrustDeclaration, WindowAnalysisResult};

use crate::content::{ContentEmergenceAnalyzer, EmergenceConfig};
use crate::critical::{CriticalFailureAggregator, CriticalFailureConfig};
use crate::drift::{DriftConfig, DriftDetector};
use crate::stats;

/// Combined configuration for one window analyzer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowAnalyzerConfig {
    /// Theme catalogue for the content analysis
    pub emergence: EmergenceConfig,
    /// Drift detector tuning
    pub drift: DriftConfig,
    /// Critical-failure article subset
    pub critical: CriticalFailureConfig,
}

/// Analyzes one ordered window of declarations and emits a unified result.
///
/// # Preconditions
///
/// Declarations must be in non-decreasing timestamp order; the analysis
/// assumes ordering and does not sort. Callers that cannot guarantee this
/// should run [`covenant_core::sort_by_timestamp`] on the batch first. The
/// window is also expected to belong to a single agent; windowing itself
/// (how many recent declarations to pass) is the caller's decision.
#[derive(Debug, Clone, Default)]
pub struct WindowAnalyzer {
    content: ContentEmergenceAnalyzer,
    drift: DriftDetector,
    critical: CriticalFailureAggregator,
}

impl WindowAnalyzer {
    /// Create an analyzer with the given tuning.
    pub fn new(config: WindowAnalyzerConfig) -> Self {
        Self {
            content: ContentEmergenceAnalyzer::new(config.emergence),
            drift: DriftDetector::new(config.drift),
            critical: CriticalFailureAggregator::new(config.critical),
        }
    }

    /// Analyze one ordered window of declarations.
    ///
    /// An empty window yields `ok: false` with every other field at its safe
    /// zero default; no error is raised.
    pub fn analyze(&self, declarations: &[TrustDeclaration]) -> WindowAnalysisResult {
        if declarations.is_empty() {
            debug!("window analysis skipped: empty window");
            return WindowAnalysisResult::empty();
        }

        let guilt_values: Vec<f64> = declarations.iter().map(|d| d.guilt_score).collect();
        let deltas = stats::deltas(&guilt_values);
        let window_stats = stats::compute(&guilt_values);
        let drift = self.drift.detect(&guilt_values, window_stats.std_dev);
        let content_emergence = self.analyze_notes(declarations);
        let critical_fail_rate = self.critical.rate(declarations);

        if drift.drifting {
            metrics::counter!("covenant_drift_detected_total").increment(1);
            info!(
                agent = %declarations[declarations.len() - 1].agent_id,
                deviation = drift.deviation,
                threshold = drift.threshold,
                window = declarations.len(),
                "guilt score drift detected"
            );
        }

        WindowAnalysisResult {
            ok: true,
            guilt_values,
            deltas,
            stats: window_stats,
            drift,
            content_emergence,
            critical_fail_rate,
        }
    }

    /// Run the content analysis over the most recent usable notes.
    ///
    /// Recency is most actionable, so the latest declaration's notes win;
    /// when they are empty the scan falls back to the most recent non-empty
    /// notes in the window, else an empty analysis.
    fn analyze_notes(&self, declarations: &[TrustDeclaration]) -> ContentEmergence {
        declarations
            .iter()
            .rev()
            .find(|d| d.has_notes())
            .map(|d| self.content.analyze(&d.notes))
            .unwrap_or_default()
    }
}
