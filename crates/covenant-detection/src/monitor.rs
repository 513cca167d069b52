//! Monitor facade: the full pipeline behind one entry point.
//!
//! Wires the control flow of the engine — window analysis, alert
//! classification, per-agent aggregation — for callers that do not need to
//! drive the components individually. Ingestion remains external: callers
//! decide the windowing and supply the previous guilt score.

use tracing::info;

use covenant_core::{AgentMetricsRecord, EmergenceMetrics, TrustDeclaration};

use crate::aggregator::MetricsAggregator;
use crate::classifier::{AlertClassifier, ClassifierConfig};
use crate::window::{WindowAnalyzer, WindowAnalyzerConfig};

/// End-to-end pipeline: analyze a window, classify it, record the snapshot.
#[derive(Debug, Default)]
pub struct EmergenceMonitor {
    analyzer: WindowAnalyzer,
    classifier: AlertClassifier,
    aggregator: MetricsAggregator,
}

impl EmergenceMonitor {
    /// Create a monitor with the given tuning.
    pub fn new(analyzer_config: WindowAnalyzerConfig, classifier_config: ClassifierConfig) -> Self {
        Self {
            analyzer: WindowAnalyzer::new(analyzer_config),
            classifier: AlertClassifier::new(classifier_config),
            aggregator: MetricsAggregator::new(),
        }
    }

    /// Process one agent's declaration window end to end.
    ///
    /// The window must be in non-decreasing timestamp order and belong to a
    /// single agent; the latest declaration keys the aggregator update. An
    /// empty window yields the no-data classification and touches no state.
    pub fn observe(
        &self,
        window: &[TrustDeclaration],
        previous_guilt_score: f64,
    ) -> EmergenceMetrics {
        let analysis = self.analyzer.analyze(window);
        let verdict = self.classifier.classify(&analysis);

        if let Some(latest) = window.last() {
            self.aggregator
                .update(&latest.agent_id, latest, previous_guilt_score, &analysis);
            info!(
                agent = %latest.agent_id,
                level = %verdict.alert_level,
                reasons = verdict.alert_reasons.len(),
                window = window.len(),
                "declaration window observed"
            );
        }

        verdict
    }

    /// Snapshots of all agent records, ordered by agent id.
    pub fn records(&self) -> Vec<AgentMetricsRecord> {
        self.aggregator.all_records()
    }

    /// Snapshot of one agent's record, if any window has been observed.
    pub fn record(&self, agent_id: &covenant_core::AgentId) -> Option<AgentMetricsRecord> {
        self.aggregator.record(agent_id)
    }
}
