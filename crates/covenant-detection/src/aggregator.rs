//! Per-agent metrics aggregation.
//!
//! The one stateful component of the engine. Records the latest analysis
//! outputs per agent and exposes cross-agent aggregated views for reporting.
//! Backed by a concurrent map so updates for different agents proceed fully
//! in parallel while updates for the same agent serialize on that agent's
//! entry; the read-modify-write on `drift_events` and `score_delta` is not
//! commutative, so per-key exclusivity is load-bearing, not an optimization.

use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use covenant_core::{AgentId, AgentMetricsRecord, TrustDeclaration, WindowAnalysisResult};

/// Stateful store of the latest per-agent analysis snapshots.
///
/// Records are created on the first declaration seen for an agent and
/// overwritten on every subsequent one. Nothing here deletes records;
/// eviction and retention belong to the caller.
#[derive(Debug, Default)]
pub struct MetricsAggregator {
    records: DashMap<AgentId, AgentMetricsRecord>,
}

impl MetricsAggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest analysis outputs for an agent.
    ///
    /// `previous_guilt_score` is supplied by the caller (this core retains no
    /// history beyond the record itself); `score_delta` is the declaration's
    /// guilt score minus it. `drift_events` increments by exactly one per
    /// call whose window analysis flagged drift — the count reflects call
    /// count, never more. Returns the post-update snapshot.
    pub fn update(
        &self,
        agent_id: &AgentId,
        declaration: &TrustDeclaration,
        previous_guilt_score: f64,
        window_analysis: &WindowAnalysisResult,
    ) -> AgentMetricsRecord {
        let drifted = window_analysis.drift.drifting;
        let mut entry = self
            .records
            .entry(agent_id.clone())
            .or_insert_with(|| AgentMetricsRecord {
                agent_id: agent_id.clone(),
                compliance_score: 0.0,
                guilt_score: 0.0,
                score_delta: 0.0,
                drift_events: 0,
                content_emergence_score: 0.0,
                critical_fail_rate: 0.0,
                last_updated: Utc::now(),
            });

        let record = entry.value_mut();
        record.compliance_score = declaration.compliance_score;
        record.guilt_score = declaration.guilt_score;
        record.score_delta = declaration.guilt_score - previous_guilt_score;
        if drifted {
            record.drift_events += 1;
        }
        record.content_emergence_score = window_analysis.content_emergence.score;
        record.critical_fail_rate = window_analysis.critical_fail_rate;
        record.last_updated = Utc::now();

        debug!(
            agent = %agent_id,
            guilt = record.guilt_score,
            delta = record.score_delta,
            drift_events = record.drift_events,
            "agent metrics updated"
        );

        record.clone()
    }

    /// Snapshot of a single agent's record, if one exists.
    pub fn record(&self, agent_id: &AgentId) -> Option<AgentMetricsRecord> {
        self.records.get(agent_id).map(|r| r.value().clone())
    }

    /// Snapshots of all agent records, ordered by agent id.
    ///
    /// Read-only: never mutates state. The ordering is imposed here because
    /// the underlying map iterates in unspecified order.
    pub fn all_records(&self) -> Vec<AgentMetricsRecord> {
        let mut records: Vec<AgentMetricsRecord> =
            self.records.iter().map(|r| r.value().clone()).collect();
        records.sort_by(|a, b| a.agent_id.cmp(&b.agent_id));
        records
    }

    /// Number of agents tracked.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no agent has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
