//! Trust declarations: one observation for one agent at one point in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, ValidationError};
use crate::types::AgentId;

/// A single self-reported or measured compliance observation for an agent.
///
/// Declarations are validated at construction: an empty agent id or a score
/// outside `[0, 1]` is rejected immediately rather than poisoning a window
/// analysis later. Field-level mutation after construction is intentionally
/// not offered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustDeclaration {
    /// The agent this declaration describes
    pub agent_id: AgentId,
    /// Detected non-compliance at this observation, normalized to `[0, 1]`
    pub guilt_score: f64,
    /// Overall compliance at this observation, normalized to `[0, 1]`
    pub compliance_score: f64,
    /// Per-article satisfaction flags (`true` = article satisfied)
    pub trust_articles: HashMap<String, bool>,
    /// Free-text notes, may be empty
    pub notes: String,
    /// Observation time
    pub timestamp: DateTime<Utc>,
}

impl TrustDeclaration {
    /// Build a validated declaration.
    ///
    /// Fails with [`ValidationError`] when the agent id is empty or either
    /// score leaves the unit interval. NaN scores are rejected by the same
    /// range check.
    pub fn new(
        agent_id: impl Into<AgentId>,
        guilt_score: f64,
        compliance_score: f64,
        trust_articles: HashMap<String, bool>,
        notes: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        let agent_id = agent_id.into();
        if agent_id.as_str().trim().is_empty() {
            return Err(ValidationError::MissingAgentId);
        }
        validate_unit_score("guilt_score", guilt_score)?;
        validate_unit_score("compliance_score", compliance_score)?;

        Ok(Self {
            agent_id,
            guilt_score,
            compliance_score,
            trust_articles,
            notes: notes.into(),
            timestamp,
        })
    }

    /// Whether the notes carry any content worth analyzing.
    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }
}

fn validate_unit_score(field: &'static str, value: f64) -> Result<()> {
    // `!(0.0..=1.0).contains(&value)` is false for NaN, so test the inverse.
    if value >= 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ValidationError::ScoreOutOfRange { field, value })
    }
}

/// Sort declarations into non-decreasing timestamp order.
///
/// Window analysis assumes chronological input and does not sort. Callers
/// that cannot guarantee ordering at the source should run this once per
/// batch before analyzing. The sort is stable: same-instant declarations
/// keep their arrival order.
pub fn sort_by_timestamp(declarations: &mut [TrustDeclaration]) {
    declarations.sort_by_key(|d| d.timestamp);
}
