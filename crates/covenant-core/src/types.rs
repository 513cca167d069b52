//! Identifier newtypes and the alert severity ladder.

use serde::{Deserialize, Serialize};

/// Identifier of the agent a declaration describes.
///
/// Wrapped so declarations for different agents cannot be keyed by accident
/// with a raw string from another domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    /// Create a new agent id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Alert severity verdict of the classifier.
///
/// Severities are totally ordered so multi-signal fusion reduces to `max`:
/// `Normal < Warning < High < Critical`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    /// No signal triggered
    #[default]
    Normal,
    /// Elevated but sub-threshold signal
    Warning,
    /// A primary signal fired
    High,
    /// Compound signal or high critical-failure rate
    Critical,
}

impl AlertLevel {
    /// Get the level name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Normal => "normal",
            AlertLevel::Warning => "warning",
            AlertLevel::High => "high",
            AlertLevel::Critical => "critical",
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_levels_are_totally_ordered() {
        assert!(AlertLevel::Normal < AlertLevel::Warning);
        assert!(AlertLevel::Warning < AlertLevel::High);
        assert!(AlertLevel::High < AlertLevel::Critical);
        assert_eq!(
            AlertLevel::High.max(AlertLevel::Critical),
            AlertLevel::Critical
        );
    }

    #[test]
    fn alert_level_serializes_snake_case() {
        let json = serde_json::to_string(&AlertLevel::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }

    #[test]
    fn agent_id_display_matches_inner() {
        let id = AgentId::new("agent-7");
        assert_eq!(id.to_string(), "agent-7");
        assert_eq!(id.as_str(), "agent-7");
    }
}
