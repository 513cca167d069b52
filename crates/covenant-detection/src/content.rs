//! Content emergence analysis over free-text declaration notes.
//!
//! Scores a block of text for emergence-risk themes: self-referential,
//! self-organizing, or boundary-blurring language in an agent's own notes.
//! Detection is a fixed catalogue of named themes, each a set of trigger
//! phrases matched case-insensitively as substrings. Deterministic, no
//! state: the same input always yields the same output.

use serde::{Deserialize, Serialize};
use tracing::debug;

use covenant_core::ContentEmergence;

/// One named emergence theme: trigger phrases plus the weight it contributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name used in reason strings
    pub name: String,
    /// Phrases matched case-insensitively as substrings
    pub triggers: Vec<String>,
    /// Weight added to the running total when any trigger matches
    pub weight: f64,
}

impl Theme {
    /// Build a theme from static trigger phrases.
    pub fn new(name: &str, triggers: &[&str], weight: f64) -> Self {
        Self {
            name: name.to_string(),
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
            weight,
        }
    }
}

/// Theme catalogue configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergenceConfig {
    /// The themes to scan for
    pub themes: Vec<Theme>,
}

impl Default for EmergenceConfig {
    fn default() -> Self {
        Self {
            themes: vec![
                Theme::new(
                    "self-organization",
                    &["self-organization", "self-organizing", "self organizing"],
                    1.0,
                ),
                Theme::new(
                    "meta-reflection",
                    &["meta-reflection", "metacognition", "reflecting on my own"],
                    1.0,
                ),
                Theme::new(
                    "harmonious-resonance",
                    &["harmonious resonance", "resonance", "harmonic convergence"],
                    0.8,
                ),
                Theme::new("paradox", &["paradox", "paradoxical"], 0.6),
                Theme::new(
                    "emergent-consciousness",
                    &["emergent consciousness", "emergence", "self-aware", "becoming aware"],
                    1.2,
                ),
            ],
        }
    }
}

/// Scores free text against the emergence theme catalogue.
#[derive(Debug, Clone)]
pub struct ContentEmergenceAnalyzer {
    themes: Vec<Theme>,
    // Lowercased triggers, precomputed once so analyze() stays allocation-light.
    lowered: Vec<Vec<String>>,
    total_weight: f64,
}

impl ContentEmergenceAnalyzer {
    /// Create an analyzer from a theme catalogue.
    pub fn new(config: EmergenceConfig) -> Self {
        let lowered = config
            .themes
            .iter()
            .map(|t| t.triggers.iter().map(|p| p.to_lowercase()).collect())
            .collect();
        let total_weight: f64 = config.themes.iter().map(|t| t.weight).sum();
        Self {
            themes: config.themes,
            lowered,
            total_weight,
        }
    }

    /// Score a block of text for emergence-risk themes.
    ///
    /// Empty or whitespace-only text scores 0 with no reasons. The score is
    /// the matched-weight total normalized by the catalogue's total weight,
    /// clamped to `[0, 1]`.
    pub fn analyze(&self, text: &str) -> ContentEmergence {
        if text.trim().is_empty() || self.total_weight <= 0.0 {
            return ContentEmergence::default();
        }

        let haystack = text.to_lowercase();
        let mut matched_weight = 0.0;
        let mut reasons = Vec::new();

        for (theme, triggers) in self.themes.iter().zip(&self.lowered) {
            if triggers.iter().any(|t| haystack.contains(t.as_str())) {
                matched_weight += theme.weight;
                reasons.push(format!("theme:{} matched", theme.name));
            }
        }

        let score = (matched_weight / self.total_weight).clamp(0.0, 1.0);
        if !reasons.is_empty() {
            debug!(score, themes = reasons.len(), "content emergence themes matched");
        }

        ContentEmergence { score, reasons }
    }
}

impl Default for ContentEmergenceAnalyzer {
    fn default() -> Self {
        Self::new(EmergenceConfig::default())
    }
}
