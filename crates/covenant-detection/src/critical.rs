//! Critical-failure rate over a declaration window.
//!
//! A declaration is a critical failure when multiple safety-relevant trust
//! articles are false simultaneously: one lapsed article is an ordinary
//! violation, several at once is a different class of event.

use serde::{Deserialize, Serialize};

use covenant_core::TrustDeclaration;

/// Critical-failure configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriticalFailureConfig {
    /// The safety-relevant subset of trust articles
    pub safety_articles: Vec<String>,
    /// Minimum simultaneous violations that make a declaration critical
    pub min_violations: usize,
}

impl Default for CriticalFailureConfig {
    fn default() -> Self {
        Self {
            safety_articles: vec![
                "consent".to_string(),
                "ethical_override".to_string(),
                "inspection_mandate".to_string(),
            ],
            min_violations: 2,
        }
    }
}

/// Computes the fraction of declarations in a window that are critical failures.
#[derive(Debug, Clone, Default)]
pub struct CriticalFailureAggregator {
    config: CriticalFailureConfig,
}

impl CriticalFailureAggregator {
    /// Create an aggregator with the given safety-article subset.
    pub fn new(config: CriticalFailureConfig) -> Self {
        Self { config }
    }

    /// Whether a single declaration violates enough safety articles at once.
    ///
    /// Only an explicit `false` counts as a violation; an article absent
    /// from the declaration is unknown, not failed.
    pub fn is_critical_failure(&self, declaration: &TrustDeclaration) -> bool {
        let violations = self
            .config
            .safety_articles
            .iter()
            .filter(|article| declaration.trust_articles.get(article.as_str()) == Some(&false))
            .count();
        violations >= self.config.min_violations
    }

    /// Critical-failure fraction of the window. Returns 0 for an empty slice.
    pub fn rate(&self, declarations: &[TrustDeclaration]) -> f64 {
        if declarations.is_empty() {
            return 0.0;
        }
        let critical = declarations
            .iter()
            .filter(|d| self.is_critical_failure(d))
            .count();
        critical as f64 / declarations.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;

    fn declaration(articles: &[(&str, bool)]) -> TrustDeclaration {
        let map: HashMap<String, bool> = articles
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        TrustDeclaration::new("agent-1", 0.1, 0.9, map, "", Utc::now()).unwrap()
    }

    #[test]
    fn empty_window_rates_zero() {
        assert_eq!(CriticalFailureAggregator::default().rate(&[]), 0.0);
    }

    #[test]
    fn single_violation_is_not_critical() {
        let aggregator = CriticalFailureAggregator::default();
        let decl = declaration(&[
            ("consent", false),
            ("ethical_override", true),
            ("inspection_mandate", true),
        ]);
        assert!(!aggregator.is_critical_failure(&decl));
    }

    #[test]
    fn two_simultaneous_violations_are_critical() {
        let aggregator = CriticalFailureAggregator::default();
        let decl = declaration(&[
            ("consent", false),
            ("ethical_override", false),
            ("inspection_mandate", true),
        ]);
        assert!(aggregator.is_critical_failure(&decl));
    }

    #[test]
    fn absent_articles_are_not_violations() {
        let aggregator = CriticalFailureAggregator::default();
        // Only one explicit false; the other safety articles are unknown.
        let decl = declaration(&[("consent", false)]);
        assert!(!aggregator.is_critical_failure(&decl));
    }

    #[test]
    fn non_safety_articles_do_not_count() {
        let aggregator = CriticalFailureAggregator::default();
        let decl = declaration(&[
            ("consent", false),
            ("promptness", false),
            ("tidiness", false),
        ]);
        assert!(!aggregator.is_critical_failure(&decl));
    }

    #[test]
    fn rate_over_mixed_window() {
        let aggregator = CriticalFailureAggregator::default();
        let window = vec![
            declaration(&[("consent", false), ("ethical_override", false)]),
            declaration(&[("consent", false), ("inspection_mandate", false)]),
            declaration(&[("consent", true), ("ethical_override", true)]),
        ];
        let rate = aggregator.rate(&window);
        assert!((rate - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn min_violations_is_configurable() {
        let aggregator = CriticalFailureAggregator::new(CriticalFailureConfig {
            safety_articles: vec!["consent".to_string()],
            min_violations: 1,
        });
        let decl = declaration(&[("consent", false)]);
        assert!(aggregator.is_critical_failure(&decl));
    }
}
