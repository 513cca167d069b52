//! Drift and emergence detection over agent trust declarations.
//!
//! The engine consumes an ordered window of [`TrustDeclaration`]s for one
//! agent and fuses three independent signals into a classified alert:
//!
//! - **Drift**: the latest guilt score measured against a trailing
//!   exponentially weighted baseline ([`drift::DriftDetector`])
//! - **Content emergence**: semantically risky language in the agent's
//!   free-text notes ([`content::ContentEmergenceAnalyzer`])
//! - **Critical failures**: declarations violating multiple safety-relevant
//!   trust articles simultaneously ([`critical::CriticalFailureAggregator`])
//!
//! [`window::WindowAnalyzer`] orchestrates the three over one window,
//! [`classifier::AlertClassifier`] maps the result to an alert level with
//! human-readable reasons, and [`aggregator::MetricsAggregator`] records the
//! per-agent snapshots for reporting. [`monitor::EmergenceMonitor`] wires the
//! whole pipeline for callers that want one entry point.
//!
//! Everything except the aggregator is stateless after construction and
//! safely callable from multiple threads without coordination. No component
//! performs I/O; every call is synchronous, bounded, and CPU-only.
//!
//! [`TrustDeclaration`]: covenant_core::TrustDeclaration

pub mod aggregator;
pub mod classifier;
pub mod content;
pub mod critical;
pub mod drift;
pub mod monitor;
pub mod stats;
pub mod window;

pub use aggregator::MetricsAggregator;
pub use classifier::{AlertClassifier, ClassifierConfig};
pub use content::{ContentEmergenceAnalyzer, EmergenceConfig, Theme};
pub use critical::{CriticalFailureAggregator, CriticalFailureConfig};
pub use drift::{DriftConfig, DriftDetector};
pub use monitor::EmergenceMonitor;
pub use window::{WindowAnalyzer, WindowAnalyzerConfig};
