//! Core data model for the covenant trust-analysis engine.
//!
//! This crate defines the validated types that flow through the detection
//! engine in `covenant-detection`:
//!
//! - [`TrustDeclaration`]: one observation of one agent at one point in time
//! - [`WindowAnalysisResult`]: the unified output of analyzing one agent's
//!   declaration window
//! - [`EmergenceMetrics`]: the classified alert produced from a window result
//! - [`AgentMetricsRecord`]: the per-agent aggregate state
//!
//! All types are plain data: no analysis logic lives here. Validation is a
//! constructor-time contract — a declaration that reaches the engine is
//! guaranteed well-formed, so the engine itself never has to signal errors.

pub mod analysis;
pub mod declaration;
pub mod error;
pub mod types;

pub use analysis::{
    AgentMetricsRecord, ContentEmergence, DriftAssessment, EmergenceMetrics, MetricSummary,
    WindowAnalysisResult, WindowStats,
};
pub use declaration::{sort_by_timestamp, TrustDeclaration};
pub use error::{Result, ValidationError};
pub use types::{AgentId, AlertLevel};
