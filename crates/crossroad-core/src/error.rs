//! Typed error surface for the decision core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One missing or out-of-domain field in a submitted profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Profile field name as it appears on the wire (e.g. "age").
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Profile rejected before any reasoning ran. Carries every failing field,
/// not just the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("invalid profile: {}", .issues.iter().map(|i| format!("{}: {}", i.field, i.message)).collect::<Vec<_>>().join("; "))]
pub struct ProfileValidationError {
    pub issues: Vec<FieldIssue>,
}

/// Attempted blackboard write after the control shell closed the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("reasoning pass is closed; blackboard is read-only")]
pub struct PassClosedError;

/// A single knowledge source failed while contributing. The pass continues
/// without its hypotheses.
#[derive(Debug, Clone)]
pub struct SourceError {
    pub source: String,
    pub reason: String,
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "knowledge source {} failed: {}", self.source, self.reason)
    }
}

impl std::error::Error for SourceError {}

impl SourceError {
    pub fn new(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            reason: reason.into(),
        }
    }
}

/// No source produced any hypothesis (all failed or all preconditions false).
/// Distinct from a low-confidence recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no recommendation possible: no knowledge source produced a hypothesis")]
pub struct AggregationEmptyError;

/// Simulation failed for one path. The validator marks that path's outlook
/// unavailable and falls back to the qualitative confidence.
#[derive(Debug, Clone, Error)]
pub enum SimulationError {
    #[error("invalid scenario for {path}: {reason}")]
    InvalidScenario { path: String, reason: String },
    #[error("simulation worker failed for {path}: {reason}")]
    Worker { path: String, reason: String },
}

/// Top-level failure modes of the advisor pipeline. Per-source and per-path
/// failures degrade the result instead of surfacing here.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error(transparent)]
    Validation(#[from] ProfileValidationError),
    #[error(transparent)]
    EmptyAggregation(#[from] AggregationEmptyError),
    #[error(transparent)]
    PassClosed(#[from] PassClosedError),
}
