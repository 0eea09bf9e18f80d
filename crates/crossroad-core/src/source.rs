//! Knowledge-source capability trait and the fixed registry of variants.

use crate::blackboard::{BlackboardView, Hypothesis};
use crate::error::SourceError;
use std::sync::Arc;

/// Trait implemented by every reasoning specialist. Sources are deterministic
/// given the profile and firing order; all randomness lives in the simulator.
#[async_trait::async_trait]
pub trait KnowledgeSource: Send + Sync {
    /// Unique source id used for hypothesis attribution and weighting.
    fn id(&self) -> &'static str;

    /// Human-readable name for findings and logs.
    fn name(&self) -> &str;

    /// Whether this source has anything to say about the current board.
    /// A false precondition means skipped, not a zero-scored contribution.
    fn precondition(&self, view: &BlackboardView<'_>) -> bool {
        let _ = view;
        true
    }

    /// Reads the board and returns scored hypotheses about candidate paths.
    async fn contribute(&self, view: &BlackboardView<'_>) -> Result<Vec<Hypothesis>, SourceError>;
}

/// Statically registered set of sources, fired in registration order.
pub struct SourceRegistry {
    sources: Vec<Arc<dyn KnowledgeSource>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self { sources: Vec::new() }
    }

    pub fn register(&mut self, source: Arc<dyn KnowledgeSource>) {
        self.sources.push(source);
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn KnowledgeSource>> {
        self.sources.iter().find(|s| s.id() == id).cloned()
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.id()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn KnowledgeSource>> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
