//! Per-pass scratchpad a source uses to build one hypothesis per path.

use crossroad_core::{CareerPath, Hypothesis};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct Draft {
    score: f64,
    rationale: Option<String>,
    pros: Vec<String>,
    cons: Vec<String>,
}

/// Accumulates score deltas and evidence per path, then emits one
/// write-once hypothesis per path with a non-trivial score.
#[derive(Debug, Default)]
pub(crate) struct DraftBoard {
    drafts: BTreeMap<CareerPath, Draft>,
}

impl DraftBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the path's score to at least `floor` without lowering it.
    pub fn ensure(&mut self, path: CareerPath, floor: f64) {
        let draft = self.drafts.entry(path).or_default();
        draft.score = draft.score.max(floor);
    }

    /// Adds a (possibly negative) delta, creating the draft if absent.
    pub fn bump(&mut self, path: CareerPath, delta: f64) {
        self.drafts.entry(path).or_default().score += delta;
    }

    /// Adds a delta only when the source already has an opinion on the path.
    pub fn bump_if_present(&mut self, path: CareerPath, delta: f64) {
        if let Some(draft) = self.drafts.get_mut(&path) {
            draft.score += delta;
        }
    }

    pub fn pro(&mut self, path: CareerPath, text: &str) {
        self.drafts.entry(path).or_default().pros.push(text.to_string());
    }

    pub fn con(&mut self, path: CareerPath, text: &str) {
        self.drafts.entry(path).or_default().cons.push(text.to_string());
    }

    /// Path-specific rationale override; paths without one use the
    /// source-level rationale.
    pub fn rationale(&mut self, path: CareerPath, text: &str) {
        self.drafts.entry(path).or_default().rationale = Some(text.to_string());
    }

    /// Emits hypotheses in deterministic path order. Drafts that ended at or
    /// below zero are dropped: an abstention, not a zero-scored opinion.
    pub fn into_hypotheses(self, source_id: &'static str, default_rationale: &str) -> Vec<Hypothesis> {
        self.drafts
            .into_iter()
            .filter(|(_, d)| d.score > 0.0)
            .map(|(path, d)| {
                let rationale = d.rationale.unwrap_or_else(|| default_rationale.to_string());
                Hypothesis::new(path, source_id, d.score, rationale)
                    .with_pros(d.pros)
                    .with_cons(d.cons)
            })
            .collect()
    }
}
