//! Request-scoped blackboard: shared state for one reasoning pass.
//!
//! One live instance per pass, created for a profile and discarded when the
//! pass ends. Knowledge sources read through [`BlackboardView`]; all writes
//! go through the owning [`Blackboard`], so the append-only, no-lost-write
//! discipline is enforced by the borrow checker rather than a lock.

use crate::error::PassClosedError;
use crate::path::CareerPath;
use crate::profile::Profile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A scored partial conclusion about one candidate path, written once by one
/// source and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub path: CareerPath,
    /// Id of the source that wrote this hypothesis.
    pub source_id: String,
    /// Confidence in [0, 1]; clamped at construction.
    score: f64,
    pub rationale: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl Hypothesis {
    pub fn new(
        path: CareerPath,
        source_id: impl Into<String>,
        score: f64,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            path,
            source_id: source_id.into(),
            score: score.clamp(0.0, 1.0),
            rationale: rationale.into(),
            pros: Vec::new(),
            cons: Vec::new(),
        }
    }

    pub fn with_pros(mut self, pros: Vec<String>) -> Self {
        self.pros = pros;
        self
    }

    pub fn with_cons(mut self, cons: Vec<String>) -> Self {
        self.cons = cons;
        self
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Shared state for one pass: the profile, the accumulated hypotheses and
/// the pass-control metadata.
#[derive(Debug)]
pub struct Blackboard {
    profile: Profile,
    hypotheses: Vec<Hypothesis>,
    fired: BTreeSet<String>,
    pass_open: bool,
}

impl Blackboard {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            hypotheses: Vec::new(),
            fired: BTreeSet::new(),
            pass_open: true,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn is_open(&self) -> bool {
        self.pass_open
    }

    pub fn hypotheses(&self) -> &[Hypothesis] {
        &self.hypotheses
    }

    pub fn into_hypotheses(self) -> Vec<Hypothesis> {
        self.hypotheses
    }

    /// Appends a hypothesis. Fails once the control shell has closed the pass.
    pub fn add_hypothesis(&mut self, hypothesis: Hypothesis) -> Result<(), PassClosedError> {
        if !self.pass_open {
            return Err(PassClosedError);
        }
        self.hypotheses.push(hypothesis);
        Ok(())
    }

    /// Records that a source was offered its turn.
    pub(crate) fn record_fired(&mut self, source_id: &str) {
        self.fired.insert(source_id.to_string());
    }

    pub fn fired(&self) -> &BTreeSet<String> {
        &self.fired
    }

    /// Read-only view handed to knowledge sources.
    pub fn snapshot(&self) -> BlackboardView<'_> {
        BlackboardView {
            profile: &self.profile,
            hypotheses: &self.hypotheses,
            fired: &self.fired,
        }
    }

    /// Closes the pass. Only the control shell calls this.
    pub(crate) fn mark_done(&mut self) {
        self.pass_open = false;
    }
}

/// Immutable snapshot of the blackboard exposed to knowledge sources. No
/// source-to-source communication exists outside these reads.
#[derive(Debug, Clone, Copy)]
pub struct BlackboardView<'a> {
    pub profile: &'a Profile,
    pub hypotheses: &'a [Hypothesis],
    pub fired: &'a BTreeSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_profile;

    #[test]
    fn test_score_clamped_at_construction() {
        let h = Hypothesis::new(CareerPath::SwitchTech, "s", 1.7, "r");
        assert_eq!(h.score(), 1.0);
        let h = Hypothesis::new(CareerPath::SwitchTech, "s", -0.2, "r");
        assert_eq!(h.score(), 0.0);
    }

    #[test]
    fn test_append_only_order_preserved() {
        let mut board = Blackboard::new(sample_profile());
        board
            .add_hypothesis(Hypothesis::new(CareerPath::StayBpo, "a", 0.5, "first"))
            .unwrap();
        board
            .add_hypothesis(Hypothesis::new(CareerPath::SwitchTech, "b", 0.6, "second"))
            .unwrap();
        let rationales: Vec<&str> = board.hypotheses().iter().map(|h| h.rationale.as_str()).collect();
        assert_eq!(rationales, vec!["first", "second"]);
    }

    #[test]
    fn test_write_after_close_fails() {
        let mut board = Blackboard::new(sample_profile());
        board.mark_done();
        let err = board
            .add_hypothesis(Hypothesis::new(CareerPath::StayBpo, "a", 0.5, "late"))
            .unwrap_err();
        assert_eq!(err, crate::error::PassClosedError);
        assert!(board.hypotheses().is_empty());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut board = Blackboard::new(sample_profile());
        board.record_fired("a");
        board
            .add_hypothesis(Hypothesis::new(CareerPath::StayBpo, "a", 0.5, "r"))
            .unwrap();
        let view = board.snapshot();
        assert_eq!(view.hypotheses.len(), 1);
        assert!(view.fired.contains("a"));
        assert_eq!(view.profile.age, 25);
    }
}
