//! Aggregation: merges per-path hypotheses into one ranked recommendation.

use crate::blackboard::Hypothesis;
use crate::error::AggregationEmptyError;
use crate::path::CareerPath;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Default per-source aggregation weights (the three registered experts).
/// Unknown sources fall back to [`FALLBACK_WEIGHT`].
pub const DEFAULT_SOURCE_WEIGHTS: [(&str, f64); 3] = [
    ("fit_counselor", 0.35),
    ("industry_veteran", 0.35),
    ("education_advisor", 0.30),
];

const FALLBACK_WEIGHT: f64 = 0.33;

/// Default closeness margin under which the runner-up becomes the
/// reported alternative option.
pub const DEFAULT_ALTERNATIVE_MARGIN: f64 = 0.10;

/// Confidence label, a pure function of the aggregate score with inclusive
/// lower bounds: 0.75 → High, 0.50 → Medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.75 {
            Confidence::High
        } else if score >= 0.5 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    /// Never exceeds `ceiling`.
    pub fn capped_at(self, ceiling: Confidence) -> Self {
        self.min(ceiling)
    }
}

/// Runner-up path reported when it scores within the closeness margin of the
/// winner, or when the simulator favors it over the qualitative winner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeOption {
    pub path: CareerPath,
    pub score: f64,
}

/// One ranked path with its aggregate score and corroboration count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPath {
    pub path: CareerPath,
    pub score: f64,
    pub corroborating_sources: usize,
}

/// The merged qualitative answer of one reasoning pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub path: CareerPath,
    pub score: f64,
    pub confidence: Confidence,
    pub alternative: Option<AlternativeOption>,
    /// De-duplicated union across the winning path's contributing sources.
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    /// Ids of the sources that corroborated the winning path.
    pub sources: Vec<String>,
}

/// Merges hypotheses into a ranked recommendation with a confidence label.
pub struct Aggregator {
    weights: HashMap<String, f64>,
    alternative_margin: f64,
}

impl Aggregator {
    pub fn new(weights: HashMap<String, f64>, alternative_margin: f64) -> Self {
        Self {
            weights,
            alternative_margin,
        }
    }

    fn weight_for(&self, source_id: &str) -> f64 {
        if let Some(w) = self.weights.get(source_id) {
            return *w;
        }
        DEFAULT_SOURCE_WEIGHTS
            .iter()
            .find(|(id, _)| *id == source_id)
            .map(|(_, w)| *w)
            .unwrap_or(FALLBACK_WEIGHT)
    }

    /// Ranks every path that received at least one hypothesis. Score per path
    /// is the weighted mean over the sources that actually contributed;
    /// weights are re-normalized, so a missing source never counts as zero.
    /// Ties break by corroboration count, then lexical path id.
    pub fn ranked(&self, hypotheses: &[Hypothesis]) -> Vec<RankedPath> {
        let mut grouped: BTreeMap<CareerPath, Vec<&Hypothesis>> = BTreeMap::new();
        for h in hypotheses {
            grouped.entry(h.path).or_default().push(h);
        }

        let mut ranked: Vec<RankedPath> = grouped
            .into_iter()
            .map(|(path, group)| {
                let mut weighted_sum = 0.0;
                let mut weight_total = 0.0;
                let mut sources: BTreeSet<&str> = BTreeSet::new();
                for h in &group {
                    let w = self.weight_for(&h.source_id);
                    weighted_sum += w * h.score();
                    weight_total += w;
                    sources.insert(h.source_id.as_str());
                }
                RankedPath {
                    path,
                    score: if weight_total > 0.0 { weighted_sum / weight_total } else { 0.0 },
                    corroborating_sources: sources.len(),
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.corroborating_sources.cmp(&a.corroborating_sources))
                .then(a.path.id().cmp(b.path.id()))
        });
        ranked
    }

    /// Produces the final ranked recommendation, or
    /// [`AggregationEmptyError`] when no source wrote anything.
    pub fn aggregate(&self, hypotheses: &[Hypothesis]) -> Result<Recommendation, AggregationEmptyError> {
        let ranked = self.ranked(hypotheses);
        let winner = ranked.first().ok_or(AggregationEmptyError)?.clone();

        let alternative = ranked.get(1).and_then(|second| {
            if winner.score - second.score <= self.alternative_margin {
                Some(AlternativeOption {
                    path: second.path,
                    score: second.score,
                })
            } else {
                None
            }
        });

        let mut pros = Vec::new();
        let mut cons = Vec::new();
        let mut seen_pros = HashSet::new();
        let mut seen_cons = HashSet::new();
        let mut sources: Vec<String> = Vec::new();
        for h in hypotheses.iter().filter(|h| h.path == winner.path) {
            if !sources.contains(&h.source_id) {
                sources.push(h.source_id.clone());
            }
            for p in &h.pros {
                if seen_pros.insert(p.clone()) {
                    pros.push(p.clone());
                }
            }
            for c in &h.cons {
                if seen_cons.insert(c.clone()) {
                    cons.push(c.clone());
                }
            }
        }

        Ok(Recommendation {
            path: winner.path,
            score: winner.score,
            confidence: Confidence::from_score(winner.score),
            alternative,
            pros,
            cons,
            sources,
        })
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(HashMap::new(), DEFAULT_ALTERNATIVE_MARGIN)
    }
}
