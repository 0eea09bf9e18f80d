//! Validation: reconciles the qualitative recommendation with the
//! quantitative simulation outcome and assembles the structured explanation.
//!
//! The explanation is a typed document. Rendering it as markdown, HTML or
//! anything else is a presentation concern that lives outside the core.

use crate::aggregate::{AlternativeOption, Confidence, Recommendation};
use crate::blackboard::Hypothesis;
use crate::error::SimulationError;
use crate::path::CareerPath;
use crate::sim::{ScenarioEnvelope, SimulationResult};
use serde::{Deserialize, Serialize};

/// Weights of the composite quantitative score. Salary growth is normalized
/// as `clamp(pct / 100)`, satisfaction as `mean / 10`; stability and success
/// probability are already in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeWeights {
    pub growth: f64,
    pub satisfaction: f64,
    pub stability: f64,
    pub success: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            growth: 0.35,
            satisfaction: 0.25,
            stability: 0.20,
            success: 0.20,
        }
    }
}

/// Simulation outlook for one evaluated path. `result` is the average-case
/// projection and drives the composite score; `best_case` and `worst_case`
/// bound it. All are `None` when the simulation failed for this path; the
/// report is then flagged degraded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathOutlook {
    pub path: CareerPath,
    pub result: Option<SimulationResult>,
    #[serde(default)]
    pub best_case: Option<SimulationResult>,
    #[serde(default)]
    pub worst_case: Option<SimulationResult>,
    pub composite_score: Option<f64>,
    pub unavailable_reason: Option<String>,
}

/// One source's scored finding, carried verbatim into the explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFinding {
    pub source_id: String,
    pub path: CareerPath,
    pub score: f64,
    pub rationale: String,
}

/// Outcome of the qualitative-vs-quantitative cross-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Agreement {
    /// Simulation's best composite path matches the recommendation.
    Confirmed,
    /// Simulation favors a different path.
    Conflicted,
    /// Simulation unavailable for the recommended path; qualitative
    /// confidence stands alone.
    Unavailable,
}

/// Structured explanation sections, assembled as data, never as markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub summary: String,
    pub source_findings: Vec<SourceFinding>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub simulation: Vec<PathOutlook>,
    pub confidence: Confidence,
    pub alternative_note: Option<String>,
    pub next_steps: Vec<String>,
    /// True when any evaluated path is missing simulation data.
    pub degraded: bool,
}

/// Final result of one advisory pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub recommendation: Recommendation,
    pub outlooks: Vec<PathOutlook>,
    pub agreement: Agreement,
    pub final_confidence: Confidence,
    pub explanation: Explanation,
    pub degraded: bool,
}

/// Reconciles recommendation and simulation into a [`ValidationReport`].
pub struct Validator {
    weights: CompositeWeights,
}

impl Validator {
    pub fn new(weights: CompositeWeights) -> Self {
        Self { weights }
    }

    /// Normalized combination of the four aggregate outcome metrics.
    pub fn composite_score(&self, result: &SimulationResult) -> f64 {
        let growth = (result.salary_growth_mean_pct / 100.0).clamp(0.0, 1.0);
        let satisfaction = (result.satisfaction_mean / 10.0).clamp(0.0, 1.0);
        self.weights.growth * growth
            + self.weights.satisfaction * satisfaction
            + self.weights.stability * result.stability_mean.clamp(0.0, 1.0)
            + self.weights.success * result.success_probability.clamp(0.0, 1.0)
    }

    pub fn reconcile(
        &self,
        mut recommendation: Recommendation,
        hypotheses: &[Hypothesis],
        simulations: Vec<(CareerPath, Result<ScenarioEnvelope, SimulationError>)>,
    ) -> ValidationReport {
        let outlooks: Vec<PathOutlook> = simulations
            .into_iter()
            .map(|(path, sim)| match sim {
                Ok(envelope) => {
                    let composite = self.composite_score(&envelope.average_case);
                    PathOutlook {
                        path,
                        result: Some(envelope.average_case),
                        best_case: Some(envelope.best_case),
                        worst_case: Some(envelope.worst_case),
                        composite_score: Some(composite),
                        unavailable_reason: None,
                    }
                }
                Err(err) => {
                    tracing::warn!(path = path.id(), error = %err, "simulation unavailable for path");
                    PathOutlook {
                        path,
                        result: None,
                        best_case: None,
                        worst_case: None,
                        composite_score: None,
                        unavailable_reason: Some(err.to_string()),
                    }
                }
            })
            .collect();

        let degraded = outlooks.iter().any(|o| o.result.is_none());

        // Best composite among available outlooks; lexical id for determinism.
        let best = outlooks
            .iter()
            .filter(|o| o.composite_score.is_some())
            .max_by(|a, b| {
                a.composite_score
                    .partial_cmp(&b.composite_score)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(b.path.id().cmp(a.path.id()))
            });
        let top_available = outlooks
            .iter()
            .any(|o| o.path == recommendation.path && o.result.is_some());

        let (agreement, final_confidence, alternative_note) = match best {
            Some(best) if top_available && best.path == recommendation.path => {
                let upgraded = if recommendation.confidence == Confidence::Medium {
                    Confidence::High
                } else {
                    recommendation.confidence
                };
                (Agreement::Confirmed, upgraded, margin_note(&recommendation))
            }
            Some(best) if top_available => {
                let note = format!(
                    "The experts favored {} (score {:.2}), but the simulation favors {} \
                     (composite {:.2}, projected salary growth {:.1}%, success probability {:.0}%). \
                     Consider it as an alternative.",
                    recommendation.path.display_name(),
                    recommendation.score,
                    best.path.display_name(),
                    best.composite_score.unwrap_or_default(),
                    best.result.as_ref().map(|r| r.salary_growth_mean_pct).unwrap_or_default(),
                    best.result.as_ref().map(|r| r.success_probability * 100.0).unwrap_or_default(),
                );
                recommendation.alternative = Some(AlternativeOption {
                    path: best.path,
                    score: best.composite_score.unwrap_or_default(),
                });
                (
                    Agreement::Conflicted,
                    recommendation.confidence.capped_at(Confidence::Medium),
                    Some(note),
                )
            }
            _ => (
                Agreement::Unavailable,
                recommendation.confidence,
                Some("Simulation results are unavailable; confidence reflects expert reasoning alone.".to_string()),
            ),
        };

        let source_findings: Vec<SourceFinding> = hypotheses
            .iter()
            .map(|h| SourceFinding {
                source_id: h.source_id.clone(),
                path: h.path,
                score: h.score(),
                rationale: h.rationale.clone(),
            })
            .collect();

        let summary = format!(
            "Recommended career path: {} (aggregate score {:.2}, confidence {:?}, corroborated by {} source{}).",
            recommendation.path.display_name(),
            recommendation.score,
            final_confidence,
            recommendation.sources.len(),
            if recommendation.sources.len() == 1 { "" } else { "s" },
        );

        let explanation = Explanation {
            summary,
            source_findings,
            pros: recommendation.pros.clone(),
            cons: recommendation.cons.clone(),
            simulation: outlooks.clone(),
            confidence: final_confidence,
            alternative_note: alternative_note.clone(),
            next_steps: next_steps(recommendation.path),
            degraded,
        };

        ValidationReport {
            recommendation,
            outlooks,
            agreement,
            final_confidence,
            explanation,
            degraded,
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(CompositeWeights::default())
    }
}

fn margin_note(recommendation: &Recommendation) -> Option<String> {
    recommendation.alternative.as_ref().map(|alt| {
        format!(
            "{} scored close behind ({:.2}) and remains a viable option.",
            alt.path.display_name(),
            alt.score
        )
    })
}

/// Path-specific action items surfaced in the explanation.
fn next_steps(path: CareerPath) -> Vec<String> {
    let items: &[&str] = match path {
        CareerPath::StayBpo => &[
            "Identify specific skills to develop within your current role",
            "Set clear performance goals to stand out in your current position",
            "Network with colleagues in other departments to explore internal opportunities",
        ],
        CareerPath::AdvanceBpo => &[
            "Discuss advancement opportunities with your supervisor",
            "Identify leadership training or specialized skills needed for promotion",
            "Seek a mentor in a senior role to guide your advancement",
        ],
        CareerPath::SwitchTech => &[
            "Research in-demand tech skills and certifications",
            "Explore entry-level tech roles that align with your BPO experience",
            "Build a portfolio of tech projects to demonstrate your capabilities",
        ],
        CareerPath::SwitchBusiness => &[
            "Identify transferable skills from BPO to business roles",
            "Research business certifications or courses to fill skill gaps",
            "Network with professionals in your target business field",
        ],
        CareerPath::SwitchEducation => &[
            "Research teaching credentials or trainer certifications",
            "Look for corporate training roles that value BPO coaching experience",
            "Maintain part-time income during the credential period",
        ],
        CareerPath::SwitchHealthcare => &[
            "Research healthcare certifications that fit your time constraints",
            "Compare allied-health programs with strong graduate employment records",
            "Plan finances for the lower entry salary period",
        ],
        CareerPath::SwitchCreative => &[
            "Build a portfolio through freelance projects",
            "Keep your current position for stability while the portfolio grows",
            "Network within your target creative field",
        ],
        CareerPath::FurtherEducation => &[
            "Research degree programs or certifications that align with your career goals",
            "Explore part-time or online education options to maintain income",
            "Investigate financial aid or employer tuition assistance programs",
        ],
    };
    items.iter().map(|s| s.to_string()).collect()
}
