//! Career fit counselor: matches interests, personality and readiness
//! signals against the candidate paths. Always fires.

use crate::draft::DraftBoard;
use async_trait::async_trait;
use crossroad_core::{
    BlackboardView, CareerPath, FinancialPressure, Hypothesis, Interest, KnowledgeSource,
    SourceError, TraitLevel,
};

pub const SOURCE_ID: &str = "fit_counselor";

/// Personality- and interest-driven fit assessment.
#[derive(Debug, Clone, Copy)]
pub struct FitCounselor;

impl FitCounselor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FitCounselor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KnowledgeSource for FitCounselor {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    fn name(&self) -> &str {
        "Career Fit Counselor"
    }

    async fn contribute(&self, view: &BlackboardView<'_>) -> Result<Vec<Hypothesis>, SourceError> {
        let p = view.profile;
        let traits = p.personality_traits;
        let mut board = DraftBoard::new();

        // Interest alignment.
        if p.has_interest(Interest::Technology) {
            board.bump(CareerPath::SwitchTech, 0.75);
            board.pro(CareerPath::SwitchTech, "Aligns with expressed interest in technology");
            board.pro(
                CareerPath::SwitchTech,
                "Tech industry offers strong long-term salary growth",
            );
            board.con(
                CareerPath::SwitchTech,
                "May require initial salary adjustment during the transition",
            );
            if traits.openness == TraitLevel::High {
                board.bump(CareerPath::SwitchTech, 0.10);
                board.pro(
                    CareerPath::SwitchTech,
                    "High openness suits fast-changing technical work",
                );
            }
        }
        if p.has_interest(Interest::Leadership) {
            board.bump(CareerPath::AdvanceBpo, 0.70);
            board.pro(
                CareerPath::AdvanceBpo,
                "Leadership interest matches team lead and supervisory tracks",
            );
            board.con(
                CareerPath::AdvanceBpo,
                "Advancement pace depends on openings in the current account",
            );
        }
        if p.has_interest(Interest::Business) || p.has_interest(Interest::Management) {
            board.bump(CareerPath::SwitchBusiness, 0.65);
            board.pro(
                CareerPath::SwitchBusiness,
                "Customer-handling and communication skills transfer well to business roles",
            );
            board.con(
                CareerPath::SwitchBusiness,
                "High competition from business graduates",
            );
        }
        if p.has_interest(Interest::Learning) || p.has_interest(Interest::Academic) {
            board.bump(CareerPath::FurtherEducation, 0.65);
            board.pro(
                CareerPath::FurtherEducation,
                "Aligns with expressed interest in continued learning",
            );
            board.con(
                CareerPath::FurtherEducation,
                "Significant time commitment alongside work",
            );
            board.bump(CareerPath::SwitchEducation, 0.60);
            board.pro(
                CareerPath::SwitchEducation,
                "Teaching rewards an academic inclination directly",
            );
        }
        if p.has_interest(Interest::Creative) {
            board.bump(CareerPath::SwitchCreative, 0.65);
            board.pro(
                CareerPath::SwitchCreative,
                "Creative work matches the expressed interest",
            );
            board.con(
                CareerPath::SwitchCreative,
                "Creative markets can be unpredictable and competitive",
            );
            if traits.openness == TraitLevel::High {
                board.bump(CareerPath::SwitchCreative, 0.10);
            }
        }
        if p.has_interest(Interest::SpecializedBpo) {
            board.bump(CareerPath::AdvanceBpo, 0.60);
            board.pro(
                CareerPath::AdvanceBpo,
                "Specialized BPO functions reward deep account knowledge",
            );
        }

        // Personality fit on paths already in play.
        if traits.conscientiousness == TraitLevel::High {
            board.ensure(CareerPath::StayBpo, 0.55);
            board.pro(
                CareerPath::StayBpo,
                "Structured environment suits a detail-oriented personality",
            );
            board.bump_if_present(CareerPath::AdvanceBpo, 0.05);
        }
        if traits.extroversion == TraitLevel::High {
            board.bump_if_present(CareerPath::AdvanceBpo, 0.05);
            board.bump_if_present(CareerPath::SwitchBusiness, 0.05);
        }

        // Readiness rule: a researched alternative field, or sustained
        // dissatisfaction, tilts the board toward a concrete move.
        let researched_field = p.identified_field().filter(|_| p.researched_requirements);
        if let Some(field) = researched_field {
            let target = field.target_path();
            board.ensure(target, 0.55);
            board.bump(target, 0.25);
            board.pro(
                target,
                "Field already identified and researched, indicating transition readiness",
            );
            board.con(
                target,
                "Plan the switch gradually to keep income steady during retraining",
            );
        } else if p.satisfaction < 4 {
            board.ensure(CareerPath::FurtherEducation, 0.50);
            board.bump(CareerPath::FurtherEducation, 0.15);
            board.pro(
                CareerPath::FurtherEducation,
                "Low satisfaction warrants building options beyond the current role",
            );
        } else {
            board.ensure(CareerPath::AdvanceBpo, 0.50);
            board.bump(CareerPath::AdvanceBpo, 0.15);
            board.pro(
                CareerPath::AdvanceBpo,
                "Leverage current skills while exploring other fields on the side",
            );
        }

        // High financial pressure favors income continuity.
        if p.financial_pressure == FinancialPressure::High {
            board.ensure(CareerPath::StayBpo, 0.50);
            board.pro(CareerPath::StayBpo, "Preserves a stable income under financial pressure");
            for risky in [
                CareerPath::FurtherEducation,
                CareerPath::SwitchTech,
                CareerPath::SwitchBusiness,
            ] {
                board.bump_if_present(risky, -0.10);
                board.con(risky, "May cause financial strain during the transition period");
            }
        }

        Ok(board.into_hypotheses(
            SOURCE_ID,
            "Interest, personality and readiness alignment with this path",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_profile;
    use crossroad_core::Blackboard;

    async fn run(profile: crossroad_core::Profile) -> Vec<Hypothesis> {
        let board = Blackboard::new(profile);
        FitCounselor::new().contribute(&board.snapshot()).await.unwrap()
    }

    fn score_of(hyps: &[Hypothesis], path: CareerPath) -> Option<f64> {
        hyps.iter().find(|h| h.path == path).map(|h| h.score())
    }

    #[tokio::test]
    async fn test_researched_tech_interest_maxes_switch_tech() {
        let hyps = run(sample_profile()).await;
        // 0.75 interest + 0.10 openness + 0.25 readiness, clamped.
        assert_eq!(score_of(&hyps, CareerPath::SwitchTech), Some(1.0));
        assert_eq!(score_of(&hyps, CareerPath::AdvanceBpo), Some(0.70));
    }

    #[tokio::test]
    async fn test_deterministic_for_same_profile() {
        let a = run(sample_profile()).await;
        let b = run(sample_profile()).await;
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_high_financial_pressure_penalizes_risky_moves() {
        let mut p = sample_profile();
        p.financial_pressure = FinancialPressure::High;
        let hyps = run(p).await;
        let tech = hyps.iter().find(|h| h.path == CareerPath::SwitchTech).unwrap();
        assert!(tech.score() < 1.0);
        assert!(tech.cons.iter().any(|c| c.contains("financial strain")));
        assert!(score_of(&hyps, CareerPath::StayBpo).unwrap() >= 0.50);
    }

    #[tokio::test]
    async fn test_dissatisfied_without_field_leans_on_education() {
        let mut p = sample_profile();
        p.satisfaction = 2;
        p.identified_alternative_field = false;
        p.alternative_field = None;
        let hyps = run(p).await;
        assert!(score_of(&hyps, CareerPath::FurtherEducation).unwrap() >= 0.65);
    }

    #[tokio::test]
    async fn test_every_hypothesis_carries_evidence() {
        for h in run(sample_profile()).await {
            assert_eq!(h.source_id, SOURCE_ID);
            assert!(!h.pros.is_empty(), "{} has no pros", h.path);
            assert!(!h.rationale.is_empty());
        }
    }
}
