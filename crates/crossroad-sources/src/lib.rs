//! crossroad-sources: the built-in knowledge sources.
//!
//! Three independent specialists contribute scored hypotheses to the
//! blackboard: a fit counselor (interests and personality), an industry
//! veteran (experience and market value) and an education advisor
//! (credential gaps and retraining routes).

mod draft;
mod education_advisor;
mod fit_counselor;
mod industry_veteran;

pub use education_advisor::EducationAdvisor;
pub use fit_counselor::FitCounselor;
pub use industry_veteran::IndustryVeteran;

use crossroad_core::SourceRegistry;
use std::sync::Arc;

/// Builds the standard registry in the canonical firing order: counselor,
/// veteran, advisor. Registration order is the firing order.
pub fn default_registry() -> SourceRegistry {
    let mut registry = SourceRegistry::new();
    registry.register(Arc::new(FitCounselor::new()));
    registry.register(Arc::new(IndustryVeteran::new()));
    registry.register(Arc::new(EducationAdvisor::new()));
    registry
}

#[cfg(test)]
pub(crate) mod testutil {
    use crossroad_core::{
        AlternativeField, CurrentRole, EducationLevel, FinancialPressure, Interest,
        PerformanceLevel, PersonalityTraits, Profile, TraitLevel,
    };

    /// Degreed CSR, three years in, tech-curious and researched. The same
    /// reference candidate used across the workspace test suites.
    pub fn sample_profile() -> Profile {
        Profile {
            age: 25,
            has_degree: true,
            education: EducationLevel::BachelorsDegree,
            bpo_experience_years: 3,
            current_role: CurrentRole::CustomerServiceRepresentative,
            monthly_salary: 30_000.0,
            satisfaction: 6,
            performance: PerformanceLevel::Good,
            personality_traits: PersonalityTraits {
                conscientiousness: TraitLevel::Medium,
                extroversion: TraitLevel::Medium,
                openness: TraitLevel::High,
            },
            interests: [Interest::Technology, Interest::Leadership].into_iter().collect(),
            financial_pressure: FinancialPressure::Medium,
            wlb_importance: TraitLevel::High,
            identified_alternative_field: true,
            alternative_field: Some(AlternativeField::Tech),
            researched_requirements: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_profile;
    use crossroad_core::{Advisor, CareerPath, Confidence, EngineConfig};

    #[test]
    fn test_registry_order_is_canonical() {
        let registry = default_registry();
        assert_eq!(
            registry.ids(),
            vec!["fit_counselor", "industry_veteran", "education_advisor"]
        );
    }

    #[tokio::test]
    async fn test_full_pipeline_on_reference_candidate() {
        let config = EngineConfig {
            trials: 200,
            ..EngineConfig::default()
        };
        let advisor = Advisor::new(Arc::new(default_registry()), config);
        let report = advisor
            .advise_seeded(&sample_profile(), Some(42))
            .await
            .unwrap();

        assert_eq!(report.recommendation.path, CareerPath::SwitchTech);
        assert!(matches!(
            report.final_confidence,
            Confidence::Medium | Confidence::High
        ));
        assert!(!report.recommendation.pros.is_empty());
        assert!(!report.recommendation.cons.is_empty());
        assert!(!report.degraded);
        assert!(report
            .outlooks
            .iter()
            .any(|o| o.path == CareerPath::StayBpo));
        assert!(!report.explanation.next_steps.is_empty());
    }

    #[tokio::test]
    async fn test_all_three_sources_fire_for_reference_candidate() {
        let advisor = Advisor::new(
            Arc::new(default_registry()),
            EngineConfig { trials: 50, ..EngineConfig::default() },
        );
        let (recommendation, hypotheses) =
            advisor.recommend(&sample_profile()).await.unwrap();
        let mut sources: Vec<&str> =
            hypotheses.iter().map(|h| h.source_id.as_str()).collect();
        sources.dedup();
        assert_eq!(
            sources,
            vec!["fit_counselor", "industry_veteran", "education_advisor"]
        );
        assert_eq!(recommendation.sources.len(), 3);
    }
}
