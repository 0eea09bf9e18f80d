//! crossroad-core: career-transition decision core.
//!
//! A blackboard-style reasoning pass over independently-authored knowledge
//! sources produces a ranked qualitative recommendation; a seeded
//! Monte-Carlo simulator produces quantitative multi-year outlooks; a
//! validator reconciles the two into one structured, render-agnostic report.

mod aggregate;
mod blackboard;
mod config;
mod error;
mod path;
mod profile;
mod shell;
mod sim;
mod source;
mod system;
mod validate;

pub use aggregate::{
    Aggregator, AlternativeOption, Confidence, RankedPath, Recommendation,
    DEFAULT_ALTERNATIVE_MARGIN, DEFAULT_SOURCE_WEIGHTS,
};
pub use blackboard::{Blackboard, BlackboardView, Hypothesis};
pub use config::EngineConfig;
pub use error::{
    AdvisorError, AggregationEmptyError, FieldIssue, PassClosedError, ProfileValidationError,
    SimulationError, SourceError,
};
pub use path::{CareerPath, PathCategory};
pub use profile::{
    AlternativeField, CurrentRole, EducationLevel, FinancialPressure, Interest,
    PerformanceLevel, PersonalityTraits, Profile, TraitLevel,
};
pub use shell::ControlShell;
pub use sim::{
    archetype, PathArchetype, ScenarioEnvelope, ScenarioType, SimulationEngine, SimulationResult,
    SimulationScenario, DEFAULT_HORIZON_YEARS, DEFAULT_TRIALS,
};
pub use source::{KnowledgeSource, SourceRegistry};
pub use system::Advisor;
pub use validate::{
    Agreement, CompositeWeights, Explanation, PathOutlook, SourceFinding, ValidationReport,
    Validator,
};

#[cfg(test)]
pub(crate) mod testutil {
    use crate::profile::*;

    /// The end-to-end scenario profile used across the test suite.
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
