//! Advisor: the single entry point wiring pass, aggregation, simulation and
//! validation into one pipeline.

use crate::aggregate::{Aggregator, Recommendation};
use crate::blackboard::{Blackboard, Hypothesis};
use crate::config::EngineConfig;
use crate::error::{AdvisorError, SimulationError};
use crate::path::CareerPath;
use crate::profile::Profile;
use crate::shell::ControlShell;
use crate::sim::{ScenarioEnvelope, SimulationEngine, SimulationScenario};
use crate::source::SourceRegistry;
use crate::validate::{ValidationReport, Validator};
use std::sync::Arc;

/// Career-transition advisor: validates the profile, drives one blackboard
/// pass over the registered sources, ranks the result, simulates the top
/// candidates and the status quo, and reconciles the two answers.
pub struct Advisor {
    registry: Arc<SourceRegistry>,
    shell: ControlShell,
    aggregator: Aggregator,
    engine: SimulationEngine,
    validator: Validator,
    config: EngineConfig,
}

impl Advisor {
    pub fn new(registry: Arc<SourceRegistry>, config: EngineConfig) -> Self {
        Self {
            registry,
            shell: ControlShell::new(),
            aggregator: Aggregator::new(config.source_weights.clone(), config.alternative_margin),
            engine: SimulationEngine::new(config.workers),
            validator: Validator::new(config.composite),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs the qualitative half only: validation, one reasoning pass,
    /// aggregation. Returns the recommendation plus the raw hypotheses.
    pub async fn recommend(
        &self,
        profile: &Profile,
    ) -> Result<(Recommendation, Vec<Hypothesis>), AdvisorError> {
        profile.validate()?;

        let mut board = Blackboard::new(profile.clone());
        self.shell.run_pass(&self.registry, &mut board).await?;

        let hypotheses = board.into_hypotheses();
        let recommendation = self.aggregator.aggregate(&hypotheses)?;
        Ok((recommendation, hypotheses))
    }

    /// Simulates each given path independently under all three scenario
    /// assumptions. Per-path failures are returned in place, never aborting
    /// the batch.
    pub async fn simulate(
        &self,
        profile: &Profile,
        paths: &[CareerPath],
        seed: Option<u64>,
    ) -> Vec<(CareerPath, Result<ScenarioEnvelope, SimulationError>)> {
        let mut results = Vec::with_capacity(paths.len());
        for &path in paths {
            let scenario =
                SimulationScenario::new(path, self.config.trials, self.config.horizon_years, seed);
            results.push((path, self.engine.run_envelope(&scenario, profile).await));
        }
        results
    }

    /// Full pipeline with the configured seed (random when unset).
    pub async fn advise(&self, profile: &Profile) -> Result<ValidationReport, AdvisorError> {
        self.advise_seeded(profile, self.config.seed).await
    }

    /// Full pipeline with an explicit seed for reproducible output.
    pub async fn advise_seeded(
        &self,
        profile: &Profile,
        seed: Option<u64>,
    ) -> Result<ValidationReport, AdvisorError> {
        let (recommendation, hypotheses) = self.recommend(profile).await?;

        // Status quo, the winner, and the close alternative when present.
        let mut paths = vec![CareerPath::StayBpo];
        if !paths.contains(&recommendation.path) {
            paths.push(recommendation.path);
        }
        if let Some(alt) = &recommendation.alternative {
            if !paths.contains(&alt.path) {
                paths.push(alt.path);
            }
        }

        let simulations = self.simulate(profile, &paths, seed).await;
        Ok(self.validator.reconcile(recommendation, &hypotheses, simulations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blackboard::BlackboardView;
    use crate::error::SourceError;
    use crate::source::KnowledgeSource;
    use crate::testutil::sample_profile;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl KnowledgeSource for CountingSource {
        fn id(&self) -> &'static str {
            "counting"
        }
        fn name(&self) -> &str {
            "Counting Source"
        }
        async fn contribute(
            &self,
            _view: &BlackboardView<'_>,
        ) -> Result<Vec<Hypothesis>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Hypothesis::new(CareerPath::StayBpo, "counting", 0.6, "steady")])
        }
    }

    fn advisor_with_counter(calls: Arc<AtomicUsize>) -> Advisor {
        let mut registry = SourceRegistry::new();
        registry.register(Arc::new(CountingSource { calls }));
        let config = EngineConfig {
            trials: 50,
            ..EngineConfig::default()
        };
        Advisor::new(Arc::new(registry), config)
    }

    #[tokio::test]
    async fn test_invalid_profile_rejected_before_any_source_runs() {
        let calls = Arc::new(AtomicUsize::new(0));
        let advisor = advisor_with_counter(Arc::clone(&calls));
        let mut profile = sample_profile();
        profile.age = 10;

        let err = advisor.advise(&profile).await.unwrap_err();
        assert!(matches!(err, AdvisorError::Validation(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_registry_yields_no_recommendation_possible() {
        let advisor = Advisor::new(Arc::new(SourceRegistry::new()), EngineConfig::default());
        let err = advisor.advise(&sample_profile()).await.unwrap_err();
        assert!(matches!(err, AdvisorError::EmptyAggregation(_)));
    }

    #[tokio::test]
    async fn test_seeded_advice_is_fully_deterministic() {
        let calls = Arc::new(AtomicUsize::new(0));
        let advisor = advisor_with_counter(calls);
        let profile = sample_profile();
        let a = advisor.advise_seeded(&profile, Some(42)).await.unwrap();
        let b = advisor.advise_seeded(&profile, Some(42)).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_status_quo_always_simulated() {
        let calls = Arc::new(AtomicUsize::new(0));
        let advisor = advisor_with_counter(calls);
        let report = advisor
            .advise_seeded(&sample_profile(), Some(1))
            .await
            .unwrap();
        assert!(report.outlooks.iter().any(|o| o.path == CareerPath::StayBpo));
    }
}
