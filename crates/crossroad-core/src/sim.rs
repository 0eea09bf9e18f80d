//! Stochastic multi-year career outcome simulator.
//!
//! Trials are mutually independent: each derives its own `StdRng` from the
//! scenario seed, the path id and the trial index, and draws a fixed number
//! of samples per simulated year. Aggregation folds per-trial outcomes in
//! trial-index order (sums before division), so the result is identical
//! regardless of worker completion order and fully reproducible for an
//! explicit seed.

use crate::error::SimulationError;
use crate::path::CareerPath;
use crate::profile::{FinancialPressure, PerformanceLevel, Profile, TraitLevel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Default number of Monte-Carlo trials per path.
pub const DEFAULT_TRIALS: u32 = 300;
/// Default simulated horizon in years.
pub const DEFAULT_HORIZON_YEARS: u32 = 5;
/// Salary bump applied when a trial lands a promotion.
const PROMOTION_BUMP: f64 = 1.15;

/// Baseline stochastic parameters of one career path archetype.
#[derive(Debug, Clone, Copy)]
pub struct PathArchetype {
    /// Annual salary growth rate (fractional).
    pub salary_growth_rate: f64,
    /// Yearly promotion probability.
    pub promotion_probability: f64,
    /// Job satisfaction baseline on the 1-10 scale.
    pub satisfaction_baseline: f64,
    /// Satisfaction spread; the yearly sample uses half of this as std dev.
    pub satisfaction_variance: f64,
    /// Baseline job stability in [0, 1].
    pub stability: f64,
    /// First-year salary factor relative to the current salary (transition
    /// paths start below the current salary).
    pub entry_salary_factor: f64,
}

/// Archetype table for the eight candidate paths.
pub fn archetype(path: CareerPath) -> PathArchetype {
    match path {
        CareerPath::StayBpo => PathArchetype {
            salary_growth_rate: 0.05,
            promotion_probability: 0.15,
            satisfaction_baseline: 6.0,
            satisfaction_variance: 1.0,
            stability: 0.80,
            entry_salary_factor: 1.0,
        },
        CareerPath::AdvanceBpo => PathArchetype {
            salary_growth_rate: 0.08,
            promotion_probability: 0.25,
            satisfaction_baseline: 7.0,
            satisfaction_variance: 1.5,
            stability: 0.75,
            entry_salary_factor: 1.0,
        },
        CareerPath::SwitchTech => PathArchetype {
            salary_growth_rate: 0.10,
            promotion_probability: 0.20,
            satisfaction_baseline: 7.5,
            satisfaction_variance: 2.0,
            stability: 0.70,
            entry_salary_factor: 0.90,
        },
        CareerPath::SwitchBusiness => PathArchetype {
            salary_growth_rate: 0.07,
            promotion_probability: 0.18,
            satisfaction_baseline: 7.0,
            satisfaction_variance: 1.8,
            stability: 0.65,
            entry_salary_factor: 0.90,
        },
        CareerPath::SwitchEducation => PathArchetype {
            salary_growth_rate: 0.06,
            promotion_probability: 0.15,
            satisfaction_baseline: 8.5,
            satisfaction_variance: 1.2,
            stability: 0.85,
            entry_salary_factor: 0.85,
        },
        CareerPath::SwitchHealthcare => PathArchetype {
            salary_growth_rate: 0.08,
            promotion_probability: 0.18,
            satisfaction_baseline: 7.8,
            satisfaction_variance: 1.5,
            stability: 0.80,
            entry_salary_factor: 0.80,
        },
        CareerPath::SwitchCreative => PathArchetype {
            salary_growth_rate: 0.07,
            promotion_probability: 0.16,
            satisfaction_baseline: 8.2,
            satisfaction_variance: 2.5,
            stability: 0.60,
            entry_salary_factor: 0.75,
        },
        CareerPath::FurtherEducation => PathArchetype {
            salary_growth_rate: 0.12,
            promotion_probability: 0.22,
            satisfaction_baseline: 8.0,
            satisfaction_variance: 1.5,
            stability: 0.60,
            entry_salary_factor: 0.60,
        },
    }
}

/// Market-condition assumption a scenario runs under. Best and worst case
/// scale the archetype parameters; average leaves them untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioType {
    BestCase,
    #[default]
    Average,
    WorstCase,
}

impl ScenarioType {
    /// (growth, promotion, satisfaction, stability) multipliers.
    fn multipliers(self) -> (f64, f64, f64, f64) {
        match self {
            ScenarioType::BestCase => (1.3, 1.5, 1.2, 1.2),
            ScenarioType::Average => (1.0, 1.0, 1.0, 1.0),
            ScenarioType::WorstCase => (0.7, 0.5, 0.8, 0.8),
        }
    }

    /// Scales an archetype for this scenario. Satisfaction stays on the
    /// 1-10 scale; best-case stability caps at 0.95.
    fn adjust(self, base: PathArchetype) -> PathArchetype {
        let (growth, promo, satisfaction, stability) = self.multipliers();
        PathArchetype {
            salary_growth_rate: base.salary_growth_rate * growth,
            promotion_probability: base.promotion_probability * promo,
            satisfaction_baseline: (base.satisfaction_baseline * satisfaction).min(10.0),
            satisfaction_variance: base.satisfaction_variance,
            stability: (base.stability * stability).min(0.95),
            entry_salary_factor: base.entry_salary_factor,
        }
    }
}

/// One simulation request: which path, how many trials, how far out, and
/// under which market assumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationScenario {
    pub path: CareerPath,
    pub trials: u32,
    pub horizon_years: u32,
    /// Explicit seed makes the full aggregate reproducible.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub scenario_type: ScenarioType,
}

impl SimulationScenario {
    pub fn new(path: CareerPath, trials: u32, horizon_years: u32, seed: Option<u64>) -> Self {
        Self {
            path,
            trials,
            horizon_years,
            seed,
            scenario_type: ScenarioType::Average,
        }
    }

    pub fn with_scenario_type(mut self, scenario_type: ScenarioType) -> Self {
        self.scenario_type = scenario_type;
        self
    }
}

/// Aggregate outcome statistics over all trials of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub path: CareerPath,
    #[serde(default)]
    pub scenario_type: ScenarioType,
    pub trials: u32,
    pub horizon_years: u32,
    /// Mean cumulative salary growth over the horizon, in percent of the
    /// current salary.
    pub salary_growth_mean_pct: f64,
    /// Population variance of the cumulative salary growth percentage.
    pub salary_growth_variance: f64,
    /// Mean yearly job satisfaction (1-10).
    pub satisfaction_mean: f64,
    /// Mean yearly job stability (0-1).
    pub stability_mean: f64,
    /// Fraction of trials that did not revert to the status quo mid-horizon.
    pub success_probability: f64,
}

/// The same path simulated under all three market assumptions with the same
/// seed. The average case drives the validator's composite score; best and
/// worst bound the projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEnvelope {
    pub best_case: SimulationResult,
    pub average_case: SimulationResult,
    pub worst_case: SimulationResult,
}

/// Profile-adjusted parameters driving one trial. Holds both the simulated
/// path and the status-quo fallback a reverted trial continues on.
#[derive(Debug, Clone, Copy)]
struct TrialParams {
    initial_salary: f64,
    entry_salary: f64,
    horizon_years: u32,
    path: PathDynamics,
    fallback: PathDynamics,
    /// Yearly probability that the transition fails and the trial reverts.
    revert_probability: f64,
}

#[derive(Debug, Clone, Copy)]
struct PathDynamics {
    growth_rate: f64,
    promotion_probability: f64,
    satisfaction_baseline: f64,
    satisfaction_std: f64,
    stability: f64,
}

#[derive(Debug, Clone, Copy)]
struct TrialOutcome {
    salary_growth_pct: f64,
    satisfaction_mean: f64,
    stability_mean: f64,
    reverted: bool,
}

/// Applies the profile multipliers from the scenario-adjusted archetype.
fn dynamics_for(path: CareerPath, profile: &Profile, scenario_type: ScenarioType) -> PathDynamics {
    let base = scenario_type.adjust(archetype(path));
    let mut growth = base.salary_growth_rate;
    let mut promo = base.promotion_probability;

    if profile.has_degree {
        promo *= 1.2;
        growth *= 1.1;
    }
    match profile.performance {
        PerformanceLevel::Excellent => {
            promo *= 1.3;
            growth *= 1.2;
        }
        PerformanceLevel::Good => {
            promo *= 1.1;
            growth *= 1.1;
        }
        PerformanceLevel::Poor => {
            promo *= 0.8;
            growth *= 0.9;
        }
        PerformanceLevel::Average => {}
    }
    if profile.bpo_experience_years >= 5 {
        promo *= 1.2;
    } else if profile.bpo_experience_years >= 3 {
        promo *= 1.1;
    }

    // Conscientiousness narrows the satisfaction spread.
    let variance_factor = match profile.personality_traits.conscientiousness {
        TraitLevel::High => 0.7,
        TraitLevel::Medium => 1.0,
        TraitLevel::Low => 1.25,
    };

    PathDynamics {
        growth_rate: growth,
        promotion_probability: promo.min(0.9),
        satisfaction_baseline: base.satisfaction_baseline,
        satisfaction_std: base.satisfaction_variance * variance_factor / 2.0,
        stability: base.stability,
    }
}

/// Yearly revert probability: transition risk scaled by the archetype's
/// instability, raised by financial pressure, lowered by the commitment
/// credits (conscientiousness and work-life-balance importance). Strictly
/// non-increasing in both traits.
fn revert_probability(path: CareerPath, profile: &Profile, scenario_type: ScenarioType) -> f64 {
    if !path.carries_transition_risk() {
        return 0.0;
    }
    let base = 0.15 * (1.0 - scenario_type.adjust(archetype(path)).stability);
    let pressure = match profile.financial_pressure {
        FinancialPressure::Low => 0.0,
        FinancialPressure::Medium => 0.02,
        FinancialPressure::High => 0.05,
    };
    let commitment = 0.01
        * (profile.personality_traits.conscientiousness.rank() + profile.wlb_importance.rank()) as f64;
    (base + pressure - commitment).clamp(0.0, 0.95)
}

fn trial_params(scenario: &SimulationScenario, profile: &Profile) -> TrialParams {
    let entry_factor = archetype(scenario.path).entry_salary_factor;
    TrialParams {
        initial_salary: profile.monthly_salary,
        entry_salary: profile.monthly_salary * entry_factor,
        horizon_years: scenario.horizon_years,
        path: dynamics_for(scenario.path, profile, scenario.scenario_type),
        fallback: dynamics_for(CareerPath::StayBpo, profile, scenario.scenario_type),
        revert_probability: revert_probability(scenario.path, profile, scenario.scenario_type),
    }
}

/// FNV-1a over the path id, mixed with the trial index, so every trial gets
/// an independent deterministic stream.
fn trial_seed(base: u64, path: CareerPath, trial: u64) -> u64 {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for b in path.id().bytes() {
        h ^= b as u64;
        h = h.wrapping_mul(0x0000_0100_0000_01b3);
    }
    splitmix64(base ^ h ^ trial.wrapping_mul(0x9e37_79b9_7f4a_7c15))
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

/// Standard normal sample via Box-Muller (the pack uses plain `rand`).
fn standard_normal(rng: &mut StdRng) -> f64 {
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

/// One stochastic multi-year trajectory. Draws exactly four samples per
/// year regardless of trial state, so lowering the revert probability can
/// only turn reverted trials into successful ones, never the other way.
fn run_trial(params: &TrialParams, rng: &mut StdRng) -> TrialOutcome {
    let mut salary = params.entry_salary;
    let mut satisfaction_sum = 0.0;
    let mut stability_sum = 0.0;
    let mut reverted = false;

    for year in 1..=params.horizon_years {
        let z = standard_normal(rng);
        let u_promotion: f64 = rng.gen();
        let u_revert: f64 = rng.gen();

        let active = if reverted { &params.fallback } else { &params.path };

        salary *= 1.0 + active.growth_rate;
        if u_promotion < active.promotion_probability {
            salary *= PROMOTION_BUMP;
        }

        let satisfaction = (active.satisfaction_baseline + active.satisfaction_std * z).clamp(1.0, 10.0);
        satisfaction_sum += satisfaction;

        // Stability ramps 5% per year in role, capped at 99%.
        let stability = (active.stability * (1.0 + 0.05 * year as f64)).min(0.99);
        stability_sum += stability;

        if !reverted && u_revert < params.revert_probability {
            reverted = true;
        }
    }

    let years = params.horizon_years as f64;
    TrialOutcome {
        salary_growth_pct: (salary / params.initial_salary - 1.0) * 100.0,
        satisfaction_mean: satisfaction_sum / years,
        stability_mean: stability_sum / years,
        reverted,
    }
}

/// Runs independent trials across a bounded blocking-worker pool.
pub struct SimulationEngine {
    workers: usize,
}

impl SimulationEngine {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Runs the scenario and aggregates in trial-index order.
    pub async fn run(
        &self,
        scenario: &SimulationScenario,
        profile: &Profile,
    ) -> Result<SimulationResult, SimulationError> {
        if scenario.trials == 0 {
            return Err(SimulationError::InvalidScenario {
                path: scenario.path.id().to_string(),
                reason: "trial count must be positive".to_string(),
            });
        }
        if scenario.horizon_years == 0 {
            return Err(SimulationError::InvalidScenario {
                path: scenario.path.id().to_string(),
                reason: "horizon must be positive".to_string(),
            });
        }

        let seed = scenario.seed.unwrap_or_else(rand::random);
        let params = trial_params(scenario, profile);
        let path = scenario.path;
        let trials = scenario.trials;

        let workers = (self.workers as u32).min(trials).max(1);
        let chunk = trials.div_ceil(workers);

        let mut handles = Vec::with_capacity(workers as usize);
        for w in 0..workers {
            let start = w * chunk;
            let end = ((w + 1) * chunk).min(trials);
            if start >= end {
                break;
            }
            handles.push(tokio::task::spawn_blocking(move || {
                let mut out = Vec::with_capacity((end - start) as usize);
                for trial in start..end {
                    let mut rng = StdRng::seed_from_u64(trial_seed(seed, path, trial as u64));
                    out.push((trial, run_trial(&params, &mut rng)));
                }
                out
            }));
        }

        let mut outcomes: Vec<Option<TrialOutcome>> = vec![None; trials as usize];
        for handle in handles {
            let batch = handle.await.map_err(|e| SimulationError::Worker {
                path: path.id().to_string(),
                reason: e.to_string(),
            })?;
            for (trial, outcome) in batch {
                outcomes[trial as usize] = Some(outcome);
            }
        }

        // Fold in trial-index order: sums before division.
        let mut growth_sum = 0.0;
        let mut growth_sq_sum = 0.0;
        let mut satisfaction_sum = 0.0;
        let mut stability_sum = 0.0;
        let mut successes = 0u32;
        for slot in &outcomes {
            let outcome = (*slot).ok_or_else(|| SimulationError::Worker {
                path: path.id().to_string(),
                reason: "missing trial outcome".to_string(),
            })?;
            growth_sum += outcome.salary_growth_pct;
            growth_sq_sum += outcome.salary_growth_pct * outcome.salary_growth_pct;
            satisfaction_sum += outcome.satisfaction_mean;
            stability_sum += outcome.stability_mean;
            if !outcome.reverted {
                successes += 1;
            }
        }

        let n = trials as f64;
        let growth_mean = growth_sum / n;
        Ok(SimulationResult {
            path,
            scenario_type: scenario.scenario_type,
            trials,
            horizon_years: scenario.horizon_years,
            salary_growth_mean_pct: growth_mean,
            salary_growth_variance: (growth_sq_sum / n - growth_mean * growth_mean).max(0.0),
            satisfaction_mean: satisfaction_sum / n,
            stability_mean: stability_sum / n,
            success_probability: successes as f64 / n,
        })
    }

    /// Runs the scenario under best, average and worst case with the same
    /// seed, so the three results differ only in parameterization.
    pub async fn run_envelope(
        &self,
        scenario: &SimulationScenario,
        profile: &Profile,
    ) -> Result<ScenarioEnvelope, SimulationError> {
        let seed = scenario.seed.unwrap_or_else(rand::random);
        let seeded = SimulationScenario {
            seed: Some(seed),
            ..scenario.clone()
        };
        Ok(ScenarioEnvelope {
            best_case: self
                .run(&seeded.clone().with_scenario_type(ScenarioType::BestCase), profile)
                .await?,
            average_case: self
                .run(&seeded.clone().with_scenario_type(ScenarioType::Average), profile)
                .await?,
            worst_case: self
                .run(&seeded.with_scenario_type(ScenarioType::WorstCase), profile)
                .await?,
        })
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_profile;

    fn scenario(path: CareerPath, seed: u64) -> SimulationScenario {
        SimulationScenario::new(path, 200, 5, Some(seed))
    }

    #[tokio::test]
    async fn test_identical_seed_reproduces_aggregates() {
        let engine = SimulationEngine::new(4);
        let profile = sample_profile();
        let a = engine.run(&scenario(CareerPath::SwitchTech, 42), &profile).await.unwrap();
        let b = engine.run(&scenario(CareerPath::SwitchTech, 42), &profile).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_result_independent_of_worker_count() {
        let profile = sample_profile();
        let one = SimulationEngine::new(1)
            .run(&scenario(CareerPath::SwitchTech, 7), &profile)
            .await
            .unwrap();
        let many = SimulationEngine::new(8)
            .run(&scenario(CareerPath::SwitchTech, 7), &profile)
            .await
            .unwrap();
        assert_eq!(one, many);
    }

    #[tokio::test]
    async fn test_different_seeds_differ() {
        let engine = SimulationEngine::new(4);
        let profile = sample_profile();
        let a = engine.run(&scenario(CareerPath::SwitchTech, 1), &profile).await.unwrap();
        let b = engine.run(&scenario(CareerPath::SwitchTech, 2), &profile).await.unwrap();
        assert_ne!(a.salary_growth_mean_pct, b.salary_growth_mean_pct);
    }

    #[tokio::test]
    async fn test_status_quo_never_reverts() {
        let engine = SimulationEngine::new(4);
        let result = engine
            .run(&scenario(CareerPath::StayBpo, 5), &sample_profile())
            .await
            .unwrap();
        assert_eq!(result.success_probability, 1.0);
    }

    #[tokio::test]
    async fn test_success_monotone_in_conscientiousness_and_wlb() {
        let engine = SimulationEngine::new(4);
        for seed in [1u64, 7, 42, 99] {
            let mut low = sample_profile();
            low.personality_traits.conscientiousness = TraitLevel::Low;
            let mut high = low.clone();
            high.personality_traits.conscientiousness = TraitLevel::High;
            let s_low = engine
                .run(&scenario(CareerPath::SwitchTech, seed), &low)
                .await
                .unwrap();
            let s_high = engine
                .run(&scenario(CareerPath::SwitchTech, seed), &high)
                .await
                .unwrap();
            assert!(s_high.success_probability >= s_low.success_probability);

            let mut wlb_low = sample_profile();
            wlb_low.wlb_importance = TraitLevel::Low;
            let mut wlb_high = wlb_low.clone();
            wlb_high.wlb_importance = TraitLevel::High;
            let s_low = engine
                .run(&scenario(CareerPath::SwitchCreative, seed), &wlb_low)
                .await
                .unwrap();
            let s_high = engine
                .run(&scenario(CareerPath::SwitchCreative, seed), &wlb_high)
                .await
                .unwrap();
            assert!(s_high.success_probability >= s_low.success_probability);
        }
    }

    #[tokio::test]
    async fn test_envelope_orders_best_average_worst() {
        let engine = SimulationEngine::new(4);
        let profile = sample_profile();
        for seed in [1u64, 7, 42] {
            let envelope = engine
                .run_envelope(&scenario(CareerPath::SwitchTech, seed), &profile)
                .await
                .unwrap();
            let (best, avg, worst) =
                (&envelope.best_case, &envelope.average_case, &envelope.worst_case);
            assert!(best.salary_growth_mean_pct >= avg.salary_growth_mean_pct);
            assert!(avg.salary_growth_mean_pct >= worst.salary_growth_mean_pct);
            assert!(best.satisfaction_mean >= worst.satisfaction_mean);
            assert!(best.success_probability >= avg.success_probability);
            assert!(avg.success_probability >= worst.success_probability);
        }
    }

    #[tokio::test]
    async fn test_envelope_average_matches_plain_run() {
        let engine = SimulationEngine::new(4);
        let profile = sample_profile();
        let sc = scenario(CareerPath::SwitchTech, 42);
        let envelope = engine.run_envelope(&sc, &profile).await.unwrap();
        let plain = engine.run(&sc, &profile).await.unwrap();
        assert_eq!(envelope.average_case, plain);
        assert_eq!(envelope.best_case.scenario_type, ScenarioType::BestCase);
        assert_eq!(envelope.worst_case.scenario_type, ScenarioType::WorstCase);
    }

    #[test]
    fn test_scenario_adjustment_keeps_parameters_on_scale() {
        for path in CareerPath::ALL {
            let best = ScenarioType::BestCase.adjust(archetype(path));
            assert!(best.satisfaction_baseline <= 10.0);
            assert!(best.stability <= 0.95);
            let worst = ScenarioType::WorstCase.adjust(archetype(path));
            assert!(worst.stability > 0.0);
            assert!(worst.salary_growth_rate < archetype(path).salary_growth_rate);
        }
    }

    #[test]
    fn test_worst_case_raises_revert_probability() {
        let profile = sample_profile();
        let average = revert_probability(CareerPath::SwitchTech, &profile, ScenarioType::Average);
        let worst = revert_probability(CareerPath::SwitchTech, &profile, ScenarioType::WorstCase);
        let best = revert_probability(CareerPath::SwitchTech, &profile, ScenarioType::BestCase);
        assert!(worst > average);
        assert!(best < average);
    }

    #[tokio::test]
    async fn test_zero_trials_rejected() {
        let engine = SimulationEngine::default();
        let bad = SimulationScenario::new(CareerPath::StayBpo, 0, 5, Some(1));
        assert!(matches!(
            engine.run(&bad, &sample_profile()).await,
            Err(SimulationError::InvalidScenario { .. })
        ));
    }

    #[test]
    fn test_revert_probability_monotone_and_gated() {
        let profile = sample_profile();
        let avg = ScenarioType::Average;
        assert_eq!(revert_probability(CareerPath::StayBpo, &profile, avg), 0.0);
        assert_eq!(revert_probability(CareerPath::AdvanceBpo, &profile, avg), 0.0);

        let mut low = profile.clone();
        low.personality_traits.conscientiousness = TraitLevel::Low;
        let mut high = profile;
        high.personality_traits.conscientiousness = TraitLevel::High;
        assert!(
            revert_probability(CareerPath::SwitchTech, &high, avg)
                <= revert_probability(CareerPath::SwitchTech, &low, avg)
        );
    }

    #[test]
    fn test_satisfaction_stays_on_scale() {
        let params = trial_params(
            &SimulationScenario::new(CareerPath::SwitchCreative, 1, 5, Some(3)),
            &sample_profile(),
        );
        for seed in 0..50u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = run_trial(&params, &mut rng);
            assert!(outcome.satisfaction_mean >= 1.0 && outcome.satisfaction_mean <= 10.0);
            assert!(outcome.stability_mean > 0.0 && outcome.stability_mean <= 0.99);
        }
    }
}
