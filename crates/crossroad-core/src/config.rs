//! Engine configuration. Load from TOML or env.

use crate::aggregate::DEFAULT_ALTERNATIVE_MARGIN;
use crate::sim::{DEFAULT_HORIZON_YEARS, DEFAULT_TRIALS};
use crate::validate::CompositeWeights;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tunables of the advisory pipeline. Everything has a defensible default;
/// nothing here changes the semantics of the pass, only its parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Monte-Carlo trials per simulated path.
    pub trials: u32,
    /// Simulated horizon in years.
    pub horizon_years: u32,
    /// Bounded worker pool size for trial computation.
    pub workers: usize,
    /// Closeness margin for reporting a runner-up alternative.
    pub alternative_margin: f64,
    /// Fixed simulation seed. Unset means a fresh random seed per request.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Per-source aggregation weight overrides, keyed by source id.
    #[serde(default)]
    pub source_weights: HashMap<String, f64>,
    /// Composite quantitative score weights used by the validator.
    #[serde(default)]
    pub composite: CompositeWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            horizon_years: DEFAULT_HORIZON_YEARS,
            workers: 4,
            alternative_margin: DEFAULT_ALTERNATIVE_MARGIN,
            seed: None,
            source_weights: HashMap::new(),
            composite: CompositeWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Load config from file and environment. Precedence: env
    /// `CROSSROAD_CONFIG` path > `config/engine.toml` > defaults, with
    /// `CROSSROAD__`-prefixed env vars overriding either. The file path may
    /// be given with or without its extension; a missing file falls through
    /// to the defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("CROSSROAD_CONFIG").unwrap_or_else(|_| "config/engine".to_string());
        let builder = config::Config::builder()
            .set_default("trials", DEFAULT_TRIALS as i64)?
            .set_default("horizon_years", DEFAULT_HORIZON_YEARS as i64)?
            .set_default("workers", 4_i64)?
            .set_default("alternative_margin", DEFAULT_ALTERNATIVE_MARGIN)?
            .set_default("composite.growth", 0.35)?
            .set_default("composite.satisfaction", 0.25)?
            .set_default("composite.stability", 0.20)?
            .set_default("composite.success", 0.20)?;

        let built = builder
            .add_source(config::File::with_name(&config_path).required(false))
            .add_source(config::Environment::with_prefix("CROSSROAD").separator("__"))
            .build()?;

        built.try_deserialize()
    }
}
