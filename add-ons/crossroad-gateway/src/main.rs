//! Axum-based HTTP gateway for the career-transition advisor. Thin wrapper:
//! form in, structured report plus rendered markdown out.

mod render;

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use crossroad_core::{
    Advisor, AdvisorError, AlternativeField, CurrentRole, EducationLevel, EngineConfig,
    FinancialPressure, Interest, PerformanceLevel, PersonalityTraits, Profile, TraitLevel,
};
use crossroad_sources::default_registry;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env if present (before any env::var calls).
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[crossroad-gateway] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match EngineConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load engine config");
            std::process::exit(1);
        }
    };
    let advisor = Arc::new(Advisor::new(Arc::new(default_registry()), config));
    let app = build_app(AppState { advisor });

    let port = std::env::var("CROSSROAD_PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!("crossroad gateway listening on {}", addr);
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "failed to bind {}", addr);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}

fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/v1/status", get(status))
        .route("/v1/advise", post(advise))
        .with_state(state)
}

#[derive(Clone)]
struct AppState {
    advisor: Arc<Advisor>,
}

/// GET /v1/status – identity and the effective engine parameters.
async fn status(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    let config = state.advisor.config();
    axum::Json(serde_json::json!({
        "service": "crossroad-gateway",
        "trials": config.trials,
        "horizon_years": config.horizon_years,
        "workers": config.workers,
    }))
}

/// Flat form shape for POST /v1/advise. `interests` is a comma-separated
/// list of interest tags.
#[derive(Debug, serde::Deserialize)]
struct ProfileForm {
    age: u32,
    has_degree: bool,
    education: EducationLevel,
    experience_years: u32,
    current_role: CurrentRole,
    monthly_salary: f64,
    satisfaction: u8,
    performance: PerformanceLevel,
    conscientiousness: TraitLevel,
    extroversion: TraitLevel,
    openness: TraitLevel,
    #[serde(default)]
    interests: String,
    financial_pressure: FinancialPressure,
    wlb_importance: TraitLevel,
    identified_alternative_field: bool,
    #[serde(default)]
    alternative_field: Option<AlternativeField>,
    researched_requirements: bool,
    /// Optional fixed simulation seed for reproducible output.
    #[serde(default)]
    seed: Option<u64>,
}

impl ProfileForm {
    fn parse_interests(&self) -> Result<BTreeSet<Interest>, String> {
        let mut interests = BTreeSet::new();
        for token in self.interests.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let interest: Interest =
                serde_json::from_value(serde_json::Value::String(token.to_string()))
                    .map_err(|_| format!("unknown interest tag: {}", token))?;
            interests.insert(interest);
        }
        Ok(interests)
    }

    fn into_profile(self) -> Result<Profile, String> {
        let interests = self.parse_interests()?;
        Ok(Profile {
            age: self.age,
            has_degree: self.has_degree,
            education: self.education,
            bpo_experience_years: self.experience_years,
            current_role: self.current_role,
            monthly_salary: self.monthly_salary,
            satisfaction: self.satisfaction,
            performance: self.performance,
            personality_traits: PersonalityTraits {
                conscientiousness: self.conscientiousness,
                extroversion: self.extroversion,
                openness: self.openness,
            },
            interests,
            financial_pressure: self.financial_pressure,
            wlb_importance: self.wlb_importance,
            identified_alternative_field: self.identified_alternative_field,
            alternative_field: self.alternative_field,
            researched_requirements: self.researched_requirements,
        })
    }
}

/// POST /v1/advise – full advisory pipeline for one candidate.
async fn advise(State(state): State<AppState>, Form(form): Form<ProfileForm>) -> Response {
    let seed = form.seed;
    let profile = match form.into_profile() {
        Ok(profile) => profile,
        Err(message) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                axum::Json(serde_json::json!({
                    "status": "invalid_profile",
                    "issues": [{ "field": "interests", "message": message }],
                })),
            )
                .into_response();
        }
    };

    let request_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(request_id = %request_id, "advise request received");

    match state.advisor.advise_seeded(&profile, seed).await {
        Ok(report) => {
            let narrative = render::render_markdown(&report);
            axum::Json(serde_json::json!({
                "request_id": request_id,
                "recommendation": report.recommendation,
                "report": report,
                "narrative": narrative,
                "chart": serde_json::Value::Null,
            }))
            .into_response()
        }
        Err(AdvisorError::Validation(err)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(serde_json::json!({
                "status": "invalid_profile",
                "issues": err
                    .issues
                    .iter()
                    .map(|i| serde_json::json!({ "field": i.field, "message": i.message }))
                    .collect::<Vec<_>>(),
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "advise failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(serde_json::json!({ "status": "error", "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
