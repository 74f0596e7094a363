//! Tripwise API /v1: REST endpoints for estimates, flight search and
//! destination lookup.
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tripwise_budget::BudgetEstimator;

pub use config::ApiConfig;
pub use error::ApiError;
pub use state::AppState;

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/estimate", post(handlers::estimate))
        .route("/v1/flights/search", post(handlers::search_flights))
        .route("/v1/destinations/{name}", get(handlers::destination))
        .route("/v1/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn build_state(config: &ApiConfig) -> anyhow::Result<Arc<AppState>> {
    let policy = config.load_policy()?;
    tracing::info!(policy = %policy.name, "budget policy loaded");
    let state = AppState::new(BudgetEstimator::new(policy), config.pacing)?;
    Ok(Arc::new(state))
}

pub async fn run(config: ApiConfig) -> anyhow::Result<()> {
    let app = create_app(build_state(&config)?);
    let listener = tokio::net::TcpListener::bind(&config.addr).await?;

    tracing::info!("Tripwise API listening on {}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
