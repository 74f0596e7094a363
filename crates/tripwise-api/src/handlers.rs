//! API Handlers
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};
use tripwise_budget::{match_destination, BudgetAnalysis, CostTier};
use tripwise_core::{
    ExecutionContext, FlightPriceSelection, ItineraryData, RawTripInput, TripParameters,
    TRIPWISE_VERSION,
};
use tripwise_flights::{FlightQuery, FlightSearchResult};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub trip: RawTripInput,
    #[serde(default)]
    pub itinerary: Option<ItineraryData>,
    #[serde(default)]
    pub flights: Option<FlightPriceSelection>,
    /// Price flights with the search service when no fares are given
    #[serde(default)]
    pub search_flights: bool,
}

#[derive(Debug, Serialize)]
pub struct DestinationResponse {
    pub destination: String,
    pub tier: CostTier,
    pub multiplier: f64,
    pub matched: Option<String>,
}

pub async fn estimate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<BudgetAnalysis>, ApiError> {
    let Json(request) = payload.map_err(|r| ApiError::rejected(r, "validation"))?;
    let trip = TripParameters::from_raw(&request.trip)?;
    let ctx = ExecutionContext::new().with_pacing(state.pacing);

    let searched = match (&request.flights, request.search_flights) {
        (None, true) => run_search(&state, &FlightQuery::from_trip(&trip)).await?.selection,
        _ => None,
    };
    let flights = request.flights.as_ref().or(searched.as_ref());

    let outcome = state
        .pipeline
        .run(
            &ctx,
            &trip,
            request.itinerary.as_ref(),
            flights,
            |_| {},
        )
        .await;

    state.metrics.estimates.inc();
    info!(
        trace_id = %outcome.trace_id,
        destination = %trip.destination,
        status = %outcome.analysis.budget_status,
        total = outcome.analysis.total_estimated,
        "estimate served"
    );

    Ok(Json(outcome.analysis))
}

pub async fn search_flights(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FlightQuery>, JsonRejection>,
) -> Result<Json<FlightSearchResult>, ApiError> {
    let Json(query) = payload.map_err(|r| ApiError::rejected(r, "invalid_query"))?;
    Ok(Json(run_search(&state, &query).await?))
}

async fn run_search(state: &AppState, query: &FlightQuery) -> Result<FlightSearchResult, ApiError> {
    let result = state.flights.search(query).await?;

    state.metrics.flight_searches.inc();
    if result.fallback {
        state.metrics.flight_fallbacks.inc();
        warn!(route = %format!("{}→{}", query.source, query.destination), "served placeholder flight offers");
    }

    Ok(result)
}

pub async fn destination(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Json<DestinationResponse> {
    let found = match_destination(&name, state.pipeline.estimator().policy());
    Json(DestinationResponse {
        destination: name,
        tier: found.tier,
        multiplier: found.multiplier,
        matched: found.matched,
    })
}

pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": TRIPWISE_VERSION,
            "policy": state.pipeline.estimator().policy().name,
        })),
    )
}

pub async fn metrics(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let body = state
        .metrics
        .encode()
        .map_err(|e| ApiError::internal(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body))
}
