use tripwise_budget::BudgetEstimator;
use tripwise_core::Pacing;
use tripwise_flights::{FallbackFlightSearch, MockFlightClient};
use tripwise_stages::EstimationPipeline;

use crate::metrics::ApiMetrics;

pub struct AppState {
    pub pipeline: EstimationPipeline,
    pub flights: FallbackFlightSearch<MockFlightClient>,
    pub metrics: ApiMetrics,
    pub pacing: Pacing,
}

impl AppState {
    pub fn new(estimator: BudgetEstimator, pacing: Pacing) -> Result<Self, prometheus::Error> {
        Ok(Self {
            pipeline: EstimationPipeline::new(estimator),
            flights: FallbackFlightSearch::new(MockFlightClient::new()),
            metrics: ApiMetrics::new()?,
            pacing,
        })
    }
}
