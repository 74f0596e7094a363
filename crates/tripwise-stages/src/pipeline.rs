//! Estimation pipeline: progress stages first, then the estimate.
use serde::{Deserialize, Serialize};
use tracing::debug;
use tripwise_budget::{BudgetAnalysis, BudgetEstimator};
use tripwise_core::{
    ExecutionContext, FlightPriceSelection, ItineraryData, PipelineRunner, ProgressEvent,
    StageReport, TripParameters,
};

use crate::screens::Screen;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationOutcome {
    pub trace_id: String,
    pub pipeline_id: String,
    pub stages: Vec<StageReport>,
    pub analysis: BudgetAnalysis,
}

pub struct EstimationPipeline {
    runner: PipelineRunner,
    estimator: BudgetEstimator,
}

impl Default for EstimationPipeline {
    fn default() -> Self {
        Self::new(BudgetEstimator::default())
    }
}

impl EstimationPipeline {
    pub fn new(estimator: BudgetEstimator) -> Self {
        Self {
            runner: PipelineRunner::new(Screen::BudgetAnalysis.stages()),
            estimator,
        }
    }

    pub fn estimator(&self) -> &BudgetEstimator {
        &self.estimator
    }

    /// Show every progress stage, then compute the analysis.
    ///
    /// The last progress event (100%) is always delivered before this
    /// returns; pacing never affects the analysis.
    pub async fn run<F>(
        &self,
        ctx: &ExecutionContext,
        trip: &TripParameters,
        itinerary: Option<&ItineraryData>,
        flights: Option<&FlightPriceSelection>,
        on_progress: F,
    ) -> EstimationOutcome
    where
        F: FnMut(ProgressEvent),
    {
        let stages = self.runner.run(ctx, on_progress).await;
        let analysis = self.estimator.estimate(trip, itinerary, flights);

        debug!(
            trace_id = %ctx.trace_id,
            pipeline = self.runner.pipeline_id(),
            total = analysis.total_estimated,
            "estimation pipeline finished"
        );

        EstimationOutcome {
            trace_id: ctx.trace_id.clone(),
            pipeline_id: self.runner.pipeline_id().to_string(),
            stages,
            analysis,
        }
    }
}
