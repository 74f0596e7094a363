//! Tripwise Stages: progress sequences for the planning screens.
//!
//! Each screen (trip input, itinerary, flight search, budget analysis)
//! shows a short sequence of labelled steps. The steps are cosmetic: they
//! pace the UI and never change a computed result.
//!
//! # Pipeline Flow
//!
//! ```text
//! Trip Input → Itinerary → Flight Search → Budget Analysis
//!      ↓            ↓             ↓                ↓
//!  validated    day plan     fare choice    BudgetAnalysis
//! ```

mod pipeline;
mod screens;

pub use pipeline::{EstimationOutcome, EstimationPipeline};
pub use screens::{LabeledStage, Screen};

use tripwise_core::{ExecutionContext, PipelineRunner, ProgressEvent, StageReport};

/// Play a screen's progress sequence on its own
pub async fn play_screen<F>(screen: Screen, ctx: &ExecutionContext, on_progress: F) -> Vec<StageReport>
where
    F: FnMut(ProgressEvent),
{
    PipelineRunner::new(screen.stages()).run(ctx, on_progress).await
}
