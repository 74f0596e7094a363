//! Estimation pipeline behaviour: progress ordering and result stability.

use chrono::NaiveDate;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tripwise_budget::{estimate, BudgetEstimator, BudgetPolicy, CostCategory};
use tripwise_core::{ExecutionContext, FlightPriceSelection, Pacing, TripParameters};
use tripwise_stages::EstimationPipeline;

fn thailand() -> TripParameters {
    TripParameters::new(
        "London",
        "Thailand",
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 3, 6).unwrap(),
    )
    .with_travelers(2)
    .with_budget(1000.0)
}

#[tokio::test]
async fn test_progress_completes_before_result() {
    let ctx = ExecutionContext::new().with_pacing(Pacing::instant());
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);

    let outcome = EstimationPipeline::default()
        .run(&ctx, &thailand(), None, None, move |e| sink.lock().unwrap().push(e))
        .await;

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 6);
    assert_eq!(events.last().unwrap().percent, 100);
    assert!(events.windows(2).all(|w| w[0].percent < w[1].percent));
    assert_eq!(outcome.stages.len(), 6);
    assert_eq!(outcome.trace_id, ctx.trace_id);
    assert_eq!(outcome.analysis.total_estimated, 1787);
}

#[tokio::test]
async fn test_pacing_does_not_change_result() {
    let trip = thailand();
    let flights = FlightPriceSelection::round_trip(350.0, 325.0);

    let instant = ExecutionContext::new().with_pacing(Pacing::instant());
    let paced = ExecutionContext::new().with_pacing(Pacing::Fixed(Duration::from_millis(1)));
    let pipeline = EstimationPipeline::default();

    let a = pipeline.run(&instant, &trip, None, Some(&flights), |_| {}).await;
    let b = pipeline.run(&paced, &trip, None, Some(&flights), |_| {}).await;

    assert_eq!(a.analysis, b.analysis);
    assert_eq!(a.analysis, estimate(&trip, None, Some(&flights)));
    assert_eq!(a.analysis.amount(CostCategory::Flights), 1350);
}

#[tokio::test]
async fn test_custom_estimator_is_used() {
    let mut policy = BudgetPolicy::default();
    policy.rates.flight_per_person = 0.0;
    let pipeline = EstimationPipeline::new(BudgetEstimator::new(policy));
    let ctx = ExecutionContext::new().with_pacing(Pacing::instant());

    let outcome = pipeline.run(&ctx, &thailand(), None, None, |_| {}).await;
    assert_eq!(outcome.analysis.amount(CostCategory::Flights), 0);
    assert_eq!(outcome.analysis.total_estimated, 1787 - 720);
    assert_eq!(outcome.pipeline_id, "destination→flights→accommodation→daily→risks→recommendations");
}
