//! Pipeline Runner: walks stages in order, pacing and reporting progress
use std::time::Instant;

use tracing::debug;

use crate::context::ExecutionContext;
use crate::stage::{ProgressEvent, Stage, StageReport};

pub struct PipelineRunner {
    stages: Vec<Box<dyn Stage>>,
    pipeline_id: String,
}

impl PipelineRunner {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        let pipeline_id = stages
            .iter()
            .map(|s| s.id().split('.').last().unwrap_or("?"))
            .collect::<Vec<_>>()
            .join("→");

        Self { stages, pipeline_id }
    }

    /// Run every stage sequentially.
    ///
    /// `on_progress` is called once per stage; the last call always carries
    /// `percent == 100`. An empty pipeline reports completion immediately.
    pub async fn run<F>(&self, ctx: &ExecutionContext, mut on_progress: F) -> Vec<StageReport>
    where
        F: FnMut(ProgressEvent),
    {
        let total = self.stages.len();
        let mut reports = Vec::with_capacity(total);

        if total == 0 {
            on_progress(ProgressEvent {
                stage_id: String::new(),
                label: String::new(),
                index: 0,
                total: 0,
                percent: 100,
            });
            return reports;
        }

        for (i, stage) in self.stages.iter().enumerate() {
            let start = Instant::now();
            let delay = ctx.pacing.apply(stage.pacing());
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let index = i + 1;
            let percent = (index * 100 / total) as u8;
            debug!(
                trace_id = %ctx.trace_id,
                stage = stage.id(),
                percent,
                "stage complete"
            );

            on_progress(ProgressEvent {
                stage_id: stage.id().to_string(),
                label: stage.label().to_string(),
                index,
                total,
                percent,
            });

            reports.push(StageReport {
                id: stage.id().to_string(),
                latency_ms: start.elapsed().as_millis() as u64,
            });
        }

        reports
    }

    pub fn pipeline_id(&self) -> &str {
        &self.pipeline_id
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
