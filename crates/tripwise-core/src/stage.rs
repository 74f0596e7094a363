//! Stage Trait: contract for every progress stage shown to the traveler
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A single step of a wizard screen's progress sequence
pub trait Stage: Send + Sync {
    /// Unique stage id (ex: "budget.accommodation")
    fn id(&self) -> &'static str;

    /// Text shown while the stage is active
    fn label(&self) -> &str;

    /// Delay before the stage reports completion (default: none)
    fn pacing(&self) -> Duration {
        Duration::ZERO
    }
}

/// Progress notification emitted after each stage completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub stage_id: String,
    pub label: String,
    /// 1-based index of the completed stage (0 for an empty pipeline)
    pub index: usize,
    pub total: usize,
    /// 0..=100
    pub percent: u8,
}

impl ProgressEvent {
    pub fn is_complete(&self) -> bool {
        self.percent == 100
    }
}

/// Timing record for a finished stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageReport {
    pub id: String,
    pub latency_ms: u64,
}
