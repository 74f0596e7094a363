use std::time::Duration;

use serde::{Deserialize, Serialize};
use tripwise_core::Stage;

/// A progress step with a fixed id, label and delay
#[derive(Debug, Clone)]
pub struct LabeledStage {
    id: &'static str,
    label: &'static str,
    pacing: Duration,
}

impl LabeledStage {
    pub const fn new(id: &'static str, label: &'static str, pacing_ms: u64) -> Self {
        Self {
            id,
            label,
            pacing: Duration::from_millis(pacing_ms),
        }
    }
}

impl Stage for LabeledStage {
    fn id(&self) -> &'static str {
        self.id
    }

    fn label(&self) -> &str {
        self.label
    }

    fn pacing(&self) -> Duration {
        self.pacing
    }
}

const TRIP_INPUT: &[LabeledStage] = &[
    LabeledStage::new("input.validate", "Checking your trip details", 400),
    LabeledStage::new("input.destination", "Looking up your destination", 600),
];

const ITINERARY: &[LabeledStage] = &[
    LabeledStage::new("itinerary.research", "Researching your destination", 800),
    LabeledStage::new("itinerary.activities", "Picking activities for your interests", 900),
    LabeledStage::new("itinerary.schedule", "Building a day-by-day schedule", 900),
];

const FLIGHT_SEARCH: &[LabeledStage] = &[
    LabeledStage::new("flights.search", "Searching airlines", 1000),
    LabeledStage::new("flights.compare", "Comparing fares", 700),
    LabeledStage::new("flights.select", "Selecting the best options", 500),
];

const BUDGET_ANALYSIS: &[LabeledStage] = &[
    LabeledStage::new("budget.destination", "Analyzing destination costs", 800),
    LabeledStage::new("budget.flights", "Calculating flight costs", 600),
    LabeledStage::new("budget.accommodation", "Estimating accommodation", 600),
    LabeledStage::new("budget.daily", "Computing daily expenses", 600),
    LabeledStage::new("budget.risks", "Assessing budget risks", 500),
    LabeledStage::new("budget.recommendations", "Preparing recommendations", 500),
];

/// The wizard screens that show a progress sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    TripInput,
    Itinerary,
    FlightSearch,
    BudgetAnalysis,
}

impl Screen {
    pub fn stages(&self) -> Vec<Box<dyn Stage>> {
        let defs = match self {
            Screen::TripInput => TRIP_INPUT,
            Screen::Itinerary => ITINERARY,
            Screen::FlightSearch => FLIGHT_SEARCH,
            Screen::BudgetAnalysis => BUDGET_ANALYSIS,
        };
        defs.iter()
            .cloned()
            .map(|s| Box::new(s) as Box<dyn Stage>)
            .collect()
    }
}
