//! Tripwise Core: trip data model, input parsing and the paced stage runner
//!
//! Everything downstream (the budget estimator, flight search, the HTTP
//! service) consumes the types defined here.

pub mod context;
pub mod data_model;
pub mod error;
pub mod input;
pub mod runner;
pub mod stage;

pub use context::{ExecutionContext, Pacing};
pub use data_model::{
    FlightPriceSelection, InterestsInput, ItineraryData, ItineraryDay, ItineraryItem,
    RawTripInput, TripParameters, MAX_ITEM_COST,
};
pub use error::TripError;
pub use runner::PipelineRunner;
pub use stage::{ProgressEvent, Stage, StageReport};

/// Tripwise engine version
pub const TRIPWISE_VERSION: &str = env!("CARGO_PKG_VERSION");
