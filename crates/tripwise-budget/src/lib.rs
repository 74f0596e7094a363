//! Tripwise Budget: cost estimation for a planned trip
//!
//! Turns validated trip parameters into a six-category cost breakdown, a
//! budget status, recommendations, cost-saving tips and risk factors.
//!
//! # Architecture
//!
//! ```text
//! TripParameters → Destination Tier → Category Formulas → Total → Status
//!                        ↓                  ↑  ↑                     ↓
//!                   multiplier     itinerary  flight prices   recommendations
//!                        ↓                                           ↓
//!                   risk factors ──────────────→ BudgetAnalysis ←── savings tips
//! ```
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use tripwise_budget::{estimate, BudgetStatus, CostCategory};
//! use tripwise_core::TripParameters;
//!
//! let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2025, 3, 6).unwrap();
//! let trip = TripParameters::new("London", "Thailand", start, end)
//!     .with_travelers(2)
//!     .with_budget(1000.0);
//!
//! let analysis = estimate(&trip, None, None);
//! assert_eq!(analysis.amount(CostCategory::Flights), 720);
//! assert_eq!(analysis.budget_status, BudgetStatus::Over);
//! println!("{}", analysis.summary());
//! ```
//!
//! # Custom policy
//!
//! ```
//! use tripwise_budget::{BudgetEstimator, BudgetPolicy};
//!
//! let policy = BudgetPolicy::from_yaml("tolerance: 0.1").unwrap();
//! let estimator = BudgetEstimator::new(policy);
//! assert_eq!(estimator.policy().tolerance, 0.1);
//! ```

pub mod advice;
pub mod category;
pub mod destination;
pub mod estimator;
pub mod policy;
pub mod risk;
pub mod status;

use once_cell::sync::Lazy;
use tripwise_core::{FlightPriceSelection, ItineraryData, TripParameters};

pub use advice::{cost_saving_tips, recommendations, CostSavingTip};
pub use category::{CategoryEstimate, CostCategory, EstimateSource};
pub use destination::{match_destination, CostTier, DestinationMatch, TierRule};
pub use estimator::{BudgetAnalysis, BudgetEstimator};
pub use policy::{BaseRates, BudgetPolicy, DiscountRates, PolicyError, RiskThresholds};
pub use risk::{assess_risks, RiskFactor, RiskInput, RiskSeverity};
pub use status::BudgetStatus;

static CANONICAL: Lazy<BudgetEstimator> = Lazy::new(BudgetEstimator::default);

/// Estimate with the canonical policy
pub fn estimate(
    trip: &TripParameters,
    itinerary: Option<&ItineraryData>,
    flights: Option<&FlightPriceSelection>,
) -> BudgetAnalysis {
    CANONICAL.estimate(trip, itinerary, flights)
}

/// Destination multiplier under the canonical policy
pub fn destination_multiplier(destination: &str) -> f64 {
    match_destination(destination, CANONICAL.policy()).multiplier
}
