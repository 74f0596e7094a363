//! Tripwise Flights: flight search contract with mock-data fallback
//!
//! The estimator only needs a [`FlightPriceSelection`]; this crate gets one
//! from whichever provider answers, or from deterministic placeholder
//! offers when none does.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use tripwise_flights::{FallbackFlightSearch, FlightQuery, MockFlightClient};
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let search = FallbackFlightSearch::new(MockFlightClient::new());
//! let query = FlightQuery {
//!     source: "Paris".to_string(),
//!     destination: "Lisbon".to_string(),
//!     depart: NaiveDate::from_ymd_opt(2025, 9, 2).unwrap(),
//!     return_date: NaiveDate::from_ymd_opt(2025, 9, 9),
//!     travelers: 2,
//! };
//! let result = rt.block_on(search.search(&query)).unwrap();
//! assert!(!result.fallback);
//! assert!(result.selection.is_some());
//! ```
//!
//! [`FlightPriceSelection`]: tripwise_core::FlightPriceSelection

pub mod client;
pub mod fallback;
pub mod select;
pub mod types;

pub use client::{FlightSearchClient, MockFlightClient};
pub use fallback::{FallbackFlightSearch, FlightSearchResult, RetryPolicy};
pub use select::select_cheapest;
pub use types::{Direction, FlightOffer, FlightQuery, FlightSearchError};
