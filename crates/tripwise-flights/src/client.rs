//! Flight search providers
//!
//! Real provider integrations implement [`FlightSearchClient`]; the
//! [`MockFlightClient`] produces placeholder offers derived from a hash of
//! the route so the same query always yields the same fares.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::types::{Direction, FlightOffer, FlightQuery, FlightSearchError};

#[async_trait]
pub trait FlightSearchClient: Send + Sync {
    /// Provider name, reported alongside results
    fn name(&self) -> &str;

    async fn search(&self, query: &FlightQuery) -> Result<Vec<FlightOffer>, FlightSearchError>;
}

const CARRIERS: &[&str] = &[
    "SkyBridge Air",
    "Meridian Airways",
    "Northwind",
    "Coral Jet",
    "Atlas Connect",
    "BlueHorizon",
];

pub const MIN_MOCK_FARE: u32 = 150;
pub const MAX_MOCK_FARE: u32 = 1200;

/// Deterministic placeholder offers
#[derive(Debug, Clone)]
pub struct MockFlightClient {
    offers_per_leg: usize,
}

impl MockFlightClient {
    pub fn new() -> Self {
        Self { offers_per_leg: 4 }
    }

    /// Between 1 and 5 offers per leg
    pub fn with_offers_per_leg(mut self, count: usize) -> Self {
        self.offers_per_leg = count.clamp(1, 5);
        self
    }

    fn leg(&self, from: &str, to: &str, date: NaiveDate, direction: Direction) -> Vec<FlightOffer> {
        let key = format!(
            "{}|{}|{}|{:?}",
            from.trim().to_lowercase(),
            to.trim().to_lowercase(),
            date,
            direction
        );
        let hash = blake3::hash(key.as_bytes());
        let bytes = hash.as_bytes();
        let span = MAX_MOCK_FARE - MIN_MOCK_FARE + 1;

        (0..self.offers_per_leg)
            .map(|i| {
                let b = &bytes[i * 6..i * 6 + 6];
                let fare_seed = u16::from_le_bytes([b[1], b[2]]) as u32;
                let duration_seed = u16::from_le_bytes([b[4], b[5]]) as u32;
                FlightOffer {
                    id: format!("mock-{}-{}", &hash.to_hex()[..8], i),
                    carrier: CARRIERS[b[0] as usize % CARRIERS.len()].to_string(),
                    direction,
                    price: (MIN_MOCK_FARE + fare_seed % span) as f64,
                    date,
                    departs_at: format!("{:02}:{:02}", b[3] % 24, (b[3] % 4) * 15),
                    duration_minutes: 90 + duration_seed % 900,
                    stops: b[0] % 3,
                }
            })
            .collect()
    }
}

impl Default for MockFlightClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FlightSearchClient for MockFlightClient {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search(&self, query: &FlightQuery) -> Result<Vec<FlightOffer>, FlightSearchError> {
        query.validate()?;

        let mut offers = self.leg(&query.source, &query.destination, query.depart, Direction::Outbound);
        if let Some(ret) = query.return_date {
            offers.extend(self.leg(&query.destination, &query.source, ret, Direction::Return));
        }
        Ok(offers)
    }
}
