//! Flight search request and response shapes
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tripwise_core::TripParameters;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlightSearchError {
    #[error("FLIGHT/QUERY: {0}")]
    InvalidQuery(String),

    #[error("FLIGHT/TIMEOUT: no answer within {0}ms")]
    Timeout(u64),

    #[error("FLIGHT/PROVIDER: {0}")]
    Provider(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightQuery {
    pub source: String,
    pub destination: String,
    pub depart: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<NaiveDate>,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
}

fn default_travelers() -> u32 {
    1
}

impl FlightQuery {
    /// Round-trip query covering the whole trip
    pub fn from_trip(trip: &TripParameters) -> Self {
        Self {
            source: trip.source.clone(),
            destination: trip.destination.clone(),
            depart: trip.start_date,
            return_date: Some(trip.end_date),
            travelers: trip.travelers.max(1),
        }
    }

    pub fn validate(&self) -> Result<(), FlightSearchError> {
        if self.source.trim().is_empty() || self.destination.trim().is_empty() {
            return Err(FlightSearchError::InvalidQuery(
                "source and destination are required".to_string(),
            ));
        }
        if let Some(ret) = self.return_date {
            if ret < self.depart {
                return Err(FlightSearchError::InvalidQuery(format!(
                    "return {} is before departure {}",
                    ret, self.depart
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Outbound,
    Return,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOffer {
    pub id: String,
    pub carrier: String,
    pub direction: Direction,
    /// Fare per traveler
    pub price: f64,
    pub date: NaiveDate,
    /// Local departure time, "HH:MM"
    pub departs_at: String,
    pub duration_minutes: u32,
    pub stops: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_from_trip_is_round_trip() {
        let trip = TripParameters::new("London", "Bangkok", date(1), date(6)).with_travelers(3);
        let query = FlightQuery::from_trip(&trip);
        assert_eq!(query.depart, date(1));
        assert_eq!(query.return_date, Some(date(6)));
        assert_eq!(query.travelers, 3);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_and_reversed() {
        let trip = TripParameters::new("London", " ", date(1), date(6));
        assert!(matches!(
            FlightQuery::from_trip(&trip).validate(),
            Err(FlightSearchError::InvalidQuery(_))
        ));

        let mut query = FlightQuery::from_trip(&TripParameters::new("A", "B", date(5), date(6)));
        query.return_date = Some(date(2));
        assert!(query.validate().is_err());
    }
}
