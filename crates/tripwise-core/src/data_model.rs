//! Data Model: TripParameters, RawTripInput, ItineraryData, FlightPriceSelection
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TripError;
use crate::input;

/// Ceiling for any single override cost (itinerary item or per-person fare)
pub const MAX_ITEM_COST: f64 = 1_000_000.0;

/// Clamp an override cost into `0..=MAX_ITEM_COST`; NaN becomes 0
fn clamp_cost(cost: f64) -> f64 {
    if cost.is_nan() {
        0.0
    } else {
        cost.clamp(0.0, MAX_ITEM_COST)
    }
}

/// Validated trip parameters, immutable once submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripParameters {
    /// Departure location (free text)
    pub source: String,
    /// Destination (free text, used as a lookup key)
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Stated total spending target
    pub budget: f64,
    /// Number of people travelling (always >= 1)
    pub travelers: u32,
    /// Lowercase interest tags, order preserved
    #[serde(default)]
    pub interests: Vec<String>,
}

impl TripParameters {
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            start_date,
            end_date,
            budget: input::DEFAULT_BUDGET,
            travelers: 1,
            interests: Vec::new(),
        }
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget.max(0.0);
        self
    }

    pub fn with_travelers(mut self, travelers: u32) -> Self {
        self.travelers = travelers.max(1);
        self
    }

    pub fn with_interest(mut self, interest: impl Into<String>) -> Self {
        let interest = interest.into().trim().to_lowercase();
        if !interest.is_empty() && !self.interests.contains(&interest) {
            self.interests.push(interest);
        }
        self
    }

    /// Whole days between start and end, never less than one
    pub fn total_days(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days();
        days.max(1) as u32
    }

    /// Build validated parameters from the collector's text answers.
    ///
    /// Required fields must be non-empty and dates must parse. Budget and
    /// traveler count never fail: malformed text falls back to defaults.
    pub fn from_raw(raw: &RawTripInput) -> Result<Self, TripError> {
        let source = required("source", &raw.source)?;
        let destination = required("destination", &raw.destination)?;
        let start_date = input::parse_date(required("start_date", &raw.start_date)?)?;
        let end_date = input::parse_date(required("end_date", &raw.end_date)?)?;

        if end_date < start_date {
            return Err(TripError::Validation(format!(
                "end_date {} is before start_date {}",
                end_date, start_date
            )));
        }

        Ok(Self {
            source: source.to_string(),
            destination: destination.to_string(),
            start_date,
            end_date,
            budget: input::parse_budget(raw.budget.as_deref().unwrap_or("")),
            travelers: input::parse_travelers(raw.travelers.as_deref().unwrap_or("")),
            interests: raw.interests.to_tags(),
        })
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, TripError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(TripError::MissingField(field.to_string()))
    } else {
        Ok(trimmed)
    }
}

/// Text answers as produced by the trip input collector
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTripInput {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub travelers: Option<String>,
    #[serde(default)]
    pub interests: InterestsInput,
}

/// Interests arrive either as one comma-separated answer or as a tag list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InterestsInput {
    Text(String),
    List(Vec<String>),
}

impl Default for InterestsInput {
    fn default() -> Self {
        InterestsInput::List(Vec::new())
    }
}

impl InterestsInput {
    pub fn to_tags(&self) -> Vec<String> {
        match self {
            InterestsInput::Text(text) => input::parse_interests(text),
            InterestsInput::List(items) => input::parse_interests(&items.join(",")),
        }
    }
}

/// Day-by-day plan supplied by the itinerary generator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItineraryData {
    pub days: Vec<ItineraryDay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 1-based day number
    pub day: u32,
    /// Per-person cost
    #[serde(default)]
    pub activities: Vec<ItineraryItem>,
    /// Per-person cost
    #[serde(default)]
    pub meals: Vec<ItineraryItem>,
    /// Per-group cost (shared vehicles)
    #[serde(default)]
    pub transport: Vec<ItineraryItem>,
    /// Per-person cost
    #[serde(default)]
    pub shopping: Vec<ItineraryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub name: String,
    pub cost: f64,
}

impl ItineraryItem {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

impl ItineraryData {
    pub fn activity_costs(&self) -> Vec<f64> {
        self.collect(|d| &d.activities)
    }

    pub fn meal_costs(&self) -> Vec<f64> {
        self.collect(|d| &d.meals)
    }

    pub fn transport_costs(&self) -> Vec<f64> {
        self.collect(|d| &d.transport)
    }

    pub fn shopping_costs(&self) -> Vec<f64> {
        self.collect(|d| &d.shopping)
    }

    fn collect<F>(&self, pick: F) -> Vec<f64>
    where
        F: Fn(&ItineraryDay) -> &Vec<ItineraryItem>,
    {
        self.days
            .iter()
            .flat_map(|day| pick(day).iter().map(|item| clamp_cost(item.cost)))
            .collect()
    }
}

/// Fares chosen by the traveler in the flight search step (per person)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPriceSelection {
    pub outbound: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_fare: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
}

impl FlightPriceSelection {
    pub fn one_way(outbound: f64) -> Self {
        Self {
            outbound,
            return_fare: None,
            carrier: None,
        }
    }

    pub fn round_trip(outbound: f64, return_fare: f64) -> Self {
        Self {
            outbound,
            return_fare: Some(return_fare),
            carrier: None,
        }
    }

    /// Combined per-person fare, each leg clamped to `0..=MAX_ITEM_COST`
    pub fn per_person(&self) -> f64 {
        clamp_cost(self.outbound) + clamp_cost(self.return_fare.unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn raw() -> RawTripInput {
        RawTripInput {
            source: "London".to_string(),
            destination: "Thailand".to_string(),
            start_date: "2025-03-01".to_string(),
            end_date: "2025-03-06".to_string(),
            budget: Some("$1,000".to_string()),
            travelers: Some("2 people".to_string()),
            interests: InterestsInput::Text("Food, culture, food".to_string()),
        }
    }

    #[test]
    fn test_total_days() {
        let trip = TripParameters::new("A", "B", date(2025, 3, 1), date(2025, 3, 6));
        assert_eq!(trip.total_days(), 5);

        let same_day = TripParameters::new("A", "B", date(2025, 3, 1), date(2025, 3, 1));
        assert_eq!(same_day.total_days(), 1);
    }

    #[test]
    fn test_from_raw() {
        let trip = TripParameters::from_raw(&raw()).unwrap();
        assert_eq!(trip.destination, "Thailand");
        assert_eq!(trip.budget, 1000.0);
        assert_eq!(trip.travelers, 2);
        assert_eq!(trip.interests, vec!["food".to_string(), "culture".to_string()]);
        assert_eq!(trip.total_days(), 5);
    }

    #[test]
    fn test_from_raw_missing_destination() {
        let mut input = raw();
        input.destination = "   ".to_string();
        let err = TripParameters::from_raw(&input).unwrap_err();
        assert_eq!(err, TripError::MissingField("destination".to_string()));
    }

    #[test]
    fn test_from_raw_reversed_dates() {
        let mut input = raw();
        input.end_date = "2025-02-20".to_string();
        let err = TripParameters::from_raw(&input).unwrap_err();
        assert!(matches!(err, TripError::Validation(_)));
    }

    #[test]
    fn test_from_raw_defaults() {
        let mut input = raw();
        input.budget = Some("lots".to_string());
        input.travelers = None;
        let trip = TripParameters::from_raw(&input).unwrap();
        assert_eq!(trip.budget, input::DEFAULT_BUDGET);
        assert_eq!(trip.travelers, 1);
    }

    #[test]
    fn test_builder_clamps() {
        let trip = TripParameters::new("A", "B", date(2025, 1, 1), date(2025, 1, 3))
            .with_budget(-50.0)
            .with_travelers(0)
            .with_interest(" Hiking ")
            .with_interest("hiking");
        assert_eq!(trip.budget, 0.0);
        assert_eq!(trip.travelers, 1);
        assert_eq!(trip.interests, vec!["hiking".to_string()]);
    }

    #[test]
    fn test_itinerary_costs() {
        let itinerary = ItineraryData {
            days: vec![
                ItineraryDay {
                    day: 1,
                    meals: vec![ItineraryItem::new("Street food", 12.0)],
                    activities: vec![ItineraryItem::new("Temple tour", 30.0)],
                    ..Default::default()
                },
                ItineraryDay {
                    day: 2,
                    meals: vec![
                        ItineraryItem::new("Breakfast", 8.0),
                        ItineraryItem::new("Refund", -5.0),
                    ],
                    ..Default::default()
                },
            ],
        };
        assert_eq!(itinerary.meal_costs(), vec![12.0, 8.0, 0.0]);
        assert_eq!(itinerary.activity_costs(), vec![30.0]);
        assert!(itinerary.transport_costs().is_empty());
    }

    #[test]
    fn test_interests_deserialize_either_shape() {
        let from_text: RawTripInput =
            serde_json::from_str(r#"{"interests": "beaches; nightlife"}"#).unwrap();
        assert_eq!(from_text.interests.to_tags(), vec!["beaches", "nightlife"]);

        let from_list: RawTripInput =
            serde_json::from_str(r#"{"interests": ["Museums", "food"]}"#).unwrap();
        assert_eq!(from_list.interests.to_tags(), vec!["museums", "food"]);
    }

    #[test]
    fn test_flight_selection_per_person() {
        assert_eq!(FlightPriceSelection::round_trip(300.0, 250.0).per_person(), 550.0);
        assert_eq!(FlightPriceSelection::one_way(-10.0).per_person(), 0.0);
    }

    #[test]
    fn test_override_costs_are_capped() {
        let fare = FlightPriceSelection::round_trip(1e20, f64::INFINITY);
        assert_eq!(fare.per_person(), 2.0 * MAX_ITEM_COST);
        assert_eq!(FlightPriceSelection::one_way(f64::NAN).per_person(), 0.0);

        let itinerary = ItineraryData {
            days: vec![ItineraryDay {
                day: 1,
                meals: vec![ItineraryItem::new("Gold leaf dinner", 1e300)],
                ..Default::default()
            }],
        };
        assert_eq!(itinerary.meal_costs(), vec![MAX_ITEM_COST]);
    }
}
