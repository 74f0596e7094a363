//! Cost categories and per-category estimates

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six fixed cost buckets, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Flights,
    Accommodation,
    Food,
    Activities,
    Transportation,
    Miscellaneous,
}

impl CostCategory {
    pub const ALL: [CostCategory; 6] = [
        CostCategory::Flights,
        CostCategory::Accommodation,
        CostCategory::Food,
        CostCategory::Activities,
        CostCategory::Transportation,
        CostCategory::Miscellaneous,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::Flights => "Flights",
            CostCategory::Accommodation => "Accommodation",
            CostCategory::Food => "Food & Dining",
            CostCategory::Activities => "Activities",
            CostCategory::Transportation => "Local Transportation",
            CostCategory::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Where an amount came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateSource {
    Formula,
    FlightPrices,
    Itinerary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEstimate {
    pub category: CostCategory,
    /// Whole currency units
    pub amount: u64,
    /// Human-readable formula trace
    pub calculation: String,
    pub details: Vec<String>,
    pub source: EstimateSource,
}

/// Round to the nearest whole unit; negative or non-finite input becomes 0
pub(crate) fn round_amount(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

/// `$1,234` style formatting for whole amounts
pub(crate) fn money(amount: f64) -> String {
    let rounded = amount.abs().round() as u64;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${}", out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_amount() {
        assert_eq!(round_amount(360.62), 361);
        assert_eq!(round_amount(106.07), 106);
        assert_eq!(round_amount(0.5), 1);
        assert_eq!(round_amount(-3.0), 0);
        assert_eq!(round_amount(f64::NAN), 0);
    }

    #[test]
    fn test_money() {
        assert_eq!(money(0.0), "$0");
        assert_eq!(money(720.0), "$720");
        assert_eq!(money(1787.0), "$1,787");
        assert_eq!(money(-1234567.4), "$1,234,567");
    }

    #[test]
    fn test_category_order() {
        assert_eq!(CostCategory::ALL[0], CostCategory::Flights);
        assert_eq!(CostCategory::ALL[5], CostCategory::Miscellaneous);
        assert_eq!(
            serde_json::to_string(&CostCategory::Transportation).unwrap(),
            "\"transportation\""
        );
    }
}
