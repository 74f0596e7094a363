//! Trip risk factors
//!
//! Fixed rules evaluated against the destination multiplier and trip length.
//! Conditional rules come first; the currency and seasonal entries are
//! always appended last, in that order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::policy::RiskThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    #[default]
    Low = 0,
    Medium = 1,
    High = 2,
}

impl fmt::Display for RiskSeverity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RiskSeverity::Low => write!(f, "LOW"),
            RiskSeverity::Medium => write!(f, "MEDIUM"),
            RiskSeverity::High => write!(f, "HIGH"),
        }
    }
}

/// A single risk to the trip budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    /// Stable identifier (e.g. "high_cost_destination")
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: RiskSeverity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mitigation: Option<String>,
}

impl RiskFactor {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: RiskSeverity,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            severity,
            mitigation: None,
        }
    }

    pub fn with_mitigation(mut self, mitigation: impl Into<String>) -> Self {
        self.mitigation = Some(mitigation.into());
        self
    }
}

/// Inputs the risk rules look at
#[derive(Debug, Clone, Default)]
pub struct RiskInput {
    pub destination: String,
    pub multiplier: f64,
    pub total_days: u32,
}

impl RiskInput {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            multiplier: 1.0,
            total_days: 1,
        }
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.total_days = days;
        self
    }
}

/// Evaluate the risk rules in order
pub fn assess_risks(input: &RiskInput, thresholds: &RiskThresholds) -> Vec<RiskFactor> {
    let mut factors = Vec::new();

    if input.multiplier > thresholds.high_cost_multiplier {
        factors.push(
            RiskFactor::new(
                "high_cost_destination",
                "High-cost destination",
                format!(
                    "{} is a high-cost destination (prices about {:.0}% above average)",
                    input.destination,
                    (input.multiplier - 1.0) * 100.0
                ),
                RiskSeverity::High,
            )
            .with_mitigation("Set aside a contingency of at least 15% of the budget"),
        );
    }

    if input.total_days > thresholds.extended_trip_days {
        factors.push(
            RiskFactor::new(
                "extended_duration",
                "Extended trip duration",
                format!(
                    "A {}-day trip increases exposure to unplanned expenses",
                    input.total_days
                ),
                RiskSeverity::Medium,
            )
            .with_mitigation("Look for weekly or monthly accommodation rates"),
        );
    }

    factors.push(
        RiskFactor::new(
            "currency_fluctuation",
            "Currency fluctuation",
            "Exchange rates may move between booking and travel",
            RiskSeverity::Medium,
        )
        .with_mitigation("Monitor exchange rates and consider a multi-currency card"),
    );

    factors.push(
        RiskFactor::new(
            "seasonal_pricing",
            "Seasonal price changes",
            "Flight and hotel prices rise during peak season and holidays",
            RiskSeverity::Low,
        )
        .with_mitigation("Check peak-season dates before booking"),
    );

    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(factors: &[RiskFactor]) -> Vec<&str> {
        factors.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_baseline_risks_always_present() {
        let factors = assess_risks(&RiskInput::new("Generic Place"), &RiskThresholds::default());
        assert_eq!(ids(&factors), vec!["currency_fluctuation", "seasonal_pricing"]);
    }

    #[test]
    fn test_high_cost_and_long_trip() {
        let input = RiskInput::new("Switzerland").with_multiplier(1.5).with_days(21);
        let factors = assess_risks(&input, &RiskThresholds::default());
        assert_eq!(
            ids(&factors),
            vec![
                "high_cost_destination",
                "extended_duration",
                "currency_fluctuation",
                "seasonal_pricing"
            ]
        );
        assert_eq!(factors[0].severity, RiskSeverity::High);
        assert!(factors[0].description.contains("50%"));
        assert!(factors[1].description.contains("21-day"));
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Exactly at the thresholds nothing conditional fires
        let input = RiskInput::new("Somewhere").with_multiplier(1.2).with_days(14);
        let factors = assess_risks(&input, &RiskThresholds::default());
        assert_eq!(factors.len(), 2);

        // High tier (1.3) is flagged
        let input = RiskInput::new("Japan").with_multiplier(1.3).with_days(3);
        let factors = assess_risks(&input, &RiskThresholds::default());
        assert_eq!(factors[0].id, "high_cost_destination");
    }

    #[test]
    fn test_every_factor_has_mitigation() {
        let input = RiskInput::new("Norway").with_multiplier(1.5).with_days(30);
        for factor in assess_risks(&input, &RiskThresholds::default()) {
            assert!(factor.mitigation.is_some(), "{} has no mitigation", factor.id);
        }
    }
}
