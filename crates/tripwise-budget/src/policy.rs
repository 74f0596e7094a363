//! Budget policy: every rate, threshold and table the estimator uses
//!
//! `BudgetPolicy::default()` carries the canonical values. Deployments can
//! override any subset from YAML; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tripwise_core::TripError;

use crate::destination::{CostTier, TierRule};

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("failed to read policy file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid policy yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid policy: {0}")]
    Invalid(String),
}

impl From<PolicyError> for TripError {
    fn from(err: PolicyError) -> Self {
        TripError::Config(err.to_string())
    }
}

/// Per-unit base rates before the destination multiplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseRates {
    /// Round-trip fare per traveler
    pub flight_per_person: f64,
    /// Per night, scaled by sqrt(travelers)
    pub accommodation_per_night: f64,
    /// Per traveler per day
    pub food_per_day: f64,
    /// Per traveler per day
    pub activities_per_day: f64,
    /// Per day, scaled by sqrt(travelers)
    pub transport_per_day: f64,
    /// Per traveler per day
    pub misc_per_day: f64,
}

impl Default for BaseRates {
    fn default() -> Self {
        Self {
            flight_per_person: 600.0,
            accommodation_per_night: 85.0,
            food_per_day: 45.0,
            activities_per_day: 35.0,
            transport_per_day: 25.0,
            misc_per_day: 20.0,
        }
    }
}

/// Share of a category's amount a traveler could plausibly save
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountRates {
    pub flights: f64,
    pub accommodation: f64,
    pub food: f64,
    pub transportation: f64,
}

impl Default for DiscountRates {
    fn default() -> Self {
        Self {
            flights: 0.15,
            accommodation: 0.25,
            food: 0.30,
            transportation: 0.20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Destination multiplier above which the destination is flagged
    pub high_cost_multiplier: f64,
    /// Trip length (days) above which the duration is flagged
    pub extended_trip_days: u32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high_cost_multiplier: 1.2,
            extended_trip_days: 14,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetPolicy {
    /// Policy name (e.g. "canonical@1.0")
    pub name: String,

    pub rates: BaseRates,

    /// Trips longer than this many days get the long-trip flight factor
    pub long_trip_days: u32,

    pub long_trip_flight_factor: f64,

    /// Half-width of the on-track band as a fraction of the budget
    pub tolerance: f64,

    pub discounts: DiscountRates,

    pub risk: RiskThresholds,

    /// Ordered tier table; first match wins
    pub tiers: Vec<TierRule>,

    /// Multiplier for destinations no tier matches
    pub default_multiplier: f64,
}

impl Default for BudgetPolicy {
    fn default() -> Self {
        Self {
            name: "canonical@1.0".to_string(),
            rates: BaseRates::default(),
            long_trip_days: 7,
            long_trip_flight_factor: 1.2,
            tolerance: 0.05,
            discounts: DiscountRates::default(),
            risk: RiskThresholds::default(),
            tiers: vec![
                TierRule::canonical(CostTier::VeryHigh),
                TierRule::canonical(CostTier::High),
                TierRule::canonical(CostTier::Medium),
                TierRule::canonical(CostTier::Low),
            ],
            default_multiplier: 1.0,
        }
    }
}

impl BudgetPolicy {
    /// Load a policy from YAML and validate it
    pub fn from_yaml(yaml: &str) -> Result<Self, PolicyError> {
        let policy: BudgetPolicy = serde_yaml::from_str(yaml)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        let r = &self.rates;
        let d = &self.discounts;
        let non_negative = [
            ("rates.flight_per_person", r.flight_per_person),
            ("rates.accommodation_per_night", r.accommodation_per_night),
            ("rates.food_per_day", r.food_per_day),
            ("rates.activities_per_day", r.activities_per_day),
            ("rates.transport_per_day", r.transport_per_day),
            ("rates.misc_per_day", r.misc_per_day),
            ("long_trip_flight_factor", self.long_trip_flight_factor),
            ("discounts.flights", d.flights),
            ("discounts.accommodation", d.accommodation),
            ("discounts.food", d.food),
            ("discounts.transportation", d.transportation),
            ("default_multiplier", self.default_multiplier),
        ];

        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(PolicyError::Invalid(format!(
                    "{} must be a non-negative number, got {}",
                    field, value
                )));
            }
        }

        if !(0.0..1.0).contains(&self.tolerance) {
            return Err(PolicyError::Invalid(format!(
                "tolerance must be in [0, 1), got {}",
                self.tolerance
            )));
        }

        for rule in &self.tiers {
            if !rule.multiplier.is_finite() || rule.multiplier <= 0.0 {
                return Err(PolicyError::Invalid(format!(
                    "tier {} has non-positive multiplier {}",
                    rule.tier, rule.multiplier
                )));
            }
            if rule.countries.iter().any(|c| c.trim().is_empty()) {
                return Err(PolicyError::Invalid(format!(
                    "tier {} contains an empty country name",
                    rule.tier
                )));
            }
        }

        Ok(())
    }
}
