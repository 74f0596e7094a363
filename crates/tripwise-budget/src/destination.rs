//! Destination cost tiers
//!
//! A destination's multiplier comes from a case-insensitive substring match
//! of the destination text against ordered country lists. The first tier
//! with a matching entry wins; anything unmatched is `Standard` (1.0).
//!
//! Substring matching is loose: "New Turkey City" matches "Turkey". Callers
//! rely on this exact behavior, so it is kept as is.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::policy::BudgetPolicy;

pub const VERY_HIGH_COST: &[&str] = &[
    "Switzerland", "Norway", "Iceland", "Denmark", "Monaco", "Luxembourg",
    "Liechtenstein", "Bermuda", "Maldives",
];

pub const HIGH_COST: &[&str] = &[
    "United States", "United Kingdom", "England", "Scotland", "Ireland", "France",
    "Germany", "Netherlands", "Belgium", "Austria", "Sweden", "Finland", "Japan",
    "Singapore", "Australia", "New Zealand", "Canada", "Israel", "Hong Kong",
    "United Arab Emirates", "Dubai", "Qatar",
];

pub const MEDIUM_COST: &[&str] = &[
    "Spain", "Italy", "Portugal", "Greece", "Croatia", "Czech Republic", "Poland",
    "Hungary", "Turkey", "Mexico", "Brazil", "Argentina", "Chile", "South Korea",
    "China", "Taiwan", "Malaysia", "South Africa", "Costa Rica", "Estonia",
];

pub const LOW_COST: &[&str] = &[
    "Thailand", "Vietnam", "India", "Indonesia", "Cambodia", "Laos", "Nepal",
    "Philippines", "Sri Lanka", "Egypt", "Morocco", "Peru", "Colombia", "Bolivia",
    "Ecuador", "Guatemala", "Bulgaria", "Romania", "Kenya", "Tanzania",
];

/// Relative cost-of-living tier of a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostTier {
    VeryHigh,
    High,
    Medium,
    Low,
    /// No list matched
    Standard,
}

impl CostTier {
    /// Canonical multiplier for the tier
    pub fn default_multiplier(&self) -> f64 {
        match self {
            CostTier::VeryHigh => 1.5,
            CostTier::High => 1.3,
            CostTier::Medium => 0.9,
            CostTier::Low => 0.6,
            CostTier::Standard => 1.0,
        }
    }

    pub fn default_countries(&self) -> &'static [&'static str] {
        match self {
            CostTier::VeryHigh => VERY_HIGH_COST,
            CostTier::High => HIGH_COST,
            CostTier::Medium => MEDIUM_COST,
            CostTier::Low => LOW_COST,
            CostTier::Standard => &[],
        }
    }
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CostTier::VeryHigh => write!(f, "very high"),
            CostTier::High => write!(f, "high"),
            CostTier::Medium => write!(f, "medium"),
            CostTier::Low => write!(f, "low"),
            CostTier::Standard => write!(f, "standard"),
        }
    }
}

/// One ordered entry of the tier table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierRule {
    pub tier: CostTier,
    pub multiplier: f64,
    pub countries: Vec<String>,
}

impl TierRule {
    pub fn canonical(tier: CostTier) -> Self {
        Self {
            tier,
            multiplier: tier.default_multiplier(),
            countries: tier
                .default_countries()
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

/// Result of looking a destination up in the tier table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationMatch {
    pub tier: CostTier,
    pub multiplier: f64,
    /// Country entry that matched, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
}

/// Match a destination against the policy's tier table
pub fn match_destination(destination: &str, policy: &BudgetPolicy) -> DestinationMatch {
    let needle = destination.to_lowercase();

    for rule in &policy.tiers {
        if let Some(country) = rule
            .countries
            .iter()
            .find(|c| needle.contains(&c.to_lowercase()))
        {
            return DestinationMatch {
                tier: rule.tier,
                multiplier: rule.multiplier,
                matched: Some(country.clone()),
            };
        }
    }

    DestinationMatch {
        tier: CostTier::Standard,
        multiplier: policy.default_multiplier,
        matched: None,
    }
}
