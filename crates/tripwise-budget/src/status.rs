//! Budget status: estimate versus stated budget with a tolerance band

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    /// Estimate is more than the tolerance below the budget
    #[serde(rename = "under")]
    Under,
    /// Estimate is more than the tolerance above the budget
    #[serde(rename = "over")]
    Over,
    #[serde(rename = "on-track")]
    OnTrack,
}

impl BudgetStatus {
    /// Classify a total against a budget.
    ///
    /// `over` iff `total - budget > tolerance * budget`, `under` iff
    /// `total - budget < -tolerance * budget`, otherwise `on-track`. With a
    /// zero budget the band collapses, so any positive total is `over`.
    pub fn classify(total: f64, budget: f64, tolerance: f64) -> Self {
        let variance = total - budget;
        let band = tolerance * budget;
        if variance < -band {
            BudgetStatus::Under
        } else if variance > band {
            BudgetStatus::Over
        } else {
            BudgetStatus::OnTrack
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, BudgetStatus::Over)
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BudgetStatus::Under => write!(f, "under"),
            BudgetStatus::Over => write!(f, "over"),
            BudgetStatus::OnTrack => write!(f, "on-track"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_band_edges() {
        assert_eq!(BudgetStatus::classify(1050.0, 1000.0, 0.05), BudgetStatus::OnTrack);
        assert_eq!(BudgetStatus::classify(950.0, 1000.0, 0.05), BudgetStatus::OnTrack);
        assert_eq!(BudgetStatus::classify(1051.0, 1000.0, 0.05), BudgetStatus::Over);
        assert_eq!(BudgetStatus::classify(949.0, 1000.0, 0.05), BudgetStatus::Under);
        assert_eq!(BudgetStatus::classify(1050.01, 1000.0, 0.05), BudgetStatus::Over);
        assert_eq!(BudgetStatus::classify(949.99, 1000.0, 0.05), BudgetStatus::Under);
    }

    #[test]
    fn test_zero_budget() {
        assert_eq!(BudgetStatus::classify(10.0, 0.0, 0.05), BudgetStatus::Over);
        assert_eq!(BudgetStatus::classify(0.0, 0.0, 0.05), BudgetStatus::OnTrack);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&BudgetStatus::OnTrack).unwrap(), "\"on-track\"");
        assert_eq!(serde_json::to_string(&BudgetStatus::Under).unwrap(), "\"under\"");
        let parsed: BudgetStatus = serde_json::from_str("\"over\"").unwrap();
        assert!(parsed.is_over());
        assert_eq!(BudgetStatus::OnTrack.to_string(), "on-track");
    }
}
