//! Recommendations and cost-saving tips

use serde::{Deserialize, Serialize};

use crate::category::{money, round_amount, CategoryEstimate, CostCategory};
use crate::policy::DiscountRates;
use crate::status::BudgetStatus;

pub const BOOK_IN_ADVANCE: &str = "Book flights and accommodation in advance for better rates";
pub const CONSIDER_INSURANCE: &str = "Consider purchasing travel insurance to protect your trip";

/// Status-specific advice followed by the two universal tips
pub fn recommendations(
    status: BudgetStatus,
    variance: f64,
    variance_percentage: Option<f64>,
) -> Vec<String> {
    let mut recs = Vec::new();

    match status {
        BudgetStatus::Over => {
            recs.push(match variance_percentage {
                Some(pct) => format!(
                    "Your estimated costs exceed your budget by {} ({:.1}%)",
                    money(variance),
                    pct
                ),
                None => format!("Your estimated costs exceed your budget by {}", money(variance)),
            });
            recs.push(
                "Consider shortening the trip or choosing budget-friendly accommodation".to_string(),
            );
            recs.push("Travel in the off-peak season to lower flight and hotel prices".to_string());
        }
        BudgetStatus::Under => {
            recs.push(format!(
                "Your budget leaves {} of headroom over the estimated costs",
                money(-variance)
            ));
            recs.push("Consider upgrading accommodation or adding a special experience".to_string());
        }
        BudgetStatus::OnTrack => {
            recs.push("Your budget is well aligned with the estimated costs".to_string());
            recs.push("Keep a 10% buffer for unexpected expenses".to_string());
        }
    }

    recs.push(BOOK_IN_ADVANCE.to_string());
    recs.push(CONSIDER_INSURANCE.to_string());
    recs
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSavingTip {
    pub category: CostCategory,
    pub tip: String,
    /// Fraction of the category amount
    pub rate: f64,
    /// `round(amount × rate)`
    pub potential_savings: u64,
}

fn discount_for(category: CostCategory, rates: &DiscountRates) -> Option<(f64, &'static str)> {
    match category {
        CostCategory::Flights => Some((
            rates.flights,
            "Book 6-8 weeks ahead and compare nearby airports",
        )),
        CostCategory::Accommodation => Some((
            rates.accommodation,
            "Stay in guesthouses or apartments instead of hotels",
        )),
        CostCategory::Food => Some((rates.food, "Eat at local markets and street food stalls")),
        CostCategory::Transportation => Some((
            rates.transportation,
            "Use public transit and multi-day passes",
        )),
        CostCategory::Activities | CostCategory::Miscellaneous => None,
    }
}

/// One tip per discountable category, in category order
pub fn cost_saving_tips(categories: &[CategoryEstimate], rates: &DiscountRates) -> Vec<CostSavingTip> {
    categories
        .iter()
        .filter_map(|estimate| {
            let (rate, tip) = discount_for(estimate.category, rates)?;
            Some(CostSavingTip {
                category: estimate.category,
                tip: tip.to_string(),
                rate,
                potential_savings: round_amount(estimate.amount as f64 * rate),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::EstimateSource;

    fn estimate(category: CostCategory, amount: u64) -> CategoryEstimate {
        CategoryEstimate {
            category,
            amount,
            calculation: String::new(),
            details: vec![],
            source: EstimateSource::Formula,
        }
    }

    #[test]
    fn test_over_budget_recommendations() {
        let recs = recommendations(BudgetStatus::Over, 787.0, Some(78.7));
        assert_eq!(recs.len(), 5);
        assert_eq!(recs[0], "Your estimated costs exceed your budget by $787 (78.7%)");
        assert_eq!(recs[3], BOOK_IN_ADVANCE);
        assert_eq!(recs[4], CONSIDER_INSURANCE);
    }

    #[test]
    fn test_over_budget_without_percentage() {
        let recs = recommendations(BudgetStatus::Over, 120.0, None);
        assert_eq!(recs[0], "Your estimated costs exceed your budget by $120");
    }

    #[test]
    fn test_under_and_on_track() {
        let recs = recommendations(BudgetStatus::Under, -1500.0, Some(-30.0));
        assert!(recs[0].contains("$1,500"));
        assert_eq!(recs.len(), 4);

        let recs = recommendations(BudgetStatus::OnTrack, 10.0, Some(1.0));
        assert!(recs[0].contains("well aligned"));
        assert_eq!(recs.last().map(String::as_str), Some(CONSIDER_INSURANCE));
    }

    #[test]
    fn test_cost_saving_tips() {
        let categories: Vec<CategoryEstimate> = [
            (CostCategory::Flights, 720),
            (CostCategory::Accommodation, 361),
            (CostCategory::Food, 270),
            (CostCategory::Activities, 210),
            (CostCategory::Transportation, 106),
            (CostCategory::Miscellaneous, 120),
        ]
        .into_iter()
        .map(|(c, a)| estimate(c, a))
        .collect();

        let tips = cost_saving_tips(&categories, &DiscountRates::default());
        let savings: Vec<(CostCategory, u64)> =
            tips.iter().map(|t| (t.category, t.potential_savings)).collect();
        assert_eq!(
            savings,
            vec![
                (CostCategory::Flights, 108),
                (CostCategory::Accommodation, 90),
                (CostCategory::Food, 81),
                (CostCategory::Transportation, 21),
            ]
        );
    }
}
