//! Budget estimator
//!
//! Pure function from trip parameters (plus optional itinerary and flight
//! price overrides) to a [`BudgetAnalysis`]. Every category is rounded on
//! its own and the total is the sum of those rounded amounts.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use tripwise_core::{FlightPriceSelection, ItineraryData, TripParameters};

use crate::advice::{cost_saving_tips, recommendations, CostSavingTip};
use crate::category::{money, round_amount, CategoryEstimate, CostCategory, EstimateSource};
use crate::destination::{match_destination, CostTier};
use crate::policy::BudgetPolicy;
use crate::risk::{assess_risks, RiskFactor, RiskInput};
use crate::status::BudgetStatus;

/// Full estimation result, built once per call and never mutated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAnalysis {
    pub destination: String,
    pub destination_multiplier: f64,
    pub cost_tier: CostTier,
    pub total_days: u32,
    pub travelers: u32,
    pub original_budget: f64,

    /// Always six entries, in `CostCategory::ALL` order
    pub categories: Vec<CategoryEstimate>,
    pub total_estimated: u64,
    pub per_person_total: u64,
    pub daily_average: u64,

    /// `total_estimated - original_budget`
    pub variance: f64,
    /// `None` when the budget is zero
    pub variance_percentage: Option<f64>,
    pub budget_status: BudgetStatus,

    pub recommendations: Vec<String>,
    pub cost_saving_tips: Vec<CostSavingTip>,
    pub total_potential_savings: u64,
    pub risk_factors: Vec<RiskFactor>,
}

impl BudgetAnalysis {
    pub fn category(&self, category: CostCategory) -> Option<&CategoryEstimate> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Amount for a category (0 if missing)
    pub fn amount(&self, category: CostCategory) -> u64 {
        self.category(category).map(|c| c.amount).unwrap_or(0)
    }

    /// One-line summary for logs and notifications
    pub fn summary(&self) -> String {
        let pct = self
            .variance_percentage
            .map(|p| format!(" ({:+.1}%)", p))
            .unwrap_or_default();
        format!(
            "{}: {} estimated vs {} budget{} [{}]",
            self.destination,
            money(self.total_estimated as f64),
            money(self.original_budget),
            pct,
            self.budget_status
        )
    }
}

pub struct BudgetEstimator {
    policy: BudgetPolicy,
}

impl Default for BudgetEstimator {
    fn default() -> Self {
        Self::new(BudgetPolicy::default())
    }
}

impl BudgetEstimator {
    pub fn new(policy: BudgetPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &BudgetPolicy {
        &self.policy
    }

    pub fn estimate(
        &self,
        trip: &TripParameters,
        itinerary: Option<&ItineraryData>,
        flights: Option<&FlightPriceSelection>,
    ) -> BudgetAnalysis {
        let policy = &self.policy;
        let destination = match_destination(&trip.destination, policy);
        let days = trip.total_days().max(1);
        let travelers = trip.travelers.max(1);
        let budget = if trip.budget.is_finite() && trip.budget > 0.0 {
            trip.budget
        } else {
            0.0
        };

        let inputs = FormulaInputs {
            days: days as f64,
            travelers: travelers as f64,
            multiplier: destination.multiplier,
            long_trip: days > policy.long_trip_days,
        };

        let categories = vec![
            match flights {
                Some(selection) => flights_from_selection(selection, &inputs),
                None => flights_formula(policy, &inputs),
            },
            accommodation_formula(policy, &inputs),
            food(policy, &inputs, itinerary),
            activities(policy, &inputs, itinerary, &trip.interests),
            transportation(policy, &inputs, itinerary),
            miscellaneous(policy, &inputs, itinerary),
        ];

        let total_estimated = categories
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(c.amount));
        let variance = total_estimated as f64 - budget;
        let variance_percentage = if budget > 0.0 {
            Some(variance / budget * 100.0)
        } else {
            warn!(
                destination = %trip.destination,
                "budget is zero, variance percentage left undefined"
            );
            None
        };
        let budget_status = BudgetStatus::classify(total_estimated as f64, budget, policy.tolerance);

        let cost_saving_tips = cost_saving_tips(&categories, &policy.discounts);
        let total_potential_savings = cost_saving_tips
            .iter()
            .fold(0u64, |acc, t| acc.saturating_add(t.potential_savings));

        let risk_input = RiskInput::new(trip.destination.clone())
            .with_multiplier(destination.multiplier)
            .with_days(days);

        let analysis = BudgetAnalysis {
            destination: trip.destination.clone(),
            destination_multiplier: destination.multiplier,
            cost_tier: destination.tier,
            total_days: days,
            travelers,
            original_budget: budget,
            total_estimated,
            per_person_total: round_amount(total_estimated as f64 / travelers as f64),
            daily_average: round_amount(total_estimated as f64 / days as f64),
            variance,
            variance_percentage,
            budget_status,
            recommendations: recommendations(budget_status, variance, variance_percentage),
            cost_saving_tips,
            total_potential_savings,
            risk_factors: assess_risks(&risk_input, &policy.risk),
            categories,
        };

        debug!(
            destination = %analysis.destination,
            tier = %analysis.cost_tier,
            total = analysis.total_estimated,
            status = %analysis.budget_status,
            "budget estimated"
        );

        analysis
    }
}

struct FormulaInputs {
    days: f64,
    travelers: f64,
    multiplier: f64,
    long_trip: bool,
}

fn formula(
    category: CostCategory,
    amount: f64,
    calculation: String,
    details: Vec<String>,
) -> CategoryEstimate {
    CategoryEstimate {
        category,
        amount: round_amount(amount),
        calculation,
        details,
        source: EstimateSource::Formula,
    }
}

fn flights_formula(policy: &BudgetPolicy, i: &FormulaInputs) -> CategoryEstimate {
    let rate = policy.rates.flight_per_person;
    let factor = if i.long_trip {
        policy.long_trip_flight_factor
    } else {
        1.0
    };
    let mut details = vec!["Round-trip economy fare per traveler".to_string()];
    if i.long_trip {
        details.push(format!(
            "Longer stays (over {} days) usually mean pricier flexible fares",
            policy.long_trip_days
        ));
    }

    formula(
        CostCategory::Flights,
        rate * i.travelers * factor * i.multiplier,
        format!(
            "{} × {} travelers × {} (trip length) × {} (destination)",
            money(rate),
            i.travelers,
            factor,
            i.multiplier
        ),
        details,
    )
}

fn flights_from_selection(selection: &FlightPriceSelection, i: &FormulaInputs) -> CategoryEstimate {
    let per_person = selection.per_person();
    let calculation = match selection.return_fare {
        Some(ret) => format!(
            "({} outbound + {} return) × {} travelers",
            money(selection.outbound.max(0.0)),
            money(ret.max(0.0)),
            i.travelers
        ),
        None => format!(
            "{} outbound × {} travelers",
            money(selection.outbound.max(0.0)),
            i.travelers
        ),
    };
    let mut details = vec!["Based on the fares you selected".to_string()];
    if let Some(carrier) = &selection.carrier {
        details.push(format!("Carrier: {}", carrier));
    }

    CategoryEstimate {
        category: CostCategory::Flights,
        amount: round_amount(per_person * i.travelers),
        calculation,
        details,
        source: EstimateSource::FlightPrices,
    }
}

fn accommodation_formula(policy: &BudgetPolicy, i: &FormulaInputs) -> CategoryEstimate {
    let rate = policy.rates.accommodation_per_night;
    formula(
        CostCategory::Accommodation,
        rate * i.days * i.travelers.sqrt() * i.multiplier,
        format!(
            "{}/night × {} nights × √{} travelers × {} (destination)",
            money(rate),
            i.days,
            i.travelers,
            i.multiplier
        ),
        vec![
            "Mid-range hotel or apartment".to_string(),
            "Rooms are shared, so cost grows with the square root of the group size".to_string(),
        ],
    )
}

/// Sum itinerary costs; `None` when the itinerary has no entries for it
fn itinerary_total(costs: Vec<f64>) -> Option<(f64, usize)> {
    if costs.is_empty() {
        None
    } else {
        Some((costs.iter().sum(), costs.len()))
    }
}

fn from_itinerary(
    category: CostCategory,
    sum: f64,
    count: usize,
    noun: &str,
    travelers: Option<f64>,
) -> CategoryEstimate {
    let (amount, calculation) = match travelers {
        Some(t) => (
            sum * t,
            format!("{} across {} itinerary {} × {} travelers", money(sum), count, noun, t),
        ),
        None => (sum, format!("{} across {} itinerary {}", money(sum), count, noun)),
    };
    CategoryEstimate {
        category,
        amount: round_amount(amount),
        calculation,
        details: vec![format!("Taken from your day-by-day itinerary ({} {})", count, noun)],
        source: EstimateSource::Itinerary,
    }
}

fn food(policy: &BudgetPolicy, i: &FormulaInputs, itinerary: Option<&ItineraryData>) -> CategoryEstimate {
    if let Some((sum, count)) = itinerary.and_then(|it| itinerary_total(it.meal_costs())) {
        return from_itinerary(CostCategory::Food, sum, count, "meals", Some(i.travelers));
    }
    let rate = policy.rates.food_per_day;
    formula(
        CostCategory::Food,
        rate * i.days * i.travelers * i.multiplier,
        format!(
            "{}/day × {} days × {} travelers × {} (destination)",
            money(rate),
            i.days,
            i.travelers,
            i.multiplier
        ),
        vec![
            "Three meals a day per traveler".to_string(),
            "Mix of local eateries and sit-down restaurants".to_string(),
        ],
    )
}

fn activities(
    policy: &BudgetPolicy,
    i: &FormulaInputs,
    itinerary: Option<&ItineraryData>,
    interests: &[String],
) -> CategoryEstimate {
    let mut estimate =
        if let Some((sum, count)) = itinerary.and_then(|it| itinerary_total(it.activity_costs())) {
            from_itinerary(CostCategory::Activities, sum, count, "activities", Some(i.travelers))
        } else {
            let rate = policy.rates.activities_per_day;
            formula(
                CostCategory::Activities,
                rate * i.days * i.travelers * i.multiplier,
                format!(
                    "{}/day × {} days × {} travelers × {} (destination)",
                    money(rate),
                    i.days,
                    i.travelers,
                    i.multiplier
                ),
                vec!["Entrance fees, guided tours and experiences".to_string()],
            )
        };

    if !interests.is_empty() {
        estimate
            .details
            .push(format!("Tailored to your interests: {}", interests.join(", ")));
    }
    estimate
}

fn transportation(
    policy: &BudgetPolicy,
    i: &FormulaInputs,
    itinerary: Option<&ItineraryData>,
) -> CategoryEstimate {
    // Itinerary transport entries are already per group
    if let Some((sum, count)) = itinerary.and_then(|it| itinerary_total(it.transport_costs())) {
        return from_itinerary(CostCategory::Transportation, sum, count, "transfers", None);
    }
    let rate = policy.rates.transport_per_day;
    formula(
        CostCategory::Transportation,
        rate * i.days * i.travelers.sqrt() * i.multiplier,
        format!(
            "{}/day × {} days × √{} travelers × {} (destination)",
            money(rate),
            i.days,
            i.travelers,
            i.multiplier
        ),
        vec![
            "Local transit, taxis and airport transfers".to_string(),
            "Vehicles are shared, so cost grows with the square root of the group size".to_string(),
        ],
    )
}

fn miscellaneous(
    policy: &BudgetPolicy,
    i: &FormulaInputs,
    itinerary: Option<&ItineraryData>,
) -> CategoryEstimate {
    if let Some((sum, count)) = itinerary.and_then(|it| itinerary_total(it.shopping_costs())) {
        return from_itinerary(
            CostCategory::Miscellaneous,
            sum,
            count,
            "shopping stops",
            Some(i.travelers),
        );
    }
    let rate = policy.rates.misc_per_day;
    formula(
        CostCategory::Miscellaneous,
        rate * i.days * i.travelers * i.multiplier,
        format!(
            "{}/day × {} days × {} travelers × {} (destination)",
            money(rate),
            i.days,
            i.travelers,
            i.multiplier
        ),
        vec!["Souvenirs, tips, SIM cards and other incidentals".to_string()],
    )
}
