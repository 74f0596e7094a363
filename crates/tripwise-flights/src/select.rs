//! Fare selection
use tripwise_core::FlightPriceSelection;

use crate::types::{Direction, FlightOffer};

fn cheapest(offers: &[FlightOffer], direction: Direction) -> Option<&FlightOffer> {
    offers
        .iter()
        .filter(|o| o.direction == direction && o.price.is_finite())
        .min_by(|a, b| a.price.total_cmp(&b.price))
}

/// Cheapest outbound fare plus the cheapest return fare, if any.
///
/// `None` when there is no outbound offer.
pub fn select_cheapest(offers: &[FlightOffer]) -> Option<FlightPriceSelection> {
    let outbound = cheapest(offers, Direction::Outbound)?;
    let ret = cheapest(offers, Direction::Return);

    let carrier = match ret {
        Some(r) if r.carrier != outbound.carrier => format!("{} / {}", outbound.carrier, r.carrier),
        _ => outbound.carrier.clone(),
    };

    Some(FlightPriceSelection {
        outbound: outbound.price,
        return_fare: ret.map(|r| r.price),
        carrier: Some(carrier),
    })
}
