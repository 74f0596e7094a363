//! Trip input parsing.
//!
//! Turns the collector's free-text answers into typed values:
//! - Budget amounts with currency symbols, separators and `k` suffixes
//! - Traveler counts embedded in sentences ("2 adults")
//! - Interest tags from comma or semicolon separated answers
//! - Dates in a few common layouts
//!
//! Budget and traveler parsing never fail; malformed text becomes a default.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::error::TripError;

/// Budget used when the stated amount cannot be read
pub const DEFAULT_BUDGET: f64 = 2000.0;

/// Traveler count used when the stated count cannot be read
pub const DEFAULT_TRAVELERS: u32 = 1;

static AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(-)?\s*[$€£¥]?\s*(\d[\d,]*(?:\.\d+)?)\s*(k\b)?").expect("valid amount regex")
});

static COUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid count regex"));

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d %B %Y", "%B %d, %Y", "%d %b %Y"];

/// Parse a stated budget such as `"$2,500"`, `"2.5k"`, `"EUR 1800"` or `"1500eur"`
pub fn parse_budget(text: &str) -> f64 {
    let parsed = AMOUNT.captures(text).and_then(|caps| {
        if caps.get(1).is_some() {
            return None;
        }
        let digits = caps.get(2)?.as_str().replace(',', "");
        let value: f64 = digits.parse().ok()?;
        let scale = if caps.get(3).is_some() { 1000.0 } else { 1.0 };
        Some(value * scale)
    });

    match parsed {
        Some(value) if value.is_finite() && value >= 0.0 => value,
        _ => {
            warn!(input = text, default = DEFAULT_BUDGET, "unreadable budget, using default");
            DEFAULT_BUDGET
        }
    }
}

/// Parse a traveler count, taking the first integer in the text
pub fn parse_travelers(text: &str) -> u32 {
    let parsed = COUNT
        .find(text)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|count| *count > 0);

    match parsed {
        Some(count) => count,
        None => {
            warn!(input = text, default = DEFAULT_TRAVELERS, "unreadable traveler count, using default");
            DEFAULT_TRAVELERS
        }
    }
}

/// Split interests on commas/semicolons, lowercase, drop duplicates
pub fn parse_interests(text: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in text.split([',', ';']) {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Parse a calendar date in one of the accepted layouts
pub fn parse_date(text: &str) -> Result<NaiveDate, TripError> {
    let trimmed = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| TripError::InvalidDate(format!("unrecognised date '{}'", trimmed)))
}
