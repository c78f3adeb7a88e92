//! Price constraint extraction from free text
//!
//! Heuristics are tried in a fixed order and the first one that matches
//! wins: an explicit `between` range, an upper bound, a lower bound, then a
//! bare number read as an approximate price.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref BETWEEN_RE: Regex =
        Regex::new(r"between\s*\$?₹?([0-9]+)\s*(?:and|to)\s*\$?₹?([0-9]+)").unwrap();
    static ref UNDER_RE: Regex =
        Regex::new(r"(?:under|below|less than)\s*\$?₹?([0-9]+)").unwrap();
    // No word boundary: "phone cover 200" reads as a lower bound of 200.
    static ref ABOVE_RE: Regex =
        Regex::new(r"(?:above|over|more than)\s*\$?₹?([0-9]+)").unwrap();
    static ref NUMBER_RE: Regex = Regex::new(r"\$?₹?([0-9]+)").unwrap();
    /// Unit that marks a number as a product attribute rather than a price.
    /// The unit must end the word, so "3000 gaming" is still a price.
    static ref UNIT_SUFFIX_RE: Regex =
        Regex::new(r"^\s*(?:ml|gm|g|kg|%|inch(?:es)?|cm|hz)s?(?:[^a-z0-9]|$)").unwrap();
}

/// Symmetric margin applied around a bare approximate price
const APPROX_MARGIN: f64 = 0.15;

const MIN_APPROX_DIGITS: usize = 2;
const MAX_APPROX_DIGITS: usize = 6;

/// Inclusive price bounds; `high` may be infinite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

impl PriceRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether `price` lies within the bounds, both ends inclusive
    pub fn contains(&self, price: f64) -> bool {
        price >= self.low && price <= self.high
    }

    /// `low > high`; such a range admits nothing
    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

/// Extract the price constraint a shopper most likely meant.
///
/// Returns `None` when no heuristic applies. Never fails: text that cannot
/// be interpreted simply carries no constraint.
///
/// ```
/// use storegenius_core::search::{parse_price_range, PriceRange};
///
/// assert_eq!(parse_price_range("shoes under 500"), Some(PriceRange::new(0.0, 500.0)));
/// assert_eq!(parse_price_range("500ml bottle"), None);
/// ```
pub fn parse_price_range(text: &str) -> Option<PriceRange> {
    let text = text.to_lowercase().replace(',', "");

    if let Some(caps) = BETWEEN_RE.captures(&text) {
        let low = parse_number(caps.get(1)?.as_str())?;
        let high = parse_number(caps.get(2)?.as_str())?;
        return Some(PriceRange::new(low, high));
    }

    if let Some(caps) = UNDER_RE.captures(&text) {
        return Some(PriceRange::new(0.0, parse_number(caps.get(1)?.as_str())?));
    }

    if let Some(caps) = ABOVE_RE.captures(&text) {
        return Some(PriceRange::new(parse_number(caps.get(1)?.as_str())?, f64::INFINITY));
    }

    approximate_price(&text).map(|approx| {
        let margin = APPROX_MARGIN * approx;
        PriceRange::new(approx - margin, approx + margin)
    })
}

/// First 2-6 digit number not immediately followed by a unit suffix
fn approximate_price(text: &str) -> Option<f64> {
    NUMBER_RE.captures_iter(text).find_map(|caps| {
        let digits = caps.get(1)?;
        if !(MIN_APPROX_DIGITS..=MAX_APPROX_DIGITS).contains(&digits.as_str().len()) {
            return None;
        }
        if has_unit_suffix(&text[digits.end()..]) {
            return None;
        }
        parse_number(digits.as_str())
    })
}

fn has_unit_suffix(rest: &str) -> bool {
    UNIT_SUFFIX_RE.is_match(rest)
}

fn parse_number(digits: &str) -> Option<f64> {
    digits.parse::<f64>().ok()
}
