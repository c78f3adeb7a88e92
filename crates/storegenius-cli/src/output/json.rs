//! JSON output formatter

use anyhow::Result;
use storegenius_core::{PriceRange, SearchResult, TrendSuggestions};

pub fn format_results(results: &[SearchResult]) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(results)?))
}

pub fn format_trend(suggestions: &TrendSuggestions) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(suggestions)?))
}

/// Unbounded `high` is written as `null`
pub fn format_price_range(range: Option<&PriceRange>) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(&range)?))
}
