//! Output formatters

pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use anyhow::Result;
use storegenius_core::{PriceRange, PromptSearch, TrendSuggestions};

/// Format prompt search results
pub fn format_prompt_search(found: &PromptSearch, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_results(&found.results),
        OutputFormat::Cli => Ok(terminal::format_prompt_search(found)),
    }
}

/// Format trend suggestions
pub fn format_trend(suggestions: &TrendSuggestions, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_trend(suggestions),
        OutputFormat::Cli => Ok(terminal::format_trend(suggestions)),
    }
}

/// Format a parsed price constraint
pub fn format_price_range(range: Option<&PriceRange>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_price_range(range),
        OutputFormat::Cli => Ok(terminal::format_price_range(range)),
    }
}
