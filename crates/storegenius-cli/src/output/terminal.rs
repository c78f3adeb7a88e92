//! Terminal output formatter

use storegenius_core::{PriceRange, PromptSearch, SearchResult, TrendSuggestions};

pub fn format_prompt_search(found: &PromptSearch) -> String {
    let mut output = String::new();

    if let Some(range) = &found.price_range {
        output.push_str(&format!("Price: {}\n\n", describe_range(range)));
    }

    if found.results.is_empty() {
        output.push_str("No matching products\n");
        return output;
    }

    for (i, result) in found.results.iter().enumerate() {
        push_result(&mut output, i + 1, result, "");
    }
    output
}

pub fn format_trend(suggestions: &TrendSuggestions) -> String {
    if suggestions.keywords.is_empty() {
        return format!("No keywords extracted for '{}'\n", suggestions.trend);
    }

    let mut output = String::new();
    for matches in &suggestions.results {
        output.push_str(&format!("{}\n", matches.keyword));
        for (i, result) in matches.results.iter().enumerate() {
            push_result(&mut output, i + 1, result, "  ");
        }
        output.push('\n');
    }
    output
}

pub fn format_price_range(range: Option<&PriceRange>) -> String {
    match range {
        Some(range) => format!("{}\n", describe_range(range)),
        None => "none\n".to_string(),
    }
}

fn describe_range(range: &PriceRange) -> String {
    if range.high.is_infinite() {
        format!("{:.2} and above", range.low)
    } else {
        format!("{:.2} - {:.2}", range.low, range.high)
    }
}

fn push_result(output: &mut String, rank: usize, result: &SearchResult, indent: &str) {
    output.push_str(&format!(
        "{}{:>2}. {} ({:.2})\n",
        indent, rank, result.product_name, result.final_price
    ));
    if !result.short_description.is_empty() {
        output.push_str(&format!("{}    {}\n", indent, result.short_description));
    }
}
