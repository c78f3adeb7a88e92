//! Keyword extraction from free-form LLM output

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BULLET_RE: Regex = Regex::new(r"^\s*(?:[-*•—]|[0-9]+\.)\s*(.+)").unwrap();
}

/// Upper bound on keywords taken from one response
pub const MAX_KEYWORDS: usize = 5;

/// Fallback lines must be shorter than this many characters
const MAX_FALLBACK_LINE_CHARS: usize = 60;

/// Leading characters stripped from fallback lines
const FALLBACK_TRIM_CHARS: &[char] = &[
    '-', '•', '*', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', ' ',
];

/// Extract up to five keyword phrases from an LLM response.
///
/// Bulleted or numbered lines are preferred, in order. When the response
/// has no bullets at all, the last short lines are used instead since
/// models tend to put a preamble ("Here are the keywords:") first.
/// Never fails; unusable text yields an empty list.
pub fn extract_keywords(raw_text: &str) -> Vec<String> {
    let lines: Vec<&str> = raw_text.lines().collect();

    let mut keywords: Vec<String> = lines
        .iter()
        .filter_map(|line| BULLET_RE.captures(line))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .filter(|kw| !kw.is_empty())
        .collect();

    if keywords.is_empty() {
        keywords = fallback_keywords(&lines);
        if !keywords.is_empty() {
            tracing::warn!(
                "No bulleted keywords in LLM response, using fallback lines: {:?}",
                keywords
            );
        }
    }

    keywords.truncate(MAX_KEYWORDS);
    keywords
}

fn fallback_keywords(lines: &[&str]) -> Vec<String> {
    let survivors: Vec<String> = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| {
            let len = line.chars().count();
            len > 1 && len < MAX_FALLBACK_LINE_CHARS
        })
        .filter(|line| !line.to_lowercase().contains("product"))
        .map(|line| line.trim_start_matches(FALLBACK_TRIM_CHARS).to_string())
        .filter(|kw| !kw.is_empty())
        .collect();

    let skip = survivors.len().saturating_sub(MAX_KEYWORDS);
    survivors.into_iter().skip(skip).collect()
}
