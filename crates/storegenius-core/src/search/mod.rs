//! Search engine module
//!
//! Provides:
//! - Price constraint parsing from free text
//! - Exact vector similarity search over catalog embeddings
//! - Prompt search and trend suggestion orchestration

mod context;
mod price;
mod retrieval;
mod vector_index;

pub use context::RetrievalContext;
pub use price::{parse_price_range, PriceRange};
pub use retrieval::{search_by_prompt, suggest_for_trend, OVERSAMPLING_FACTOR};
pub use vector_index::{Metric, Neighbor, VectorIndex};

use crate::catalog::CatalogItem;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Search options
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Results per prompt, or per keyword in trend mode
    pub top_k: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { top_k: 5 }
    }
}

/// Projection of a catalog item returned to callers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub product_name: String,
    pub short_description: String,
    pub final_price: f64,
    /// Originating keyword, set in trend mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Catalog row the result was projected from
    #[serde(skip)]
    pub row: usize,
    /// Metric score from the index (see [`Metric`])
    #[serde(skip)]
    pub score: f32,
}

impl SearchResult {
    pub(crate) fn from_item(item: &CatalogItem, neighbor: Neighbor) -> Self {
        Self {
            product_name: item.product_name.clone(),
            short_description: item.short_description.clone(),
            final_price: item.final_price,
            keyword: None,
            row: neighbor.row,
            score: neighbor.score,
        }
    }
}

/// Prompt-mode response
#[derive(Debug, Clone, Serialize)]
pub struct PromptSearch {
    pub prompt: String,
    pub price_range: Option<PriceRange>,
    pub results: Vec<SearchResult>,
}

/// Ranked matches for one keyword
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordMatches {
    pub keyword: String,
    pub results: Vec<SearchResult>,
}

/// Trend-mode response, serialized as `{trend, keywords, results: {keyword: [...]}}`
#[derive(Debug, Clone, Serialize)]
pub struct TrendSuggestions {
    pub trend: String,
    pub keywords: Vec<String>,
    #[serde(serialize_with = "serialize_keyword_map")]
    pub results: Vec<KeywordMatches>,
}

impl TrendSuggestions {
    /// Matches for a keyword, if it was extracted
    pub fn matches_for(&self, keyword: &str) -> Option<&[SearchResult]> {
        self.results
            .iter()
            .find(|m| m.keyword == keyword)
            .map(|m| m.results.as_slice())
    }
}

/// Keyword order is kept; a repeated keyword is written once
fn serialize_keyword_map<S>(matches: &[KeywordMatches], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seen = std::collections::HashSet::new();
    let unique: Vec<&KeywordMatches> = matches
        .iter()
        .filter(|m| seen.insert(m.keyword.as_str()))
        .collect();

    let mut map = serializer.serialize_map(Some(unique.len()))?;
    for m in unique {
        map.serialize_entry(&m.keyword, &m.results)?;
    }
    map.end()
}
