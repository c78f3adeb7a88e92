//! Prompt search and trend suggestion orchestration
//!
//! Collaborator failures are returned as-is; nothing here retries or
//! hides partial results.

use super::{
    parse_price_range, KeywordMatches, Neighbor, PromptSearch, RetrievalContext, SearchOptions,
    SearchResult, TrendSuggestions,
};
use crate::error::{Result, StoreGeniusError};
use crate::llm::{extract_keywords, Embedder, LLMClient};

/// Neighbors fetched per requested result before price filtering
pub const OVERSAMPLING_FACTOR: usize = 4;

/// Search the catalog directly with a shopper's prompt.
///
/// The prompt is embedded as one query, `OVERSAMPLING_FACTOR * top_k`
/// neighbors are fetched, any price bound found in the prompt is applied,
/// and the first `top_k` survivors are returned in similarity order.
pub fn search_by_prompt(
    ctx: &RetrievalContext,
    embedder: &dyn Embedder,
    prompt: &str,
    options: &SearchOptions,
) -> Result<PromptSearch> {
    if prompt.trim().is_empty() {
        return Err(StoreGeniusError::InvalidInput(
            "prompt must not be empty".to_string(),
        ));
    }

    let query_embedding = embedder.embed(&ctx.query_text(prompt))?;
    let fetch = options.top_k.saturating_mul(OVERSAMPLING_FACTOR);
    let neighbors = ctx.index().search_one(&query_embedding, fetch)?;
    tracing::debug!("Prompt search fetched {} of {} requested neighbors", neighbors.len(), fetch);

    let mut results = project(ctx, &neighbors)?;

    let price_range = parse_price_range(prompt);
    if let Some(range) = price_range {
        if range.is_inverted() {
            tracing::warn!(
                "Price range {}..{} from prompt is inverted and will match nothing",
                range.low,
                range.high
            );
        }
        results.retain(|r| range.contains(r.final_price));
        tracing::debug!(
            "Price filter {}..{} kept {} results",
            range.low,
            range.high,
            results.len()
        );
    }

    results.truncate(options.top_k);

    Ok(PromptSearch {
        prompt: prompt.to_string(),
        price_range,
        results,
    })
}

/// Expand a trend phrase into keywords via the LLM and search per keyword.
///
/// Each keyword gets its own `top_k` nearest items. No price filtering is
/// applied in this mode.
pub fn suggest_for_trend(
    ctx: &RetrievalContext,
    embedder: &dyn Embedder,
    llm: &dyn LLMClient,
    trend: &str,
    options: &SearchOptions,
) -> Result<TrendSuggestions> {
    if trend.trim().is_empty() {
        return Err(StoreGeniusError::InvalidInput(
            "trend must not be empty".to_string(),
        ));
    }

    let raw = llm.generate(trend)?;
    let keywords = extract_keywords(&raw);
    tracing::debug!("Trend '{}' expanded to keywords {:?}", trend, keywords);

    let mut results = Vec::with_capacity(keywords.len());
    if !keywords.is_empty() {
        let texts: Vec<String> = keywords.iter().map(|kw| ctx.query_text(kw)).collect();
        let embeddings = embedder.embed_batch(&texts)?;
        if embeddings.len() != keywords.len() {
            return Err(StoreGeniusError::Embedding(format!(
                "expected {} keyword embeddings, got {}",
                keywords.len(),
                embeddings.len()
            )));
        }

        let neighbor_lists = ctx.index().search(&embeddings, options.top_k)?;
        for (keyword, neighbors) in keywords.iter().zip(neighbor_lists) {
            let mut matches = project(ctx, &neighbors)?;
            for m in &mut matches {
                m.keyword = Some(keyword.clone());
            }
            results.push(KeywordMatches {
                keyword: keyword.clone(),
                results: matches,
            });
        }
    }

    Ok(TrendSuggestions {
        trend: trend.to_string(),
        keywords,
        results,
    })
}

fn project(ctx: &RetrievalContext, neighbors: &[Neighbor]) -> Result<Vec<SearchResult>> {
    neighbors
        .iter()
        .map(|n| {
            ctx.item(n.row)
                .map(|item| SearchResult::from_item(item, *n))
                .ok_or_else(|| {
                    StoreGeniusError::Index(format!("neighbor row {} is outside the catalog", n.row))
                })
        })
        .collect()
}
