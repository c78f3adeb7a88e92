//! Integration tests for prompt search and trend suggestions
//!
//! Collaborators are in-process stubs so ranking and filtering can be
//! checked against a known catalog.

use std::sync::atomic::{AtomicUsize, Ordering};
use storegenius_core::{
    search_by_prompt, suggest_for_trend, Catalog, CatalogItem, Embedder, LLMClient, Metric,
    RetrievalContext, Result, SearchOptions, StoreGeniusError, VectorIndex,
};

/// Embeds every text onto the first axis, so similarity follows row order
struct AxisEmbedder;

impl Embedder for AxisEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Ok(vec![1.0, 0.0])
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|_| vec![1.0, 0.0]).collect())
    }

    fn model_name(&self) -> &str {
        "axis"
    }
}

struct FailingEmbedder;

impl Embedder for FailingEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Err(StoreGeniusError::ExternalError("embedding service down".to_string()))
    }

    fn embed_batch(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Err(StoreGeniusError::ExternalError("embedding service down".to_string()))
    }

    fn model_name(&self) -> &str {
        "failing"
    }
}

/// Returns one embedding fewer than asked for
struct ShortBatchEmbedder;

impl Embedder for ShortBatchEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Ok(vec![1.0, 0.0])
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().skip(1).map(|_| vec![1.0, 0.0]).collect())
    }

    fn model_name(&self) -> &str {
        "short"
    }
}

struct ScriptedLlm {
    reply: Result<String>,
    calls: AtomicUsize,
}

impl ScriptedLlm {
    fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            reply: Err(StoreGeniusError::ExternalError("connection refused".to_string())),
            calls: AtomicUsize::new(0),
        }
    }
}

impl LLMClient for ScriptedLlm {
    fn generate(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(e) => Err(StoreGeniusError::ExternalError(e.to_string())),
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

/// Twenty items whose similarity to the first axis decreases with the row.
/// Only rows 3 and 11 are priced inside 1000..=3000.
fn twenty_item_context() -> RetrievalContext {
    let mut items = Vec::new();
    let mut rows = Vec::new();
    for i in 0..20 {
        let price = match i {
            3 => 1500.0,
            11 => 3000.0,
            _ if i % 2 == 0 => 200.0,
            _ => 5000.0,
        };
        items.push(CatalogItem {
            id: i.to_string(),
            product_name: format!("Item {}", i),
            short_description: format!("Description {}", i),
            final_price: price,
        });
        let angle = i as f32 * 0.05;
        rows.push(vec![angle.cos(), angle.sin()]);
    }

    let index = VectorIndex::build(&rows, Metric::Cosine).unwrap();
    RetrievalContext::new(Catalog::new(items), index, "Query: ").unwrap()
}

#[test]
fn test_prompt_search_returns_top_k_in_similarity_order() {
    let ctx = twenty_item_context();
    let out = search_by_prompt(&ctx, &AxisEmbedder, "gift ideas", &SearchOptions::default())
        .unwrap();

    assert_eq!(out.results.len(), 5);
    let names: Vec<_> = out.results.iter().map(|r| r.product_name.as_str()).collect();
    assert_eq!(names, vec!["Item 0", "Item 1", "Item 2", "Item 3", "Item 4"]);
    assert!(out.results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_price_filter_may_return_fewer_than_top_k() {
    let ctx = twenty_item_context();
    let out = search_by_prompt(
        &ctx,
        &AxisEmbedder,
        "running shoes between $1,000 and $3,000",
        &SearchOptions::default(),
    )
    .unwrap();

    let range = out.price_range.unwrap();
    assert_eq!((range.low, range.high), (1000.0, 3000.0));
    let names: Vec<_> = out.results.iter().map(|r| r.product_name.as_str()).collect();
    assert_eq!(names, vec!["Item 3", "Item 11"]);
}

#[test]
fn test_price_filter_admitting_everything_keeps_top_k() {
    let ctx = twenty_item_context();
    let unfiltered = search_by_prompt(&ctx, &AxisEmbedder, "gift ideas", &SearchOptions::default())
        .unwrap();
    let out = search_by_prompt(
        &ctx,
        &AxisEmbedder,
        "gift ideas under 10000",
        &SearchOptions::default(),
    )
    .unwrap();

    assert_eq!(out.price_range.map(|r| r.high), Some(10000.0));
    assert_eq!(out.results.len(), 5);
    let names: Vec<_> = out.results.iter().map(|r| r.product_name.as_str()).collect();
    assert_eq!(names, vec!["Item 0", "Item 1", "Item 2", "Item 3", "Item 4"]);
    assert!(out.results.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(out.results, unfiltered.results);
}

#[test]
fn test_prompt_search_is_deterministic() {
    let ctx = twenty_item_context();
    let options = SearchOptions { top_k: 7 };
    let first = search_by_prompt(&ctx, &AxisEmbedder, "desk lamp under 5000", &options).unwrap();
    let second = search_by_prompt(&ctx, &AxisEmbedder, "desk lamp under 5000", &options).unwrap();
    assert_eq!(first.results, second.results);
}

#[test]
fn test_prompt_search_propagates_embedder_failure() {
    let ctx = twenty_item_context();
    let err = search_by_prompt(&ctx, &FailingEmbedder, "lamp", &SearchOptions::default())
        .unwrap_err();
    assert!(matches!(err, StoreGeniusError::ExternalError(_)));
}

#[test]
fn test_trend_maps_each_keyword_to_results() {
    let ctx = twenty_item_context();
    let llm = ScriptedLlm::replying(
        "Here are some ideas:\n1. Umbrella\n2. Raincoat\n3. Gum boots\n",
    );
    let out = suggest_for_trend(
        &ctx,
        &AxisEmbedder,
        &llm,
        "monsoon essentials",
        &SearchOptions { top_k: 3 },
    )
    .unwrap();

    assert_eq!(out.keywords, vec!["Umbrella", "Raincoat", "Gum boots"]);
    assert_eq!(out.results.len(), 3);
    for keyword in &out.keywords {
        let matches = out.matches_for(keyword).unwrap();
        assert_eq!(matches.len(), 3);
        assert!(matches.iter().all(|m| m.keyword.as_deref() == Some(keyword.as_str())));
    }
    assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_trend_ignores_price_words() {
    let ctx = twenty_item_context();
    let llm = ScriptedLlm::replying("- sandals");
    let out = suggest_for_trend(
        &ctx,
        &AxisEmbedder,
        &llm,
        "beach trip under 100",
        &SearchOptions::default(),
    )
    .unwrap();
    assert_eq!(out.matches_for("sandals").unwrap().len(), 5);
}

#[test]
fn test_trend_with_unusable_reply_is_empty() {
    let ctx = twenty_item_context();
    let llm = ScriptedLlm::replying(
        "I could not think of any product keywords for that request, sorry about that.",
    );
    let out = suggest_for_trend(&ctx, &AxisEmbedder, &llm, "???", &SearchOptions::default())
        .unwrap();
    assert!(out.keywords.is_empty());
    assert!(out.results.is_empty());
}

#[test]
fn test_trend_propagates_llm_failure() {
    let ctx = twenty_item_context();
    let err = suggest_for_trend(
        &ctx,
        &AxisEmbedder,
        &ScriptedLlm::failing(),
        "summer",
        &SearchOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, StoreGeniusError::ExternalError(_)));
}

#[test]
fn test_trend_rejects_short_embedding_batch() {
    let ctx = twenty_item_context();
    let llm = ScriptedLlm::replying("- hats\n- scarves");
    let err = suggest_for_trend(
        &ctx,
        &ShortBatchEmbedder,
        &llm,
        "winter",
        &SearchOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, StoreGeniusError::Embedding(_)));
}

#[test]
fn test_empty_trend_is_invalid_input() {
    let ctx = twenty_item_context();
    let llm = ScriptedLlm::replying("- anything");
    let err = suggest_for_trend(&ctx, &AxisEmbedder, &llm, "", &SearchOptions::default())
        .unwrap_err();
    assert!(matches!(err, StoreGeniusError::InvalidInput(_)));
    assert_eq!(err.exit_code(), 3);
    assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
}
