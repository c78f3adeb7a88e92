//! CLI command handlers

pub mod keywords;
pub mod price;
pub mod search;
pub mod status;
pub mod suggest;

use anyhow::Result;
use std::path::Path;
use storegenius_core::{Config, RetrievalContext, SearchOptions};

/// Load configuration from `--config` or the default location
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Load catalog and embeddings and build the index
pub fn load_context(config: &Config) -> Result<RetrievalContext> {
    Ok(RetrievalContext::load(&config.catalog)?)
}

pub fn search_options(config: &Config, top_k: Option<usize>) -> SearchOptions {
    SearchOptions {
        top_k: top_k.unwrap_or(config.search.top_k),
    }
}
