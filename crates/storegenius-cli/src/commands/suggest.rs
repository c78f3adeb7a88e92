//! Suggest command

use super::{load_config, load_context, search_options};
use crate::app::{OutputFormat, SuggestArgs};
use crate::output::format_trend;
use anyhow::Result;
use std::path::Path;
use storegenius_core::{suggest_for_trend, HttpEmbedder, OllamaClient};

pub fn run(args: &SuggestArgs, config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = load_config(config_path)?;
    let trend = args.trend.join(" ");
    let ctx = load_context(&config)?;
    let embedder = HttpEmbedder::new(config.llm_service.clone())?;
    let llm = OllamaClient::new(config.llm_service.clone())?;

    let suggestions = suggest_for_trend(
        &ctx,
        &embedder,
        &llm,
        &trend,
        &search_options(&config, args.top_k),
    )?;

    print!("{}", format_trend(&suggestions, format)?);
    Ok(())
}
