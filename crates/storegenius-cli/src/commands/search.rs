//! Search command

use super::{load_config, load_context, search_options};
use crate::app::{OutputFormat, SearchArgs};
use crate::output::format_prompt_search;
use anyhow::Result;
use std::path::Path;
use storegenius_core::{search_by_prompt, HttpEmbedder};

pub fn run(args: &SearchArgs, config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = load_config(config_path)?;
    let prompt = args.prompt.join(" ");
    let ctx = load_context(&config)?;
    let embedder = HttpEmbedder::new(config.llm_service.clone())?;

    let found = search_by_prompt(&ctx, &embedder, &prompt, &search_options(&config, args.top_k))?;

    print!("{}", format_prompt_search(&found, format)?);
    Ok(())
}
