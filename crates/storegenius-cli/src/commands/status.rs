//! Status command

use super::{load_config, load_context};
use crate::app::OutputFormat;
use anyhow::Result;
use std::path::Path;

pub fn run(config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = load_config(config_path)?;
    let ctx = load_context(&config)?;

    match format {
        OutputFormat::Json => {
            let status = serde_json::json!({
                "catalog": config.catalog.path,
                "embeddings": config.catalog.embeddings,
                "items": ctx.catalog().len(),
                "dimensions": ctx.index().dimensions(),
                "metric": ctx.metric(),
                "llm_url": config.llm_service.url,
                "llm_model": config.llm_service.model,
                "embedding_model": config.llm_service.embedding_model,
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        OutputFormat::Cli => {
            println!("Catalog:         {}", config.catalog.path.display());
            println!("Embeddings:      {}", config.catalog.embeddings.display());
            println!("Items:           {}", ctx.catalog().len());
            println!();
            println!("Index:");
            println!("  Dimensions:    {}", ctx.index().dimensions());
            println!("  Metric:        {}", ctx.metric());
            println!();
            println!("Services:");
            println!("  LLM:           {} ({})", config.llm_service.url, config.llm_service.model);
            println!(
                "  Embeddings:    {} ({})",
                config.llm_service.embeddings_url(),
                config.llm_service.embedding_model
            );
        }
    }
    Ok(())
}
