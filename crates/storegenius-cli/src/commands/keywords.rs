//! Keywords command

use crate::app::{KeywordsArgs, OutputFormat};
use anyhow::{Context, Result};
use std::io::Read;
use storegenius_core::extract_keywords;

pub fn run(args: &KeywordsArgs, format: OutputFormat) -> Result<()> {
    let raw = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let keywords = extract_keywords(&raw);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&keywords)?),
        OutputFormat::Cli => {
            for keyword in &keywords {
                println!("{}", keyword);
            }
        }
    }
    Ok(())
}
