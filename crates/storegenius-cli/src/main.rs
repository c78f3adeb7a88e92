//! StoreGenius CLI
//!
//! Trend suggestions and prompt search over a product catalog.

use anyhow::Result;
use clap::Parser;
use storegenius_core::error::exit_codes;
use storegenius_core::StoreGeniusError;

mod app;
mod commands;
mod output;

use app::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = run(&cli) {
        report(&err, cli.format);
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config.as_deref();
    match &cli.command {
        Commands::Suggest(args) => commands::suggest::run(args, config, cli.format),
        Commands::Search(args) => commands::search::run(args, config, cli.format),
        Commands::Price(args) => commands::price::run(args, cli.format),
        Commands::Keywords(args) => commands::keywords::run(args, cli.format),
        Commands::Status => commands::status::run(config, cli.format),
    }
}

fn report(err: &anyhow::Error, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "error": err.to_string() }));
        }
        OutputFormat::Cli => eprintln!("Error: {}", err),
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<StoreGeniusError>()
        .map(StoreGeniusError::exit_code)
        .unwrap_or(exit_codes::GENERAL_ERROR)
}
