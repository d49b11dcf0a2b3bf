use std::io;

use anyhow::Context;
use clap::Parser;
use price_analyzer::{
    cli::{Cli, execute},
    config::resolve_config,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, config_path) = resolve_config(cli.config.as_deref())?;
    let level = config.level_filter()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "price_analyzer={level},feature_extractor={level}"
            ))
        }))
        .with_writer(io::stderr)
        .init();

    match &config_path {
        Some(path) => info!(path = %path.display(), "loaded config"),
        None => debug!("no config file, using defaults"),
    }

    execute(&cli.command, &config, io::stdout().lock()).context("price-analyzer failed")
}
