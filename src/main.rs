// tgcached - Typed inline query results for the Telegram Bot API
// Author: kelexine (https://github.com/kelexine)

use anyhow::{Context, Result};
use clap::Parser;
use tgcached::cli::Args;
use tgcached::config::AppConfig;
use tgcached::utils::logging;
use tracing::{debug, info};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration and serialization defaults
    let config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    logging::init(&config.logging)?;
    debug!("Starting tgcached v{}", env!("CARGO_PKG_VERSION"));

    let defaults = config.defaults().context("invalid [defaults] configuration")?;

    // Build and render the result
    let result = args.build_result()?;
    info!(id = %result.id(), file_id = %result.gif_file_id(), "Built cached GIF result");

    let wire = result.to_wire(&defaults)?;
    let output = if args.pretty {
        serde_json::to_string_pretty(&wire)?
    } else {
        serde_json::to_string(&wire)?
    };
    println!("{}", output);

    Ok(())
}
