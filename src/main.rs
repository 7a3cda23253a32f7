use anyhow::{Context, Result};
use clap::Parser;

use tapcount::cli::Cli;
use tapcount::config::Config;
use tapcount::logging::init_tracing;
use tapcount::ui::runtime;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    match init_tracing(&config.logging) {
        Ok(path) => tracing::info!(log_file = %path.display(), "tapcount starting"),
        Err(err) => eprintln!("Warning: logging disabled: {err}"),
    }

    runtime::run(&config).context("terminal UI failed")?;
    tracing::info!("tapcount exited");
    Ok(())
}
