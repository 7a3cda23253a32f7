use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "tapcount", version, about = "A terminal counter: every activation adds one")]
pub struct Cli {
    /// Path to a config file (default: <config_dir>/tapcount/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Input poll interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub poll_interval: Option<u64>,

    /// Disable mouse capture (keyboard activation only)
    #[arg(long)]
    pub no_mouse: bool,

    /// Log filter directive, e.g. "debug" or "tapcount=trace"
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Overlay command-line values on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ms) = self.poll_interval {
            config.ui.poll_interval_ms = ms;
        }
        if self.no_mouse {
            config.ui.mouse = false;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
