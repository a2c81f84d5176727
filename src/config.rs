//! Runtime configuration: command line plus the kernel interface locations.

use std::time::Duration;

use clap::Parser;

use crate::system::sources::MetricSources;

/// Refresh interval when `-u` isn't given
pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 1000;

/// Live per-core CPU clock and memory/swap bars
#[derive(Debug, Parser)]
#[command(name = "freqbar", version, about)]
pub struct Cli {
    /// Refresh interval in milliseconds
    #[arg(short = 'u', value_name = "MILLISECONDS", default_value_t = DEFAULT_UPDATE_INTERVAL_MS)]
    pub update_interval_ms: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub update_interval: Duration,
    pub sources: MetricSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            update_interval: Duration::from_millis(DEFAULT_UPDATE_INTERVAL_MS),
            sources: MetricSources::default(),
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            update_interval: Duration::from_millis(cli.update_interval_ms),
            ..Self::default()
        }
    }
}
