//! freqbar — live per-core CPU clock and memory/swap bars for the terminal.
//!
//! Reads `scaling_cur_freq` for every core and `/proc/meminfo` on each tick
//! and redraws:
//!   - one bar per core, scaled so the budget spans 3x the rated clock,
//!     colored past the rated clock
//!   - a memory bar (used / cached / free) and, when present, a swap bar
//!
//! Usage: `freqbar [-u <milliseconds>]`. Runs until killed.

mod app;
mod config;
mod logging;
mod scale;
mod system;
mod ui;

use std::sync::mpsc;

use anyhow::Result;
use clap::Parser;

use app::App;
use config::{Cli, Config};
use ui::TerminalSurface;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    if let Err(e) = run(&Config::from_cli(&cli)) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(config: &Config) -> Result<()> {
    let mut app = App::new(config)?;
    let mut surface = TerminalSurface::stdout();

    // Nothing ever sends on this channel; the sender lives until the process
    // is killed so the loop never sees a disconnect.
    let (_stop_tx, stop_rx) = mpsc::channel::<()>();
    app.run(&mut surface, &stop_rx)
}
