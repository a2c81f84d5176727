use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::scale::{Chart, DisplayBudget};
use crate::system::cpu::BaselineClock;
use crate::system::Collector;
use crate::ui::{self, Palette, Surface};

/// Refresh loop: sample, scale, draw, then idle for the interval.
pub struct App {
    collector: Collector,
    baseline: BaselineClock,
    palette: Palette,
    interval: Duration,
    pub ticks: u64,
}

impl App {
    /// Reads the baseline clock once; without it the loop cannot start.
    pub fn new(config: &Config) -> Result<Self> {
        let collector = Collector::new(config.sources.clone());
        let baseline = collector
            .read_baseline_clock()
            .context("failed to read baseline CPU clock")?;
        info!(baseline_khz = baseline.khz(), "baseline clock");

        Ok(Self::with_baseline(collector, baseline, config.update_interval))
    }

    pub fn with_baseline(
        collector: Collector,
        baseline: BaselineClock,
        interval: Duration,
    ) -> Self {
        Self {
            collector,
            baseline,
            palette: Palette::default(),
            interval,
            ticks: 0,
        }
    }

    /// One Sampling-Render pass. Everything is sampled before the screen is
    /// touched, so a failed read never leaves a half-drawn frame.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<Chart> {
        let (columns, _rows) = surface.size().context("failed to query terminal size")?;
        let budget = DisplayBudget::from_columns(columns);

        let sample = self.collector.read_cpu_frequencies()?;
        let snapshot = self.collector.read_memory_snapshot()?;
        let chart = Chart::build(&sample, &snapshot, self.baseline, budget);

        ui::draw(surface, &chart, &self.palette).context("failed to draw frame")?;

        self.ticks += 1;
        debug!(
            tick = self.ticks,
            cores = chart.cpus.len(),
            budget = chart.budget.columns(),
            mem_free_kb = snapshot.mem_free,
            swap = chart.swap.is_some(),
            "frame drawn"
        );
        Ok(chart)
    }

    /// Alternate ticks and idle waits until `stop` receives a message or its
    /// sender is dropped. The stop is only observed between ticks.
    pub fn run<S: Surface + ?Sized>(&mut self, surface: &mut S, stop: &Receiver<()>) -> Result<()> {
        loop {
            self.tick(surface)?;

            match stop.recv_timeout(self.interval) {
                Err(RecvTimeoutError::Timeout) => continue,
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    debug!(ticks = self.ticks, "refresh loop stopped");
                    return Ok(());
                }
            }
        }
    }
}
