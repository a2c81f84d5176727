//! Conversion of raw samples into integer bar-segment lengths.
//!
//! Layout of one CPU row (the label is budgeted at `LABEL_WIDTH` columns):
//!
//!   CPU 0:   3000000 MHz [||||||||||||||||||||||||||||
//!                        ^ budget covers 3x the baseline clock
//!
//! Memory rows reserve one more column for the closing bracket and cover
//! 1.5x the larger of total memory and total swap.

use crate::system::cpu::{BaselineClock, CpuFrequencySample};
use crate::system::memory::MemorySnapshot;

/// Columns taken by a row label before the opening bracket
pub const LABEL_WIDTH: u16 = 21;
/// Budget used when the terminal is too narrow for the label plus a bar
pub const MIN_BUDGET: usize = 5;
/// Widths at or below this fall back to `MIN_BUDGET`
pub const NARROW_TERMINAL: u16 = 25;

/// How many columns a CPU bar at 3x the baseline clock spans
const CPU_SPAN: f64 = 3.0;
/// Memory bars span 1.5x the larger of RAM and swap
const MEMORY_SPAN: f64 = 1.5;
/// No bar grows past this many budgets, whatever the readings are
const MAX_BUDGETS_PER_BAR: usize = 4;

/// Columns available for bars after the label, recomputed every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayBudget(usize);

impl DisplayBudget {
    pub fn from_columns(columns: u16) -> Self {
        if columns > NARROW_TERMINAL {
            Self(usize::from(columns - LABEL_WIDTH))
        } else {
            Self(MIN_BUDGET)
        }
    }

    pub fn columns(self) -> usize {
        self.0
    }

    /// Longest segment any bar may draw
    pub fn bar_limit(self) -> usize {
        self.0.saturating_mul(MAX_BUDGETS_PER_BAR)
    }
}

/// Floor a computed length into `0..=limit`; negatives and NaN become zero.
fn segment(value: f64, limit: usize) -> usize {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        (value.floor() as usize).min(limit)
    }
}

/// Columns per kHz for CPU bars
pub fn cpu_scale(budget: DisplayBudget, baseline: BaselineClock) -> f64 {
    budget.columns() as f64 / (CPU_SPAN * baseline.khz())
}

/// Columns per kB for memory and swap bars; zero when both totals are zero
pub fn memory_scale(budget: DisplayBudget, snapshot: &MemorySnapshot) -> f64 {
    let columns = budget.columns().saturating_sub(1) as f64;
    let largest = snapshot.mem_total.max(snapshot.swap_total) as f64;
    if largest > 0.0 {
        columns / (MEMORY_SPAN * largest)
    } else {
        0.0
    }
}

/// One core's bar: `length` segments, those at index >= `threshold` drawn
/// in the over-baseline color.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuBar {
    pub index: usize,
    pub khz: f64,
    pub length: usize,
    pub threshold: usize,
}

impl CpuBar {
    pub fn scale(
        index: usize,
        khz: f64,
        baseline: BaselineClock,
        factor: f64,
        limit: usize,
    ) -> Self {
        Self {
            index,
            khz,
            length: segment(khz * factor, limit),
            threshold: segment(baseline.khz() * factor, limit),
        }
    }

    /// Integer reading printed next to the bar
    pub fn display_khz(&self) -> u64 {
        segment(self.khz, usize::MAX) as u64
    }

    /// Segments below the baseline threshold
    pub fn normal_len(&self) -> usize {
        self.length.min(self.threshold)
    }

    /// Segments at or past the baseline threshold
    pub fn over_baseline_len(&self) -> usize {
        self.length.saturating_sub(self.threshold)
    }
}

/// Which row a memory bar belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterKind {
    Memory,
    Swap,
}

impl MeterKind {
    pub fn label(self) -> &'static str {
        match self {
            MeterKind::Memory => "MEMORY",
            MeterKind::Swap => "SWAP",
        }
    }
}

/// Three-segment memory or swap bar.
///
/// `free_fill` keeps the historical `2*total - available - cached` formula,
/// so the three segments don't necessarily add up to `1.5 * total` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryBar {
    pub kind: MeterKind,
    pub used_mb: u64,
    pub used: usize,
    pub cached: usize,
    pub free_fill: usize,
}

impl MemoryBar {
    fn compose(
        kind: MeterKind,
        [total, available, cached]: [u64; 3],
        factor: f64,
        limit: usize,
    ) -> Self {
        let total = total as f64;
        let available = available as f64;
        let cached = cached as f64;
        let used = total - available;

        Self {
            kind,
            used_mb: segment(used / 1000.0, usize::MAX) as u64,
            used: segment(used * factor, limit),
            cached: segment(cached * factor, limit),
            free_fill: segment((2.0 * total - available - cached) * factor, limit),
        }
    }

    /// Used = total - available
    pub fn memory(snapshot: &MemorySnapshot, factor: f64, limit: usize) -> Self {
        let figures = [snapshot.mem_total, snapshot.mem_available, snapshot.cached];
        Self::compose(MeterKind::Memory, figures, factor, limit)
    }

    /// Used = total - free; `None` when the system has no swap
    pub fn swap(snapshot: &MemorySnapshot, factor: f64, limit: usize) -> Option<Self> {
        snapshot.has_swap().then(|| {
            let figures = [snapshot.swap_total, snapshot.swap_free, snapshot.swap_cached];
            Self::compose(MeterKind::Swap, figures, factor, limit)
        })
    }
}

/// Everything the renderer needs for one tick
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub budget: DisplayBudget,
    pub cpus: Vec<CpuBar>,
    pub memory: MemoryBar,
    pub swap: Option<MemoryBar>,
}

impl Chart {
    pub fn build(
        sample: &CpuFrequencySample,
        snapshot: &MemorySnapshot,
        baseline: BaselineClock,
        budget: DisplayBudget,
    ) -> Self {
        let limit = budget.bar_limit();
        let cpu_factor = cpu_scale(budget, baseline);
        let cpus = sample
            .cores
            .iter()
            .enumerate()
            .map(|(index, &khz)| CpuBar::scale(index, khz, baseline, cpu_factor, limit))
            .collect();

        let mem_factor = memory_scale(budget, snapshot);

        Self {
            budget,
            cpus,
            memory: MemoryBar::memory(snapshot, mem_factor, limit),
            swap: MemoryBar::swap(snapshot, mem_factor, limit),
        }
    }
}
