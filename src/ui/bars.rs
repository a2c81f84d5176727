use ratatui::text::{Line, Span};

use crate::scale::{Chart, CpuBar, MemoryBar};
use crate::ui::align::right_align;
use crate::ui::palette::Palette;

/// Column on which the used-MB figure of a memory row ends
pub const VALUE_FIELD_END: usize = 16;
/// Figures narrower than this are padded as if they were this wide
pub const MIN_VALUE_WIDTH: usize = 2;

/// One positioned line of a frame
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub y: u16,
    pub line: Line<'static>,
}

/// Place every row of a chart:
///
///   row 0            (blank)
///   rows 1..=n       CPU 0 .. CPU n-1
///   row n+1          (blank)
///   row n+2          MEMORY
///   row n+3          SWAP, only when the system has swap
pub fn layout(chart: &Chart, palette: &Palette) -> Vec<Row> {
    let cores = chart.cpus.len();
    let mut rows: Vec<Row> = chart
        .cpus
        .iter()
        .enumerate()
        .map(|(i, bar)| Row {
            y: screen_row(i + 1),
            line: cpu_line(bar, palette),
        })
        .collect();

    rows.push(Row {
        y: screen_row(cores + 2),
        line: meter_line(&chart.memory, palette),
    });

    if let Some(swap) = &chart.swap {
        rows.push(Row {
            y: screen_row(cores + 3),
            line: meter_line(swap, palette),
        });
    }

    rows
}

fn screen_row(index: usize) -> u16 {
    u16::try_from(index).unwrap_or(u16::MAX)
}

/// "  CPU 3:   2400000 MHz [||||||||||||||||||||]"
///
/// The reading is printed as the interface reports it (kHz on Linux) under
/// the historical "MHz" unit. Green up to the baseline threshold, blue past it.
pub fn cpu_line(bar: &CpuBar, palette: &Palette) -> Line<'static> {
    let label = format!("  CPU {}:   {} MHz ", bar.index, bar.display_khz());

    Line::from(vec![
        Span::styled(label, palette.text),
        Span::styled("[", palette.emphasis),
        Span::styled("|".repeat(bar.normal_len()), palette.cpu_bar),
        Span::styled("|".repeat(bar.over_baseline_len()), palette.over_baseline),
        Span::styled("]", palette.emphasis),
    ])
}

/// "  MEMORY:   4096 MB [||||used||||cached      ]"
pub fn meter_line(bar: &MemoryBar, palette: &Palette) -> Line<'static> {
    let label = right_align(
        &format!("  {}:", bar.kind.label()),
        &bar.used_mb.to_string(),
        VALUE_FIELD_END,
        MIN_VALUE_WIDTH,
    );

    Line::from(vec![
        Span::styled(format!("{} MB ", label), palette.text),
        Span::styled("[", palette.emphasis),
        Span::styled("|".repeat(bar.used), palette.mem_used),
        Span::styled("|".repeat(bar.cached), palette.mem_cached),
        Span::styled(" ".repeat(bar.free_fill), palette.emphasis),
        Span::styled("]", palette.emphasis),
    ])
}
