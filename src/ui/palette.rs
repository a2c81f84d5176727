use ratatui::style::{Color, Modifier, Style};

/// The six styles a frame is drawn with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Default / reset: labels and end of every row
    pub text: Style,
    /// Emphasized default: brackets and free-fill
    pub emphasis: Style,
    pub cpu_bar: Style,
    /// CPU segments past the baseline clock
    pub over_baseline: Style,
    pub mem_used: Style,
    pub mem_cached: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: Style::default().fg(Color::Reset),
            emphasis: Style::default().fg(Color::Reset).add_modifier(Modifier::BOLD),
            cpu_bar: Style::default().fg(Color::Green),
            over_baseline: Style::default().fg(Color::Blue),
            mem_used: Style::default().fg(Color::Red),
            mem_cached: Style::default().fg(Color::Yellow),
        }
    }
}
