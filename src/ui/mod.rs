pub mod align;
pub mod bars;
pub mod palette;
pub mod surface;

use std::io;

use crate::scale::Chart;

pub use palette::Palette;
pub use surface::{Surface, TerminalSurface};

/// Clear the surface and draw one full frame.
///
/// Each non-empty span sets its own style; every row ends back on the
/// default style.
pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    chart: &Chart,
    palette: &Palette,
) -> io::Result<()> {
    surface.clear_screen()?;
    surface.move_cursor(0, 0)?;
    surface.set_style(palette.text)?;

    for row in bars::layout(chart, palette) {
        surface.move_cursor(0, row.y)?;
        for span in &row.line.spans {
            if span.content.is_empty() {
                continue;
            }
            surface.set_style(span.style)?;
            surface.print(&span.content)?;
        }
        surface.set_style(palette.text)?;
    }

    surface.flush()
}
