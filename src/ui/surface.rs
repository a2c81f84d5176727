//! Rendering surface: the terminal capabilities a frame is drawn through.
//!
//! Every call is self-contained. `set_style` resets attributes before
//! applying the new ones, so no color or weight leaks from one call to the
//! next regardless of what the terminal was left in.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color as CColor, Print, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use ratatui::style::{Color, Modifier, Style};

pub trait Surface {
    /// (columns, rows)
    fn size(&self) -> io::Result<(u16, u16)>;
    fn clear_screen(&mut self) -> io::Result<()>;
    /// Zero-based column and row
    fn move_cursor(&mut self, x: u16, y: u16) -> io::Result<()>;
    fn set_style(&mut self, style: Style) -> io::Result<()>;
    fn print(&mut self, text: &str) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

/// ANSI terminal surface over any writer, sized by the controlling terminal
pub struct TerminalSurface<W: Write> {
    out: W,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        queue!(self.out, MoveTo(x, y))
    }

    fn set_style(&mut self, style: Style) -> io::Result<()> {
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        if let Some(fg) = style.fg {
            queue!(self.out, SetForegroundColor(to_crossterm(fg)))?;
        }
        if style.add_modifier.contains(Modifier::BOLD) {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        Ok(())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// ratatui's basic colors are the dim ANSI set, its `Light*` colors the
/// bright set; crossterm names them `Dark*` and plain respectively.
fn to_crossterm(color: Color) -> CColor {
    match color {
        Color::Reset => CColor::Reset,
        Color::Black => CColor::Black,
        Color::Red => CColor::DarkRed,
        Color::Green => CColor::DarkGreen,
        Color::Yellow => CColor::DarkYellow,
        Color::Blue => CColor::DarkBlue,
        Color::Magenta => CColor::DarkMagenta,
        Color::Cyan => CColor::DarkCyan,
        Color::Gray => CColor::Grey,
        Color::DarkGray => CColor::DarkGrey,
        Color::LightRed => CColor::Red,
        Color::LightGreen => CColor::Green,
        Color::LightYellow => CColor::Yellow,
        Color::LightBlue => CColor::Blue,
        Color::LightMagenta => CColor::Magenta,
        Color::LightCyan => CColor::Cyan,
        Color::White => CColor::White,
        Color::Rgb(r, g, b) => CColor::Rgb { r, g, b },
        Color::Indexed(i) => CColor::AnsiValue(i),
    }
}
