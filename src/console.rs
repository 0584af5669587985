//! Output sinks.
//!
//! The table renderer never touches the terminal. Everything it produces
//! goes through [`RenderSink`]: literal text, single border glyphs, and line
//! ends, each with an optional color pair. [`ConsoleSink`] is the sink that
//! writes to a terminal (or any `io::Write`), using ANSI color commands when
//! color is enabled.

use std::io::{self, Stdout, Write};

use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};

use crate::style::Style;
use crate::table::{RenderError, Table};
use crate::terminal;

/// Destination for rendered table output.
pub trait RenderSink {
    /// Write literal text.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying writer.
    fn write_text(&mut self, text: &str, style: &Style) -> io::Result<()>;

    /// Write one border glyph.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying writer.
    fn write_border(&mut self, glyph: char, style: &Style) -> io::Result<()>;

    /// Terminate the current line.
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying writer.
    fn end_line(&mut self) -> io::Result<()>;
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn write_text(&mut self, text: &str, style: &Style) -> io::Result<()> {
        (**self).write_text(text, style)
    }

    fn write_border(&mut self, glyph: char, style: &Style) -> io::Result<()> {
        (**self).write_border(glyph, style)
    }

    fn end_line(&mut self) -> io::Result<()> {
        (**self).end_line()
    }
}

/// Sink writing to an `io::Write`, optionally with ANSI colors.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    writer: W,
    color: bool,
    width: Option<usize>,
}

impl ConsoleSink<Stdout> {
    /// Sink for stdout, with color and width detected from the environment.
    #[must_use]
    pub fn stdout() -> Self {
        let width = terminal::is_terminal().then(terminal::get_terminal_width);
        Self {
            writer: io::stdout(),
            color: terminal::color_enabled(),
            width,
        }
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Sink for an arbitrary writer; no color, no width limit.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            color: false,
            width: None,
        }
    }

    /// Enable or disable ANSI color output.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Limit tables printed with [`ConsoleSink::print`] to `width` cells.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Whether ANSI colors are written.
    #[must_use]
    pub const fn is_color_enabled(&self) -> bool {
        self.color
    }

    /// Width limit applied by [`ConsoleSink::print`].
    #[must_use]
    pub const fn width(&self) -> Option<usize> {
        self.width
    }

    /// Render `table`, narrowed to this sink's width, and flush.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] when writing fails.
    pub fn print(&mut self, table: &Table) -> Result<(), RenderError> {
        let mut renderer = table.renderer();
        if let Some(width) = self.width {
            renderer = renderer.max_width(width);
        }
        while renderer.render_next_line(self)? {}
        self.writer.flush()?;
        Ok(())
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_styled(&mut self, text: &str, style: &Style) -> io::Result<()> {
        if !self.color || style.is_null() {
            return self.writer.write_all(text.as_bytes());
        }
        if let Some(color) = style.color {
            queue!(self.writer, SetForegroundColor(color.to_crossterm()))?;
        }
        if let Some(color) = style.bgcolor {
            queue!(self.writer, SetBackgroundColor(color.to_crossterm()))?;
        }
        queue!(self.writer, Print(text), ResetColor)
    }
}

impl<W: Write> RenderSink for ConsoleSink<W> {
    fn write_text(&mut self, text: &str, style: &Style) -> io::Result<()> {
        self.write_styled(text, style)
    }

    fn write_border(&mut self, glyph: char, style: &Style) -> io::Result<()> {
        let mut buf = [0u8; 4];
        self.write_styled(glyph.encode_utf8(&mut buf), style)
    }

    fn end_line(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\n")
    }
}
