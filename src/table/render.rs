//! Streaming table renderer.
//!
//! [`TableRenderer`] is a pull-based state machine. Each call to
//! [`TableRenderer::render_next_line`] writes exactly one line to a
//! [`RenderSink`], so callers can interleave table output with anything else
//! and never hold the whole rendered table in memory.
//!
//! ```text
//! Built ──finalize_columns──▶ ColumnsFinalized ──▶ Rendering { item, line } ──▶ Done
//! ```

use std::fmt;
use std::io;

use crate::r#box::BorderSides;
use crate::cells::blank;
use crate::console::RenderSink;
use crate::segment::{Segment, SegmentSink};

use super::Table;
use super::layout::{Layout, LayoutItem};
use super::lines::CellLines;

/// Error writing a table to a sink.
#[derive(Debug)]
pub enum RenderError {
    /// The sink failed to write.
    Io(io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to write table output: {err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Progress of a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderState {
    /// Rows collected, widths not negotiated yet.
    Built,
    /// Widths fixed for the rest of the pass.
    ColumnsFinalized,
    /// Next output is line `line` of layout item `item`.
    Rendering { item: usize, line: usize },
    /// Every line written.
    Done,
}

/// One render pass over a [`Table`].
///
/// The table must not change while the renderer is alive; the borrow checker
/// enforces that.
#[derive(Debug)]
pub struct TableRenderer<'t> {
    layout: Layout<'t>,
    active: Vec<CellLines<'t>>,
    /// Cell texts of the row line at `current`, kept until written.
    texts: Vec<String>,
    current: Option<(usize, usize)>,
    state: RenderState,
    #[cfg(feature = "tracing")]
    span: tracing::Span,
}

impl<'t> TableRenderer<'t> {
    /// Start a render pass over `table`.
    #[must_use]
    pub fn new(table: &'t Table) -> Self {
        Self {
            layout: Layout::build(table),
            active: Vec::new(),
            texts: Vec::new(),
            current: None,
            state: RenderState::Built,
            #[cfg(feature = "tracing")]
            span: tracing::Span::none(),
        }
    }

    /// Keep the rendered table within `width` cells, on top of the table's own
    /// maximum. Has no effect once the columns are finalized.
    #[must_use]
    pub fn max_width(mut self, width: usize) -> Self {
        if self.state == RenderState::Built {
            self.layout.cap_width(width);
        }
        self
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> RenderState {
        self.state
    }

    /// True once every line has been written.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == RenderState::Done
    }

    /// Negotiate the column widths. Called implicitly by the first
    /// [`TableRenderer::render_next_line`]; later calls do nothing.
    pub fn finalize_columns(&mut self) {
        if self.state != RenderState::Built {
            return;
        }
        self.layout.finalize();
        #[cfg(feature = "tracing")]
        {
            self.span = tracing::debug_span!(
                "table_render",
                columns = self.layout.widths.len(),
                items = self.layout.items.len()
            );
        }
        self.state = RenderState::ColumnsFinalized;
    }

    /// Final column widths, padding included, borders excluded.
    pub fn column_widths(&mut self) -> &[usize] {
        self.finalize_columns();
        &self.layout.widths
    }

    /// Write the next line to `sink`.
    ///
    /// Returns `Ok(false)` once the table is complete. After a failed write
    /// the next call writes the same line again.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] when the sink fails.
    pub fn render_next_line<S: RenderSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<bool, RenderError> {
        self.finalize_columns();
        #[cfg(feature = "tracing")]
        let _entered = self.span.clone().entered();

        loop {
            let (item, line) = match self.state {
                RenderState::Built | RenderState::ColumnsFinalized => (0, 0),
                RenderState::Rendering { item, line } => (item, line),
                RenderState::Done => return Ok(false),
            };
            let Some(&entry) = self.layout.items.get(item) else {
                log::debug!("table render complete after {item} items");
                self.state = RenderState::Done;
                return Ok(false);
            };

            match entry {
                LayoutItem::Separator { above, below } => {
                    let (text, style) = self.layout.separator(above, below);
                    for glyph in text.chars() {
                        sink.write_border(glyph, &style)?;
                    }
                    sink.end_line()?;
                    log::trace!("separator line: {text}");
                    self.state = RenderState::Rendering {
                        item: item + 1,
                        line: 0,
                    };
                    return Ok(true);
                }
                LayoutItem::Row(row) => {
                    if line >= self.layout.rows[row].height {
                        self.state = RenderState::Rendering {
                            item: item + 1,
                            line: 0,
                        };
                        continue;
                    }
                    if self.current != Some((item, line)) {
                        if line == 0 {
                            self.start_row(row);
                        }
                        self.pull_texts(row);
                        self.current = Some((item, line));
                    }
                    self.write_row_line(row, sink)?;
                    self.state = RenderState::Rendering {
                        item,
                        line: line + 1,
                    };
                    return Ok(true);
                }
            }
        }
    }

    fn start_row(&mut self, row: usize) {
        let row = &self.layout.rows[row];
        self.active = row
            .cells
            .iter()
            .map(|cell| cell.lines().with_height(row.height))
            .collect();
    }

    fn pull_texts(&mut self, row: usize) {
        let cells = &self.layout.rows[row].cells;
        self.texts = cells
            .iter()
            .zip(&mut self.active)
            .map(|(cell, lines)| lines.next().unwrap_or_else(|| blank(cell.width)))
            .collect();
    }

    fn write_row_line<S: RenderSink + ?Sized>(&self, row: usize, sink: &mut S) -> io::Result<()> {
        let sides = self.layout.sides;
        let row = &self.layout.rows[row];
        let style = &row.border_style;
        let glyph = |visible: bool, glyph: char| if visible { glyph } else { ' ' };

        if sides.contains(BorderSides::LEFT) {
            sink.write_border(glyph(row.left, row.template.left()), style)?;
        }
        for (idx, (cell, text)) in row.cells.iter().zip(&self.texts).enumerate() {
            sink.write_text(text, &cell.style)?;
            if sides.contains(BorderSides::INSIDE_VERTICAL) && idx + 1 < row.cells.len() {
                sink.write_border(glyph(row.inside, row.template.vertical()), style)?;
            }
        }
        if sides.contains(BorderSides::RIGHT) {
            sink.write_border(glyph(row.right, row.template.right()), style)?;
        }
        sink.end_line()?;
        log::trace!("{:?} row line written", row.kind);
        Ok(())
    }
}

impl Iterator for TableRenderer<'_> {
    type Item = Vec<Segment>;

    fn next(&mut self) -> Option<Vec<Segment>> {
        let mut sink = SegmentSink::new();
        match self.render_next_line(&mut sink) {
            Ok(true) => sink.take_lines().pop(),
            Ok(false) | Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Row;

    struct FailingSink;

    impl RenderSink for FailingSink {
        fn write_text(&mut self, _: &str, _: &crate::style::Style) -> io::Result<()> {
            Err(io::Error::other("closed"))
        }

        fn write_border(&mut self, _: char, _: &crate::style::Style) -> io::Result<()> {
            Err(io::Error::other("closed"))
        }

        fn end_line(&mut self) -> io::Result<()> {
            Err(io::Error::other("closed"))
        }
    }

    fn minimal() -> Table {
        Table::new()
            .set_headers(["X"])
            .with_row(Row::from_texts(["42"]))
    }

    #[test]
    fn test_state_transitions() {
        let table = minimal();
        let mut renderer = table.renderer();
        assert_eq!(renderer.state(), RenderState::Built);
        renderer.finalize_columns();
        assert_eq!(renderer.state(), RenderState::ColumnsFinalized);

        let mut sink = SegmentSink::new();
        let mut written = 0;
        while renderer.render_next_line(&mut sink).unwrap() {
            written += 1;
            assert!(matches!(renderer.state(), RenderState::Rendering { .. }));
        }
        assert_eq!(written, 5);
        assert!(renderer.is_done());
        assert!(!renderer.render_next_line(&mut sink).unwrap());
    }

    #[test]
    fn test_minimal_table_lines() {
        let table = minimal();
        let mut sink = SegmentSink::new();
        let mut renderer = table.renderer();
        while renderer.render_next_line(&mut sink).unwrap() {}
        assert_eq!(sink.to_plain(), "+----+\n| X  |\n+----+\n| 42 |\n+----+\n");
    }

    #[test]
    fn test_multi_line_rows_stream_one_line_at_a_time() {
        let table = Table::new().with_row(Row::from_texts(["a\nb", "c"]));
        let lines: Vec<String> = table
            .renderer()
            .map(|line| crate::segment::line_text(&line))
            .collect();
        assert_eq!(lines, ["+---+---+", "| a | c |", "| b |   |", "+---+---+"]);
    }

    #[test]
    fn test_max_width_caps_the_table() {
        let table = Table::new().with_row(Row::from_texts(["a fairly long cell"]));
        let mut renderer = table.renderer().max_width(10);
        assert_eq!(renderer.column_widths(), [8]);
        for line in renderer {
            assert_eq!(crate::segment::line_length(&line), 10);
        }
    }

    #[test]
    fn test_max_width_after_finalize_is_ignored() {
        let table = Table::new().with_row(Row::from_texts(["abcdef"]));
        let mut renderer = table.renderer();
        renderer.finalize_columns();
        let mut renderer = renderer.max_width(3);
        assert_eq!(renderer.column_widths(), [8]);
    }

    #[test]
    fn test_sink_errors_propagate() {
        let table = minimal();
        let mut renderer = table.renderer();
        let err = renderer.render_next_line(&mut FailingSink).unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
        assert!(err.to_string().contains("closed"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_failed_write_retries_same_line() {
        let table = minimal();
        let mut renderer = table.renderer();
        assert!(renderer.render_next_line(&mut FailingSink).is_err());
        let mut sink = SegmentSink::new();
        assert!(renderer.render_next_line(&mut sink).unwrap());
        assert_eq!(sink.to_plain(), "+----+\n");
    }
}
