//! Table - bordered grid of multi-line cells.
//!
//! A [`Table`] has an optional title, an optional header row, content rows
//! and an optional footer row. Cells may span several columns; alignment,
//! overflow and padding fall back from the cell to its row, its column, the
//! table and finally global defaults.
//!
//! Rendering is incremental: [`Table::renderer`] returns a [`TableRenderer`]
//! that writes one line per call to any [`RenderSink`].
//!
//! # Examples
//!
//! ```
//! use console_tables::table::{Row, Table};
//!
//! let table = Table::new()
//!     .set_headers(["X"])
//!     .with_row(Row::from_texts(["42"]));
//!
//! assert_eq!(
//!     table.render_plain(),
//!     "+----+\n| X  |\n+----+\n| 42 |\n+----+\n"
//! );
//! ```
//!
//! ## Spans and titles
//!
//! ```
//! use console_tables::r#box::SINGLE;
//! use console_tables::table::{Cell, Row, Table};
//!
//! let table = Table::new()
//!     .title("Totals")
//!     .border_template(SINGLE)
//!     .with_row(Row::from_texts(["a", "b", "c"]))
//!     .with_row(Row::new().with_cell(Cell::new("a+b").span(2)).with_cell(Cell::new("c")));
//!
//! for line in table.render_lines() {
//!     println!("{}", console_tables::segment::line_text(&line));
//! }
//! ```

mod cell;
mod column;
mod layout;
mod lines;
mod render;
mod resolve;
mod row;
mod widths;

use std::fmt;

use crate::r#box::{BorderSides, BorderTemplate};
use crate::console::RenderSink;
use crate::segment::{Segment, SegmentSink};
use crate::style::Style;
use crate::text::{HorizontalAlignment, OverflowBehavior};

pub use cell::{Cell, ColumnSpan, Padding};
pub use column::Column;
pub use lines::{CellLines, LineState};
pub use render::{RenderError, RenderState, TableRenderer};
pub use resolve::{CellContext, DEFAULT_ALIGNMENT, DEFAULT_OVERFLOW, first_explicit};
pub use row::{BorderOverrides, Row, RowKind};
pub use widths::{ColumnBounds, WidthNegotiator};

/// A table with title, header, content rows and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    title: Option<Row>,
    header: Option<Row>,
    rows: Vec<Row>,
    footer: Option<Row>,
    columns: Vec<Column>,
    min_width: Option<usize>,
    max_width: Option<usize>,
    borders: BorderSides,
    display_title: bool,
    display_column_headers: bool,
    display_border_between_rows: bool,
    template: BorderTemplate,
    border_style: Style,
    padding: Padding,
    alignment: HorizontalAlignment,
    overflow: Option<OverflowBehavior>,
    style: Style,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            title: None,
            header: None,
            rows: Vec::new(),
            footer: None,
            columns: Vec::new(),
            min_width: None,
            max_width: None,
            borders: BorderSides::all(),
            display_title: true,
            display_column_headers: true,
            display_border_between_rows: false,
            template: BorderTemplate::default(),
            border_style: Style::new(),
            padding: Padding::default(),
            alignment: HorizontalAlignment::Default,
            overflow: None,
            style: Style::new(),
        }
    }
}

impl Table {
    /// Create an empty table with ASCII borders.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from header labels and records of strings.
    #[must_use]
    pub fn from_records<H, R, S>(headers: H, records: impl IntoIterator<Item = R>) -> Self
    where
        H: IntoIterator<Item = S>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        records
            .into_iter()
            .fold(Self::new().set_headers(headers), |table, record| {
                table.with_row(Row::from_texts(record))
            })
    }

    // ------------------------------------------------------------------
    // Rows and columns
    // ------------------------------------------------------------------

    /// Set a centered title spanning every column.
    #[must_use]
    pub fn title(self, title: &str) -> Self {
        let cell = Cell::new(title)
            .span_remaining()
            .alignment(HorizontalAlignment::Center);
        self.title_row(Row::from_cells([cell]))
    }

    /// Set the title row.
    #[must_use]
    pub fn title_row(mut self, row: Row) -> Self {
        self.title = Some(row);
        self
    }

    /// Set the header row from labels.
    #[must_use]
    pub fn set_headers<S: AsRef<str>>(self, headers: impl IntoIterator<Item = S>) -> Self {
        self.header_row(Row::from_texts(headers))
    }

    /// Set the header row.
    #[must_use]
    pub fn header_row(mut self, row: Row) -> Self {
        self.header = Some(row);
        self
    }

    /// Set the footer row.
    #[must_use]
    pub fn footer_row(mut self, row: Row) -> Self {
        self.footer = Some(row);
        self
    }

    /// Append a content row.
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Append a content row.
    #[must_use]
    pub fn with_row(mut self, row: Row) -> Self {
        self.add_row(row);
        self
    }

    /// Append content rows.
    #[must_use]
    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Append a column definition.
    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Append a column definition.
    #[must_use]
    pub fn with_column(mut self, column: Column) -> Self {
        self.add_column(column);
        self
    }

    /// Append column definitions.
    #[must_use]
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Content rows.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Column definitions.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns: the declared ones or as many as the widest row
    /// needs, whichever is more. Hidden columns count.
    #[must_use]
    pub fn column_count(&self) -> usize {
        [&self.title, &self.header, &self.footer]
            .into_iter()
            .flatten()
            .chain(&self.rows)
            .map(Row::column_count)
            .fold(self.columns.len(), usize::max)
    }

    /// Visible rows in display order, with their section.
    pub fn displayed_rows(&self) -> impl Iterator<Item = (RowKind, &Row)> {
        let title = self.title.as_ref().filter(|_| self.display_title);
        let header = self.header.as_ref().filter(|_| self.display_column_headers);
        title
            .map(|row| (RowKind::Title, row))
            .into_iter()
            .chain(header.map(|row| (RowKind::Header, row)))
            .chain(self.rows.iter().map(|row| (RowKind::Content, row)))
            .chain(self.footer.as_ref().map(|row| (RowKind::Footer, row)))
            .filter(|(_, row)| row.visible)
    }

    // ------------------------------------------------------------------
    // Options
    // ------------------------------------------------------------------

    /// Show or hide every border.
    #[must_use]
    pub fn display_border(mut self, display: bool) -> Self {
        self.borders = if display {
            BorderSides::all()
        } else {
            BorderSides::empty()
        };
        self
    }

    /// Choose exactly which border parts are drawn.
    #[must_use]
    pub fn borders(mut self, sides: BorderSides) -> Self {
        self.borders = sides;
        self
    }

    /// Show or hide the title row.
    #[must_use]
    pub fn display_title(mut self, display: bool) -> Self {
        self.display_title = display;
        self
    }

    /// Show or hide the header row.
    #[must_use]
    pub fn display_column_headers(mut self, display: bool) -> Self {
        self.display_column_headers = display;
        self
    }

    /// Draw a separator between every two content rows, not only between
    /// sections.
    #[must_use]
    pub fn display_border_between_rows(mut self, display: bool) -> Self {
        self.display_border_between_rows = display;
        self
    }

    /// Minimum total width, borders included.
    #[must_use]
    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Maximum total width, borders included. Column minimums win over it.
    #[must_use]
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set the border glyphs.
    #[must_use]
    pub fn border_template(mut self, template: BorderTemplate) -> Self {
        self.template = template;
        self
    }

    /// Set the border colors.
    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Set the default cell padding.
    #[must_use]
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the default cell alignment.
    #[must_use]
    pub fn alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the default overflow policy.
    #[must_use]
    pub fn overflow(mut self, overflow: OverflowBehavior) -> Self {
        self.overflow = Some(overflow);
        self
    }

    /// Set the colors under every cell.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Start an incremental render pass.
    #[must_use]
    pub fn renderer(&self) -> TableRenderer<'_> {
        TableRenderer::new(self)
    }

    /// Render every line to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] when the sink fails.
    pub fn render_to<S: RenderSink + ?Sized>(&self, sink: &mut S) -> Result<(), RenderError> {
        let mut renderer = self.renderer();
        while renderer.render_next_line(sink)? {}
        Ok(())
    }

    /// Rendered lines as styled segments.
    #[must_use]
    pub fn render_lines(&self) -> Vec<Vec<Segment>> {
        self.renderer().collect()
    }

    /// Rendered text without colors, every line terminated by `\n`.
    #[must_use]
    pub fn render_plain(&self) -> String {
        let mut sink = SegmentSink::new();
        // The in-memory sink cannot fail.
        let _ = self.render_to(&mut sink);
        sink.to_plain()
    }

    /// Column widths a render pass would use, padding included.
    #[must_use]
    pub fn column_widths(&self) -> Vec<usize> {
        self.renderer().column_widths().to_vec()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_plain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#box::{DOUBLE, SINGLE};

    #[test]
    fn test_minimal_table() {
        let table = Table::new()
            .set_headers(["X"])
            .with_row(Row::from_texts(["42"]));
        assert_eq!(
            table.render_plain(),
            "+----+\n| X  |\n+----+\n| 42 |\n+----+\n"
        );
    }

    #[test]
    fn test_column_count() {
        let table = Table::new()
            .with_column(Column::new())
            .with_row(Row::from_texts(["a", "b", "c"]))
            .title("t");
        assert_eq!(table.column_count(), 3);
        assert_eq!(Table::new().column_count(), 0);
        let declared = Table::new().with_columns([Column::new(), Column::new()]);
        assert_eq!(declared.column_count(), 2);
    }

    #[test]
    fn test_title_spans_all_columns() {
        let table = Table::new()
            .title("Title")
            .border_template(SINGLE)
            .with_row(Row::from_texts(["a", "b"]));
        let plain = table.render_plain();
        let lines: Vec<&str> = plain.lines().collect();
        assert_eq!(
            lines,
            [
                "┌───────┐",
                "│ Title │",
                "├───┬───┤",
                "│ a │ b │",
                "└───┴───┘",
            ]
        );
    }

    #[test]
    fn test_title_centered_when_wider() {
        let table = Table::new()
            .title("T")
            .with_row(Row::from_texts(["aaa", "bbb"]));
        let plain = table.render_plain();
        assert_eq!(plain.lines().nth(1), Some("|     T     |"));
    }

    #[test]
    fn test_hidden_sections() {
        let table = Table::new()
            .title("T")
            .set_headers(["h"])
            .display_title(false)
            .display_column_headers(false)
            .with_row(Row::from_texts(["x"]));
        assert_eq!(table.render_plain(), "+---+\n| x |\n+---+\n");
    }

    #[test]
    fn test_hidden_row_skipped() {
        let table = Table::new()
            .with_row(Row::from_texts(["a"]))
            .with_row(Row::from_texts(["b"]).hidden());
        assert_eq!(table.render_plain(), "+---+\n| a |\n+---+\n");
    }

    #[test]
    fn test_footer_separated() {
        let table = Table::new()
            .with_row(Row::from_texts(["1"]))
            .footer_row(Row::from_texts(["Σ"]));
        assert_eq!(
            table.render_plain(),
            "+---+\n| 1 |\n+---+\n| Σ |\n+---+\n"
        );
    }

    #[test]
    fn test_borderless() {
        let table = Table::new()
            .display_border(false)
            .with_row(Row::from_texts(["a", "b"]))
            .with_row(Row::from_texts(["c", "d"]));
        assert_eq!(table.render_plain(), " a  b \n c  d \n");
    }

    #[test]
    fn test_between_rows() {
        let table = Table::new()
            .border_template(DOUBLE)
            .display_border_between_rows(true)
            .with_row(Row::from_texts(["a"]))
            .with_row(Row::from_texts(["b"]));
        assert_eq!(
            table.render_plain(),
            "╔═══╗\n║ a ║\n╠═══╣\n║ b ║\n╚═══╝\n"
        );
    }

    #[test]
    fn test_from_records() {
        let table = Table::from_records(["name", "n"], [["ab", "1"], ["c", "22"]]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.column_widths(), [6, 4]);
    }

    #[test]
    fn test_display_matches_render_plain() {
        let table = Table::new().with_row(Row::from_texts(["x"]));
        assert_eq!(table.to_string(), table.render_plain());
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(Table::new().render_plain(), "++\n++\n");
    }
}
