//! Table rows.

use std::collections::BTreeMap;

use crate::r#box::BorderTemplate;
use crate::style::Style;
use crate::text::{HorizontalAlignment, OverflowBehavior};

use super::cell::{Cell, ColumnSpan, Padding};

/// Section of the table a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Title,
    Header,
    Content,
    Footer,
}

/// Per-row border overrides. `None` keeps the table's setting.
///
/// `top`/`bottom` decide the separators next to the row; `Some(true)` forces
/// one the table would not draw, `Some(false)` suppresses one it would.
/// `left`, `right` and `inside` can only blank vertical borders the table
/// draws: the row keeps its width, the glyphs become spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BorderOverrides {
    pub top: Option<bool>,
    pub bottom: Option<bool>,
    pub left: Option<bool>,
    pub right: Option<bool>,
    pub inside: Option<bool>,
}

/// A row of cells keyed by starting column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: BTreeMap<usize, Cell>,
    /// Hidden rows are skipped entirely.
    pub visible: bool,
    /// Alignment for cells that do not set one.
    pub alignment: HorizontalAlignment,
    /// Overflow policy for cells that do not set one.
    pub overflow: Option<OverflowBehavior>,
    /// Padding for cells that do not set one.
    pub padding: Option<Padding>,
    /// Colors under every cell of the row.
    pub style: Style,
    pub borders: BorderOverrides,
    /// Template for this row's borders and adjacent separators.
    pub border_template: Option<BorderTemplate>,
    /// Colors for this row's borders and adjacent separators.
    pub border_style: Option<Style>,
}

impl Default for Row {
    fn default() -> Self {
        Self {
            cells: BTreeMap::new(),
            visible: true,
            alignment: HorizontalAlignment::Default,
            overflow: None,
            padding: None,
            style: Style::new(),
            borders: BorderOverrides::default(),
            border_template: None,
            border_style: None,
        }
    }
}

impl Row {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from cells placed side by side.
    #[must_use]
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        cells.into_iter().fold(Self::new(), Self::with_cell)
    }

    /// Create a row with one single-line-per-item cell for each string.
    #[must_use]
    pub fn from_texts<S: AsRef<str>>(texts: impl IntoIterator<Item = S>) -> Self {
        Self::from_cells(texts.into_iter().map(|text| Cell::new(text.as_ref())))
    }

    /// Append a cell after the last one.
    #[must_use]
    pub fn with_cell(mut self, cell: Cell) -> Self {
        self.push(cell);
        self
    }

    /// Append a cell after the last one.
    pub fn push(&mut self, cell: Cell) {
        let index = self.next_index();
        self.cells.insert(index, cell);
    }

    /// Place a cell at `column`, replacing any cell starting there.
    pub fn set_cell(&mut self, column: usize, cell: Cell) {
        self.cells.insert(column, cell);
    }

    /// Place a cell at `column`.
    #[must_use]
    pub fn with_cell_at(mut self, column: usize, cell: Cell) -> Self {
        self.set_cell(column, cell);
        self
    }

    /// The cell starting at `column`.
    #[must_use]
    pub fn cell(&self, column: usize) -> Option<&Cell> {
        self.cells.get(&column)
    }

    /// Cells with their starting column, left to right.
    pub fn cells(&self) -> impl Iterator<Item = (usize, &Cell)> {
        self.cells.iter().map(|(&column, cell)| (column, cell))
    }

    /// Number of cells placed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Columns this row needs: one past the last cell's claimed span.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.cells
            .iter()
            .next_back()
            .map_or(0, |(&column, cell)| column + cell.span.claimed())
    }

    fn next_index(&self) -> usize {
        self.cells.iter().next_back().map_or(0, |(&column, cell)| {
            column
                + match cell.span {
                    ColumnSpan::Fixed(n) => n.max(1),
                    ColumnSpan::Remaining => 1,
                }
        })
    }

    /// Hide the row.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Set the default alignment of the row's cells.
    #[must_use]
    pub fn alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the default overflow policy of the row's cells.
    #[must_use]
    pub fn overflow(mut self, overflow: OverflowBehavior) -> Self {
        self.overflow = Some(overflow);
        self
    }

    /// Set the default padding of the row's cells.
    #[must_use]
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set the row's colors.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Force or suppress the separator above the row.
    #[must_use]
    pub fn border_top(mut self, visible: bool) -> Self {
        self.borders.top = Some(visible);
        self
    }

    /// Force or suppress the separator below the row.
    #[must_use]
    pub fn border_bottom(mut self, visible: bool) -> Self {
        self.borders.bottom = Some(visible);
        self
    }

    /// Show or blank the left edge.
    #[must_use]
    pub fn border_left(mut self, visible: bool) -> Self {
        self.borders.left = Some(visible);
        self
    }

    /// Show or blank the right edge.
    #[must_use]
    pub fn border_right(mut self, visible: bool) -> Self {
        self.borders.right = Some(visible);
        self
    }

    /// Show or blank the dividers between cells.
    #[must_use]
    pub fn border_inside(mut self, visible: bool) -> Self {
        self.borders.inside = Some(visible);
        self
    }

    /// Draw this row with its own border template.
    #[must_use]
    pub fn border_template(mut self, template: BorderTemplate) -> Self {
        self.border_template = Some(template);
        self
    }

    /// Draw this row's borders in their own colors.
    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = Some(style);
        self
    }
}
