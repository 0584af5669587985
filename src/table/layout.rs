//! Render-time layout of a table.
//!
//! A [`Layout`] is rebuilt for every render pass. Building it walks the
//! displayed rows once, resolves every cell against its row, column and the
//! table, and maps cells onto the visible columns. Finalizing it negotiates
//! the column widths, measures row heights and decides which separator lines
//! sit between the rows.

use crate::r#box::{BorderSides, BorderTemplate, BoundaryMask};
use crate::style::Style;
use crate::text::{HorizontalAlignment, MultilineText, OverflowBehavior};

use super::Table;
use super::cell::{Cell, Padding};
use super::lines::CellLines;
use super::resolve::CellContext;
use super::row::{Row, RowKind};
use super::widths::{ColumnBounds, WidthNegotiator};

/// Fills the columns a row leaves uncovered.
static EMPTY_CELL: Cell = Cell::empty();

/// A cell with every setting resolved, placed on visible columns.
#[derive(Debug, Clone)]
pub(crate) struct LayoutCell<'t> {
    pub content: &'t MultilineText,
    /// First visible column.
    pub start: usize,
    /// Visible columns covered.
    pub span: usize,
    pub alignment: HorizontalAlignment,
    pub overflow: OverflowBehavior,
    pub padding: Padding,
    pub style: Style,
    /// Cells wide, dividers between spanned columns included.
    pub width: usize,
}

impl<'t> LayoutCell<'t> {
    fn preferred_width(&self) -> usize {
        self.content.size().width + self.padding.width()
    }

    /// Line producer for this cell.
    pub fn lines(&self) -> CellLines<'t> {
        CellLines::new(
            self.content,
            self.width,
            self.padding,
            self.alignment,
            self.overflow,
        )
    }
}

/// A displayed row.
#[derive(Debug, Clone)]
pub(crate) struct LayoutRow<'t> {
    pub kind: RowKind,
    /// Cells tiling the visible columns, left to right.
    pub cells: Vec<LayoutCell<'t>>,
    pub mask: BoundaryMask,
    pub template: BorderTemplate,
    pub border_style: Style,
    /// Separator overrides above and below.
    pub top: Option<bool>,
    pub bottom: Option<bool>,
    /// Whether the vertical borders are drawn or blanked.
    pub left: bool,
    pub right: bool,
    pub inside: bool,
    min_height: usize,
    pub height: usize,
}

/// One output step: every line of a row, or one separator line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LayoutItem {
    Row(usize),
    Separator {
        above: Option<usize>,
        below: Option<usize>,
    },
}

/// Ephemeral layout of one render pass.
#[derive(Debug, Clone)]
pub(crate) struct Layout<'t> {
    pub sides: BorderSides,
    pub template: BorderTemplate,
    pub border_style: Style,
    between_rows: bool,
    bounds: Vec<ColumnBounds>,
    min_width: Option<usize>,
    max_width: Option<usize>,
    pub rows: Vec<LayoutRow<'t>>,
    pub widths: Vec<usize>,
    pub items: Vec<LayoutItem>,
}

impl<'t> Layout<'t> {
    /// Resolve and place the cells of every displayed row.
    pub fn build(table: &'t Table) -> Self {
        let total = table.column_count();
        let mut visible_index = Vec::with_capacity(total);
        let mut bounds = Vec::new();
        for column in 0..total {
            let settings = table.columns.get(column);
            if settings.is_none_or(|c| c.visible) {
                visible_index.push(Some(bounds.len()));
                bounds.push(ColumnBounds {
                    min_width: settings.map_or(0, |c| c.min_width),
                    shrinkable: settings.is_none_or(|c| c.shrinkable),
                });
            } else {
                visible_index.push(None);
            }
        }

        let builder = RowBuilder {
            table,
            total,
            visible_index: &visible_index,
            visible: bounds.len(),
        };
        let mut rows: Vec<LayoutRow<'t>> = table
            .displayed_rows()
            .map(|(kind, row)| builder.build(kind, row))
            .collect();
        if rows.is_empty() {
            rows.push(builder.phantom());
        }

        log::debug!(
            "table layout: {} rows, {} columns ({} visible)",
            rows.len(),
            total,
            bounds.len()
        );

        Self {
            sides: table.borders,
            template: table.template,
            border_style: table.border_style,
            between_rows: table.display_border_between_rows,
            bounds,
            min_width: table.min_width,
            max_width: table.max_width,
            rows,
            widths: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Narrow the maximum table width.
    pub fn cap_width(&mut self, width: usize) {
        self.max_width = Some(self.max_width.map_or(width, |max| max.min(width)));
    }

    /// Negotiator loaded with every cell's preferred width.
    pub fn negotiator(&self) -> WidthNegotiator {
        let divider = usize::from(self.sides.contains(BorderSides::INSIDE_VERTICAL));
        let edges = usize::from(self.sides.contains(BorderSides::LEFT))
            + usize::from(self.sides.contains(BorderSides::RIGHT));
        let mut negotiator = WidthNegotiator::new(self.bounds.clone())
            .borders(divider, edges)
            .total_bounds(self.min_width, self.max_width);
        for cell in self.rows.iter().flat_map(|row| &row.cells) {
            negotiator.register(cell.start, cell.span, cell.preferred_width());
        }
        negotiator
    }

    /// Fix column widths, cell widths, row heights and the item sequence.
    pub fn finalize(&mut self) {
        self.widths = self.negotiator().finalize();
        log::debug!("negotiated column widths: {:?}", self.widths);

        let divider = usize::from(self.sides.contains(BorderSides::INSIDE_VERTICAL));
        for row in &mut self.rows {
            for cell in &mut row.cells {
                let columns = &self.widths[cell.start..cell.start + cell.span];
                cell.width = columns.iter().sum::<usize>() + (cell.span - 1) * divider;
            }
            row.height = row
                .cells
                .iter()
                .map(|cell| cell.lines().content_height())
                .max()
                .unwrap_or(0)
                .max(row.min_height);
        }

        let mut items = Vec::with_capacity(self.rows.len() * 2 + 1);
        if self.wants_separator(None, Some(0)) {
            items.push(LayoutItem::Separator {
                above: None,
                below: Some(0),
            });
        }
        for idx in 0..self.rows.len() {
            items.push(LayoutItem::Row(idx));
            let below = Some(idx + 1).filter(|&next| next < self.rows.len());
            if self.wants_separator(Some(idx), below) {
                items.push(LayoutItem::Separator {
                    above: Some(idx),
                    below,
                });
            }
        }
        self.items = items;
    }

    /// Whether a separator sits between `above` and `below`.
    ///
    /// A row override suppressing the separator wins, then one forcing it;
    /// otherwise the table's border sides and section structure decide.
    fn wants_separator(&self, above: Option<usize>, below: Option<usize>) -> bool {
        let above = above.and_then(|idx| self.rows.get(idx));
        let below = below.and_then(|idx| self.rows.get(idx));
        let overrides = [above.and_then(|r| r.bottom), below.and_then(|r| r.top)];
        if overrides.contains(&Some(false)) {
            return false;
        }
        if overrides.contains(&Some(true)) {
            return true;
        }
        match (above, below) {
            (None, Some(_)) => self.sides.contains(BorderSides::TOP),
            (Some(_), None) => self.sides.contains(BorderSides::BOTTOM),
            (Some(a), Some(b)) => {
                self.sides.contains(BorderSides::INSIDE_HORIZONTAL)
                    && (a.kind != b.kind || (a.kind == RowKind::Content && self.between_rows))
            }
            (None, None) => false,
        }
    }

    /// The separator line between `above` and `below`, with its colors.
    ///
    /// Template and colors come from the row below, else the row above.
    pub fn separator(&self, above: Option<usize>, below: Option<usize>) -> (String, Style) {
        let above = above.and_then(|idx| self.rows.get(idx));
        let below = below.and_then(|idx| self.rows.get(idx));
        let owner = below.or(above);
        let template = owner.map_or(self.template, |row| row.template);
        let style = owner.map_or(self.border_style, |row| row.border_style);

        let columns = self.widths.len();
        let above_mask = above.map_or_else(|| BoundaryMask::none(columns), |row| row.mask.clone());
        let below_mask = below.map_or_else(|| BoundaryMask::none(columns), |row| row.mask.clone());
        let stroke = template.stroke(above.is_some(), below.is_some());
        let line = template.separator(&self.widths, &above_mask, &below_mask, stroke, self.sides);
        (line, style)
    }
}

struct RowBuilder<'t, 'v> {
    table: &'t Table,
    total: usize,
    visible_index: &'v [Option<usize>],
    visible: usize,
}

impl<'t> RowBuilder<'t, '_> {
    fn build(&self, kind: RowKind, row: &'t Row) -> LayoutRow<'t> {
        let mut cells = Vec::new();
        let mut cursor = 0;
        for (start, cell) in row.cells() {
            if start < cursor {
                log::debug!(
                    "{kind:?} row: skipping cell at column {start}, covered by the cell before it"
                );
                continue;
            }
            for gap in cursor..start.min(self.total) {
                self.place(&mut cells, row, gap, 1, &EMPTY_CELL);
            }
            if start >= self.total {
                break;
            }
            let covered = cell.span.covered(start, self.total);
            self.place(&mut cells, row, start, covered, cell);
            cursor = start + covered;
        }
        for gap in cursor..self.total {
            self.place(&mut cells, row, gap, 1, &EMPTY_CELL);
        }

        let template = row.border_template.unwrap_or(self.table.template);
        let border_style = row.border_style.unwrap_or(self.table.border_style);
        let left = row.borders.left != Some(false);
        let right = row.borders.right != Some(false);
        let inside = row.borders.inside != Some(false);
        let mask = mask_for(&cells, self.visible, left, right, inside);
        LayoutRow {
            kind,
            cells,
            mask,
            template,
            border_style,
            top: row.borders.top,
            bottom: row.borders.bottom,
            left,
            right,
            inside,
            min_height: 1,
            height: 0,
        }
    }

    /// Zero-height stand-in body for a table with nothing to show.
    fn phantom(&self) -> LayoutRow<'t> {
        LayoutRow {
            kind: RowKind::Content,
            cells: Vec::new(),
            mask: BoundaryMask::edges(self.visible),
            template: self.table.template,
            border_style: self.table.border_style,
            top: None,
            bottom: None,
            left: true,
            right: true,
            inside: false,
            min_height: 0,
            height: 0,
        }
    }

    fn place(
        &self,
        cells: &mut Vec<LayoutCell<'t>>,
        row: &'t Row,
        start: usize,
        covered: usize,
        cell: &'t Cell,
    ) {
        let mut visible = self.visible_index[start..start + covered].iter().flatten();
        let Some(&first) = visible.next() else {
            return;
        };
        let span = 1 + visible.count();

        let ctx = CellContext::new(row, self.table.columns.get(start), self.table);
        cells.push(LayoutCell {
            content: &cell.content,
            start: first,
            span,
            alignment: ctx.alignment(cell),
            overflow: ctx.overflow(cell),
            padding: ctx.padding(cell),
            style: ctx.style(cell),
            width: 0,
        });
    }
}

fn mask_for(
    cells: &[LayoutCell<'_>],
    columns: usize,
    left: bool,
    right: bool,
    inside: bool,
) -> BoundaryMask {
    let mut mask = BoundaryMask::edges(columns);
    mask.left = left;
    mask.right = right;
    if inside {
        for cell in cells.iter().skip(1) {
            if let Some(boundary) = mask.inner.get_mut(cell.start - 1) {
                *boundary = true;
            }
        }
    }
    mask
}
