//! Effective cell settings.
//!
//! Cells, rows, columns and the table are plain data holders. A setting left
//! unset on a cell falls back, in order, to the row, the column the cell
//! starts in, the table and finally a global default. The first level that
//! sets a value wins.

use crate::style::Style;
use crate::text::{HorizontalAlignment, OverflowBehavior};

use super::Table;
use super::cell::{Cell, Padding};
use super::column::Column;
use super::row::Row;

/// Alignment used when no level sets one.
pub const DEFAULT_ALIGNMENT: HorizontalAlignment = HorizontalAlignment::Left;

/// Overflow policy used when no level sets one.
pub const DEFAULT_OVERFLOW: OverflowBehavior = OverflowBehavior::WrapWord;

/// First `Some` in `chain`, else `fallback`.
pub fn first_explicit<T>(chain: impl IntoIterator<Item = Option<T>>, fallback: T) -> T {
    chain.into_iter().flatten().next().unwrap_or(fallback)
}

/// Everything a cell's settings can fall back to.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
    pub row: &'a Row,
    /// The column the cell starts in, when the table declares one.
    pub column: Option<&'a Column>,
    pub table: &'a Table,
}

impl<'a> CellContext<'a> {
    /// Create a context.
    #[must_use]
    pub const fn new(row: &'a Row, column: Option<&'a Column>, table: &'a Table) -> Self {
        Self { row, column, table }
    }

    /// Effective alignment; never `HorizontalAlignment::Default`.
    #[must_use]
    pub fn alignment(&self, cell: &Cell) -> HorizontalAlignment {
        first_explicit(
            [
                cell.alignment.explicit(),
                self.row.alignment.explicit(),
                self.column.and_then(|column| column.alignment.explicit()),
                self.table.alignment.explicit(),
            ],
            DEFAULT_ALIGNMENT,
        )
    }

    /// Effective overflow policy.
    #[must_use]
    pub fn overflow(&self, cell: &Cell) -> OverflowBehavior {
        first_explicit(
            [
                cell.overflow,
                self.row.overflow,
                self.column.and_then(|column| column.overflow),
                self.table.overflow,
            ],
            DEFAULT_OVERFLOW,
        )
    }

    /// Effective padding. The table always carries one.
    #[must_use]
    pub fn padding(&self, cell: &Cell) -> Padding {
        first_explicit([cell.padding, self.row.padding], self.table.padding)
    }

    /// Colors layered table, row, column, cell; later levels win per color.
    #[must_use]
    pub fn style(&self, cell: &Cell) -> Style {
        let mut style = self.table.style.combine(&self.row.style);
        if let Some(column) = self.column {
            style = style.combine(&column.style);
        }
        style.combine(&cell.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_first_explicit() {
        assert_eq!(first_explicit([None, Some(2), Some(3)], 9), 2);
        assert_eq!(first_explicit([None::<u8>, None], 9), 9);
    }

    #[test]
    fn test_global_defaults() {
        let table = Table::new();
        let row = Row::new();
        let ctx = CellContext::new(&row, None, &table);
        let cell = Cell::new("x");
        assert_eq!(ctx.alignment(&cell), HorizontalAlignment::Left);
        assert_eq!(ctx.overflow(&cell), OverflowBehavior::WrapWord);
        assert_eq!(ctx.padding(&cell), Padding::default());
    }

    #[test]
    fn test_alignment_chain_order() {
        let table = Table::new().alignment(HorizontalAlignment::Stretch);
        let column = Column::new().alignment(HorizontalAlignment::Center);
        let row = Row::new().alignment(HorizontalAlignment::Right);
        let cell = Cell::new("x");

        let ctx = CellContext::new(&row, Some(&column), &table);
        assert_eq!(ctx.alignment(&cell), HorizontalAlignment::Right);

        let plain_row = Row::new();
        let ctx = CellContext::new(&plain_row, Some(&column), &table);
        assert_eq!(ctx.alignment(&cell), HorizontalAlignment::Center);

        let ctx = CellContext::new(&plain_row, None, &table);
        assert_eq!(ctx.alignment(&cell), HorizontalAlignment::Stretch);

        let cell = cell.alignment(HorizontalAlignment::Left);
        let ctx = CellContext::new(&row, Some(&column), &table);
        assert_eq!(ctx.alignment(&cell), HorizontalAlignment::Left);
    }

    #[test]
    fn test_overflow_chain_order() {
        let table = Table::new().overflow(OverflowBehavior::CutChar);
        let column = Column::new().overflow(OverflowBehavior::WrapChar);
        let row = Row::new();
        let ctx = CellContext::new(&row, Some(&column), &table);
        assert_eq!(ctx.overflow(&Cell::new("x")), OverflowBehavior::WrapChar);
        let ctx = CellContext::new(&row, None, &table);
        assert_eq!(ctx.overflow(&Cell::new("x")), OverflowBehavior::CutChar);
    }

    #[test]
    fn test_padding_chain() {
        let table = Table::new().padding(Padding::new(2, 2, 1, 1));
        let row = Row::new().padding(Padding::none());
        let ctx = CellContext::new(&row, None, &table);
        assert_eq!(ctx.padding(&Cell::new("x")), Padding::none());
        let plain_row = Row::new();
        let ctx = CellContext::new(&plain_row, None, &table);
        assert_eq!(ctx.padding(&Cell::new("x")), Padding::new(2, 2, 1, 1));
    }

    #[test]
    fn test_style_layering() {
        let table = Table::new().style(Style::new().color(Color::White).bgcolor(Color::Black));
        let row = Row::new().style(Style::new().bgcolor(Color::Blue));
        let cell = Cell::new("x").style(Style::new().color(Color::Red));
        let ctx = CellContext::new(&row, None, &table);
        let style = ctx.style(&cell);
        assert_eq!(style.color, Some(Color::Red));
        assert_eq!(style.bgcolor, Some(Color::Blue));
    }
}
