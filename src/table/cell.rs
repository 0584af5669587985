//! Table cells.

use crate::style::Style;
use crate::text::{HorizontalAlignment, MultilineText, OverflowBehavior};

/// Number of columns a cell occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnSpan {
    /// A fixed number of columns. `Fixed(0)` behaves as `Fixed(1)`.
    Fixed(usize),
    /// Every column from the cell's start to the end of the row.
    Remaining,
}

impl ColumnSpan {
    /// Columns covered when the cell starts at `start` in a row of `total`
    /// columns. Always at least one.
    #[must_use]
    pub fn covered(self, start: usize, total: usize) -> usize {
        let available = total.saturating_sub(start).max(1);
        match self {
            Self::Fixed(n) => n.clamp(1, available),
            Self::Remaining => available,
        }
    }

    /// Columns this span claims when counting the table's columns.
    ///
    /// `Remaining` claims one: it adapts to whatever the other rows need.
    #[must_use]
    pub const fn claimed(self) -> usize {
        match self {
            Self::Fixed(0) | Self::Remaining => 1,
            Self::Fixed(n) => n,
        }
    }
}

impl Default for ColumnSpan {
    fn default() -> Self {
        Self::Fixed(1)
    }
}

/// Blank space around a cell's content, in cells and lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Padding {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
}

impl Padding {
    /// Create padding from each side.
    #[must_use]
    pub const fn new(left: usize, right: usize, top: usize, bottom: usize) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Left and right padding only.
    #[must_use]
    pub const fn horizontal(width: usize) -> Self {
        Self::new(width, width, 0, 0)
    }

    /// No padding.
    #[must_use]
    pub const fn none() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Left plus right.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.left + self.right
    }

    /// Top plus bottom.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.top + self.bottom
    }
}

impl Default for Padding {
    /// One cell on each side, no blank lines.
    fn default() -> Self {
        Self::horizontal(1)
    }
}

/// A single table cell.
///
/// Everything but the content is optional: unset alignment, overflow and
/// padding are inherited from the row, the column and the table when the
/// table is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Text shown in the cell.
    pub content: MultilineText,
    /// Alignment; `Default` inherits.
    pub alignment: HorizontalAlignment,
    /// Columns covered.
    pub span: ColumnSpan,
    /// Overflow policy; `None` inherits.
    pub overflow: Option<OverflowBehavior>,
    /// Padding; `None` inherits.
    pub padding: Option<Padding>,
    /// Colors, layered over the row's and column's.
    pub style: Style,
}

impl Cell {
    /// Cell showing `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self::from_content(MultilineText::new(text))
    }

    /// Cell showing one line per item.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_content(MultilineText::from_lines(lines))
    }

    /// Cell with existing content.
    #[must_use]
    pub const fn from_content(content: MultilineText) -> Self {
        Self {
            content,
            alignment: HorizontalAlignment::Default,
            span: ColumnSpan::Fixed(1),
            overflow: None,
            padding: None,
            style: Style::new(),
        }
    }

    /// Cell with no content.
    #[must_use]
    pub const fn empty() -> Self {
        Self::from_content(MultilineText::empty())
    }

    /// Set the alignment.
    #[must_use]
    pub fn alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Span `columns` columns.
    #[must_use]
    pub fn span(mut self, columns: usize) -> Self {
        self.span = ColumnSpan::Fixed(columns);
        self
    }

    /// Span to the end of the row.
    #[must_use]
    pub fn span_remaining(mut self) -> Self {
        self.span = ColumnSpan::Remaining;
        self
    }

    /// Set the overflow policy.
    #[must_use]
    pub fn overflow(mut self, overflow: OverflowBehavior) -> Self {
        self.overflow = Some(overflow);
        self
    }

    /// Set the padding.
    #[must_use]
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set the colors.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}
