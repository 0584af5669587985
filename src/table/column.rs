//! Column settings.
//!
//! A column owns no cells; it is the position-indexed bag of defaults and
//! width bounds that every cell starting in it sees.

use crate::style::Style;
use crate::text::{HorizontalAlignment, OverflowBehavior};

/// Settings of one table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Smallest width, padding included.
    pub min_width: usize,
    /// Hidden columns are left out of the render.
    pub visible: bool,
    /// Whether the column may give up width to meet the table's maximum.
    pub shrinkable: bool,
    /// Alignment for cells that do not set one.
    pub alignment: HorizontalAlignment,
    /// Overflow policy for cells that do not set one.
    pub overflow: Option<OverflowBehavior>,
    /// Colors under every cell of the column.
    pub style: Style,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            min_width: 0,
            visible: true,
            shrinkable: true,
            alignment: HorizontalAlignment::Default,
            overflow: None,
            style: Style::new(),
        }
    }
}

impl Column {
    /// Create a column with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum width.
    #[must_use]
    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    /// Hide the column.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Keep the column at its natural width when the table is too wide.
    #[must_use]
    pub fn fixed(mut self) -> Self {
        self.shrinkable = false;
        self
    }

    /// Set the default alignment.
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

    /// Set the colors.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}
