//! Line-by-line production of one cell.
//!
//! [`CellLines`] yields exactly `height` lines, each exactly `width` cells
//! wide: blank lines for the top padding, then the content re-flowed to the
//! space between the left and right padding and aligned inside it, then blank
//! lines until the row's height is reached.

use crate::cells::{blank, fit_to_width};
use crate::text::{DisplayLines, HorizontalAlignment, MultilineText, OverflowBehavior, align_line};

use super::cell::Padding;

/// Where a [`CellLines`] is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineState {
    /// Created, nothing computed yet.
    Uninitialized,
    /// Content flowed, no line emitted since the last reset.
    Ready,
    /// At least one line emitted.
    Emitting,
    /// All `height` lines emitted.
    Exhausted,
}

/// Lazy, restartable producer of a cell's display lines.
#[derive(Debug, Clone)]
pub struct CellLines<'a> {
    content: &'a MultilineText,
    width: usize,
    height: usize,
    padding: Padding,
    alignment: HorizontalAlignment,
    overflow: OverflowBehavior,
    state: LineState,
    flowed: Option<DisplayLines<'a>>,
    index: usize,
}

impl<'a> CellLines<'a> {
    /// Lines of `content` in a cell `width` cells wide.
    ///
    /// The height starts as the cell's own [`CellLines::content_height`];
    /// rows set their common height with [`CellLines::with_height`].
    #[must_use]
    pub fn new(
        content: &'a MultilineText,
        width: usize,
        padding: Padding,
        alignment: HorizontalAlignment,
        overflow: OverflowBehavior,
    ) -> Self {
        let mut lines = Self {
            content,
            width,
            height: 0,
            padding,
            alignment,
            overflow,
            state: LineState::Uninitialized,
            flowed: None,
            index: 0,
        };
        lines.height = lines.content_height();
        lines
    }

    /// Emit `height` lines in total.
    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Width left for content between the paddings.
    #[must_use]
    pub const fn content_width(&self) -> usize {
        self.width.saturating_sub(self.padding.width())
    }

    /// Lines the cell needs: flowed content plus top and bottom padding.
    #[must_use]
    pub fn content_height(&self) -> usize {
        let content = self
            .content
            .display_lines(self.content_width(), self.overflow)
            .count();
        content + self.padding.height()
    }

    /// Lines emitted per cycle.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> LineState {
        self.state
    }

    /// Restart from the first line.
    pub fn reset(&mut self) {
        self.flowed = Some(
            self.content
                .display_lines(self.content_width(), self.overflow),
        );
        self.index = 0;
        self.state = LineState::Ready;
    }

    fn content_line(&self, line: &str) -> String {
        let aligned = align_line(line, self.content_width(), self.alignment);
        let padded = format!(
            "{}{aligned}{}",
            blank(self.padding.left),
            blank(self.padding.right)
        );
        fit_to_width(&padded, self.width)
    }
}

impl Iterator for CellLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.state {
            LineState::Uninitialized => self.reset(),
            LineState::Exhausted => return None,
            LineState::Ready | LineState::Emitting => {}
        }
        if self.index >= self.height {
            self.state = LineState::Exhausted;
            return None;
        }

        let index = self.index;
        self.index += 1;
        self.state = LineState::Emitting;

        let in_padding = index < self.padding.top
            || index >= self.height.saturating_sub(self.padding.bottom);
        if in_padding {
            return Some(blank(self.width));
        }
        let line = self.flowed.as_mut().and_then(Iterator::next);
        Some(match line {
            Some(line) => self.content_line(&line),
            None => blank(self.width),
        })
    }
}
