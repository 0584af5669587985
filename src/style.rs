//! Foreground/background color pairs.
//!
//! A [`Style`] is what the table attaches to cells, rows, columns and
//! borders. Styles layer: [`Style::combine`] lets the more specific level
//! override only the colors it sets.

use crate::color::Color;

/// Optional foreground and background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color.
    pub color: Option<Color>,
    /// Background color.
    pub bgcolor: Option<Color>,
}

impl Style {
    /// A style that sets nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            color: None,
            bgcolor: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bgcolor(mut self, color: Color) -> Self {
        self.bgcolor = Some(color);
        self
    }

    /// True when neither color is set.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.color.is_none() && self.bgcolor.is_none()
    }

    /// Layer `other` on top of `self`; colors set in `other` win.
    #[must_use]
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            color: other.color.or(self.color),
            bgcolor: other.bgcolor.or(self.bgcolor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_style() {
        assert!(Style::new().is_null());
        assert!(!Style::new().color(Color::Red).is_null());
    }

    #[test]
    fn test_combine_overrides_set_colors_only() {
        let base = Style::new().color(Color::Red).bgcolor(Color::Black);
        let over = Style::new().color(Color::Green);
        let combined = base.combine(&over);
        assert_eq!(combined.color, Some(Color::Green));
        assert_eq!(combined.bgcolor, Some(Color::Black));
    }

    #[test]
    fn test_combine_with_null_is_identity() {
        let base = Style::new().bgcolor(Color::Blue);
        assert_eq!(base.combine(&Style::new()), base);
        assert_eq!(Style::new().combine(&base), base);
    }
}
