//! Multi-line plain text and width-constrained line production.
//!
//! [`MultilineText`] is the content of every table cell. It is split once on
//! construction and never mutated; [`MultilineText::display_lines`] then
//! produces the lines that fit a given width under an [`OverflowBehavior`],
//! lazily and restartably.

use std::fmt;

use crate::cells::{cell_len, chop_cells, fit_to_width};

/// Marker appended by the ellipsis overflow policies.
pub const ELLIPSIS: &str = "\u{2026}";

/// Horizontal alignment of a line inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// Inherit from the next level of the fallback chain.
    #[default]
    Default,
    /// Pad on the right.
    Left,
    /// Pad on the left.
    Right,
    /// Split the padding; the odd extra space goes to the right.
    Center,
    /// Widen the gaps between words to fill the width.
    Stretch,
}

impl HorizontalAlignment {
    /// `None` for [`HorizontalAlignment::Default`], the alignment otherwise.
    #[must_use]
    pub const fn explicit(self) -> Option<Self> {
        match self {
            Self::Default => None,
            other => Some(other),
        }
    }
}

/// How content wider than its cell is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowBehavior {
    /// Leave long lines untouched.
    PreserveOverflow,
    /// Cut at the exact cell.
    CutChar,
    /// Cut at the last word boundary before the limit.
    CutWord,
    /// Cut at the exact cell and append an ellipsis.
    CutCharWithEllipsis,
    /// Cut at a word boundary and append an ellipsis.
    CutWordWithEllipsis,
    /// Continue on the next line at the exact cell.
    WrapChar,
    /// Continue on the next line at a word boundary.
    #[default]
    WrapWord,
}

/// Bounding box of a [`MultilineText`] in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width of the widest line.
    pub width: usize,
    /// Number of lines.
    pub height: usize,
}

impl Size {
    /// Create a size.
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

/// Immutable text split into lines.
///
/// `\r\n`, `\r` and `\n` each count as exactly one line break.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultilineText {
    raw: String,
    lines: Vec<String>,
    size: Size,
}

impl MultilineText {
    /// Split `raw` into lines. The empty string yields an empty text.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::empty();
        }
        let lines = split_line_breaks(raw);
        Self::assemble(raw.to_owned(), lines)
    }

    /// Build from an optional string; `None` yields an empty text.
    #[must_use]
    pub fn from_optional(raw: Option<&str>) -> Self {
        raw.map_or_else(Self::empty, Self::new)
    }

    /// Build from explicit lines. Line breaks inside the items are split too.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut split = Vec::new();
        for line in lines {
            split.extend(split_line_breaks(line.as_ref()));
        }
        let raw = split.join("\n");
        Self::assemble(raw, split)
    }

    /// The text with no lines.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            raw: String::new(),
            lines: Vec::new(),
            size: Size::new(0, 0),
        }
    }

    fn assemble(raw: String, lines: Vec<String>) -> Self {
        let width = lines.iter().map(|line| cell_len(line)).max().unwrap_or(0);
        let size = Size::new(width, lines.len());
        Self { raw, lines, size }
    }

    /// The text as it was given.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The lines, without terminators.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Bounding box in cells.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// True when the size is 0×0.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size.width == 0 && self.size.height == 0
    }

    /// Lines re-flowed to `max_width` cells under `overflow`.
    ///
    /// The returned iterator is lazy and can be restarted with
    /// [`DisplayLines::reset`].
    #[must_use]
    pub fn display_lines(&self, max_width: usize, overflow: OverflowBehavior) -> DisplayLines<'_> {
        DisplayLines::new(&self.lines, max_width, overflow)
    }
}

impl fmt::Display for MultilineText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn split_line_breaks(raw: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            '\n' => lines.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    lines.push(current);
    lines
}

/// Lazy sequence of display lines produced by [`MultilineText::display_lines`].
#[derive(Debug, Clone)]
pub struct DisplayLines<'a> {
    source: &'a [String],
    max_width: usize,
    overflow: OverflowBehavior,
    next_source: usize,
    pending: Option<&'a str>,
}

impl<'a> DisplayLines<'a> {
    fn new(source: &'a [String], max_width: usize, overflow: OverflowBehavior) -> Self {
        Self {
            source,
            max_width,
            overflow,
            next_source: 0,
            pending: None,
        }
    }

    /// Restart from the first line.
    pub fn reset(&mut self) {
        self.next_source = 0;
        self.pending = None;
    }

    /// Width the lines are flowed to.
    #[must_use]
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    fn flow(&mut self, line: &'a str) -> String {
        let width = self.max_width;
        if width == 0 {
            return String::new();
        }
        if cell_len(line) <= width {
            return line.to_owned();
        }

        match self.overflow {
            OverflowBehavior::PreserveOverflow => line.to_owned(),
            OverflowBehavior::CutChar => chop_cells(line, width).0.to_owned(),
            OverflowBehavior::CutWord => cut_word(line, width).0.to_owned(),
            OverflowBehavior::CutCharWithEllipsis => {
                let mut cut = chop_cells(line, width - 1).0.to_owned();
                cut.push_str(ELLIPSIS);
                cut
            }
            OverflowBehavior::CutWordWithEllipsis => {
                let mut cut = cut_word(line, width - 1).0.to_owned();
                cut.push_str(ELLIPSIS);
                cut
            }
            OverflowBehavior::WrapChar => {
                let (head, rest) = take_at_least_one(line, width);
                self.pending = Some(rest).filter(|rest| !rest.is_empty());
                head.to_owned()
            }
            OverflowBehavior::WrapWord => {
                let (head, rest) = cut_word(line, width);
                let (head, rest) = if head.is_empty() {
                    take_at_least_one(line, width)
                } else {
                    (head, rest)
                };
                let rest = rest.trim_start();
                self.pending = Some(rest).filter(|rest| !rest.is_empty());
                head.to_owned()
            }
        }
    }
}

impl Iterator for DisplayLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if let Some(pending) = self.pending.take() {
            return Some(self.flow(pending));
        }
        let source = self.source;
        let line = source.get(self.next_source)?;
        self.next_source += 1;
        Some(self.flow(line))
    }
}

/// Cut `line` to at most `width` cells, preferring the last whitespace before
/// the limit when the limit falls inside a word.
///
/// Returns the kept head (trailing whitespace trimmed) and the untouched rest.
fn cut_word(line: &str, width: usize) -> (&str, &str) {
    let (head, rest) = chop_cells(line, width);
    let inside_word = match (head.chars().next_back(), rest.chars().next()) {
        (Some(before), Some(after)) => !before.is_whitespace() && !after.is_whitespace(),
        _ => false,
    };
    if !inside_word {
        return (head.trim_end(), rest);
    }

    match head.rfind(char::is_whitespace) {
        Some(idx) if !head[..idx].trim_end().is_empty() => {
            (head[..idx].trim_end(), &line[idx..])
        }
        _ => (head, rest),
    }
}

/// Like [`chop_cells`], but always consumes at least one character so that a
/// character wider than `width` cannot stall wrapping.
fn take_at_least_one(line: &str, width: usize) -> (&str, &str) {
    let (head, rest) = chop_cells(line, width);
    if !head.is_empty() {
        return (head, rest);
    }
    match line.chars().next() {
        Some(first) => line.split_at(first.len_utf8()),
        None => (head, rest),
    }
}

/// Align `line` inside `width` cells.
///
/// Lines wider than `width` are cropped.
///
/// # Panics
///
/// `HorizontalAlignment::Default` must be resolved through the fallback chain
/// before a line is aligned; reaching this function with it is a logic error.
#[must_use]
pub fn align_line(line: &str, width: usize, alignment: HorizontalAlignment) -> String {
    let line_width = cell_len(line);
    if line_width >= width {
        return fit_to_width(line, width);
    }
    let space = width - line_width;

    match alignment {
        HorizontalAlignment::Left => format!("{line}{}", " ".repeat(space)),
        HorizontalAlignment::Right => format!("{}{line}", " ".repeat(space)),
        HorizontalAlignment::Center => {
            let left = space / 2;
            format!("{}{line}{}", " ".repeat(left), " ".repeat(space - left))
        }
        HorizontalAlignment::Stretch => stretch_line(line, width),
        HorizontalAlignment::Default => {
            unreachable!("alignment must be resolved before a line is aligned")
        }
    }
}

fn stretch_line(line: &str, width: usize) -> String {
    let words: Vec<&str> = line.split_whitespace().collect();
    let leading = &line[..line.len() - line.trim_start().len()];
    if words.len() < 2 {
        return align_line(line, width, HorizontalAlignment::Left);
    }

    let used = cell_len(leading) + words.iter().map(|w| cell_len(w)).sum::<usize>();
    if used >= width {
        return align_line(line, width, HorizontalAlignment::Left);
    }
    let gaps = words.len() - 1;
    let space = width - used;
    let per_gap = space / gaps;
    let extra = space % gaps;

    let mut out = String::with_capacity(width);
    out.push_str(leading);
    for (idx, word) in words.iter().enumerate() {
        out.push_str(word);
        if idx < gaps {
            let fill = per_gap + usize::from(idx < extra);
            out.extend(std::iter::repeat_n(' ', fill));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flowed(text: &str, width: usize, overflow: OverflowBehavior) -> Vec<String> {
        MultilineText::new(text)
            .display_lines(width, overflow)
            .collect()
    }

    #[test]
    fn test_split_all_terminators() {
        let text = MultilineText::new("a\r\nb\rc\nd");
        assert_eq!(text.lines(), ["a", "b", "c", "d"]);
        assert_eq!(text.size(), Size::new(1, 4));
    }

    #[test]
    fn test_crlf_is_one_break() {
        let text = MultilineText::new("one\r\n\r\ntwo");
        assert_eq!(text.lines(), ["one", "", "two"]);
    }

    #[test]
    fn test_trailing_terminator_adds_empty_line() {
        let text = MultilineText::new("x\n");
        assert_eq!(text.lines(), ["x", ""]);
        assert_eq!(text.size().height, 2);
    }

    #[test]
    fn test_empty_and_none() {
        assert!(MultilineText::new("").is_empty());
        assert!(MultilineText::from_optional(None).is_empty());
        assert!(!MultilineText::from_optional(Some("x")).is_empty());
        assert_eq!(MultilineText::empty().lines().len(), 0);
    }

    #[test]
    fn test_size_uses_display_width() {
        let text = MultilineText::new("ab\n日本語");
        assert_eq!(text.size(), Size::new(6, 2));
    }

    #[test]
    fn test_from_lines() {
        let text = MultilineText::from_lines(["first", "second\nthird"]);
        assert_eq!(text.lines(), ["first", "second", "third"]);
        assert_eq!(text.raw(), "first\nsecond\nthird");
    }

    #[test]
    fn test_preserve_overflow() {
        let lines = flowed("a long line", 4, OverflowBehavior::PreserveOverflow);
        assert_eq!(lines, ["a long line"]);
    }

    #[test]
    fn test_cut_char() {
        assert_eq!(flowed("hello world", 7, OverflowBehavior::CutChar), ["hello w"]);
    }

    #[test]
    fn test_cut_word() {
        assert_eq!(flowed("hello world", 7, OverflowBehavior::CutWord), ["hello"]);
        // No whitespace before the cut: cut at the exact cell.
        assert_eq!(flowed("helloworld", 7, OverflowBehavior::CutWord), ["hellowo"]);
        // The cut falls on a boundary already.
        assert_eq!(flowed("hello world", 5, OverflowBehavior::CutWord), ["hello"]);
    }

    #[test]
    fn test_cut_with_ellipsis() {
        assert_eq!(
            flowed("hello world", 8, OverflowBehavior::CutCharWithEllipsis),
            ["hello w\u{2026}"]
        );
        assert_eq!(
            flowed("hello world", 8, OverflowBehavior::CutWordWithEllipsis),
            ["hello\u{2026}"]
        );
        assert_eq!(
            flowed("hello", 1, OverflowBehavior::CutWordWithEllipsis),
            ["\u{2026}"]
        );
    }

    #[test]
    fn test_wrap_char() {
        assert_eq!(
            flowed("abcdefg", 3, OverflowBehavior::WrapChar),
            ["abc", "def", "g"]
        );
    }

    #[test]
    fn test_wrap_word() {
        assert_eq!(
            flowed("the quick brown fox", 10, OverflowBehavior::WrapWord),
            ["the quick", "brown fox"]
        );
        assert_eq!(
            flowed("supercalifragilistic is long", 8, OverflowBehavior::WrapWord),
            ["supercal", "ifragili", "stic is", "long"]
        );
    }

    #[test]
    fn test_wrap_keeps_line_structure() {
        assert_eq!(
            flowed("ab cd\n\nef", 2, OverflowBehavior::WrapWord),
            ["ab", "cd", "", "ef"]
        );
    }

    #[test]
    fn test_wide_char_wider_than_width_makes_progress() {
        let lines = flowed("日本", 1, OverflowBehavior::WrapChar);
        assert_eq!(lines, ["日", "本"]);
    }

    #[test]
    fn test_zero_width_emits_empty_lines() {
        for overflow in [
            OverflowBehavior::PreserveOverflow,
            OverflowBehavior::CutWordWithEllipsis,
            OverflowBehavior::WrapChar,
            OverflowBehavior::WrapWord,
        ] {
            assert_eq!(flowed("abc\ndef", 0, overflow), ["", ""]);
        }
    }

    #[test]
    fn test_display_lines_restart() {
        let text = MultilineText::new("one two three");
        let mut lines = text.display_lines(5, OverflowBehavior::WrapWord);
        let first: Vec<String> = lines.by_ref().collect();
        lines.reset();
        let second: Vec<String> = lines.collect();
        assert_eq!(first, second);
        assert_eq!(first, ["one", "two", "three"]);
    }

    #[test]
    fn test_align_left_right() {
        assert_eq!(align_line("ab", 5, HorizontalAlignment::Left), "ab   ");
        assert_eq!(align_line("ab", 5, HorizontalAlignment::Right), "   ab");
    }

    #[test]
    fn test_align_center_extra_space_right() {
        assert_eq!(align_line("ab", 5, HorizontalAlignment::Center), " ab  ");
        assert_eq!(align_line("ab", 6, HorizontalAlignment::Center), "  ab  ");
    }

    #[test]
    fn test_align_stretch() {
        assert_eq!(align_line("a b c", 9, HorizontalAlignment::Stretch), "a   b   c");
        assert_eq!(align_line("a b c", 8, HorizontalAlignment::Stretch), "a   b  c");
        assert_eq!(align_line("single", 8, HorizontalAlignment::Stretch), "single  ");
    }

    #[test]
    fn test_align_crops_wide_lines() {
        assert_eq!(align_line("abcdef", 3, HorizontalAlignment::Right), "abc");
    }

    #[test]
    #[should_panic(expected = "alignment must be resolved")]
    fn test_align_default_is_a_logic_error() {
        let _ = align_line("x", 3, HorizontalAlignment::Default);
    }

    #[test]
    fn test_explicit_alignment() {
        assert_eq!(HorizontalAlignment::Default.explicit(), None);
        assert_eq!(
            HorizontalAlignment::Center.explicit(),
            Some(HorizontalAlignment::Center)
        );
    }
}
