//! Segment - a run of text with one style.
//!
//! [`SegmentSink`] is the in-memory [`RenderSink`]: it records each rendered
//! line as a list of segments, merging adjacent runs that share a style.

use std::fmt;
use std::io;

use crate::cells::cell_len;
use crate::console::RenderSink;
use crate::style::Style;

/// A piece of text with a single, consistent style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segment {
    /// The text content.
    pub text: String,
    /// Colors to apply.
    pub style: Style,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create a segment with no colors.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::new())
    }

    /// Cell width of the text.
    #[must_use]
    pub fn cell_length(&self) -> usize {
        cell_len(&self.text)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Plain text of a rendered line.
#[must_use]
pub fn line_text(line: &[Segment]) -> String {
    line.iter().map(|segment| segment.text.as_str()).collect()
}

/// Cell width of a rendered line.
#[must_use]
pub fn line_length(line: &[Segment]) -> usize {
    line.iter().map(Segment::cell_length).sum()
}

/// Sink that records rendered output as lines of segments.
#[derive(Debug, Clone, Default)]
pub struct SegmentSink {
    lines: Vec<Vec<Segment>>,
    current: Vec<Segment>,
}

impl SegmentSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, text: &str, style: &Style) {
        if let Some(last) = self.current.last_mut()
            && last.style == *style
        {
            last.text.push_str(text);
            return;
        }
        self.current.push(Segment::new(text, *style));
    }

    /// Completed lines.
    #[must_use]
    pub fn lines(&self) -> &[Vec<Segment>] {
        &self.lines
    }

    /// Take the completed lines, leaving the sink empty.
    pub fn take_lines(&mut self) -> Vec<Vec<Segment>> {
        std::mem::take(&mut self.lines)
    }

    /// Completed lines joined with `\n`, each line terminated.
    #[must_use]
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line_text(line));
            out.push('\n');
        }
        out
    }
}

impl RenderSink for SegmentSink {
    fn write_text(&mut self, text: &str, style: &Style) -> io::Result<()> {
        self.push(text, style);
        Ok(())
    }

    fn write_border(&mut self, glyph: char, style: &Style) -> io::Result<()> {
        let mut buf = [0u8; 4];
        self.push(glyph.encode_utf8(&mut buf), style);
        Ok(())
    }

    fn end_line(&mut self) -> io::Result<()> {
        let line = std::mem::take(&mut self.current);
        self.lines.push(line);
        Ok(())
    }
}
