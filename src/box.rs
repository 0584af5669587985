//! Border templates for box-drawn tables.
//!
//! A [`BorderTemplate`] holds the 15 glyphs needed to draw any table border:
//! four corners, four edges, four T-intersections, the cross, and the
//! vertical/horizontal strokes. Separator lines are assembled from column
//! widths and, per vertical boundary, from whether the rows above and below
//! have a visible border there.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use smallvec::{SmallVec, smallvec};

/// Number of glyphs in a template.
pub const TEMPLATE_LEN: usize = 15;

// Glyph indices, in wire order.
const TOP_LEFT: usize = 0;
const TOP: usize = 1;
const TOP_RIGHT: usize = 2;
const RIGHT: usize = 3;
const BOTTOM_RIGHT: usize = 4;
const BOTTOM: usize = 5;
const BOTTOM_LEFT: usize = 6;
const LEFT: usize = 7;
const TOP_INTERSECTION: usize = 8;
const RIGHT_INTERSECTION: usize = 9;
const BOTTOM_INTERSECTION: usize = 10;
const LEFT_INTERSECTION: usize = 11;
const MIDDLE_INTERSECTION: usize = 12;
const VERTICAL: usize = 13;
const HORIZONTAL: usize = 14;

bitflags! {
    /// Border parts of a table.
    ///
    /// Vertical parts (`LEFT`, `RIGHT`, `INSIDE_VERTICAL`) decide which
    /// boundaries occupy a cell on every line; horizontal parts decide which
    /// separator lines are drawn.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BorderSides: u8 {
        /// Line above the first row.
        const TOP               = 1 << 0;
        /// Line below the last row.
        const BOTTOM            = 1 << 1;
        /// Left edge of every row.
        const LEFT              = 1 << 2;
        /// Right edge of every row.
        const RIGHT             = 1 << 3;
        /// Lines between rows.
        const INSIDE_HORIZONTAL = 1 << 4;
        /// Dividers between cells.
        const INSIDE_VERTICAL   = 1 << 5;
        /// The four outer sides.
        const OUTER = Self::TOP.bits() | Self::BOTTOM.bits() | Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

/// Horizontal position of a vertical boundary within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryPosition {
    /// The left edge.
    Left,
    /// A boundary between two columns.
    Inner,
    /// The right edge.
    Right,
}

/// Junction glyph index by `[position][above][below]`.
///
/// `above`/`below` say whether the row on that side draws a vertical border
/// at the boundary. When neither does, the separator just continues.
const JUNCTIONS: [[[usize; 2]; 2]; 3] = [
    // Left
    [
        [HORIZONTAL, TOP_LEFT],
        [BOTTOM_LEFT, LEFT_INTERSECTION],
    ],
    // Inner
    [
        [HORIZONTAL, TOP_INTERSECTION],
        [BOTTOM_INTERSECTION, MIDDLE_INTERSECTION],
    ],
    // Right
    [
        [HORIZONTAL, TOP_RIGHT],
        [BOTTOM_RIGHT, RIGHT_INTERSECTION],
    ],
];

/// Which vertical boundaries of one row carry a visible border.
///
/// `inner[i]` is the boundary between column `i` and column `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoundaryMask {
    /// Left edge.
    pub left: bool,
    /// Boundaries between adjacent columns.
    pub inner: SmallVec<[bool; 16]>,
    /// Right edge.
    pub right: bool,
}

impl BoundaryMask {
    /// No visible boundary anywhere (the side of a separator with no row).
    #[must_use]
    pub fn none(columns: usize) -> Self {
        Self {
            left: false,
            inner: smallvec![false; columns.saturating_sub(1)],
            right: false,
        }
    }

    /// Only the outer edges are visible (a single full-width cell).
    #[must_use]
    pub fn edges(columns: usize) -> Self {
        Self {
            left: true,
            inner: smallvec![false; columns.saturating_sub(1)],
            right: true,
        }
    }

    /// Every boundary is visible (one cell per column).
    #[must_use]
    pub fn all(columns: usize) -> Self {
        Self {
            left: true,
            inner: smallvec![true; columns.saturating_sub(1)],
            right: true,
        }
    }

    fn inner_at(&self, idx: usize) -> bool {
        self.inner.get(idx).copied().unwrap_or(false)
    }
}

/// Structural position of a full separator line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeparatorKind {
    /// Above the first row.
    Top,
    /// Between a full-width title and a row of columns.
    Title,
    /// Between two rows of columns (header/data, data/data, data/footer).
    Row,
    /// Below the last row.
    Bottom,
}

/// Error building a template from its wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template did not contain exactly 15 characters.
    InvalidLength { found: usize },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { found } => write!(
                f,
                "border template must contain exactly {TEMPLATE_LEN} characters, found {found}"
            ),
        }
    }
}

impl std::error::Error for TemplateError {}

/// The 15 glyphs of a border style.
///
/// Wire order: top-left, top, top-right, right, bottom-right, bottom,
/// bottom-left, left, top-intersection, right-intersection,
/// bottom-intersection, left-intersection, middle-intersection, vertical,
/// horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderTemplate {
    glyphs: [char; TEMPLATE_LEN],
}

impl BorderTemplate {
    /// Create a template from glyphs in wire order.
    #[must_use]
    pub const fn from_glyphs(glyphs: [char; TEMPLATE_LEN]) -> Self {
        Self { glyphs }
    }

    /// Parse the 15-character wire format.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::InvalidLength`] unless `template` holds
    /// exactly 15 characters.
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let chars: Vec<char> = template.chars().collect();
        let glyphs: [char; TEMPLATE_LEN] = chars
            .as_slice()
            .try_into()
            .map_err(|_| TemplateError::InvalidLength { found: chars.len() })?;
        Ok(Self { glyphs })
    }

    /// Look up a built-in template by name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "ascii" => Some(ASCII),
            "single" | "square" => Some(SINGLE),
            "double" => Some(DOUBLE),
            "rounded" => Some(ROUNDED),
            "heavy" => Some(HEAVY),
            _ => None,
        }
    }

    /// The glyphs in wire order.
    #[must_use]
    pub const fn glyphs(&self) -> &[char; TEMPLATE_LEN] {
        &self.glyphs
    }

    /// Left edge of a row line.
    #[must_use]
    pub const fn left(&self) -> char {
        self.glyphs[LEFT]
    }

    /// Right edge of a row line.
    #[must_use]
    pub const fn right(&self) -> char {
        self.glyphs[RIGHT]
    }

    /// Divider between two cells of a row line.
    #[must_use]
    pub const fn vertical(&self) -> char {
        self.glyphs[VERTICAL]
    }

    /// Stroke of a separator line.
    #[must_use]
    pub const fn horizontal(&self) -> char {
        self.glyphs[HORIZONTAL]
    }

    /// Top edge stroke.
    #[must_use]
    pub const fn top(&self) -> char {
        self.glyphs[TOP]
    }

    /// Bottom edge stroke.
    #[must_use]
    pub const fn bottom(&self) -> char {
        self.glyphs[BOTTOM]
    }

    /// Glyph where a separator meets a vertical boundary.
    ///
    /// `above`/`below` tell whether the row above/below the separator has a
    /// visible border at this boundary.
    #[must_use]
    pub const fn junction(&self, position: BoundaryPosition, above: bool, below: bool) -> char {
        let row = match position {
            BoundaryPosition::Left => 0,
            BoundaryPosition::Inner => 1,
            BoundaryPosition::Right => 2,
        };
        self.glyphs[JUNCTIONS[row][above as usize][below as usize]]
    }

    /// Stroke for a separator between `above` and `below` rows.
    ///
    /// The outer edges use their own strokes; everything else uses the plain
    /// horizontal glyph.
    #[must_use]
    pub const fn stroke(&self, has_above: bool, has_below: bool) -> char {
        match (has_above, has_below) {
            (false, true) => self.top(),
            (true, false) => self.bottom(),
            _ => self.horizontal(),
        }
    }

    /// Assemble a separator line.
    ///
    /// Only the `LEFT`, `RIGHT` and `INSIDE_VERTICAL` members of `sides` are
    /// consulted: they decide which boundaries occupy a cell at all. `stroke`
    /// fills the column widths.
    #[must_use]
    pub fn separator(
        &self,
        widths: &[usize],
        above: &BoundaryMask,
        below: &BoundaryMask,
        stroke: char,
        sides: BorderSides,
    ) -> String {
        let mut line = String::new();
        if sides.contains(BorderSides::LEFT) {
            line.push(self.junction(BoundaryPosition::Left, above.left, below.left));
        }
        for (idx, &width) in widths.iter().enumerate() {
            line.extend(std::iter::repeat_n(stroke, width));
            if sides.contains(BorderSides::INSIDE_VERTICAL) && idx + 1 < widths.len() {
                line.push(self.junction(
                    BoundaryPosition::Inner,
                    above.inner_at(idx),
                    below.inner_at(idx),
                ));
            }
        }
        if sides.contains(BorderSides::RIGHT) {
            line.push(self.junction(BoundaryPosition::Right, above.right, below.right));
        }
        line
    }

    /// Build one of the standard full-border separator lines.
    #[must_use]
    pub fn line(&self, widths: &[usize], kind: SeparatorKind) -> String {
        let columns = widths.len();
        let (above, below) = match kind {
            SeparatorKind::Top => (BoundaryMask::none(columns), BoundaryMask::all(columns)),
            SeparatorKind::Title => (BoundaryMask::edges(columns), BoundaryMask::all(columns)),
            SeparatorKind::Row => (BoundaryMask::all(columns), BoundaryMask::all(columns)),
            SeparatorKind::Bottom => (BoundaryMask::all(columns), BoundaryMask::none(columns)),
        };
        let stroke = self.stroke(kind != SeparatorKind::Top, kind != SeparatorKind::Bottom);
        self.separator(widths, &above, &below, stroke, BorderSides::all())
    }

    /// Top border above a row of columns.
    #[must_use]
    pub fn get_top(&self, widths: &[usize]) -> String {
        self.line(widths, SeparatorKind::Top)
    }

    /// Bottom border below a row of columns.
    #[must_use]
    pub fn get_bottom(&self, widths: &[usize]) -> String {
        self.line(widths, SeparatorKind::Bottom)
    }
}

impl Default for BorderTemplate {
    fn default() -> Self {
        ASCII
    }
}

impl FromStr for BorderTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for BorderTemplate {
    type Error = TemplateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for BorderTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyphs.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

// ============================================================================
// Built-in Templates
// ============================================================================

/// Plain ASCII (`+-+|+-+|+++++|-`).
pub const ASCII: BorderTemplate = BorderTemplate::from_glyphs([
    '+', '-', '+', '|', '+', '-', '+', '|', '+', '+', '+', '+', '+', '|', '-',
]);

/// Single-line box drawing (`┌─┐│┘─└│┬┤┴├┼│─`).
pub const SINGLE: BorderTemplate = BorderTemplate::from_glyphs([
    '\u{250C}', '\u{2500}', '\u{2510}', '\u{2502}', '\u{2518}', '\u{2500}', '\u{2514}', '\u{2502}',
    '\u{252C}', '\u{2524}', '\u{2534}', '\u{251C}', '\u{253C}', '\u{2502}', '\u{2500}',
]);

/// Double-line box drawing (`╔═╗║╝═╚║╦╣╩╠╬║═`).
pub const DOUBLE: BorderTemplate = BorderTemplate::from_glyphs([
    '\u{2554}', '\u{2550}', '\u{2557}', '\u{2551}', '\u{255D}', '\u{2550}', '\u{255A}', '\u{2551}',
    '\u{2566}', '\u{2563}', '\u{2569}', '\u{2560}', '\u{256C}', '\u{2551}', '\u{2550}',
]);

/// Single-line box drawing with rounded corners (`╭─╮│╯─╰│┬┤┴├┼│─`).
pub const ROUNDED: BorderTemplate = BorderTemplate::from_glyphs([
    '\u{256D}', '\u{2500}', '\u{256E}', '\u{2502}', '\u{256F}', '\u{2500}', '\u{2570}', '\u{2502}',
    '\u{252C}', '\u{2524}', '\u{2534}', '\u{251C}', '\u{253C}', '\u{2502}', '\u{2500}',
]);

/// Heavy box drawing (`┏━┓┃┛━┗┃┳┫┻┣╋┃━`).
pub const HEAVY: BorderTemplate = BorderTemplate::from_glyphs([
    '\u{250F}', '\u{2501}', '\u{2513}', '\u{2503}', '\u{251B}', '\u{2501}', '\u{2517}', '\u{2503}',
    '\u{2533}', '\u{252B}', '\u{253B}', '\u{2523}', '\u{254B}', '\u{2503}', '\u{2501}',
]);
