//! Console colors.
//!
//! Cells, rows and borders carry optional foreground/background colors. The
//! palette is the 16 standard console colors plus 24-bit RGB; conversion to
//! terminal commands goes through `crossterm`.

use std::fmt;
use std::str::FromStr;

/// A console color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 24-bit color.
    Rgb(u8, u8, u8),
}

const NAMED: [(&str, Color); 16] = [
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("white", Color::White),
    ("bright_black", Color::BrightBlack),
    ("bright_red", Color::BrightRed),
    ("bright_green", Color::BrightGreen),
    ("bright_yellow", Color::BrightYellow),
    ("bright_blue", Color::BrightBlue),
    ("bright_magenta", Color::BrightMagenta),
    ("bright_cyan", Color::BrightCyan),
    ("bright_white", Color::BrightWhite),
];

impl Color {
    /// Parse a color name (`red`, `bright_blue`, `grey`) or `#rrggbb`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] for empty input, malformed hex, or an
    /// unknown name.
    pub fn parse(color: &str) -> Result<Self, ColorParseError> {
        let normalized = color.trim().to_lowercase().replace(['-', ' '], "_");
        if normalized.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = normalized.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(color.to_owned()));
        }

        let name = match normalized.as_str() {
            "grey" | "gray" => "bright_black",
            other => other,
        };
        NAMED
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, color)| *color)
            .ok_or_else(|| ColorParseError::UnknownColor(color.to_owned()))
    }

    /// Equivalent `crossterm` color.
    #[must_use]
    pub const fn to_crossterm(self) -> crossterm::style::Color {
        use crossterm::style::Color as Ct;
        match self {
            Self::Black => Ct::Black,
            Self::Red => Ct::DarkRed,
            Self::Green => Ct::DarkGreen,
            Self::Yellow => Ct::DarkYellow,
            Self::Blue => Ct::DarkBlue,
            Self::Magenta => Ct::DarkMagenta,
            Self::Cyan => Ct::DarkCyan,
            Self::White => Ct::Grey,
            Self::BrightBlack => Ct::DarkGrey,
            Self::BrightRed => Ct::Red,
            Self::BrightGreen => Ct::Green,
            Self::BrightYellow => Ct::Yellow,
            Self::BrightBlue => Ct::Blue,
            Self::BrightMagenta => Ct::Magenta,
            Self::BrightCyan => Ct::Cyan,
            Self::BrightWhite => Ct::White,
            Self::Rgb(r, g, b) => Ct::Rgb { r, g, b },
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            named => {
                let name = NAMED
                    .iter()
                    .find(|(_, color)| color == named)
                    .map_or("unknown", |(name, _)| name);
                f.write_str(name)
            }
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::Rgb(red, green, blue)
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    InvalidHex(String),
    UnknownColor(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty color string"),
            Self::InvalidHex(s) => write!(f, "Invalid hex color: {s}"),
            Self::UnknownColor(s) => write!(f, "Unknown color: {s}"),
        }
    }
}

impl std::error::Error for ColorParseError {}
