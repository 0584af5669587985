//! # console_tables
//!
//! Streaming table layout and rendering for fixed-width terminal output.
//!
//! A [`Table`] is a plain description: title, header, content rows, footer,
//! column settings and border options. Rendering negotiates column widths
//! once, then writes the table one line at a time to a sink, so large tables
//! never need to be held in memory as a whole.
//!
//! ## Quick Start
//!
//! ```
//! use console_tables::prelude::*;
//!
//! let table = Table::new()
//!     .border_template(SINGLE)
//!     .set_headers(["Name", "Qty"])
//!     .with_row(Row::from_texts(["apples", "3"]))
//!     .with_row(Row::from_texts(["pears", "12"]));
//!
//! print!("{table}");
//! ```
//!
//! ## Core Concepts
//!
//! - **MultilineText**: immutable cell content, split into lines once
//! - **BorderTemplate**: the 15 glyphs of a border style and the junction rules
//! - **Table / Row / Column / Cell**: the description being rendered
//! - **TableRenderer**: the pull-based line-by-line render pass
//! - **RenderSink**: where lines go (`ConsoleSink`, `SegmentSink`)

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod r#box;
pub mod cells;
pub mod color;
pub mod console;
pub mod segment;
pub mod style;
pub mod table;
pub mod terminal;
pub mod text;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::r#box::{
        ASCII, BorderSides, BorderTemplate, DOUBLE, HEAVY, ROUNDED, SINGLE, TemplateError,
    };
    pub use crate::color::{Color, ColorParseError};
    pub use crate::console::{ConsoleSink, RenderSink};
    pub use crate::segment::{Segment, SegmentSink};
    pub use crate::style::Style;
    pub use crate::table::{
        Cell, Column, ColumnSpan, Padding, RenderError, Row, RowKind, Table, TableRenderer,
    };
    pub use crate::text::{HorizontalAlignment, MultilineText, OverflowBehavior};
}

// Re-export key types at crate root
pub use r#box::BorderTemplate;
pub use color::Color;
pub use console::{ConsoleSink, RenderSink};
pub use segment::Segment;
pub use style::Style;
pub use table::{Cell, Column, Row, Table};
pub use text::MultilineText;
