//! Common test utilities and logging infrastructure
//!
//! Tests log through `tracing`; the library logs through the `log` facade,
//! which the subscriber installed here also captures.
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::init_test_logging;
//!
//! #[test]
//! fn my_test() {
//!     init_test_logging();
//!     // test code...
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG=debug` - Enable debug logging in tests
//! - `RUST_LOG=console_tables::table=trace` - Per-line render tracing
//! - `TEST_LOG_JSON=1` - Output JSON format for CI parsing

#![allow(dead_code)]

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use console_tables::segment::line_text;
use console_tables::table::Table;

static INIT: Once = Once::new();

/// Initialize test logging infrastructure.
///
/// Output goes to the test writer, so it is captured by `cargo test` unless
/// `--nocapture` is used. Calling it more than once is safe.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let use_json = std::env::var("TEST_LOG_JSON").is_ok();
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("console_tables=debug,test=info"));

        if use_json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_ansi(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_thread_ids(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}

/// A test span guard that logs entry and exit.
pub fn test_phase(name: &str) -> tracing::span::EnteredSpan {
    let span = tracing::info_span!("test_phase", phase = name);
    tracing::info!(phase = name, "entering test phase");
    span.entered()
}

/// Rendered lines of `table` as plain strings.
pub fn plain_lines(table: &Table) -> Vec<String> {
    table
        .render_lines()
        .iter()
        .map(|line| line_text(line))
        .collect()
}

/// Assert that every rendered line has the same display width.
pub fn assert_rectangular(table: &Table) {
    let lines = table.render_lines();
    let widths: Vec<usize> = lines
        .iter()
        .map(|line| console_tables::segment::line_length(line))
        .collect();
    assert!(
        widths.windows(2).all(|pair| pair[0] == pair[1]),
        "ragged table, widths {widths:?}:\n{}",
        table.render_plain()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_phase_logging() {
        init_test_logging();
        let _setup = test_phase("setup");
        tracing::debug!("Setting up test resources");
    }
}
