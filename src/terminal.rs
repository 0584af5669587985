//! Terminal detection.
//!
//! Decides whether console output should carry color and how wide the
//! terminal is.

use std::io::IsTerminal;

struct EnvSettings {
    no_color: Option<String>,
    force_color: Option<String>,
    term: Option<String>,
}

fn read_env_settings() -> EnvSettings {
    EnvSettings {
        no_color: std::env::var("NO_COLOR").ok(),
        force_color: std::env::var("FORCE_COLOR").ok(),
        term: std::env::var("TERM").ok(),
    }
}

/// Get the terminal size (width, height) in cells.
#[must_use]
pub fn get_terminal_size() -> Option<(usize, usize)> {
    crossterm::terminal::size()
        .ok()
        .map(|(w, h)| (usize::from(w), usize::from(h)))
}

/// Terminal width in cells, 80 when it cannot be determined.
#[must_use]
pub fn get_terminal_width() -> usize {
    get_terminal_size().map_or(80, |(w, _)| w)
}

/// Check if stdout is connected to a terminal.
#[must_use]
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Whether colored output should be written to stdout.
///
/// - `NO_COLOR` (any value) disables color
/// - `FORCE_COLOR` (non-empty, not `0`) enables it
/// - `TERM=dumb` or `TERM=unknown` disables it
/// - otherwise color is used when stdout is a terminal
#[must_use]
pub fn color_enabled() -> bool {
    color_enabled_with(&read_env_settings(), is_terminal())
}

fn color_enabled_with(env: &EnvSettings, is_tty: bool) -> bool {
    if env.no_color.is_some() {
        return false;
    }
    if let Some(force) = env.force_color.as_deref() {
        let force = force.trim();
        if !force.is_empty() && force != "0" {
            return true;
        }
    }
    if env.term.as_deref().is_some_and(|term| {
        let term = term.to_lowercase();
        term == "dumb" || term == "unknown"
    }) {
        return false;
    }
    is_tty
}
