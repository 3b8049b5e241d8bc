//! Tracing setup and cursor snapshots for debug diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=quire::layout=trace` - hit-test tiers
//! - `RUST_LOG=cursor=debug` - cursor diffs per message (debug builds)
//!
//! # Log Files
//!
//! Logs are written to `~/.config/quire/logs/quire.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::cursor::CursorState;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`); the file layer always
/// logs at debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "quire.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of cursor state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct CursorSnapshot {
    pub insertion_index: isize,
    /// `(page, x, y)` when the cursor has geometry
    pub position: Option<(usize, f32, f32)>,
}

impl CursorSnapshot {
    pub fn from_cursor(cursor: &CursorState) -> Self {
        Self {
            insertion_index: cursor.insertion_index,
            position: cursor
                .geometry
                .map(|g| (g.page_index, g.x, g.y)),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &CursorSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.insertion_index != other.insertion_index {
            changes.push(format!(
                "index: {} → {}",
                self.insertion_index, other.insertion_index
            ));
        }

        if self.position != other.position {
            let fmt = |p: Option<(usize, f32, f32)>| match p {
                Some((page, x, y)) => format!("p{} ({:.1},{:.1})", page, x, y),
                None => "none".to_string(),
            };
            changes.push(format!(
                "at: {} → {}",
                fmt(self.position),
                fmt(other.position)
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
