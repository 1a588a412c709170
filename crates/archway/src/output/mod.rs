//! Output formatting for CLI commands.
//!
//! This module provides utilities for formatting command output in both
//! human-readable text format and JSON format for programmatic use.
//!
//! Submodules:
//! - [`grid`]: Dependency grid and relation-list rendering

pub mod grid;

use std::env;
use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

/// Output mode for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text output.
    Text,
    /// JSON output for programmatic use.
    Json,
}

/// Configuration for output formatting.
///
/// Controls ASCII fallback mode and color output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use ASCII-only connectors instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create an `OutputConfig` with explicit values.
    pub fn new(use_ascii: bool, use_colors: bool) -> Self {
        Self {
            use_ascii,
            use_colors,
        }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `ARCHWAY_ASCII`: Set to "1" or "true" for ASCII-only connectors (default: false)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `ARCHWAY_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        let use_ascii = match env::var("ARCHWAY_ASCII") {
            Ok(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Ok(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Ok(v) => {
                tracing::warn!(
                    env_var = "ARCHWAY_ASCII",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            Err(_) => false,
        };

        // Respect the NO_COLOR standard (https://no-color.org/)
        // Also support ARCHWAY_COLOR for explicit control
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("ARCHWAY_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self {
            use_ascii,
            use_colors,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_ascii: false,
            use_colors: true,
        }
    }
}

/// Print a serializable value as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(handle, "{json}")
}

/// Print a success message (green checkmark in color mode).
pub fn success(message: &str, config: &OutputConfig) {
    let icon = if config.use_ascii { "OK" } else { "✓" };
    if config.use_colors {
        println!("{} {}", icon.green().bold(), message);
    } else {
        println!("{icon} {message}");
    }
}

/// Print an error message to stderr (red cross in color mode).
pub fn error(message: &str, config: &OutputConfig) {
    let icon = if config.use_ascii { "ERROR" } else { "✗" };
    if config.use_colors {
        eprintln!("{} {}", icon.red().bold(), message);
    } else {
        eprintln!("{icon} {message}");
    }
}
