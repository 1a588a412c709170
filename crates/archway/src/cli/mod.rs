//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for archway using clap's
//! derive API.
//!
//! # Commands
//!
//! - `layout`: Print the computed dependency grid for a payload
//! - `relations`: List anchored relations, optionally filtered by team
//! - `check`: Report cross-team dependency cycles
//!
//! Every command reads the payload from a JSON file argument, or from stdin
//! when the argument is omitted.
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! archway layout deps.json
//! curl -s "$API/boards/dependencies" | archway relations --team Payments
//! archway check deps.json --json
//! ```

mod args;
mod execute;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::output::OutputMode;

// Re-export argument structs
pub use args::{CheckArgs, LayoutArgs, RelationsArgs};

/// Archway - cross-team sprint dependency visualization
///
/// Lays out board dependencies as a grid of teams (rows) and sprints
/// (columns, backlog last) and shows, per dependency, which cell sides the
/// connecting arrow uses.
#[derive(Parser, Debug)]
#[command(name = "archway")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the computed dependency grid
    ///
    /// Text output shows the team-by-sprint grid with outgoing-dependency
    /// counts per cell, followed by the anchored relation list. JSON output
    /// is the renderer contract consumed by the web client.
    Layout(LayoutArgs),

    /// List anchored relations
    ///
    /// One line per dependency edge, with source and target cells and the
    /// anchor sides the arrow uses. Can be filtered to a single source team.
    Relations(RelationsArgs),

    /// Check the dependency view for cycles
    ///
    /// Exits with status 1 when any cross-team dependency cycle exists,
    /// including a cell that depends on itself.
    Check(CheckArgs),
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Execute the selected command.
    pub fn execute(&self) -> Result<()> {
        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match &self.command {
            Commands::Layout(args) => execute::execute_layout(args, output_mode),
            Commands::Relations(args) => execute::execute_relations(args, output_mode),
            Commands::Check(args) => execute::execute_check(args, output_mode),
        }
    }
}
