//! CLI argument structs for all commands.

use std::path::PathBuf;

use clap::Parser;

/// Arguments for the `layout` command
#[derive(Parser, Debug, Clone)]
pub struct LayoutArgs {
    /// Payload JSON file (reads from stdin if not provided)
    pub input: Option<PathBuf>,

    /// Skip the relation list and print only the grid
    #[arg(long)]
    pub grid_only: bool,
}

/// Arguments for the `relations` command
#[derive(Parser, Debug, Clone)]
pub struct RelationsArgs {
    /// Payload JSON file (reads from stdin if not provided)
    pub input: Option<PathBuf>,

    /// Only show relations whose source cell belongs to this team
    #[arg(short, long)]
    pub team: Option<String>,
}

/// Arguments for the `check` command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Payload JSON file (reads from stdin if not provided)
    pub input: Option<PathBuf>,

    /// Suppress the success message when no cycles are found
    #[arg(short, long)]
    pub quiet: bool,
}
