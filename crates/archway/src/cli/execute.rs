//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands. Each one
//! reads a dependency payload, runs the layout engine, and prints the
//! result in the selected output mode.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use archway_layout::{compute_layout, DependencyGraph, DependencyPayload, Layout};

use super::args::{CheckArgs, LayoutArgs, RelationsArgs};
use crate::output::{self, grid, OutputConfig, OutputMode};

/// Read a payload from the given file, or from stdin when no file is given.
fn read_payload(input: Option<&Path>) -> Result<DependencyPayload> {
    match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open payload file '{}'", path.display()))?;
            DependencyPayload::from_reader(BufReader::new(file))
                .with_context(|| format!("cannot parse payload file '{}'", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read payload from stdin")?;
            DependencyPayload::from_json_str(&buf).context("cannot parse payload from stdin")
        }
    }
}

/// Execute the layout command
pub fn execute_layout(args: &LayoutArgs, output_mode: OutputMode) -> Result<()> {
    let payload = read_payload(args.input.as_deref())?;
    let layout = compute_layout(&payload);

    match output_mode {
        OutputMode::Json => output::print_json(&layout)?,
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            if layout.teams.is_empty() {
                println!("No dependencies yet!");
                return Ok(());
            }
            grid::print_grid(&layout, &config)?;
            if !args.grid_only {
                println!();
                grid::print_relation_list(&layout, None, &config)?;
            }
        }
    }

    Ok(())
}

/// Execute the relations command
pub fn execute_relations(args: &RelationsArgs, output_mode: OutputMode) -> Result<()> {
    let payload = read_payload(args.input.as_deref())?;
    let layout = compute_layout(&payload);

    let filter_row = match &args.team {
        Some(team) => Some(
            layout
                .row(team)
                .with_context(|| format!("team '{team}' does not appear in any dependency"))?,
        ),
        None => None,
    };

    match output_mode {
        OutputMode::Json => output::print_json(&flatten_relations(&layout, filter_row))?,
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            grid::print_relation_list(&layout, filter_row, &config)?;
        }
    }

    Ok(())
}

/// Execute the check command
pub fn execute_check(args: &CheckArgs, output_mode: OutputMode) -> Result<()> {
    let payload = read_payload(args.input.as_deref())?;
    let layout = compute_layout(&payload);
    let graph = DependencyGraph::from_layout(&layout);
    let cycles = graph.cycles();

    match output_mode {
        OutputMode::Json => {
            let cycles_json: Vec<Vec<String>> = cycles
                .iter()
                .map(|cycle| cycle.iter().map(ToString::to_string).collect())
                .collect();
            output::print_json(&serde_json::json!({
                "acyclic": cycles.is_empty(),
                "cycles": cycles_json,
            }))?;
        }
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            if cycles.is_empty() {
                if !args.quiet {
                    output::success("no dependency cycles found", &config);
                }
            } else {
                for cycle in &cycles {
                    let cells: Vec<String> = cycle
                        .iter()
                        .map(|id| grid::cell_label(&layout, id))
                        .collect();
                    output::error(
                        &format!("dependency cycle: {}", cells.join(" -> ")),
                        &config,
                    );
                }
            }
        }
    }

    if cycles.is_empty() {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

/// Flatten the grouped relation map into (source, relation) records for
/// JSON listing.
fn flatten_relations(layout: &Layout, filter_row: Option<usize>) -> Vec<serde_json::Value> {
    layout
        .relations_by_source
        .iter()
        .filter(|(source, _)| match filter_row {
            Some(row) => source.row_column().map(|(r, _)| r) == Some(row),
            None => true,
        })
        .flat_map(|(source, relations)| {
            relations.iter().map(move |relation| {
                serde_json::json!({
                    "sourceNodeId": source,
                    "targetNodeId": relation.target_id,
                    "sourceAnchor": relation.source_anchor,
                    "targetAnchor": relation.target_anchor,
                })
            })
        })
        .collect()
}
