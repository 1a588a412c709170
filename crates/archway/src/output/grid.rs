//! Dependency grid and relation-list rendering for `archway layout` and
//! `archway relations` output.

use std::collections::HashMap;
use std::io::{self, Write};

use archway_layout::{Layout, NodeId};
use colored::Colorize;

use super::OutputConfig;

/// Human-readable label for a grid cell, e.g. `Payments sprint 2` or
/// `Payments backlog`.
///
/// Falls back to the raw id for ids that do not decode (which the engine
/// never produces, but the renderer should not panic over).
pub fn cell_label(layout: &Layout, id: &NodeId) -> String {
    match id.row_column() {
        Some((row, column)) => {
            let team = layout.teams.get(row).map_or("?", String::as_str);
            if column == layout.backlog_column {
                format!("{team} backlog")
            } else {
                format!("{team} sprint {column}")
            }
        }
        None => id.to_string(),
    }
}

/// Print the team-by-sprint grid with per-cell outgoing-dependency counts.
pub fn print_grid(layout: &Layout, config: &OutputConfig) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_grid(&mut handle, layout, config)
}

/// Print the anchored relation list, optionally limited to one source row.
pub fn print_relation_list(
    layout: &Layout,
    filter_row: Option<usize>,
    config: &OutputConfig,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_relation_list(&mut handle, layout, filter_row, config)
}

/// Render the grid.
///
/// One row per team, one column per sprint plus the trailing backlog
/// column. Each cell shows how many outgoing dependencies leave it.
fn write_grid<W: Write>(w: &mut W, layout: &Layout, config: &OutputConfig) -> io::Result<()> {
    let empty_mark = if config.use_ascii { "-" } else { "·" };

    // Outgoing-relation count per (row, column) cell.
    let mut counts: HashMap<(usize, u32), usize> = HashMap::new();
    for (source, relations) in &layout.relations_by_source {
        if let Some(cell) = source.row_column() {
            counts.insert(cell, relations.len());
        }
    }

    let headers: Vec<String> = (1..=layout.max_sprint)
        .map(|s| format!("Sprint {s}"))
        .chain(std::iter::once("Backlog".to_string()))
        .collect();

    let team_width = layout
        .teams
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max(4)
        + 2;
    let cell_width = headers.iter().map(String::len).max().unwrap_or(7) + 3;

    // Header row. Pad first, colorize after, so escape codes do not skew
    // the column widths.
    write!(w, "{:team_width$}", "")?;
    for header in &headers {
        let padded = format!("{header:<cell_width$}");
        if config.use_colors {
            write!(w, "{}", padded.dimmed())?;
        } else {
            write!(w, "{padded}")?;
        }
    }
    writeln!(w)?;

    for (row, team) in layout.teams.iter().enumerate() {
        let padded_team = format!("{team:<team_width$}");
        if config.use_colors {
            write!(w, "{}", padded_team.bold())?;
        } else {
            write!(w, "{padded_team}")?;
        }

        for column in 1..=layout.backlog_column {
            let cell = match counts.get(&(row, column)) {
                Some(count) => {
                    let text = if config.use_ascii {
                        format!("{count} dep(s)")
                    } else {
                        format!("{count} ↦")
                    };
                    let padded = format!("{text:<cell_width$}");
                    if config.use_colors {
                        padded.cyan().to_string()
                    } else {
                        padded
                    }
                }
                None => format!("{empty_mark:<cell_width$}"),
            };
            write!(w, "{cell}")?;
        }
        writeln!(w)?;
    }

    Ok(())
}

/// Render the relation list, one line per dependency edge:
///
/// ```text
/// Payments sprint 2   ──▶  Platform sprint 1   [left → right]
/// ```
fn write_relation_list<W: Write>(
    w: &mut W,
    layout: &Layout,
    filter_row: Option<usize>,
    config: &OutputConfig,
) -> io::Result<()> {
    let (arrow, anchor_sep) = if config.use_ascii {
        ("->", "->")
    } else {
        ("──▶", "→")
    };

    let mut lines: Vec<(String, String, String)> = Vec::new();
    for (source, relations) in &layout.relations_by_source {
        if let Some(row) = filter_row {
            if source.row_column().map(|(r, _)| r) != Some(row) {
                continue;
            }
        }
        for relation in relations {
            lines.push((
                cell_label(layout, source),
                cell_label(layout, &relation.target_id),
                format!(
                    "[{} {anchor_sep} {}]",
                    relation.source_anchor, relation.target_anchor
                ),
            ));
        }
    }

    if lines.is_empty() {
        writeln!(w, "No dependencies yet!")?;
        return Ok(());
    }

    let source_width = lines.iter().map(|(s, _, _)| s.len()).max().unwrap_or(0);
    let target_width = lines.iter().map(|(_, t, _)| t.len()).max().unwrap_or(0);

    for (source, target, anchors) in lines {
        let anchors = if config.use_colors {
            anchors.dimmed().to_string()
        } else {
            anchors
        };
        writeln!(
            w,
            "{source:<source_width$}  {arrow}  {target:<target_width$}  {anchors}"
        )?;
    }

    Ok(())
}
