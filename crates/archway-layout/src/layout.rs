//! The dependency layout engine.
//!
//! A pure, synchronous transformation from a [`DependencyPayload`] to a
//! renderer-ready [`Layout`]: teams become grid rows (first-seen order),
//! sprints become columns with a synthetic backlog column at
//! `max_sprint + 1`, and every dependency edge becomes one anchor-tagged
//! relation grouped under its source cell. The renderer draws a table with
//! `teams.len()` rows and `max_sprint + 1` columns and one arrow per
//! relation, leaving and arriving at the given cell sides.
//!
//! The engine never mutates its input and is deterministic: the same
//! payload always produces a structurally identical (and, thanks to the
//! ordered group map, byte-identically serializable) layout.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::payload::DependencyPayload;

/// The side of a grid cell an arrow leaves from or arrives at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Top edge of the cell.
    Top,
    /// Bottom edge of the cell.
    Bottom,
    /// Left edge of the cell.
    Left,
    /// Right edge of the cell.
    Right,
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Stable identifier for a (team row, column) grid cell.
///
/// Formatted as `board-{row}-{column}`, matching the ids the renderer
/// attaches to its grid cells. Identity depends only on the team's row
/// index and the resolved column value, so the same cell always yields the
/// same id no matter how many edges reference it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    /// Build the id for a grid cell.
    pub fn new(row: usize, column: u32) -> Self {
        Self(format!("board-{row}-{column}"))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the id back into its (row, column) pair.
    ///
    /// Returns `None` for ids that were not produced by [`NodeId::new`].
    pub fn row_column(&self) -> Option<(usize, u32)> {
        let rest = self.0.strip_prefix("board-")?;
        let (row, column) = rest.split_once('-')?;
        Some((row.parse().ok()?, column.parse().ok()?))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed, anchor-tagged relation between two grid cells.
///
/// One relation is produced per input edge and never mutated afterwards.
/// The source cell id is the key of the group the relation lives in, so it
/// is not repeated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    /// Cell the arrow points to.
    #[serde(rename = "targetNodeId")]
    pub target_id: NodeId,

    /// Side of the source cell the arrow leaves from.
    pub source_anchor: Anchor,

    /// Side of the target cell the arrow arrives at.
    pub target_anchor: Anchor,
}

/// Renderer-ready layout for the cross-team dependency grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Teams in row order: `teams[i]` occupies grid row `i`.
    pub teams: Vec<String>,

    /// Number of real sprint columns.
    pub max_sprint: u32,

    /// Column index of the synthetic backlog column (`max_sprint + 1`).
    pub backlog_column: u32,

    /// Outgoing relations grouped by source cell id.
    ///
    /// Cells with no outgoing edges are absent. Within each group the
    /// relations keep the order their edges appeared in the payload; the
    /// map itself is ordered so serialized output is reproducible.
    #[serde(rename = "relationsBySourceNodeId")]
    pub relations_by_source: BTreeMap<NodeId, Vec<Relation>>,
}

impl Layout {
    /// Row index of a team, if it participates in any edge.
    pub fn row(&self, team: &str) -> Option<usize> {
        self.teams.iter().position(|t| t == team)
    }

    /// Total number of grid columns, backlog included.
    pub fn column_count(&self) -> u32 {
        self.max_sprint + 1
    }

    /// Total number of relations across all groups.
    ///
    /// Equals the number of edges in the payload the layout was built from.
    pub fn relation_count(&self) -> usize {
        self.relations_by_source.values().map(Vec::len).sum()
    }

    /// Outgoing relations of one cell, empty if it has none.
    pub fn relations_from(&self, source: &NodeId) -> &[Relation] {
        self.relations_by_source
            .get(source)
            .map_or(&[], Vec::as_slice)
    }
}

/// Compute the dependency grid layout for a payload.
///
/// Pure function: the payload is only read, and repeated calls with the
/// same payload return identical layouts. Well-formed degenerate inputs
/// (no edges, `max_sprint == 0`, self-dependencies) are all valid.
pub fn compute_layout(payload: &DependencyPayload) -> Layout {
    let backlog_column = payload.max_sprint + 1;
    let teams = extract_teams(payload);

    // Row lookup built once and threaded through the per-edge work, rather
    // than re-scanning the team list for every endpoint.
    let rows: HashMap<&str, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, t)| (t.as_str(), i))
        .collect();

    let mut relations_by_source: BTreeMap<NodeId, Vec<Relation>> = BTreeMap::new();

    for edge in &payload.deps {
        let from_col = resolve_column(edge.from.sprint, payload.max_sprint);
        let to_col = resolve_column(edge.to.sprint, payload.max_sprint);
        let from_row = rows[edge.from.name.as_str()];
        let to_row = rows[edge.to.name.as_str()];

        let (source_anchor, target_anchor) = anchor_pair(from_row, to_row, from_col, to_col);

        let source = NodeId::new(from_row, from_col);
        let relation = Relation {
            target_id: NodeId::new(to_row, to_col),
            source_anchor,
            target_anchor,
        };
        relations_by_source.entry(source).or_default().push(relation);
    }

    tracing::debug!(
        teams = teams.len(),
        edges = payload.deps.len(),
        sources = relations_by_source.len(),
        "computed dependency grid layout"
    );

    Layout {
        teams,
        max_sprint: payload.max_sprint,
        backlog_column,
        relations_by_source,
    }
}

/// Collect participating team names, deduplicated in first-seen order.
///
/// Scans each edge's `from` name then `to` name, in edge order. The
/// resulting index of a team is its grid row.
fn extract_teams(payload: &DependencyPayload) -> Vec<String> {
    let mut teams: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for edge in &payload.deps {
        for name in [edge.from.name.as_str(), edge.to.name.as_str()] {
            if seen.insert(name) {
                teams.push(name.to_string());
            }
        }
    }

    teams
}

/// Resolve an endpoint's grid column.
///
/// A present, non-zero sprint within `1..=max_sprint` is its own column.
/// Anything else resolves to the backlog column: absent, zero (the upstream
/// API treats a falsy sprint as unscheduled), or a sprint beyond
/// `max_sprint`. Clamping out-of-range sprints keeps every emitted cell id
/// inside the `max_sprint + 1`-column grid the renderer contract promises.
fn resolve_column(sprint: Option<u32>, max_sprint: u32) -> u32 {
    match sprint {
        Some(s) if (1..=max_sprint).contains(&s) => s,
        _ => max_sprint + 1,
    }
}

/// Decide which cell sides an edge's arrow uses.
///
/// Same column: the arrow runs vertically through the lane, pointing up
/// (top, bottom) when the source sits below the target, otherwise down
/// (bottom, top). A same-cell self-loop takes the downward branch. Across
/// columns the arrow runs horizontally: backward in time is (left, right),
/// forward is (right, left).
fn anchor_pair(
    from_row: usize,
    to_row: usize,
    from_col: u32,
    to_col: u32,
) -> (Anchor, Anchor) {
    if from_col == to_col {
        if from_row > to_row {
            (Anchor::Top, Anchor::Bottom)
        } else {
            (Anchor::Bottom, Anchor::Top)
        }
    } else if from_col > to_col {
        (Anchor::Left, Anchor::Right)
    } else {
        (Anchor::Right, Anchor::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_column_upward_is_top_bottom() {
        assert_eq!(anchor_pair(2, 0, 1, 1), (Anchor::Top, Anchor::Bottom));
    }

    #[test]
    fn same_column_downward_is_bottom_top() {
        assert_eq!(anchor_pair(0, 2, 1, 1), (Anchor::Bottom, Anchor::Top));
    }

    #[test]
    fn same_cell_takes_the_downward_branch() {
        assert_eq!(anchor_pair(1, 1, 2, 2), (Anchor::Bottom, Anchor::Top));
    }

    #[test]
    fn backward_in_time_is_left_right() {
        assert_eq!(anchor_pair(0, 1, 2, 1), (Anchor::Left, Anchor::Right));
    }

    #[test]
    fn forward_in_time_is_right_left() {
        assert_eq!(anchor_pair(1, 0, 1, 3), (Anchor::Right, Anchor::Left));
    }

    #[test]
    fn scheduled_sprint_is_its_own_column() {
        assert_eq!(resolve_column(Some(2), 3), 2);
    }

    #[test]
    fn absent_sprint_is_backlog() {
        assert_eq!(resolve_column(None, 3), 4);
    }

    #[test]
    fn zero_sprint_is_backlog() {
        assert_eq!(resolve_column(Some(0), 3), 4);
    }

    #[test]
    fn out_of_range_sprint_clamps_to_backlog() {
        assert_eq!(resolve_column(Some(7), 3), 4);
    }

    #[test]
    fn zero_max_sprint_sends_everything_to_backlog() {
        assert_eq!(resolve_column(Some(1), 0), 1);
        assert_eq!(resolve_column(None, 0), 1);
    }

    #[test]
    fn node_id_format_is_stable() {
        assert_eq!(NodeId::new(0, 3).as_str(), "board-0-3");
        assert_eq!(NodeId::new(12, 1).to_string(), "board-12-1");
    }

    #[test]
    fn node_id_round_trips_through_decode() {
        assert_eq!(NodeId::new(4, 2).row_column(), Some((4, 2)));
        assert_eq!(NodeId::new(0, 10).row_column(), Some((0, 10)));
    }
}
