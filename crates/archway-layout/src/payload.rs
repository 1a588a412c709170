//! Deserialization types for the board dependency payload.
//!
//! The layout engine operates on already-fetched data: the board service
//! answers `GET /boards/dependencies` with a flat list of cross-team story
//! dependencies plus the number of sprint columns to display. These types
//! mirror that wire shape (camelCase field names) and nothing else: no
//! transport, no retries, no validation beyond what serde enforces.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The complete dependency payload for a board set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyPayload {
    /// Number of real sprint columns to display.
    ///
    /// Supplied by the payload, independent of what the edges reference.
    /// The synthetic backlog column is always `max_sprint + 1`.
    pub max_sprint: u32,

    /// Cross-team dependency edges, in fetch order.
    #[serde(default)]
    pub deps: Vec<DependencyEdge>,
}

/// A single "story in team/sprint X depends on story in team/sprint Y" edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// The depending endpoint.
    pub from: Endpoint,

    /// The depended-upon endpoint.
    pub to: Endpoint,
}

/// One side of a dependency edge: a team name plus an optional sprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Team name, unique within a board set.
    pub name: String,

    /// Sprint number the story is scheduled in.
    ///
    /// Absent, `null`, or `0` means the story is unscheduled and lives in
    /// the backlog column. The upstream API treats a falsy sprint as
    /// backlog, so `0` is preserved here and resolved by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint: Option<u32>,
}

impl DependencyPayload {
    /// Parse a payload from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a payload from any reader producing JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Endpoint {
    /// Create a scheduled endpoint.
    pub fn scheduled(name: impl Into<String>, sprint: u32) -> Self {
        Self {
            name: name.into(),
            sprint: Some(sprint),
        }
    }

    /// Create an unscheduled (backlog) endpoint.
    pub fn backlog(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sprint: None,
        }
    }
}

impl DependencyEdge {
    /// Create an edge from two endpoints.
    pub fn new(from: Endpoint, to: Endpoint) -> Self {
        Self { from, to }
    }
}
