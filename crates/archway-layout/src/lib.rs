//! Cross-team dependency grid layout engine for sprint boards.
//!
//! Given a fetched board dependency payload (a flat list of "story in
//! team/sprint X depends on story in team/sprint Y" edges plus the number
//! of sprint columns), this library assigns each team a grid row, each
//! sprint a column (with a synthetic backlog column after the last sprint),
//! and computes, per edge, which side of each grid cell the connecting
//! arrow should leave from and arrive at. The result is a grouped,
//! renderer-ready relation map; actually drawing the grid is the caller's
//! concern.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod analysis;
pub mod error;
pub mod layout;
pub mod payload;

pub use analysis::DependencyGraph;
pub use error::{Error, Result};
pub use layout::{compute_layout, Anchor, Layout, NodeId, Relation};
pub use payload::{DependencyEdge, DependencyPayload, Endpoint};
