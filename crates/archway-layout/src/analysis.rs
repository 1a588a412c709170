//! Dependency graph analysis over the layout grid.
//!
//! The layout engine itself draws whatever it is given, cycles included. A
//! cycle in the cross-team view ("Payments sprint 1 waits on Platform
//! sprint 1 waits on Payments sprint 1") is a planning problem worth
//! surfacing, so this module builds a petgraph digraph over the grid cells
//! of a computed [`Layout`] and reports cycles for callers that want to
//! warn about them.

use std::collections::HashMap;

use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::layout::{Layout, NodeId};

/// Directed graph of grid cells connected by dependency relations.
#[derive(Debug)]
pub struct DependencyGraph {
    graph: DiGraph<NodeId, ()>,
    node_map: HashMap<NodeId, NodeIndex>,
}

impl DependencyGraph {
    /// Build the cell graph from a computed layout.
    ///
    /// Nodes are added in the layout's (ordered) group-map order, so the
    /// graph structure is deterministic for a given layout.
    pub fn from_layout(layout: &Layout) -> Self {
        let mut graph: DiGraph<NodeId, ()> = DiGraph::new();
        let mut node_map: HashMap<NodeId, NodeIndex> = HashMap::new();

        for (source, relations) in &layout.relations_by_source {
            let source_idx = ensure_node(&mut graph, &mut node_map, source);
            for relation in relations {
                let target_idx = ensure_node(&mut graph, &mut node_map, &relation.target_id);
                graph.add_edge(source_idx, target_idx, ());
            }
        }

        Self { graph, node_map }
    }

    /// Number of distinct cells that participate in at least one relation.
    pub fn cell_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of relations in the graph.
    pub fn relation_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true when the dependency view contains no cycles.
    ///
    /// A self-dependency (a cell depending on itself) counts as a cycle.
    pub fn is_acyclic(&self) -> bool {
        !is_cyclic_directed(&self.graph)
    }

    /// All dependency cycles, as lists of cell ids.
    ///
    /// Each entry is either a strongly connected component with more than
    /// one cell, or a single cell with a self-loop edge.
    pub fn cycles(&self) -> Vec<Vec<NodeId>> {
        let mut cycles = Vec::new();

        for component in tarjan_scc(&self.graph) {
            let is_cycle = component.len() > 1
                || component
                    .first()
                    .is_some_and(|&idx| self.graph.find_edge(idx, idx).is_some());
            if is_cycle {
                cycles.push(
                    component
                        .iter()
                        .map(|&idx| self.graph[idx].clone())
                        .collect(),
                );
            }
        }

        cycles
    }

    /// Whether a cell participates in any relation.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.node_map.contains_key(id)
    }
}

fn ensure_node(
    graph: &mut DiGraph<NodeId, ()>,
    node_map: &mut HashMap<NodeId, NodeIndex>,
    id: &NodeId,
) -> NodeIndex {
    if let Some(&idx) = node_map.get(id) {
        return idx;
    }
    let idx = graph.add_node(id.clone());
    node_map.insert(id.clone(), idx);
    idx
}
