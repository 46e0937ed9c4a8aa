//! Graph builder with label interning and edge validation
//!
//! This module provides a mutable builder that uses FxHashMap for O(1)
//! label lookups during construction. Validation happens once, at
//! [`GraphBuilder::build`], so the resulting [`DiGraph`] never holds an
//! edge pointing outside the node set.

use rustc_hash::FxHashMap;

use super::csr::DiGraph;
use crate::error::GraphError;

/// A mutable directed-graph builder optimized for incremental construction.
///
/// Node labels are interned to dense `u32` ids in insertion order. Edges are
/// stored raw and only checked against the node table when the graph is
/// frozen, so callers may add edges before all nodes exist.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Maps label -> node ID
    label_to_id: FxHashMap<String, u32>,
    /// Labels in id order
    labels: Vec<String>,
    /// Raw directed edges, validated at build time
    edges: Vec<(u32, u32)>,
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            label_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            labels: Vec::with_capacity(node_capacity),
            edges: Vec::with_capacity(edge_capacity),
        }
    }

    /// Get or create a node for the given label, returning its ID
    pub fn add_node(&mut self, label: &str) -> u32 {
        if let Some(&id) = self.label_to_id.get(label) {
            return id;
        }

        let id = self.labels.len() as u32;
        self.label_to_id.insert(label.to_string(), id);
        self.labels.push(label.to_string());
        id
    }

    /// Add a directed edge between two node ids.
    ///
    /// The ids are not checked here; [`build`](Self::build) rejects edges
    /// whose endpoints were never added.
    pub fn add_edge(&mut self, from: u32, to: u32) {
        self.edges.push((from, to));
    }

    /// Build a graph directly from an edge list of labels.
    ///
    /// Every endpoint label is interned automatically, so the resulting
    /// builder can never fail validation. Nodes that only ever appear as
    /// targets come out dangling.
    pub fn from_edge_list<S: AsRef<str>>(edges: &[(S, S)]) -> Self {
        let mut builder = Self::with_capacity(edges.len(), edges.len());
        for (from, to) in edges {
            let from = builder.add_node(from.as_ref());
            let to = builder.add_node(to.as_ref());
            builder.add_edge(from, to);
        }
        builder
    }

    /// Get a node ID by label
    pub fn node_id(&self, label: &str) -> Option<u32> {
        self.label_to_id.get(label).copied()
    }

    /// Get the number of nodes added so far
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Get the number of edges added so far (duplicates included)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the builder holds no nodes
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Validate all edges and freeze into an immutable [`DiGraph`].
    ///
    /// Fails with [`GraphError::InvalidEdge`] if any edge endpoint is not a
    /// known node id. Duplicate edges collapse and each adjacency list is
    /// sorted by target id, so neighbor iteration is deterministic.
    pub fn build(self) -> Result<DiGraph, GraphError> {
        let num_nodes = self.labels.len();

        let mut adjacency: Vec<Vec<u32>> = vec![Vec::new(); num_nodes];
        for &(from, to) in &self.edges {
            if from as usize >= num_nodes || to as usize >= num_nodes {
                return Err(GraphError::InvalidEdge {
                    from,
                    to,
                    num_nodes,
                });
            }
            adjacency[from as usize].push(to);
        }

        for targets in &mut adjacency {
            targets.sort_unstable();
            targets.dedup();
        }

        Ok(DiGraph::from_parts(self.labels, adjacency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_interning() {
        let mut builder = GraphBuilder::new();

        let a = builder.add_node("a");
        let b = builder.add_node("b");
        let a2 = builder.add_node("a"); // duplicate

        assert_eq!(a, a2); // Same label should get same ID
        assert_ne!(a, b);
        assert_eq!(builder.node_count(), 2);
    }

    #[test]
    fn test_from_edge_list() {
        let builder = GraphBuilder::from_edge_list(&[("1", "2"), ("2", "3"), ("3", "1")]);

        assert_eq!(builder.node_count(), 3);
        assert_eq!(builder.edge_count(), 3);

        let graph = builder.build().unwrap();
        assert_eq!(graph.num_edges(), 3);
    }

    #[test]
    fn test_invalid_edge_rejected() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node("a");
        builder.add_edge(a, 7); // node 7 was never added

        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidEdge {
                from: 0,
                to: 7,
                num_nodes: 1
            }
        );
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node("a");
        let b = builder.add_node("b");
        builder.add_edge(a, b);
        builder.add_edge(a, b);

        let graph = builder.build().unwrap();
        assert_eq!(graph.out_degree(a), 1);
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn test_neighbors_sorted() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_node("a");
        let b = builder.add_node("b");
        let c = builder.add_node("c");
        builder.add_edge(a, c);
        builder.add_edge(a, b);

        let graph = builder.build().unwrap();
        assert_eq!(graph.neighbors(a), &[b, c]);
    }

    #[test]
    fn test_target_only_node_is_dangling() {
        let graph = GraphBuilder::from_edge_list(&[("a", "b")]).build().unwrap();
        let b = graph.node_id("b").unwrap();

        assert!(graph.is_dangling(b));
    }
}
