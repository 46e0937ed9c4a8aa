//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR stores out-edges contiguously, making iteration over neighbors very
//! fast. Both engines spend essentially all their time walking adjacency
//! lists, so this is the layout they share.

/// An immutable directed graph in Compressed Sparse Row format.
///
/// Constructed only through [`GraphBuilder`](super::builder::GraphBuilder),
/// which validates every edge endpoint. The structure exposes no mutation,
/// so a single graph can back any number of concurrent solver or simulator
/// runs.
#[derive(Debug, Clone)]
pub struct DiGraph {
    num_nodes: usize,
    /// Node i's out-edges are at col_idx[row_ptr[i]..row_ptr[i+1]]
    row_ptr: Vec<usize>,
    /// Target node ids for each edge, sorted per source node
    col_idx: Vec<u32>,
    /// Out-degree for each node
    out_degree: Vec<u32>,
    /// Caller-visible label for each node
    labels: Vec<String>,
}

impl DiGraph {
    /// Assemble from builder output. Adjacency lists must already be sorted
    /// and deduplicated, with every target id in range.
    pub(crate) fn from_parts(labels: Vec<String>, adjacency: Vec<Vec<u32>>) -> Self {
        let num_nodes = labels.len();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut out_degree = Vec::with_capacity(num_nodes);

        row_ptr.push(0);
        for targets in &adjacency {
            out_degree.push(targets.len() as u32);
            col_idx.extend_from_slice(targets);
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            out_degree,
            labels,
        }
    }

    /// Number of nodes in the graph
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Total number of directed edges
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Out-neighbors of a node, sorted by target id
    pub fn neighbors(&self, node: u32) -> &[u32] {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        &self.col_idx[start..end]
    }

    /// Get the out-degree of a node
    pub fn out_degree(&self, node: u32) -> u32 {
        self.out_degree[node as usize]
    }

    /// A node is dangling iff it has no outgoing edges
    pub fn is_dangling(&self, node: u32) -> bool {
        self.out_degree[node as usize] == 0
    }

    /// Find all dangling nodes
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.out_degree[n as usize] == 0)
            .collect()
    }

    /// Get the label for a node
    pub fn label(&self, node: u32) -> &str {
        &self.labels[node as usize]
    }

    /// Get node ID by label (linear search - use sparingly)
    pub fn node_id(&self, label: &str) -> Option<u32> {
        self.labels.iter().position(|l| l == label).map(|i| i as u32)
    }

    /// Iterate over all node ids
    pub fn nodes(&self) -> impl Iterator<Item = u32> {
        0..self.num_nodes as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    fn build_test_graph() -> DiGraph {
        // a -> b, a -> c, b -> c; c dangling
        GraphBuilder::from_edge_list(&[("a", "b"), ("a", "c"), ("b", "c")])
            .build()
            .unwrap()
    }

    #[test]
    fn test_csr_layout() {
        let graph = build_test_graph();

        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.neighbors(0), &[1, 2]);
        assert_eq!(graph.neighbors(1), &[2]);
        assert!(graph.neighbors(2).is_empty());
    }

    #[test]
    fn test_out_degree_and_dangling() {
        let graph = build_test_graph();

        assert_eq!(graph.out_degree(0), 2);
        assert_eq!(graph.out_degree(2), 0);
        assert!(!graph.is_dangling(0));
        assert!(graph.is_dangling(2));
        assert_eq!(graph.dangling_nodes(), vec![2]);
    }

    #[test]
    fn test_labels() {
        let graph = build_test_graph();

        assert_eq!(graph.label(0), "a");
        assert_eq!(graph.node_id("c"), Some(2));
        assert_eq!(graph.node_id("z"), None);
    }

    #[test]
    fn test_empty_graph() {
        let graph = GraphBuilder::new().build().unwrap();

        assert!(graph.is_empty());
        assert_eq!(graph.num_edges(), 0);
        assert!(graph.dangling_nodes().is_empty());
    }

    #[test]
    fn test_self_loop_not_dangling() {
        let graph = GraphBuilder::from_edge_list(&[("a", "a")]).build().unwrap();

        assert!(!graph.is_dangling(0));
        assert_eq!(graph.neighbors(0), &[0]);
    }
}
