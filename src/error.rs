//! Error taxonomy.
//!
//! Graph construction and the ranking engines fail fast at call boundaries;
//! none of the errors here are retryable. Running out of iteration budget is
//! deliberately *not* an error — see
//! [`PageRankResult::converged`](crate::pagerank::PageRankResult).

use thiserror::Error;

/// Errors raised while building a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge references a node id that was never added to the builder.
    #[error("edge ({from} -> {to}) references a node outside the graph ({num_nodes} nodes)")]
    InvalidEdge { from: u32, to: u32, num_nodes: usize },
}

/// Errors raised by the ranking engines and the comparator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    /// A configuration value is out of its documented range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Two distributions handed to the comparator cover different node sets.
    #[error("distributions cover different node sets ({left} vs {right} nodes)")]
    DomainMismatch { left: usize, right: usize },
}
