//! Random-surfer walk engine
//!
//! A single surfer takes `num_steps` transitions: with probability `damping`
//! it follows a uniformly-chosen out-edge, otherwise it teleports to a
//! uniformly-chosen node. A dangling current node forces a teleport, so the
//! surfer can never get stuck. Every step increments the visit counter at
//! the post-transition node, exactly once.
//!
//! The RNG is created from the seed inside each call, so identical seeds on
//! the same graph produce bit-identical visit sequences.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::VisitDistribution;
use crate::config::RankConfig;
use crate::error::RankError;
use crate::graph::csr::DiGraph;

/// Monte-Carlo random-surfer simulator.
///
/// A fixed-budget estimator, not an iterative solver: there is no
/// convergence check, the walk always runs for exactly `num_steps` steps.
#[derive(Debug, Clone)]
pub struct RandomSurfer {
    /// Probability of following an out-edge rather than teleporting
    pub damping: f64,
    /// Number of steps to walk
    pub num_steps: u64,
    /// Seed for the per-run RNG
    pub seed: u64,
    /// Optional fixed start node; uniform-random when `None`
    pub start_node: Option<u32>,
}

impl Default for RandomSurfer {
    fn default() -> Self {
        Self {
            damping: 0.85,
            num_steps: 100_000,
            seed: 0,
            start_node: None,
        }
    }
}

impl RandomSurfer {
    /// Create a new simulator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulator from a [`RankConfig`]
    pub fn from_config(config: &RankConfig) -> Self {
        Self {
            damping: config.damping,
            num_steps: config.num_steps,
            seed: config.rng_seed,
            start_node: None,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the walk length
    pub fn with_num_steps(mut self, num_steps: u64) -> Self {
        self.num_steps = num_steps;
        self
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fix the start node instead of drawing it uniformly
    pub fn with_start_node(mut self, node: u32) -> Self {
        self.start_node = Some(node);
        self
    }

    fn validate(&self, graph: &DiGraph) -> Result<(), RankError> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(RankError::InvalidParameter(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }
        if self.num_steps == 0 {
            return Err(RankError::InvalidParameter(
                "num_steps must be > 0".to_string(),
            ));
        }
        if graph.is_empty() {
            return Err(RankError::InvalidParameter(
                "cannot walk an empty graph".to_string(),
            ));
        }
        if let Some(start) = self.start_node {
            if start as usize >= graph.num_nodes() {
                return Err(RankError::InvalidParameter(format!(
                    "start node {start} outside graph of {} nodes",
                    graph.num_nodes()
                )));
            }
        }
        Ok(())
    }

    /// Walk the graph and collect visit counts.
    ///
    /// The start node itself is not counted; counting begins with the first
    /// transition, so the counts sum to exactly `num_steps`.
    pub fn simulate(&self, graph: &DiGraph) -> Result<VisitDistribution, RankError> {
        self.validate(graph)?;

        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!(
            "surfer_simulate",
            nodes = graph.num_nodes(),
            steps = self.num_steps,
            seed = self.seed
        )
        .entered();

        let n = graph.num_nodes() as u32;
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut counts = vec![0u64; n as usize];

        let mut current = match self.start_node {
            Some(start) => start,
            None => rng.gen_range(0..n),
        };

        for _ in 0..self.num_steps {
            // Dangling nodes force a teleport regardless of the damping draw
            current = if graph.is_dangling(current) || rng.gen::<f64>() >= self.damping {
                rng.gen_range(0..n)
            } else {
                let neighbors = graph.neighbors(current);
                neighbors[rng.gen_range(0..neighbors.len())]
            };
            counts[current as usize] += 1;
        }

        Ok(VisitDistribution::new(counts, self.num_steps))
    }
}

/// Run one simulation per seed on the rayon pool.
///
/// Each walk is an independent sequential Markov chain; fanning out over
/// seeds is the one parallelism the engines allow, since the graph is
/// read-only. Results come back in seed order.
pub fn simulate_many(
    graph: &DiGraph,
    surfer: &RandomSurfer,
    seeds: &[u64],
) -> Result<Vec<VisitDistribution>, RankError> {
    seeds
        .par_iter()
        .map(|&seed| surfer.clone().with_seed(seed).simulate(graph))
        .collect()
}
