//! Random-surfer Monte-Carlo simulation
//!
//! The sampling half of the crate: a single agent walks the graph for a
//! fixed step budget, and its visit counts approximate the same stationary
//! distribution the power iteration computes analytically.

pub mod simulator;

pub use simulator::{simulate_many, RandomSurfer};

use crate::error::RankError;

/// Visit counts collected over one simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitDistribution {
    /// Number of visits per node (indexed by node ID)
    pub counts: Vec<u64>,
    /// Total number of steps taken; equals the sum of all counts
    pub num_steps: u64,
}

impl VisitDistribution {
    /// Create a new visit distribution
    pub fn new(counts: Vec<u64>, num_steps: u64) -> Self {
        Self { counts, num_steps }
    }

    /// Get the visit count for a specific node
    pub fn visits(&self, node: u32) -> u64 {
        self.counts.get(node as usize).copied().unwrap_or(0)
    }

    /// Empirical probability of each node: visits / num_steps
    pub fn distribution(&self) -> Vec<f64> {
        self.counts
            .iter()
            .map(|&c| c as f64 / self.num_steps as f64)
            .collect()
    }

    /// Get top N nodes by visit count (ties broken by ascending node id)
    pub fn top_n(&self, n: usize) -> Vec<(u32, u64)> {
        let mut indexed: Vec<_> = self
            .counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as u32, c))
            .collect();
        indexed.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        indexed.truncate(n);
        indexed
    }
}

/// Average the empirical distributions of several runs.
///
/// Useful together with [`simulator::simulate_many`] to smooth Monte-Carlo
/// noise across seeds. Fails with [`RankError::DomainMismatch`] if the runs
/// cover different node sets, or [`RankError::InvalidParameter`] when given
/// no runs at all.
pub fn mean_distribution(runs: &[VisitDistribution]) -> Result<Vec<f64>, RankError> {
    let first = runs.first().ok_or_else(|| {
        RankError::InvalidParameter("mean_distribution needs at least one run".to_string())
    })?;

    let n = first.counts.len();
    let mut mean = vec![0.0; n];
    for run in runs {
        if run.counts.len() != n {
            return Err(RankError::DomainMismatch {
                left: n,
                right: run.counts.len(),
            });
        }
        for (acc, p) in mean.iter_mut().zip(run.distribution()) {
            *acc += p;
        }
    }
    for acc in &mut mean {
        *acc /= runs.len() as f64;
    }
    Ok(mean)
}
