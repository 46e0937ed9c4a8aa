//! Run timing and metadata.
//!
//! The engines themselves never touch the clock; timing wraps around them as
//! a decorator so `solve` and `simulate` stay pure. The reporting layer can
//! serialize [`RunReport`]s straight into its CSV rows.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::pagerank::PageRankResult;
use crate::surfer::VisitDistribution;

/// Time a single engine call.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Which engine produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    PageRank,
    RandomSurfer,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PageRank => "page_rank",
            Self::RandomSurfer => "random_surfer",
        }
    }
}

/// Metadata for one engine run, handed to the external reporting layer.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub engine: Engine,
    /// Wall-clock time of the engine call
    pub elapsed: Duration,
    /// Iterations used (solver) or steps walked (surfer)
    pub budget_used: u64,
    /// Always `true` for the surfer, which has no convergence notion
    pub converged: bool,
}

impl RunReport {
    /// Build a report from a solver run.
    pub fn pagerank(result: &PageRankResult, elapsed: Duration) -> Self {
        Self {
            engine: Engine::PageRank,
            elapsed,
            budget_used: result.iterations as u64,
            converged: result.converged,
        }
    }

    /// Build a report from a simulator run.
    pub fn surfer(visits: &VisitDistribution, elapsed: Duration) -> Self {
        Self {
            engine: Engine::RandomSurfer,
            elapsed,
            budget_used: visits.num_steps,
            converged: true,
        }
    }
}
