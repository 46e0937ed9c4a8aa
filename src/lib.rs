//! # surfrank
//!
//! Two complementary estimates of node importance in a directed graph over
//! one shared, immutable graph representation:
//!
//! - [`PageRankSolver`] — the analytic route: power iteration of the
//!   PageRank update until the vector stabilizes under an L1 threshold.
//! - [`RandomSurfer`] — the sampling route: a seeded Monte-Carlo walk whose
//!   visit counts approximate the same stationary distribution.
//!
//! The [`compare`] module turns both outputs into comparable distributions
//! and orderings. Dataset loading and result persistence live outside this
//! crate; build a graph with [`GraphBuilder`], hand it to either engine, and
//! pass the resulting vectors to whatever reporting layer you use.
//!
//! ```
//! use surfrank::{GraphBuilder, PageRankSolver, RandomSurfer, compare};
//!
//! let graph = GraphBuilder::from_edge_list(&[("1", "2"), ("2", "3"), ("3", "1"), ("3", "4")])
//!     .build()
//!     .unwrap();
//!
//! let ranks = PageRankSolver::new().solve(&graph).unwrap();
//! let visits = RandomSurfer::new().with_seed(42).simulate(&graph).unwrap();
//!
//! let agreement = compare::spearman(&ranks.scores, &visits.distribution()).unwrap();
//! assert!(agreement > 0.0);
//! ```
//!
//! Both engines are single-threaded and side-effect-free; the graph is
//! read-only after construction, so independent runs may safely share it
//! (see [`surfer::simulator::simulate_many`] for the seed fan-out helper).

pub mod compare;
pub mod config;
pub mod error;
pub mod graph;
pub mod pagerank;
pub mod surfer;
pub mod telemetry;

pub use config::RankConfig;
pub use error::{GraphError, RankError};
pub use graph::{DiGraph, GraphBuilder};
pub use pagerank::{PageRankResult, PageRankSolver};
pub use surfer::{RandomSurfer, VisitDistribution};
pub use telemetry::{timed, RunReport};
