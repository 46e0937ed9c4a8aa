//! Graph construction and representation
//!
//! This module provides a validating builder and an immutable CSR-backed
//! directed graph shared by both ranking engines.

pub mod builder;
pub mod csr;

pub use builder::GraphBuilder;
pub use csr::DiGraph;
