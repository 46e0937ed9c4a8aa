//! Engine configuration.
//!
//! [`RankConfig`] carries the shared parameter set for both engines. It is
//! serde-deserializable so an outer reporting or CLI layer can hand in JSON;
//! every field has a default and unknown fields are captured rather than
//! rejected, so configs written against newer versions still parse.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "damping": 0.85,
//!   "tolerance": 1e-8,
//!   "max_iterations": 100,
//!   "num_steps": 100000,
//!   "rng_seed": 42
//! }
//! ```
//!
//! Parsing and validation are separate steps: call [`RankConfig::validate`]
//! before handing the config to an engine to get range errors up front.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::RankError;

fn default_damping() -> f64 {
    0.85
}

fn default_tolerance() -> f64 {
    1e-8
}

fn default_max_iterations() -> usize {
    100
}

fn default_num_steps() -> u64 {
    100_000
}

/// Shared configuration for the PageRank solver and the random surfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following an edge versus teleporting; in (0, 1).
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// PageRank L1 convergence threshold; > 0.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// PageRank hard iteration cap; > 0.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Random-surfer walk length; > 0.
    #[serde(default = "default_num_steps")]
    pub num_steps: u64,

    /// Random-surfer reproducibility seed.
    #[serde(default)]
    pub rng_seed: u64,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            num_steps: default_num_steps(),
            rng_seed: 0,
            unknown_fields: HashMap::new(),
        }
    }
}

impl RankConfig {
    /// Check every parameter range.
    ///
    /// The engines re-check the parameters they use at entry; calling this
    /// first just surfaces problems before any work is scheduled.
    pub fn validate(&self) -> Result<(), RankError> {
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
        if self.num_steps == 0 {
            return Err(RankError::InvalidParameter(
                "num_steps must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RankConfig::default();
        assert_eq!(config.damping, 0.85);
        assert_eq!(config.tolerance, 1e-8);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.num_steps, 100_000);
        assert_eq!(config.rng_seed, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: RankConfig = serde_json::from_str(r#"{ "damping": 0.5 }"#).unwrap();
        assert_eq!(config.damping, 0.5);
        assert_eq!(config.max_iterations, 100); // default kept
    }

    #[test]
    fn test_unknown_fields_captured() {
        let config: RankConfig =
            serde_json::from_str(r#"{ "rng_seed": 7, "plot_charts": true }"#).unwrap();
        assert_eq!(config.rng_seed, 7);
        assert!(config.unknown_fields.contains_key("plot_charts"));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut config = RankConfig::default();
        config.damping = 1.0;
        assert!(matches!(
            config.validate(),
            Err(RankError::InvalidParameter(_))
        ));

        let mut config = RankConfig::default();
        config.tolerance = -1.0;
        assert!(config.validate().is_err());

        let mut config = RankConfig::default();
        config.max_iterations = 0;
        assert!(config.validate().is_err());

        let mut config = RankConfig::default();
        config.num_steps = 0;
        assert!(config.validate().is_err());
    }
}
