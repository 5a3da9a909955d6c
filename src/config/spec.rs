//! Ranking configuration types.
//!
//! A [`RankConfig`] carries the iteration budget, the convergence tolerance
//! and (for PageRank) the damping factor. It is the input to the
//! [`super::validation::ValidationEngine`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "max_iterations": 100,
//!   "tolerance": 1e-6,
//!   "damping": 0.85,
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default iteration budget.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Default convergence tolerance (Euclidean step difference).
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default PageRank damping factor.
pub const DEFAULT_DAMPING: f64 = 0.85;

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

/// Configuration shared by all rankers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankConfig {
    /// Maximum number of power-iteration steps.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Convergence tolerance on the Euclidean step difference.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// PageRank damping factor. `None` for rankers that have no damping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damping: Option<f64>,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            damping: None,
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl RankConfig {
    /// Parse a configuration from JSON.
    ///
    /// Only syntax is checked here; run it through the validation engine (or
    /// [`RankConfig::validated`]) before use.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Damping factor, falling back to [`DEFAULT_DAMPING`].
    pub fn damping_or_default(&self) -> f64 {
        self.damping.unwrap_or(DEFAULT_DAMPING)
    }

    /// Validate with the default rule set, returning the config on success.
    pub fn validated(self) -> Result<Self> {
        super::validation::ValidationEngine::with_defaults()
            .validate(&self)
            .into_result()?;
        Ok(self)
    }
}
