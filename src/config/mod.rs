//! Ranking configuration and its validation

pub mod errors;
pub mod spec;
pub mod validation;

pub use errors::{ConfigError, ErrorCode};
pub use spec::{RankConfig, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
pub use validation::{ValidationEngine, ValidationReport};
