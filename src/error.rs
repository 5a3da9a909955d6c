//! Error types for link analysis.

use thiserror::Error;

/// Error type for graph construction and ranking.
///
/// Non-convergence is not represented here: a run that exhausts its
/// iteration budget still returns a result, flagged with `converged = false`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The adjacency matrix is not square, has ragged rows, or does not
    /// match the number of labels.
    #[error("shape error: {0}")]
    Shape(String),

    /// Two nodes share the same label.
    #[error("duplicate node label: {0}")]
    DuplicateLabel(String),

    /// An adjacency entry is negative or not finite, or pushes a row or
    /// column total out of the `f64` range.
    #[error("invalid weight {weight} at ({row}, {col})")]
    InvalidWeight { row: usize, col: usize, weight: f64 },

    /// A label was referenced that the graph does not contain.
    #[error("unknown node label: {0}")]
    UnknownLabel(String),

    /// A ranking parameter is outside its valid range.
    #[error("invalid configuration at {path}: {message}")]
    InvalidConfiguration { path: String, message: String },

    /// A JSON document could not be parsed.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

/// Result type for link analysis operations.
pub type Result<T> = std::result::Result<T, Error>;
