//! Graph construction and representation
//!
//! This module provides the immutable dense graph that both rankers read,
//! along with the matrices derived from it.

pub mod builder;
pub mod dense;
pub mod model;

pub use builder::GraphBuilder;
pub use dense::{transition_matrix, transpose, DenseMatrix};
pub use model::{Graph, GraphSpec};
