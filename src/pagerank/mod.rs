//! PageRank algorithm
//!
//! This module provides the damped random-surfer ranking over a graph's
//! column-stochastic transition matrix.

pub mod standard;

use serde::Serialize;

use crate::ranking::ranked_pairs;

pub use standard::{DampedTransition, PageRank};

/// Result of a PageRank computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRankResult {
    /// Node labels, in node order
    pub labels: Vec<String>,
    /// Scores for each node (indexed by node ID), summing to 1
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta (Euclidean)
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
    /// Total mass of the last iterate before the final renormalization.
    ///
    /// Equals 1 when no mass leaks; falls below 1 when dangling nodes hold
    /// probability mass, since their transition columns are zero.
    pub mass: f64,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(
        labels: Vec<String>,
        scores: Vec<f64>,
        iterations: usize,
        delta: f64,
        converged: bool,
        mass: f64,
    ) -> Self {
        Self {
            labels,
            scores,
            iterations,
            delta,
            converged,
            mass,
        }
    }

    /// All `(label, score)` pairs, highest score first
    pub fn ranking(&self) -> Vec<(&str, f64)> {
        ranked_pairs(&self.labels, &self.scores)
    }

    /// Get top N nodes by score
    pub fn top_n(&self, n: usize) -> Vec<(&str, f64)> {
        let mut ranked = self.ranking();
        ranked.truncate(n);
        ranked
    }

    /// Get the score for a label
    pub fn score(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.scores[i])
    }

    /// Get the score for a node ID
    pub fn node_score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }

    /// Unnormalized scores as they stood when iteration stopped
    pub fn raw_scores(&self) -> Vec<f64> {
        self.scores.iter().map(|s| s * self.mass).collect()
    }
}
