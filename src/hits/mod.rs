//! HITS algorithm: hubs and authorities.
//!
//! HITS (Hyperlink-Induced Topic Search) gives every node two scores:
//!
//! - **Authority**: how strongly the node is pointed to by good hubs
//! - **Hub**: how strongly the node points to good authorities
//!
//! In matrix form, with `A` the adjacency matrix:
//!
//! ```text
//! a = A^T × h
//! h = A × a
//! ```
//!
//! Both vectors are kept at unit Euclidean norm, so they approximate the
//! principal eigenvectors of `A^T A` (authorities) and `A A^T` (hubs). They
//! are not probability distributions.

pub mod standard;

use serde::Serialize;

use crate::ranking::ranked_pairs;

pub use standard::{Hits, HubAuthority};

/// HITS scores for a single node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HitsScores {
    /// Hub score: how well this node points to authorities.
    pub hub: f64,
    /// Authority score: how well this node is pointed to by hubs.
    pub authority: f64,
}

/// Result of a HITS computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitsResult {
    /// Node labels, in node order.
    pub labels: Vec<String>,
    /// Hub scores (unit Euclidean norm).
    pub hubs: Vec<f64>,
    /// Authority scores (unit Euclidean norm).
    pub authorities: Vec<f64>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Final hub step difference.
    pub hub_delta: f64,
    /// Final authority step difference.
    pub authority_delta: f64,
    /// Whether both vectors converged in the same iteration.
    pub converged: bool,
}

impl HitsResult {
    /// Both scores for a label.
    pub fn scores(&self, label: &str) -> Option<HitsScores> {
        self.labels
            .iter()
            .position(|l| l == label)
            .and_then(|i| self.node_scores(i))
    }

    /// Both scores for a node ID, `None` if out of range.
    pub fn node_scores(&self, node: usize) -> Option<HitsScores> {
        Some(HitsScores {
            hub: *self.hubs.get(node)?,
            authority: *self.authorities.get(node)?,
        })
    }

    /// `(label, hub score)` pairs, best hub first.
    pub fn hub_ranking(&self) -> Vec<(&str, f64)> {
        ranked_pairs(&self.labels, &self.hubs)
    }

    /// `(label, authority score)` pairs, best authority first.
    pub fn authority_ranking(&self) -> Vec<(&str, f64)> {
        ranked_pairs(&self.labels, &self.authorities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HitsResult {
        HitsResult {
            labels: vec!["h".into(), "a".into()],
            hubs: vec![1.0, 0.0],
            authorities: vec![0.0, 1.0],
            iterations: 2,
            hub_delta: 0.0,
            authority_delta: 0.0,
            converged: true,
        }
    }

    #[test]
    fn test_scores_lookup() {
        let result = sample();
        assert_eq!(
            result.scores("h"),
            Some(HitsScores {
                hub: 1.0,
                authority: 0.0
            })
        );
        assert_eq!(result.scores("missing"), None);
    }

    #[test]
    fn test_node_scores_out_of_range() {
        let result = sample();
        assert_eq!(
            result.node_scores(1),
            Some(HitsScores {
                hub: 0.0,
                authority: 1.0
            })
        );
        assert_eq!(result.node_scores(2), None);
    }

    #[test]
    fn test_rankings() {
        let result = sample();
        assert_eq!(result.hub_ranking()[0], ("h", 1.0));
        assert_eq!(result.authority_ranking()[0], ("a", 1.0));
    }
}
