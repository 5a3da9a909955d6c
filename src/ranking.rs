//! Ranker trait and score-ordering helpers shared by both algorithms.

use std::cmp::Ordering;

use crate::error::Result;
use crate::graph::Graph;

/// A link-analysis algorithm that scores the nodes of a [`Graph`].
///
/// Rankers hold configuration only; every call to [`rank`](Self::rank) owns
/// its own iteration state, so a ranker can be shared across threads.
pub trait Ranker {
    /// Result type produced for one graph.
    type Output: Send;

    /// Short, stable identifier (e.g., `"pagerank"`).
    fn name(&self) -> &'static str;

    /// Validate the configuration and rank every node of `graph`.
    fn rank(&self, graph: &Graph) -> Result<Self::Output>;
}

/// Node indices ordered by descending score.
///
/// Ties keep node order, so the ordering is fully deterministic.
pub fn ranked_indices(scores: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| match scores[b].total_cmp(&scores[a]) {
        Ordering::Equal => a.cmp(&b),
        other => other,
    });
    indices
}

/// `(label, score)` pairs ordered by descending score.
pub fn ranked_pairs<'a>(labels: &'a [String], scores: &[f64]) -> Vec<(&'a str, f64)> {
    ranked_indices(scores)
        .into_iter()
        .map(|i| (labels[i].as_str(), scores[i]))
        .collect()
}
