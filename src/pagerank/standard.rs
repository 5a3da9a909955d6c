//! Standard PageRank algorithm
//!
//! Implements the classic damped PageRank with power iteration:
//!
//! ```text
//! pr'[i] = (1 - d) / N + d · Σ_j M[i][j] · pr[j]
//! ```
//!
//! Dangling nodes have all-zero columns in `M`, so the mass they hold is not
//! redistributed and each step can lose some of it. The iterate is not
//! renormalized between steps; a single rescaling to sum 1 happens after the
//! loop. [`PageRankResult::mass`] records how much mass survived.

use super::PageRankResult;
use crate::config::{RankConfig, ValidationEngine, DEFAULT_DAMPING};
use crate::error::Result;
use crate::graph::{DenseMatrix, Graph};
use crate::iteration::{Normalization, PowerIteration, UpdateRule};
use crate::ranking::Ranker;

/// The damped random-surfer update over a transition matrix
#[derive(Debug, Clone, Copy)]
pub struct DampedTransition<'a> {
    /// Column-stochastic transition matrix
    pub transition: &'a DenseMatrix,
    /// Damping factor
    pub damping: f64,
}

impl UpdateRule for DampedTransition<'_> {
    fn step(&self, current: &[Vec<f64>], next: &mut [Vec<f64>]) {
        let n = self.transition.rows;
        let teleport = (1.0 - self.damping) / n as f64;

        self.transition.mul_vec_into(&current[0], &mut next[0]);
        for score in next[0].iter_mut() {
            *score = teleport + self.damping * *score;
        }
    }
}

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct PageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold
    pub tolerance: f64,
}

impl Default for PageRank {
    fn default() -> Self {
        let config = RankConfig::default();
        Self {
            damping: DEFAULT_DAMPING,
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
        }
    }
}

impl PageRank {
    /// Create a new PageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a [`RankConfig`]
    ///
    /// The whole config is validated first, so a `strict` config carrying an
    /// unrecognized field is rejected here rather than silently dropped.
    pub fn from_config(config: &RankConfig) -> Result<Self> {
        ValidationEngine::with_defaults()
            .validate(config)
            .into_result()?;

        Ok(Self {
            damping: config.damping_or_default(),
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
        })
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The configuration this ranker runs with
    pub fn config(&self) -> RankConfig {
        RankConfig {
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
            damping: Some(self.damping),
            ..Default::default()
        }
    }

    /// Check damping, budget and tolerance before any iteration
    pub fn validate(&self) -> Result<()> {
        ValidationEngine::with_defaults()
            .validate(&self.config())
            .into_result()
    }

    /// Run PageRank on a graph
    ///
    /// Returns the result even if convergence wasn't achieved, with
    /// `converged = false`. Fails only on invalid configuration.
    pub fn run(&self, graph: &Graph) -> Result<PageRankResult> {
        self.validate()?;

        let n = graph.num_nodes();
        trace_run!("pagerank", nodes = n, damping = self.damping);

        if n == 0 {
            return Ok(PageRankResult::new(vec![], vec![], 0, 0.0, true, 0.0));
        }

        let rule = DampedTransition {
            transition: graph.transition(),
            damping: self.damping,
        };
        let engine = PowerIteration::new()
            .with_max_iterations(self.max_iterations)
            .with_tolerance(self.tolerance);

        // Initialize scores uniformly
        let initial = vec![vec![1.0 / n as f64; n]];
        let outcome = engine.run(&rule, Normalization::None, initial)?;

        let delta = outcome.max_delta();
        let mut scores = outcome.vectors.into_iter().next().unwrap_or_default();

        let mass: f64 = scores.iter().sum();
        Normalization::Sum.apply(&mut scores);

        trace_event!(
            debug,
            iterations = outcome.iterations,
            converged = outcome.converged,
            mass,
            "pagerank finished"
        );

        Ok(PageRankResult::new(
            graph.labels().to_vec(),
            scores,
            outcome.iterations,
            delta,
            outcome.converged,
            mass,
        ))
    }
}

impl Ranker for PageRank {
    type Output = PageRankResult;

    fn name(&self) -> &'static str {
        "pagerank"
    }

    fn rank(&self, graph: &Graph) -> Result<PageRankResult> {
        self.run(graph)
    }
}
