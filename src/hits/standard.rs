//! Standard HITS power iteration

use super::HitsResult;
use crate::config::{RankConfig, ValidationEngine};
use crate::error::Result;
use crate::graph::{DenseMatrix, Graph};
use crate::iteration::{Normalization, PowerIteration, UpdateRule};
use crate::ranking::Ranker;

/// Index of the hub vector in the iteration state.
pub const HUB: usize = 0;
/// Index of the authority vector in the iteration state.
pub const AUTHORITY: usize = 1;

/// The coupled hub/authority update.
///
/// Order matters: the authority update reads the previous hub vector, and the
/// hub update reads the authority vector normalized in the same step.
#[derive(Debug, Clone, Copy)]
pub struct HubAuthority<'a> {
    /// Adjacency matrix `A`
    pub adjacency: &'a DenseMatrix,
    /// Transpose `A^T`
    pub transpose: &'a DenseMatrix,
}

impl UpdateRule for HubAuthority<'_> {
    fn step(&self, current: &[Vec<f64>], next: &mut [Vec<f64>]) {
        let (hub, authority) = next.split_at_mut(AUTHORITY);
        let (hub, authority) = (&mut hub[HUB], &mut authority[0]);

        // auth = A^T · hub
        self.transpose.mul_vec_into(&current[HUB], authority);
        Normalization::L2.apply(authority);

        // hub = A · auth
        self.adjacency.mul_vec_into(authority.as_slice(), hub);
    }
}

/// HITS ranker.
#[derive(Debug, Clone)]
pub struct Hits {
    /// Maximum iterations.
    pub max_iterations: usize,
    /// Convergence tolerance, applied to both vectors.
    pub tolerance: f64,
}

impl Default for Hits {
    fn default() -> Self {
        let config = RankConfig::default();
        Self {
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
        }
    }
}

impl Hits {
    /// Create a HITS ranker with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a validated [`RankConfig`]. The damping factor is ignored.
    ///
    /// Fails if the config does not validate, including an unrecognized field
    /// under `strict`.
    pub fn from_config(config: &RankConfig) -> Result<Self> {
        ValidationEngine::with_defaults()
            .validate(config)
            .into_result()?;

        Ok(Self {
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
        })
    }

    /// Set the maximum iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance for both vectors.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The configuration this ranker runs with.
    pub fn config(&self) -> RankConfig {
        RankConfig {
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
            ..Default::default()
        }
    }

    /// Check budget and tolerance before any iteration.
    pub fn validate(&self) -> Result<()> {
        ValidationEngine::with_defaults()
            .validate(&self.config())
            .into_result()
    }

    /// Compute hub and authority scores.
    ///
    /// Both vectors start at all ones and are L2-normalized every step. The
    /// run converges only when both step differences are below tolerance in
    /// the same iteration.
    ///
    /// A graph without edges keeps both vectors at zero, since there is
    /// nothing to normalize.
    ///
    /// # Complexity
    ///
    /// - Time: O(N² × iterations)
    /// - Space: O(N)
    pub fn run(&self, graph: &Graph) -> Result<HitsResult> {
        self.validate()?;

        let n = graph.num_nodes();
        trace_run!("hits", nodes = n);

        if n == 0 {
            return Ok(HitsResult {
                labels: vec![],
                hubs: vec![],
                authorities: vec![],
                iterations: 0,
                hub_delta: 0.0,
                authority_delta: 0.0,
                converged: true,
            });
        }

        let rule = HubAuthority {
            adjacency: graph.adjacency(),
            transpose: graph.transpose(),
        };
        let engine = PowerIteration::new()
            .with_max_iterations(self.max_iterations)
            .with_tolerance(self.tolerance);

        let outcome = engine.run(&rule, Normalization::L2, vec![vec![1.0; n]; 2])?;

        trace_event!(
            debug,
            iterations = outcome.iterations,
            converged = outcome.converged,
            "hits finished"
        );

        let hub_delta = outcome.deltas[HUB];
        let authority_delta = outcome.deltas[AUTHORITY];
        let mut vectors = outcome.vectors.into_iter();
        let hubs = vectors.next().unwrap_or_default();
        let authorities = vectors.next().unwrap_or_default();

        Ok(HitsResult {
            labels: graph.labels().to_vec(),
            hubs,
            authorities,
            iterations: outcome.iterations,
            hub_delta,
            authority_delta,
            converged: outcome.converged,
        })
    }
}

impl Ranker for Hits {
    type Output = HitsResult;

    fn name(&self) -> &'static str {
        "hits"
    }

    fn rank(&self, graph: &Graph) -> Result<HitsResult> {
        self.run(graph)
    }
}
