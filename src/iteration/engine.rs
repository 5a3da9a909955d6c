//! Fixed-point power iteration loop

use super::{euclidean_distance, IterationOutcome, Normalization, UpdateRule};
use crate::config::{RankConfig, ValidationEngine, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use crate::error::Result;

/// Power-iteration driver
///
/// Holds only the stopping criteria. Each [`run`](Self::run) owns its own
/// vectors, so one `PowerIteration` can drive any number of independent runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerIteration {
    /// Maximum number of update steps
    pub max_iterations: usize,
    /// Convergence threshold on the Euclidean step difference
    pub tolerance: f64,
}

impl Default for PowerIteration {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl PowerIteration {
    /// Create a driver with the default budget and tolerance
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Check the stopping criteria
    ///
    /// Fails with [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration)
    /// if `max_iterations` is zero or `tolerance` is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        let config = RankConfig {
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
            ..Default::default()
        };
        ValidationEngine::with_defaults()
            .validate(&config)
            .into_result()
    }

    /// Iterate `rule` from `initial` until convergence or budget exhaustion
    ///
    /// After every step each vector is normalized with `normalization` and
    /// compared with its previous value. The run converges when all
    /// differences are below `tolerance` in the same iteration. Exhausting the
    /// budget is not an error: the last iterate is returned with
    /// `converged = false`.
    pub fn run<R>(
        &self,
        rule: &R,
        normalization: Normalization,
        initial: Vec<Vec<f64>>,
    ) -> Result<IterationOutcome>
    where
        R: UpdateRule + ?Sized,
    {
        self.validate()?;

        let mut current = initial;
        let mut next = current.clone();
        let mut deltas = vec![f64::INFINITY; current.len()];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;

            rule.step(&current, &mut next);
            for v in next.iter_mut() {
                normalization.apply(v);
            }

            for (delta, (old, new)) in deltas.iter_mut().zip(current.iter().zip(next.iter())) {
                *delta = euclidean_distance(old, new);
            }

            // Swap buffers
            std::mem::swap(&mut current, &mut next);

            trace_event!(trace, iteration = iterations, deltas = ?deltas, "power iteration step");

            if deltas.iter().all(|&d| d < self.tolerance) {
                converged = true;
                break;
            }
        }

        if converged {
            trace_event!(debug, iterations, "power iteration converged");
        } else {
            trace_event!(
                warn,
                iterations,
                tolerance = self.tolerance,
                deltas = ?deltas,
                "power iteration stopped without converging"
            );
        }

        Ok(IterationOutcome {
            vectors: current,
            iterations,
            deltas,
            converged,
        })
    }
}
