//! Generic power iteration
//!
//! Both rankers are configurations of the same fixed-point loop: apply an
//! [`UpdateRule`], normalize, measure the Euclidean step difference of every
//! tracked vector, and stop once all of them are below tolerance in the same
//! iteration.

pub mod engine;

pub use engine::PowerIteration;

/// One step of a power iteration
///
/// `current` holds the vectors from the previous iteration; the rule writes
/// the next iterate into `next`, which has the same shape. Closures with the
/// matching signature implement this trait.
pub trait UpdateRule {
    fn step(&self, current: &[Vec<f64>], next: &mut [Vec<f64>]);
}

impl<F> UpdateRule for F
where
    F: Fn(&[Vec<f64>], &mut [Vec<f64>]),
{
    #[inline]
    fn step(&self, current: &[Vec<f64>], next: &mut [Vec<f64>]) {
        self(current, next)
    }
}

/// How each vector is rescaled after an update step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Leave the vector as produced by the update rule
    #[default]
    None,
    /// Rescale so the entries sum to 1
    Sum,
    /// Rescale to unit Euclidean norm
    L2,
}

impl Normalization {
    /// Normalize `v` in place
    ///
    /// A vector whose sum (or norm) is zero is left unchanged.
    pub fn apply(&self, v: &mut [f64]) {
        match self {
            Normalization::None => {}
            Normalization::Sum => {
                let total = v.iter().sum();
                scale_to(v, total);
            }
            Normalization::L2 => {
                let norm = l2_norm(v);
                scale_to(v, norm);
            }
        }
    }
}

fn scale_to(v: &mut [f64], total: f64) {
    if total > 0.0 {
        for x in v.iter_mut() {
            *x /= total;
        }
    }
}

/// Euclidean norm of a vector
///
/// Entries are divided by the largest magnitude before squaring, so the
/// norm stays finite for any vector of finite entries.
pub fn l2_norm(v: &[f64]) -> f64 {
    let scale = v.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    scale * v.iter().map(|x| (x / scale).powi(2)).sum::<f64>().sqrt()
}

/// Euclidean distance between two vectors of equal length
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Result of a power-iteration run
#[derive(Debug, Clone, PartialEq)]
pub struct IterationOutcome {
    /// Final vectors, in the order they were supplied
    pub vectors: Vec<Vec<f64>>,
    /// Number of update steps applied
    pub iterations: usize,
    /// Euclidean step difference of each vector in the last iteration
    pub deltas: Vec<f64>,
    /// Whether every delta fell below tolerance in the same iteration
    pub converged: bool,
}

impl IterationOutcome {
    /// Largest per-vector delta of the last iteration
    pub fn max_delta(&self) -> f64 {
        self.deltas.iter().copied().fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_normalization() {
        let mut v = vec![1.0, 3.0];
        Normalization::Sum.apply(&mut v);
        assert_eq!(v, vec![0.25, 0.75]);
    }

    #[test]
    fn test_l2_normalization() {
        let mut v = vec![3.0, 4.0];
        Normalization::L2.apply(&mut v);
        assert!((v[0] - 0.6).abs() < 1e-12);
        assert!((v[1] - 0.8).abs() < 1e-12);
        assert!((l2_norm(&v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_vector_left_unchanged() {
        let mut v = vec![0.0; 3];
        Normalization::L2.apply(&mut v);
        Normalization::Sum.apply(&mut v);
        assert_eq!(v, vec![0.0; 3]);
    }

    #[test]
    fn test_no_normalization() {
        let mut v = vec![2.0, 2.0];
        Normalization::None.apply(&mut v);
        assert_eq!(v, vec![2.0, 2.0]);
    }

    #[test]
    fn test_l2_norm_large_entries() {
        let mut v = vec![3e200, 4e200];
        assert!((l2_norm(&v) / 5e200 - 1.0).abs() < 1e-12);

        Normalization::L2.apply(&mut v);
        assert!((v[0] - 0.6).abs() < 1e-12);
        assert!((v[1] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_l2_norm_tiny_entries() {
        let v = vec![3e-200, 4e-200];
        assert!((l2_norm(&v) / 5e-200 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_euclidean_distance() {
        assert_eq!(euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
        assert_eq!(euclidean_distance(&[], &[]), 0.0);
    }
}
