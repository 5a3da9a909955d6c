//! Dense row-major matrix representation
//!
//! The graphs ranked here are small enough to hold as a full N×N matrix,
//! so every derived matrix (transpose, transition) is dense as well.

use crate::error::{Error, Result};

/// A dense matrix stored in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Entries, `data[r * cols + c]`
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Create a zero-filled matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Build a matrix from a list of rows
    ///
    /// Fails with [`Error::Shape`] if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(num_rows * num_cols);

        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != num_cols {
                return Err(Error::Shape(format!(
                    "row {r} has {} columns, expected {num_cols}",
                    row.len()
                )));
            }
            data.extend(row);
        }

        Ok(Self {
            rows: num_rows,
            cols: num_cols,
            data,
        })
    }

    /// Check whether the matrix is square
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Fail with [`Error::Shape`] unless the matrix is square
    pub fn ensure_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(Error::Shape(format!(
                "matrix is {}x{}, expected a square matrix",
                self.rows, self.cols
            )))
        }
    }

    /// Get an entry
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Set an entry
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterate over rows
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // chunks_exact panics on a zero chunk size
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Sum of each row
    pub fn row_sums(&self) -> Vec<f64> {
        self.iter_rows().map(|row| row.iter().sum()).collect()
    }

    /// Matrix-vector product `self · v` written into `out`
    ///
    /// Both slices must have length `cols` and `rows` respectively.
    pub fn mul_vec_into(&self, v: &[f64], out: &mut [f64]) {
        debug_assert_eq!(v.len(), self.cols);
        debug_assert_eq!(out.len(), self.rows);

        for (slot, row) in out.iter_mut().zip(self.iter_rows()) {
            *slot = row.iter().zip(v).map(|(m, x)| m * x).sum();
        }
    }

    /// Matrix-vector product `self · v`
    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; self.rows];
        self.mul_vec_into(v, &mut out);
        out
    }

    /// Check whether every entry is zero
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0.0)
    }

    /// Copy the matrix out as a list of rows
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }
}

/// Transpose a square matrix: `out[i][j] = a[j][i]`
///
/// Fails with [`Error::Shape`] if `a` is not square.
pub fn transpose(a: &DenseMatrix) -> Result<DenseMatrix> {
    a.ensure_square()?;

    let n = a.rows;
    let mut out = DenseMatrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            out.set(i, j, a.get(j, i));
        }
    }
    Ok(out)
}

/// Derive the column-stochastic transition matrix of an adjacency matrix
///
/// Row `i` of `a` is divided by its out-degree and scattered into column `i`
/// of the result, so `m[j][i] = a[i][j] / out_degree[i]`.
///
/// A node with zero out-degree (a dangling node) gets an all-zero column.
/// Its probability mass is dropped on every step instead of being
/// redistributed, so a power iteration over this matrix leaks mass whenever
/// a dangling node holds any.
pub fn transition_matrix(a: &DenseMatrix) -> Result<DenseMatrix> {
    a.ensure_square()?;

    let n = a.rows;
    let out_degree = a.row_sums();
    let mut m = DenseMatrix::zeros(n, n);

    for (i, &degree) in out_degree.iter().enumerate() {
        if degree <= 0.0 {
            continue;
        }
        for (j, &weight) in a.row(i).iter().enumerate() {
            if weight > 0.0 {
                m.set(j, i, weight / degree);
            }
        }
    }

    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[f64]]) -> DenseMatrix {
        DenseMatrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let result = DenseMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]);
        assert!(matches!(result, Err(Error::Shape(_))));
    }

    #[test]
    fn test_empty_matrix() {
        let m = DenseMatrix::from_rows(vec![]).unwrap();
        assert_eq!(m.rows, 0);
        assert_eq!(m.cols, 0);
        assert!(m.is_square());
        assert!(m.row_sums().is_empty());
    }

    #[test]
    fn test_transpose() {
        let a = matrix(&[&[0.0, 1.0, 1.0], &[0.0, 0.0, 1.0], &[1.0, 0.0, 0.0]]);
        let t = transpose(&a).unwrap();

        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(t.get(i, j), a.get(j, i));
            }
        }
        assert_eq!(transpose(&t).unwrap(), a);
    }

    #[test]
    fn test_transpose_rejects_non_square() {
        let a = matrix(&[&[0.0, 1.0, 1.0], &[0.0, 0.0, 1.0]]);
        assert!(matches!(transpose(&a), Err(Error::Shape(_))));
    }

    #[test]
    fn test_transition_matrix_columns_sum_to_one() {
        let a = matrix(&[&[0.0, 1.0, 1.0], &[0.0, 0.0, 1.0], &[1.0, 0.0, 0.0]]);
        let m = transition_matrix(&a).unwrap();

        assert!((m.get(1, 0) - 0.5).abs() < 1e-12);
        assert!((m.get(2, 0) - 0.5).abs() < 1e-12);
        assert!((m.get(2, 1) - 1.0).abs() < 1e-12);
        assert!((m.get(0, 2) - 1.0).abs() < 1e-12);

        for col in 0..3 {
            let sum: f64 = (0..3).map(|row| m.get(row, col)).sum();
            assert!((sum - 1.0).abs() < 1e-12, "column {col} sums to {sum}");
        }
    }

    #[test]
    fn test_transition_matrix_dangling_column_is_zero() {
        // Node 2 has no outgoing edges
        let a = matrix(&[&[0.0, 1.0, 1.0], &[0.0, 0.0, 1.0], &[0.0, 0.0, 0.0]]);
        let m = transition_matrix(&a).unwrap();

        for row in 0..3 {
            assert_eq!(m.get(row, 2), 0.0);
        }
        let col0: f64 = (0..3).map(|row| m.get(row, 0)).sum();
        assert!((col0 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_transition_matrix_uses_weights() {
        let a = matrix(&[&[0.0, 3.0], &[1.0, 0.0]]);
        let m = transition_matrix(&a).unwrap();
        assert!((m.get(1, 0) - 1.0).abs() < 1e-12);

        let a = matrix(&[&[1.0, 3.0], &[1.0, 0.0]]);
        let m = transition_matrix(&a).unwrap();
        assert!((m.get(0, 0) - 0.25).abs() < 1e-12);
        assert!((m.get(1, 0) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_transition_matrix_all_dangling_is_zero() {
        let a = DenseMatrix::zeros(4, 4);
        assert!(transition_matrix(&a).unwrap().is_zero());
    }

    #[test]
    fn test_mul_vec() {
        let a = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(a.mul_vec(&[1.0, 1.0]), vec![3.0, 7.0]);
    }
}
