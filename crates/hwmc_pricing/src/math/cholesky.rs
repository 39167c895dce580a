//! Cholesky decomposition.

use thiserror::Error;

/// Relative tolerance for the symmetry check.
const SYMMETRY_TOL: f64 = 1e-12;

/// Factorisation failures.
///
/// A non-positive-definite covariance indicates a configuration defect
/// (malformed decision times or volatilities), so the error is fatal and
/// never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CholeskyError {
    /// Input matrix is not square.
    #[error("matrix must be square: {rows} rows, row {row} has {cols} columns")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// First offending row.
        row: usize,
        /// Its column count.
        cols: usize,
    },

    /// Input matrix is not symmetric.
    #[error("matrix must be symmetric: entry ({row}, {col}) differs from its transpose")]
    NotSymmetric {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
    },

    /// A pivot was non-positive; the matrix is not positive definite.
    #[error("matrix is not positive definite (pivot {pivot})")]
    NotPositiveDefinite {
        /// Index of the failing pivot.
        pivot: usize,
    },
}

/// Factorise a symmetric positive-definite matrix as `M = L * L^T`.
///
/// Returns the lower-triangular factor `L` (upper entries zero).
///
/// # Errors
///
/// - [`CholeskyError::NotSquare`] / [`CholeskyError::NotSymmetric`] on
///   malformed input
/// - [`CholeskyError::NotPositiveDefinite`] when a pivot is non-positive
///
/// # Example
///
/// ```
/// use hwmc_pricing::math::cholesky;
///
/// let m = vec![vec![4.0, 2.0], vec![2.0, 5.0]];
/// let l = cholesky(&m).unwrap();
/// assert!((l[0][0] - 2.0).abs() < 1e-12);
/// assert!((l[1][0] - 1.0).abs() < 1e-12);
/// assert!((l[1][1] - 2.0).abs() < 1e-12);
/// ```
pub fn cholesky(matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, CholeskyError> {
    let n = matrix.len();
    for (row, r) in matrix.iter().enumerate() {
        if r.len() != n {
            return Err(CholeskyError::NotSquare {
                rows: n,
                row,
                cols: r.len(),
            });
        }
    }
    for i in 0..n {
        for j in (i + 1)..n {
            let diff = (matrix[i][j] - matrix[j][i]).abs();
            let scale = matrix[i][j].abs().max(matrix[j][i].abs()).max(1.0);
            if diff > SYMMETRY_TOL * scale {
                return Err(CholeskyError::NotSymmetric { row: i, col: j });
            }
        }
    }

    let mut l = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..=i {
            let mut sum = matrix[i][j];
            for k in 0..j {
                sum -= l[i][k] * l[j][k];
            }
            if i == j {
                if sum <= 0.0 {
                    return Err(CholeskyError::NotPositiveDefinite { pivot: i });
                }
                l[i][j] = sum.sqrt();
            } else {
                l[i][j] = sum / l[j][j];
            }
        }
    }
    Ok(l)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity() {
        let m = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let l = cholesky(&m).unwrap();
        assert_eq!(l, m);
    }

    #[test]
    fn test_known_3x3() {
        let m = vec![
            vec![4.0, 12.0, -16.0],
            vec![12.0, 37.0, -43.0],
            vec![-16.0, -43.0, 98.0],
        ];
        let l = cholesky(&m).unwrap();
        let expected = vec![
            vec![2.0, 0.0, 0.0],
            vec![6.0, 1.0, 0.0],
            vec![-8.0, 5.0, 3.0],
        ];
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(l[i][j], expected[i][j], max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_reconstruction() {
        let m = vec![
            vec![2.0, 0.5, 0.5],
            vec![0.5, 3.0, 1.0],
            vec![0.5, 1.0, 1.5],
        ];
        let l = cholesky(&m).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let mut acc = 0.0;
                for k in 0..3 {
                    acc += l[i][k] * l[j][k];
                }
                assert_relative_eq!(acc, m[i][j], max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_non_square_rejected() {
        let m = vec![vec![1.0, 0.0], vec![0.0]];
        assert!(matches!(
            cholesky(&m),
            Err(CholeskyError::NotSquare { row: 1, cols: 1, .. })
        ));
    }

    #[test]
    fn test_asymmetric_rejected() {
        let m = vec![vec![1.0, 0.5], vec![0.4, 1.0]];
        assert!(matches!(
            cholesky(&m),
            Err(CholeskyError::NotSymmetric { row: 0, col: 1 })
        ));
    }

    #[test]
    fn test_not_positive_definite_rejected() {
        let m = vec![vec![1.0, 2.0], vec![2.0, 1.0]];
        assert!(matches!(
            cholesky(&m),
            Err(CholeskyError::NotPositiveDefinite { pivot: 1 })
        ));
    }

    #[test]
    fn test_zero_matrix_rejected() {
        let m = vec![vec![0.0]];
        assert!(matches!(
            cholesky(&m),
            Err(CholeskyError::NotPositiveDefinite { pivot: 0 })
        ));
    }
}
