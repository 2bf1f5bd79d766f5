//! Symmetric distance matrix.

use super::distance::Metric;
use super::location::Location;
use crate::error::{AcoError, Result};

/// Relative tolerance when checking a supplied matrix for symmetry.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// N×N symmetric matrix of non-negative distances, stored row-major.
///
/// Built once per run; `get(i, i) == 0` and `get(i, j) == get(j, i)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix from locations under the given metric.
    ///
    /// Only the upper triangle is evaluated; the lower one is mirrored so
    /// symmetry holds exactly.
    pub fn from_locations(locations: &[Location], metric: Metric) -> Self {
        let n = locations.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            let a = locations[i].coordinate();
            for j in (i + 1)..n {
                let d = metric.distance(a, locations[j].coordinate());
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }

    /// Wraps a pre-computed square matrix (e.g. road distances).
    ///
    /// Rejects ragged rows, negative or non-finite entries, a non-zero
    /// diagonal, and asymmetric pairs. Entries above `f64::MAX / n` are
    /// rejected too, so no tour length can overflow.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let max_entry = f64::MAX / n.max(1) as f64;
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(AcoError::InvalidMatrix(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            data.extend(row);
        }

        for i in 0..n {
            if data[i * n + i] != 0.0 {
                return Err(AcoError::InvalidMatrix(format!(
                    "diagonal entry ({i}, {i}) must be 0, got {}",
                    data[i * n + i]
                )));
            }
            for j in (i + 1)..n {
                let (a, b) = (data[i * n + j], data[j * n + i]);
                if !a.is_finite() || !b.is_finite() || a < 0.0 || b < 0.0 {
                    return Err(AcoError::InvalidMatrix(format!(
                        "entries ({i}, {j}) must be finite and non-negative, got {a} and {b}"
                    )));
                }
                if a > max_entry || b > max_entry {
                    return Err(AcoError::InvalidMatrix(format!(
                        "entries ({i}, {j}) exceed {max_entry:e}; a tour over {n} stops would overflow"
                    )));
                }
                if (a - b).abs() > SYMMETRY_TOLERANCE * a.abs().max(1.0) {
                    return Err(AcoError::InvalidMatrix(format!(
                        "matrix is not symmetric at ({i}, {j}): {a} vs {b}"
                    )));
                }
            }
        }

        Ok(Self { n, data })
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between locations `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Sum of consecutive edge distances along `path`.
    ///
    /// For a closed tour pass the full sequence including the repeated
    /// start at the end.
    pub fn tour_length(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Location> {
        vec![
            Location::new(0.0, 0.0, "a"),
            Location::new(0.0, 1.0, "b"),
            Location::new(1.0, 1.0, "c"),
            Location::new(1.0, 0.0, "d"),
        ]
    }

    #[test]
    fn test_from_locations_symmetric_zero_diagonal() {
        let m = DistanceMatrix::from_locations(&unit_square(), Metric::Euclidean);
        assert_eq!(m.len(), 4);
        for i in 0..4 {
            assert_eq!(m.get(i, i), 0.0);
            for j in 0..4 {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
        assert!((m.get(0, 1) - 1.0).abs() < 1e-12);
        assert!((m.get(0, 2) - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_haversine_matrix_symmetric() {
        let locations = vec![
            Location::new(56.1387, 8.9734, "Herning"),
            Location::new(56.2445, 8.9607, "Sunds"),
            Location::new(55.7404, 9.1518, "Billund"),
            Location::new(52.2689, 10.5268, "Braunschweig"),
        ];
        let m = DistanceMatrix::from_locations(&locations, Metric::Haversine);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(m.get(i, j), m.get(j, i));
                if i != j {
                    assert!(m.get(i, j) > 0.0);
                }
            }
        }
    }

    #[test]
    fn test_tour_length() {
        let m = DistanceMatrix::from_locations(&unit_square(), Metric::Euclidean);
        assert!((m.tour_length(&[0, 1, 2, 3, 0]) - 4.0).abs() < 1e-12);
        assert_eq!(m.tour_length(&[2]), 0.0);
    }

    #[test]
    fn test_from_rows_rejects_entries_that_overflow_a_tour() {
        let huge = f64::MAX / 2.0;
        let err = DistanceMatrix::from_rows(vec![
            vec![0.0, huge, huge],
            vec![huge, 0.0, huge],
            vec![huge, huge, 0.0],
        ])
        .unwrap_err();
        assert!(matches!(err, AcoError::InvalidMatrix(_)));

        // Right at the bound a full tour still sums to a finite length.
        let edge = f64::MAX / 3.0;
        let m = DistanceMatrix::from_rows(vec![
            vec![0.0, edge, edge],
            vec![edge, 0.0, edge],
            vec![edge, edge, 0.0],
        ])
        .unwrap();
        assert!(m.tour_length(&[0, 1, 2, 0]).is_finite());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, AcoError::InvalidMatrix(_)));
    }

    #[test]
    fn test_from_rows_rejects_asymmetric() {
        let err =
            DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 0.0]]).unwrap_err();
        assert!(matches!(err, AcoError::InvalidMatrix(_)));
    }

    #[test]
    fn test_from_rows_rejects_negative_and_nan() {
        assert!(DistanceMatrix::from_rows(vec![vec![0.0, -1.0], vec![-1.0, 0.0]]).is_err());
        assert!(
            DistanceMatrix::from_rows(vec![vec![0.0, f64::NAN], vec![f64::NAN, 0.0]]).is_err()
        );
    }

    #[test]
    fn test_from_rows_rejects_nonzero_diagonal() {
        assert!(DistanceMatrix::from_rows(vec![vec![1.0, 1.0], vec![1.0, 0.0]]).is_err());
    }
}
