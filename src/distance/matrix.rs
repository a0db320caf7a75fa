//! Dense distance matrix over a candidate set.

use crate::models::CollectionCandidate;

use super::haversine_km;

/// A dense n×n distance matrix stored in row-major order.
///
/// Indices refer to positions in the candidate slice the matrix was built
/// from.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use waste_routing::models::{Bin, CollectionCandidate, Coordinate, SelectionReason};
/// use waste_routing::distance::DistanceMatrix;
///
/// let now = Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap();
/// let candidates: Vec<_> = [(0.0, 0.0), (0.0, 1.0), (0.0, 3.0)]
///     .iter()
///     .enumerate()
///     .map(|(i, &(lat, lon))| {
///         let bin = Bin::new(format!("B{i}"), "", Coordinate::new(lat, lon), now);
///         CollectionCandidate::snapshot(&bin, SelectionReason::Overdue)
///     })
///     .collect();
/// let dm = DistanceMatrix::from_candidates(&candidates);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the haversine distance matrix for the candidates' locations.
    ///
    /// The diagonal is zero and `get(i, j) == get(j, i)`.
    pub fn from_candidates(candidates: &[CollectionCandidate]) -> Self {
        let n = candidates.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine_km(candidates[i].location(), candidates[j].location());
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the nearest neighbor of `from` among `pool`.
    ///
    /// Scans `pool` in order and only replaces the current best on a strictly
    /// smaller distance, so ties go to the earliest entry and a NaN distance
    /// never displaces it. Returns `None` if `pool` is empty.
    pub fn nearest_neighbor(&self, from: usize, pool: &[usize]) -> Option<usize> {
        let (&first, rest) = pool.split_first()?;
        let mut best = (first, self.get(from, first));
        for &i in rest {
            let d = self.get(from, i);
            if d < best.1 {
                best = (i, d);
            }
        }
        Some(best.0)
    }
}
