//! Nearest-neighbor route construction.
//!
//! Builds a single route greedily: starting from the first candidate, always
//! visit the nearest unvisited candidate next.
//!
//! # Complexity
//!
//! O(n²) distance evaluations where n = number of candidates. Intended for
//! fleets of tens of bins.
//!
//! # Reference
//!
//! The simplest constructive TSP heuristic. Tours are typically 15-25% above
//! optimal; no improvement phase is applied.

use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::models::{CollectionCandidate, Route};

/// Orders `candidates` into a route with the nearest-neighbor heuristic.
///
/// The route is seeded with `candidates[0]`. At each step the nearest
/// remaining candidate (haversine distance from the current last stop) is
/// appended; exact ties go to the candidate that comes first in input order.
/// The result is always a permutation of the input and is fully determined
/// by the input order.
///
/// An empty input yields [`Route::empty`].
///
/// # Arguments
///
/// * `candidates` — Bins selected for pickup, in registry order
/// * `depot_overhead_km` — Flat depot round trip added to the route distance
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use waste_routing::models::{Bin, CollectionCandidate, Coordinate, SelectionReason};
/// use waste_routing::constructive::nearest_neighbor_route;
///
/// let now = Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap();
/// let candidates: Vec<_> = [("A", 0.0), ("B", 3.0), ("C", 1.0), ("D", 2.0)]
///     .iter()
///     .map(|&(id, lon)| {
///         let bin = Bin::new(id, id, Coordinate::new(0.0, lon), now);
///         CollectionCandidate::snapshot(&bin, SelectionReason::Overdue)
///     })
///     .collect();
///
/// let route = nearest_neighbor_route(&candidates, 2.5);
/// assert_eq!(route.bin_ids(), vec!["A", "C", "D", "B"]);
/// ```
pub fn nearest_neighbor_route(candidates: &[CollectionCandidate], depot_overhead_km: f64) -> Route {
    if candidates.is_empty() {
        return Route::empty();
    }

    let distances = DistanceMatrix::from_candidates(candidates);

    // Pool keeps input order so ties resolve to the earliest candidate.
    let mut pool: Vec<usize> = (1..candidates.len()).collect();
    let mut order = Vec::with_capacity(candidates.len());
    let mut current = 0;
    order.push(current);

    while let Some(next) = distances.nearest_neighbor(current, &pool) {
        debug!(
            from = candidates[current].bin_id(),
            to = candidates[next].bin_id(),
            km = distances.get(current, next),
            "route extended"
        );
        pool.retain(|&i| i != next);
        order.push(next);
        current = next;
    }

    let stops = order.into_iter().map(|i| candidates[i].clone()).collect();
    Route::new(stops, depot_overhead_km)
}
