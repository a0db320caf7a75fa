//! Collection route type.

use serde::Serialize;

use super::CollectionCandidate;

/// Default distance in km for the trip from the depot to the first stop and
/// from the last stop back.
pub const DEPOT_OVERHEAD_KM: f64 = 2.5;

/// An ordered sequence of stops served by the single collection vehicle.
///
/// The depot is not stored; its round trip is charged as a flat
/// `depot_overhead_km`, added once when the route has at least one stop.
/// Distances are derived from the stop order at construction time.
///
/// # Examples
///
/// ```
/// use waste_routing::models::Route;
///
/// let route = Route::empty();
/// assert!(route.is_empty());
/// assert_eq!(route.total_distance_km(), 0.0);
/// assert_eq!(route.description(), "No route");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    stops: Vec<CollectionCandidate>,
    leg_distance_km: f64,
    depot_overhead_km: f64,
}

impl Route {
    /// Creates a route visiting `stops` in the given order.
    pub fn new(stops: Vec<CollectionCandidate>, depot_overhead_km: f64) -> Self {
        let leg_distance_km: f64 = stops
            .windows(2)
            .map(|w| w[0].location().distance_to(&w[1].location()))
            .sum();
        Self {
            stops,
            leg_distance_km,
            depot_overhead_km,
        }
    }

    /// Creates a route with no stops.
    pub fn empty() -> Self {
        Self::new(Vec::new(), DEPOT_OVERHEAD_KM)
    }

    /// Stops in visiting order.
    pub fn stops(&self) -> &[CollectionCandidate] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Bin IDs in visiting order.
    pub fn bin_ids(&self) -> Vec<&str> {
        self.stops.iter().map(|s| s.bin_id()).collect()
    }

    /// Sum of the distances between consecutive stops.
    pub fn leg_distance_km(&self) -> f64 {
        self.leg_distance_km
    }

    /// Depot overhead applied to this route (zero when empty).
    pub fn depot_overhead_km(&self) -> f64 {
        if self.stops.is_empty() {
            0.0
        } else {
            self.depot_overhead_km
        }
    }

    /// Total travel distance including depot overhead.
    pub fn total_distance_km(&self) -> f64 {
        self.leg_distance_km + self.depot_overhead_km()
    }

    /// Total distance rounded to two decimals, for display.
    pub fn rounded_distance_km(&self) -> f64 {
        (self.total_distance_km() * 100.0).round() / 100.0
    }

    /// Visiting order joined with arrows, e.g. `BIN001 → BIN003 → BIN002`.
    pub fn description(&self) -> String {
        if self.stops.is_empty() {
            return "No route".to_string();
        }
        self.bin_ids().join(" → ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bin, Coordinate, SelectionReason};
    use chrono::{TimeZone, Utc};

    fn stop(id: &str, lat: f64, lon: f64) -> CollectionCandidate {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap();
        let bin = Bin::new(id, id, Coordinate::new(lat, lon), now);
        CollectionCandidate::snapshot(&bin, SelectionReason::Overdue)
    }

    #[test]
    fn test_route_empty() {
        let r = Route::empty();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.leg_distance_km(), 0.0);
        assert_eq!(r.depot_overhead_km(), 0.0);
        assert_eq!(r.total_distance_km(), 0.0);
        assert!(r.bin_ids().is_empty());
    }

    #[test]
    fn test_route_single_stop() {
        let r = Route::new(vec![stop("A", 40.0, -74.0)], DEPOT_OVERHEAD_KM);
        assert_eq!(r.len(), 1);
        assert_eq!(r.leg_distance_km(), 0.0);
        assert!((r.total_distance_km() - 2.5).abs() < 1e-10);
        assert_eq!(r.description(), "A");
    }

    #[test]
    fn test_route_sums_legs() {
        let a = stop("A", 0.0, 0.0);
        let b = stop("B", 0.0, 1.0);
        let c = stop("C", 1.0, 1.0);
        let ab = a.location().distance_to(&b.location());
        let bc = b.location().distance_to(&c.location());
        let r = Route::new(vec![a, b, c], 2.5);
        assert!((r.leg_distance_km() - (ab + bc)).abs() < 1e-10);
        assert!((r.total_distance_km() - (ab + bc + 2.5)).abs() < 1e-10);
        assert_eq!(r.bin_ids(), vec!["A", "B", "C"]);
        assert_eq!(r.description(), "A → B → C");
    }

    #[test]
    fn test_rounded_distance() {
        let r = Route::new(vec![stop("A", 0.0, 0.0), stop("B", 0.0, 0.01)], 2.5);
        // 0.01 degree of longitude at the equator ≈ 1.11195 km
        assert!((r.rounded_distance_km() - 3.61).abs() < 1e-10);
        assert!(r.total_distance_km() != r.rounded_distance_km());
    }

    #[test]
    fn test_custom_overhead() {
        let r = Route::new(vec![stop("A", 0.0, 0.0)], 4.0);
        assert!((r.total_distance_km() - 4.0).abs() < 1e-10);
    }
}
