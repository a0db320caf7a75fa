//! Great-circle distance.

use crate::models::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates in kilometers.
///
/// Symmetric and zero for identical points. Non-finite input yields NaN.
///
/// # Examples
///
/// ```
/// use waste_routing::models::Coordinate;
/// use waste_routing::distance::haversine_km;
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 1.0);
/// assert!((haversine_km(a, b) - 111.195).abs() < 1e-3);
/// assert_eq!(haversine_km(a, a), 0.0);
/// ```
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}
