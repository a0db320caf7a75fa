//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WasteError};

/// A point on the Earth's surface in decimal degrees.
///
/// [`Coordinate::new`] accepts any value; degenerate input (NaN, out of
/// range) simply propagates through distance arithmetic. Use
/// [`Coordinate::try_new`] where untrusted input enters the system.
///
/// # Examples
///
/// ```
/// use waste_routing::models::Coordinate;
///
/// let plaza = Coordinate::new(40.7589, -73.9851);
/// let square = Coordinate::new(40.7580, -73.9855);
/// assert!(plaza.distance_to(&square) < 0.2);
/// assert!(Coordinate::try_new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate without validation.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate, rejecting non-finite values and values outside
    /// `[-90, 90]` latitude / `[-180, 180]` longitude.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if !valid {
            return Err(WasteError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another coordinate in kilometers.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        crate::distance::haversine_km(*self, *other)
    }
}
