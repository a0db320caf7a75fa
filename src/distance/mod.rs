//! Great-circle distances.
//!
//! Provides the haversine metric and a dense distance matrix over a
//! candidate set for route construction.

mod haversine;
mod matrix;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
