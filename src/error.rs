//! Error type for input validation and configuration loading.
//!
//! The routing and costing pipeline itself never fails; errors only arise at
//! the edges where raw sensor values, coordinates or configuration enter.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while validating inputs or loading configuration.
#[derive(Error, Debug)]
pub enum WasteError {
    /// Coordinate is non-finite or outside the valid latitude/longitude range.
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate {
        /// Latitude in degrees.
        latitude: f64,
        /// Longitude in degrees.
        longitude: f64,
    },

    /// Fill level above 100 %.
    #[error("fill level {0}% outside 0..=100")]
    FillLevelOutOfRange(u8),

    /// Waste type tag not recognised.
    #[error("unknown waste type {0:?}")]
    UnknownWasteType(String),

    /// Weight is negative or non-finite.
    #[error("weight {0} kg is negative or not finite")]
    InvalidWeight(f64),

    /// Configuration values are inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("failed to read configuration file {}: {source}", path.display())]
    ConfigIo {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration text is not valid JSON for [`CycleConfig`](crate::config::CycleConfig).
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, WasteError>;
