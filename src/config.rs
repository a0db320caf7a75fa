//! Cycle configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config:
//!
//! ```json
//! {
//!   "selection": { "fill_threshold": 80, "max_age_days": 3 },
//!   "depot_overhead_km": 2.5,
//!   "rates": {
//!     "average_speed_kmh": 30.0,
//!     "service_hours_per_stop": 0.25,
//!     "fuel_per_km": 0.8,
//!     "labor_per_hour": 25.0,
//!     "depreciation_per_km": 0.15
//!   },
//!   "estimation": { "weight_kg": [60.0, 100.0], "rate_per_kg": [0.05, 0.15] },
//!   "seed": null
//! }
//! ```

use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, WasteError};
use crate::models::DEPOT_OVERHEAD_KM;
use crate::selection::{DEFAULT_FILL_THRESHOLD, DEFAULT_MAX_AGE_DAYS};

/// When a bin is due for pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionPolicy {
    /// Fill level (percent) at or above which a bin is collected.
    pub fill_threshold: u8,
    /// Days after which a bin is collected regardless of fill level.
    pub max_age_days: i64,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            fill_threshold: DEFAULT_FILL_THRESHOLD,
            max_age_days: DEFAULT_MAX_AGE_DAYS,
        }
    }
}

/// Operating rates used to cost a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostRates {
    /// Average vehicle speed (km/h).
    pub average_speed_kmh: f64,
    /// Service time per stop (hours).
    pub service_hours_per_stop: f64,
    /// Fuel cost per km.
    pub fuel_per_km: f64,
    /// Crew cost per hour.
    pub labor_per_hour: f64,
    /// Vehicle depreciation per km.
    pub depreciation_per_km: f64,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            average_speed_kmh: 30.0,
            service_hours_per_stop: 0.25,
            fuel_per_km: 0.80,
            labor_per_hour: 25.0,
            depreciation_per_km: 0.15,
        }
    }
}

/// Bounds for simulated per-stop yield, as half-open `[low, high)` ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationRanges {
    /// Collected weight range (kg).
    pub weight_kg: (f64, f64),
    /// Recycling value range (per kg).
    pub rate_per_kg: (f64, f64),
}

impl Default for EstimationRanges {
    fn default() -> Self {
        Self {
            weight_kg: (60.0, 100.0),
            rate_per_kg: (0.05, 0.15),
        }
    }
}

impl EstimationRanges {
    /// Checks that both ranges are non-empty, finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        half_open_range("weight_kg", self.weight_kg)?;
        half_open_range("rate_per_kg", self.rate_per_kg)
    }
}

/// Full configuration of a collection cycle.
///
/// # Examples
///
/// ```
/// use waste_routing::config::CycleConfig;
///
/// let config = CycleConfig::from_json_str(r#"{ "depot_overhead_km": 4.0, "seed": 7 }"#).unwrap();
/// assert_eq!(config.depot_overhead_km, 4.0);
/// assert_eq!(config.selection.fill_threshold, 80);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleConfig {
    /// Bin selection policy.
    pub selection: SelectionPolicy,
    /// Flat depot round-trip distance added to every non-empty route (km).
    pub depot_overhead_km: f64,
    /// Operating rates.
    pub rates: CostRates,
    /// Simulated yield bounds.
    pub estimation: EstimationRanges,
    /// RNG seed for simulated collaborators; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            selection: SelectionPolicy::default(),
            depot_overhead_km: DEPOT_OVERHEAD_KM,
            rates: CostRates::default(),
            estimation: EstimationRanges::default(),
            seed: None,
        }
    }
}

impl CycleConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| WasteError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        info!(path = %path.display(), "loaded cycle configuration");
        Ok(config)
    }

    /// Sets the selection policy.
    pub fn with_selection(mut self, selection: SelectionPolicy) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the depot overhead.
    pub fn with_depot_overhead_km(mut self, km: f64) -> Self {
        self.depot_overhead_km = km;
        self
    }

    /// Sets the cost rates.
    pub fn with_rates(mut self, rates: CostRates) -> Self {
        self.rates = rates;
        self
    }

    /// Sets the simulated yield bounds.
    pub fn with_estimation(mut self, estimation: EstimationRanges) -> Self {
        self.estimation = estimation;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that all values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.selection.fill_threshold > 100 {
            return Err(invalid(format!(
                "fill_threshold {} exceeds 100",
                self.selection.fill_threshold
            )));
        }
        if self.selection.max_age_days < 0 {
            return Err(invalid("max_age_days must not be negative"));
        }
        if Duration::try_days(self.selection.max_age_days).is_none() {
            return Err(invalid(format!(
                "max_age_days {} is out of range",
                self.selection.max_age_days
            )));
        }
        non_negative("depot_overhead_km", self.depot_overhead_km)?;

        let r = &self.rates;
        if !(r.average_speed_kmh.is_finite() && r.average_speed_kmh > 0.0) {
            return Err(invalid("average_speed_kmh must be positive"));
        }
        non_negative("service_hours_per_stop", r.service_hours_per_stop)?;
        non_negative("fuel_per_km", r.fuel_per_km)?;
        non_negative("labor_per_hour", r.labor_per_hour)?;
        non_negative("depreciation_per_km", r.depreciation_per_km)?;

        self.estimation.validate()
    }
}

fn invalid(msg: impl Into<String>) -> WasteError {
    WasteError::InvalidConfig(msg.into())
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be a non-negative number, got {value}")))
    }
}

fn half_open_range(name: &str, (low, high): (f64, f64)) -> Result<()> {
    non_negative(name, low)?;
    if high.is_finite() && low < high {
        Ok(())
    } else {
        Err(invalid(format!("{name} range [{low}, {high}) is empty")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = CycleConfig::default();
        assert_eq!(c.selection.fill_threshold, 80);
        assert_eq!(c.selection.max_age_days, 3);
        assert_eq!(c.depot_overhead_km, 2.5);
        assert_eq!(c.rates.average_speed_kmh, 30.0);
        assert_eq!(c.rates.service_hours_per_stop, 0.25);
        assert_eq!(c.rates.fuel_per_km, 0.80);
        assert_eq!(c.rates.labor_per_hour, 25.0);
        assert_eq!(c.rates.depreciation_per_km, 0.15);
        assert_eq!(c.estimation.weight_kg, (60.0, 100.0));
        assert_eq!(c.estimation.rate_per_kg, (0.05, 0.15));
        assert!(c.seed.is_none());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_empty_object_is_default() {
        let c = CycleConfig::from_json_str("{}").expect("valid");
        assert_eq!(c, CycleConfig::default());
    }

    #[test]
    fn test_partial_nested() {
        let c = CycleConfig::from_json_str(r#"{ "rates": { "fuel_per_km": 1.2 } }"#).expect("valid");
        assert_eq!(c.rates.fuel_per_km, 1.2);
        assert_eq!(c.rates.labor_per_hour, 25.0);
    }

    #[test]
    fn test_round_trip_json() {
        let c = CycleConfig::default().with_seed(42).with_depot_overhead_km(3.0);
        let text = serde_json::to_string(&c).expect("serialize");
        assert_eq!(CycleConfig::from_json_str(&text).expect("valid"), c);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            CycleConfig::from_json_str("{ not json"),
            Err(WasteError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = [
            CycleConfig::default().with_selection(SelectionPolicy {
                fill_threshold: 101,
                max_age_days: 3,
            }),
            CycleConfig::default().with_depot_overhead_km(-1.0),
            CycleConfig::default().with_rates(CostRates {
                average_speed_kmh: 0.0,
                ..CostRates::default()
            }),
            CycleConfig::default().with_rates(CostRates {
                fuel_per_km: f64::NAN,
                ..CostRates::default()
            }),
            CycleConfig::default().with_estimation(EstimationRanges {
                weight_kg: (100.0, 60.0),
                ..EstimationRanges::default()
            }),
            CycleConfig::default().with_estimation(EstimationRanges {
                rate_per_kg: (0.1, 0.1),
                ..EstimationRanges::default()
            }),
        ];
        for c in &bad {
            assert!(
                matches!(c.validate(), Err(WasteError::InvalidConfig(_))),
                "accepted {c:?}"
            );
        }
    }

    #[test]
    fn test_rejects_max_age_beyond_duration_range() {
        let err = CycleConfig::from_json_str(r#"{ "selection": { "max_age_days": 200000000000 } }"#)
            .expect_err("out of range");
        assert!(matches!(err, WasteError::InvalidConfig(_)));

        let ok = CycleConfig::from_json_str(r#"{ "selection": { "max_age_days": 36500 } }"#);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_estimation_ranges_validate() {
        assert!(EstimationRanges::default().validate().is_ok());
        let inverted = EstimationRanges {
            weight_kg: (100.0, 60.0),
            ..EstimationRanges::default()
        };
        assert!(matches!(inverted.validate(), Err(WasteError::InvalidConfig(_))));
        let negative = EstimationRanges {
            rate_per_kg: (-0.1, 0.1),
            ..EstimationRanges::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = CycleConfig::from_file("/nonexistent/waste-routing.json").expect_err("missing");
        assert!(matches!(err, WasteError::ConfigIo { .. }));
    }
}
