//! Sensor-equipped bins and their readings.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::Coordinate;
use crate::error::{Result, WasteError};

/// Kind of waste a bin's sensor reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WasteType {
    /// General, unsorted waste.
    Mixed,
    /// Paper, plastic, glass, metal.
    Recyclable,
    /// Food and garden waste.
    Organic,
    /// E-waste.
    Electronic,
}

impl WasteType {
    /// All waste types in declaration order.
    pub const ALL: [WasteType; 4] = [
        WasteType::Mixed,
        WasteType::Recyclable,
        WasteType::Organic,
        WasteType::Electronic,
    ];

    /// Tag name as reported by sensors.
    pub fn as_str(&self) -> &'static str {
        match self {
            WasteType::Mixed => "Mixed",
            WasteType::Recyclable => "Recyclable",
            WasteType::Organic => "Organic",
            WasteType::Electronic => "Electronic",
        }
    }
}

impl fmt::Display for WasteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WasteType {
    type Err = WasteError;

    fn from_str(s: &str) -> Result<Self> {
        WasteType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| WasteError::UnknownWasteType(s.to_string()))
    }
}

/// One sensor sample for a bin.
///
/// # Examples
///
/// ```
/// use waste_routing::models::{SensorReading, WasteType};
///
/// let r = SensorReading::new(85, 70.5, WasteType::Organic).unwrap();
/// assert_eq!(r.fill_level(), 85);
/// assert!(SensorReading::new(101, 0.0, WasteType::Mixed).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    fill_level: u8,
    weight_kg: f64,
    waste_type: WasteType,
}

impl SensorReading {
    /// Creates a reading.
    ///
    /// Fails if `fill_level > 100` or `weight_kg` is negative or non-finite.
    pub fn new(fill_level: u8, weight_kg: f64, waste_type: WasteType) -> Result<Self> {
        if fill_level > 100 {
            return Err(WasteError::FillLevelOutOfRange(fill_level));
        }
        if !weight_kg.is_finite() || weight_kg < 0.0 {
            return Err(WasteError::InvalidWeight(weight_kg));
        }
        Ok(Self {
            fill_level,
            weight_kg,
            waste_type,
        })
    }

    /// Builds a reading whose ranges the caller already guarantees.
    pub(crate) fn from_trusted(fill_level: u8, weight_kg: f64, waste_type: WasteType) -> Self {
        debug_assert!(fill_level <= 100 && weight_kg.is_finite() && weight_kg >= 0.0);
        Self {
            fill_level,
            weight_kg,
            waste_type,
        }
    }

    /// Fill level in percent.
    pub fn fill_level(&self) -> u8 {
        self.fill_level
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Detected waste type.
    pub fn waste_type(&self) -> WasteType {
        self.waste_type
    }
}

/// Coarse fill status used in fleet status reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStatus {
    /// 80 % or more.
    Full,
    /// 60–79 %.
    Medium,
    /// Below 60 %.
    Low,
}

impl FillStatus {
    /// Classifies a fill level.
    pub fn from_fill_level(fill_level: u8) -> Self {
        match fill_level {
            80..=u8::MAX => FillStatus::Full,
            60..=79 => FillStatus::Medium,
            _ => FillStatus::Low,
        }
    }
}

impl fmt::Display for FillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FillStatus::Full => "FULL",
            FillStatus::Medium => "MEDIUM",
            FillStatus::Low => "LOW",
        };
        f.write_str(label)
    }
}

/// A fixed collection point with a fill/weight sensor.
///
/// A new bin is empty, typed [`WasteType::Mixed`] and counts as last
/// collected one day before it was installed.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use waste_routing::models::{Bin, Coordinate, FillStatus};
///
/// let installed = Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap();
/// let bin = Bin::new("BIN001", "Downtown Plaza", Coordinate::new(40.7589, -73.9851), installed);
/// assert_eq!(bin.fill_level(), 0);
/// assert_eq!(bin.status(), FillStatus::Low);
/// assert_eq!((installed - bin.last_collection()).num_days(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Bin {
    id: String,
    name: String,
    location: Coordinate,
    fill_level: u8,
    weight_kg: f64,
    waste_type: WasteType,
    last_collection: DateTime<Utc>,
}

impl Bin {
    /// Creates an empty bin installed at `installed_at`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: Coordinate,
        installed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            fill_level: 0,
            weight_kg: 0.0,
            waste_type: WasteType::Mixed,
            last_collection: installed_at - Duration::days(1),
        }
    }

    /// Sets the initial sensor state.
    pub fn with_reading(mut self, reading: SensorReading) -> Self {
        self.apply_reading(reading);
        self
    }

    /// Sets the last-collection timestamp.
    pub fn with_last_collection(mut self, at: DateTime<Utc>) -> Self {
        self.last_collection = at;
        self
    }

    /// Stable bin identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable location name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geographic position.
    pub fn location(&self) -> Coordinate {
        self.location
    }

    /// Fill level in percent.
    pub fn fill_level(&self) -> u8 {
        self.fill_level
    }

    /// Current weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Most recently detected waste type.
    pub fn waste_type(&self) -> WasteType {
        self.waste_type
    }

    /// When the bin was last emptied.
    pub fn last_collection(&self) -> DateTime<Utc> {
        self.last_collection
    }

    /// Coarse fill status.
    pub fn status(&self) -> FillStatus {
        FillStatus::from_fill_level(self.fill_level)
    }

    /// One-line status summary, e.g. `BIN001 (Downtown Plaza): FULL - 85% full, 72.4kg`.
    pub fn status_report(&self) -> String {
        format!(
            "{} ({}): {} - {}% full, {:.1}kg",
            self.id,
            self.name,
            self.status(),
            self.fill_level,
            self.weight_kg
        )
    }

    pub(crate) fn apply_reading(&mut self, reading: SensorReading) {
        self.fill_level = reading.fill_level();
        self.weight_kg = reading.weight_kg();
        self.waste_type = reading.waste_type();
    }

    pub(crate) fn reset_after_collection(&mut self, at: DateTime<Utc>) {
        self.fill_level = 0;
        self.weight_kg = 0.0;
        self.last_collection = at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn installed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap()
    }

    #[test]
    fn test_waste_type_parse() {
        assert_eq!("Organic".parse::<WasteType>().ok(), Some(WasteType::Organic));
        assert_eq!("electronic".parse::<WasteType>().ok(), Some(WasteType::Electronic));
        match "Glass".parse::<WasteType>() {
            Err(WasteError::UnknownWasteType(tag)) => assert_eq!(tag, "Glass"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(WasteType::Recyclable.to_string(), "Recyclable");
    }

    #[test]
    fn test_sensor_reading_validation() {
        assert!(SensorReading::new(100, 0.0, WasteType::Mixed).is_ok());
        assert!(matches!(
            SensorReading::new(101, 1.0, WasteType::Mixed),
            Err(WasteError::FillLevelOutOfRange(101))
        ));
        assert!(matches!(
            SensorReading::new(50, -1.0, WasteType::Mixed),
            Err(WasteError::InvalidWeight(_))
        ));
        assert!(SensorReading::new(50, f64::NAN, WasteType::Mixed).is_err());
    }

    #[test]
    fn test_fill_status() {
        assert_eq!(FillStatus::from_fill_level(100), FillStatus::Full);
        assert_eq!(FillStatus::from_fill_level(80), FillStatus::Full);
        assert_eq!(FillStatus::from_fill_level(79), FillStatus::Medium);
        assert_eq!(FillStatus::from_fill_level(60), FillStatus::Medium);
        assert_eq!(FillStatus::from_fill_level(59), FillStatus::Low);
    }

    #[test]
    fn test_bin_new() {
        let b = Bin::new("BIN001", "Downtown Plaza", Coordinate::new(1.0, 2.0), installed());
        assert_eq!(b.id(), "BIN001");
        assert_eq!(b.name(), "Downtown Plaza");
        assert_eq!(b.fill_level(), 0);
        assert_eq!(b.weight_kg(), 0.0);
        assert_eq!(b.waste_type(), WasteType::Mixed);
        assert_eq!(b.last_collection(), installed() - Duration::days(1));
    }

    #[test]
    fn test_apply_and_reset() {
        let reading = SensorReading::new(90, 75.0, WasteType::Recyclable).expect("valid");
        let mut b = Bin::new("B", "n", Coordinate::new(0.0, 0.0), installed()).with_reading(reading);
        assert_eq!(b.fill_level(), 90);
        assert_eq!(b.waste_type(), WasteType::Recyclable);

        let at = installed() + Duration::hours(3);
        b.reset_after_collection(at);
        assert_eq!(b.fill_level(), 0);
        assert_eq!(b.weight_kg(), 0.0);
        assert_eq!(b.last_collection(), at);
        // waste type is kept until the next reading
        assert_eq!(b.waste_type(), WasteType::Recyclable);
    }

    #[test]
    fn test_status_report() {
        let reading = SensorReading::new(85, 72.44, WasteType::Mixed).expect("valid");
        let b = Bin::new("BIN001", "Downtown Plaza", Coordinate::new(0.0, 0.0), installed())
            .with_reading(reading);
        assert_eq!(
            b.status_report(),
            "BIN001 (Downtown Plaza): FULL - 85% full, 72.4kg"
        );
    }
}
