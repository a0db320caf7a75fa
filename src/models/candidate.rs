//! Immutable bin snapshots taken at selection time.

use serde::{Deserialize, Serialize};

use super::{Bin, Coordinate, WasteType};

/// Why a bin was selected for pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionReason {
    /// Fill level reached the threshold.
    FillLevel,
    /// Too long since the last collection.
    Overdue,
    /// Both clauses hold.
    FillLevelAndOverdue,
}

/// Read-only copy of a bin's state at the moment selection ran.
///
/// Routing and costing work on candidates only, so resetting the live
/// [`Bin`] after collection never changes a route or its cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionCandidate {
    bin_id: String,
    location: Coordinate,
    fill_level: u8,
    weight_kg: f64,
    waste_type: WasteType,
    reason: SelectionReason,
}

impl CollectionCandidate {
    /// Snapshots `bin`.
    pub fn snapshot(bin: &Bin, reason: SelectionReason) -> Self {
        Self {
            bin_id: bin.id().to_string(),
            location: bin.location(),
            fill_level: bin.fill_level(),
            weight_kg: bin.weight_kg(),
            waste_type: bin.waste_type(),
            reason,
        }
    }

    /// Identifier of the bin this snapshot was taken from.
    pub fn bin_id(&self) -> &str {
        &self.bin_id
    }

    /// Bin position.
    pub fn location(&self) -> Coordinate {
        self.location
    }

    /// Fill level at selection time.
    pub fn fill_level(&self) -> u8 {
        self.fill_level
    }

    /// Recorded weight at selection time.
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Waste type at selection time.
    pub fn waste_type(&self) -> WasteType {
        self.waste_type
    }

    /// Selection reason.
    pub fn reason(&self) -> SelectionReason {
        self.reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SensorReading;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_snapshot_is_detached() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap();
        let reading = SensorReading::new(88, 71.0, WasteType::Organic).expect("valid");
        let mut bin =
            Bin::new("BIN007", "Pier", Coordinate::new(40.7, -74.0), now).with_reading(reading);

        let c = CollectionCandidate::snapshot(&bin, SelectionReason::FillLevel);
        bin.reset_after_collection(now);

        assert_eq!(c.bin_id(), "BIN007");
        assert_eq!(c.fill_level(), 88);
        assert!((c.weight_kg() - 71.0).abs() < 1e-10);
        assert_eq!(c.waste_type(), WasteType::Organic);
        assert_eq!(c.reason(), SelectionReason::FillLevel);
        assert_eq!(bin.fill_level(), 0);
    }
}
