//! Threshold/aging bin selection.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::config::SelectionPolicy;
use crate::models::{Bin, CollectionCandidate, SelectionReason};

/// Default fill level (percent) at which a bin needs emptying.
pub const DEFAULT_FILL_THRESHOLD: u8 = 80;

/// Default number of days after which a bin is emptied regardless of fill.
pub const DEFAULT_MAX_AGE_DAYS: i64 = 3;

/// Picks the bins that need collection.
///
/// A bin qualifies when its fill level is at or above the threshold, or
/// when strictly more than `max_age` has passed since its last collection.
/// The two clauses are evaluated independently, so a freshly emptied bin
/// can still qualify on age alone.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use waste_routing::models::{Bin, Coordinate, SensorReading, WasteType};
/// use waste_routing::selection::BinSelector;
///
/// let now = Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap();
/// let full = SensorReading::new(80, 64.0, WasteType::Mixed).unwrap();
/// let bins = vec![
///     Bin::new("A", "a", Coordinate::new(0.0, 0.0), now).with_reading(full),
///     Bin::new("B", "b", Coordinate::new(0.0, 1.0), now),
/// ];
///
/// let picked = BinSelector::default().select(&bins, now);
/// assert_eq!(picked.len(), 1);
/// assert_eq!(picked[0].bin_id(), "A");
/// ```
#[derive(Debug, Clone)]
pub struct BinSelector {
    fill_threshold: u8,
    max_age: Duration,
}

impl BinSelector {
    /// Creates a selector with the given threshold and maximum age.
    pub fn new(fill_threshold: u8, max_age: Duration) -> Self {
        Self {
            fill_threshold,
            max_age,
        }
    }

    /// Creates a selector from configuration.
    ///
    /// A maximum age beyond what [`Duration`] can hold saturates, so such a
    /// bin only ever qualifies on fill level.
    pub fn from_policy(policy: &SelectionPolicy) -> Self {
        let max_age = Duration::try_days(policy.max_age_days).unwrap_or(Duration::MAX);
        Self::new(policy.fill_threshold, max_age)
    }

    /// Fill threshold in percent.
    pub fn fill_threshold(&self) -> u8 {
        self.fill_threshold
    }

    /// Maximum time between collections.
    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// Why `bin` qualifies at `now`, or `None` if it doesn't.
    pub fn reason(&self, bin: &Bin, now: DateTime<Utc>) -> Option<SelectionReason> {
        let full = bin.fill_level() >= self.fill_threshold;
        let overdue = now - bin.last_collection() > self.max_age;
        match (full, overdue) {
            (true, true) => Some(SelectionReason::FillLevelAndOverdue),
            (true, false) => Some(SelectionReason::FillLevel),
            (false, true) => Some(SelectionReason::Overdue),
            (false, false) => None,
        }
    }

    /// Returns `true` if `bin` qualifies at `now`.
    pub fn needs_collection(&self, bin: &Bin, now: DateTime<Utc>) -> bool {
        self.reason(bin, now).is_some()
    }

    /// Snapshots every qualifying bin, preserving registry order.
    ///
    /// An empty result is a normal outcome.
    pub fn select(&self, bins: &[Bin], now: DateTime<Utc>) -> Vec<CollectionCandidate> {
        bins.iter()
            .filter_map(|bin| {
                let reason = self.reason(bin, now)?;
                debug!(
                    bin_id = bin.id(),
                    location = bin.name(),
                    fill_level = bin.fill_level(),
                    ?reason,
                    "bin selected for collection"
                );
                Some(CollectionCandidate::snapshot(bin, reason))
            })
            .collect()
    }
}

impl Default for BinSelector {
    fn default() -> Self {
        Self::new(DEFAULT_FILL_THRESHOLD, Duration::days(DEFAULT_MAX_AGE_DAYS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, SensorReading, WasteType};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 6, 0, 0).unwrap()
    }

    fn bin(id: &str, fill: u8, collected_ago: Duration) -> Bin {
        let reading = SensorReading::new(fill, f64::from(fill) * 0.8, WasteType::Mixed).expect("valid");
        Bin::new(id, id, Coordinate::new(0.0, 0.0), now())
            .with_reading(reading)
            .with_last_collection(now() - collected_ago)
    }

    #[test]
    fn test_threshold_inclusive() {
        let s = BinSelector::default();
        assert!(s.needs_collection(&bin("A", 80, Duration::hours(1)), now()));
        assert!(!s.needs_collection(&bin("B", 79, Duration::hours(1)), now()));
    }

    #[test]
    fn test_age_clause_strict() {
        let s = BinSelector::default();
        assert!(!s.needs_collection(&bin("A", 0, Duration::days(3)), now()));
        let overdue = bin("B", 0, Duration::days(3) + Duration::seconds(1));
        assert_eq!(s.reason(&overdue, now()), Some(SelectionReason::Overdue));
    }

    #[test]
    fn test_both_clauses() {
        let s = BinSelector::default();
        let b = bin("A", 95, Duration::days(5));
        assert_eq!(s.reason(&b, now()), Some(SelectionReason::FillLevelAndOverdue));
    }

    #[test]
    fn test_79_qualifies_by_age() {
        let s = BinSelector::default();
        let b = bin("A", 79, Duration::days(4));
        assert_eq!(s.reason(&b, now()), Some(SelectionReason::Overdue));
    }

    #[test]
    fn test_select_preserves_registry_order() {
        let s = BinSelector::default();
        let bins = vec![
            bin("C", 90, Duration::hours(1)),
            bin("A", 10, Duration::hours(1)),
            bin("B", 85, Duration::hours(1)),
            bin("D", 10, Duration::days(4)),
        ];
        let picked = s.select(&bins, now());
        let ids: Vec<_> = picked.iter().map(|c| c.bin_id()).collect();
        assert_eq!(ids, vec!["C", "B", "D"]);
    }

    #[test]
    fn test_select_none() {
        let s = BinSelector::default();
        let bins = vec![bin("A", 10, Duration::hours(1)), bin("B", 79, Duration::days(1))];
        assert!(s.select(&bins, now()).is_empty());
        assert!(s.select(&[], now()).is_empty());
    }

    #[test]
    fn test_from_policy() {
        let policy = SelectionPolicy {
            fill_threshold: 50,
            max_age_days: 7,
        };
        let s = BinSelector::from_policy(&policy);
        assert_eq!(s.fill_threshold(), 50);
        assert_eq!(s.max_age(), Duration::days(7));
        assert!(s.needs_collection(&bin("A", 50, Duration::days(6)), now()));
    }

    #[test]
    fn test_from_policy_saturates_huge_age() {
        let policy = SelectionPolicy {
            fill_threshold: 80,
            max_age_days: 200_000_000_000,
        };
        let s = BinSelector::from_policy(&policy);
        assert_eq!(s.max_age(), Duration::MAX);
        assert!(!s.needs_collection(&bin("A", 10, Duration::days(4000)), now()));
        assert!(s.needs_collection(&bin("B", 90, Duration::days(1)), now()));
    }
}
