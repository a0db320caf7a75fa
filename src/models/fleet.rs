//! Bin registry.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::{Bin, SensorReading};

/// Ordered registry of all deployed bins.
///
/// The fleet is the only owner of live bin state. Sensor updates and
/// collection resets go through it; routing never touches it.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use waste_routing::models::{Bin, Coordinate, Fleet};
///
/// let now = Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap();
/// let mut fleet = Fleet::new();
/// fleet.deploy(Bin::new("BIN001", "Downtown Plaza", Coordinate::new(40.7589, -73.9851), now));
/// assert_eq!(fleet.len(), 1);
/// assert!(fleet.get("BIN001").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    bins: Vec<Bin>,
}

impl Fleet {
    /// Creates an empty fleet.
    pub fn new() -> Self {
        Self { bins: Vec::new() }
    }

    /// Adds a bin at the end of the registry.
    pub fn deploy(&mut self, bin: Bin) {
        self.bins.push(bin);
    }

    /// Bins in registry order.
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Number of deployed bins.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Returns `true` if no bins are deployed.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Looks up a bin by ID.
    pub fn get(&self, id: &str) -> Option<&Bin> {
        self.bins.iter().find(|b| b.id() == id)
    }

    /// Refreshes every bin with a new sensor reading.
    pub fn apply_readings<F>(&mut self, mut read: F)
    where
        F: FnMut(&Bin) -> SensorReading,
    {
        for bin in &mut self.bins {
            let reading = read(bin);
            bin.apply_reading(reading);
        }
    }

    /// Resets each listed bin after collection.
    ///
    /// Each bin is reset at most once per call even if its ID is repeated.
    /// Returns the number of bins reset; unknown IDs are skipped.
    pub fn mark_collected<'a, I>(&mut self, ids: I, at: DateTime<Utc>) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut reset = 0;
        let mut seen: Vec<&str> = Vec::new();
        for id in ids {
            if seen.contains(&id) {
                continue;
            }
            seen.push(id);
            match self.bins.iter_mut().find(|b| b.id() == id) {
                Some(bin) => {
                    bin.reset_after_collection(at);
                    reset += 1;
                    debug!(bin_id = id, "bin emptied");
                }
                None => warn!(bin_id = id, "collected bin not in registry"),
            }
        }
        reset
    }

    /// One status line per bin, in registry order.
    pub fn status_report(&self) -> Vec<String> {
        self.bins.iter().map(Bin::status_report).collect()
    }
}
