//! Yield estimation strategies.
//!
//! A yield estimate is the weight collected at one stop and what that waste
//! is worth per kilogram. Costing only sees the [`YieldEstimator`] trait, so
//! simulated values can be replaced by real weighing data without touching
//! route construction or costing.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::EstimationRanges;
use crate::error::Result;
use crate::models::{CategoryTable, CollectionCandidate};

/// Estimated collected weight and value of one stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldEstimate {
    /// Collected weight (kg).
    pub weight_kg: f64,
    /// Recycling value per kg.
    pub rate_per_kg: f64,
}

impl YieldEstimate {
    /// Recycling revenue for this stop.
    pub fn revenue(&self) -> f64 {
        self.weight_kg * self.rate_per_kg
    }
}

/// Produces a [`YieldEstimate`] for a collected candidate.
pub trait YieldEstimator {
    /// Estimates the yield of collecting `candidate`.
    fn estimate(&mut self, candidate: &CollectionCandidate) -> YieldEstimate;
}

impl<T: YieldEstimator + ?Sized> YieldEstimator for &mut T {
    fn estimate(&mut self, candidate: &CollectionCandidate) -> YieldEstimate {
        (**self).estimate(candidate)
    }
}

/// Draws weight and rate uniformly from configured ranges.
///
/// The candidate's recorded weight is ignored; this stands in for a weighing
/// step at the transfer station.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use waste_routing::estimation::{SimulatedYield, YieldEstimator};
/// # use chrono::{TimeZone, Utc};
/// # use waste_routing::models::{Bin, CollectionCandidate, Coordinate, SelectionReason};
/// # let now = Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap();
/// # let bin = Bin::new("BIN001", "", Coordinate::new(0.0, 0.0), now);
/// # let candidate = CollectionCandidate::snapshot(&bin, SelectionReason::Overdue);
///
/// let mut est = SimulatedYield::new(StdRng::seed_from_u64(42));
/// let y = est.estimate(&candidate);
/// assert!((60.0..100.0).contains(&y.weight_kg));
/// assert!((0.05..0.15).contains(&y.rate_per_kg));
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedYield<R> {
    rng: R,
    ranges: EstimationRanges,
}

impl<R: Rng> SimulatedYield<R> {
    /// Creates an estimator with the default ranges.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            ranges: EstimationRanges::default(),
        }
    }

    /// Creates an estimator with custom ranges.
    ///
    /// Fails with [`InvalidConfig`](crate::error::WasteError::InvalidConfig)
    /// if either range is empty, inverted, negative or non-finite.
    pub fn with_ranges(rng: R, ranges: EstimationRanges) -> Result<Self> {
        ranges.validate()?;
        Ok(Self { rng, ranges })
    }

    /// Draws a weight in the configured range.
    pub fn sample_weight_kg(&mut self) -> f64 {
        let (low, high) = self.ranges.weight_kg;
        self.rng.random_range(low..high)
    }
}

impl<R: Rng> YieldEstimator for SimulatedYield<R> {
    fn estimate(&mut self, _candidate: &CollectionCandidate) -> YieldEstimate {
        let weight_kg = self.sample_weight_kg();
        let (low, high) = self.ranges.rate_per_kg;
        let rate_per_kg = self.rng.random_range(low..high);
        YieldEstimate {
            weight_kg,
            rate_per_kg,
        }
    }
}

/// Uses the candidate's recorded weight and its category's recycling value.
#[derive(Debug, Clone, Default)]
pub struct RecordedYield {
    categories: CategoryTable,
}

impl RecordedYield {
    /// Creates an estimator backed by `categories`.
    pub fn new(categories: CategoryTable) -> Self {
        Self { categories }
    }
}

impl YieldEstimator for RecordedYield {
    fn estimate(&mut self, candidate: &CollectionCandidate) -> YieldEstimate {
        YieldEstimate {
            weight_kg: candidate.weight_kg(),
            rate_per_kg: self
                .categories
                .lookup(candidate.waste_type())
                .recycling_value_per_kg(),
        }
    }
}

/// Returns the same estimate for every stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedYield(pub YieldEstimate);

impl FixedYield {
    /// Creates a fixed estimator.
    pub fn new(weight_kg: f64, rate_per_kg: f64) -> Self {
        Self(YieldEstimate {
            weight_kg,
            rate_per_kg,
        })
    }
}

impl YieldEstimator for FixedYield {
    fn estimate(&mut self, _candidate: &CollectionCandidate) -> YieldEstimate {
        self.0
    }
}
