//! Sorting confidence.
//!
//! Each collected load is sorted into its waste category with some
//! confidence. The cycle only sees the [`SortingConfidence`] trait; a vision
//! classifier can replace the simulated one without touching costing.

use rand::Rng;

use crate::models::CollectionCandidate;

/// Lowest simulated sorting confidence.
pub const MIN_SIMULATED_CONFIDENCE: f64 = 0.85;

/// Upper bound (exclusive) of simulated sorting confidence.
pub const MAX_SIMULATED_CONFIDENCE: f64 = 0.99;

/// Produces the confidence (0..=1) with which a load was sorted.
pub trait SortingConfidence {
    /// Confidence for the load collected from `candidate`.
    fn confidence(&mut self, candidate: &CollectionCandidate) -> f64;
}

impl<T: SortingConfidence + ?Sized> SortingConfidence for &mut T {
    fn confidence(&mut self, candidate: &CollectionCandidate) -> f64 {
        (**self).confidence(candidate)
    }
}

/// Draws confidence uniformly from `[0.85, 0.99)`.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use waste_routing::estimation::{SimulatedSorting, SortingConfidence};
/// # use chrono::{TimeZone, Utc};
/// # use waste_routing::models::{Bin, CollectionCandidate, Coordinate, SelectionReason};
/// # let now = Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap();
/// # let bin = Bin::new("BIN001", "", Coordinate::new(0.0, 0.0), now);
/// # let candidate = CollectionCandidate::snapshot(&bin, SelectionReason::Overdue);
///
/// let mut sorter = SimulatedSorting::new(StdRng::seed_from_u64(42));
/// let c = sorter.confidence(&candidate);
/// assert!((0.85..0.99).contains(&c));
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedSorting<R> {
    rng: R,
}

impl<R: Rng> SimulatedSorting<R> {
    /// Creates a simulated sorter driven by `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SortingConfidence for SimulatedSorting<R> {
    fn confidence(&mut self, _candidate: &CollectionCandidate) -> f64 {
        self.rng
            .random_range(MIN_SIMULATED_CONFIDENCE..MAX_SIMULATED_CONFIDENCE)
    }
}

/// Reports the same confidence for every load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedConfidence(pub f64);

impl Default for FixedConfidence {
    /// Certain sorting, used when no classifier is attached.
    fn default() -> Self {
        Self(1.0)
    }
}

impl SortingConfidence for FixedConfidence {
    fn confidence(&mut self, _candidate: &CollectionCandidate) -> f64 {
        self.0
    }
}
