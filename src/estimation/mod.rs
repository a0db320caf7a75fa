//! Yield estimation, sorting confidence and environmental impact.
//!
//! - [`YieldEstimator`] — per-stop collected weight and recycling value
//! - [`SimulatedYield`] — random draws from bounded ranges
//! - [`RecordedYield`] — recorded weight priced by waste category
//! - [`SortingConfidence`] — confidence of the per-load category sort
//! - [`EnvironmentalImpact`] — CO₂, energy and compost figures from total weight

mod estimator;
mod impact;
mod sorting;

pub use estimator::{FixedYield, RecordedYield, SimulatedYield, YieldEstimate, YieldEstimator};
pub use impact::EnvironmentalImpact;
pub use sorting::{
    FixedConfidence, SimulatedSorting, SortingConfidence, MAX_SIMULATED_CONFIDENCE,
    MIN_SIMULATED_CONFIDENCE,
};
