//! Daily collection cycle orchestration and reporting.

mod collection;
mod report;

pub use collection::{CollectedLoad, CollectionCycle, CycleOutcome, CycleReport};
pub use report::{CycleReporter, LogReporter};
