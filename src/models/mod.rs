//! Domain model types for waste collection.
//!
//! Bins with their sensor readings live in a [`Fleet`]; selection snapshots
//! them into [`CollectionCandidate`]s, which are ordered into a [`Route`] and
//! costed into a [`CostBreakdown`].

mod bin;
mod candidate;
mod category;
mod coordinate;
mod cost;
mod fleet;
mod route;

pub use bin::{Bin, FillStatus, SensorReading, WasteType};
pub use candidate::{CollectionCandidate, SelectionReason};
pub use category::{CategoryTable, WasteCategory};
pub use coordinate::Coordinate;
pub use cost::{CostBreakdown, CostSuggestion};
pub use fleet::Fleet;
pub use route::{Route, DEPOT_OVERHEAD_KM};
