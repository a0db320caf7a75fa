//! Route costing.

mod coster;

pub use coster::RouteCoster;
