//! Constructive heuristics for building collection routes.
//!
//! - [`nearest_neighbor_route`] — Greedy nearest-neighbor ordering, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor_route;
