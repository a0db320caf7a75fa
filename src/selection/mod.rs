//! Bin selection for the daily collection pass.

mod selector;

pub use selector::{BinSelector, DEFAULT_FILL_THRESHOLD, DEFAULT_MAX_AGE_DAYS};
