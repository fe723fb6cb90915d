//! Physics module - point geometry and cursor smoothing
//!
//! Re-exports only. All logic in submodules.

mod point;
mod smoothing;

pub use point::Point;
pub use smoothing::{PointSmoother, SMOOTHING_FACTOR};
