//! Gesture module - pinch classification and camera mapping
//!
//! Re-exports only. All logic in submodules.

mod mapping;
mod pinch;

pub use mapping::SurfaceGeometry;
pub use pinch::{GestureState, PinchClassifier, PinchEdge, PinchReading, PINCH_THRESHOLD};
