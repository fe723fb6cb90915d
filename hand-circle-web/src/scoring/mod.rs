//! Scoring module - circle fit and circularity score
//!
//! Re-exports only. All logic in submodules.

mod circle_fit;
mod score;

pub use circle_fit::{fit_circle, CircleFit, DET_EPSILON};
pub use score::{score_stroke, ScoreResult};
