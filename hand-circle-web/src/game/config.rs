//! Tunable game parameters

use crate::gesture::PINCH_THRESHOLD;
use crate::physics::SMOOTHING_FACTOR;

/// Distance (px) from the crayon anchor that still counts as grabbing it
pub const PICKUP_RADIUS: f64 = 110.0;

/// Strokes shorter than this on release are treated as accidental taps
pub const MIN_TRAIL_POINTS: usize = 30;

/// Trail points closer than this (px) to the previous one are dropped
pub const MIN_POINT_SPACING: f64 = 3.0;

/// Gameplay tuning, applied when the session is built or reconfigured
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// EMA gain for the cursor
    pub smoothing_factor: f64,
    /// Thumb-index distance (normalized) below which the hand is pinching
    pub pinch_threshold: f64,
    /// Crayon grab radius (px)
    pub pickup_radius: f64,
    /// Minimum sampled points for a stroke to be scored
    pub min_trail_points: usize,
    /// Minimum spacing (px) between accepted trail points
    pub min_point_spacing: f64,
    /// Losing the hand mid-stroke scores a long-enough stroke instead of
    /// discarding it
    pub finalize_on_tracking_loss: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            smoothing_factor: SMOOTHING_FACTOR,
            pinch_threshold: PINCH_THRESHOLD,
            pickup_radius: PICKUP_RADIUS,
            min_trail_points: MIN_TRAIL_POINTS,
            min_point_spacing: MIN_POINT_SPACING,
            finalize_on_tracking_loss: true,
        }
    }
}
