//! Circularity score for a finished stroke
//!
//! Deviation from the fitted circle dominates (90 points); returning to the
//! start point is worth the remaining 10.

use super::circle_fit::fit_circle;
use crate::physics::Point;

const DEVIATION_WEIGHT: f64 = 90.0;
const CLOSURE_WEIGHT: f64 = 10.0;

/// Deviation tolerance = radius * scale + offset
const DEVIATION_TOLERANCE: (f64, f64) = (0.35, 24.0);
/// Closure tolerance = radius * scale + offset
const CLOSURE_TOLERANCE: (f64, f64) = (0.45, 28.0);

/// Fitted circle plus the 0-100 score
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreResult {
    pub center: Point,
    pub radius: f64,
    pub score: f64,
}

impl ScoreResult {
    /// Integer-rounded score shown to the player
    pub fn display_score(&self) -> u32 {
        self.score.round() as u32
    }
}

/// Mean per-point closeness to the circle, in [0, 1]
fn deviation_score(points: &[Point], center: Point, radius: f64) -> f64 {
    let tolerance = radius * DEVIATION_TOLERANCE.0 + DEVIATION_TOLERANCE.1;
    let total: f64 = points
        .iter()
        .map(|p| {
            let diff = (p.distance(center) - radius).abs();
            (1.0 - diff / tolerance).max(0.0)
        })
        .sum();
    total / points.len() as f64
}

/// How close the stroke ends to where it started, in [0, 1]
fn closure_score(first: Point, last: Point, radius: f64) -> f64 {
    let tolerance = radius * CLOSURE_TOLERANCE.0 + CLOSURE_TOLERANCE.1;
    (1.0 - first.distance(last) / tolerance).max(0.0)
}

/// Fit and score an ordered stroke. `None` when no circle can be fitted.
pub fn score_stroke(points: &[Point]) -> Option<ScoreResult> {
    let fit = fit_circle(points)?;
    let (first, last) = (*points.first()?, *points.last()?);

    let mean = deviation_score(points, fit.center, fit.radius);
    let closure = closure_score(first, last, fit.radius);
    let score = (mean * DEVIATION_WEIGHT + closure * CLOSURE_WEIGHT).clamp(0.0, 100.0);
    if !score.is_finite() {
        return None;
    }

    Some(ScoreResult {
        center: fit.center,
        radius: fit.radius,
        score,
    })
}
