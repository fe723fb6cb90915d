//! Exponential cursor smoothing
//!
//! Steadies the pinch midpoint so the stroke does not pick up MediaPipe jitter.
//! Cleared whenever the pinch ends so a fresh pinch starts from the raw point.

use super::point::Point;

/// Default EMA gain - fraction of the gap closed per frame
pub const SMOOTHING_FACTOR: f64 = 0.35;

/// Exponential moving average over a 2D point stream
pub struct PointSmoother {
    /// Gain in (0, 1] - higher = more responsive, lower = smoother
    factor: f64,

    // State
    smoothed: Option<Point>,
}

impl PointSmoother {
    pub fn new(factor: f64) -> Self {
        Self {
            factor,
            smoothed: None,
        }
    }

    /// Feed one raw point, returns the smoothed cursor
    ///
    /// The first call after a reset seeds the state and returns `raw` unchanged.
    pub fn smooth(&mut self, raw: Point) -> Point {
        let next = match self.smoothed {
            None => raw,
            Some(prev) => Point::new(
                prev.x + self.factor * (raw.x - prev.x),
                prev.y + self.factor * (raw.y - prev.y),
            ),
        };
        self.smoothed = Some(next);
        next
    }

    pub fn set_factor(&mut self, factor: f64) {
        self.factor = factor;
    }

    /// Last smoothed point, if seeded
    pub fn current(&self) -> Option<Point> {
        self.smoothed
    }

    /// Drop accumulated momentum
    pub fn reset(&mut self) {
        self.smoothed = None;
    }
}

impl Default for PointSmoother {
    fn default() -> Self {
        Self::new(SMOOTHING_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_call_passes_through() {
        let mut smoother = PointSmoother::default();
        let out = smoother.smooth(Point::new(120.0, 80.0));
        assert_eq!(out, Point::new(120.0, 80.0));
    }

    #[test]
    fn test_step_moves_by_factor() {
        let mut smoother = PointSmoother::default();
        smoother.smooth(Point::new(0.0, 0.0));
        let out = smoother.smooth(Point::new(100.0, -100.0));
        assert!((out.x - 35.0).abs() < 1e-9);
        assert!((out.y + 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_constant_input_converges() {
        let mut smoother = PointSmoother::default();
        smoother.smooth(Point::new(0.0, 0.0));
        let target = Point::new(300.0, 200.0);
        let mut out = Point::default();
        for _ in 0..40 {
            out = smoother.smooth(target);
        }
        // 0.65^40 * 360 is well under a thousandth of a pixel
        assert!(out.distance(target) < 1e-3);
    }

    #[test]
    fn test_reset_reseeds() {
        let mut smoother = PointSmoother::default();
        smoother.smooth(Point::new(0.0, 0.0));
        smoother.smooth(Point::new(50.0, 50.0));
        smoother.reset();
        assert!(smoother.current().is_none());
        let out = smoother.smooth(Point::new(400.0, 10.0));
        assert_eq!(out, Point::new(400.0, 10.0));
    }
}
