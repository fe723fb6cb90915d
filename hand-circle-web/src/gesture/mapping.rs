//! Normalized camera → drawing surface mapping
//!
//! The front camera feed is mirrored, so X is flipped before scaling.

use crate::physics::Point;

/// Drawing surface size in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceGeometry {
    pub width: f64,
    pub height: f64,
}

impl SurfaceGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Mirror X and scale a normalized (0-1) point into surface pixels
    pub fn to_surface(&self, normalized: Point) -> Point {
        Point::new((1.0 - normalized.x) * self.width, normalized.y * self.height)
    }

    /// Surface pixels → clip space (-1 to 1), Y up
    pub fn to_clip_space(&self, p: Point) -> (f32, f32) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return (0.0, 0.0);
        }
        (
            (p.x / self.width * 2.0 - 1.0) as f32,
            -(p.y / self.height * 2.0 - 1.0) as f32,
        )
    }
}

impl Default for SurfaceGeometry {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_and_scale() {
        let geometry = SurfaceGeometry::new(640.0, 480.0);
        let p = geometry.to_surface(Point::new(0.25, 0.5));
        assert!((p.x - 480.0).abs() < 1e-9);
        assert!((p.y - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_clip_space_corners() {
        let geometry = SurfaceGeometry::new(200.0, 100.0);
        assert_eq!(geometry.to_clip_space(Point::new(0.0, 0.0)), (-1.0, 1.0));
        assert_eq!(geometry.to_clip_space(Point::new(200.0, 100.0)), (1.0, -1.0));
        assert_eq!(geometry.to_clip_space(Point::new(100.0, 50.0)), (0.0, 0.0));
    }
}
