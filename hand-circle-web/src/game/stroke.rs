//! Stroke sampler - ordered trail points with a minimum spacing filter

use crate::physics::Point;

/// One drawing attempt, in draw order
pub struct Stroke {
    points: Vec<Point>,
    min_spacing: f64,
}

impl Stroke {
    pub fn new(min_spacing: f64) -> Self {
        Self {
            points: Vec::with_capacity(256),
            min_spacing,
        }
    }

    /// Append a point. The first point is always kept; later points must be
    /// strictly farther than `min_spacing` from the last kept one.
    ///
    /// Returns whether the point was kept.
    pub fn append(&mut self, point: Point) -> bool {
        if let Some(last) = self.points.last() {
            if last.distance(point) <= self.min_spacing {
                return false;
            }
        }
        self.points.push(point);
        true
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn set_min_spacing(&mut self, min_spacing: f64) {
        self.min_spacing = min_spacing;
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Flat [x0, y0, x1, y1, ...] for the JS side
    pub fn as_flat(&self) -> Vec<f64> {
        self.points.iter().flat_map(|p| [p.x, p.y]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_point_always_kept() {
        let mut stroke = Stroke::new(3.0);
        assert!(stroke.append(Point::new(5.0, 5.0)));
        assert_eq!(stroke.len(), 1);
    }

    #[test]
    fn test_close_point_rejected() {
        let mut stroke = Stroke::new(3.0);
        stroke.append(Point::new(0.0, 0.0));
        assert!(!stroke.append(Point::new(2.0, 0.0)));
        assert_eq!(stroke.len(), 1);
    }

    #[test]
    fn test_spaced_point_kept() {
        let mut stroke = Stroke::new(3.0);
        stroke.append(Point::new(0.0, 0.0));
        assert!(stroke.append(Point::new(3.01, 0.0)));
        assert_eq!(stroke.len(), 2);
    }

    #[test]
    fn test_spacing_measured_from_last_kept() {
        let mut stroke = Stroke::new(3.0);
        stroke.append(Point::new(0.0, 0.0));
        stroke.append(Point::new(2.0, 0.0)); // dropped
        stroke.append(Point::new(4.0, 0.0)); // 4 from (0,0): kept
        assert_eq!(stroke.points(), &[Point::new(0.0, 0.0), Point::new(4.0, 0.0)]);
    }

    #[test]
    fn test_flat_layout_and_clear() {
        let mut stroke = Stroke::new(3.0);
        stroke.append(Point::new(1.0, 2.0));
        stroke.append(Point::new(10.0, 20.0));
        assert_eq!(stroke.as_flat(), vec![1.0, 2.0, 10.0, 20.0]);
        stroke.clear();
        assert!(stroke.is_empty());
    }
}
