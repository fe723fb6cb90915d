//! Algebraic least-squares circle fit (Kåsa)
//!
//! Fits x² + y² + a·x + b·y + c = 0 by minimising the algebraic residual.
//! The normal equations are a 3x3 system in (a, b, c) built from running
//! sums, solved with Cramer's rule.

use nalgebra::{Matrix3, Vector3};

use crate::physics::Point;

/// Below this |det| the system is treated as singular (collinear / too few
/// distinct points)
pub const DET_EPSILON: f64 = 1e-9;

/// A fitted circle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleFit {
    pub center: Point,
    pub radius: f64,
}

/// Power sums needed for the normal equations
#[derive(Default)]
struct Moments {
    n: f64,
    x: f64,
    y: f64,
    xx: f64,
    yy: f64,
    xy: f64,
    xxx: f64,
    yyy: f64,
    xyy: f64,
    xxy: f64,
    zz: f64,
}

impl Moments {
    fn accumulate(points: &[Point]) -> Self {
        points.iter().fold(Self::default(), |mut m, p| {
            let x2 = p.x * p.x;
            let y2 = p.y * p.y;
            m.n += 1.0;
            m.x += p.x;
            m.y += p.y;
            m.xx += x2;
            m.yy += y2;
            m.xy += p.x * p.y;
            m.xxx += x2 * p.x;
            m.yyy += y2 * p.y;
            m.xyy += p.x * y2;
            m.xxy += x2 * p.y;
            m.zz += x2 + y2;
            m
        })
    }
}

/// Solve A·v = b by Cramer's rule. `None` when |det A| < DET_EPSILON.
fn solve_cramer(a: &Matrix3<f64>, b: &Vector3<f64>) -> Option<Vector3<f64>> {
    let det = a.determinant();
    if !det.is_finite() || det.abs() < DET_EPSILON {
        return None;
    }

    let mut solution = Vector3::zeros();
    for col in 0..3 {
        let mut replaced = *a;
        replaced.set_column(col, b);
        solution[col] = replaced.determinant() / det;
    }
    Some(solution)
}

/// Fit a circle through an ordered point set
///
/// Returns `None` for fewer than 3 points, a singular system, or a
/// non-positive squared radius.
pub fn fit_circle(points: &[Point]) -> Option<CircleFit> {
    if points.len() < 3 {
        return None;
    }

    let m = Moments::accumulate(points);

    #[rustfmt::skip]
    let a = Matrix3::new(
        m.xx, m.xy, m.x,
        m.xy, m.yy, m.y,
        m.x,  m.y,  m.n,
    );
    let b = Vector3::new(-(m.xxx + m.xyy), -(m.xxy + m.yyy), -m.zz);

    let coeffs = solve_cramer(&a, &b)?;
    let center = Point::new(-coeffs[0] / 2.0, -coeffs[1] / 2.0);
    let radius_sq = center.x * center.x + center.y * center.y - coeffs[2];
    if !radius_sq.is_finite() || radius_sq <= 0.0 {
        return None;
    }

    Some(CircleFit {
        center,
        radius: radius_sq.sqrt(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn ring(center: Point, radius: f64, count: usize) -> Vec<Point> {
        (0..count)
            .map(|i| {
                let angle = i as f64 / count as f64 * TAU;
                Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
            })
            .collect()
    }

    #[test]
    fn test_exact_circle_recovered() {
        let points = ring(Point::new(100.0, 100.0), 50.0, 40);
        let fit = fit_circle(&points).expect("circle should fit");
        assert!((fit.center.x - 100.0).abs() < 1e-6);
        assert!((fit.center.y - 100.0).abs() < 1e-6);
        assert!((fit.radius - 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_three_points_define_circle() {
        let points = [
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(-10.0, 0.0),
        ];
        let fit = fit_circle(&points).expect("three points should fit");
        assert!(fit.center.x.abs() < 1e-6);
        assert!(fit.center.y.abs() < 1e-6);
        assert!((fit.radius - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_too_few_points() {
        assert!(fit_circle(&[]).is_none());
        assert!(fit_circle(&[Point::new(1.0, 1.0), Point::new(5.0, 2.0)]).is_none());
    }

    #[test]
    fn test_collinear_points_rejected() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
        ];
        assert!(fit_circle(&points).is_none());

        let diagonal = [
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 3.0),
        ];
        assert!(fit_circle(&diagonal).is_none());
    }

    #[test]
    fn test_repeated_point_rejected() {
        let points = vec![Point::new(42.0, 17.0); 12];
        assert!(fit_circle(&points).is_none());
    }

    #[test]
    fn test_cramer_matches_known_solution() {
        #[rustfmt::skip]
        let a = Matrix3::new(
            2.0, 1.0, -1.0,
            -3.0, -1.0, 2.0,
            -2.0, 1.0, 2.0,
        );
        let b = Vector3::new(8.0, -11.0, -3.0);
        let v = solve_cramer(&a, &b).expect("non-singular");
        assert!((v[0] - 2.0).abs() < 1e-9);
        assert!((v[1] - 3.0).abs() < 1e-9);
        assert!((v[2] + 1.0).abs() < 1e-9);
    }
}
