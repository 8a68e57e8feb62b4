// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// A cubic Bezier segment given by its four control points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
    pub p4: Point,
}

impl CubicBezier {
    pub fn new(p1: Point, p2: Point, p3: Point, p4: Point) -> Self {
        CubicBezier { p1, p2, p3, p4 }
    }

    /// Evaluate the curve with the cubic Bernstein basis.
    ///
    /// `point_at(0.0)` is exactly `p1` and `point_at(1.0)` exactly `p4`:
    /// the other basis weights vanish to `0.0` at the endpoints.
    pub fn point_at(&self, t: f64) -> Point {
        let s = 1.0 - t;
        let w1 = s * s * s;
        let w2 = 3.0 * s * s * t;
        let w3 = 3.0 * s * t * t;
        let w4 = t * t * t;

        Point {
            x: self.p1.x * w1 + self.p2.x * w2 + self.p3.x * w3 + self.p4.x * w4,
            y: self.p1.y * w1 + self.p2.y * w2 + self.p3.y * w3 + self.p4.y * w4,
        }
    }

    pub fn sample(&self, n: usize) -> Vec<Point> {
        linspace(n).map(|t| self.point_at(t)).collect()
    }
}

/// `n` evenly spaced parameters covering `[0, 1]`, both ends included.
pub fn linspace(n: usize) -> impl Iterator<Item = f64> {
    let denom = n.saturating_sub(1).max(1) as f64;
    (0..n).map(move |i| i as f64 / denom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn s_curve() -> CubicBezier {
        CubicBezier::new(
            Point::new(0.5, 0.2),
            Point::new(0.8, 0.2),
            Point::new(0.7, 0.6),
            Point::new(1.0, 0.6),
        )
    }

    #[test]
    fn test_endpoints_exact() {
        let curve = s_curve();
        assert_eq!(curve.point_at(0.0), curve.p1);
        assert_eq!(curve.point_at(1.0), curve.p4);
    }

    #[test]
    fn test_midpoint() {
        // flat-tangent S curve: the midpoint sits halfway in y
        let mid = s_curve().point_at(0.5);
        assert!(approx_eq!(f64, mid.y, 0.4, epsilon = 1e-12));
        // x: (0.5 + 3*0.8 + 3*0.7 + 1.0) / 8
        assert!(approx_eq!(f64, mid.x, 0.75, epsilon = 1e-12));
    }

    #[test]
    fn test_linspace() {
        let ts: Vec<f64> = linspace(5).collect();
        assert_eq!(ts, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

        let ts: Vec<f64> = linspace(100).collect();
        assert_eq!(ts.len(), 100);
        assert_eq!(ts[0], 0.0);
        assert_eq!(ts[99], 1.0);

        assert_eq!(linspace(1).collect::<Vec<_>>(), vec![0.0]);
        assert_eq!(linspace(0).count(), 0);
    }

    #[test]
    fn test_sample_covers_endpoints() {
        let curve = s_curve();
        let pts = curve.sample(100);
        assert_eq!(pts.len(), 100);
        assert_eq!(pts[0], curve.p1);
        assert_eq!(pts[99], curve.p4);
        // x is monotonic for this control polygon
        assert!(pts.windows(2).all(|w| w[0].x <= w[1].x));
    }
}
