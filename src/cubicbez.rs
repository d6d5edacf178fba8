// Copyright 2026 the Bezkern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use core::ops::{Mul, Range};

use arrayvec::ArrayVec;

use crate::common::{align, droots};
use crate::param_curve::{adaptive_arclen, split_range};
use crate::{
    Affine, Line, ParamCurve, ParamCurveArclen, ParamCurveCurvature, ParamCurveDeriv,
    ParamCurveExtrema, Point, QuadBez, MAX_EXTREMA,
};

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline(always)]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// The de Casteljau construction at `t`.
    ///
    /// The result holds the four control points, the three points of the
    /// first interpolation level, the two of the second, and finally the
    /// point on the curve at `t`.
    pub fn hull(&self, t: f64) -> ArrayVec<Point, 10> {
        let a = self.p0.lerp(self.p1, t);
        let b = self.p1.lerp(self.p2, t);
        let c = self.p2.lerp(self.p3, t);
        let d = a.lerp(b, t);
        let e = b.lerp(c, t);
        let f = d.lerp(e, t);
        [self.p0, self.p1, self.p2, self.p3, a, b, c, d, e, f].into()
    }

    /// Split the curve at `t` into two curves that together retrace it.
    ///
    /// The first is parameterized over `[0, t]` of the original and the
    /// second over `[t, 1]`; both share the point at `t`.
    pub fn split(&self, t: f64) -> (CubicBez, CubicBez) {
        let h = self.hull(t);
        (
            CubicBez::new(h[0], h[4], h[7], h[9]),
            CubicBez::new(h[9], h[8], h[6], h[3]),
        )
    }

    /// An upper bound on the squared distance between the curve and its chord.
    ///
    /// This is the bound from Roger Willcocks' flatness test. It is zero
    /// exactly when the control points are evenly spaced on the chord.
    #[inline]
    pub fn flatness(&self) -> f64 {
        let a = 3.0 * self.p1.to_vec2() - 2.0 * self.p0.to_vec2() - self.p3.to_vec2();
        let b = 3.0 * self.p2.to_vec2() - self.p0.to_vec2() - 2.0 * self.p3.to_vec2();
        ((a.x * a.x).max(b.x * b.x) + (a.y * a.y).max(b.y * b.y)) * (1.0 / 16.0)
    }

    /// The parameters in `(0, 1)` where the curvature changes sign.
    ///
    /// The curve is aligned to its chord, and the zeros of the cross
    /// product of the first and second derivatives are solved as a
    /// quadratic.
    pub fn inflections(&self) -> ArrayVec<f64, 2> {
        let p = align(&[self.p0, self.p1, self.p2, self.p3], Line::new(self.p0, self.p3));
        let a = p[2].x * p[1].y;
        let b = p[3].x * p[1].y;
        let c = p[1].x * p[2].y;
        let d = p[3].x * p[2].y;
        // v1 t² + v2 t + v3
        let v1 = 18.0 * (-3.0 * a + 2.0 * b + 3.0 * c - d);
        let v2 = 18.0 * (3.0 * a - b - 3.0 * c);
        let v3 = 18.0 * (c - a);
        droots(&[v3, v3 + 0.5 * v2, v1 + v2 + v3])
            .into_iter()
            .filter(|&t| t > 0.0 && t < 1.0)
            .collect()
    }

    /// Returns a curve with the same shape traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> CubicBez {
        CubicBez::new(self.p3, self.p2, self.p1, self.p0)
    }

    /// Is this cubic Bezier curve [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }

    /// Is this cubic Bezier curve [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.p0.is_nan() || self.p1.is_nan() || self.p2.is_nan() || self.p3.is_nan()
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        if t == 0.0 {
            return self.p0;
        }
        if t == 1.0 {
            return self.p3;
        }
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt * mt)
            + (self.p1.to_vec2() * (mt * mt * 3.0)
                + (self.p2.to_vec2() * (mt * 3.0) + self.p3.to_vec2() * t) * t)
                * t;
        v.to_point()
    }

    fn subsegment(&self, range: Range<f64>) -> CubicBez {
        split_range(self, range, CubicBez::split)
    }

    /// Subdivide into halves, using de Casteljau.
    #[inline]
    fn subdivide(&self) -> (CubicBez, CubicBez) {
        self.split(0.5)
    }

    #[inline(always)]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline(always)]
    fn end(&self) -> Point {
        self.p3
    }
}

impl ParamCurveDeriv for CubicBez {
    type DerivResult = QuadBez;

    #[inline]
    fn deriv(&self) -> QuadBez {
        QuadBez::new(
            (3.0 * (self.p1 - self.p0)).to_point(),
            (3.0 * (self.p2 - self.p1)).to_point(),
            (3.0 * (self.p3 - self.p2)).to_point(),
        )
    }
}

impl ParamCurveArclen for CubicBez {
    /// Arc length of a cubic Bézier segment.
    ///
    /// Each half is measured with Gauss-Legendre quadrature, subdividing
    /// further until successive estimates agree.
    fn arclen(&self, accuracy: f64) -> f64 {
        adaptive_arclen(self, accuracy)
    }
}

impl ParamCurveCurvature for CubicBez {}

impl ParamCurveExtrema for CubicBez {
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        let mut result = ArrayVec::new();
        let d0 = self.p1 - self.p0;
        let d1 = self.p2 - self.p1;
        let d2 = self.p3 - self.p2;
        let x = droots(&[d0.x, d1.x, d2.x]);
        let y = droots(&[d0.y, d1.y, d2.y]);
        for t in x.into_iter().chain(y) {
            if t > 0.0 && t < 1.0 && !result.contains(&t) {
                result.push(t);
            }
        }
        result.sort_by(f64::total_cmp);
        result
    }
}

impl Mul<CubicBez> for Affine {
    type Output = CubicBez;

    #[inline]
    fn mul(self, c: CubicBez) -> CubicBez {
        CubicBez {
            p0: self * c.p0,
            p1: self * c.p1,
            p2: self * c.p2,
            p3: self * c.p3,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Affine, CubicBez, ParamCurve, ParamCurveArclen, ParamCurveDeriv, ParamCurveExtrema,
        Point,
    };

    fn assert_near(p0: Point, p1: Point, epsilon: f64) {
        assert!((p1 - p0).hypot() < epsilon, "{p0:?} != {p1:?}");
    }

    #[test]
    fn cubicbez_deriv() {
        // y = x^2
        let c = CubicBez::new(
            (0.0, 0.0),
            (1.0 / 3.0, 0.0),
            (2.0 / 3.0, 1.0 / 3.0),
            (1.0, 1.0),
        );
        let deriv = c.deriv();

        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let delta = 1e-6;
            let p = c.eval(t);
            let p1 = c.eval(t + delta);
            let d_approx = (p1 - p) * delta.recip();
            let d = deriv.eval(t).to_vec2();
            assert!((d - d_approx).hypot() < delta * 2.0);
        }
    }

    #[test]
    fn cubicbez_eval_endpoints() {
        let c = CubicBez::new((0.1, 1e9), (-3.0, 2.0), (11.0, 0.3), (7.7, -0.2));
        assert_eq!(c.eval(0.0), c.p0);
        assert_eq!(c.eval(1.0), c.p3);
    }

    #[test]
    fn cubicbez_hull() {
        let c = CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
        let h = c.hull(0.5);
        assert_eq!(h.len(), 10);
        assert_eq!(&h[..4], &[c.p0, c.p1, c.p2, c.p3]);
        assert_eq!(h[4], Point::new(0.0, 0.5));
        assert_eq!(h[7], Point::new(0.25, 0.75));
        assert_eq!(h[9], c.eval(0.5));
        assert_eq!(h[9], Point::new(0.5, 0.75));
    }

    #[test]
    fn cubicbez_split() {
        let c = CubicBez::new((3.1, 4.1), (5.9, 2.6), (5.3, 5.8), (9.7, 9.3));
        for &t in &[0.2, 0.5, 0.9] {
            let (left, right) = c.split(t);
            assert_eq!(left.p0, c.p0);
            assert_eq!(right.p3, c.p3);
            assert_eq!(left.p3, right.p0);
            assert_near(left.p3, c.eval(t), 1e-12);
            for i in 0..=10 {
                let s = i as f64 / 10.0;
                assert_near(left.eval(s), c.eval(s * t), 1e-12);
                assert_near(right.eval(s), c.eval(t + s * (1.0 - t)), 1e-12);
            }
        }
    }

    #[test]
    fn cubicbez_subsegment() {
        let c = CubicBez::new((3.1, 4.1), (5.9, 2.6), (5.3, 5.8), (9.7, 9.3));
        let t0 = 0.1;
        let t1 = 0.8;
        let cs = c.subsegment(t0..t1);
        let epsilon = 1e-12;
        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let ts = t0 + t * (t1 - t0);
            assert_near(c.eval(ts), cs.eval(t), epsilon);
        }
        assert_eq!(c.subsegment(0.0..t1), c.split(t1).0);
        assert_eq!(c.subsegment(t0..1.0), c.split(t0).1);
    }

    #[test]
    #[should_panic(expected = "must be non-empty")]
    fn cubicbez_subsegment_reversed() {
        let c = CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
        let _ = c.subsegment(0.6..0.4);
    }

    #[test]
    fn cubicbez_arclen() {
        // y = x^2
        let c = CubicBez::new(
            (0.0, 0.0),
            (1.0 / 3.0, 0.0),
            (2.0 / 3.0, 1.0 / 3.0),
            (1.0, 1.0),
        );
        let true_arclen = 0.5 * 5.0f64.sqrt() + 0.25 * (2.0 + 5.0f64.sqrt()).ln();
        for i in 0..12 {
            let accuracy = 0.1f64.powi(i);
            let error = c.arclen(accuracy) - true_arclen;
            assert!(error.abs() < accuracy);
        }
    }

    #[test]
    fn cubicbez_inv_arclen() {
        // y = x^2
        let c = CubicBez::new(
            (0.0, 0.0),
            (1.0 / 3.0, 0.0),
            (2.0 / 3.0, 1.0 / 3.0),
            (1.0, 1.0),
        );
        let true_arclen = 0.5 * 5.0f64.sqrt() + 0.25 * (2.0 + 5.0f64.sqrt()).ln();
        for i in 0..10 {
            let accuracy = 0.1f64.powi(i);
            let n = 10;
            for j in 1..=n {
                let arc = (j as f64) * ((n as f64).recip() * true_arclen);
                let t = c.inv_arclen(arc, accuracy * 0.5);
                let actual_arc = c.subsegment(0.0..t).arclen(accuracy * 0.5);
                assert!(
                    (arc - actual_arc).abs() < accuracy * 3.0,
                    "at accuracy {accuracy:e}, wanted {arc} got {actual_arc}"
                );
            }
        }
        assert_eq!(c.inv_arclen(0.0, 1e-6), 0.0);
    }

    #[test]
    fn cubicbez_extrema() {
        let q = CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
        let extrema = q.extrema();
        assert_eq!(extrema.len(), 1);
        assert!((extrema[0] - 0.5).abs() < 1e-6);

        let q = CubicBez::new((0.4, 0.5), (0.0, 1.0), (1.0, 0.0), (0.5, 0.4));
        let extrema = q.extrema();
        assert_eq!(extrema.len(), 4);
        assert!(extrema.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn cubicbez_bounding_box() {
        let c = CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
        let bbox = c.bounding_box();
        assert_eq!((bbox.x0, bbox.y0, bbox.x1), (0.0, 0.0, 1.0));
        assert!((bbox.y1 - 0.75).abs() < 1e-12);
    }

    #[test]
    fn cubicbez_flatness() {
        let straight = CubicBez::new((0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0));
        assert_eq!(straight.flatness(), 0.0);
        // Collinear but unevenly spaced control points are not flat.
        let uneven = CubicBez::new((0.0, 0.0), (2.0, 0.0), (2.5, 0.0), (3.0, 0.0));
        assert!(uneven.flatness() > 0.0);

        // The bound dominates the true squared deviation from the chord.
        let c = CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
        let max_dev: f64 = (0..=100)
            .map(|i| c.eval(i as f64 / 100.0).y)
            .fold(0.0, f64::max);
        assert!(c.flatness() >= max_dev * max_dev);
    }

    #[test]
    fn cubicbez_inflections() {
        let s = CubicBez::new((0.0, 0.0), (1.0, 1.0), (2.0, -1.0), (3.0, 0.0));
        let inflections = s.inflections();
        assert_eq!(inflections.len(), 1);
        assert!((inflections[0] - 0.5).abs() < 1e-12);

        let arch = CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0));
        assert!(arch.inflections().is_empty());
    }

    #[test]
    fn cubicbez_transform() {
        let c = CubicBez::new((3.1, 4.1), (5.9, 2.6), (5.3, 5.8), (9.7, 9.3));
        let a = Affine::rotate(0.5);
        let rotated = a * c;
        for i in 0..=4 {
            let t = i as f64 / 4.0;
            assert_near(rotated.eval(t), a * c.eval(t), 1e-9);
        }
        assert_eq!(c.reversed().reversed(), c);
        assert_near(c.reversed().eval(0.25), c.eval(0.75), 1e-12);
    }
}
