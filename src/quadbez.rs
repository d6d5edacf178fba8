// Copyright 2026 the Bezkern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use core::ops::{Mul, Range};

use arrayvec::ArrayVec;

use crate::common::droots;
use crate::param_curve::{adaptive_arclen, split_range};
use crate::{
    Affine, CubicBez, Line, ParamCurve, ParamCurveArclen, ParamCurveCurvature, ParamCurveDeriv,
    ParamCurveExtrema, Point, MAX_EXTREMA,
};

/// A single quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadBez {
    /// The start point.
    pub p0: Point,
    /// The control point.
    pub p1: Point,
    /// The end point.
    pub p2: Point,
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    #[inline(always)]
    pub fn new<V: Into<Point>>(p0: V, p1: V, p2: V) -> QuadBez {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// Raise the order by 1.
    ///
    /// Returns a cubic Bézier segment that exactly represents this quadratic.
    #[inline]
    pub fn raise(&self) -> CubicBez {
        CubicBez::new(
            self.p0,
            self.p0 + (2.0 / 3.0) * (self.p1 - self.p0),
            self.p2 + (2.0 / 3.0) * (self.p1 - self.p2),
            self.p2,
        )
    }

    /// The de Casteljau construction at `t`.
    ///
    /// The result holds the three control points, then the two points of the
    /// first interpolation level, then the point on the curve at `t`.
    pub fn hull(&self, t: f64) -> ArrayVec<Point, 6> {
        let a = self.p0.lerp(self.p1, t);
        let b = self.p1.lerp(self.p2, t);
        let c = a.lerp(b, t);
        [self.p0, self.p1, self.p2, a, b, c].into()
    }

    /// Split the curve at `t` into two curves that together retrace it.
    ///
    /// The first is parameterized over `[0, t]` of the original and the
    /// second over `[t, 1]`; both share the point at `t`.
    pub fn split(&self, t: f64) -> (QuadBez, QuadBez) {
        let h = self.hull(t);
        (
            QuadBez::new(h[0], h[3], h[5]),
            QuadBez::new(h[5], h[4], h[2]),
        )
    }

    /// An upper bound on the squared distance between the curve and its chord.
    ///
    /// This is `|2 p1 - p0 - p2|² / 16`, exact for the maximum deviation of a
    /// quadratic from the line through its endpoints.
    #[inline]
    pub fn flatness(&self) -> f64 {
        let d = 2.0 * self.p1.to_vec2() - self.p0.to_vec2() - self.p2.to_vec2();
        d.hypot2() * (1.0 / 16.0)
    }

    /// Returns a curve with the same shape traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> QuadBez {
        QuadBez::new(self.p2, self.p1, self.p0)
    }

    /// Is this quadratic Bezier curve [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite()
    }

    /// Is this quadratic Bezier curve [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.p0.is_nan() || self.p1.is_nan() || self.p2.is_nan()
    }
}

impl ParamCurve for QuadBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        if t == 0.0 {
            return self.p0;
        }
        if t == 1.0 {
            return self.p2;
        }
        let mt = 1.0 - t;
        (self.p0.to_vec2() * (mt * mt)
            + (self.p1.to_vec2() * (mt * 2.0) + self.p2.to_vec2() * t) * t)
            .to_point()
    }

    fn subsegment(&self, range: Range<f64>) -> QuadBez {
        split_range(self, range, QuadBez::split)
    }

    /// Subdivide into halves, using de Casteljau.
    #[inline]
    fn subdivide(&self) -> (QuadBez, QuadBez) {
        self.split(0.5)
    }

    #[inline(always)]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline(always)]
    fn end(&self) -> Point {
        self.p2
    }
}

impl ParamCurveDeriv for QuadBez {
    type DerivResult = Line;

    #[inline]
    fn deriv(&self) -> Line {
        Line::new(
            (2.0 * (self.p1.to_vec2() - self.p0.to_vec2())).to_point(),
            (2.0 * (self.p2.to_vec2() - self.p1.to_vec2())).to_point(),
        )
    }
}

impl ParamCurveArclen for QuadBez {
    fn arclen(&self, accuracy: f64) -> f64 {
        adaptive_arclen(self, accuracy)
    }
}

impl ParamCurveCurvature for QuadBez {}

impl ParamCurveExtrema for QuadBez {
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        let mut result = ArrayVec::new();
        let d0 = self.p1 - self.p0;
        let d1 = self.p2 - self.p1;
        for t in droots(&[d0.x, d1.x]).into_iter().chain(droots(&[d0.y, d1.y])) {
            if t > 0.0 && t < 1.0 && !result.contains(&t) {
                result.push(t);
            }
        }
        result.sort_by(f64::total_cmp);
        result
    }
}

impl Mul<QuadBez> for Affine {
    type Output = QuadBez;

    #[inline]
    fn mul(self, other: QuadBez) -> QuadBez {
        QuadBez {
            p0: self * other.p0,
            p1: self * other.p1,
            p2: self * other.p2,
        }
    }
}
