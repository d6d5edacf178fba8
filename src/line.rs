// Copyright 2026 the Bezkern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use core::ops::{Mul, Range};

use arrayvec::ArrayVec;

use crate::param_curve::split_range;
use crate::{
    Affine, ParamCurve, ParamCurveArclen, ParamCurveCurvature, ParamCurveDeriv,
    ParamCurveExtrema, Point, Rect, Vec2, EPSILON, MAX_EXTREMA,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A single line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

/// The result of [`Line::nearest`].
#[derive(Debug, Clone, Copy)]
pub struct Nearest {
    /// The square of the distance from the nearest position on the segment
    /// to the given point.
    pub distance_sq: f64,
    /// The position on the segment, expressed as a parametric value in `[0, 1]`.
    pub t: f64,
}

/// The closest approach of two line segments, from [`Line::segment_distance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentDistance {
    /// The squared distance between the closest points.
    pub distance_sq: f64,
    /// The parameter of the closest point on the first segment.
    pub t1: f64,
    /// The parameter of the closest point on the second segment.
    pub t2: f64,
}

impl Line {
    /// Create a new line.
    #[inline(always)]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// Returns a copy of this `Line` with the end points swapped so that it
    /// points in the opposite direction.
    #[must_use]
    #[inline(always)]
    pub fn reversed(&self) -> Line {
        Self {
            p0: self.p1,
            p1: self.p0,
        }
    }

    /// The length of the line.
    #[inline]
    pub fn length(self) -> f64 {
        (self.p1 - self.p0).hypot()
    }

    /// The midpoint of the line.
    #[must_use]
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p0.midpoint(self.p1)
    }

    /// The de Casteljau construction at `t`: both endpoints, then the point at `t`.
    pub fn hull(&self, t: f64) -> ArrayVec<Point, 3> {
        [self.p0, self.p1, self.p0.lerp(self.p1, t)].into()
    }

    /// Split the line at `t` into two lines that meet at the point at `t`.
    pub fn split(&self, t: f64) -> (Line, Line) {
        let h = self.hull(t);
        (Line::new(h[0], h[2]), Line::new(h[2], h[1]))
    }

    /// The parameters at which two lines, extended to infinity, cross.
    ///
    /// Returns `(t1, t2)` where `t1` is the parameter on `self` and `t2` the
    /// parameter on `other`. The parameters are not restricted to `[0, 1]`.
    ///
    /// Returns `None` when the lines are parallel, which includes the case
    /// where either line has zero length. The test compares the sine of the
    /// angle between the lines against [`EPSILON`].
    pub fn crossing_params(self, other: Line) -> Option<(f64, f64)> {
        let da = self.p1 - self.p0;
        let db = other.p1 - other.p0;
        let den = da.cross(db);
        if den.abs() <= EPSILON * da.hypot() * db.hypot() {
            return None;
        }
        let r = other.p0 - self.p0;
        Some((r.cross(db) / den, r.cross(da) / den))
    }

    /// Computes the point where two lines, if extended to infinity, would cross.
    pub fn crossing_point(self, other: Line) -> Option<Point> {
        let (t1, _) = self.crossing_params(other)?;
        Some(self.eval(t1))
    }

    /// The parameters at which two segments cross strictly inside both.
    ///
    /// Crossings at an endpoint of either segment are not reported.
    pub fn segment_crossing(self, other: Line) -> Option<(f64, f64)> {
        let (t1, t2) = self.crossing_params(other)?;
        let inside = |t: f64| t > 0.0 && t < 1.0;
        (inside(t1) && inside(t2)).then_some((t1, t2))
    }

    /// Find the position on the segment nearest the given point.
    pub fn nearest(self, p: Point) -> Nearest {
        let d = self.p1 - self.p0;
        let v = p - self.p0;

        // Projection parameter of `p` onto the segment. This is infinite or
        // NaN when the segment has zero length; the clamp below handles it.
        let t = d.dot(v) / d.hypot2();

        // `max` and `min` map `-inf` and NaN to 0, and `inf` to 1.
        #[expect(
            clippy::manual_clamp,
            reason = "`clamp` propagates NaN, which must map to the start point here"
        )]
        let t = { t.max(0.).min(1.) };

        let distance_sq = (v - t * d).hypot2();
        Nearest { distance_sq, t }
    }

    /// The closest approach between two segments.
    ///
    /// If the segments cross (endpoints included), the distance is zero and
    /// the parameters are those of the crossing. Otherwise the minimum is
    /// attained at an endpoint of one of the segments, so the four
    /// endpoint projections are compared and the smallest is returned.
    pub fn segment_distance(self, other: Line) -> SegmentDistance {
        if let Some((t1, t2)) = self.crossing_params(other) {
            let range = -EPSILON..=1.0 + EPSILON;
            if range.contains(&t1) && range.contains(&t2) {
                return SegmentDistance {
                    distance_sq: 0.0,
                    t1: t1.clamp(0.0, 1.0),
                    t2: t2.clamp(0.0, 1.0),
                };
            }
        }
        let candidates = [
            (self.nearest(other.p0), false, 0.0),
            (self.nearest(other.p1), false, 1.0),
            (other.nearest(self.p0), true, 0.0),
            (other.nearest(self.p1), true, 1.0),
        ];
        let mut best = SegmentDistance {
            distance_sq: f64::INFINITY,
            t1: 0.0,
            t2: 0.0,
        };
        for (nearest, on_other, endpoint_t) in candidates {
            if nearest.distance_sq < best.distance_sq {
                let (t1, t2) = if on_other {
                    (endpoint_t, nearest.t)
                } else {
                    (nearest.t, endpoint_t)
                };
                best = SegmentDistance {
                    distance_sq: nearest.distance_sq,
                    t1,
                    t2,
                };
            }
        }
        best
    }

    /// Is this line [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.p0.is_finite() && self.p1.is_finite()
    }

    /// Is this line [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    pub fn is_nan(self) -> bool {
        self.p0.is_nan() || self.p1.is_nan()
    }
}

impl From<(Point, Point)> for Line {
    #[inline(always)]
    fn from((from, to): (Point, Point)) -> Self {
        Line::new(from, to)
    }
}

impl From<(Point, Vec2)> for Line {
    #[inline(always)]
    fn from((origin, displacement): (Point, Vec2)) -> Self {
        Line::new(origin, origin + displacement)
    }
}

impl ParamCurve for Line {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        if t == 1.0 {
            return self.p1;
        }
        self.p0.lerp(self.p1, t)
    }

    #[inline]
    fn subsegment(&self, range: Range<f64>) -> Line {
        split_range(self, range, Line::split)
    }

    #[inline]
    fn subdivide(&self) -> (Line, Line) {
        self.split(0.5)
    }

    #[inline(always)]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline(always)]
    fn end(&self) -> Point {
        self.p1
    }
}

impl ParamCurveDeriv for Line {
    type DerivResult = ConstPoint;

    #[inline]
    fn deriv(&self) -> ConstPoint {
        ConstPoint((self.p1 - self.p0).to_point())
    }
}

impl ParamCurveArclen for Line {
    #[inline]
    fn arclen(&self, _accuracy: f64) -> f64 {
        self.length()
    }

    #[inline]
    fn inv_arclen(&self, arclen: f64, _accuracy: f64) -> f64 {
        let length = self.length();
        if length == 0.0 {
            return 0.0;
        }
        (arclen / length).clamp(0.0, 1.0)
    }
}

impl ParamCurveCurvature for Line {
    #[inline(always)]
    fn curvature(&self, _t: f64) -> f64 {
        0.0
    }
}

impl ParamCurveExtrema for Line {
    #[inline]
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        ArrayVec::new()
    }

    #[inline(always)]
    fn bounding_box(&self) -> Rect {
        Rect::from_points(self.p0, self.p1)
    }
}

/// A trivial "curve" that is just a constant.
///
/// This is the derivative of a [`Line`].
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstPoint(Point);

impl ParamCurve for ConstPoint {
    #[inline(always)]
    fn eval(&self, _t: f64) -> Point {
        self.0
    }

    #[inline(always)]
    fn subsegment(&self, _range: Range<f64>) -> ConstPoint {
        *self
    }
}

impl ParamCurveDeriv for ConstPoint {
    type DerivResult = ConstPoint;

    #[inline(always)]
    fn deriv(&self) -> ConstPoint {
        ConstPoint(Point::new(0.0, 0.0))
    }
}

impl Mul<Line> for Affine {
    type Output = Line;

    #[inline]
    fn mul(self, other: Line) -> Line {
        Line {
            p0: self * other.p0,
            p1: self * other.p1,
        }
    }
}
