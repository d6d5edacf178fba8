// Copyright 2026 the Bezkern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bézier curves of order 1 to 3 behind a single type.

use core::f64::consts::FRAC_PI_3;
use core::ops::{Mul, Range};

use alloc::vec::Vec;
use arrayvec::ArrayVec;
use smallvec::SmallVec;

use crate::common::{align, droots, roots};
use crate::intersect::{curve_intersections, self_intersections};
use crate::{
    Affine, Axis, CubicBez, CurveError, CurveIntersection, IntersectError, Line,
    ParamCurve, ParamCurveArclen, ParamCurveCurvature, ParamCurveDeriv, ParamCurveExtrema, Point,
    QuadBez, Subcurve, Vec2, EPSILON, MAX_EXTREMA,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A Bézier curve of order 1 (a line), 2 (quadratic) or 3 (cubic).
///
/// This is the type the intersection engine works with. Each variant is
/// an immutable value; splitting and transforming always produce new
/// curves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bezier {
    /// A line segment.
    Line(Line),
    /// A quadratic Bézier segment.
    Quad(QuadBez),
    /// A cubic Bézier segment.
    Cubic(CubicBez),
}

/// The pieces of a curve that are each [simple](Bezier::is_simple).
///
/// Every piece carries its parameter range on the curve it came from; the
/// ranges are contiguous and cover `[0, 1]` in order.
pub type Reduction = SmallVec<[Subcurve; 8]>;

/// Parameters of the extrema of a curve, per axis and merged.
///
/// Values are in `[0, 1]`, ascending and free of exact duplicates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extrema {
    x: ArrayVec<f64, 3>,
    y: ArrayVec<f64, 3>,
    values: ArrayVec<f64, 6>,
}

impl Extrema {
    /// The parameters where the given coordinate has a critical point.
    pub fn axis(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::Horizontal => &self.x,
            Axis::Vertical => &self.y,
        }
    }

    /// The parameters of both axes, merged.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl Bezier {
    /// Create a curve from its control points.
    ///
    /// Two points give a line, three a quadratic and four a cubic.
    ///
    /// # Panics
    ///
    /// Panics if `points` does not hold two, three or four points. Use
    /// [`Bezier::try_from`] to handle that case as an error.
    pub fn from_points(points: &[Point]) -> Bezier {
        match *points {
            [p0, p1] => Bezier::Line(Line::new(p0, p1)),
            [p0, p1, p2] => Bezier::Quad(QuadBez::new(p0, p1, p2)),
            [p0, p1, p2, p3] => Bezier::Cubic(CubicBez::new(p0, p1, p2, p3)),
            _ => panic!(
                "a curve needs 2, 3 or 4 control points, got {}",
                points.len()
            ),
        }
    }

    /// The control points, in order.
    pub fn points(&self) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        match *self {
            Bezier::Line(l) => result.extend([l.p0, l.p1]),
            Bezier::Quad(q) => result.extend([q.p0, q.p1, q.p2]),
            Bezier::Cubic(c) => result.extend([c.p0, c.p1, c.p2, c.p3]),
        }
        result
    }

    /// The order of the curve, one less than the number of control points.
    #[inline]
    pub fn order(&self) -> usize {
        match self {
            Bezier::Line(_) => 1,
            Bezier::Quad(_) => 2,
            Bezier::Cubic(_) => 3,
        }
    }

    /// The tangent vector at `t`.
    pub fn derivative(&self, t: f64) -> Vec2 {
        self.deriv().eval(t).to_vec2()
    }

    /// The unit normal at `t`, the tangent turned a quarter turn counterclockwise.
    ///
    /// Returns `None` where the derivative vanishes.
    pub fn normal(&self, t: f64) -> Option<Vec2> {
        let d = self.derivative(t);
        let len = d.hypot();
        (len > EPSILON).then(|| (d / len).turn_90())
    }

    /// The de Casteljau construction at `t`.
    ///
    /// The control points come first, followed by each interpolation level
    /// in turn; the last point is on the curve.
    pub fn hull(&self, t: f64) -> ArrayVec<Point, 10> {
        match *self {
            Bezier::Line(l) => l.hull(t).into_iter().collect(),
            Bezier::Quad(q) => q.hull(t).into_iter().collect(),
            Bezier::Cubic(c) => c.hull(t),
        }
    }

    /// Split at `t` into the pieces over `[0, t]` and `[t, 1]`.
    pub fn split(&self, t: f64) -> (Bezier, Bezier) {
        match *self {
            Bezier::Line(l) => {
                let (a, b) = l.split(t);
                (a.into(), b.into())
            }
            Bezier::Quad(q) => {
                let (a, b) = q.split(t);
                (a.into(), b.into())
            }
            Bezier::Cubic(c) => {
                let (a, b) = c.split(t);
                (a.into(), b.into())
            }
        }
    }

    /// An upper bound on the squared distance between the curve and its chord.
    pub fn flatness(&self) -> f64 {
        match self {
            Bezier::Line(_) => 0.0,
            Bezier::Quad(q) => q.flatness(),
            Bezier::Cubic(c) => c.flatness(),
        }
    }

    /// Parameters where the curvature changes sign.
    ///
    /// Only cubics can have inflections.
    pub fn inflections(&self) -> ArrayVec<f64, 2> {
        match self {
            Bezier::Cubic(c) => c.inflections(),
            _ => ArrayVec::new(),
        }
    }

    /// Compute the extrema of each coordinate.
    ///
    /// These are the roots of the first derivative along each axis and,
    /// with `include_inflections`, the roots of the second derivative too.
    /// Unlike [`ParamCurveExtrema::extrema`], roots at the endpoints are kept.
    pub fn extrema_by_axis(&self, include_inflections: bool) -> Extrema {
        let d1 = self.deriv().points();
        let d2 = self.deriv().deriv().points();
        let mut result = Extrema::default();
        for axis in Axis::ALL {
            let coords = |points: &[Point]| -> ArrayVec<f64, 3> {
                points.iter().map(|p| axis.coord(*p)).collect()
            };
            let mut values: ArrayVec<f64, 3> = ArrayVec::new();
            values.extend(droots(&coords(&d1)));
            if include_inflections {
                // At most one root: the second derivative is linear.
                for t in droots(&coords(&d2)) {
                    values.push(t);
                }
            }
            sort_dedup(&mut values);
            result.values.extend(values.iter().copied());
            match axis {
                Axis::Horizontal => result.x = values,
                Axis::Vertical => result.y = values,
            }
        }
        sort_dedup(&mut result.values);
        result
    }

    /// Whether every control point lies on the chord.
    ///
    /// The allowed deviation is [`EPSILON`] scaled by the chord length,
    /// with a floor of one unit.
    pub fn is_linear(&self) -> bool {
        let chord = Line::new(self.start(), self.end());
        let limit = EPSILON * chord.length().max(1.0);
        align(&self.points(), chord)
            .iter()
            .all(|p| p.y.abs() <= limit)
    }

    /// Whether the curve is free of sharp turns.
    ///
    /// A cubic is simple only if both inner control points are on the same
    /// side of its chord. For every order, the tangents at the two ends
    /// must differ by less than π/3. A curve collapsed to a point counts as
    /// simple.
    pub fn is_simple(&self) -> bool {
        if let Bezier::Cubic(c) = self {
            let chord = c.p3 - c.p0;
            let s1 = chord.cross(c.p1 - c.p0);
            let s2 = chord.cross(c.p2 - c.p0);
            if s1 * s2 < 0.0 {
                return false;
            }
        }
        let Some((start, end)) = self.end_tangents() else {
            return true;
        };
        let cos = start.normalize().dot(end.normalize()).clamp(-1.0, 1.0);
        cos.acos().abs() < FRAC_PI_3
    }

    /// Tangent directions at the two ends, taken from the control polygon.
    ///
    /// Coincident control points at an end are skipped over.
    fn end_tangents(&self) -> Option<(Vec2, Vec2)> {
        let points = self.points();
        let first = points[0];
        let last = points[points.len() - 1];
        let start = points[1..]
            .iter()
            .map(|p| *p - first)
            .find(|d| d.hypot() > EPSILON)?;
        let end = points[..points.len() - 1]
            .iter()
            .rev()
            .map(|p| last - *p)
            .find(|d| d.hypot() > EPSILON)?;
        Some((start, end))
    }

    /// Break the curve into [simple](Bezier::is_simple) pieces.
    ///
    /// The curve is first split at its extrema and inflections. Each of
    /// those pieces that is not already simple is walked in steps of 0.01
    /// of its parameter range, keeping the longest simple prefix at every
    /// stage.
    pub fn reduce(&self) -> Reduction {
        let whole = Subcurve::new(*self);
        let extrema = self.extrema_by_axis(true);
        let mut splits: ArrayVec<f64, 8> = ArrayVec::new();
        splits.push(0.0);
        splits.extend(extrema.values().iter().copied().filter(|t| *t > 0.0 && *t < 1.0));
        splits.push(1.0);

        let mut result = Reduction::new();
        for w in splits.windows(2) {
            reduce_piece(whole.split_range(w[0]..w[1]), &mut result);
        }
        result
    }

    /// Curve parameters where the curve meets a line segment.
    ///
    /// Hits are kept only if they lie within the segment's bounding box,
    /// inflated by [`EPSILON`]. The result is in ascending order.
    pub fn intersect_line(&self, line: &Line) -> ArrayVec<f64, 3> {
        if let Bezier::Line(own) = self {
            let mut result = ArrayVec::new();
            if let Some((t1, t2)) = own.crossing_params(*line) {
                let range = -EPSILON..=1.0 + EPSILON;
                if range.contains(&t1) && range.contains(&t2) {
                    result.push(t1.clamp(0.0, 1.0));
                }
            }
            return result;
        }
        let bbox = line.bounding_box().inflate(EPSILON, EPSILON);
        let mut result = roots(&self.points(), *line);
        result.retain(|t| bbox.contains(self.eval(*t)));
        result
    }

    /// All intersections with another curve.
    ///
    /// See [`curve_intersections`] for the meaning of `tolerance`.
    pub fn intersect(
        &self,
        other: &Bezier,
        tolerance: f64,
    ) -> Result<Vec<CurveIntersection>, IntersectError> {
        curve_intersections(self, other, tolerance)
    }

    /// All points where the curve crosses itself.
    ///
    /// See [`self_intersections`] for the meaning of `tolerance`.
    pub fn self_intersect(&self, tolerance: f64) -> Result<Vec<CurveIntersection>, IntersectError> {
        self_intersections(self, tolerance)
    }

    /// Returns a curve with the same shape traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Bezier {
        match self {
            Bezier::Line(l) => Bezier::Line(l.reversed()),
            Bezier::Quad(q) => Bezier::Quad(q.reversed()),
            Bezier::Cubic(c) => Bezier::Cubic(c.reversed()),
        }
    }

    /// Convert to a cubic with the same shape and parameterization.
    pub fn to_cubic(&self) -> CubicBez {
        match *self {
            Bezier::Line(Line { p0, p1 }) => {
                CubicBez::new(p0, p0.lerp(p1, 1.0 / 3.0), p0.lerp(p1, 2.0 / 3.0), p1)
            }
            Bezier::Quad(q) => q.raise(),
            Bezier::Cubic(c) => c,
        }
    }

    /// Is this curve [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        match self {
            Bezier::Line(l) => l.is_finite(),
            Bezier::Quad(q) => q.is_finite(),
            Bezier::Cubic(c) => c.is_finite(),
        }
    }
}

fn sort_dedup<const N: usize>(values: &mut ArrayVec<f64, N>) {
    values.sort_by(f64::total_cmp);
    let mut last = None;
    values.retain(|t| {
        let keep = last != Some(*t);
        last = Some(*t);
        keep
    });
}

/// Append the simple pieces of `piece` to `out`.
fn reduce_piece(piece: Subcurve, out: &mut Reduction) {
    const STEP: f64 = 0.01;
    if piece.curve.is_simple() {
        out.push(piece);
        return;
    }
    let mut start = 0.0;
    while start < 1.0 {
        let mut end = None;
        for k in 1_u32.. {
            let mut t = start + f64::from(k) * STEP;
            if t > 1.0 - 0.5 * STEP {
                t = 1.0;
            }
            if !piece.split_range(start..t).curve.is_simple() {
                break;
            }
            end = Some(t);
            if t == 1.0 {
                break;
            }
        }
        let end = end.unwrap_or_else(|| {
            let t = start + STEP;
            log::trace!(
                "no simple piece starting at {}, forcing a step",
                piece.global(start)
            );
            if t > 1.0 - 0.5 * STEP {
                1.0
            } else {
                t
            }
        });
        out.push(piece.split_range(start..end));
        start = end;
    }
}

impl TryFrom<&[Point]> for Bezier {
    type Error = CurveError;

    fn try_from(points: &[Point]) -> Result<Bezier, CurveError> {
        if !(2..=4).contains(&points.len()) {
            return Err(CurveError::UnsupportedOrder {
                points: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(CurveError::NonFinite { index });
        }
        Ok(Bezier::from_points(points))
    }
}

impl From<Line> for Bezier {
    fn from(line: Line) -> Bezier {
        Bezier::Line(line)
    }
}

impl From<QuadBez> for Bezier {
    fn from(quad: QuadBez) -> Bezier {
        Bezier::Quad(quad)
    }
}

impl From<CubicBez> for Bezier {
    fn from(cubic: CubicBez) -> Bezier {
        Bezier::Cubic(cubic)
    }
}

impl ParamCurve for Bezier {
    fn eval(&self, t: f64) -> Point {
        match *self {
            Bezier::Line(line) => line.eval(t),
            Bezier::Quad(quad) => quad.eval(t),
            Bezier::Cubic(cubic) => cubic.eval(t),
        }
    }

    /// # Panics
    ///
    /// Panics unless `0 <= range.start < range.end <= 1`.
    fn subsegment(&self, range: Range<f64>) -> Bezier {
        match *self {
            Bezier::Line(line) => Bezier::Line(line.subsegment(range)),
            Bezier::Quad(quad) => Bezier::Quad(quad.subsegment(range)),
            Bezier::Cubic(cubic) => Bezier::Cubic(cubic.subsegment(range)),
        }
    }

    fn subdivide(&self) -> (Bezier, Bezier) {
        self.split(0.5)
    }

    fn start(&self) -> Point {
        match *self {
            Bezier::Line(line) => line.p0,
            Bezier::Quad(quad) => quad.p0,
            Bezier::Cubic(cubic) => cubic.p0,
        }
    }

    fn end(&self) -> Point {
        match *self {
            Bezier::Line(line) => line.p1,
            Bezier::Quad(quad) => quad.p2,
            Bezier::Cubic(cubic) => cubic.p3,
        }
    }
}

impl ParamCurveDeriv for Bezier {
    type DerivResult = Bezier;

    /// The derivative, one order lower.
    ///
    /// The derivative of a line is constant; it is represented by a
    /// degenerate line so that it stays a `Bezier`.
    fn deriv(&self) -> Bezier {
        match *self {
            Bezier::Line(line) => {
                let d = (line.p1 - line.p0).to_point();
                Bezier::Line(Line::new(d, d))
            }
            Bezier::Quad(quad) => Bezier::Line(quad.deriv()),
            Bezier::Cubic(cubic) => Bezier::Quad(cubic.deriv()),
        }
    }
}

impl ParamCurveArclen for Bezier {
    fn arclen(&self, accuracy: f64) -> f64 {
        match *self {
            Bezier::Line(line) => line.arclen(accuracy),
            Bezier::Quad(quad) => quad.arclen(accuracy),
            Bezier::Cubic(cubic) => cubic.arclen(accuracy),
        }
    }
}

impl ParamCurveCurvature for Bezier {}

impl ParamCurveExtrema for Bezier {
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        match *self {
            Bezier::Line(line) => line.extrema(),
            Bezier::Quad(quad) => quad.extrema(),
            Bezier::Cubic(cubic) => cubic.extrema(),
        }
    }
}

impl Mul<Bezier> for Affine {
    type Output = Bezier;

    fn mul(self, other: Bezier) -> Bezier {
        match other {
            Bezier::Line(line) => Bezier::Line(self * line),
            Bezier::Quad(quad) => Bezier::Quad(self * quad),
            Bezier::Cubic(cubic) => Bezier::Cubic(self * cubic),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::FRAC_1_SQRT_2;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn assert_near(p0: Point, p1: Point, epsilon: f64) {
        assert!((p1 - p0).hypot() < epsilon, "{p0:?} != {p1:?}");
    }

    fn arch() -> Bezier {
        Bezier::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ])
    }

    #[test]
    fn construction() {
        let pts = [Point::new(0.0, 0.0), Point::new(1.0, 2.0), Point::new(3.0, 0.0)];
        let q = Bezier::from_points(&pts);
        assert_eq!(q.order(), 2);
        assert_eq!(q.points().as_slice(), &pts);
        assert_eq!(Bezier::try_from(&pts[..]), Ok(q));
        assert_eq!(Bezier::from_points(&pts[..2]).order(), 1);
        assert_eq!(arch().order(), 3);

        assert_eq!(
            Bezier::try_from(&pts[..1]),
            Err(CurveError::UnsupportedOrder { points: 1 })
        );
        assert_eq!(
            Bezier::try_from(&[Point::ZERO; 5][..]),
            Err(CurveError::UnsupportedOrder { points: 5 })
        );
        let bad = [Point::ZERO, Point::new(f64::NAN, 0.0)];
        assert_eq!(
            Bezier::try_from(&bad[..]),
            Err(CurveError::NonFinite { index: 1 })
        );
    }

    #[test]
    #[should_panic(expected = "control points")]
    fn construction_unsupported() {
        let _ = Bezier::from_points(&[Point::ZERO]);
    }

    #[test]
    fn eval_endpoints() {
        let c = arch();
        assert_eq!(c.eval(0.0), Point::new(0.0, 0.0));
        assert_eq!(c.eval(1.0), Point::new(1.0, 0.0));
        assert_near(c.eval(0.5), Point::new(0.5, 0.75), 1e-12);
    }

    #[test]
    fn derivative_and_normal() {
        let c = arch();
        let d = c.derivative(0.0);
        assert_near(d.to_point(), Point::new(0.0, 3.0), 1e-12);
        // Heading up, the left-hand normal points toward -x.
        let n = c.normal(0.0).unwrap();
        assert_near(n.to_point(), Point::new(-1.0, 0.0), 1e-12);

        let l = Bezier::from_points(&[Point::new(0.0, 0.0), Point::new(2.0, 2.0)]);
        assert_near(l.derivative(0.7).to_point(), Point::new(2.0, 2.0), 1e-12);
        let n = l.normal(0.3).unwrap();
        assert_near(n.to_point(), Point::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2), 1e-12);

        let dot = Bezier::from_points(&[Point::new(1.0, 1.0), Point::new(1.0, 1.0)]);
        assert_eq!(dot.normal(0.5), None);
    }

    #[test]
    fn hull_and_split() {
        let c = arch();
        let hull = c.hull(0.5);
        assert_eq!(hull.len(), 10);
        assert_near(hull[9], c.eval(0.5), 1e-12);

        let (left, right) = c.split(0.3);
        assert_eq!(left.start(), c.start());
        assert_eq!(left.end(), right.start());
        assert_eq!(right.end(), c.end());
        for i in 0..=10 {
            let s = i as f64 / 10.0;
            assert_near(left.eval(s), c.eval(0.3 * s), 1e-12);
            assert_near(right.eval(s), c.eval(0.3 + 0.7 * s), 1e-12);
        }

        let q = Bezier::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 0.0),
        ]);
        assert_eq!(q.hull(0.25).len(), 6);
        let line = Bezier::from_points(&[Point::new(0.0, 0.0), Point::new(4.0, 0.0)]);
        assert_eq!(line.hull(0.25).len(), 3);
        assert_eq!(line.split(0.25).0.end(), Point::new(1.0, 0.0));
    }

    #[test]
    fn split_reassembles() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let pts: Vec<Point> = (0..4)
                .map(|_| Point::new(rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0)))
                .collect();
            let c = Bezier::from_points(&pts);
            let t1 = rng.random_range(0.05..0.45);
            let t2 = rng.random_range(0.55..0.95);
            let middle = c.subsegment(t1..t2);
            for i in 0..=8 {
                let s = i as f64 / 8.0;
                assert_near(middle.eval(s), c.eval(t1 + s * (t2 - t1)), 1e-9);
            }
        }
    }

    #[test]
    #[should_panic(expected = "must be non-empty")]
    fn split_range_empty() {
        let _ = arch().subsegment(0.5..0.5);
    }

    #[test]
    fn extrema_per_axis() {
        let c = arch();
        let e = c.extrema_by_axis(false);
        // x has critical points at both ends, y at the apex.
        assert_eq!(e.axis(Axis::Horizontal), &[0.0, 1.0]);
        assert_eq!(e.axis(Axis::Vertical), &[0.5]);
        assert_eq!(e.values(), &[0.0, 0.5, 1.0]);

        // The second derivative of x vanishes at the apex as well.
        let e = c.extrema_by_axis(true);
        assert_eq!(e.axis(Axis::Horizontal), &[0.0, 0.5, 1.0]);
        assert_eq!(e.values(), &[0.0, 0.5, 1.0]);

        let line = Bezier::from_points(&[Point::new(0.0, 0.0), Point::new(4.0, 1.0)]);
        assert!(line.extrema_by_axis(true).values().is_empty());
    }

    #[test]
    fn bounding_box_contains_samples() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 2..=4 {
            for _ in 0..10 {
                let pts: Vec<Point> = (0..n)
                    .map(|_| {
                        Point::new(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0))
                    })
                    .collect();
                let c = Bezier::from_points(&pts);
                let bbox = c.bounding_box().inflate(1e-9, 1e-9);
                for _ in 0..200 {
                    let t: f64 = rng.random();
                    assert!(bbox.contains(c.eval(t)), "{:?} escapes {:?}", c.eval(t), bbox);
                }
            }
        }
    }

    #[test]
    fn bounding_box_tight() {
        let bbox = arch().bounding_box();
        assert!((bbox.y1 - 0.75).abs() < 1e-12);
        assert_eq!((bbox.x0, bbox.x1, bbox.y0), (0.0, 1.0, 0.0));
    }

    #[test]
    fn flatness_and_linear() {
        let straight = Bezier::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        ]);
        assert_eq!(straight.flatness(), 0.0);
        assert!(straight.is_linear());
        assert!(!arch().is_linear());
        assert!(arch().flatness() > 0.0);

        let tilted = Affine::rotate(0.7) * straight;
        assert!(tilted.is_linear());
        assert!(Bezier::from(Line::new((0.0, 0.0), (5.0, 5.0))).is_linear());
    }

    #[test]
    fn simple() {
        let line = Bezier::from_points(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert!(line.is_simple());
        // The end tangents of the arch are a half turn apart.
        assert!(!arch().is_simple());
        let gentle = Bezier::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.2),
            Point::new(2.0, 0.2),
            Point::new(3.0, 0.0),
        ]);
        assert!(gentle.is_simple());
        // Inner points on opposite sides of the chord.
        let s_curve = Bezier::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.1),
            Point::new(2.0, -0.1),
            Point::new(3.0, 0.0),
        ]);
        assert!(!s_curve.is_simple());
        let dot = Bezier::from_points(&[Point::new(2.0, 2.0); 3]);
        assert!(dot.is_simple());
    }

    #[test]
    fn reduce_covers_curve() {
        let c = Bezier::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(-1.0, 1.0),
            Point::new(1.0, 0.0),
        ]);
        let pieces = c.reduce();
        assert!(pieces.len() > 1);
        assert_eq!(pieces[0].t1, 0.0);
        assert_eq!(pieces[pieces.len() - 1].t2, 1.0);
        for w in pieces.windows(2) {
            assert_eq!(w[0].t2, w[1].t1);
        }
        for piece in &pieces {
            assert!(piece.t1 < piece.t2);
            assert_near(piece.curve.start(), c.eval(piece.t1), 1e-9);
            assert_near(piece.curve.end(), c.eval(piece.t2), 1e-9);
        }
    }

    #[test]
    fn reduce_simple_is_whole() {
        let line = Bezier::from_points(&[Point::new(0.0, 0.0), Point::new(3.0, 1.0)]);
        let pieces = line.reduce();
        assert_eq!(pieces.len(), 1);
        assert_eq!((pieces[0].t1, pieces[0].t2), (0.0, 1.0));
        assert_eq!(pieces[0].curve, line);
    }

    #[test]
    fn intersect_line_cubic() {
        let c = arch();
        let line = Line::new((-1.0, 0.5), (2.0, 0.5));
        let ts = c.intersect_line(&line);
        assert_eq!(ts.len(), 2);
        for t in &ts {
            assert!((c.eval(*t).y - 0.5).abs() < 1e-9);
        }
        assert!(ts[0] < ts[1]);
        assert!((ts[0] + ts[1] - 1.0).abs() < 1e-9);

        // Hits on the infinite line but outside the segment are dropped.
        let short = Line::new((-1.0, 0.5), (0.5, 0.5));
        assert_eq!(c.intersect_line(&short).len(), 1);
    }

    #[test]
    fn intersect_line_line() {
        let a = Bezier::from_points(&[Point::new(0.0, 0.0), Point::new(2.0, 2.0)]);
        let ts = a.intersect_line(&Line::new((0.0, 2.0), (2.0, 0.0)));
        assert_eq!(ts.as_slice(), &[0.5]);
        assert!(a.intersect_line(&Line::new((0.0, 1.0), (2.0, 3.0))).is_empty());
        assert!(a.intersect_line(&Line::new((3.0, 0.0), (4.0, -1.0))).is_empty());
    }

    #[test]
    fn curvature_and_arclen() {
        let line = Bezier::from_points(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
        assert_eq!(line.curvature(0.5), 0.0);
        assert!((line.arclen(1e-9) - 5.0).abs() < 1e-9);

        let q = Bezier::from_points(&[
            Point::new(-1.0, 1.0),
            Point::new(0.0, -1.0),
            Point::new(1.0, 1.0),
        ]);
        assert!((q.curvature(0.5) - 2.0).abs() < 1e-12);
        let c = Bezier::Cubic(q.to_cubic());
        assert!((c.curvature(0.5) - 2.0).abs() < 1e-9);
        assert!((c.arclen(1e-9) - q.arclen(1e-9)).abs() < 1e-8);
    }

    #[test]
    fn reversed_and_to_cubic() {
        let c = arch();
        let r = c.reversed();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_near(r.eval(t), c.eval(1.0 - t), 1e-12);
        }
        let line = Bezier::from_points(&[Point::new(0.0, 0.0), Point::new(3.0, 3.0)]);
        let cubic = line.to_cubic();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_near(cubic.eval(t), line.eval(t), 1e-12);
        }
    }

    #[test]
    fn inflections() {
        let s_curve = Bezier::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, -1.0),
            Point::new(3.0, 0.0),
        ]);
        let ts = s_curve.inflections();
        assert_eq!(ts.len(), 1);
        assert!((ts[0] - 0.5).abs() < 1e-9);
        assert!(arch().inflections().is_empty());
        assert!(Bezier::from_points(&[Point::ZERO, Point::new(1.0, 1.0)])
            .inflections()
            .is_empty());
    }

    #[test]
    fn transform() {
        let c = arch();
        let a = Affine::rotate(0.4).then_translate((3.0, -1.0).into());
        let moved = a * c;
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_near(moved.eval(t), a * c.eval(t), 1e-12);
        }
    }
}
