// Copyright 2026 the Bezkern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for curves parametrized by a scalar.

use core::ops::Range;

use arrayvec::ArrayVec;

use crate::common::GAUSS_LEGENDRE_COEFFS_24;
use crate::{Point, Rect};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The absolute tolerance used for all numerical equality tests.
///
/// Root filtering, degenerate coefficient detection and parallel line
/// detection all compare against this value.
pub const EPSILON: f64 = 1e-9;

/// The default accuracy for arc length measurement.
pub const DEFAULT_ACCURACY: f64 = 1e-6;

/// The maximum number of extrema that can be reported in the [`ParamCurveExtrema`] trait.
///
/// This is 4 for a cubic Bézier: two per axis.
pub const MAX_EXTREMA: usize = 4;

/// A curve parametrized by a scalar.
///
/// If the result is interpreted as a point, this represents a curve.
/// But the result can be interpreted as a vector as well.
pub trait ParamCurve: Sized {
    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1].
    fn eval(&self, t: f64) -> Point;

    /// Get a subsegment of the curve for the given parameter range.
    ///
    /// The returned curve is re-parameterized over `[0, 1]`.
    fn subsegment(&self, range: Range<f64>) -> Self;

    /// Subdivide into (roughly) halves.
    #[inline]
    fn subdivide(&self) -> (Self, Self) {
        (self.subsegment(0.0..0.5), self.subsegment(0.5..1.0))
    }

    /// The start point.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Point {
        self.eval(1.0)
    }
}

/// A differentiable parametrized curve.
pub trait ParamCurveDeriv {
    /// The parametric curve obtained by taking the derivative of this one.
    type DerivResult: ParamCurve;

    /// The derivative of the curve.
    ///
    /// Note that the type of the return value is somewhat inaccurate, as
    /// the derivative of a curve (mapping of param to point) is a mapping
    /// of param to vector. We choose to accept this rather than have a
    /// more complex type scheme.
    fn deriv(&self) -> Self::DerivResult;

    /// Estimate arclength using Gaussian quadrature.
    ///
    /// The coefficients are assumed to cover the range (-1..1), which is
    /// traditional.
    #[inline]
    fn gauss_arclen(&self, coeffs: &[(f64, f64)]) -> f64 {
        let d = self.deriv();
        coeffs
            .iter()
            .map(|(wi, xi)| wi * d.eval(0.5 * (xi + 1.0)).to_vec2().hypot())
            .sum::<f64>()
            * 0.5
    }
}

/// A parametrized curve that can have its arc length measured.
pub trait ParamCurveArclen: ParamCurve {
    /// The arc length of the curve.
    ///
    /// The result is accurate to the given accuracy (subject to
    /// roundoff errors for ridiculously low values). Compute time
    /// may vary with accuracy, if the curve needs to be subdivided.
    fn arclen(&self, accuracy: f64) -> f64;

    /// Solve for the parameter that has the given arc length from the start.
    ///
    /// This implementation uses bisection, measuring increasingly short
    /// pieces of the curve. Arc lengths beyond the end of the curve give a
    /// parameter close to 1.
    fn inv_arclen(&self, arclen: f64, accuracy: f64) -> f64 {
        if arclen <= 0.0 {
            return 0.0;
        }
        let n = (-accuracy.log2()).ceil().clamp(1.0, 40.0) as usize;
        let inner_accuracy = accuracy / n as f64;
        // invariant: the arc length on [0..t_last] plus `remaining` is `arclen`
        let mut remaining = arclen;
        let mut t_last = 0.0;
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        for _ in 0..n {
            let tm = 0.5 * (t0 + t1);
            let (range, dir) = if tm > t_last {
                (t_last..tm, 1.0)
            } else {
                (tm..t_last, -1.0)
            };
            remaining -= self.subsegment(range).arclen(inner_accuracy) * dir;
            t_last = tm;
            if remaining.abs() < accuracy {
                break;
            }
            if remaining > 0.0 {
                t0 = tm;
            } else {
                t1 = tm;
            }
        }
        t_last
    }
}

/// Extract the piece of a curve between `range.start` and `range.end`
/// using two single-parameter splits.
///
/// The curve is split at `t1`, and the right half is split again at the
/// rescaled parameter `(t2 - t1) / (1 - t1)`. Splits at the ends are skipped.
///
/// # Panics
///
/// Panics unless `0 <= range.start < range.end <= 1`.
pub(crate) fn split_range<C: Copy>(c: &C, range: Range<f64>, split: impl Fn(&C, f64) -> (C, C)) -> C {
    let (t1, t2) = (range.start, range.end);
    assert!(
        0.0 <= t1 && t1 < t2 && t2 <= 1.0,
        "split range {t1}..{t2} must be non-empty and within [0, 1]"
    );
    let right = if t1 == 0.0 { *c } else { split(c, t1).1 };
    if t2 == 1.0 {
        return right;
    }
    split(&right, (t2 - t1) / (1.0 - t1)).0
}

/// Adaptive arc length by recursive subdivision.
///
/// Each piece is measured with 24-point Gauss-Legendre quadrature and split
/// in half until the two halves agree with the whole to within `accuracy`.
pub(crate) fn adaptive_arclen<C: ParamCurve + ParamCurveDeriv>(c: &C, accuracy: f64) -> f64 {
    const MAX_DEPTH: usize = 16;
    fn rec<C: ParamCurve + ParamCurveDeriv>(
        c: &C,
        estimate: f64,
        accuracy: f64,
        depth: usize,
    ) -> f64 {
        let (c0, c1) = c.subdivide();
        let est0 = c0.gauss_arclen(GAUSS_LEGENDRE_COEFFS_24);
        let est1 = c1.gauss_arclen(GAUSS_LEGENDRE_COEFFS_24);
        let refined = est0 + est1;
        if (estimate - refined).abs() <= accuracy || depth == MAX_DEPTH {
            refined
        } else {
            rec(&c0, est0, accuracy * 0.5, depth + 1) + rec(&c1, est1, accuracy * 0.5, depth + 1)
        }
    }
    rec(c, c.gauss_arclen(GAUSS_LEGENDRE_COEFFS_24), accuracy, 0)
}

/// A parametrized curve that reports its curvature.
pub trait ParamCurveCurvature: ParamCurveDeriv
where
    Self::DerivResult: ParamCurveDeriv,
{
    /// Compute the signed curvature at parameter `t`.
    ///
    /// Positive curvature turns toward positive angles (left of the
    /// direction of travel in a Y-up frame).
    #[inline]
    fn curvature(&self, t: f64) -> f64 {
        let deriv = self.deriv();
        let deriv2 = deriv.deriv();
        let d = deriv.eval(t).to_vec2();
        let d2 = deriv2.eval(t).to_vec2();
        d.cross(d2) * d.hypot2().powf(-1.5)
    }
}

/// A parametrized curve that reports its extrema.
pub trait ParamCurveExtrema: ParamCurve {
    /// Compute the extrema of the curve.
    ///
    /// Only extrema within the interior of the curve count.
    /// At most four extrema can be reported, which is sufficient for
    /// cubic Béziers.
    ///
    /// The extrema should be reported in increasing parameter order.
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA>;

    /// The smallest rectangle that encloses the curve in the range (0..1).
    ///
    /// This is built from the endpoints and the points at each extremum, so
    /// it is tight rather than the hull of the control points.
    fn bounding_box(&self) -> Rect {
        let mut bbox = Rect::from_points(self.start(), self.end());
        for t in self.extrema() {
            bbox = bbox.union_pt(self.eval(t));
        }
        bbox
    }
}
