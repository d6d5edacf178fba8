// Copyright 2026 the Bezkern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A piece of a curve that remembers where it came from.

use core::ops::Range;

use crate::{Bezier, Line, ParamCurve, ParamCurveExtrema, Rect};

/// The portion of some original curve over the parameter range `t1..t2`.
///
/// `curve` is re-parameterized over `[0, 1]`; [`Subcurve::global`] maps
/// its parameters back onto the original.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Subcurve {
    /// Start of the range on the original curve.
    pub t1: f64,
    /// End of the range on the original curve.
    pub t2: f64,
    /// The piece itself.
    pub curve: Bezier,
}

impl Subcurve {
    /// The whole of `curve`, over `0..1`.
    #[inline]
    pub fn new(curve: Bezier) -> Subcurve {
        Subcurve {
            t1: 0.0,
            t2: 1.0,
            curve,
        }
    }

    /// Map a parameter on this piece to the original curve.
    #[inline]
    pub fn global(&self, t: f64) -> f64 {
        t * self.t2 + (1.0 - t) * self.t1
    }

    /// Split at the local parameter `t`.
    pub fn split(&self, t: f64) -> (Subcurve, Subcurve) {
        let (left, right) = self.curve.split(t);
        let mid = self.global(t);
        (
            Subcurve {
                t1: self.t1,
                t2: mid,
                curve: left,
            },
            Subcurve {
                t1: mid,
                t2: self.t2,
                curve: right,
            },
        )
    }

    /// The piece over the local parameter range, with its range on the original.
    ///
    /// # Panics
    ///
    /// Panics unless `0 <= range.start < range.end <= 1`.
    pub fn split_range(&self, range: Range<f64>) -> Subcurve {
        Subcurve {
            t1: self.global(range.start),
            t2: self.global(range.end),
            curve: self.curve.subsegment(range),
        }
    }

    /// The straight line between the ends of the piece.
    #[inline]
    pub fn chord(&self) -> Line {
        Line::new(self.curve.start(), self.curve.end())
    }

    /// The tight bounding box of the piece.
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        self.curve.bounding_box()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Bezier, CubicBez, ParamCurve, Point, Subcurve};

    fn curve() -> Bezier {
        CubicBez::new((0.0, 0.0), (1.0, 3.0), (3.0, -1.0), (4.0, 2.0)).into()
    }

    #[test]
    fn global_remap() {
        let s = Subcurve {
            t1: 0.25,
            t2: 0.75,
            curve: curve(),
        };
        assert_eq!(s.global(0.0), 0.25);
        assert_eq!(s.global(1.0), 0.75);
        assert_eq!(s.global(0.5), 0.5);
    }

    #[test]
    fn nested_splits() {
        let c = curve();
        let whole = Subcurve::new(c);
        let (left, right) = whole.split(0.5);
        assert_eq!((left.t1, left.t2), (0.0, 0.5));
        assert_eq!((right.t1, right.t2), (0.5, 1.0));

        let (rl, rr) = right.split(0.5);
        assert_eq!((rl.t1, rl.t2), (0.5, 0.75));
        assert_eq!((rr.t1, rr.t2), (0.75, 1.0));

        // Each piece traces the original over its global range.
        for piece in [left, rl, rr] {
            for i in 0..=8 {
                let t = i as f64 / 8.0;
                let p: Point = piece.curve.eval(t);
                assert!((p - c.eval(piece.global(t))).hypot() < 1e-12);
            }
        }
    }

    #[test]
    fn split_range_is_global() {
        let c = curve();
        let piece = Subcurve::new(c).split_range(0.2..0.6);
        assert_eq!((piece.t1, piece.t2), (0.2, 0.6));
        let inner = piece.split_range(0.5..1.0);
        assert!((inner.t1 - 0.4).abs() < 1e-15);
        assert_eq!(inner.t2, 0.6);
        assert!((inner.curve.start() - c.eval(0.4)).hypot() < 1e-12);
        assert_eq!(inner.chord().p1, inner.curve.end());
        let bbox = inner.bounding_box().inflate(1e-12, 1e-12);
        assert!(bbox.contains(inner.curve.eval(0.5)));
    }
}
