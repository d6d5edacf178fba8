// Copyright 2026 the Bezkern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle.

use core::fmt;

use crate::{Axis, Point};

/// An axis-aligned rectangle, used as a curve bounding box.
///
/// Bounding boxes of curves may be degenerate: a horizontal line has zero
/// height. All containment and overlap tests are inclusive so that such
/// boxes still behave.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The minimum x coordinate.
    pub x0: f64,
    /// The minimum y coordinate.
    pub y0: f64,
    /// The maximum x coordinate.
    pub x1: f64,
    /// The maximum y coordinate.
    pub y1: f64,
}

impl Rect {
    /// A new rectangle from minimum and maximum coordinates.
    #[inline(always)]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect { x0, y0, x1, y1 }
    }

    /// A new rectangle from two points.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> Rect {
        let p0 = p0.into();
        let p1 = p1.into();
        Rect::new(p0.x, p0.y, p1.x, p1.y).abs()
    }

    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// The center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(0.5 * (self.x0 + self.x1), 0.5 * (self.y0 + self.y1))
    }

    /// The extent of the rectangle along `axis`, as `(min, max)`.
    #[inline]
    pub fn span(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::Horizontal => (self.x0, self.x1),
            Axis::Vertical => (self.y0, self.y1),
        }
    }

    /// Take absolute value of width and height.
    ///
    /// The resulting rect has the same extents as the original, but is
    /// guaranteed to have non-negative width and height.
    #[inline]
    #[must_use]
    pub fn abs(&self) -> Rect {
        let Rect { x0, y0, x1, y1 } = *self;
        Rect::new(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
    }

    /// The smallest rectangle enclosing two rectangles.
    ///
    /// Results are valid only if width and height are non-negative.
    #[inline]
    #[must_use]
    pub fn union(&self, other: Rect) -> Rect {
        Rect::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }

    /// Compute the union with one point.
    ///
    /// This method includes the perimeter of zero-area rectangles.
    /// Thus, a succession of `union_pt` operations on a series of
    /// points yields their enclosing rectangle.
    ///
    /// Results are valid only if width and height are non-negative.
    #[must_use]
    pub fn union_pt(&self, pt: Point) -> Rect {
        Rect::new(
            self.x0.min(pt.x),
            self.y0.min(pt.y),
            self.x1.max(pt.x),
            self.y1.max(pt.y),
        )
    }

    /// Whether the two rectangles share at least one point.
    ///
    /// The test is inclusive on every edge, so rectangles that merely touch
    /// overlap, as do zero-size rectangles lying on another's boundary.
    #[inline]
    pub fn overlaps(&self, other: Rect) -> bool {
        self.x0 <= other.x1 && other.x0 <= self.x1 && self.y0 <= other.y1 && other.y0 <= self.y1
    }

    /// Whether `point` lies inside the rectangle or on its boundary.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x0 && point.x <= self.x1 && point.y >= self.y0 && point.y <= self.y1
    }

    /// Expand a rectangle by a constant amount in both directions.
    ///
    /// The logic simply applies the amount in each direction. If rectangle
    /// area or added dimensions are negative, this could give odd results.
    #[must_use]
    pub fn inflate(&self, width: f64, height: f64) -> Rect {
        Rect::new(
            self.x0 - width,
            self.y0 - height,
            self.x1 + width,
            self.y1 + height,
        )
    }

    /// Is this rectangle [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.x1.is_finite() && self.y0.is_finite() && self.y1.is_finite()
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(
                f,
                "Rect {{ x: {:?}..{:?}, y: {:?}..{:?} }}",
                self.x0, self.x1, self.y0, self.y1
            )
        } else {
            write!(
                f,
                "Rect {{ x0: {:?}, y0: {:?}, x1: {:?}, y1: {:?} }}",
                self.x0, self.y0, self.x1, self.y1
            )
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect {{ ")?;
        fmt::Display::fmt(&self.x0, f)?;
        write!(f, "..")?;
        fmt::Display::fmt(&self.x1, f)?;
        write!(f, ", ")?;
        fmt::Display::fmt(&self.y0, f)?;
        write!(f, "..")?;
        fmt::Display::fmt(&self.y1, f)?;
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use crate::{Axis, Point, Rect};

    #[test]
    fn from_points_normalizes() {
        let r = Rect::from_points((10.0, 2.0), (-1.0, 5.0));
        assert_eq!(r, Rect::new(-1.0, 2.0, 10.0, 5.0));
        assert_eq!(r.width(), 11.0);
        assert_eq!(r.height(), 3.0);
        assert_eq!(r.center(), Point::new(4.5, 3.5));
        assert_eq!(r.span(Axis::Vertical), (2.0, 5.0));
    }

    #[test]
    fn union_pt_encloses() {
        let mut r = Rect::from_points((0.0, 0.0), (0.0, 0.0));
        for p in [(1.0, -2.0), (-3.0, 4.0), (0.5, 0.5)] {
            r = r.union_pt(p.into());
        }
        assert_eq!(r, Rect::new(-3.0, -2.0, 1.0, 4.0));
        assert_eq!(
            r.union(Rect::new(0.0, 0.0, 5.0, 1.0)),
            Rect::new(-3.0, -2.0, 5.0, 4.0)
        );
    }

    #[test]
    fn overlaps_inclusive() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(a.overlaps(Rect::new(0.5, 0.5, 2.0, 2.0)));
        // Touching edges count.
        assert!(a.overlaps(Rect::new(1.0, 0.0, 2.0, 1.0)));
        // Degenerate boxes: a horizontal and a vertical segment crossing.
        let h = Rect::new(0.0, 0.5, 3.0, 0.5);
        let v = Rect::new(1.0, -1.0, 1.0, 1.0);
        assert!(h.overlaps(v));
        assert!(!a.overlaps(Rect::new(1.5, 0.0, 2.0, 1.0)));
        assert!(!a.overlaps(Rect::new(0.0, -2.0, 1.0, -0.001)));
    }

    #[test]
    fn contains_and_inflate() {
        let r = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(r.contains(Point::new(1.0, 0.0)));
        assert!(!r.contains(Point::new(1.1, 0.0)));
        assert!(r.inflate(0.2, 0.2).contains(Point::new(1.1, 0.0)));
        assert!(r.is_finite());
        assert!(!Rect::new(0.0, 0.0, f64::INFINITY, 1.0).is_finite());
    }

    #[test]
    fn display() {
        let r = Rect::from_points((10., 12.23214), (23.1, 2.0));
        assert_eq!(format!("{r}"), "Rect { 10..23.1, 2..12.23214 }");
        assert_eq!(format!("{r:#?}"), "Rect { x: 10.0..23.1, y: 2.0..12.23214 }");
    }
}
