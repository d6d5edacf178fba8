// Copyright 2026 the Bezkern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Point, Vec2};

/// A coordinate axis in the plane.
///
/// Curve extrema are reported per axis.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// Both axes, x first.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Get the axis perpendicular to this one.
    #[inline]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// The coordinate of `p` along this axis.
    #[inline]
    pub const fn coord(self, p: Point) -> f64 {
        match self {
            Self::Horizontal => p.x,
            Self::Vertical => p.y,
        }
    }

    /// The component of `v` along this axis.
    #[inline]
    pub const fn component(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// Create a new [`Point`] by arranging the given magnitudes.
    ///
    /// The axis value is the one matching the axis (e.g. `y` for [`Self::Vertical`]).
    /// The cross value is the other one.
    #[inline]
    pub const fn pack_point(self, axis_value: f64, cross_value: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(axis_value, cross_value),
            Self::Vertical => Point::new(cross_value, axis_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_roundtrip() {
        for axis in Axis::ALL {
            let p = axis.pack_point(3.0, -1.0);
            assert_eq!(axis.coord(p), 3.0);
            assert_eq!(axis.cross().coord(p), -1.0);
            assert_eq!(axis.component(p.to_vec2()), 3.0);
        }
    }
}
