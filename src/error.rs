// Copyright 2026 the Bezkern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use alloc::vec::Vec;

use thiserror::Error;

use crate::CurveIntersection;

/// Errors from building a [`Bezier`](crate::Bezier) out of raw control points.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CurveError {
    /// Only 2, 3 or 4 control points describe a supported curve.
    #[error("a curve needs 2, 3 or 4 control points, got {points}")]
    UnsupportedOrder {
        /// The number of points supplied.
        points: usize,
    },

    /// A control point has an infinite or NaN coordinate.
    #[error("control point {index} is not finite")]
    NonFinite {
        /// The index of the first offending point.
        index: usize,
    },
}

/// Errors from the curve intersection engine.
///
/// The engine gives up rather than recursing without bound when curves
/// overlap along a stretch or are tangent over a long run. The
/// intersections that were found before the limit was hit are kept.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum IntersectError {
    /// Subdivision went deeper than the configured ceiling.
    #[error("subdivision exceeded depth {max_depth} ({} intersections found)", .partial.len())]
    DepthExceeded {
        /// The configured maximum depth.
        max_depth: u32,
        /// Intersections found before giving up, sorted and de-duplicated.
        partial: Vec<CurveIntersection>,
    },

    /// More candidate pairs were examined than the configured budget allows.
    #[error("examined more than {budget} candidate pairs ({} intersections found)", .partial.len())]
    BudgetExhausted {
        /// The configured pair budget.
        budget: usize,
        /// Intersections found before giving up, sorted and de-duplicated.
        partial: Vec<CurveIntersection>,
    },

    /// The tolerance must be finite and strictly positive.
    #[error("invalid tolerance {0}")]
    InvalidTolerance(f64),
}

impl IntersectError {
    /// The intersections found before the engine gave up.
    ///
    /// This is empty for [`IntersectError::InvalidTolerance`].
    pub fn partial(&self) -> &[CurveIntersection] {
        match self {
            Self::DepthExceeded { partial, .. } | Self::BudgetExhausted { partial, .. } => partial,
            Self::InvalidTolerance(_) => &[],
        }
    }
}
