// Copyright 2026 the Bezkern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersections between curves by recursive subdivision.
//!
//! Both curves are split in half until each piece is close enough to its
//! chord, and the chords are then intersected. Pairs of pieces whose
//! bounding boxes are disjoint, or whose chords are further apart than the
//! pieces can stray from them, are discarded along the way.

use alloc::vec::Vec;

use crate::{Bezier, IntersectError, Subcurve, EPSILON};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Intersections whose parameters both differ by less than this are merged.
pub const DEDUP_EPSILON: f64 = 1e-7;

/// A point where two curves meet, as a parameter on each.
///
/// For [`self_intersections`], both parameters refer to the same curve and
/// `t1 < t2`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveIntersection {
    /// The parameter on the first curve.
    pub t1: f64,
    /// The parameter on the second curve.
    pub t2: f64,
}

impl CurveIntersection {
    /// The same intersection seen from the other curve.
    #[must_use]
    #[inline]
    pub fn swapped(self) -> CurveIntersection {
        CurveIntersection {
            t1: self.t2,
            t2: self.t1,
        }
    }
}

/// Settings for an intersection query.
///
/// ```
/// use bezkern::IntersectOptions;
///
/// let opts = IntersectOptions::new(0.01).with_max_depth(32);
/// assert_eq!(opts.tolerance(), 0.01);
/// assert_eq!(opts.max_depth(), 32);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectOptions {
    tolerance: f64,
    max_depth: u32,
    max_pairs: usize,
}

impl IntersectOptions {
    /// The default flatness tolerance.
    pub const DEFAULT_TOLERANCE: f64 = 0.5;

    /// The default subdivision ceiling.
    pub const DEFAULT_MAX_DEPTH: u32 = 48;

    /// The default number of region pairs examined per query.
    pub const DEFAULT_MAX_PAIRS: usize = 1 << 16;

    /// Options with the given tolerance and the default limits.
    ///
    /// A piece of curve is treated as its chord once it provably stays
    /// within `tolerance` of it.
    pub fn new(tolerance: f64) -> IntersectOptions {
        IntersectOptions {
            tolerance,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_pairs: Self::DEFAULT_MAX_PAIRS,
        }
    }

    /// Builder method for setting the subdivision ceiling.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> IntersectOptions {
        self.max_depth = max_depth;
        self
    }

    /// Builder method for setting the pair budget.
    #[must_use]
    pub fn with_max_pairs(mut self, max_pairs: usize) -> IntersectOptions {
        self.max_pairs = max_pairs;
        self
    }

    /// The flatness tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// How many times a region may be halved.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// How many region pairs a query may examine.
    pub fn max_pairs(&self) -> usize {
        self.max_pairs
    }

    fn validate(&self) -> Result<(), IntersectError> {
        if self.tolerance.is_finite() && self.tolerance > 0.0 {
            Ok(())
        } else {
            Err(IntersectError::InvalidTolerance(self.tolerance))
        }
    }
}

impl Default for IntersectOptions {
    fn default() -> Self {
        IntersectOptions::new(Self::DEFAULT_TOLERANCE)
    }
}

/// Find where two curves meet.
///
/// Pieces of curve are replaced by their chords once they stay within
/// `tolerance` of them, so the parameters are accurate to roughly
/// `tolerance` divided by the curve speed. The result is sorted by `(t1, t2)`
/// and free of near-duplicates.
///
/// Curves that overlap along a stretch produce many intersections, and
/// may exhaust the search budget; see [`IntersectError`].
///
/// ```
/// use bezkern::{curve_intersections, Bezier, Line};
///
/// let a = Bezier::Line(Line::new((0.0, 0.0), (2.0, 2.0)));
/// let b = Bezier::Line(Line::new((0.0, 2.0), (2.0, 0.0)));
/// let hits = curve_intersections(&a, &b, 0.5).unwrap();
/// assert_eq!(hits.len(), 1);
/// assert_eq!((hits[0].t1, hits[0].t2), (0.5, 0.5));
/// ```
pub fn curve_intersections(
    a: &Bezier,
    b: &Bezier,
    tolerance: f64,
) -> Result<Vec<CurveIntersection>, IntersectError> {
    curve_intersections_with(a, b, &IntersectOptions::new(tolerance))
}

/// Find where two curves meet, with explicit limits.
///
/// The first curve is [reduced](Bezier::reduce) to simple pieces, each of
/// which is searched against the whole of the second.
pub fn curve_intersections_with(
    a: &Bezier,
    b: &Bezier,
    options: &IntersectOptions,
) -> Result<Vec<CurveIntersection>, IntersectError> {
    options.validate()?;
    let mut search = Search::new(options);
    let whole = Subcurve::new(*b);
    let bbox = whole.bounding_box();
    let outcome = a
        .reduce()
        .iter()
        .filter(|piece| piece.bounding_box().overlaps(bbox))
        .try_for_each(|piece| search.visit(piece, &whole, 0));
    search.finish(outcome)
}

/// Find the points where a curve crosses itself.
///
/// The curve is [reduced](Bezier::reduce) to simple pieces, which cannot
/// cross themselves, and every piece is searched against the pieces that
/// do not touch it. A closed curve reports its shared endpoint.
pub fn self_intersections(
    curve: &Bezier,
    tolerance: f64,
) -> Result<Vec<CurveIntersection>, IntersectError> {
    self_intersections_with(curve, &IntersectOptions::new(tolerance))
}

/// Find the points where a curve crosses itself, with explicit limits.
pub fn self_intersections_with(
    curve: &Bezier,
    options: &IntersectOptions,
) -> Result<Vec<CurveIntersection>, IntersectError> {
    options.validate()?;
    let pieces = curve.reduce();
    let boxes: Vec<_> = pieces.iter().map(Subcurve::bounding_box).collect();
    let mut search = Search::new(options);
    let mut outcome = Ok(());
    'outer: for i in 0..pieces.len() {
        for j in i + 2..pieces.len() {
            if boxes[i].overlaps(boxes[j]) {
                outcome = search.visit(&pieces[i], &pieces[j], 0);
                if outcome.is_err() {
                    break 'outer;
                }
            }
        }
    }
    search.finish(outcome)
}

/// Find where two pieces of curve meet.
///
/// Parameters are reported in the frame of the curves the pieces came
/// from, so two disjoint ranges of one curve can be searched directly.
pub fn subcurve_intersections(
    a: &Subcurve,
    b: &Subcurve,
    options: &IntersectOptions,
) -> Result<Vec<CurveIntersection>, IntersectError> {
    options.validate()?;
    let mut search = Search::new(options);
    let outcome = search.visit(a, b, 0);
    search.finish(outcome)
}

/// Why a search stopped early.
enum Stop {
    Depth,
    Budget,
}

/// State shared by the whole of one query.
struct Search<'a> {
    options: &'a IntersectOptions,
    pairs: usize,
    results: Vec<CurveIntersection>,
}

impl<'a> Search<'a> {
    fn new(options: &'a IntersectOptions) -> Self {
        Search {
            options,
            pairs: 0,
            results: Vec::new(),
        }
    }

    fn visit(&mut self, a: &Subcurve, b: &Subcurve, depth: u32) -> Result<(), Stop> {
        self.pairs += 1;
        if self.pairs > self.options.max_pairs {
            return Err(Stop::Budget);
        }
        if !a.bounding_box().overlaps(b.bounding_box()) {
            return Ok(());
        }
        let threshold = self.options.tolerance * self.options.tolerance;
        let (fa, fb) = (a.curve.flatness(), b.curve.flatness());
        let (flat_a, flat_b) = (fa < threshold, fb < threshold);
        let dist = a.chord().segment_distance(b.chord());
        if flat_a && flat_b {
            if dist.distance_sq <= EPSILON * EPSILON {
                self.results.push(CurveIntersection {
                    t1: a.global(dist.t1),
                    t2: b.global(dist.t2),
                });
            }
            return Ok(());
        }
        // Every point of a piece is within sqrt(flatness) of its chord.
        if dist.distance_sq.sqrt() > fa.sqrt() + fb.sqrt() {
            return Ok(());
        }
        if depth >= self.options.max_depth {
            return Err(Stop::Depth);
        }
        if flat_a {
            let (b0, b1) = b.split(0.5);
            self.visit(a, &b0, depth + 1)?;
            self.visit(a, &b1, depth + 1)
        } else if flat_b {
            let (a0, a1) = a.split(0.5);
            self.visit(&a0, b, depth + 1)?;
            self.visit(&a1, b, depth + 1)
        } else {
            let (a0, a1) = a.split(0.5);
            let (b0, b1) = b.split(0.5);
            for (x, y) in [(&a0, &b0), (&a0, &b1), (&a1, &b0), (&a1, &b1)] {
                self.visit(x, y, depth + 1)?;
            }
            Ok(())
        }
    }

    fn finish(self, outcome: Result<(), Stop>) -> Result<Vec<CurveIntersection>, IntersectError> {
        let partial = sort_dedup(self.results);
        match outcome {
            Ok(()) => Ok(partial),
            Err(Stop::Depth) => {
                log::debug!(
                    "intersection search hit depth {} with {} results",
                    self.options.max_depth,
                    partial.len()
                );
                Err(IntersectError::DepthExceeded {
                    max_depth: self.options.max_depth,
                    partial,
                })
            }
            Err(Stop::Budget) => {
                log::debug!(
                    "intersection search used its budget of {} pairs with {} results",
                    self.options.max_pairs,
                    partial.len()
                );
                Err(IntersectError::BudgetExhausted {
                    budget: self.options.max_pairs,
                    partial,
                })
            }
        }
    }
}

/// Sort by `(t1, t2)` and drop hits within [`DEDUP_EPSILON`] of a kept one.
///
/// Near-duplicates need not be adjacent after sorting: another hit with the
/// same `t1` may sort between them. Each candidate is checked against every
/// kept hit whose `t1` is close enough.
fn sort_dedup(mut results: Vec<CurveIntersection>) -> Vec<CurveIntersection> {
    results.sort_by(|a, b| a.t1.total_cmp(&b.t1).then(a.t2.total_cmp(&b.t2)));
    let mut kept: Vec<CurveIntersection> = Vec::with_capacity(results.len());
    for hit in results {
        let duplicate = kept
            .iter()
            .rev()
            .take_while(|k| hit.t1 - k.t1 < DEDUP_EPSILON)
            .any(|k| (hit.t2 - k.t2).abs() < DEDUP_EPSILON);
        if !duplicate {
            kept.push(hit);
        }
    }
    kept
}
