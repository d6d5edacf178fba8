// Copyright 2026 the Bezkern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A kernel for Bézier curves of order 1 to 3.
//!
//! The bezkern library evaluates, splits and bounds lines, quadratic and
//! cubic Bézier curves, and finds every point where two curves meet (or
//! where one curve crosses itself) to a chosen tolerance.
//!
//! # Examples
//!
//! Where does a cubic cross a line?
//! ```
//! use bezkern::{curve_intersections, Bezier, CubicBez, Line, ParamCurve};
//!
//! let arch = Bezier::Cubic(CubicBez::new((0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)));
//! let across = Bezier::Line(Line::new((-1.0, 0.5), (2.0, 0.5)));
//! let hits = curve_intersections(&arch, &across, 1e-3).unwrap();
//! assert_eq!(hits.len(), 2);
//! for hit in hits {
//!     let p = arch.eval(hit.t1);
//!     assert!((p.y - 0.5).abs() < 1e-3);
//! }
//! ```
//!
//! Bounds and extrema:
//! ```
//! use bezkern::{Axis, Bezier, ParamCurveExtrema, Point};
//!
//! let pts = [Point::new(0.0, 0.0), Point::new(1.0, 2.0), Point::new(2.0, 0.0)];
//! let quad = Bezier::try_from(&pts[..]).unwrap();
//! assert_eq!(quad.extrema_by_axis(false).axis(Axis::Vertical), &[0.5]);
//! assert_eq!(quad.bounding_box().y1, 1.0);
//! ```
//!
//! # Feature Flags
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//!   However, note that the `libm` crate is not as efficient as the standard library.
//! - `mint`: Enable `From`/`Into` conversion of bezkern and [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the curve and point types.
//! - `schemars`: Add best-effort support for using bezkern types in JSON schemas using [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! Note that bezkern does require that an allocator is available (i.e. it uses [alloc]).
//!
//! Diagnostics, such as an intersection search giving up, are reported
//! through the [log][] facade.

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
#![allow(
    missing_debug_implementations,
    elided_lifetimes_in_paths,
    single_use_lifetimes,
    trivial_numeric_casts,
    unnameable_types,
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::cast_possible_truncation,
    clippy::wildcard_imports,
    clippy::shadow_unrelated,
    clippy::missing_assert_message,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::exhaustive_enums,
    clippy::match_same_arms,
    clippy::unseparated_literal_suffix,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("bezkern requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

// Only the benchmarks use criterion.
#[cfg(test)]
use criterion as _;

extern crate alloc;

mod affine;
mod axis;
mod bezier;
pub mod common;
mod cubicbez;
mod error;
mod intersect;
mod line;
mod param_curve;
mod point;
mod quadbez;
mod rect;
mod subcurve;
mod vec2;

pub use crate::affine::Affine;
pub use crate::axis::Axis;
pub use crate::bezier::{Bezier, Extrema, Reduction};
pub use crate::cubicbez::CubicBez;
pub use crate::error::{CurveError, IntersectError};
pub use crate::intersect::{
    curve_intersections, curve_intersections_with, self_intersections, self_intersections_with,
    subcurve_intersections, CurveIntersection, IntersectOptions, DEDUP_EPSILON,
};
pub use crate::line::{ConstPoint, Line, Nearest, SegmentDistance};
pub use crate::param_curve::{
    ParamCurve, ParamCurveArclen, ParamCurveCurvature, ParamCurveDeriv, ParamCurveExtrema,
    DEFAULT_ACCURACY, EPSILON, MAX_EXTREMA,
};
pub use crate::point::Point;
pub use crate::quadbez::QuadBez;
pub use crate::rect::Rect;
pub use crate::subcurve::Subcurve;
pub use crate::vec2::Vec2;
