// Copyright 2026 the Bezkern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

use arrayvec::ArrayVec;
use smallvec::SmallVec;

use crate::{Affine, Line, Point, EPSILON};

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("bezkern requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn acos(self) -> Self => acos;
    fn atan2(self, other: Self) -> Self => atan2;
    fn cbrt(self) -> Self => cbrt;
    fn ceil(self) -> Self => ceil;
    fn cos(self) -> Self => cos;
    fn hypot(self, other: Self) -> Self => hypot;
    fn log2(self) -> Self => log2;
    fn powf(self, n: Self) -> Self => pow;
    fn powi(self, n: i32) -> Self => pow;
    fn sin_cos(self) -> (Self, Self) => sincos;
    fn sqrt(self) -> Self => sqrt;
}

/// The real cube root of `v`, preserving its sign.
///
/// `crt(-8.0)` is `-2.0`, where `powf(1.0 / 3.0)` would produce NaN.
#[inline]
pub fn crt(v: f64) -> f64 {
    v.cbrt()
}

/// Map a root candidate onto the unit interval.
///
/// Values within [`EPSILON`] of `[0, 1]` are clamped into it, so that roots
/// sitting exactly on an endpoint survive rounding. Everything else,
/// including NaN, is rejected.
#[inline]
fn accept_root(t: f64) -> Option<f64> {
    if (-EPSILON..=1.0 + EPSILON).contains(&t) {
        Some(t.clamp(0.0, 1.0))
    } else {
        None
    }
}

/// Transform `points` so that `line` lies on the positive x axis.
///
/// The y coordinate of each result is its signed distance from the
/// (extended) line. See [`Affine::baseline`].
pub fn align(points: &[Point], line: Line) -> SmallVec<[Point; 4]> {
    let xform = Affine::baseline(line);
    points.iter().map(|&p| xform * p).collect()
}

/// Roots in `[0, 1]` of a polynomial of degree two or one, given by its
/// Bernstein coefficients.
///
/// With three values `[a, b, c]` the polynomial is
/// `a (1-t)² + 2 b t (1-t) + c t²`, with two values `[a, b]` it is
/// `a (1-t) + b t`.
///
/// Roots are returned in ascending order. A double root, where the
/// polynomial touches zero without crossing, is reported twice.
///
/// # Panics
///
/// Panics if `values` does not hold two or three values.
pub fn droots(values: &[f64]) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    match *values {
        [a, b, c] => {
            let d = a - 2.0 * b + c;
            if d.abs() > EPSILON {
                let m1 = -(b * b - a * c).sqrt();
                let m2 = -a + b;
                let v1 = -(m1 + m2) / d;
                let v2 = -(-m1 + m2) / d;
                result.extend([v1, v2].into_iter().filter_map(accept_root));
            } else if (b - c).abs() > EPSILON {
                result.extend(accept_root((2.0 * b - c) / (2.0 * (b - c))));
            }
        }
        [a, b] => {
            if (a - b).abs() > EPSILON {
                result.extend(accept_root(a / (a - b)));
            }
        }
        _ => panic!("droots takes 2 or 3 values, got {}", values.len()),
    }
    result.sort_by(f64::total_cmp);
    result
}

/// Parameters in `[0, 1]` where the Bézier curve with control `points`
/// meets the infinite extension of `line`.
///
/// The points are first [aligned](align) to the line, which reduces the
/// problem to finding the zeros of the y coordinate. Quadratics use the
/// same closed form as [`droots`]; cubics use Cardano's method, switching to
/// the trigonometric form when there are three real roots.
///
/// Curves with two control points are handled as lines. Roots are returned
/// in ascending order.
///
/// # Panics
///
/// Panics if `points` does not hold two, three or four points.
pub fn roots(points: &[Point], line: Line) -> ArrayVec<f64, 3> {
    let aligned = align(points, line);
    let mut result = ArrayVec::new();
    match *aligned.as_slice() {
        [a, b] => result.extend(droots(&[a.y, b.y])),
        [a, b, c] => result.extend(droots(&[a.y, b.y, c.y])),
        [a, b, c, d] => result = cubic_roots(a.y, b.y, c.y, d.y),
        _ => panic!("roots takes 2 to 4 control points, got {}", points.len()),
    }
    result
}

/// Roots of the cubic with Bernstein coefficients `pa`, `pb`, `pc`, `pd`.
fn cubic_roots(pa: f64, pb: f64, pc: f64, pd: f64) -> ArrayVec<f64, 3> {
    let mut result = ArrayVec::new();
    let d = -pa + 3.0 * pb - 3.0 * pc + pd;
    if d.abs() < EPSILON {
        // The cubic term vanishes. Convert a t² + b t + c back to Bernstein
        // form and solve the quadratic.
        let a = 3.0 * pa - 6.0 * pb + 3.0 * pc;
        let b = 3.0 * (pb - pa);
        let c = pa;
        result.extend(droots(&[c, c + 0.5 * b, a + b + c]));
        return result;
    }

    // Monic form t³ + a t² + b t + c, then the depressed cubic s³ + p s + q.
    let a = (3.0 * pa - 6.0 * pb + 3.0 * pc) / d;
    let b = (-3.0 * pa + 3.0 * pb) / d;
    let c = pa / d;
    let p = (3.0 * b - a * a) / 3.0;
    let p3 = p / 3.0;
    let q = (2.0 * a * a * a - 9.0 * a * b + 27.0 * c) / 27.0;
    let q2 = q / 2.0;
    let discriminant = q2 * q2 + p3 * p3 * p3;
    let shift = a / 3.0;

    let candidates: ArrayVec<f64, 3> = if discriminant < 0.0 {
        let mp3 = -p / 3.0;
        let r = (mp3 * mp3 * mp3).sqrt();
        let cos_phi = (-q / (2.0 * r)).clamp(-1.0, 1.0);
        let phi = cos_phi.acos();
        let t1 = 2.0 * crt(r);
        let tau = core::f64::consts::TAU;
        [
            t1 * (phi / 3.0).cos() - shift,
            t1 * ((phi + tau) / 3.0).cos() - shift,
            t1 * ((phi + 2.0 * tau) / 3.0).cos() - shift,
        ]
        .into()
    } else if discriminant == 0.0 {
        let u1 = if q2 < 0.0 { crt(-q2) } else { -crt(q2) };
        [2.0 * u1 - shift, -u1 - shift].into_iter().collect()
    } else {
        let sd = discriminant.sqrt();
        let u1 = crt(-q2 + sd);
        let v1 = crt(q2 + sd);
        [u1 - v1 - shift].into_iter().collect()
    };
    result.extend(candidates.into_iter().filter_map(accept_root));
    result.sort_by(f64::total_cmp);
    result
}

/// Gauss-Legendre quadrature coefficients as `(weight, abscissa)` pairs.
///
/// Used for arc length measurement, where the integrand is the magnitude of
/// the derivative.
pub const GAUSS_LEGENDRE_COEFFS_24: &[(f64, f64)] = &[
    (0.1279381953467522, -0.0640568928626056),
    (0.1279381953467522, 0.0640568928626056),
    (0.1258374563468283, -0.1911188674736163),
    (0.1258374563468283, 0.1911188674736163),
    (0.1216704729278034, -0.3150426796961634),
    (0.1216704729278034, 0.3150426796961634),
    (0.1155056680537256, -0.4337935076260451),
    (0.1155056680537256, 0.4337935076260451),
    (0.1074442701159656, -0.5454214713888396),
    (0.1074442701159656, 0.5454214713888396),
    (0.0976186521041139, -0.6480936519369755),
    (0.0976186521041139, 0.6480936519369755),
    (0.0861901615319533, -0.7401241915785544),
    (0.0861901615319533, 0.7401241915785544),
    (0.0733464814110803, -0.8200019859739029),
    (0.0733464814110803, 0.8200019859739029),
    (0.0592985849154368, -0.8864155270044011),
    (0.0592985849154368, 0.8864155270044011),
    (0.0442774388174198, -0.9382745520027328),
    (0.0442774388174198, 0.9382745520027328),
    (0.0285313886289337, -0.9747285559713095),
    (0.0285313886289337, 0.9747285559713095),
    (0.0123412297999872, -0.9951872199970213),
    (0.0123412297999872, 0.9951872199970213),
];
