// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Rebuild ordered municipal boundary polygons from point spreadsheets.
//!
//! The crate is split in two layers. The geometry layer ([`data`],
//! [`algorithms`], [`Orientation`]) computes exact convex hulls over any
//! [`PolygonScalar`]. The pipeline layer ([`io`], [`pipeline`], [`record`])
//! loads boundary points, cleans them, traces the hull and writes a closed,
//! numbered polygon back to disk.
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::float::FloatCore;
use num_traits::{NumAssignOps, NumOps};
use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::*;

pub mod algorithms;
pub mod config;
pub mod data;
mod error;
pub mod io;
mod orientation;
pub mod pipeline;
pub mod record;

#[cfg(test)]
pub mod testing;

pub use error::FixError;
pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  DuplicatePoints,
  /// Two consecutive line segments are either colinear or oriented clockwise.
  ConvexViolation,
  ClockWiseViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(
        f,
        "Insufficient vertices: need at least three distinct, non-colinear points"
      ),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::ClockWiseViolation => write!(f, "Clockwise violation"),
    }
  }
}

impl std::error::Error for Error {}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Scalars with exact geometric predicates.
///
/// Every comparison is exact: fixed-precision integers widen before
/// multiplying, floats go through adaptive predicates or exact rationals.
pub trait PolygonScalar:
  std::fmt::Debug
  + Neg<Output = Self>
  + NumAssignOps
  + NumOps<Self, Self>
  + TotalOrd
  + PartialOrd
  + Sum
  + Clone
{
  fn from_constant(val: i8) -> Self;
  /// Compare `|p-q|` with `|p-r|`.
  fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
  /// Sign of the turn `p -> q -> r`. `Greater` is counter-clockwise.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
  /// Same as `cmp_slope(p, p+vector, q)` without computing `p+vector`.
  fn cmp_vector_slope(vector: &[Self; 2], p: &[Self; 2], q: &[Self; 2]) -> Ordering;
  /// Same as `cmp_slope(p, p+perp(vector), q)` where `perp` rotates 90° ccw.
  fn cmp_perp_vector_slope(vector: &[Self; 2], p: &[Self; 2], q: &[Self; 2]) -> Ordering;
}

// (q - p) x (r - q), evaluated in a type wide enough not to overflow.
fn wide_slope<W>(p: [W; 2], q: [W; 2], r: [W; 2]) -> Ordering
where
  W: Ord + Copy + Sub<Output = W> + Mul<Output = W>,
{
  let slope1 = (r[1] - q[1]) * (q[0] - p[0]);
  let slope2 = (q[1] - p[1]) * (r[0] - q[0]);
  slope1.cmp(&slope2)
}

macro_rules! widened_precision {
  ( $( $ty:ty => $wide:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl PolygonScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty>::from(val)
        }
        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let dist = |a: &[Self; 2], b: &[Self; 2]| -> $wide {
            let dx = <$wide>::from(a[0]) - <$wide>::from(b[0]);
            let dy = <$wide>::from(a[1]) - <$wide>::from(b[1]);
            dx * dx + dy * dy
          };
          dist(p, q).cmp(&dist(p, r))
        }
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let w = |a: &[Self; 2]| [<$wide>::from(a[0]), <$wide>::from(a[1])];
          wide_slope(w(p), w(q), w(r))
        }
        fn cmp_vector_slope(vector: &[Self; 2], p: &[Self; 2], q: &[Self; 2]) -> Ordering {
          let w = |a: &[Self; 2]| [<$wide>::from(a[0]), <$wide>::from(a[1])];
          let [px, py] = w(p);
          let [vx, vy] = w(vector);
          wide_slope([px, py], [px + vx, py + vy], w(q))
        }
        fn cmp_perp_vector_slope(vector: &[Self; 2], p: &[Self; 2], q: &[Self; 2]) -> Ordering {
          let w = |a: &[Self; 2]| [<$wide>::from(a[0]), <$wide>::from(a[1])];
          let [px, py] = w(p);
          let [vx, vy] = w(vector);
          wide_slope([px, py], [px - vy, py + vx], w(q))
        }
      }
    )*
  };
}

macro_rules! arbitrary_precision {
  ( $( $ty:ty => $from:expr ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl PolygonScalar for $ty {
        fn from_constant(val: i8) -> Self {
          ($from)(val)
        }
        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let pq_x = &p[0] - &q[0];
          let pq_y = &p[1] - &q[1];
          let pq_dist_squared: Self = &pq_x * &pq_x + &pq_y * &pq_y;
          let pr_x = &p[0] - &r[0];
          let pr_y = &p[1] - &r[1];
          let pr_dist_squared: Self = &pr_x * &pr_x + &pr_y * &pr_y;
          pq_dist_squared.cmp(&pr_dist_squared)
        }
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let slope1 = (&r[1] - &q[1]) * (&q[0] - &p[0]);
          let slope2 = (&q[1] - &p[1]) * (&r[0] - &q[0]);
          slope1.cmp(&slope2)
        }
        fn cmp_vector_slope(vector: &[Self; 2], p: &[Self; 2], q: &[Self; 2]) -> Ordering {
          PolygonScalar::cmp_slope(p, &[&p[0] + &vector[0], &p[1] + &vector[1]], q)
        }
        fn cmp_perp_vector_slope(vector: &[Self; 2], p: &[Self; 2], q: &[Self; 2]) -> Ordering {
          PolygonScalar::cmp_slope(p, &[&p[0] - &vector[1], &p[1] + &vector[0]], q)
        }
      }
    )*
  };
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl PolygonScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty>::from(val)
        }
        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          PolygonScalar::cmp_dist(&to_rational(p), &to_rational(q), &to_rational(r))
        }
        // Adaptive-precision orientation test. Exact for all finite inputs and
        // only falls back to expansion arithmetic near degeneracies.
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let orient = geometry_predicates::predicates::orient2d(
            [f64::from(p[0]), f64::from(p[1])],
            [f64::from(q[0]), f64::from(q[1])],
            [f64::from(r[0]), f64::from(r[1])],
          );
          if orient > 0.0 {
            Ordering::Greater
          } else if orient < 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }
        fn cmp_vector_slope(vector: &[Self; 2], p: &[Self; 2], q: &[Self; 2]) -> Ordering {
          PolygonScalar::cmp_vector_slope(&to_rational(vector), &to_rational(p), &to_rational(q))
        }
        fn cmp_perp_vector_slope(vector: &[Self; 2], p: &[Self; 2], q: &[Self; 2]) -> Ordering {
          PolygonScalar::cmp_perp_vector_slope(
            &to_rational(vector),
            &to_rational(p),
            &to_rational(q),
          )
        }
      }
    )*
  };
}

widened_precision!(i8 => i64, i16 => i64, i32 => i128);
arbitrary_precision!(
  BigInt => BigInt::from,
  BigRational => |val: i8| BigRational::from_integer(BigInt::from(val))
);
floating_precision!(f32, f64);

/// # Panics
///
/// Panics on NaN or infinite input. Coordinates are checked for finiteness
/// when they are loaded.
fn to_rational<F: FloatCore>(pt: &[F; 2]) -> [BigRational; 2] {
  [float_to_rational(pt[0]), float_to_rational(pt[1])]
}

fn float_to_rational(f: impl FloatCore) -> BigRational {
  BigRational::from_float(f).expect("cannot convert NaN or infinite to exact precision number")
}
