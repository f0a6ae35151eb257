use claims::debug_assert_ok;
use std::ops::*;

use crate::data::Point;
use crate::data::PointLocation;
use crate::Orientation;
use crate::TotalOrd;
use crate::{Error, PolygonScalar};

use super::Polygon;

#[derive(Debug, Clone)]
pub struct PolygonConvex<T>(Polygon<T>);

///////////////////////////////////////////////////////////////////////////////
// PolygonConvex

impl<T> PolygonConvex<T>
where
  T: PolygonScalar,
{
  /// $O(1)$ Assume that a polygon is convex.
  ///
  /// # Safety
  /// The input polygon has to be strictly convex, ie. no vertices are allowed to
  /// be concave or colinear.
  pub fn new_unchecked(poly: Polygon<T>) -> PolygonConvex<T> {
    let convex = PolygonConvex(poly);
    debug_assert_ok!(convex.validate());
    convex
  }

  /// $O(n)$ Locate a point relative to the polygon.
  pub fn locate(&self, pt: &Point<T, 2>) -> PointLocation {
    let mut on_boundary = false;
    for (src, dst) in self.0.iter_boundary_edges() {
      match src.orientation(dst, pt) {
        Orientation::ClockWise => return PointLocation::Outside,
        Orientation::CoLinear => on_boundary = true,
        Orientation::CounterClockWise => {}
      }
    }
    if on_boundary {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }

  /// $O(n \log n)$
  ///
  /// Every turn must be strictly counter-clockwise and the ring must wind
  /// around exactly once. The winding check counts local minima in
  /// (y, x) order, which only uses exact comparisons.
  pub fn validate(&self) -> Result<(), Error> {
    let poly = &self.0;
    let n = poly.len();
    if n < 3 {
      return Err(Error::InsufficientVertices);
    }
    for idx in 0..n {
      if poly.orientation_at(idx) != Orientation::CounterClockWise {
        return Err(Error::ConvexViolation);
      }
    }
    let key = |pt: &Point<T, 2>| (pt.y_coord().clone(), pt.x_coord().clone());
    let minima = (0..n)
      .filter(|&idx| {
        let here = key(poly.point(idx));
        let prev = key(poly.point((idx + n - 1) % n));
        let next = key(poly.point((idx + 1) % n));
        here.total_cmp(&prev).is_lt() && here.total_cmp(&next).is_lt()
      })
      .count();
    if minima != 1 {
      return Err(Error::ConvexViolation);
    }
    poly.validate_distinct()
  }

  /// $O(1)$
  pub fn polygon(&self) -> &Polygon<T> {
    self.into()
  }

  /// Index of the lowest vertex, ties broken by the smallest x-coordinate.
  pub fn lowest_vertex(&self) -> usize {
    (0..self.0.len())
      .min_by(|&a, &b| {
        let a = self.0.point(a);
        let b = self.0.point(b);
        (a.y_coord(), a.x_coord()).total_cmp(&(b.y_coord(), b.x_coord()))
      })
      .unwrap_or(0)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Trait Implementations

impl<T: PolygonScalar> Deref for PolygonConvex<T> {
  type Target = Polygon<T>;
  fn deref(&self) -> &Self::Target {
    self.polygon()
  }
}

impl<T> From<PolygonConvex<T>> for Polygon<T> {
  fn from(convex: PolygonConvex<T>) -> Polygon<T> {
    convex.0
  }
}

impl<'a, T> From<&'a PolygonConvex<T>> for &'a Polygon<T> {
  fn from(convex: &'a PolygonConvex<T>) -> &'a Polygon<T> {
    &convex.0
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
