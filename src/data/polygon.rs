use crate::data::Point;
use crate::Error;
use crate::Orientation;
use crate::PolygonScalar;
use crate::TotalOrd;

mod iter;
pub use iter::*;

mod convex;
pub use convex::*;

/// A simple polygon given by its boundary ring.
///
/// The ring is implicitly closed: the last vertex connects back to the first.
#[derive(Debug, Clone)]
pub struct Polygon<T> {
  pub(crate) vertices: Vec<Point<T, 2>>,
}

impl<T> Polygon<T> {
  pub fn new_unchecked(vertices: Vec<Point<T, 2>>) -> Polygon<T> {
    Polygon { vertices }
  }

  /// Check for duplicate vertices, vertex count, and counter-clockwise winding.
  pub fn validate(&self) -> Result<(), Error>
  where
    T: PolygonScalar,
  {
    self.validate_distinct()?;
    self.validate_weakly()
  }

  pub fn validate_distinct(&self) -> Result<(), Error>
  where
    T: PolygonScalar,
  {
    let mut sorted: Vec<&Point<T, 2>> = self.vertices.iter().collect();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    if sorted.windows(2).any(|w| w[0].total_cmp(w[1]).is_eq()) {
      return Err(Error::DuplicatePoints);
    }
    Ok(())
  }

  pub fn validate_weakly(&self) -> Result<(), Error>
  where
    T: PolygonScalar,
  {
    if self.vertices.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    if self.signed_area_2x() <= T::from_constant(0) {
      return Err(Error::ClockWiseViolation);
    }
    Ok(())
  }

  /// Twice the signed area. Positive for counter-clockwise rings.
  pub fn signed_area_2x(&self) -> T
  where
    T: PolygonScalar,
  {
    self
      .iter_boundary_edges()
      .map(|(p, q)| p.array[0].clone() * q.array[1].clone() - q.array[0].clone() * p.array[1].clone())
      .sum()
  }

  /// Turn at vertex `idx`: walking from its predecessor, through it, to its successor.
  pub fn orientation_at(&self, idx: usize) -> Orientation
  where
    T: PolygonScalar,
  {
    let n = self.vertices.len();
    let prev = &self.vertices[(idx + n - 1) % n];
    let next = &self.vertices[(idx + 1) % n];
    prev.orientation(&self.vertices[idx], next)
  }

  pub fn point(&self, idx: usize) -> &Point<T, 2> {
    &self.vertices[idx]
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      iter: self.vertices.iter(),
    }
  }

  pub fn iter_boundary_edges(&self) -> EdgeIter<'_, T> {
    EdgeIter {
      vertices: &self.vertices,
      next: 0,
    }
  }

  /// Vertices in boundary order.
  pub fn into_points(self) -> Vec<Point<T, 2>> {
    self.vertices
  }
}
