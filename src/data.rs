pub(crate) mod point;
pub mod polygon;

#[doc(inline)]
pub use crate::data::polygon::{Polygon, PolygonConvex};
pub use point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
