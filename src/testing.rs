// Strategies for points and boundary records.
// A Strategy is a way to generate a shrinkable value.
use crate::data::Point;
use crate::record::BoundaryPoint;

use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;
use std::convert::TryInto;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary Point

impl<T: Arbitrary, const N: usize> Arbitrary for Point<T, N>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
  T: Clone + std::fmt::Debug,
{
  type Strategy = Mapped<Vec<T>, Point<T, N>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    vec(any_with::<T>(params), N).prop_map(|vec: Vec<T>| Point {
      array: vec.try_into().unwrap(),
    })
  }
}

pub fn any_8() -> impl Strategy<Value = Point<i8, 2>> {
  any::<Point<i8, 2>>()
}

pub fn any_32() -> impl Strategy<Value = Point<i32, 2>> {
  any::<Point<i32, 2>>()
}

// Longitude/latitude pairs. Snapped to a 1e-6 degree grid so that duplicates
// and colinear runs show up regularly.
pub fn any_coord() -> impl Strategy<Value = Point<f64, 2>> {
  (-180_000_000i64..=180_000_000, -90_000_000i64..=90_000_000)
    .prop_map(|(lon, lat)| Point::new([lon as f64 / 1e6, lat as f64 / 1e6]))
}

// Small integer grid, lots of coincident and colinear points.
pub fn any_grid_coord() -> impl Strategy<Value = Point<f64, 2>> {
  (-5i8..=5, -5i8..=5).prop_map(|(lon, lat)| Point::new([f64::from(lon), f64::from(lat)]))
}

pub fn any_boundary_points(
  max_len: usize,
) -> impl Strategy<Value = Vec<BoundaryPoint>> {
  vec(any_grid_coord(), 0..max_len).prop_map(|pts| {
    pts
      .into_iter()
      .map(|pt| BoundaryPoint::new("7", pt[0], pt[1]))
      .collect()
  })
}
