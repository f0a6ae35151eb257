//! Clean a point table and turn it into a closed, numbered boundary polygon.
use ordered_float::OrderedFloat;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::algorithms::convex_hull;
use crate::data::{Point, Polygon};
use crate::io::{load_table, write_tsv};
use crate::record::{BoundaryPoint, SequencedPoint, REQUIRED_COLUMNS};
use crate::{Error, FixError};

/// Prefix for rewritten files. The extension of the source file is kept.
pub const OUTPUT_PREFIX: &str = "fixed_";

/// Summary of one processed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
  pub output: PathBuf,
  pub input_rows: usize,
  pub distinct_points: usize,
  pub hull_vertices: usize,
}

/// Drop points whose `(latitude, longitude)` was already seen. The first
/// occurrence wins and the relative order of the survivors is kept.
pub fn dedup_coordinates(points: Vec<BoundaryPoint>) -> Vec<BoundaryPoint> {
  let mut seen = HashSet::with_capacity(points.len());
  points
    .into_iter()
    .filter(|pt| seen.insert((OrderedFloat(pt.latitude), OrderedFloat(pt.longitude))))
    .collect()
}

/// Convex hull of the points in `(longitude, latitude)` space.
///
/// Vertices are counter-clockwise, starting at the southernmost point
/// (westernmost on ties).
pub fn trace_hull(points: &[BoundaryPoint]) -> Result<Vec<Point<f64, 2>>, Error> {
  let positions = points.iter().map(BoundaryPoint::position).collect();
  let hull = convex_hull(positions)?;
  Ok(Polygon::from(hull).into_points())
}

/// One row per hull vertex plus a closing row that repeats the first vertex.
/// Sequence numbers run from 1 without gaps.
pub fn close_and_number(municipality_id: &str, hull: &[Point<f64, 2>]) -> Vec<SequencedPoint> {
  hull
    .iter()
    .chain(hull.first())
    .zip(1..)
    .map(|(pt, sequence_no)| SequencedPoint {
      municipality_id: municipality_id.to_string(),
      latitude: *pt.y_coord(),
      longitude: *pt.x_coord(),
      sequence_no,
    })
    .collect()
}

/// Dedup, hull, close and number. Every output row carries the first input
/// row's municipality identifier.
pub fn fix_sequence(points: Vec<BoundaryPoint>) -> Result<Vec<SequencedPoint>, FixError> {
  let input_rows = points.len();
  let points = dedup_coordinates(points);
  debug!(input_rows, distinct = points.len(), "Dropped duplicate coordinates");
  sequence_distinct(&points)
}

// Hull, close and number points that are already free of duplicates.
fn sequence_distinct(points: &[BoundaryPoint]) -> Result<Vec<SequencedPoint>, FixError> {
  let hull = trace_hull(points)?;
  let municipality_id = points
    .first()
    .map(|pt| pt.municipality_id.as_str())
    .unwrap_or_default();
  Ok(close_and_number(municipality_id, &hull))
}

/// `<dir>/fixed_<name>` next to `selected`.
pub fn output_path(selected: &Path) -> PathBuf {
  let name = selected
    .file_name()
    .map(|name| name.to_string_lossy().into_owned())
    .unwrap_or_default();
  selected.with_file_name(format!("{}{}", OUTPUT_PREFIX, name))
}

/// Load `path`, rebuild its boundary and write it next to the source.
///
/// Nothing is written unless every stage succeeds.
pub fn process_file(path: &Path) -> Result<Outcome, FixError> {
  let table = load_table(path)?;
  table.require(&REQUIRED_COLUMNS)?;
  info!(path = %path.display(), "File loaded successfully");

  let points = table.boundary_points()?;
  let input_rows = points.len();
  let points = dedup_coordinates(points);
  let distinct_points = points.len();
  debug!(input_rows, distinct_points, "Dropped duplicate coordinates");
  let rows = sequence_distinct(&points)?;

  let output = output_path(path);
  write_tsv(&output, &rows)?;
  info!(output = %output.display(), rows = rows.len(), "Fixed sequence saved");
  Ok(Outcome {
    output,
    input_rows,
    distinct_points,
    hull_vertices: rows.len() - 1,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::{PointLocation, PolygonConvex};
  use crate::testing::*;

  use claims::assert_matches;
  use proptest::prelude::*;
  use test_strategy::proptest;

  fn square_with_center() -> Vec<BoundaryPoint> {
    vec![
      BoundaryPoint::new("7", 0.0, 0.0),
      BoundaryPoint::new("7", 1.0, 0.0),
      BoundaryPoint::new("7", 1.0, 1.0),
      BoundaryPoint::new("7", 0.0, 1.0),
      BoundaryPoint::new("7", 0.5, 0.5),
    ]
  }

  #[test]
  fn square_with_interior_point() {
    let rows = fix_sequence(square_with_center()).unwrap();
    let expected = [
      (0.0, 0.0, 1),
      (0.0, 1.0, 2),
      (1.0, 1.0, 3),
      (1.0, 0.0, 4),
      (0.0, 0.0, 5),
    ];
    assert_eq!(rows.len(), 5);
    for (row, (lat, lon, seq)) in rows.iter().zip(expected) {
      assert_eq!(row.municipality_id, "7");
      assert_eq!((row.latitude, row.longitude, row.sequence_no), (lat, lon, seq));
    }
  }

  #[test]
  fn duplicates_do_not_matter() {
    let mut points = square_with_center();
    points.extend(square_with_center());
    points.insert(2, BoundaryPoint::new("7", 1.0, 0.0));
    assert_eq!(
      fix_sequence(points).unwrap(),
      fix_sequence(square_with_center()).unwrap()
    );
  }

  #[test]
  fn dedup_keeps_first_occurrence_in_order() {
    let points = vec![
      BoundaryPoint::new("a", 1.0, 2.0),
      BoundaryPoint::new("b", 3.0, 4.0),
      BoundaryPoint::new("c", 1.0, 2.0),
      BoundaryPoint::new("d", -0.0, 4.0),
      BoundaryPoint::new("e", 0.0, 4.0),
      BoundaryPoint::new("f", 2.0, 1.0),
    ];
    let ids: Vec<_> = dedup_coordinates(points)
      .into_iter()
      .map(|pt| pt.municipality_id)
      .collect();
    assert_eq!(ids, vec!["a", "b", "d", "f"]);
  }

  #[test]
  fn distinct_points_sequence_like_raw_points() {
    let mut points = square_with_center();
    points.extend(square_with_center());
    let distinct = dedup_coordinates(points.clone());
    assert_eq!(distinct.len(), 5);
    assert_eq!(
      sequence_distinct(&distinct).unwrap(),
      fix_sequence(points).unwrap()
    );
  }

  #[test]
  fn first_row_identifier_is_used() {
    let mut points = square_with_center();
    points[0].municipality_id = "0363".into();
    points[3].municipality_id = "0518".into();
    let rows = fix_sequence(points).unwrap();
    assert!(rows.iter().all(|row| row.municipality_id == "0363"));
  }

  #[test]
  fn too_few_points() {
    let points = vec![
      BoundaryPoint::new("7", 0.0, 0.0),
      BoundaryPoint::new("7", 1.0, 1.0),
      BoundaryPoint::new("7", 1.0, 1.0),
    ];
    assert_matches!(
      fix_sequence(points),
      Err(FixError::Hull(Error::InsufficientVertices))
    );
    assert_matches!(
      fix_sequence(vec![]),
      Err(FixError::Hull(Error::InsufficientVertices))
    );
  }

  #[test]
  fn colinear_points() {
    let points = (0..5)
      .map(|i| BoundaryPoint::new("7", f64::from(i), 2.0 * f64::from(i)))
      .collect();
    assert_matches!(
      fix_sequence(points),
      Err(FixError::Hull(Error::InsufficientVertices))
    );
  }

  #[test]
  fn output_path_keeps_extension() {
    assert_eq!(
      output_path(Path::new("../output/utrecht.xlsx")),
      PathBuf::from("../output/fixed_utrecht.xlsx")
    );
    assert_eq!(output_path(Path::new("a.tsv")), PathBuf::from("fixed_a.tsv"));
  }

  #[test]
  fn close_and_number_repeats_first_vertex() {
    let hull = vec![Point::new([0.0, 0.0]), Point::new([2.0, 0.0]), Point::new([0.0, 2.0])];
    let rows = close_and_number("9", &hull);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3].position(), hull[0]);
    assert_eq!(rows[3].sequence_no, 4);
  }

  #[proptest]
  fn output_is_closed_and_numbered(#[strategy(any_boundary_points(80))] points: Vec<BoundaryPoint>) {
    let distinct = dedup_coordinates(points.clone());
    if let Ok(rows) = fix_sequence(points) {
      let n = rows.len();
      prop_assert!(n >= 4);
      // Closed ring.
      prop_assert_eq!(rows[0].position(), rows[n - 1].position());
      // Gapless 1-based numbering.
      for (i, row) in rows.iter().enumerate() {
        prop_assert_eq!(row.sequence_no as usize, i + 1);
        prop_assert_eq!(&row.municipality_id, "7");
      }
      // Distinct vertices drawn from the input.
      let ring = &rows[..n - 1];
      for (i, a) in ring.iter().enumerate() {
        prop_assert!(distinct.iter().any(|pt| pt.position() == a.position()));
        for b in &ring[i + 1..] {
          prop_assert_ne!(a.position(), b.position());
        }
      }
      // Every input point is covered by the hull.
      let hull = PolygonConvex::new_unchecked(Polygon::new_unchecked(
        ring.iter().map(SequencedPoint::position).collect(),
      ));
      for pt in &distinct {
        prop_assert_ne!(hull.locate(&pt.position()), PointLocation::Outside);
      }
    }
  }
}
