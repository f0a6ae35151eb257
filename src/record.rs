//! Boundary point records as they are read from and written to disk.
use serde::Serialize;

use crate::data::Point;

/// Column names the loader needs, after trimming and lowercasing.
pub const MUNICIPALITY_ID: &str = "municipality_id";
pub const LONGITUDE: &str = "longitude";
pub const LATITUDE: &str = "latitude";

pub const REQUIRED_COLUMNS: [&str; 3] = [MUNICIPALITY_ID, LONGITUDE, LATITUDE];

/// One input row.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPoint {
  /// Opaque, carried through verbatim.
  pub municipality_id: String,
  pub longitude: f64,
  pub latitude: f64,
}

impl BoundaryPoint {
  pub fn new(municipality_id: impl Into<String>, longitude: f64, latitude: f64) -> BoundaryPoint {
    BoundaryPoint {
      municipality_id: municipality_id.into(),
      longitude,
      latitude,
    }
  }

  /// Planar position: x is longitude, y is latitude.
  pub fn position(&self) -> Point<f64, 2> {
    Point::new([self.longitude, self.latitude])
  }
}

/// One output row. Field order is the column order of the written file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequencedPoint {
  pub municipality_id: String,
  pub latitude: f64,
  pub longitude: f64,
  pub sequence_no: u32,
}

impl SequencedPoint {
  pub fn position(&self) -> Point<f64, 2> {
    Point::new([self.longitude, self.latitude])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn position_is_longitude_first() {
    let pt = BoundaryPoint::new("0363", 4.9, 52.37);
    assert_eq!(pt.position(), Point::new([4.9, 52.37]));
  }
}
