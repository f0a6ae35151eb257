//! Reading boundary point tables.
//!
//! Files carry a spreadsheet extension but are not always spreadsheets: a
//! common upstream export writes tab-separated text under an `.xlsx` name.
//! [`load_table`] tries the workbook reader first and falls back to TSV.
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::record::{BoundaryPoint, LATITUDE, LONGITUDE, MUNICIPALITY_ID};
use crate::FixError;

/// A header row plus data rows, every cell rendered as text.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
  columns: Vec<String>,
  rows: Vec<Vec<String>>,
}

impl Table {
  pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Table {
    Table { columns, rows }
  }

  pub fn columns(&self) -> &[String] {
    &self.columns
  }

  pub fn rows(&self) -> &[Vec<String>] {
    &self.rows
  }

  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  /// Trim and lowercase every column name.
  pub fn normalize_columns(&mut self) {
    for column in self.columns.iter_mut() {
      *column = column.trim_start_matches('\u{feff}').trim().to_lowercase();
    }
  }

  pub fn column_index(&self, name: &str) -> Option<usize> {
    self.columns.iter().position(|column| column == name)
  }

  /// Fails with every name in `names` that is not a column.
  pub fn require(&self, names: &[&str]) -> Result<(), FixError> {
    let missing: Vec<String> = names
      .iter()
      .filter(|name| self.column_index(name).is_none())
      .map(|name| name.to_string())
      .collect();
    if missing.is_empty() {
      Ok(())
    } else {
      Err(FixError::MissingColumns { missing })
    }
  }

  /// Convert every row into a [`BoundaryPoint`].
  ///
  /// Coordinates must be finite numbers. The municipality identifier is kept
  /// verbatim.
  pub fn boundary_points(&self) -> Result<Vec<BoundaryPoint>, FixError> {
    self.require(&[MUNICIPALITY_ID, LONGITUDE, LATITUDE])?;
    let id_idx = self.column_index(MUNICIPALITY_ID).unwrap_or_default();
    let lon_idx = self.column_index(LONGITUDE).unwrap_or_default();
    let lat_idx = self.column_index(LATITUDE).unwrap_or_default();
    self
      .rows
      .iter()
      .enumerate()
      .map(|(i, row)| {
        let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");
        Ok(BoundaryPoint {
          municipality_id: cell(id_idx).to_string(),
          longitude: parse_coordinate(i + 1, LONGITUDE, cell(lon_idx))?,
          latitude: parse_coordinate(i + 1, LATITUDE, cell(lat_idx))?,
        })
      })
      .collect()
  }
}

fn parse_coordinate(row: usize, column: &'static str, value: &str) -> Result<f64, FixError> {
  match value.trim().parse::<f64>() {
    Ok(v) if v.is_finite() => Ok(v),
    _ => Err(FixError::InvalidCoordinate {
      row,
      column,
      value: value.to_string(),
    }),
  }
}

/// Load `path` as a workbook, or as TSV if it is not one. Column names are
/// normalized.
pub fn load_table(path: &Path) -> Result<Table, FixError> {
  let mut table = match read_workbook(path) {
    Ok(table) => {
      debug!(path = %path.display(), "Parsed as workbook");
      table
    }
    Err(err) => {
      warn!(path = %path.display(), error = %err, "File is not a valid Excel file. Trying as TSV...");
      read_tsv(path)?
    }
  };
  table.normalize_columns();
  info!(columns = ?table.columns(), rows = table.len(), "Detected columns");
  Ok(table)
}

/// First worksheet of a workbook; its first row is the header.
pub fn read_workbook(path: &Path) -> Result<Table, calamine::Error> {
  let mut workbook = open_workbook_auto(path)?;
  let range = workbook
    .worksheet_range_at(0)
    .ok_or(calamine::Error::Msg("workbook has no worksheets"))??;
  let mut rows = range.rows().map(|row| row.iter().map(cell_text).collect::<Vec<_>>());
  let columns = rows.next().unwrap_or_default();
  Ok(Table::new(columns, rows.collect()))
}

/// Tab-separated text with a header row.
pub fn read_tsv(path: &Path) -> Result<Table, FixError> {
  let tsv_err = |source| FixError::Tsv {
    path: path.to_path_buf(),
    source,
  };
  let mut rdr = ReaderBuilder::new()
    .delimiter(b'\t')
    .flexible(true)
    .from_path(path)
    .map_err(tsv_err)?;
  let columns: Vec<String> = rdr
    .headers()
    .map_err(tsv_err)?
    .iter()
    .map(str::to_string)
    .collect();
  let mut rows = Vec::new();
  for record in rdr.records() {
    let record = record.map_err(tsv_err)?;
    rows.push(record.iter().map(str::to_string).collect());
  }
  Ok(Table::new(columns, rows))
}

// Whole numbers lose their fractional part so identifiers read back as `7`.
fn cell_text(cell: &Data) -> String {
  match cell {
    Data::Empty => String::new(),
    Data::String(s) => s.clone(),
    Data::Int(i) => i.to_string(),
    Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
    Data::Float(f) => f.to_string(),
    other => other.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_matches, assert_ok};
  use std::fs;

  fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
    Table::new(
      columns.iter().map(|c| c.to_string()).collect(),
      rows
        .iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect(),
    )
  }

  #[test]
  fn columns_are_trimmed_and_lowercased() {
    let mut t = table(&["\u{feff} Municipality_ID", "LONGITUDE ", "\tLatitude"], &[]);
    t.normalize_columns();
    assert_eq!(t.columns(), ["municipality_id", "longitude", "latitude"]);
    assert_ok!(t.require(&[MUNICIPALITY_ID, LONGITUDE, LATITUDE]));
  }

  #[test]
  fn missing_columns_are_listed() {
    let t = table(&["municipality_id", "lon", "latitude"], &[]);
    match t.require(&[MUNICIPALITY_ID, LONGITUDE, LATITUDE]) {
      Err(FixError::MissingColumns { missing }) => assert_eq!(missing, vec!["longitude"]),
      other => panic!("unexpected {:?}", other),
    }
  }

  #[test]
  fn rows_become_boundary_points() {
    let t = table(
      &["latitude", "municipality_id", "longitude", "name"],
      &[&["52.37", "0363", " 4.89 ", "Amsterdam"], &["52.38", "0363", "4.90", ""]],
    );
    let points = t.boundary_points().unwrap();
    assert_eq!(
      points,
      vec![
        BoundaryPoint::new("0363", 4.89, 52.37),
        BoundaryPoint::new("0363", 4.90, 52.38),
      ]
    );
  }

  #[test]
  fn non_numeric_coordinates_are_rejected() {
    let t = table(
      &["municipality_id", "longitude", "latitude"],
      &[&["7", "0", "0"], &["7", "east", "1"]],
    );
    assert_matches!(
      t.boundary_points(),
      Err(FixError::InvalidCoordinate { row: 2, column: "longitude", .. })
    );
    let t = table(&["municipality_id", "longitude", "latitude"], &[&["7", "0", "NaN"]]);
    assert_matches!(t.boundary_points(), Err(FixError::InvalidCoordinate { row: 1, .. }));
  }

  #[test]
  fn short_rows_are_padded() {
    let t = table(&["municipality_id", "longitude", "latitude"], &[&["7", "1"]]);
    assert_matches!(
      t.boundary_points(),
      Err(FixError::InvalidCoordinate { column: "latitude", .. })
    );
  }

  #[test]
  fn tsv_with_spreadsheet_extension_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boundary.xlsx");
    fs::write(
      &path,
      " Municipality_ID\tLongitude\tLatitude\n7\t0\t0\n7\t1\t0\n\n7\t1\t1\n",
    )
    .unwrap();
    let t = load_table(&path).unwrap();
    assert_eq!(t.columns(), ["municipality_id", "longitude", "latitude"]);
    assert_eq!(t.len(), 3);
    assert_eq!(t.rows()[2], vec!["7", "1", "1"]);
  }

  #[test]
  fn workbook_reader_rejects_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boundary.xlsx");
    fs::write(&path, "municipality_id\tlongitude\tlatitude\n").unwrap();
    assert!(read_workbook(&path).is_err());
  }

  #[test]
  fn missing_file_fails_in_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.xlsx");
    assert_matches!(load_table(&path), Err(FixError::Tsv { .. }));
  }

  #[test]
  fn cell_text_renders_whole_numbers_without_fraction() {
    assert_eq!(cell_text(&Data::Float(7.0)), "7");
    assert_eq!(cell_text(&Data::Float(4.895168)), "4.895168");
    assert_eq!(cell_text(&Data::Int(363)), "363");
    assert_eq!(cell_text(&Data::String("0363".into())), "0363");
    assert_eq!(cell_text(&Data::Empty), "");
  }
}
