use csv::{Terminator, WriterBuilder};
use std::io;
use std::path::Path;
use tracing::debug;

use crate::record::SequencedPoint;
use crate::FixError;

/// Write `rows` as tab-separated text with a header row, whatever the
/// extension of `path` says.
pub fn write_tsv(path: &Path, rows: &[SequencedPoint]) -> Result<(), FixError> {
  let write_err = |source| FixError::Write {
    path: path.to_path_buf(),
    source,
  };
  let file = std::fs::File::create(path).map_err(|e| write_err(csv::Error::from(e)))?;
  write_tsv_to(file, rows).map_err(write_err)?;
  debug!(path = %path.display(), rows = rows.len(), "Wrote TSV");
  Ok(())
}

pub fn write_tsv_to<W: io::Write>(out: W, rows: &[SequencedPoint]) -> Result<(), csv::Error> {
  let mut wtr = WriterBuilder::new()
    .delimiter(b'\t')
    .terminator(Terminator::Any(b'\n'))
    .from_writer(out);
  for row in rows {
    wtr.serialize(row)?;
  }
  wtr.flush()?;
  Ok(())
}
