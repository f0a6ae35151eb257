use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixError {
  #[error("I/O error accessing path '{path}': {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("Console I/O failed: {0}")]
  Console(#[from] io::Error),
  #[error("No {extension} files found in {dir}")]
  NoCandidates { dir: PathBuf, extension: String },
  #[error("Selection cancelled: end of input")]
  SelectionCancelled,
  #[error("No valid selection after {attempts} attempts")]
  SelectionExhausted { attempts: usize },
  #[error("Invalid selection {choice}: expected a number between 1 and {count}")]
  InvalidSelection { choice: usize, count: usize },
  #[error("Failed to read '{path}' as TSV: {source}")]
  Tsv {
    path: PathBuf,
    #[source]
    source: csv::Error,
  },
  #[error("Expected columns not found in the file! Missing: {missing:?}")]
  MissingColumns { missing: Vec<String> },
  #[error("Row {row}: column '{column}' is not a finite number: '{value}'")]
  InvalidCoordinate {
    row: usize,
    column: &'static str,
    value: String,
  },
  #[error("Cannot build a boundary polygon: {0}")]
  Hull(#[from] crate::Error),
  #[error("Failed to write '{path}': {source}")]
  Write {
    path: PathBuf,
    #[source]
    source: csv::Error,
  },
}

macro_rules! io_err {
  ($path:expr, $err:expr) => {
    $crate::FixError::Io {
      path: $path.to_path_buf(),
      source: $err,
    }
  };
}
pub(crate) use io_err;
