use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::io_err;
use crate::FixError;

/// Every regular file in `dir` whose extension is exactly `extension`, sorted
/// by file name.
pub fn find_candidates(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, FixError> {
  let entries = fs::read_dir(dir).map_err(|e| io_err!(dir, e))?;
  let mut candidates = Vec::new();
  for entry in entries {
    let path = entry.map_err(|e| io_err!(dir, e))?.path();
    if path.is_file() && path.extension() == Some(OsStr::new(extension)) {
      candidates.push(path);
    }
  }
  candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
  debug!(dir = %dir.display(), count = candidates.len(), "Scanned for candidate files");
  if candidates.is_empty() {
    return Err(FixError::NoCandidates {
      dir: dir.to_path_buf(),
      extension: extension.to_uppercase(),
    });
  }
  Ok(candidates)
}

/// Numbered (1-based) list of the candidates' file names.
pub fn print_menu<W: Write>(candidates: &[PathBuf], extension: &str, mut out: W) -> Result<(), FixError> {
  writeln!(out, "\nAvailable {} files:", extension.to_uppercase())?;
  for (i, path) in candidates.iter().enumerate() {
    let name = path.file_name().unwrap_or(path.as_os_str());
    writeln!(out, "{}. {}", i + 1, name.to_string_lossy())?;
  }
  out.flush()?;
  Ok(())
}
