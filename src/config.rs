use clap::Parser;
use std::path::PathBuf;

/// Rebuild a closed, ordered boundary polygon from a file of boundary points.
///
/// With no flags, lists the candidate files and asks which one to process.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Config {
  /// Directory holding the input files. The output is written there too.
  #[arg(long, env = "BOUNDARY_HULL_DIR", default_value = "../output/")]
  pub dir: PathBuf,

  /// Extension of candidate input files.
  #[arg(long, default_value = "xlsx")]
  pub extension: String,

  /// Pick the N-th file (1-based) without prompting.
  #[arg(long, value_name = "N")]
  pub select: Option<usize>,

  /// Give up after this many rejected answers at the prompt.
  #[arg(long, value_name = "N", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
  pub max_attempts: Option<usize>,
}
