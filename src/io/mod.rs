//! Filesystem and console plumbing around the hull pipeline.
pub mod loader;
pub mod locator;
pub mod prompt;
pub mod writer;

pub use loader::{load_table, Table};
pub use locator::{find_candidates, print_menu};
pub use prompt::{select_by_number, select_file};
pub use writer::write_tsv;
