use boundary_hull::config::Config;
use boundary_hull::io::{find_candidates, print_menu, select_by_number, select_file};
use boundary_hull::pipeline::process_file;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(io::stderr)
    .init();

  let config = Config::parse();
  run(&config)
}

fn run(config: &Config) -> anyhow::Result<()> {
  let candidates = find_candidates(&config.dir, &config.extension)?;

  let selected = match config.select {
    Some(choice) => select_by_number(&candidates, choice)?,
    None => {
      print_menu(&candidates, &config.extension, io::stdout())?;
      select_file(&candidates, io::stdin().lock(), io::stdout(), config.max_attempts)?
    }
  };

  println!("\nProcessing: {}", selected.display());
  let outcome = process_file(selected)?;

  println!(
    "\nFixed sequence saved as TSV format inside: {} ({} hull vertices from {} distinct points)",
    outcome.output.display(),
    outcome.hull_vertices,
    outcome.distinct_points,
  );
  Ok(())
}
