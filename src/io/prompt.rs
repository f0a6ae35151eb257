use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::FixError;

const PROMPT: &str = "\nEnter the number of the file to process: ";

enum Answer {
  Chosen(usize),
  OutOfRange,
  NotANumber,
}

fn parse_answer(line: &str, count: usize) -> Answer {
  match line.trim().parse::<i64>() {
    Ok(n) if n >= 1 && (n as u64) <= count as u64 => Answer::Chosen(n as usize - 1),
    Ok(_) => Answer::OutOfRange,
    // Too large to be a menu number, but still a number.
    Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
      Answer::OutOfRange
    }
    Err(_) => Answer::NotANumber,
  }
}

/// Ask for a 1-based menu number until a valid one is given.
///
/// Ends with [`FixError::SelectionCancelled`] when `input` runs dry, and with
/// [`FixError::SelectionExhausted`] after `max_attempts` rejected answers.
pub fn select_file<'a, R, W>(
  candidates: &'a [PathBuf],
  mut input: R,
  mut out: W,
  max_attempts: Option<usize>,
) -> Result<&'a Path, FixError>
where
  R: BufRead,
  W: Write,
{
  let mut rejected = 0;
  let mut line = String::new();
  loop {
    write!(out, "{}", PROMPT)?;
    out.flush()?;
    line.clear();
    if input.read_line(&mut line)? == 0 {
      return Err(FixError::SelectionCancelled);
    }
    match parse_answer(&line, candidates.len()) {
      Answer::Chosen(idx) => return Ok(&candidates[idx]),
      Answer::OutOfRange => writeln!(out, "Invalid selection. Try again.")?,
      Answer::NotANumber => writeln!(out, "Please enter a valid number.")?,
    }
    rejected += 1;
    debug!(rejected, answer = line.trim(), "Rejected selection");
    if let Some(limit) = max_attempts {
      if rejected >= limit {
        return Err(FixError::SelectionExhausted { attempts: rejected });
      }
    }
  }
}

/// Non-interactive counterpart of [`select_file`].
pub fn select_by_number(candidates: &[PathBuf], choice: usize) -> Result<&Path, FixError> {
  match choice.checked_sub(1).and_then(|idx| candidates.get(idx)) {
    Some(path) => Ok(path),
    None => Err(FixError::InvalidSelection {
      choice,
      count: candidates.len(),
    }),
  }
}
