//! Search result selection input
//!
//! After presenting search results the console asks its selection source for
//! one answer. The trait keeps the command core free of real input streams:
//! the binary wires in [`StdinSelection`], tests and scripted runs use
//! [`LineSelection`] over a buffer or their own implementation.

use std::io::{self, BufRead};

/// Supplies the answer to the "would you like to play one of the above"
/// prompt
///
/// `None` means decline. Absent, non-numeric and unreadable input all land
/// there; a selection source never fails.
pub trait SelectionSource {
    /// Request one answer; `Some(rank)` is a 1-based result number
    fn select(&mut self) -> Option<usize>;
}

/// One line of input parsed as a rank; anything else is a decline
fn parse_rank(line: &str) -> Option<usize> {
    line.trim().parse().ok()
}

/// Reads one line per selection from a buffered reader
pub struct LineSelection<R: BufRead> {
    input: R,
}

impl<R: BufRead> LineSelection<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> SelectionSource for LineSelection<R> {
    fn select(&mut self) -> Option<usize> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            // EOF and unreadable input both count as a decline
            Ok(0) | Err(_) => None,
            Ok(_) => parse_rank(&line),
        }
    }
}

/// Reads selections from stdin, locking per read
///
/// The REPL reads command lines from stdin between selections, so this
/// source takes no persistent lock.
pub struct StdinSelection;

impl SelectionSource for StdinSelection {
    fn select(&mut self) -> Option<usize> {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => parse_rank(&line),
        }
    }
}

/// Always declines; used when no interactive input is available
pub struct NoSelection;

impl SelectionSource for NoSelection {
    fn select(&mut self) -> Option<usize> {
        None
    }
}
