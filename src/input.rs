//! Locating and loading puzzle input files.
//!
//! Day `N` reads `<input dir>/dayNN.txt` unless an explicit path is given.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PuzzleError;

/// Directory searched for input files when none is configured.
pub const DEFAULT_INPUT_DIR: &str = "input";

/// Conventional input path for a day, e.g. `input/day06.txt`.
pub fn default_path(input_dir: &Path, day: u8) -> PathBuf {
    input_dir.join(format!("day{day:02}.txt"))
}

/// Reads a whole input file into memory.
pub fn read(path: &Path) -> Result<String, PuzzleError> {
    fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Iterates over the non-blank lines of `input` with their 0-based index.
pub fn lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
}
