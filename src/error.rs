//! Error type shared by every solver.

use std::num::ParseIntError;
use std::path::PathBuf;

/// Everything that can go wrong while reading or solving a puzzle.
///
/// Every variant is fatal: solvers never recover from a bad line and never
/// report a partial answer.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input is empty")]
    EmptyInput,

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("line {line}: invalid integer")]
    ParseInt {
        line: usize,
        #[source]
        source: ParseIntError,
    },

    #[error("unexpected character {ch:?} at row {row}, column {col}")]
    UnexpectedChar { ch: char, row: usize, col: usize },

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("arithmetic overflow while computing {0}")]
    Overflow(&'static str),

    #[error("no guard start marker found")]
    MissingStart,

    #[error("guard never leaves the map")]
    GuardTrapped,

    #[error("no solver for day {0}")]
    UnknownDay(u8),
}

impl PuzzleError {
    /// Builds a [`PuzzleError::Malformed`] for a 0-based line index.
    pub fn malformed(line_index: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line: line_index + 1,
            reason: reason.into(),
        }
    }
}

/// Parses a decimal integer, attributing failures to a 0-based line index.
pub fn parse_int<T>(token: &str, line_index: usize) -> Result<T, PuzzleError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    token.trim().parse().map_err(|source| PuzzleError::ParseInt {
        line: line_index + 1,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_reports_one_based_line() {
        let err = parse_int::<u32>("12x", 4).unwrap_err();
        assert!(matches!(err, PuzzleError::ParseInt { line: 5, .. }));
        assert_eq!(err.to_string(), "line 5: invalid integer");
    }

    #[test]
    fn test_parse_int_trims_whitespace() {
        assert_eq!(parse_int::<i64>("  -42 ", 0).unwrap(), -42);
    }
}
