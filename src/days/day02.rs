//! Day 2: Red-Nosed Reports.

use crate::error::{parse_int, PuzzleError};
use crate::input::lines;
use crate::{Answers, Part, Solver};

/// Largest allowed difference between adjacent levels.
const MAX_STEP: u32 = 3;

pub struct RedNosedReports;

impl Solver for RedNosedReports {
    fn day(&self) -> u8 {
        2
    }

    fn title(&self) -> &'static str {
        "Red-Nosed Reports"
    }

    fn solve(&self, input: &str) -> Result<Answers, PuzzleError> {
        let reports = parse(input)?;
        Ok(Answers::new(
            Part::new("Number of safe reports", count_safe(&reports, false)),
            Part::new(
                "Number of safe reports with dampener",
                count_safe(&reports, true),
            ),
        ))
    }
}

/// Parses one report of whitespace-separated levels per line.
pub fn parse(input: &str) -> Result<Vec<Vec<i32>>, PuzzleError> {
    lines(input)
        .map(|(line_index, line)| {
            line.split_whitespace()
                .map(|token| parse_int(token, line_index))
                .collect()
        })
        .collect()
}

/// A report is safe when it is strictly monotonic with every adjacent
/// difference between 1 and [`MAX_STEP`].
pub fn is_safe(levels: &[i32]) -> bool {
    let mut sign = 0;
    for pair in levels.windows(2) {
        let diff = pair[1] - pair[0];
        if !(1..=MAX_STEP).contains(&diff.unsigned_abs()) {
            return false;
        }
        if sign != 0 && diff.signum() != sign {
            return false;
        }
        sign = diff.signum();
    }
    true
}

/// Like [`is_safe`], but tolerates removing any single level.
pub fn is_safe_with_dampener(levels: &[i32]) -> bool {
    if is_safe(levels) {
        return true;
    }

    let mut dampened = Vec::with_capacity(levels.len());
    (0..levels.len()).any(|skip| {
        dampened.clear();
        dampened.extend_from_slice(&levels[..skip]);
        dampened.extend_from_slice(&levels[skip + 1..]);
        is_safe(&dampened)
    })
}

pub fn count_safe(reports: &[Vec<i32>], use_dampener: bool) -> u64 {
    let check = if use_dampener {
        is_safe_with_dampener
    } else {
        is_safe
    };
    reports.iter().filter(|report| check(report)).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../../samples/day02.txt");

    #[test]
    fn test_individual_reports() {
        assert!(is_safe(&[7, 6, 4, 2, 1]));
        assert!(!is_safe(&[1, 2, 7, 8, 9]), "jump of 5");
        assert!(!is_safe(&[8, 6, 4, 4, 1]), "repeated level");

        assert!(!is_safe(&[1, 3, 2, 4, 5]));
        assert!(is_safe_with_dampener(&[1, 3, 2, 4, 5]));
        assert!(!is_safe_with_dampener(&[1, 2, 7, 8, 9]));
    }

    #[test]
    fn test_dampener_can_drop_first_or_last_level() {
        assert!(is_safe_with_dampener(&[9, 1, 2, 3]));
        assert!(is_safe_with_dampener(&[1, 2, 3, 9]));
    }

    #[test]
    fn test_short_reports_are_safe() {
        assert!(is_safe(&[]));
        assert!(is_safe(&[42]));
    }

    #[test]
    fn test_sample_counts() {
        let answers = RedNosedReports.solve(SAMPLE).unwrap();
        assert_eq!(answers.values(), (2, 4));
    }
}
