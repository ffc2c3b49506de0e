//! Day 1: Historian Hysteria.
//!
//! Two columns of location ids, compared once by sorted position and once
//! by how often each left id appears on the right.

use rustc_hash::FxHashMap;

use crate::error::{parse_int, PuzzleError};
use crate::input::lines;
use crate::{Answers, Part, Solver};

pub struct HistorianHysteria;

impl Solver for HistorianHysteria {
    fn day(&self) -> u8 {
        1
    }

    fn title(&self) -> &'static str {
        "Historian Hysteria"
    }

    fn solve(&self, input: &str) -> Result<Answers, PuzzleError> {
        let (left, right) = parse(input)?;
        Ok(Answers::new(
            Part::new("Total distance", total_distance(&left, &right)?),
            Part::new("Similarity score", similarity_score(&left, &right)?),
        ))
    }
}

/// Parses lines of exactly two whitespace-separated integers.
pub fn parse(input: &str) -> Result<(Vec<i64>, Vec<i64>), PuzzleError> {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for (line_index, line) in lines(input) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [l, r] = tokens[..] else {
            return Err(PuzzleError::malformed(
                line_index,
                format!("expected 2 numbers, found {}", tokens.len()),
            ));
        };
        left.push(parse_int(l, line_index)?);
        right.push(parse_int(r, line_index)?);
    }

    Ok((left, right))
}

/// Sum of absolute differences between the lists paired up in sorted order.
pub fn total_distance(left: &[i64], right: &[i64]) -> Result<u64, PuzzleError> {
    let mut left = left.to_vec();
    let mut right = right.to_vec();
    left.sort_unstable();
    right.sort_unstable();

    left.iter().zip(&right).try_fold(0u64, |total, (l, r)| {
        total
            .checked_add(l.abs_diff(*r))
            .ok_or(PuzzleError::Overflow("total distance"))
    })
}

/// Sum of each left value times its number of occurrences on the right.
pub fn similarity_score(left: &[i64], right: &[i64]) -> Result<u64, PuzzleError> {
    let mut right_counts: FxHashMap<i64, i64> = FxHashMap::default();
    for &value in right {
        *right_counts.entry(value).or_default() += 1;
    }

    let score = left.iter().try_fold(0i64, |total, value| {
        let count = right_counts.get(value).copied().unwrap_or(0);
        value
            .checked_mul(count)
            .and_then(|term| total.checked_add(term))
            .ok_or(PuzzleError::Overflow("similarity score"))
    })?;
    Ok(score.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../../samples/day01.txt");

    #[test]
    fn test_sample_lists() {
        let (left, right) = parse(SAMPLE).unwrap();
        assert_eq!(left, [3, 4, 2, 1, 3, 3]);
        assert_eq!(right, [4, 3, 5, 3, 9, 3]);
        assert_eq!(total_distance(&left, &right).unwrap(), 11);
        assert_eq!(similarity_score(&left, &right).unwrap(), 31);
    }

    #[test]
    fn test_distance_does_not_reorder_inputs() {
        let left = vec![3, 1];
        let right = vec![1, 3];
        assert_eq!(total_distance(&left, &right).unwrap(), 0);
        assert_eq!(left, [3, 1]);
    }

    #[test]
    fn test_large_values_overflow() {
        let big = i64::MAX / 2 + 1;
        assert!(matches!(
            similarity_score(&[big], &[big, big]),
            Err(PuzzleError::Overflow(_))
        ));
        assert!(matches!(
            total_distance(&[i64::MIN, i64::MIN], &[i64::MAX, i64::MAX]),
            Err(PuzzleError::Overflow(_))
        ));
    }

    #[test]
    fn test_wrong_token_count_is_fatal() {
        let err = parse("1 2\n3 4 5\n").unwrap_err();
        assert!(matches!(err, PuzzleError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_non_numeric_is_fatal() {
        assert!(matches!(
            parse("1 x\n"),
            Err(PuzzleError::ParseInt { line: 1, .. })
        ));
    }

    #[test]
    fn test_solve_is_idempotent() {
        let first = HistorianHysteria.solve(SAMPLE).unwrap();
        let second = HistorianHysteria.solve(SAMPLE).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.values(), (11, 31));
    }
}
