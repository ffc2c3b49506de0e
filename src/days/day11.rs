//! Day 11: Plutonian Pebbles.
//!
//! Stones never interact, so the count after `n` blinks is the sum of the
//! per-stone counts. Those are memoized by `(value, blinks remaining)` in a
//! [`StoneCache`] owned by the caller.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{parse_int, PuzzleError};
use crate::{Answers, Part, Solver};

/// Blink counts for the two parts.
pub const SHORT_BLINKS: u32 = 25;
pub const LONG_BLINKS: u32 = 75;

pub struct PlutonianPebbles;

impl Solver for PlutonianPebbles {
    fn day(&self) -> u8 {
        11
    }

    fn title(&self) -> &'static str {
        "Plutonian Pebbles"
    }

    fn solve(&self, input: &str) -> Result<Answers, PuzzleError> {
        let stones = parse(input)?;
        let mut cache = StoneCache::default();
        let short = count_stones(&stones, SHORT_BLINKS, &mut cache)?;
        let long = count_stones(&stones, LONG_BLINKS, &mut cache)?;
        debug!(entries = cache.len(), "stone cache size");

        Ok(Answers::new(
            Part::new("Stones after 25 blinks", short),
            Part::new("Stones after 75 blinks", long),
        ))
    }
}

/// Parses the space-separated stone values on the first line.
pub fn parse(input: &str) -> Result<Vec<u64>, PuzzleError> {
    let stones = input
        .lines()
        .next()
        .unwrap_or_default()
        .split_whitespace()
        .map(|token| parse_int(token, 0))
        .collect::<Result<Vec<u64>, _>>()?;
    if stones.is_empty() {
        return Err(PuzzleError::EmptyInput);
    }
    Ok(stones)
}

/// What a single stone becomes after one blink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blink {
    One(u64),
    Split(u64, u64),
}

/// Applies the blink rules to one stone, or `None` if the engraved value
/// no longer fits in a `u64`.
pub fn blink(stone: u64) -> Option<Blink> {
    if stone == 0 {
        return Some(Blink::One(1));
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        Some(Blink::Split(stone / half, stone % half))
    } else {
        stone.checked_mul(2024).map(Blink::One)
    }
}

/// Memoized stone counts keyed by `(stone, blinks remaining)`.
#[derive(Debug, Default)]
pub struct StoneCache {
    counts: FxHashMap<(u64, u32), u64>,
}

impl StoneCache {
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of stones `stone` turns into after `blinks` blinks.
    pub fn count(&mut self, stone: u64, blinks: u32) -> Result<u64, PuzzleError> {
        if blinks == 0 {
            return Ok(1);
        }
        if let Some(&known) = self.counts.get(&(stone, blinks)) {
            return Ok(known);
        }

        let total = match blink(stone).ok_or(PuzzleError::Overflow("stone value"))? {
            Blink::One(next) => self.count(next, blinks - 1)?,
            Blink::Split(left, right) => self
                .count(left, blinks - 1)?
                .checked_add(self.count(right, blinks - 1)?)
                .ok_or(PuzzleError::Overflow("stone count"))?,
        };
        self.counts.insert((stone, blinks), total);
        Ok(total)
    }
}

pub fn count_stones(
    stones: &[u64],
    blinks: u32,
    cache: &mut StoneCache,
) -> Result<u64, PuzzleError> {
    stones.iter().try_fold(0u64, |total, &stone| {
        total
            .checked_add(cache.count(stone, blinks)?)
            .ok_or(PuzzleError::Overflow("stone count"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../../samples/day11.txt");

    /// Expands every stone explicitly, for checking the memoized counts.
    fn blink_all(stones: &[u64]) -> Vec<u64> {
        stones
            .iter()
            .flat_map(|&stone| match blink(stone).unwrap() {
                Blink::One(next) => vec![next],
                Blink::Split(left, right) => vec![left, right],
            })
            .collect()
    }

    #[test]
    fn test_blink_rules() {
        assert_eq!(blink(0), Some(Blink::One(1)));
        assert_eq!(blink(1), Some(Blink::One(2024)));
        assert_eq!(blink(10), Some(Blink::Split(1, 0)));
        assert_eq!(blink(1000), Some(Blink::Split(10, 0)));
        assert_eq!(blink(99), Some(Blink::Split(9, 9)));
        assert_eq!(blink(999), Some(Blink::One(2021976)));
    }

    #[test]
    fn test_explicit_expansion() {
        assert_eq!(blink_all(&[0, 1, 10, 99, 999]), [1, 2024, 1, 0, 9, 9, 2021976]);
        assert_eq!(blink_all(&[125, 17]), [253000, 1, 7]);
    }

    #[test]
    fn test_sample_counts() {
        let stones = parse(SAMPLE).unwrap();
        let mut cache = StoneCache::default();
        assert_eq!(count_stones(&stones, 6, &mut cache).unwrap(), 22);
        assert_eq!(count_stones(&stones, 25, &mut cache).unwrap(), 55312);
    }

    #[test]
    fn test_memoized_matches_explicit() {
        let mut stones = vec![125, 17];
        for blinks in 1..=10 {
            stones = blink_all(&stones);
            let mut cache = StoneCache::default();
            assert_eq!(
                count_stones(&[125, 17], blinks, &mut cache).unwrap(),
                stones.len() as u64
            );
        }
    }

    #[test]
    fn test_caches_are_independent() {
        let mut first = StoneCache::default();
        count_stones(&[125, 17], 10, &mut first).unwrap();
        let second = StoneCache::default();
        assert!(!first.is_empty());
        assert!(second.is_empty());
    }

    #[test]
    fn test_huge_odd_stone_overflows() {
        let stone = 99_999_999_999_999_999;
        assert_eq!(blink(stone), None);

        let mut cache = StoneCache::default();
        assert!(matches!(
            count_stones(&[stone], 1, &mut cache),
            Err(PuzzleError::Overflow(_))
        ));
        assert!(matches!(
            PlutonianPebbles.solve("99999999999999999\n"),
            Err(PuzzleError::Overflow(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse("\n"), Err(PuzzleError::EmptyInput)));
    }
}
