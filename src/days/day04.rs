//! Day 4: Ceres Search.

use crate::error::PuzzleError;
use crate::geometry::ALL_EIGHT;
use crate::grid::{parse_chars, Grid};
use crate::{Answers, Part, Solver};

const WORD: [char; 4] = ['X', 'M', 'A', 'S'];

pub struct CeresSearch;

impl Solver for CeresSearch {
    fn day(&self) -> u8 {
        4
    }

    fn title(&self) -> &'static str {
        "Ceres Search"
    }

    fn solve(&self, input: &str) -> Result<Answers, PuzzleError> {
        let grid = parse_chars(input)?;
        Ok(Answers::new(
            Part::new("Number of XMAS occurrences", count_xmas(&grid)),
            Part::new("Number of X-MAS patterns", count_x_mas(&grid)),
        ))
    }
}

/// Counts `XMAS` spelled in any of the eight directions, overlaps included.
pub fn count_xmas(grid: &Grid<char>) -> u64 {
    let mut count = 0;
    for row in 0..grid.height() as isize {
        for col in 0..grid.width() as isize {
            for &(dr, dc) in &ALL_EIGHT {
                let spelled = WORD.iter().enumerate().all(|(i, &letter)| {
                    let i = i as isize;
                    grid.get(row + i * dr, col + i * dc) == Some(&letter)
                });
                if spelled {
                    count += 1;
                }
            }
        }
    }
    count
}

/// Counts `A` cells whose two diagonals both read `MAS` in either direction.
pub fn count_x_mas(grid: &Grid<char>) -> u64 {
    let is_mas = |a: Option<&char>, b: Option<&char>| {
        matches!((a, b), (Some('M'), Some('S')) | (Some('S'), Some('M')))
    };

    let mut count = 0;
    for row in 1..grid.height() as isize - 1 {
        for col in 1..grid.width() as isize - 1 {
            if grid.get(row, col) != Some(&'A') {
                continue;
            }
            let falling = is_mas(grid.get(row - 1, col - 1), grid.get(row + 1, col + 1));
            let rising = is_mas(grid.get(row - 1, col + 1), grid.get(row + 1, col - 1));
            if falling && rising {
                count += 1;
            }
        }
    }
    count
}
