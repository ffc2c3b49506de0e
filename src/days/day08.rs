//! Day 8: Resonant Collinearity.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::error::PuzzleError;
use crate::grid::{parse_chars, Grid};
use crate::{Answers, Part, Solver};

/// A signed `(row, col)` position; antinodes may fall outside the map.
type Point = (isize, isize);

pub struct ResonantCollinearity;

impl Solver for ResonantCollinearity {
    fn day(&self) -> u8 {
        8
    }

    fn title(&self) -> &'static str {
        "Resonant Collinearity"
    }

    fn solve(&self, input: &str) -> Result<Answers, PuzzleError> {
        let grid = parse_chars(input)?;
        let antennas = antennas_by_frequency(&grid);
        Ok(Answers::new(
            Part::new(
                "Unique locations with antinodes",
                doubled_distance_antinodes(&grid, &antennas).len() as u64,
            ),
            Part::new(
                "Unique locations with resonant antinodes",
                collinear_antinodes(&grid, &antennas).len() as u64,
            ),
        ))
    }
}

/// Groups antenna positions by frequency. Letters and digits are antennas,
/// every other character is empty ground.
pub fn antennas_by_frequency(grid: &Grid<char>) -> FxHashMap<char, Vec<Point>> {
    let mut antennas: FxHashMap<char, Vec<Point>> = FxHashMap::default();
    for (idx, &ch) in grid.cells().iter().enumerate() {
        if ch.is_ascii_alphanumeric() {
            let (row, col) = grid.idx_to_coord(idx);
            antennas
                .entry(ch)
                .or_default()
                .push((row as isize, col as isize));
        }
    }
    antennas
}

/// Calls `visit` with every unordered pair of same-frequency antennas.
fn for_each_pair(antennas: &FxHashMap<char, Vec<Point>>, mut visit: impl FnMut(Point, Point)) {
    for positions in antennas.values() {
        for (i, &first) in positions.iter().enumerate() {
            for &second in &positions[i + 1..] {
                visit(first, second);
            }
        }
    }
}

/// Antinodes one antenna-spacing beyond each end of every pair.
pub fn doubled_distance_antinodes(
    grid: &Grid<char>,
    antennas: &FxHashMap<char, Vec<Point>>,
) -> FxHashSet<Point> {
    let mut antinodes = FxHashSet::default();
    for_each_pair(antennas, |(r1, c1), (r2, c2)| {
        let (dr, dc) = (r2 - r1, c2 - c1);
        for (row, col) in [(r2 + dr, c2 + dc), (r1 - dr, c1 - dc)] {
            if grid.contains(row, col) {
                antinodes.insert((row, col));
            }
        }
    });
    debug!(count = antinodes.len(), "antinodes");
    antinodes
}

/// Every in-bounds cell exactly on the line through a same-frequency pair.
pub fn collinear_antinodes(
    grid: &Grid<char>,
    antennas: &FxHashMap<char, Vec<Point>>,
) -> FxHashSet<Point> {
    let mut antinodes = FxHashSet::default();
    for_each_pair(antennas, |(r1, c1), (r2, c2)| {
        // smallest lattice step along the line
        let divisor = gcd(r2 - r1, c2 - c1);
        let step = ((r2 - r1) / divisor, (c2 - c1) / divisor);

        for sign in [1, -1] {
            let (mut row, mut col) = (r1, c1);
            while grid.contains(row, col) {
                antinodes.insert((row, col));
                row += sign * step.0;
                col += sign * step.1;
            }
        }
    });
    debug!(count = antinodes.len(), "resonant antinodes");
    antinodes
}

fn gcd(a: isize, b: isize) -> isize {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../../samples/day08.txt");

    #[test]
    fn test_sample() {
        assert_eq!(
            ResonantCollinearity.solve(SAMPLE).unwrap().values(),
            (14, 34)
        );
    }

    #[test]
    fn test_t_frequency_example() {
        let map = "T.........\n\
                   ...T......\n\
                   .T........\n\
                   ..........\n\
                   ..........\n\
                   ..........\n\
                   ..........\n\
                   ..........\n\
                   ..........\n\
                   ..........";
        let grid = parse_chars(map).unwrap();
        let antennas = antennas_by_frequency(&grid);
        assert_eq!(collinear_antinodes(&grid, &antennas).len(), 9);
    }

    #[test]
    fn test_single_antenna_has_no_antinodes() {
        let grid = parse_chars("...\n.a.\n...").unwrap();
        let antennas = antennas_by_frequency(&grid);
        assert!(doubled_distance_antinodes(&grid, &antennas).is_empty());
        assert!(collinear_antinodes(&grid, &antennas).is_empty());
    }

    #[test]
    fn test_pair_antinodes() {
        let grid = parse_chars("......\n..a...\n...a..\n......").unwrap();
        let antennas = antennas_by_frequency(&grid);
        let antinodes = doubled_distance_antinodes(&grid, &antennas);
        assert_eq!(antinodes, FxHashSet::from_iter([(0, 1), (3, 4)]));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(4, -6), 2);
        assert_eq!(gcd(0, 3), 3);
    }
}
