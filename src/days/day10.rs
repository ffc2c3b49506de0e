//! Day 10: Hoof It.
//!
//! Hiking trails climb from height 0 to height 9 one unit per orthogonal
//! step. Heights strictly increase along a trail, so every search below is
//! finite without any cycle handling beyond the per-path check.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::PuzzleError;
use crate::geometry::ORTHOGONAL;
use crate::grid::Grid;
use crate::{Answers, Part, Solver};

const TRAILHEAD: u8 = 0;
const SUMMIT: u8 = 9;

/// Height map; `None` marks impassable tiles.
pub type HeightMap = Grid<Option<u8>>;

pub struct HoofIt;

impl Solver for HoofIt {
    fn day(&self) -> u8 {
        10
    }

    fn title(&self) -> &'static str {
        "Hoof It"
    }

    fn solve(&self, input: &str) -> Result<Answers, PuzzleError> {
        let map = parse(input)?;
        Ok(Answers::new(
            Part::new("Sum of trailhead scores", total_score(&map) as u64),
            Part::new("Sum of trailhead ratings", total_rating(&map) as u64),
        ))
    }
}

/// Parses digits as heights and `.` as impassable.
pub fn parse(input: &str) -> Result<HeightMap, PuzzleError> {
    Grid::parse(input, |ch, row, col| match ch {
        '.' => Ok(None),
        _ => ch
            .to_digit(10)
            .map(|height| Some(height as u8))
            .ok_or(PuzzleError::UnexpectedChar { ch, row, col }),
    })
}

pub fn trailheads(map: &HeightMap) -> Vec<usize> {
    map.positions(|&height| height == Some(TRAILHEAD)).collect()
}

/// Neighbours of `cell` exactly one unit higher.
fn uphill(map: &HeightMap, cell: usize) -> impl Iterator<Item = usize> + '_ {
    let next_height = map[cell].map(|height| height + 1);
    ORTHOGONAL
        .into_iter()
        .filter_map(move |offset| map.step(cell, offset))
        .filter(move |&neighbour| next_height.is_some() && map[neighbour] == next_height)
}

/// Number of distinct summits reachable from `start`.
pub fn score(map: &HeightMap, start: usize) -> usize {
    let mut visited = vec![false; map.area()];
    let mut queue = VecDeque::from([start]);
    visited[start] = true;
    let mut summits = 0;

    while let Some(cell) = queue.pop_front() {
        if map[cell] == Some(SUMMIT) {
            summits += 1;
            continue;
        }
        for next in uphill(map, cell) {
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }
    summits
}

/// Number of distinct trails from `start` to any summit.
pub fn rating(map: &HeightMap, start: usize) -> usize {
    let mut queue = VecDeque::from([vec![start]]);
    let mut trails = 0;

    while let Some(path) = queue.pop_front() {
        let Some(&cell) = path.last() else { continue };
        if map[cell] == Some(SUMMIT) {
            trails += 1;
            continue;
        }
        for next in uphill(map, cell) {
            if !path.contains(&next) {
                let mut extended = Vec::with_capacity(path.len() + 1);
                extended.extend_from_slice(&path);
                extended.push(next);
                queue.push_back(extended);
            }
        }
    }
    trails
}

pub fn total_score(map: &HeightMap) -> usize {
    trailheads(map)
        .into_iter()
        .map(|start| {
            let score = score(map, start);
            debug!(trailhead = ?map.idx_to_coord(start), score, "trailhead score");
            score
        })
        .sum()
}

pub fn total_rating(map: &HeightMap) -> usize {
    trailheads(map)
        .into_iter()
        .map(|start| {
            let rating = rating(map, start);
            debug!(trailhead = ?map.idx_to_coord(start), rating, "trailhead rating");
            rating
        })
        .sum()
}
