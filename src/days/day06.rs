//! Day 6: Guard Gallivant.
//!
//! Deterministic guard simulation over a fixed map. The guard state is
//! `(cell, facing)`; each step either moves forward or, when blocked, turns
//! right in place. Since the state space is finite, a walk either leaves the
//! map or revisits a state.
//!
//! Key optimizations:
//! - Linear cell indices instead of coordinate tuples
//! - One byte per cell as a 4-bit mask of facings already seen
//! - Candidate obstructions are simulated in parallel with rayon

use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use crate::error::PuzzleError;
use crate::geometry::{offset, turn_right, Direction};
use crate::grid::Grid;
use crate::{Answers, Part, Solver};

/// Number of facings per cell; also the step cap multiplier.
const FACINGS: usize = 4;

pub struct GuardGallivant;

impl Solver for GuardGallivant {
    fn day(&self) -> u8 {
        6
    }

    fn title(&self) -> &'static str {
        "Guard Gallivant"
    }

    fn solve(&self, input: &str) -> Result<Answers, PuzzleError> {
        let map = PatrolMap::parse(input)?;
        let visited = count_visited(&map)?;
        let loops = count_loop_obstructions(&map);
        Ok(Answers::new(
            Part::new("Distinct positions visited", visited as u64),
            Part::new("Obstruction positions causing a loop", loops as u64),
        ))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Open,
    Obstacle,
}

/// The lab map plus the guard's starting state.
#[derive(Clone, Debug)]
pub struct PatrolMap {
    pub grid: Grid<Tile>,
    pub start: usize,
    pub facing: Direction,
}

impl PatrolMap {
    /// Parses a map of `.`, `#` and exactly one guard glyph (`^ > v <`).
    pub fn parse(input: &str) -> Result<Self, PuzzleError> {
        let mut start = None;
        let grid = Grid::parse(input, |ch, row, col| match ch {
            '.' => Ok(Tile::Open),
            '#' => Ok(Tile::Obstacle),
            _ => match Direction::from_glyph(ch) {
                Some(direction) => {
                    start.get_or_insert((row, col, direction));
                    Ok(Tile::Open)
                }
                None => Err(PuzzleError::UnexpectedChar { ch, row, col }),
            },
        })?;

        let (row, col, facing) = start.ok_or(PuzzleError::MissingStart)?;
        Ok(Self {
            start: grid.coord_to_idx(row, col),
            grid,
            facing,
        })
    }

    /// Step cap for a single walk: every `(cell, facing)` state once.
    pub fn max_steps(&self) -> usize {
        self.grid.area() * FACINGS
    }
}

/// How a walk ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The next step would leave the map.
    Exited,
    /// A `(cell, facing)` state repeated.
    Looped,
    /// The step cap was reached without either of the above.
    StepLimit,
}

/// Result of one simulated patrol.
pub struct Walk {
    pub outcome: Outcome,
    /// `seen[cell]` is a bitmask of the facings held while on `cell`.
    seen: Vec<u8>,
}

impl Walk {
    pub fn visited(&self, cell_index: usize) -> bool {
        self.seen[cell_index] != 0
    }

    pub fn visited_count(&self) -> usize {
        self.seen.iter().filter(|&&mask| mask != 0).count()
    }
}

/// Simulates the guard, treating `obstruction` (if any) as an extra obstacle.
pub fn walk(map: &PatrolMap, obstruction: Option<usize>, max_steps: usize) -> Walk {
    let grid = &map.grid;
    let mut seen = vec![0u8; grid.area()];
    let mut position = map.start;
    let mut facing = map.facing;
    seen[position] |= 1 << facing.index();

    for _ in 0..max_steps {
        let Some(ahead) = grid.step(position, offset(facing)) else {
            return Walk {
                outcome: Outcome::Exited,
                seen,
            };
        };

        if grid[ahead] == Tile::Obstacle || Some(ahead) == obstruction {
            facing = turn_right(facing);
        } else {
            position = ahead;
        }

        let bit = 1 << facing.index();
        if seen[position] & bit != 0 {
            return Walk {
                outcome: Outcome::Looped,
                seen,
            };
        }
        seen[position] |= bit;
    }

    Walk {
        outcome: Outcome::StepLimit,
        seen,
    }
}

/// Number of distinct cells the guard covers before leaving the map.
pub fn count_visited(map: &PatrolMap) -> Result<usize, PuzzleError> {
    let patrol = walk(map, None, map.max_steps());
    match patrol.outcome {
        Outcome::Exited => {
            debug!("visited positions:\n{}", render_visited(map, &patrol));
            Ok(patrol.visited_count())
        }
        Outcome::Looped | Outcome::StepLimit => Err(PuzzleError::GuardTrapped),
    }
}

/// Returns `true` if obstructing `cell_index` traps the guard in a loop.
pub fn causes_loop(map: &PatrolMap, cell_index: usize) -> bool {
    walk(map, Some(cell_index), map.max_steps()).outcome == Outcome::Looped
}

/// Counts open, non-start cells where a single new obstruction makes the
/// guard loop forever.
pub fn count_loop_obstructions(map: &PatrolMap) -> usize {
    let candidates: Vec<usize> = map
        .grid
        .positions(|&tile| tile == Tile::Open)
        .filter(|&cell| cell != map.start)
        .collect();

    let started = Instant::now();
    let loops = candidates
        .par_iter()
        .filter(|&&cell| causes_loop(map, cell))
        .count();

    debug!(
        tested = candidates.len(),
        loops,
        elapsed = ?started.elapsed(),
        "obstruction search finished"
    );
    loops
}

/// Draws the map with visited cells as `X`.
pub fn render_visited(map: &PatrolMap, patrol: &Walk) -> String {
    map.grid.render(|idx, tile| match tile {
        _ if patrol.visited(idx) => 'X',
        Tile::Obstacle => '#',
        Tile::Open => '.',
    })
}
