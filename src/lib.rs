//! Advent of Code 2024 solvers.
//!
//! Every day is an independent parse → transform → reduce pipeline behind the
//! [`Solver`] trait. Shared pieces are limited to grid handling, direction
//! arithmetic, input loading and the error type.

pub mod days;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod input;

use std::fmt;

pub use error::PuzzleError;

/// One day's puzzle, erased for dynamic dispatch.
///
/// The binary only ever sees `&dyn Solver`, so each day is free to use its
/// own input representation internally.
pub trait Solver: Sync {
    /// Day of the month, 1-based.
    fn day(&self) -> u8;
    fn title(&self) -> &'static str;
    /// Parses `input` and computes both parts.
    fn solve(&self, input: &str) -> Result<Answers, PuzzleError>;
}

/// A single labelled answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Part {
    pub label: &'static str,
    pub value: u64,
}

impl Part {
    pub const fn new(label: &'static str, value: u64) -> Self {
        Self { label, value }
    }
}

/// Both answers for one day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Answers {
    pub part_one: Part,
    pub part_two: Part,
}

impl Answers {
    pub const fn new(part_one: Part, part_two: Part) -> Self {
        Self { part_one, part_two }
    }

    /// The two numeric values, for comparisons in tests.
    pub const fn values(&self) -> (u64, u64) {
        (self.part_one.value, self.part_two.value)
    }
}

impl fmt::Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Part 1 - {}: {}", self.part_one.label, self.part_one.value)?;
        write!(f, "Part 2 - {}: {}", self.part_two.label, self.part_two.value)
    }
}

/// Every implemented day, in order.
pub const SOLVERS: &[&dyn Solver] = &[
    &days::day01::HistorianHysteria,
    &days::day02::RedNosedReports,
    &days::day03::MullItOver,
    &days::day04::CeresSearch,
    &days::day05::PrintQueue,
    &days::day06::GuardGallivant,
    &days::day07::BridgeRepair,
    &days::day08::ResonantCollinearity,
    &days::day09::DiskFragmenter,
    &days::day10::HoofIt,
    &days::day11::PlutonianPebbles,
];

/// Looks up the solver for `day`.
pub fn solver_for(day: u8) -> Result<&'static dyn Solver, PuzzleError> {
    SOLVERS
        .iter()
        .copied()
        .find(|solver| solver.day() == day)
        .ok_or(PuzzleError::UnknownDay(day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_ordered_and_complete() {
        let days: Vec<u8> = SOLVERS.iter().map(|solver| solver.day()).collect();
        assert_eq!(days, (1..=11).collect::<Vec<u8>>());
    }

    #[test]
    fn test_unknown_day() {
        assert!(matches!(solver_for(25), Err(PuzzleError::UnknownDay(25))));
        assert_eq!(solver_for(6).unwrap().title(), "Guard Gallivant");
    }

    #[test]
    fn test_answers_display() {
        let answers = Answers::new(Part::new("Alpha", 1), Part::new("Beta", 22));
        assert_eq!(answers.to_string(), "Part 1 - Alpha: 1\nPart 2 - Beta: 22");
    }
}
