//! Day 7: Bridge Repair.
//!
//! Each equation lists a target and operands evaluated strictly left to
//! right. Operators are searched exhaustively with an explicit stack; a
//! branch whose value overflows `u64` is dropped since it can never come
//! back down to the target.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::{parse_int, PuzzleError};
use crate::input::lines;
use crate::{Answers, Part, Solver};

pub struct BridgeRepair;

impl Solver for BridgeRepair {
    fn day(&self) -> u8 {
        7
    }

    fn title(&self) -> &'static str {
        "Bridge Repair"
    }

    fn solve(&self, input: &str) -> Result<Answers, PuzzleError> {
        let equations = parse(input)?;
        Ok(Answers::new(
            Part::new(
                "Total calibration result",
                calibration_total(&equations, &[Operator::Add, Operator::Mul]),
            ),
            Part::new(
                "Total calibration result with concatenation",
                calibration_total(&equations, &Operator::ALL),
            ),
        ))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Mul,
    Concat,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Mul, Operator::Concat];

    /// Applies the operator, or `None` on overflow.
    #[inline]
    pub fn apply(self, lhs: u64, rhs: u64) -> Option<u64> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Mul => lhs.checked_mul(rhs),
            Operator::Concat => {
                let shift = 10u64.checked_pow(rhs.checked_ilog10().unwrap_or(0) + 1)?;
                lhs.checked_mul(shift)?.checked_add(rhs)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equation {
    pub target: u64,
    pub operands: Vec<u64>,
}

impl Equation {
    /// Returns `true` if some operator assignment reaches the target.
    pub fn is_solvable(&self, operators: &[Operator]) -> bool {
        let Some((&first, rest)) = self.operands.split_first() else {
            return false;
        };

        // (value so far, index of next operand)
        let mut stack = vec![(first, 0usize)];
        while let Some((value, next)) = stack.pop() {
            let Some(&operand) = rest.get(next) else {
                if value == self.target {
                    return true;
                }
                continue;
            };
            for operator in operators {
                if let Some(combined) = operator.apply(value, operand) {
                    stack.push((combined, next + 1));
                }
            }
        }
        false
    }
}

/// Parses lines of the form `target: a b c`.
pub fn parse(input: &str) -> Result<Vec<Equation>, PuzzleError> {
    lines(input)
        .map(|(line_index, line)| {
            let Some((target, operands)) = line.split_once(':') else {
                return Err(PuzzleError::malformed(line_index, "missing `:`"));
            };
            let operands = operands
                .split_whitespace()
                .map(|token| parse_int(token, line_index))
                .collect::<Result<Vec<u64>, _>>()?;
            if operands.is_empty() {
                return Err(PuzzleError::malformed(line_index, "no operands"));
            }
            Ok(Equation {
                target: parse_int(target, line_index)?,
                operands,
            })
        })
        .collect()
}

/// Sums the distinct targets of all solvable equations.
pub fn calibration_total(equations: &[Equation], operators: &[Operator]) -> u64 {
    let valid: FxHashSet<u64> = equations
        .iter()
        .filter(|equation| equation.is_solvable(operators))
        .map(|equation| equation.target)
        .collect();
    debug!(valid = valid.len(), ?operators, "solvable equations");
    valid.into_iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../../samples/day07.txt");

    #[test]
    fn test_sample() {
        assert_eq!(BridgeRepair.solve(SAMPLE).unwrap().values(), (3749, 11387));
    }

    #[test]
    fn test_concatenation() {
        assert_eq!(Operator::Concat.apply(12, 345), Some(12345));
        assert_eq!(Operator::Concat.apply(7, 0), Some(70));
        assert_eq!(Operator::Concat.apply(u64::MAX, 1), None);
    }

    #[test]
    fn test_single_equations() {
        let equations = parse("3267: 81 40 27\n83: 17 5\n156: 15 6\n").unwrap();
        let basic = [Operator::Add, Operator::Mul];
        assert!(equations[0].is_solvable(&basic));
        assert!(!equations[1].is_solvable(&Operator::ALL));
        assert!(!equations[2].is_solvable(&basic));
        assert!(equations[2].is_solvable(&Operator::ALL));
    }

    #[test]
    fn test_duplicate_targets_count_once() {
        let equations = parse("10: 5 5\n10: 2 5\n").unwrap();
        assert_eq!(calibration_total(&equations, &Operator::ALL), 10);
    }

    #[test]
    fn test_missing_colon_is_fatal() {
        assert!(matches!(
            parse("190 10 19\n"),
            Err(PuzzleError::Malformed { line: 1, .. })
        ));
    }
}
