//! Day 3: Mull It Over.
//!
//! Scans corrupted memory for `mul(a,b)` instructions, optionally honouring
//! the `do()` / `don't()` toggles that appear between them.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{parse_int, PuzzleError};
use crate::{Answers, Part, Solver};

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mul\(\s*(\d+)\s*,\s*(\d+)\s*\)|do\(\)|don't\(\)").expect("pattern is valid")
});

pub struct MullItOver;

impl Solver for MullItOver {
    fn day(&self) -> u8 {
        3
    }

    fn title(&self) -> &'static str {
        "Mull It Over"
    }

    fn solve(&self, input: &str) -> Result<Answers, PuzzleError> {
        let memory = input.trim();
        Ok(Answers::new(
            Part::new("Total sum of multiplications", sum_products(memory)?),
            Part::new(
                "Total sum of enabled multiplications",
                sum_enabled_products(memory)?,
            ),
        ))
    }
}

/// A recognised token in corrupted memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

/// Extracts every instruction in the order it appears.
pub fn instructions(memory: &str) -> Result<Vec<Instruction>, PuzzleError> {
    INSTRUCTION
        .captures_iter(memory)
        .map(|caps| match &caps[0] {
            "do()" => Ok(Instruction::Do),
            "don't()" => Ok(Instruction::Dont),
            _ => Ok(Instruction::Mul(
                operand(memory, &caps, 1)?,
                operand(memory, &caps, 2)?,
            )),
        })
        .collect()
}

fn operand(memory: &str, caps: &Captures<'_>, group: usize) -> Result<u64, PuzzleError> {
    let start = caps.get(0).map_or(0, |m| m.start());
    let line_index = memory[..start].matches('\n').count();
    parse_int(&caps[group], line_index)
}

/// Sums every multiplication regardless of toggles.
pub fn sum_products(memory: &str) -> Result<u64, PuzzleError> {
    instructions(memory)?
        .into_iter()
        .try_fold(0, |total, instruction| match instruction {
            Instruction::Mul(a, b) => add_product(total, a, b),
            Instruction::Do | Instruction::Dont => Ok(total),
        })
}

/// Sums multiplications that occur while enabled; scanning starts enabled.
pub fn sum_enabled_products(memory: &str) -> Result<u64, PuzzleError> {
    let mut enabled = true;
    let mut total = 0;
    for instruction in instructions(memory)? {
        match instruction {
            Instruction::Do => enabled = true,
            Instruction::Dont => enabled = false,
            Instruction::Mul(a, b) if enabled => total = add_product(total, a, b)?,
            Instruction::Mul(..) => {}
        }
    }
    Ok(total)
}

/// `total + a * b`, failing instead of wrapping.
fn add_product(total: u64, a: u64, b: u64) -> Result<u64, PuzzleError> {
    a.checked_mul(b)
        .and_then(|product| total.checked_add(product))
        .ok_or(PuzzleError::Overflow("sum of products"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../../samples/day03.txt");

    #[test]
    fn test_unconditional_scan() {
        let memory = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
        assert_eq!(sum_products(memory).unwrap(), 161);
    }

    #[test]
    fn test_toggled_scan() {
        assert_eq!(sum_products(SAMPLE).unwrap(), 161);
        assert_eq!(sum_enabled_products(SAMPLE).unwrap(), 48);
    }

    #[test]
    fn test_instruction_order() {
        let found = instructions("don't()mul(1,2)do()mul( 3 , 4 )mul(5,6").unwrap();
        assert_eq!(
            found,
            [
                Instruction::Dont,
                Instruction::Mul(1, 2),
                Instruction::Do,
                Instruction::Mul(3, 4),
            ]
        );
    }

    #[test]
    fn test_oversized_operands_overflow() {
        let memory = "mul(9999999999,9999999999)";
        assert!(matches!(sum_products(memory), Err(PuzzleError::Overflow(_))));
        assert!(matches!(
            sum_enabled_products(memory),
            Err(PuzzleError::Overflow(_))
        ));
        assert!(matches!(
            sum_enabled_products("don't()mul(9999999999,9999999999)"),
            Ok(0)
        ));
    }

    #[test]
    fn test_no_instructions() {
        assert_eq!(sum_products("nothing to see").unwrap(), 0);
    }
}
