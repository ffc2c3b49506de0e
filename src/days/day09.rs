//! Day 9: Disk Fragmenter.
//!
//! The dense disk map alternates file and free-space lengths. It is expanded
//! into one slot per block, compacted in place, then checksummed.

use std::fmt::Write as _;

use tracing::debug;

use crate::error::PuzzleError;
use crate::{Answers, Part, Solver};

/// One disk block: the id of the file stored there, or `None` when free.
pub type Slot = Option<u32>;

pub struct DiskFragmenter;

impl Solver for DiskFragmenter {
    fn day(&self) -> u8 {
        9
    }

    fn title(&self) -> &'static str {
        "Disk Fragmenter"
    }

    fn solve(&self, input: &str) -> Result<Answers, PuzzleError> {
        let blocks = expand(&parse(input)?);

        let mut by_block = blocks.clone();
        compact_blocks(&mut by_block);
        let mut by_file = blocks;
        compact_files(&mut by_file);

        Ok(Answers::new(
            Part::new("Filesystem checksum", checksum(&by_block)),
            Part::new("Filesystem checksum moving whole files", checksum(&by_file)),
        ))
    }
}

/// Parses the single line of digits into segment lengths.
pub fn parse(input: &str) -> Result<Vec<u8>, PuzzleError> {
    let line = input.trim();
    if line.is_empty() {
        return Err(PuzzleError::EmptyInput);
    }
    line.chars()
        .enumerate()
        .map(|(col, ch)| {
            ch.to_digit(10)
                .map(|digit| digit as u8)
                .ok_or(PuzzleError::UnexpectedChar { ch, row: 0, col })
        })
        .collect()
}

/// Expands segment lengths into a slot per block; even segments are files
/// with ids 0, 1, 2, ... and odd segments are free space.
pub fn expand(lengths: &[u8]) -> Vec<Slot> {
    let mut blocks = Vec::with_capacity(lengths.iter().map(|&len| len as usize).sum());
    for (segment, &length) in lengths.iter().enumerate() {
        let slot = (segment % 2 == 0).then_some((segment / 2) as u32);
        blocks.extend(std::iter::repeat(slot).take(length as usize));
    }
    blocks
}

/// Moves single blocks from the end of the disk into the leftmost gap until
/// no free slot lies before an occupied one.
pub fn compact_blocks(blocks: &mut [Slot]) {
    if blocks.is_empty() {
        return;
    }
    let mut left = 0;
    let mut right = blocks.len() - 1;

    loop {
        while left < right && blocks[left].is_some() {
            left += 1;
        }
        while left < right && blocks[right].is_none() {
            right -= 1;
        }
        if left >= right {
            break;
        }
        blocks.swap(left, right);
    }
    debug!("compacted by block: {}", render(blocks));
}

/// Moves each whole file, in decreasing id order, into the leftmost free
/// run before it that is large enough. Each file moves at most once.
pub fn compact_files(blocks: &mut [Slot]) {
    // (start, length) of every file, indexed by id
    let mut files: Vec<(usize, usize)> = Vec::new();
    for (position, slot) in blocks.iter().enumerate() {
        let Some(id) = *slot else { continue };
        let id = id as usize;
        // zero-length files never appear on disk and keep an empty entry
        while files.len() <= id {
            files.push((position, 0));
        }
        files[id].1 += 1;
    }

    for (id, &(start, length)) in files.iter().enumerate().rev() {
        let Some(target) = find_free_run(blocks, start, length) else {
            continue;
        };
        for offset in 0..length {
            blocks[target + offset] = Some(id as u32);
            blocks[start + offset] = None;
        }
    }
    debug!("compacted by file: {}", render(blocks));
}

/// Leftmost run of at least `length` free slots ending before `limit`.
fn find_free_run(blocks: &[Slot], limit: usize, length: usize) -> Option<usize> {
    let mut run_start = 0;
    let mut run_length = 0;
    for (position, slot) in blocks[..limit].iter().enumerate() {
        if slot.is_some() {
            run_length = 0;
            continue;
        }
        if run_length == 0 {
            run_start = position;
        }
        run_length += 1;
        if run_length == length {
            return Some(run_start);
        }
    }
    None
}

/// Sum of position times file id over occupied slots.
pub fn checksum(blocks: &[Slot]) -> u64 {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(position, slot)| slot.map(|id| position as u64 * u64::from(id)))
        .sum()
}

/// Formats the block map, `.` for free slots and the file id otherwise.
pub fn render(blocks: &[Slot]) -> String {
    let mut output = String::with_capacity(blocks.len());
    for slot in blocks {
        match slot {
            Some(id) => {
                let _ = write!(output, "{id}");
            }
            None => output.push('.'),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../../samples/day09.txt");

    fn occupied(blocks: &[Slot]) -> usize {
        blocks.iter().filter(|slot| slot.is_some()).count()
    }

    #[test]
    fn test_sample() {
        assert_eq!(DiskFragmenter.solve(SAMPLE).unwrap().values(), (1928, 2858));
    }

    #[test]
    fn test_expand_and_compact_small_map() {
        let mut blocks = expand(&parse("12345").unwrap());
        assert_eq!(render(&blocks), "0..111....22222");
        compact_blocks(&mut blocks);
        assert_eq!(render(&blocks), "022111222......");
    }

    #[test]
    fn test_compaction_renders() {
        let blocks = expand(&parse(SAMPLE).unwrap());
        assert_eq!(render(&blocks), "00...111...2...333.44.5555.6666.777.888899");

        let mut by_block = blocks.clone();
        compact_blocks(&mut by_block);
        assert_eq!(render(&by_block), "0099811188827773336446555566..............");

        let mut by_file = blocks;
        compact_files(&mut by_file);
        assert_eq!(render(&by_file), "00992111777.44.333....5555.6666.....8888..");
    }

    #[test]
    fn test_compaction_preserves_occupied_slots() {
        let blocks = expand(&parse(SAMPLE).unwrap());
        let before = occupied(&blocks);

        let mut by_block = blocks.clone();
        compact_blocks(&mut by_block);
        assert_eq!(occupied(&by_block), before);

        let mut by_file = blocks;
        compact_files(&mut by_file);
        assert_eq!(occupied(&by_file), before);
    }

    #[test]
    fn test_non_digit_is_fatal() {
        assert!(matches!(
            parse("12a4"),
            Err(PuzzleError::UnexpectedChar {
                ch: 'a',
                row: 0,
                col: 2
            })
        ));
    }
}
