//! Day 5: Print Queue.
//!
//! Page ordering rules `a|b` say page `a` must be printed before page `b`
//! whenever both appear in an update. Incorrect updates are repaired with a
//! topological sort restricted to the pages of that update.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use crate::error::{parse_int, PuzzleError};
use crate::{Answers, Part, Solver};

/// Largest accepted page id; bounds the per-page colour array in [`reorder`].
pub const MAX_PAGE: u32 = 9_999;

/// For each page, the set of pages that must come after it.
pub type Rules = FxHashMap<u32, FxHashSet<u32>>;

pub struct PrintQueue;

impl Solver for PrintQueue {
    fn day(&self) -> u8 {
        5
    }

    fn title(&self) -> &'static str {
        "Print Queue"
    }

    fn solve(&self, input: &str) -> Result<Answers, PuzzleError> {
        let (rules, updates) = parse(input)?;

        let mut ordered_sum = 0;
        let mut reordered_sum = 0;
        for update in &updates {
            if is_ordered(update, &rules) {
                debug!(?update, middle = middle_page(update), "valid update");
                ordered_sum += middle_page(update);
            } else {
                let reordered = reorder(update, &rules);
                debug!(?update, ?reordered, middle = middle_page(&reordered), "reordered update");
                reordered_sum += middle_page(&reordered);
            }
        }

        Ok(Answers::new(
            Part::new(
                "Sum of middle pages from correctly ordered updates",
                ordered_sum,
            ),
            Part::new(
                "Sum of middle pages from reordered invalid updates",
                reordered_sum,
            ),
        ))
    }
}

/// Parses the rule section and the update section, separated by a blank line.
pub fn parse(input: &str) -> Result<(Rules, Vec<Vec<u32>>), PuzzleError> {
    let mut rules = Rules::default();
    let mut updates = Vec::new();
    let mut in_updates = false;

    for (line_index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            // the first blank line after the rules starts the update section
            in_updates |= !rules.is_empty();
            continue;
        }

        if in_updates {
            let update = line
                .split(',')
                .map(|token| parse_page(token, line_index))
                .collect::<Result<Vec<u32>, _>>()?;
            updates.push(update);
        } else {
            let Some((before, after)) = line.split_once('|') else {
                return Err(PuzzleError::malformed(line_index, "expected a rule `a|b`"));
            };
            rules
                .entry(parse_page(before, line_index)?)
                .or_default()
                .insert(parse_page(after, line_index)?);
        }
    }

    if rules.is_empty() && updates.is_empty() {
        return Err(PuzzleError::EmptyInput);
    }

    Ok((rules, updates))
}

fn parse_page(token: &str, line_index: usize) -> Result<u32, PuzzleError> {
    let page = parse_int(token, line_index)?;
    if page > MAX_PAGE {
        return Err(PuzzleError::malformed(
            line_index,
            format!("page {page} exceeds {MAX_PAGE}"),
        ));
    }
    Ok(page)
}

/// Returns `true` if no page appears after a page that must follow it.
pub fn is_ordered(update: &[u32], rules: &Rules) -> bool {
    let positions: FxHashMap<u32, usize> = update
        .iter()
        .enumerate()
        .map(|(i, &page)| (page, i))
        .collect();

    update.iter().enumerate().all(|(i, page)| {
        rules.get(page).is_none_or(|followers| {
            followers
                .iter()
                .all(|after| positions.get(after).is_none_or(|&pos| pos > i))
        })
    })
}

/// Middle page of an update (the later one for even lengths).
///
/// The middle of an odd-length update does not depend on whether it is read
/// forwards or backwards; for even lengths it does.
pub fn middle_page(update: &[u32]) -> u64 {
    update.get(update.len() / 2).map_or(0, |&page| u64::from(page))
}

/// Visit state for the depth-first topological sort.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Colour {
    Unvisited,
    InProgress,
    Done,
}

/// Reorders an update so every applicable rule holds.
///
/// Iterative depth-first search over "must come before" edges, emitting a
/// page once all its predecessors are emitted. An edge back into a page that
/// is still in progress (a rule cycle) is skipped. Page ids must not exceed
/// [`MAX_PAGE`].
pub fn reorder(update: &[u32], rules: &Rules) -> Vec<u32> {
    let max_page = update.iter().copied().max().unwrap_or(0) as usize;
    let mut colour = vec![Colour::Unvisited; max_page + 1];

    // predecessors of each page, restricted to this update, in update order
    let predecessors: FxHashMap<u32, Vec<u32>> = update
        .iter()
        .map(|&page| {
            let before = update
                .iter()
                .copied()
                .filter(|other| rules.get(other).is_some_and(|after| after.contains(&page)))
                .collect();
            (page, before)
        })
        .collect();

    let mut ordered = Vec::with_capacity(update.len());
    let mut stack: Vec<(u32, usize)> = Vec::new();

    for &root in update {
        if colour[root as usize] != Colour::Unvisited {
            continue;
        }
        colour[root as usize] = Colour::InProgress;
        stack.push((root, 0));

        while let Some(top) = stack.len().checked_sub(1) {
            let (page, next) = stack[top];
            let before = &predecessors[&page];

            if let Some(&pred) = before.get(next) {
                stack[top].1 += 1;
                match colour[pred as usize] {
                    Colour::Unvisited => {
                        colour[pred as usize] = Colour::InProgress;
                        stack.push((pred, 0));
                    }
                    Colour::InProgress => {
                        warn!(page, pred, "ordering rules form a cycle, ignoring edge");
                    }
                    Colour::Done => {}
                }
            } else {
                colour[page as usize] = Colour::Done;
                ordered.push(page);
                stack.pop();
            }
        }
    }

    ordered
}
