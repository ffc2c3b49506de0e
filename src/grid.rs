//! Fixed-width 2D grid shared by the map-based puzzles.
//!
//! Cells are stored row-major in a flat `Vec`, so a cell is identified either
//! by `(row, col)` or by its linear index `row * width + col`. Hot loops work
//! on linear indices and convert back only for display.

use std::ops::{Index, IndexMut};

use crate::error::PuzzleError;
use crate::geometry::Offset;

/// A rectangular grid of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Parses a rectangular block of text, converting each character with
    /// `parse_cell(ch, row, col)`.
    ///
    /// Trailing blank lines are ignored. Rows of differing width are an error.
    pub fn parse<F>(input: &str, mut parse_cell: F) -> Result<Self, PuzzleError>
    where
        F: FnMut(char, usize, usize) -> Result<T, PuzzleError>,
    {
        let mut width = 0;
        let mut height = 0;
        let mut cells = Vec::with_capacity(input.len());

        for (row, line) in input.trim_end().lines().enumerate() {
            let before = cells.len();
            for (col, ch) in line.chars().enumerate() {
                cells.push(parse_cell(ch, row, col)?);
            }
            let found = cells.len() - before;

            if row == 0 {
                width = found;
            } else if found != width {
                return Err(PuzzleError::RaggedGrid {
                    row: row + 1,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }

        if width == 0 {
            return Err(PuzzleError::EmptyInput);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline(always)]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Converts `(row, col)` to a linear cell index.
    #[inline(always)]
    pub fn coord_to_idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Converts a linear cell index to `(row, col)`.
    #[inline(always)]
    pub fn idx_to_coord(&self, cell_index: usize) -> (usize, usize) {
        (cell_index / self.width, cell_index % self.width)
    }

    /// Returns `true` if the signed coordinate lies inside the grid.
    #[inline(always)]
    pub fn contains(&self, row: isize, col: isize) -> bool {
        (0..self.height as isize).contains(&row) && (0..self.width as isize).contains(&col)
    }

    /// Moves one step from `cell_index` by `offset`, or `None` when the step
    /// would leave the grid.
    #[inline]
    pub fn step(&self, cell_index: usize, (dr, dc): Offset) -> Option<usize> {
        let (row, col) = self.idx_to_coord(cell_index);
        let next_row = row as isize + dr;
        let next_col = col as isize + dc;
        self.contains(next_row, next_col)
            .then(|| self.coord_to_idx(next_row as usize, next_col as usize))
    }

    /// Cell at a signed coordinate, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, row: isize, col: isize) -> Option<&T> {
        self.contains(row, col)
            .then(|| &self.cells[self.coord_to_idx(row as usize, col as usize)])
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Linear indices of every cell matching `predicate`.
    pub fn positions<'a, P>(&'a self, mut predicate: P) -> impl Iterator<Item = usize> + 'a
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| predicate(cell).then_some(idx))
    }

    /// Formats the grid one row per line, choosing each glyph with
    /// `glyph(cell_index, cell)`.
    ///
    /// No trailing newline is emitted.
    pub fn render<F>(&self, mut glyph: F) -> String
    where
        F: FnMut(usize, &T) -> char,
    {
        let mut output = String::with_capacity(self.area() + self.height);
        for (idx, cell) in self.cells.iter().enumerate() {
            if idx > 0 && idx % self.width == 0 {
                output.push('\n');
            }
            output.push(glyph(idx, cell));
        }
        output
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, cell_index: usize) -> &T {
        &self.cells[cell_index]
    }
}

impl<T> IndexMut<usize> for Grid<T> {
    #[inline(always)]
    fn index_mut(&mut self, cell_index: usize) -> &mut T {
        &mut self.cells[cell_index]
    }
}

/// Parses a grid of raw characters without any validation.
pub fn parse_chars(input: &str) -> Result<Grid<char>, PuzzleError> {
    Grid::parse(input, |ch, _, _| Ok(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_conversion_roundtrip() {
        let grid = parse_chars("abc\ndef\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        for idx in 0..grid.area() {
            let (row, col) = grid.idx_to_coord(idx);
            assert!(row < 2 && col < 3, "idx {idx} produced ({row},{col})");
            assert_eq!(grid.coord_to_idx(row, col), idx);
        }
        assert_eq!(grid[grid.coord_to_idx(1, 2)], 'f');
    }

    #[test]
    fn test_step_stops_at_edges() {
        let grid = parse_chars("ab\ncd").unwrap();
        assert_eq!(grid.step(0, (0, 1)), Some(1));
        assert_eq!(grid.step(0, (1, 1)), Some(3));
        assert_eq!(grid.step(0, (-1, 0)), None);
        assert_eq!(grid.step(1, (0, 1)), None);
        assert_eq!(grid.step(3, (1, 0)), None);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = parse_chars("ab\ncd").unwrap();
        assert_eq!(grid.get(1, 0), Some(&'c'));
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let err = parse_chars("abc\nde\n").unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::RaggedGrid {
                row: 2,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(parse_chars("\n\n"), Err(PuzzleError::EmptyInput)));
    }

    #[test]
    fn test_render_roundtrips_text() {
        let text = "#.#\n.#.";
        let grid = parse_chars(text).unwrap();
        assert_eq!(grid.render(|_, &ch| ch), text);
        assert_eq!(grid.positions(|&ch| ch == '#').collect::<Vec<_>>(), [0, 2, 4]);
    }
}
