//! Direction and offset utilities for 2D grids.
//!
//! Offsets are `(row_delta, col_delta)` pairs: rows grow downwards and
//! columns grow to the right, matching the order lines appear in the input.

/// A `(row_delta, col_delta)` step between neighbouring cells.
pub type Offset = (isize, isize);

/// One of the four cardinal facings.
///
/// Variants are listed in clockwise order starting from `Up`; the
/// discriminant doubles as an index into per-direction tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// All four directions in clockwise order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Parses a guard glyph (`^`, `>`, `v`, `<`).
    pub const fn from_glyph(glyph: char) -> Option<Direction> {
        match glyph {
            '^' => Some(Direction::Up),
            '>' => Some(Direction::Right),
            'v' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Rotates a facing 90 degrees clockwise.
#[inline(always)]
pub const fn turn_right(direction: Direction) -> Direction {
    match direction {
        Direction::Up => Direction::Right,
        Direction::Right => Direction::Down,
        Direction::Down => Direction::Left,
        Direction::Left => Direction::Up,
    }
}

/// The unit step taken when moving in `direction`.
#[inline(always)]
pub const fn offset(direction: Direction) -> Offset {
    match direction {
        Direction::Up => (-1, 0),
        Direction::Right => (0, 1),
        Direction::Down => (1, 0),
        Direction::Left => (0, -1),
    }
}

/// Orthogonal neighbour offsets: up, down, left, right.
pub const ORTHOGONAL: [Offset; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// All eight neighbour offsets, clockwise starting from east.
pub const ALL_EIGHT: [Offset; 8] = [
    (0, 1),   // east
    (1, 1),   // south-east
    (1, 0),   // south
    (1, -1),  // south-west
    (0, -1),  // west
    (-1, -1), // north-west
    (-1, 0),  // north
    (-1, 1),  // north-east
];
