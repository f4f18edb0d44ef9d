//! Cell coordinates and diagonal step vectors.
//!
//! Coordinates are signed so that off-board arithmetic (a jump endpoint
//! past the edge, a neighbor of a corner cell) stays representable and
//! is rejected by bounds checks rather than wrapping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four diagonal unit steps.
///
/// These are the only directions a piece may move or capture in: any
/// of the four diagonals, with no forward-only restriction and no
/// kings.
pub const DIAGONAL_STEPS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// A cell coordinate: zero-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Creates a position from row and column.
    pub const fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    /// Returns the position one step away in the given direction.
    pub const fn offset(self, step: (i32, i32)) -> Position {
        Position {
            row: self.row + step.0,
            col: self.col + step.1,
        }
    }

    /// Returns the diagonal unit step leading from `self` to `other`,
    /// or `None` when the two cells are not diagonally adjacent.
    pub fn step_to(self, other: Position) -> Option<(i32, i32)> {
        DIAGONAL_STEPS
            .into_iter()
            .find(|&step| self.offset(step) == other)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
