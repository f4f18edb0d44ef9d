//! The cell grid.
//!
//! Holds occupancy for a fixed-size rectangular board and exposes
//! bounds-checked reads and writes. Performs no validation of game
//! rules; a coordinate outside the board is an `OutOfRange` error,
//! never a rules violation.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::position::Position;

/// Error returned when a board is constructed with non-positive
/// dimensions.
#[derive(Debug, thiserror::Error)]
#[error("board dimensions must be positive, got {rows}x{cols}")]
pub struct InvalidDimensions {
    pub rows: i32,
    pub cols: i32,
}

/// Error returned when a coordinate lies outside the board.
#[derive(Debug, thiserror::Error)]
#[error("position {position} is outside the {rows}x{cols} board")]
pub struct OutOfRange {
    pub position: Position,
    pub rows: i32,
    pub cols: i32,
}

/// A rectangular grid of cells, each empty or holding a piece color.
///
/// Created once with fixed dimensions and mutated in place by the rule
/// operations; there is no resizing. Storage is row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: i32,
    cols: i32,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Creates an empty board. Both dimensions must be positive.
    pub fn new(rows: i32, cols: i32) -> Result<Board, InvalidDimensions> {
        if rows <= 0 || cols <= 0 {
            return Err(InvalidDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Returns whether the position lies on the board.
    pub fn in_bounds(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && position.row < self.rows
            && position.col < self.cols
    }

    fn index(&self, position: Position) -> Result<usize, OutOfRange> {
        if !self.in_bounds(position) {
            return Err(OutOfRange {
                position,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(position.row as usize * self.cols as usize + position.col as usize)
    }

    /// Returns the occupant at `position`: a color, or `None` for an
    /// empty cell.
    pub fn get(&self, position: Position) -> Result<Option<Color>, OutOfRange> {
        let idx = self.index(position)?;
        Ok(self.cells[idx])
    }

    /// Overwrites the cell at `position`.
    pub fn set(&mut self, position: Position, occupant: Option<Color>) -> Result<(), OutOfRange> {
        let idx = self.index(position)?;
        self.cells[idx] = occupant;
        Ok(())
    }

    /// Returns whether the cell at `position` is empty.
    pub fn is_empty(&self, position: Position) -> Result<bool, OutOfRange> {
        Ok(self.get(position)?.is_none())
    }

    /// Returns the number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterates every position on the board in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Iterates every occupied cell with its color, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Color)> + '_ {
        let cols = self.cols as usize;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|color| (Position::new((idx / cols) as i32, (idx % cols) as i32), color))
        })
    }
}
