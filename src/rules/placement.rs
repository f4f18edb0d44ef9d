//! Piece placement and removal.
//!
//! Pieces sit only on the playable (dark) cells of the checkered
//! coloring, fixed by coordinate-sum parity. Removal carries no rules:
//! clearing an empty cell is a no-op.

use crate::board::{Board, Color, OutOfRange, Position};

/// Errors raised by piece placement.
#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    #[error("cell {0} is not playable")]
    NotPlayable(Position),

    #[error("cell {0} is already occupied")]
    Occupied(Position),

    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
}

/// Returns whether pieces may legally sit on the cell.
///
/// Playable cells are the dark cells of the standard checkered
/// coloring: both coordinates even or both odd, i.e. an even
/// coordinate sum. The convention is independent of board size.
pub fn is_playable_cell(position: Position) -> bool {
    (position.row + position.col) % 2 == 0
}

/// Places a piece of the given color.
///
/// The cell must be playable and empty. On success exactly one cell is
/// written; on failure the board is unchanged.
pub fn place_piece(board: &mut Board, position: Position, color: Color) -> Result<(), PlacementError> {
    if !is_playable_cell(position) {
        return Err(PlacementError::NotPlayable(position));
    }
    if !board.is_empty(position)? {
        return Err(PlacementError::Occupied(position));
    }
    board.set(position, Some(color))?;
    Ok(())
}

/// Removes the piece at `position`, if any.
///
/// Clearing an already-empty cell is a no-op, not an error.
pub fn remove_piece(board: &mut Board, position: Position) -> Result<(), OutOfRange> {
    board.set(position, None)
}

/// Clears every cell on the board.
pub fn remove_all_pieces(board: &mut Board) -> Result<(), OutOfRange> {
    for position in board.positions() {
        board.set(position, None)?;
    }
    Ok(())
}
