//! Plain (non-capturing) moves.
//!
//! A plain move shifts a piece one diagonal step onto an empty cell,
//! and is refused outright while any piece of the moving color has a
//! capture available.

use crate::board::{Board, Color, OutOfRange, Position, DIAGONAL_STEPS};

use super::capture::must_capture;

/// Errors raised by plain-move validation.
#[derive(Debug, thiserror::Error)]
pub enum MoveError {
    #[error("nothing to move at {0}")]
    NothingToMove(Position),

    #[error("target cell {0} is already occupied")]
    DestinationOccupied(Position),

    #[error("piece at {from} can only move one diagonal step, not to {to}")]
    NotDiagonalStep { from: Position, to: Position },

    #[error("a capture is available for {0:?} and must be taken first")]
    CaptureMandatory(Color),

    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
}

/// Checks every precondition of a plain move without touching the
/// board. Returns the moving color on success.
fn validate_move(board: &Board, start: Position, target: Position) -> Result<Color, MoveError> {
    let color = board
        .get(start)?
        .ok_or(MoveError::NothingToMove(start))?;
    if !board.is_empty(target)? {
        return Err(MoveError::DestinationOccupied(target));
    }
    if start.step_to(target).is_none() {
        return Err(MoveError::NotDiagonalStep {
            from: start,
            to: target,
        });
    }
    if must_capture(board, color) {
        return Err(MoveError::CaptureMandatory(color));
    }
    Ok(color)
}

/// Executes a plain one-step diagonal move.
///
/// Exactly one occupant relocates: `start` becomes empty and `target`
/// gains its color. Validation fully precedes mutation, so a failed
/// call leaves the board unchanged.
pub fn move_piece(board: &mut Board, start: Position, target: Position) -> Result<(), MoveError> {
    let color = validate_move(board, start, target)?;
    board.set(target, Some(color))?;
    board.set(start, None)?;
    Ok(())
}

/// Returns whether a plain move from `start` to `target` would be
/// accepted.
///
/// Never mutates the board; any validation failure, including an
/// out-of-bounds coordinate, reads as `false`.
pub fn is_legal_move(board: &Board, start: Position, target: Position) -> bool {
    validate_move(board, start, target).is_ok()
}

/// Returns the in-bounds cells diagonally adjacent to `position`.
pub fn diagonal_neighbors(board: &Board, position: Position) -> Vec<Position> {
    DIAGONAL_STEPS
        .into_iter()
        .map(|step| position.offset(step))
        .filter(|&neighbor| board.in_bounds(neighbor))
        .collect()
}
