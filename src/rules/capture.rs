//! Jump captures and the mandatory-capture obligation.
//!
//! A capture is a single diagonal jump over an adjacent enemy piece
//! onto the empty cell two steps away; the jumped piece is removed.
//! Multi-hop chains are not modeled. While any piece of a color has a
//! capture available, plain moves by that color are forbidden (the
//! movement module enforces the gate through [`must_capture`]).

use crate::board::{Board, Color, OutOfRange, Position};

use super::movement::diagonal_neighbors;

/// Errors raised by capture validation.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("target {to} is not diagonally adjacent to {from}")]
    NotAdjacent { from: Position, to: Position },

    #[error("target {0} is not an enemy")]
    NotAnEnemy(Position),

    #[error("landing cell {0} is not free")]
    LandingNotFree(Position),

    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
}

/// Returns the landing cell of a jump from `aggressor` over `target`:
/// two diagonal steps from the aggressor, or `None` when the two
/// cells are not diagonally adjacent.
pub fn capture_endpoint(aggressor: Position, target: Position) -> Option<Position> {
    let step = aggressor.step_to(target)?;
    Some(target.offset(step))
}

/// Checks every precondition of a capture without touching the board.
/// Returns the attacking color and the landing cell on success.
fn validate_attack(
    board: &Board,
    aggressor: Position,
    target: Position,
) -> Result<(Color, Position), CaptureError> {
    let endpoint = capture_endpoint(aggressor, target).ok_or(CaptureError::NotAdjacent {
        from: aggressor,
        to: target,
    })?;

    // An empty aggressor, an empty target, and a same-color target all
    // mean the same thing: there is no enemy to jump.
    let attacker = board.get(aggressor)?.ok_or(CaptureError::NotAnEnemy(target))?;
    let victim = board.get(target)?.ok_or(CaptureError::NotAnEnemy(target))?;
    if victim == attacker {
        return Err(CaptureError::NotAnEnemy(target));
    }

    if !board.in_bounds(endpoint) || !board.is_empty(endpoint)? {
        return Err(CaptureError::LandingNotFree(endpoint));
    }

    Ok((attacker, endpoint))
}

/// Executes a single jump capture.
///
/// The aggressor jumps the diagonally adjacent enemy at `target` and
/// lands two steps away; the jumped piece is removed. Exactly one
/// occupant survives the three affected cells. Validation fully
/// precedes mutation, so a failed call leaves the board unchanged.
pub fn attack(board: &mut Board, aggressor: Position, target: Position) -> Result<(), CaptureError> {
    let (attacker, endpoint) = validate_attack(board, aggressor, target)?;
    board.set(endpoint, Some(attacker))?;
    board.set(aggressor, None)?;
    board.set(target, None)?;
    Ok(())
}

/// Returns the adjacent enemy pieces the piece at `position` could
/// capture right now: occupied enemy cells one diagonal step away
/// whose landing cell is on the board and free.
///
/// Returns an empty vec when `position` is empty or off the board.
pub fn capturable_enemies(board: &Board, position: Position) -> Vec<Position> {
    let attacker = match board.get(position) {
        Ok(Some(color)) => color,
        _ => return Vec::new(),
    };

    diagonal_neighbors(board, position)
        .into_iter()
        .filter(|&target| matches!(board.get(target), Ok(Some(c)) if c != attacker))
        .filter(|&target| match capture_endpoint(position, target) {
            Some(endpoint) => {
                board.in_bounds(endpoint) && matches!(board.get(endpoint), Ok(None))
            }
            None => false,
        })
        .collect()
}

/// Returns whether any piece of `color` has a capture available.
///
/// Scans the whole board on every call; the result is never cached,
/// since the board mutates between calls.
pub fn must_capture(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .filter(|&(_, piece)| piece == color)
        .any(|(position, _)| !capturable_enemies(board, position).is_empty())
}
