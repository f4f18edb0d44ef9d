//! Game facade.
//!
//! Owns a board and funnels the rule operations through one value,
//! addressing cells by raw row/column integers. All rules live in the
//! `rules` modules; this type only constructs positions and delegates.

use crate::board::{Board, Color, InvalidDimensions, OutOfRange, Position};
use crate::rules;
use crate::rules::{CaptureError, MoveError, PlacementError};

/// A board together with the rule operations over it.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
}

impl Game {
    /// Creates a game on an empty board of the given dimensions.
    pub fn new(rows: i32, cols: i32) -> Result<Game, InvalidDimensions> {
        Ok(Game {
            board: Board::new(rows, cols)?,
        })
    }

    /// Read access to the underlying board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Places a piece of the given color on a playable, empty cell.
    pub fn add_piece(&mut self, row: i32, col: i32, color: Color) -> Result<(), PlacementError> {
        rules::place_piece(&mut self.board, Position::new(row, col), color)
    }

    /// Removes the piece at the cell, if any.
    pub fn remove_piece(&mut self, row: i32, col: i32) -> Result<(), OutOfRange> {
        rules::remove_piece(&mut self.board, Position::new(row, col))
    }

    /// Clears the whole board.
    pub fn remove_all_pieces(&mut self) -> Result<(), OutOfRange> {
        rules::remove_all_pieces(&mut self.board)
    }

    /// Makes a plain one-step diagonal move. Refused while the moving
    /// color has any capture available.
    pub fn move_piece(
        &mut self,
        row: i32,
        col: i32,
        target_row: i32,
        target_col: i32,
    ) -> Result<(), MoveError> {
        rules::move_piece(
            &mut self.board,
            Position::new(row, col),
            Position::new(target_row, target_col),
        )
    }

    /// Jumps the enemy piece at the target cell, landing two steps
    /// away and removing the jumped piece.
    pub fn attack(
        &mut self,
        row: i32,
        col: i32,
        target_row: i32,
        target_col: i32,
    ) -> Result<(), CaptureError> {
        rules::attack(
            &mut self.board,
            Position::new(row, col),
            Position::new(target_row, target_col),
        )
    }

    /// Returns whether any piece of `color` has a capture available.
    pub fn must_capture(&self, color: Color) -> bool {
        rules::must_capture(&self.board, color)
    }

    /// Returns whether a plain move would be accepted, without
    /// mutating the board.
    pub fn is_legal_move(&self, row: i32, col: i32, target_row: i32, target_col: i32) -> bool {
        rules::is_legal_move(
            &self.board,
            Position::new(row, col),
            Position::new(target_row, target_col),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_has_empty_board() {
        let game = Game::new(8, 8).unwrap();
        assert_eq!(game.board().piece_count(), 0);
    }

    #[test]
    fn new_game_rejects_bad_dimensions() {
        assert!(Game::new(0, 8).is_err());
        assert!(Game::new(8, -1).is_err());
    }

    #[test]
    fn add_and_read_back() {
        let mut game = Game::new(8, 8).unwrap();
        game.add_piece(1, 1, Color::White).unwrap();
        assert_eq!(
            game.board().get(Position::new(1, 1)).unwrap(),
            Some(Color::White)
        );
    }

    #[test]
    fn facade_delegates_move_and_attack() {
        let mut game = Game::new(8, 8).unwrap();
        game.add_piece(1, 1, Color::White).unwrap();
        game.move_piece(1, 1, 2, 2).unwrap();

        game.add_piece(3, 3, Color::Black).unwrap();
        game.attack(2, 2, 3, 3).unwrap();
        assert_eq!(
            game.board().get(Position::new(4, 4)).unwrap(),
            Some(Color::White)
        );
        assert_eq!(game.board().piece_count(), 1);
    }

    #[test]
    fn remove_all_then_board_is_empty() {
        let mut game = Game::new(8, 8).unwrap();
        game.add_piece(1, 1, Color::White).unwrap();
        game.add_piece(2, 2, Color::Black).unwrap();
        game.remove_all_pieces().unwrap();
        assert_eq!(game.board().piece_count(), 0);
    }

    #[test]
    fn must_capture_visible_through_facade() {
        let mut game = Game::new(8, 8).unwrap();
        game.add_piece(1, 1, Color::White).unwrap();
        game.add_piece(2, 2, Color::Black).unwrap();
        assert!(game.must_capture(Color::White));
        assert!(!game.is_legal_move(1, 1, 0, 0));
    }
}
