//! Piece colors.
//!
//! A piece is identified solely by its color: two pieces of the same
//! color are indistinguishable. There is no king state and no piece
//! identity beyond the color token.

use serde::{Deserialize, Serialize};

/// The color of a piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the single-character abbreviation.
    pub const fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// Parses a color from its single-character abbreviation.
    pub fn from_code(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    /// Returns the opposing color.
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}
