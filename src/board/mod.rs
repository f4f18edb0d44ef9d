//! Board representation and piece types.
//!
//! Contains the core data structures for colors, coordinates, and the
//! cell grid. This layer holds no rules knowledge; the rules modules
//! operate on it through bounds-checked accessors.

pub mod color;
pub mod grid;
pub mod position;

pub use color::Color;
pub use grid::{Board, InvalidDimensions, OutOfRange};
pub use position::{Position, DIAGONAL_STEPS};
