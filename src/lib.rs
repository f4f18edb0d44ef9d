//! Draughtsman -- an English draughts rule engine.
//!
//! Exposes the board representation, the rule modules, and the game
//! facade for use by integration tests and embedding callers.

pub mod board;
pub mod game;
pub mod rules;
