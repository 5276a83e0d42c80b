//! Core Connect Four game logic: board representation, player types, and the
//! turn controller that applies column choices.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GamePhase, GameSession, MoveError, Placement};
