//! Core Connect Four rules: board representation, player types, win
//! detection, and the game state machine.

mod board;
mod outcome;
mod player;
mod state;

pub use board::{Board, Cell, Position, CONNECT, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};
pub use outcome::{find_winning_line, find_winning_line_through, WinCheck, WinningLine};
pub use player::Player;
pub use state::{GameConfig, GameState, MoveOutcome, Status};

pub use crate::error::MoveError;

/// Start a standard 7x6 game with Player One to move.
pub fn new_game() -> GameState {
    GameState::new()
}
