//! Plain-text front end: replays a list of column choices and prints what the
//! rules engine reports for each one.

use std::io::{self, Write};

use crate::game::{GameConfig, GameState};

/// Apply `moves` in order to a fresh game, writing one line per move followed
/// by the final board and status. Rejected moves are reported and skipped.
pub fn run_moves<W: Write>(config: &GameConfig, moves: &[i64], out: &mut W) -> io::Result<GameState> {
    let mut state = GameState::with_config(config);

    for (turn, &column) in moves.iter().enumerate() {
        let player = state.active_player();
        match state.apply_move(column) {
            Ok(outcome) => writeln!(
                out,
                "{:>3}. {player} -> column {column}: row {}, {}",
                turn + 1,
                outcome.row,
                outcome.status
            )?,
            Err(err) => writeln!(
                out,
                "{:>3}. {player} -> column {column}: rejected: {err}",
                turn + 1
            )?,
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", state.board())?;
    writeln!(out)?;
    writeln!(out, "Result: {}", state.status())?;
    Ok(state)
}
