//! Property tests for the game state machine.
//!
//! Invariants covered:
//! - Gravity: no empty cell sits below an owned cell in any column.
//! - Owned cells never change once set.
//! - Rejected moves (full column, bad column, finished game) leave the state
//!   untouched.
//! - Exhaustive and anchored win checks reach the same result.
//! - The turn passes only on moves that leave the game in progress.

use connect_four::game::{Cell, GameConfig, GameState, MoveError, Status, WinCheck};
use proptest::prelude::*;

fn assert_gravity(state: &GameState) {
    let board = state.board();
    for column in 0..board.width() {
        let mut seen_piece = false;
        for row in 0..board.height() {
            match board.get(row, column) {
                Cell::Owned(_) => seen_piece = true,
                Cell::Empty => assert!(
                    !seen_piece,
                    "empty cell ({row}, {column}) below a piece"
                ),
            }
        }
    }
}

fn snapshot(state: &GameState) -> Vec<Cell> {
    let board = state.board();
    (0..board.height())
        .flat_map(|row| (0..board.width()).map(move |column| board.get(row, column)))
        .collect()
}

fn anchored() -> GameConfig {
    GameConfig {
        win_check: WinCheck::Anchored,
        ..GameConfig::default()
    }
}

proptest! {
    #[test]
    fn gravity_and_monotonic_cells_hold(columns in prop::collection::vec(-2i64..9, 0..80)) {
        let mut state = GameState::new();
        for column in columns {
            let before = snapshot(&state);
            let player = state.active_player();
            match state.apply_move(column) {
                Ok(outcome) => {
                    prop_assert_eq!(state.cell_at(outcome.row, outcome.column), Cell::Owned(player));
                    let after = snapshot(&state);
                    let changed = before.iter().zip(&after).filter(|(b, a)| b != a).count();
                    prop_assert_eq!(changed, 1);
                    for (b, a) in before.iter().zip(&after) {
                        if *b != Cell::Empty {
                            prop_assert_eq!(b, a);
                        }
                    }
                    if outcome.status == Status::InProgress {
                        prop_assert_eq!(state.active_player(), player.other());
                    } else {
                        prop_assert_eq!(state.active_player(), player);
                    }
                }
                Err(_) => {
                    prop_assert_eq!(before, snapshot(&state));
                }
            }
            assert_gravity(&state);
        }
    }

    #[test]
    fn rejected_moves_change_nothing(columns in prop::collection::vec(0usize..7, 0..60)) {
        let mut state = GameState::new();
        for column in columns {
            let before = state.clone();
            match state.apply_move(column) {
                Ok(_) => {}
                Err(MoveError::ColumnFull { column: full }) => {
                    prop_assert_eq!(full, column);
                    prop_assert!(before.board().is_column_full(column));
                    prop_assert_eq!(&state, &before);
                }
                Err(MoveError::InvalidState { status }) => {
                    prop_assert!(status.is_terminal());
                    prop_assert_eq!(&state, &before);
                }
                Err(MoveError::InvalidColumn { .. }) => {
                    prop_assert!(false, "column {} is in range", column);
                }
            }
        }
    }

    #[test]
    fn finished_games_stay_finished(columns in prop::collection::vec(0usize..7, 0..120)) {
        let mut state = GameState::new();
        for column in columns {
            let _ = state.apply_move(column);
        }
        if state.is_terminal() {
            let finished = state.clone();
            for column in 0..7usize {
                prop_assert_eq!(
                    state.apply_move(column),
                    Err(MoveError::InvalidState { status: finished.status() })
                );
            }
            prop_assert_eq!(&state, &finished);
            prop_assert!(state.legal_columns().is_empty());
        }
    }

    #[test]
    fn win_checks_agree(columns in prop::collection::vec(0usize..7, 0..60)) {
        let mut exhaustive = GameState::new();
        let mut through_last = GameState::with_config(&anchored());
        for column in columns {
            let a = exhaustive.apply_move(column).map(|o| (o.row, o.status));
            let b = through_last.apply_move(column).map(|o| (o.row, o.status));
            prop_assert_eq!(a, b);
        }
        prop_assert_eq!(exhaustive.status(), through_last.status());
        prop_assert_eq!(exhaustive.board(), through_last.board());
    }
}
