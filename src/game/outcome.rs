//! Win detection.
//!
//! Two equivalent strategies are provided. [`WinCheck::Exhaustive`] tries every
//! window of four cells anchored anywhere on the board; [`WinCheck::Anchored`]
//! only walks the lines through the piece that was just placed.

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, Position, CONNECT};
use super::Player;

/// Window directions as (row step, column step): right, down, down-right,
/// down-left. Row 0 is the top, so "down" is a positive row step.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Which win-detection strategy a game uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinCheck {
    #[default]
    Exhaustive,
    Anchored,
}

/// Four aligned cells owned by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [Position; CONNECT],
}

impl WinningLine {
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}

impl WinCheck {
    /// Look for a line of `player`'s pieces after they placed a piece at `last`.
    pub fn find_win(self, board: &Board, last: Position, player: Player) -> Option<WinningLine> {
        match self {
            WinCheck::Exhaustive => find_winning_line(board, player),
            WinCheck::Anchored => find_winning_line_through(board, last, player),
        }
    }
}

fn owned_by(board: &Board, row: isize, column: isize, player: Player) -> bool {
    board.get_signed(row, column) == Some(Cell::Owned(player))
}

fn window(row: isize, column: isize, (dr, dc): (isize, isize)) -> [(isize, isize); CONNECT] {
    std::array::from_fn(|k| (row + dr * k as isize, column + dc * k as isize))
}

fn to_line(player: Player, coords: [(isize, isize); CONNECT]) -> WinningLine {
    WinningLine {
        player,
        cells: coords.map(|(row, column)| Position::new(row as usize, column as usize)),
    }
}

/// Scan every window of four cells, in every direction, anchored at every
/// cell. Returns the first window fully owned by `player`.
pub fn find_winning_line(board: &Board, player: Player) -> Option<WinningLine> {
    for row in 0..board.height() as isize {
        for column in 0..board.width() as isize {
            for direction in DIRECTIONS {
                let coords = window(row, column, direction);
                if coords.iter().all(|&(r, c)| owned_by(board, r, c, player)) {
                    return Some(to_line(player, coords));
                }
            }
        }
    }
    None
}

/// Walk the four lines through `at` and report a run of at least four of
/// `player`'s pieces.
pub fn find_winning_line_through(
    board: &Board,
    at: Position,
    player: Player,
) -> Option<WinningLine> {
    let (row, column) = (at.row as isize, at.column as isize);
    if !owned_by(board, row, column, player) {
        return None;
    }

    for (dr, dc) in DIRECTIONS {
        // Count backward, then forward, not including `at` itself.
        let mut back = 0;
        while owned_by(board, row - dr * (back + 1), column - dc * (back + 1), player) {
            back += 1;
        }
        let mut forward = 0;
        while owned_by(board, row + dr * (forward + 1), column + dc * (forward + 1), player) {
            forward += 1;
        }

        if (back + forward + 1) as usize >= CONNECT {
            let start = (row - dr * back, column - dc * back);
            return Some(to_line(player, window(start.0, start.1, (dr, dc))));
        }
    }
    None
}
