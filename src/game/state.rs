use std::fmt;

use tracing::{debug, info};

use super::board::{Board, Cell, Position, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use super::outcome::{WinCheck, WinningLine};
use super::Player;
use crate::error::MoveError;

/// Board shape and rules for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub win_check: WinCheck,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            win_check: WinCheck::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Won(Player),
    Tied,
}

impl Status {
    /// `Won` and `Tied` are terminal: no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Status::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::InProgress => f.write_str("in progress"),
            Status::Won(player) => write!(f, "{player} won"),
            Status::Tied => f.write_str("tied"),
        }
    }
}

/// Where the piece landed and what the move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub row: usize,
    pub column: usize,
    pub status: Status,
}

/// A single game: board, whose turn it is, and how the game stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active_player: Player,
    status: Status,
    win_check: WinCheck,
    winning_line: Option<WinningLine>,
}

impl GameState {
    /// Create a standard 7x6 game
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// Create a game from a validated configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.width` or `config.height` is zero. Configuration
    /// loaded through [`AppConfig`](crate::config::AppConfig) is validated and
    /// never does.
    pub fn with_config(config: &GameConfig) -> Self {
        GameState {
            board: Board::with_dimensions(config.width, config.height),
            active_player: Player::One,
            status: Status::InProgress,
            win_check: config.win_check,
            winning_line: None,
        }
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, row: usize, column: usize) -> Cell {
        self.board.get(row, column)
    }

    pub fn win_check(&self) -> WinCheck {
        self.win_check
    }

    /// The four cells that ended the game, if it was won
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn move_count(&self) -> usize {
        self.board.piece_count()
    }

    /// Columns that accept a piece; empty once the game is over
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Drop the active player's piece into `column`.
    ///
    /// Any integer type is accepted so that negative host input is reported
    /// as [`MoveError::InvalidColumn`] rather than failing to convert. On
    /// error nothing changes. A winning move does not pass the turn.
    pub fn apply_move<C>(&mut self, column: C) -> Result<MoveOutcome, MoveError>
    where
        C: TryInto<usize> + TryInto<i128> + Copy,
    {
        let result = self.try_apply_move(column);
        if let Err(err) = &result {
            debug!(player = %self.active_player, error = %err, "move rejected");
        }
        result
    }

    fn try_apply_move<C>(&mut self, column: C) -> Result<MoveOutcome, MoveError>
    where
        C: TryInto<usize> + TryInto<i128> + Copy,
    {
        if self.is_terminal() {
            return Err(MoveError::InvalidState {
                status: self.status,
            });
        }

        let width = self.board.width();
        let column = TryInto::<usize>::try_into(column).map_err(|_| MoveError::InvalidColumn {
            // Only u128 values past i128::MAX fail this conversion.
            column: TryInto::<i128>::try_into(column).unwrap_or(i128::MAX),
            width,
        })?;
        let row = self
            .board
            .find_landing_row(column)?
            .ok_or(MoveError::ColumnFull { column })?;

        let player = self.active_player;
        self.board.place_piece(row, column, player);
        debug!(%player, row, column, moves = self.move_count(), "piece placed");

        // A win on the move that fills the board is still a win.
        let last = Position::new(row, column);
        if let Some(line) = self.win_check.find_win(&self.board, last, player) {
            self.status = Status::Won(player);
            self.winning_line = Some(line);
        } else if self.board.is_full() {
            self.status = Status::Tied;
        } else {
            self.active_player = player.other();
        }

        if self.is_terminal() {
            info!(status = %self.status, moves = self.move_count(), "game over");
        }

        Ok(MoveOutcome {
            row,
            column,
            status: self.status,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
