use std::fmt;

use super::Player;
use crate::error::MoveError;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;
/// Upper bound on either board dimension accepted from configuration.
pub const MAX_DIMENSION: usize = 16;
/// Number of aligned pieces needed to win.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Owned(Player),
}

impl Cell {
    /// Owner of the cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Owned(player) => Some(player),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A cell coordinate. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }
}

/// Fixed-size grid of cells. Pieces only ever enter through
/// [`Board::place_piece`], which keeps every column stacked from the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    filled: usize,
}

impl Board {
    /// Create a new empty 7x6 board
    pub fn new() -> Self {
        Self::with_dimensions(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create an empty board with `width` columns and `height` rows.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "board dimensions must be non-zero (got {width}x{height})"
        );
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            filled: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.height && column < self.width,
            "cell ({row}, {column}) is outside the {}x{} board",
            self.width,
            self.height
        );
        row * self.width + column
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, the last row is the bottom.
    ///
    /// # Panics
    ///
    /// Panics if `(row, column)` is off the board.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[self.index(row, column)]
    }

    /// Get the cell at signed coordinates, `None` when off the board.
    pub(crate) fn get_signed(&self, row: isize, column: isize) -> Option<Cell> {
        if row < 0 || column < 0 {
            return None;
        }
        let (row, column) = (row as usize, column as usize);
        if row >= self.height || column >= self.width {
            return None;
        }
        Some(self.get(row, column))
    }

    /// Find the row a piece dropped into `column` would land on.
    ///
    /// Scans from the bottom row upward and returns the first empty row, or
    /// `None` when the column is full. An out-of-range column is an error.
    pub fn find_landing_row(&self, column: usize) -> Result<Option<usize>, MoveError> {
        if column >= self.width {
            return Err(MoveError::InvalidColumn {
                column: column as i128,
                width: self.width,
            });
        }
        Ok((0..self.height)
            .rev()
            .find(|&row| self.get(row, column).is_empty()))
    }

    /// Write `player`'s piece into `(row, column)`.
    ///
    /// The cell must be the landing row of its column, as returned by
    /// [`Board::find_landing_row`].
    pub(crate) fn place_piece(&mut self, row: usize, column: usize, player: Player) {
        debug_assert_eq!(
            self.find_landing_row(column),
            Ok(Some(row)),
            "piece placed at ({row}, {column}) which is not the landing spot"
        );
        let idx = self.index(row, column);
        self.cells[idx] = Cell::Owned(player);
        self.filled += 1;
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= self.width {
            return true;
        }
        !self.get(0, column).is_empty()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.filled == self.cells.len()
    }

    /// Number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.filled
    }

    /// Columns that can still take a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for column in 0..self.width {
                let symbol = match self.get(row, column) {
                    Cell::Empty => '.',
                    Cell::Owned(player) => player.symbol(),
                };
                if column > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        for column in 0..self.width {
            if column > 0 {
                f.write_str(" ")?;
            }
            // Column labels wrap past 9 so wide boards stay aligned.
            write!(f, "{}", column % 10)?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl Board {
    /// Write a cell directly, ignoring gravity. Only for building arbitrary
    /// patterns in tests.
    pub(crate) fn set_unchecked(&mut self, row: usize, column: usize, cell: Cell) {
        let idx = self.index(row, column);
        if self.cells[idx].is_empty() && !cell.is_empty() {
            self.filled += 1;
        } else if !self.cells[idx].is_empty() && cell.is_empty() {
            self.filled -= 1;
        }
        self.cells[idx] = cell;
    }

    pub(crate) fn rotated_180(&self) -> Board {
        let mut rotated = Board::with_dimensions(self.width, self.height);
        for row in 0..self.height {
            for column in 0..self.width {
                rotated.set_unchecked(
                    self.height - 1 - row,
                    self.width - 1 - column,
                    self.get(row, column),
                );
            }
        }
        rotated
    }

    pub(crate) fn with_owners_swapped(&self) -> Board {
        let mut swapped = self.clone();
        for cell in swapped.cells.iter_mut() {
            if let Cell::Owned(player) = *cell {
                *cell = Cell::Owned(player.other());
            }
        }
        swapped
    }
}
