use super::palette::Token;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Total number of cells; a game that fills them all without a win is drawn.
pub const CELLS: usize = ROWS * COLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Token),
}

/// Read-only copy of every cell, row 0 first.
pub type Snapshot = [[Cell; COLS]; ROWS];

/// Where a token came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {} does not exist", .0 + 1)]
    InvalidColumn(usize),

    #[error("column {} is full", .0 + 1)]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// The 6x7 grid. Tokens always settle in the lowest empty row of their
/// column, so empty cells in a column sit above every occupied one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: Snapshot,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position. Row 0 is the top, row 5 is the
    /// bottom.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// True if `(row, col)` is on the board and empty.
    pub fn is_free(&self, row: usize, col: usize) -> bool {
        row < ROWS && col < COLS && self.cells[row][col] == Cell::Empty
    }

    /// Scan a column bottom-up for the first empty row. `None` if the column
    /// is full or does not exist.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.is_free(row, col))
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.lowest_empty_row(col).is_none()
    }

    /// Drop a token in a column and return where it landed. A full column is
    /// rejected without touching the board.
    pub fn place(&mut self, col: usize, token: Token) -> Result<Position, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        let row = self.lowest_empty_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = Cell::Occupied(token);
        Ok(Position { row, col })
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Copy of all 42 cells for rendering.
    pub fn snapshot(&self) -> Snapshot {
        self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
