//! Four-in-a-row detection. Every 4-cell window on the board is visited once
//! per axis; the start ranges below keep each window inside the 6x7 grid.

use super::board::{Board, Cell, COLS, ROWS};
use super::palette::Token;

const RUN: usize = 4;

/// True if `token` occupies four aligned cells anywhere on the board.
pub fn has_win(board: &Board, token: Token) -> bool {
    check_vertical(board, token)
        || check_horizontal(board, token)
        || check_diagonal_down_right(board, token)
        || check_diagonal_down_left(board, token)
}

/// Columns, windows anchored on rows 3..=5 and extending upward.
fn check_vertical(board: &Board, token: Token) -> bool {
    (0..COLS).any(|col| {
        (RUN - 1..ROWS).any(|row| window(board, token, (row, col), |i| (row - i, col)))
    })
}

/// Rows, windows anchored on columns 3..=6 and extending left.
fn check_horizontal(board: &Board, token: Token) -> bool {
    (0..ROWS).any(|row| {
        (RUN - 1..COLS).any(|col| window(board, token, (row, col), |i| (row, col - i)))
    })
}

/// `\` diagonals, starting rows 0..=2 and columns 0..=3.
fn check_diagonal_down_right(board: &Board, token: Token) -> bool {
    (0..=ROWS - RUN).any(|row| {
        (0..=COLS - RUN).any(|col| window(board, token, (row, col), |i| (row + i, col + i)))
    })
}

/// `/` diagonals, starting rows 0..=2 and columns 3..=6.
fn check_diagonal_down_left(board: &Board, token: Token) -> bool {
    (0..=ROWS - RUN).any(|row| {
        (RUN - 1..COLS).any(|col| window(board, token, (row, col), |i| (row + i, col - i)))
    })
}

fn window(
    board: &Board,
    token: Token,
    start: (usize, usize),
    step: impl Fn(usize) -> (usize, usize),
) -> bool {
    debug_assert!(start.0 < ROWS && start.1 < COLS);
    (0..RUN).all(|i| {
        let (row, col) = step(i);
        debug_assert!(row < ROWS && col < COLS, "window left the board at ({row}, {col})");
        board.get(row, col) == Cell::Occupied(token)
    })
}
