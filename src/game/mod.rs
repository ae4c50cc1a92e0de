//! Core Connect Four rules: the gravity grid, four-in-a-row detection, the
//! token palette, and the game state that ties them to two seats.

mod board;
mod palette;
mod seat;
mod state;
mod win;

pub use board::{Board, Cell, MoveError, Position, Snapshot, CELLS, COLS, ROWS};
pub use palette::{Token, PALETTE, PALETTE_SIZE};
pub use seat::Seat;
pub use state::{GameOutcome, GameState, Placement};
pub use win::has_win;

#[cfg(test)]
pub(crate) use state::tests::drawn_game_moves;
