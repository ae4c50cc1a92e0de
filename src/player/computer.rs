use std::io;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Board, COLS};
use crate::ui::{is_quit, ColumnChoice, InputSource, Renderer, Reply};

/// A computer seat that picks a column uniformly at random.
///
/// Full columns are not filtered out: a pick on a full column is rejected by
/// the game loop and the computer simply picks again.
pub struct ComputerPlayer {
    rng: StdRng,
    confirm_moves: bool,
}

impl ComputerPlayer {
    /// `seed` fixes the RNG for reproducible games. With `confirm_moves`
    /// each move waits for a line so an observer can follow or quit.
    pub fn new(seed: Option<u64>, confirm_moves: bool) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        ComputerPlayer { rng, confirm_moves }
    }

    pub fn choose_column(
        &mut self,
        _board: &Board,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
    ) -> io::Result<ColumnChoice> {
        renderer.message("It's the computer's turn")?;
        if self.confirm_moves {
            renderer.message("(press Enter to continue, q to quit)")?;
            match input.read_line()? {
                None => return Ok(Reply::Quit),
                Some(line) if is_quit(&line) => return Ok(Reply::Quit),
                Some(_) => {}
            }
        }

        let col = self.rng.random_range(0..COLS);
        renderer.message(&format!("The computer chose column {}", col + 1))?;
        Ok(Reply::Value(col))
    }
}

impl std::fmt::Debug for ComputerPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputerPlayer")
            .field("confirm_moves", &self.confirm_moves)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Token;
    use crate::ui::{ConsoleRenderer, LineInput};
    use std::io::Cursor;

    fn no_input() -> LineInput<Cursor<&'static str>> {
        LineInput::new(Cursor::new(""))
    }

    #[test]
    fn test_choices_stay_on_the_board() {
        let mut computer = ComputerPlayer::new(Some(1), false);
        let mut renderer = ConsoleRenderer::plain(Vec::new());
        let board = Board::new();
        let mut seen = [false; COLS];

        for _ in 0..500 {
            match computer.choose_column(&board, &mut no_input(), &mut renderer).unwrap() {
                Reply::Value(col) => seen[col] = true,
                Reply::Quit => panic!("computer quit without input"),
            }
        }
        assert!(seen.iter().all(|&s| s), "not every column was drawn: {seen:?}");
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut renderer = ConsoleRenderer::plain(Vec::new());
        let mut a = ComputerPlayer::new(Some(42), false);
        let mut b = ComputerPlayer::new(Some(42), false);
        for _ in 0..20 {
            assert_eq!(
                a.choose_column(&board, &mut no_input(), &mut renderer).unwrap(),
                b.choose_column(&board, &mut no_input(), &mut renderer).unwrap()
            );
        }
    }

    #[test]
    fn test_may_choose_a_full_column() {
        // Full columns are not filtered; the game loop rejects such picks.
        let mut board = Board::new();
        for col in 0..COLS - 1 {
            for _ in 0..6 {
                board.place(col, Token::Red).unwrap();
            }
        }
        let mut computer = ComputerPlayer::new(Some(3), false);
        let mut renderer = ConsoleRenderer::plain(Vec::new());
        let picked_full = (0..100).any(|_| {
            matches!(
                computer.choose_column(&board, &mut no_input(), &mut renderer).unwrap(),
                Reply::Value(col) if board.is_column_full(col)
            )
        });
        assert!(picked_full);
    }

    #[test]
    fn test_confirm_waits_for_line_and_honours_quit() {
        let board = Board::new();
        let mut computer = ComputerPlayer::new(Some(5), true);
        let mut input = LineInput::new(Cursor::new("\nq\n"));
        let mut renderer = ConsoleRenderer::plain(Vec::new());

        let first = computer.choose_column(&board, &mut input, &mut renderer).unwrap();
        assert!(matches!(first, Reply::Value(col) if col < COLS));
        assert_eq!(
            computer.choose_column(&board, &mut input, &mut renderer).unwrap(),
            Reply::Quit
        );
        assert_eq!(
            computer.choose_column(&board, &mut input, &mut renderer).unwrap(),
            Reply::Quit
        );

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.contains("It's the computer's turn"));
        assert_eq!(out.matches("The computer chose column").count(), 1);
    }
}
