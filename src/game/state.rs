use super::board::{Board, MoveError, Position, CELLS};
use super::palette::Token;
use super::seat::Seat;
use super::win::has_win;
use crate::error::SetupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Seat),
    Draw,
}

/// Result of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub seat: Seat,
    pub token: Token,
    pub position: Position,
    pub outcome: Option<GameOutcome>,
}

/// Board, the two seats' tokens, the turn counter and the outcome of one game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    tokens: [Token; 2],
    turn: usize,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Start a game on an empty board. Both seats need a token and the two
    /// tokens must differ.
    pub fn new(tokens: [Option<Token>; 2]) -> Result<Self, SetupError> {
        let one = tokens[0].ok_or(SetupError::MissingToken(Seat::One))?;
        let two = tokens[1].ok_or(SetupError::MissingToken(Seat::Two))?;
        if one == two {
            return Err(SetupError::DuplicateToken(one));
        }
        Ok(GameState {
            board: Board::new(),
            tokens: [one, two],
            turn: 0,
            outcome: None,
        })
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of successful placements so far.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Seat whose move it is, by turn parity.
    pub fn current_seat(&self) -> Seat {
        Seat::for_turn(self.turn)
    }

    pub fn token(&self, seat: Seat) -> Token {
        self.tokens[seat.index()]
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Drop the current seat's token into `column`.
    ///
    /// A full column leaves the state untouched, so the same seat moves again.
    /// On success the turn counter advances and the board is checked for a
    /// win by the mover, then for a draw once all cells are used.
    pub fn apply_move(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let seat = self.current_seat();
        let token = self.token(seat);
        let position = self.board.place(column, token)?;
        self.turn += 1;

        if has_win(&self.board, token) {
            self.outcome = Some(GameOutcome::Winner(seat));
        } else if self.turn >= CELLS {
            self.outcome = Some(GameOutcome::Draw);
        }

        Ok(Placement {
            seat,
            token,
            position,
            outcome: self.outcome,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::game::{Cell, COLS};

    pub(crate) const ONE: Token = Token::Red;
    pub(crate) const TWO: Token = Token::Yellow;

    /// 42 alternating moves that fill the board with no four-in-a-row.
    /// Columns 0, 1, 4, 5 read one/two bottom-up, columns 2, 3, 6 two/one.
    pub(crate) fn drawn_game_moves() -> Vec<usize> {
        let mut moves = Vec::with_capacity(CELLS);
        for (p, q) in [(0, 2), (1, 3), (4, 6)] {
            moves.extend([p, q, q, p, p, q, q, p, p, q, q, p]);
        }
        moves.extend([5; 6]);
        moves
    }

    fn new_state() -> GameState {
        GameState::new([Some(ONE), Some(TWO)]).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = new_state();
        assert_eq!(state.current_seat(), Seat::One);
        assert_eq!(state.turn(), 0);
        assert!(!state.is_terminal());
        assert_eq!(state.board(), &Board::new());
    }

    #[test]
    fn test_new_requires_both_tokens() {
        assert_eq!(
            GameState::new([None, Some(TWO)]),
            Err(SetupError::MissingToken(Seat::One))
        );
        assert_eq!(
            GameState::new([Some(ONE), None]),
            Err(SetupError::MissingToken(Seat::Two))
        );
    }

    #[test]
    fn test_new_rejects_duplicate_tokens() {
        assert_eq!(
            GameState::new([Some(ONE), Some(ONE)]),
            Err(SetupError::DuplicateToken(ONE))
        );
    }

    #[test]
    fn test_apply_move_alternates_seats() {
        let mut state = new_state();
        let placed = state.apply_move(3).unwrap();
        assert_eq!(placed.seat, Seat::One);
        assert_eq!(placed.position, Position { row: 5, col: 3 });
        assert_eq!(state.current_seat(), Seat::Two);

        state.apply_move(3).unwrap();
        assert_eq!(state.board().get(4, 3), Cell::Occupied(TWO));
        assert_eq!(state.turn(), 2);
    }

    #[test]
    fn test_full_column_does_not_consume_turn() {
        let mut state = new_state();
        for _ in 0..6 {
            state.apply_move(0).unwrap();
        }
        let before = state.clone();

        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull(0)));
        assert_eq!(state, before);
        assert_eq!(state.current_seat(), Seat::One);
    }

    #[test]
    fn test_vertical_win_on_fourth_own_token() {
        let mut state = new_state();
        for _ in 0..3 {
            assert_eq!(state.apply_move(3).unwrap().outcome, None);
            state.apply_move(0).unwrap();
        }
        let placed = state.apply_move(3).unwrap();
        assert_eq!(placed.outcome, Some(GameOutcome::Winner(Seat::One)));
        assert_eq!(state.turn(), 7);
        assert_eq!(state.apply_move(1), Err(MoveError::GameOver));
    }

    #[test]
    fn test_horizontal_win_for_second_seat() {
        let mut state = new_state();
        // One stacks column 0; Two builds the bottom row 3..=6.
        for col in 3..COLS - 1 {
            state.apply_move(0).unwrap();
            state.apply_move(col).unwrap();
        }
        state.apply_move(1).unwrap();
        let placed = state.apply_move(COLS - 1).unwrap();
        assert_eq!(placed.outcome, Some(GameOutcome::Winner(Seat::Two)));
    }

    #[test]
    fn test_draw_exactly_at_forty_two() {
        let mut state = new_state();
        let moves = drawn_game_moves();
        assert_eq!(moves.len(), CELLS);

        for (i, &col) in moves.iter().enumerate() {
            assert!(!state.is_terminal(), "game ended early at move {i}");
            state.apply_move(col).unwrap();
        }
        assert_eq!(state.turn(), CELLS);
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert!(state.board().is_full());
    }
}
