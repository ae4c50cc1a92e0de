//! Players: a name and token per seat, plus a human or computer strategy for
//! picking columns.

mod computer;
mod human;

use std::io;

pub use computer::ComputerPlayer;
pub use human::{parse_column, HumanPlayer};

use crate::error::PaletteError;
use crate::game::{Board, Seat, Token};
use crate::ui::{ColumnChoice, InputSource, Renderer, Reply};

#[derive(Debug)]
enum PlayerKind {
    Human(HumanPlayer),
    Computer(ComputerPlayer),
}

/// One seat's identity and strategy. The token is unset until setup assigns it.
#[derive(Debug)]
pub struct Player {
    seat: Seat,
    name: String,
    token: Option<Token>,
    kind: PlayerKind,
}

impl Player {
    /// A human seat; the name is asked for during setup.
    pub fn human(seat: Seat) -> Self {
        Player {
            seat,
            name: String::new(),
            token: None,
            kind: PlayerKind::Human(HumanPlayer),
        }
    }

    /// A computer seat with a fixed name.
    pub fn computer(seat: Seat, name: impl Into<String>, computer: ComputerPlayer) -> Self {
        Player {
            seat,
            name: name.into(),
            token: None,
            kind: PlayerKind::Computer(computer),
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> Option<Token> {
        self.token
    }

    pub fn is_computer(&self) -> bool {
        matches!(self.kind, PlayerKind::Computer(_))
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Fill in the name: humans are prompted until they give a non-blank one,
    /// computers keep the name they were created with.
    pub fn ask_name(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
    ) -> io::Result<Reply<()>> {
        match &self.kind {
            PlayerKind::Human(human) => {
                match human.ask_name(&self.seat.to_string(), input, renderer)? {
                    Reply::Value(name) => {
                        self.name = name;
                        Ok(Reply::Value(()))
                    }
                    Reply::Quit => Ok(Reply::Quit),
                }
            }
            PlayerKind::Computer(_) => Ok(Reply::Value(())),
        }
    }

    /// Take the palette entry with the given 1-based key as this seat's token.
    pub fn choose_token(&mut self, key: usize) -> Result<Token, PaletteError> {
        let token = Token::from_key(key)?;
        self.token = Some(token);
        Ok(token)
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Pick the next 0-based column, or quit.
    pub fn choose_column(
        &mut self,
        board: &Board,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
    ) -> io::Result<ColumnChoice> {
        match &mut self.kind {
            PlayerKind::Human(human) => human.choose_column(&self.name, input, renderer),
            PlayerKind::Computer(computer) => computer.choose_column(board, input, renderer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{ConsoleRenderer, LineInput};
    use std::io::Cursor;

    #[test]
    fn test_choose_token_validates_key() {
        let mut player = Player::human(Seat::One);
        assert_eq!(player.choose_token(8), Ok(Token::LightYellow));
        assert_eq!(player.token(), Some(Token::LightYellow));

        assert_eq!(player.choose_token(17), Err(PaletteError::UnknownKey(17)));
        assert_eq!(player.token(), Some(Token::LightYellow));

        player.clear_token();
        assert_eq!(player.token(), None);
    }

    #[test]
    fn test_computer_keeps_its_name_without_prompting() {
        let mut player = Player::computer(Seat::Two, "Computer", ComputerPlayer::new(Some(1), false));
        let mut input = LineInput::new(Cursor::new("should not be read\n"));
        let mut renderer = ConsoleRenderer::plain(Vec::new());

        assert_eq!(player.ask_name(&mut input, &mut renderer).unwrap(), Reply::Value(()));
        assert_eq!(player.name(), "Computer");
        assert!(player.is_computer());
        assert!(renderer.into_inner().is_empty());
        assert_eq!(
            input.read_line().unwrap().as_deref(),
            Some("should not be read")
        );
    }

    #[test]
    fn test_human_name_from_input() {
        let mut player = Player::human(Seat::One);
        let mut input = LineInput::new(Cursor::new("\nGrace\n"));
        let mut renderer = ConsoleRenderer::plain(Vec::new());

        assert_eq!(player.ask_name(&mut input, &mut renderer).unwrap(), Reply::Value(()));
        assert_eq!(player.name(), "Grace");
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.starts_with("Player 1, what is your name?"));
    }

    #[test]
    fn test_human_quits_at_name_prompt() {
        let mut player = Player::human(Seat::One);
        let mut input = LineInput::new(Cursor::new("q\n"));
        let mut renderer = ConsoleRenderer::plain(Vec::new());
        assert_eq!(player.ask_name(&mut input, &mut renderer).unwrap(), Reply::Quit);
        assert_eq!(player.name(), "");
    }

    #[test]
    fn test_choose_column_dispatches_to_kind() {
        let board = Board::new();
        let mut renderer = ConsoleRenderer::plain(Vec::new());

        let mut human = Player::human(Seat::One);
        let mut input = LineInput::new(Cursor::new("5\n"));
        assert_eq!(
            human.choose_column(&board, &mut input, &mut renderer).unwrap(),
            Reply::Value(4)
        );

        let mut computer = Player::computer(Seat::Two, "Computer", ComputerPlayer::new(Some(9), false));
        let mut input = LineInput::new(Cursor::new(""));
        assert!(matches!(
            computer.choose_column(&board, &mut input, &mut renderer).unwrap(),
            Reply::Value(col) if col < crate::game::COLS
        ));
    }
}
