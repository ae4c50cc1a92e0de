use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::game::{Board, Cell, Token, COLS, PALETTE};
use crate::player::Player;

/// Output side of the console. Only the game loop draws the board.
pub trait Renderer {
    /// Clear the screen, if the renderer supports it.
    fn clear(&mut self) -> io::Result<()>;

    /// Draw the grid and the two players' names and tokens.
    fn render_board(&mut self, board: &Board, players: &[Player; 2]) -> io::Result<()>;

    /// List the 16 palette entries with their keys.
    fn show_palette(&mut self) -> io::Result<()>;

    /// Print one line of text.
    fn message(&mut self, text: &str) -> io::Result<()>;
}

/// Renderer writing styled text with crossterm to any writer.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    color: bool,
    clear_screen: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, color: bool, clear_screen: bool) -> Self {
        ConsoleRenderer {
            out,
            color,
            clear_screen,
        }
    }

    /// No colour, no clearing: output is plain text.
    pub fn plain(out: W) -> Self {
        Self::new(out, false, false)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn token(&mut self, token: Token) -> io::Result<()> {
        if self.color {
            queue!(
                self.out,
                SetForegroundColor(token_color(token)),
                Print('\u{25cf}'),
                ResetColor
            )
        } else {
            queue!(self.out, Print(token.marker()))
        }
    }

    fn cell(&mut self, cell: Cell) -> io::Result<()> {
        match cell {
            Cell::Occupied(token) => self.token(token),
            Cell::Empty if self.color => queue!(
                self.out,
                SetForegroundColor(Color::DarkGrey),
                Print('.'),
                ResetColor
            ),
            Cell::Empty => queue!(self.out, Print('.')),
        }
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn render_board(&mut self, board: &Board, players: &[Player; 2]) -> io::Result<()> {
        let cells = board.snapshot();
        let width = COLS * 3;

        queue!(self.out, Print("  "))?;
        for col in 0..COLS {
            queue!(self.out, Print(format!(" {} ", col + 1)))?;
        }
        queue!(self.out, Print(format!("\n +{}+\n", "-".repeat(width))))?;

        for row in &cells {
            queue!(self.out, Print(" |"))?;
            for &cell in row {
                queue!(self.out, Print(' '))?;
                self.cell(cell)?;
                queue!(self.out, Print(' '))?;
            }
            queue!(self.out, Print("|\n"))?;
        }

        let inner = "_".repeat(width - 6);
        queue!(
            self.out,
            Print(format!(" +{}+\n", "-".repeat(width))),
            Print(format!("  |  |{inner}|  |\n")),
            Print(format!("  |__|{inner}|__|\n\n"))
        )?;

        for player in players {
            queue!(self.out, Print(format!("{}: {} ", player.seat(), player.name())))?;
            match player.token() {
                Some(token) => {
                    self.token(token)?;
                    queue!(self.out, Print(format!(" ({})\n", token.name())))?;
                }
                None => queue!(self.out, Print("(no token)\n"))?,
            }
        }
        self.out.flush()
    }

    fn show_palette(&mut self) -> io::Result<()> {
        for token in PALETTE {
            queue!(self.out, Print(format!("{:>2}: ", token.key())))?;
            self.token(token)?;
            queue!(self.out, Print(format!(" {}\n", token.name())))?;
        }
        self.out.flush()
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        if self.color {
            queue!(
                self.out,
                SetAttribute(Attribute::Bold),
                Print(text),
                SetAttribute(Attribute::Reset),
                Print('\n')
            )?;
        } else {
            queue!(self.out, Print(text), Print('\n'))?;
        }
        self.out.flush()
    }
}

/// Terminal colour for each palette entry; "light" variants map to the bright
/// half of the 16-colour set.
fn token_color(token: Token) -> Color {
    match token {
        Token::Blue => Color::DarkBlue,
        Token::LightBlue => Color::Blue,
        Token::Red => Color::DarkRed,
        Token::LightRed => Color::Red,
        Token::Green => Color::DarkGreen,
        Token::LightGreen => Color::Green,
        Token::Yellow => Color::DarkYellow,
        Token::LightYellow => Color::Yellow,
        Token::Cyan => Color::DarkCyan,
        Token::LightCyan => Color::Cyan,
        Token::Magenta => Color::DarkMagenta,
        Token::LightMagenta => Color::Magenta,
        Token::White => Color::Grey,
        Token::LightWhite => Color::White,
        Token::Black => Color::Black,
        Token::LightBlack => Color::DarkGrey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Seat;

    fn players() -> [Player; 2] {
        let mut one = Player::human(Seat::One);
        one.set_name("Ada");
        one.choose_token(8).unwrap();
        let two = Player::human(Seat::Two);
        [one, two]
    }

    fn render_plain(board: &Board) -> String {
        let mut renderer = ConsoleRenderer::plain(Vec::new());
        renderer.render_board(board, &players()).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_board_layout() {
        let mut board = Board::new();
        board.place(3, Token::LightYellow).unwrap();
        let out = render_plain(&board);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "   1  2  3  4  5  6  7 ");
        assert_eq!(lines[2], " | .  .  .  .  .  .  . |");
        assert_eq!(lines[7], " | .  .  .  8  .  .  . |");
        assert!(out.contains("Player 1: Ada 8 (light yellow)"));
        assert!(out.contains("Player 2:  (no token)"));
    }

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let out = render_plain(&Board::new());
        assert!(!out.contains('\u{1b}'));

        let mut renderer = ConsoleRenderer::plain(Vec::new());
        renderer.clear().unwrap();
        assert!(renderer.into_inner().is_empty());
    }

    #[test]
    fn test_colored_board_uses_escape_codes() {
        let mut board = Board::new();
        board.place(0, Token::Red).unwrap();
        let mut renderer = ConsoleRenderer::new(Vec::new(), true, true);
        renderer.clear().unwrap();
        renderer.render_board(&board, &players()).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.contains('\u{1b}'));
        assert!(out.contains('\u{25cf}'));
    }

    #[test]
    fn test_palette_lists_sixteen_entries() {
        let mut renderer = ConsoleRenderer::plain(Vec::new());
        renderer.show_palette().unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out.lines().count(), 16);
        assert!(out.starts_with(" 1: 1 blue\n"));
        assert!(out.contains("16: G light black"));
    }
}
