use crate::error::PaletteError;

/// Number of selectable tokens.
pub const PALETTE_SIZE: usize = 16;

/// A player's token: one of the 16 colours of the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Blue,
    LightBlue,
    Red,
    LightRed,
    Green,
    LightGreen,
    Yellow,
    LightYellow,
    Cyan,
    LightCyan,
    Magenta,
    LightMagenta,
    White,
    LightWhite,
    Black,
    LightBlack,
}

/// The palette in menu order. Key `n` selects `PALETTE[n - 1]`.
pub const PALETTE: [Token; PALETTE_SIZE] = [
    Token::Blue,
    Token::LightBlue,
    Token::Red,
    Token::LightRed,
    Token::Green,
    Token::LightGreen,
    Token::Yellow,
    Token::LightYellow,
    Token::Cyan,
    Token::LightCyan,
    Token::Magenta,
    Token::LightMagenta,
    Token::White,
    Token::LightWhite,
    Token::Black,
    Token::LightBlack,
];

impl Token {
    /// Look up a token by its 1-based menu key.
    pub fn from_key(key: usize) -> Result<Token, PaletteError> {
        key.checked_sub(1)
            .and_then(|idx| PALETTE.get(idx))
            .copied()
            .ok_or(PaletteError::UnknownKey(key))
    }

    /// The 1-based menu key of this token.
    pub fn key(self) -> usize {
        PALETTE
            .iter()
            .position(|&t| t == self)
            .map(|idx| idx + 1)
            .unwrap_or_else(|| unreachable!("every token is in the palette"))
    }

    /// Get token name for display
    pub fn name(self) -> &'static str {
        match self {
            Token::Blue => "blue",
            Token::LightBlue => "light blue",
            Token::Red => "red",
            Token::LightRed => "light red",
            Token::Green => "green",
            Token::LightGreen => "light green",
            Token::Yellow => "yellow",
            Token::LightYellow => "light yellow",
            Token::Cyan => "cyan",
            Token::LightCyan => "light cyan",
            Token::Magenta => "magenta",
            Token::LightMagenta => "light magenta",
            Token::White => "white",
            Token::LightWhite => "light white",
            Token::Black => "black",
            Token::LightBlack => "light black",
        }
    }

    /// Single-character marker used when the console has no colour.
    pub fn marker(self) -> char {
        const MARKERS: [char; PALETTE_SIZE] = [
            '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G',
        ];
        MARKERS[self.key() - 1]
    }
}
