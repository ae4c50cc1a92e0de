use std::io;

use crate::error::ColumnInputError;
use crate::game::COLS;
use crate::ui::{prompt_until, ColumnChoice, InputSource, Renderer, Reply};

/// A player at the keyboard. Every choice comes from the input source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HumanPlayer;

impl HumanPlayer {
    /// Ask for a 1-7 column until one parses; the result is 0-based.
    pub fn choose_column(
        &self,
        name: &str,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
    ) -> io::Result<ColumnChoice> {
        prompt_until(
            input,
            renderer,
            &format!("{name}, choose a column (1-{COLS}) or q to quit:"),
            "Please choose a valid column",
            parse_column,
        )
    }

    /// Ask for a name until a non-blank one is given.
    pub fn ask_name(
        &self,
        label: &str,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
    ) -> io::Result<Reply<String>> {
        prompt_until(
            input,
            renderer,
            &format!("{label}, what is your name?"),
            "Please enter a name",
            |line| match line.trim() {
                "" => Err("blank name"),
                name => Ok(name.to_string()),
            },
        )
    }
}

/// Parse a 1-based column number into a 0-based column.
pub fn parse_column(line: &str) -> Result<usize, ColumnInputError> {
    let text = line.trim();
    let n: i64 = text
        .parse()
        .map_err(|_| ColumnInputError::NotANumber(text.to_string()))?;
    if !(1..=COLS as i64).contains(&n) {
        return Err(ColumnInputError::OutOfRange(n));
    }
    Ok((n - 1) as usize)
}
