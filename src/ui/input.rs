use std::io::{self, BufRead};

use super::render::Renderer;

/// Source of raw console lines.
pub trait InputSource {
    /// Next line without its line terminator, or `None` once input is
    /// exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Line input over any buffered reader (stdin in the binary, a cursor in tests).
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        LineInput { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    /// Bytes that are not UTF-8 are replaced, so they fail to parse and get
    /// re-prompted like any other bad answer.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Answer to a prompt: a value, or the player asked to quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply<T> {
    Value(T),
    Quit,
}

/// 0-based column chosen by a player, or a quit request.
pub type ColumnChoice = Reply<usize>;

/// The quit sentinel: "q" in any case, surrounding whitespace ignored.
pub fn is_quit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("q")
}

/// Show `question`, then read lines until `parse` accepts one. Rejected lines
/// get `retry` as feedback. End of input counts as quitting.
pub fn prompt_until<T, E: std::fmt::Display>(
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    question: &str,
    retry: &str,
    mut parse: impl FnMut(&str) -> Result<T, E>,
) -> io::Result<Reply<T>> {
    renderer.message(question)?;
    loop {
        let Some(line) = input.read_line()? else {
            log::debug!("input closed at prompt '{question}'");
            return Ok(Reply::Quit);
        };
        if is_quit(&line) {
            return Ok(Reply::Quit);
        }
        match parse(&line) {
            Ok(value) => return Ok(Reply::Value(value)),
            Err(e) => {
                log::debug!("rejected input {line:?}: {e}");
                renderer.message(retry)?;
            }
        }
    }
}
