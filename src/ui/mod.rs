//! Console front end: line input, board rendering, and the game loop that
//! drives a session through setup and play.

mod game_loop;
mod input;
mod render;

pub use game_loop::{GameLoop, Phase, SetupOptions};
pub use input::{is_quit, prompt_until, ColumnChoice, InputSource, LineInput, Reply};
pub use render::{ConsoleRenderer, Renderer};
