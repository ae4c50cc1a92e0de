//! # Console Connect Four
//!
//! Two-player Connect Four on the console. Either seat can be a human typing
//! column numbers or a computer choosing columns at random.
//!
//! ## Modules
//!
//! - [`game`] — Core rules: board, win detection, token palette, game state
//! - [`player`] — Human and computer players
//! - [`ui`] — Line input, board rendering, and the game loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod player;
pub mod ui;
