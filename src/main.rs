use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use console_connect_four::config::{AppConfig, SeatSetup};
use console_connect_four::ui::{ConsoleRenderer, GameLoop, LineInput, Phase, SetupOptions};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player console Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// How player 1 is filled
    #[arg(long, value_enum)]
    player_one: Option<SeatSetup>,

    /// How player 2 is filled
    #[arg(long, value_enum)]
    player_two: Option<SeatSetup>,

    /// Seed for computer players
    #[arg(long)]
    seed: Option<u64>,

    /// Draw tokens without colour
    #[arg(long)]
    no_color: bool,

    /// Do not clear the screen between turns
    #[arg(long)]
    no_clear: bool,

    /// Let computer players move without waiting for Enter
    #[arg(long)]
    no_confirm: bool,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("rendering default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(setup) = cli.player_one {
        config.players.one = setup;
    }
    if let Some(setup) = cli.player_two {
        config.players.two = setup;
    }
    if cli.seed.is_some() {
        config.computer.seed = cli.seed;
    }
    if cli.no_color {
        config.display.color = false;
    }
    if cli.no_clear {
        config.display.clear_screen = false;
    }
    if cli.no_confirm {
        config.computer.confirm_moves = false;
    }

    let input = LineInput::new(io::stdin().lock());
    let renderer = ConsoleRenderer::new(
        io::stdout(),
        config.display.color,
        config.display.clear_screen,
    );
    let mut game = GameLoop::new(input, renderer, SetupOptions::from(&config));

    match game.run().context("running game")? {
        Phase::Won(seat) => log::info!("{seat} won"),
        phase => log::info!("session ended: {phase:?}"),
    }
    Ok(())
}
