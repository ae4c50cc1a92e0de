use crate::config::{AppConfig, ComputerConfig, SeatSetup};
use crate::error::{GameError, SetupError};
use crate::game::{GameOutcome, GameState, MoveError, Seat, PALETTE_SIZE};
use crate::player::{ComputerPlayer, Player};

use super::input::{prompt_until, InputSource, Reply};
use super::render::Renderer;

const WELCOME: [&str; 4] = [
    "Welcome to Connect 4! The goal is in the name.",
    "Connect four of your tokens in a row horizontally, vertically or diagonally.",
    "During the game, select a column 1-7 to drop in your token, or q to quit.",
    "But first, who is playing?",
];

const FAREWELL: &str = "Thanks for playing, goodbye!";

/// Where the game loop is. `Won`, `Drawn` and `QuitRequested` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Playing,
    Won(Seat),
    Drawn,
    QuitRequested,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Drawn | Phase::QuitRequested)
    }
}

/// How the two seats are created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetupOptions {
    pub seats: [SeatSetup; 2],
    pub computer: ComputerConfig,
}

impl From<&AppConfig> for SetupOptions {
    fn from(config: &AppConfig) -> Self {
        SetupOptions {
            seats: [config.players.one, config.players.two],
            computer: config.computer.clone(),
        }
    }
}

/// Runs one game: sets up both players, then alternates turns until a win,
/// a draw or a quit request.
pub struct GameLoop<I, R> {
    input: I,
    renderer: R,
    options: SetupOptions,
    phase: Phase,
    state: Option<GameState>,
    players: Option<[Player; 2]>,
}

impl<I: InputSource, R: Renderer> GameLoop<I, R> {
    pub fn new(input: I, renderer: R, options: SetupOptions) -> Self {
        GameLoop {
            input,
            renderer,
            options,
            phase: Phase::Setup,
            state: None,
            players: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Final game state, once play has started.
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    pub fn into_parts(self) -> (I, R) {
        (self.input, self.renderer)
    }

    /// Set up both players and play to a terminal phase.
    pub fn run(&mut self) -> Result<Phase, GameError> {
        match self.setup()? {
            Reply::Value(players) => self.play(players),
            Reply::Quit => {
                self.phase = Phase::QuitRequested;
                self.renderer.message(FAREWELL)?;
                Ok(self.phase)
            }
        }
    }

    /// Create both players, ask their names and assign distinct tokens.
    pub fn setup(&mut self) -> Result<Reply<[Player; 2]>, GameError> {
        self.phase = Phase::Setup;
        self.renderer.clear()?;
        for line in WELCOME {
            self.renderer.message(line)?;
        }

        let Reply::Value(one) = self.create_player(Seat::One)? else {
            return Ok(Reply::Quit);
        };
        let Reply::Value(two) = self.create_player(Seat::Two)? else {
            return Ok(Reply::Quit);
        };
        let mut players = [one, two];

        if let Reply::Quit = self.choose_tokens(&mut players)? {
            return Ok(Reply::Quit);
        }
        for player in &players {
            if let Some(token) = player.token() {
                self.renderer
                    .message(&format!("{} token: {}", player.seat(), token.name()))?;
            }
        }
        log::info!(
            "setup complete: '{}' vs '{}'",
            players[0].name(),
            players[1].name()
        );
        Ok(Reply::Value(players))
    }

    fn create_player(&mut self, seat: Seat) -> Result<Reply<Player>, GameError> {
        let setup = match self.options.seats[seat.index()] {
            SeatSetup::Ask => {
                let reply = prompt_until(
                    &mut self.input,
                    &mut self.renderer,
                    &format!("Will {seat} be a human or a computer? (1 = human, 2 = computer)"),
                    "Please enter 1 for human or 2 for computer",
                    |line| match line.trim() {
                        "1" => Ok(SeatSetup::Human),
                        "2" => Ok(SeatSetup::Computer),
                        other => Err(format!("'{other}' is not 1 or 2")),
                    },
                )?;
                match reply {
                    Reply::Value(setup) => setup,
                    Reply::Quit => return Ok(Reply::Quit),
                }
            }
            fixed => fixed,
        };

        let mut player = match setup {
            SeatSetup::Computer => {
                let computer = &self.options.computer;
                let seed = computer
                    .seed
                    .map(|seed| seed.wrapping_add(seat.index() as u64));
                Player::computer(
                    seat,
                    computer.name.clone(),
                    ComputerPlayer::new(seed, computer.confirm_moves),
                )
            }
            SeatSetup::Human | SeatSetup::Ask => Player::human(seat),
        };

        if let Reply::Quit = player.ask_name(&mut self.input, &mut self.renderer)? {
            return Ok(Reply::Quit);
        }
        log::debug!("{seat} is '{}' (computer: {})", player.name(), player.is_computer());
        Ok(Reply::Value(player))
    }

    /// Ask each seat for a palette key until both tokens are set and differ.
    fn choose_tokens(&mut self, players: &mut [Player; 2]) -> Result<Reply<()>, GameError> {
        loop {
            for player in players.iter_mut() {
                self.renderer
                    .message(&format!("\nChoose a color, {} ({})", player.seat(), player.name()))?;
                self.renderer.show_palette()?;
                let reply = prompt_until(
                    &mut self.input,
                    &mut self.renderer,
                    &format!("Enter a number from 1 to {PALETTE_SIZE}:"),
                    &format!("Please choose a color between 1 and {PALETTE_SIZE}"),
                    |line| {
                        let key: usize = line.trim().parse().map_err(|_| line.to_string())?;
                        player.choose_token(key).map_err(|e| e.to_string())
                    },
                )?;
                if let Reply::Quit = reply {
                    return Ok(Reply::Quit);
                }
            }

            match GameState::new([players[0].token(), players[1].token()]) {
                Ok(_) => return Ok(Reply::Value(())),
                Err(SetupError::DuplicateToken(token)) => {
                    log::debug!("both players picked {}, asking again", token.name());
                    for player in players.iter_mut() {
                        player.clear_token();
                    }
                    self.renderer.message("\nThe player tokens cannot be the same.")?;
                    self.renderer.message("Please choose again.")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Alternate turns from an empty board. Both players must hold distinct
    /// tokens.
    pub fn play(&mut self, mut players: [Player; 2]) -> Result<Phase, GameError> {
        let mut state = GameState::new([players[0].token(), players[1].token()])?;
        self.phase = Phase::Playing;
        let mut notice: Option<String> = None;

        while !self.phase.is_terminal() {
            let seat = state.current_seat();
            self.renderer.clear()?;
            self.renderer.render_board(state.board(), &players)?;
            if let Some(text) = notice.take() {
                self.renderer.message(&text)?;
            }
            let player = &mut players[seat.index()];
            self.renderer.message(&format!(
                "Turn {}: {} ({})",
                state.turn() + 1,
                player.name(),
                seat
            ))?;

            let column =
                match player.choose_column(state.board(), &mut self.input, &mut self.renderer)? {
                    Reply::Value(column) => column,
                    Reply::Quit => {
                        self.phase = Phase::QuitRequested;
                        break;
                    }
                };

            match state.apply_move(column) {
                Ok(placement) => {
                    log::debug!(
                        "turn {}: {seat} placed {} at row {} column {}",
                        state.turn(),
                        placement.token.name(),
                        placement.position.row,
                        placement.position.col
                    );
                    self.phase = match placement.outcome {
                        Some(GameOutcome::Winner(winner)) => Phase::Won(winner),
                        Some(GameOutcome::Draw) => Phase::Drawn,
                        None => Phase::Playing,
                    };
                }
                Err(MoveError::ColumnFull(col)) => {
                    log::debug!("{seat} picked full column {}", col + 1);
                    notice = Some(format!(
                        "Column {} is full, please choose an unfilled column",
                        col + 1
                    ));
                }
                Err(e) => unreachable!("player produced an unplayable move: {e}"),
            }
        }

        self.renderer.clear()?;
        self.renderer.render_board(state.board(), &players)?;
        let summary = match self.phase {
            Phase::Won(seat) => format!(
                "{} ({seat}) wins after {} turns!",
                players[seat.index()].name(),
                state.turn()
            ),
            Phase::Drawn => "The board is full. It's a draw!".to_string(),
            _ => FAREWELL.to_string(),
        };
        self.renderer.message(&summary)?;
        log::info!("game over after {} turns: {:?}", state.turn(), self.phase);

        self.state = Some(state);
        self.players = Some(players);
        Ok(self.phase)
    }
}
