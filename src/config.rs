use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub computer: ComputerConfig,
    pub players: PlayersConfig,
}

/// Console rendering options.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Draw tokens in their palette colour; otherwise use the key marker.
    pub color: bool,
    /// Clear the screen before each board.
    pub clear_screen: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            color: true,
            clear_screen: true,
        }
    }
}

/// Settings shared by computer-controlled seats.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComputerConfig {
    pub name: String,
    /// Fixed RNG seed. Seat two uses `seed + 1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Wait for a line (Enter or q) before each computer move.
    pub confirm_moves: bool,
}

impl Default for ComputerConfig {
    fn default() -> Self {
        ComputerConfig {
            name: "Computer".to_string(),
            seed: None,
            confirm_moves: true,
        }
    }
}

/// How each seat is filled at setup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[derive(clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SeatSetup {
    /// Ask at the console.
    #[default]
    Ask,
    Human,
    Computer,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: SeatSetup,
    pub two: SeatSetup,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.computer.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "computer.name must not be blank".into(),
            ));
        }
        Ok(())
    }

    /// Render the default configuration as TOML.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
