//! Configuration file loading for the terminal game.
//!
//! Settings come from an optional TOML file (`chess.toml` in the current
//! directory unless another path is given) and are then overridden by
//! command line flags.

use chess_core::{Placement, PlacementError, Player};
use chess_engine::Game;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration or building the game
/// it describes.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured start position is not valid placement notation.
    #[error("Invalid start position: {0}")]
    InvalidStart(#[from] PlacementError),
}

/// Which side, if any, the computer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ComputerSide {
    #[default]
    None,
    White,
    Black,
}

impl ComputerSide {
    /// Returns true if the computer moves for `player`.
    pub fn plays(self, player: Player) -> bool {
        matches!(
            (self, player),
            (ComputerSide::White, Player::White) | (ComputerSide::Black, Player::Black)
        )
    }
}

/// How the game starts and who plays it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Start position in placement notation, optionally with the side to move.
    /// Defaults to the standard opening with White to move.
    #[serde(default = "default_start")]
    pub start: String,
    /// Side played by the computer. Defaults to neither.
    #[serde(default)]
    pub computer: ComputerSide,
    /// Seed for the computer's move choice. Unseeded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_start() -> String {
    Placement::STANDARD.to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            start: default_start(),
            computer: ComputerSide::None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Builds the game described by [`start`](GameConfig::start).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStart`] if the start position cannot be
    /// parsed.
    pub fn start_game(&self) -> Result<Game, ConfigError> {
        Ok(Game::from_placement(&self.start)?)
    }
}

/// How the board is drawn.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Draw pieces as Unicode chess glyphs instead of letters.
    #[serde(default)]
    pub unicode: bool,
    /// Label ranks and files around the board. Defaults to true.
    #[serde(default = "default_coordinates")]
    pub coordinates: bool,
}

fn default_coordinates() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            unicode: false,
            coordinates: default_coordinates(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ChessConfig {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl ChessConfig {
    /// Loads the configuration from the default path, falling back to
    /// defaults when that file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads the configuration from an explicit path, which must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the default configuration path: `chess.toml` in the current
    /// working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml_content = r#"
[game]
start = "4k3/8/8/8/8/8/8/4K3 b"
computer = "black"
seed = 42

[display]
unicode = true
coordinates = false
"#;

        let config = ChessConfig::parse(toml_content).unwrap();
        assert_eq!(config.game.start, "4k3/8/8/8/8/8/8/4K3 b");
        assert_eq!(config.game.computer, ComputerSide::Black);
        assert_eq!(config.game.seed, Some(42));
        assert!(config.display.unicode);
        assert!(!config.display.coordinates);
    }

    #[test]
    fn empty_config_defaults() {
        let config = ChessConfig::parse("").unwrap();
        assert_eq!(config, ChessConfig::default());
        assert_eq!(config.game.start, Placement::STANDARD);
        assert_eq!(config.game.computer, ComputerSide::None);
        assert_eq!(config.game.seed, None);
        assert!(!config.display.unicode);
        assert!(config.display.coordinates);
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = ChessConfig::parse("[display]\nunicode = true\n").unwrap();
        assert!(config.display.unicode);
        assert!(config.display.coordinates);
        assert_eq!(config.game, GameConfig::default());
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let result = ChessConfig::parse("[game\nstart = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));

        let result = ChessConfig::parse("[game]\ncomputer = \"both\"\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn missing_explicit_file_is_read_error() {
        let result = ChessConfig::load(Path::new("/nonexistent/chess.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn start_game_uses_placement() {
        let config = GameConfig {
            start: "4k3/8/8/8/8/8/8/4K3 b".to_string(),
            ..GameConfig::default()
        };
        let game = config.start_game().unwrap();
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.board().piece_count(), 2);

        let game = GameConfig::default().start_game().unwrap();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn bad_start_is_reported() {
        let config = GameConfig {
            start: "8/8/8".to_string(),
            ..GameConfig::default()
        };
        assert!(matches!(
            config.start_game(),
            Err(ConfigError::InvalidStart(PlacementError::InvalidRowCount(3)))
        ));
    }

    #[test]
    fn computer_side() {
        assert!(!ComputerSide::None.plays(Player::White));
        assert!(!ComputerSide::None.plays(Player::Black));
        assert!(ComputerSide::White.plays(Player::White));
        assert!(!ComputerSide::White.plays(Player::Black));
        assert!(ComputerSide::Black.plays(Player::Black));
    }

    #[test]
    fn serialization_roundtrip() {
        let config = ChessConfig {
            game: GameConfig {
                start: Placement::STANDARD.to_string(),
                computer: ComputerSide::White,
                seed: Some(7),
            },
            display: DisplayConfig {
                unicode: true,
                coordinates: false,
            },
        };
        let serialized = toml::to_string(&config).unwrap();
        assert_eq!(ChessConfig::parse(&serialized).unwrap(), config);
    }

    #[test]
    fn config_path_is_local() {
        assert_eq!(ChessConfig::config_path(), PathBuf::from("chess.toml"));
    }
}
