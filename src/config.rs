use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::Stone;
use crate::engine::DEFAULT_DEPTH;
use crate::error::ConfigError;

/// Deepest search the front-end allows; deeper searches stall the window
pub const MAX_DEPTH: u8 = 6;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub game: GameConfig,
    pub logging: LoggingConfig,
}

/// Computer player settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Search depth in plies
    pub depth: u8,
    /// Minimum time the computer appears to think before moving
    pub think_delay_ms: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            think_delay_ms: 0,
        }
    }
}

/// Who plays whom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeConfig {
    /// Player vs computer
    #[default]
    Pve,
    /// Player vs player on one screen
    Pvp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: ModeConfig,
    /// Human color in player-vs-computer games
    pub human: Stone,
    pub show_debug: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: ModeConfig::Pve,
            human: Stone::Black,
            show_debug: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai.depth == 0 || self.ai.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "ai.depth must be in 1..={MAX_DEPTH}"
            )));
        }
        if self.game.human == Stone::Empty {
            return Err(ConfigError::Validation(
                "game.human must be \"black\" or \"white\"".into(),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".into(),
            ));
        }
        Ok(())
    }
}
