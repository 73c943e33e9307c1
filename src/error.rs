use std::path::PathBuf;

use crate::board::Pos;

/// Reasons the game front-end refuses a human move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is over")]
    GameOver,

    #[error("computer is thinking")]
    AiThinking,

    #[error("not your turn")]
    NotYourTurn,

    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("intersection {0} is already occupied")]
    Occupied(Pos),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::OutOfBounds { row: 20, col: -1 }.to_string(),
            "position (20, -1) is off the board"
        );
        assert_eq!(
            MoveError::Occupied(Pos::new(3, 4)).to_string(),
            "intersection (3, 4) is already occupied"
        );
        assert_eq!(MoveError::NotYourTurn.to_string(), "not your turn");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("ai.depth must be in 1..=6".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: ai.depth must be in 1..=6"
        );
    }

    #[test]
    fn test_file_read_error_display() {
        let err = ConfigError::FileRead {
            path: PathBuf::from("fourmok.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read config file fourmok.toml: denied"
        );
    }
}
