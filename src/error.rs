use std::path::PathBuf;

/// Errors returned by the game engine. All are recoverable: the rejected call
/// leaves the game state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board must be between 4x4 and 64x64, got {width}x{height}")]
    InvalidConfiguration { width: usize, height: usize },

    #[error("column out of range (board has {width} columns)")]
    InvalidColumn { width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already over")]
    GameAlreadyOver,
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
    fn test_game_error_display() {
        let err = GameError::InvalidConfiguration { width: 3, height: 6 };
        assert_eq!(err.to_string(), "board must be between 4x4 and 64x64, got 3x6");
        assert_eq!(
            GameError::ColumnFull { column: 2 }.to_string(),
            "column 2 is full"
        );
        assert_eq!(
            GameError::InvalidColumn { width: 7 }.to_string(),
            "column out of range (board has 7 columns)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.width must be >= 4".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.width must be >= 4"
        );
    }
}
