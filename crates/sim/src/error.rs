use std::path::PathBuf;

use match3_core::{BoardError, ConfigError};

/// Errors raised while setting up or recording a simulated session.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("generator error: {0}")]
    Generator(#[from] ConfigError),

    #[error("board error: {0}")]
    Board(#[from] BoardError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = SimError::Validation("width must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: width must be > 0");
    }

    #[test]
    fn test_wrapped_core_errors_display() {
        let err = SimError::from(ConfigError::EmptyAlphabet);
        assert_eq!(err.to_string(), "generator error: tile alphabet is empty");

        let err = SimError::from(BoardError::InvalidDimensions { width: 0, height: 0 });
        assert_eq!(err.to_string(), "board error: invalid board dimensions 0x0");
    }
}
