//! Error types for the CLI application.

use std::fmt;

use holdem_engine::errors::GameError;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
///
/// Every variant maps to exit code `2`.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

// Table setup problems are configuration errors; everything else comes from a running hand.
impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        match error {
            GameError::InvalidPlayerCount { .. } | GameError::InvalidConfig(_) => {
                CliError::Config(error.to_string())
            }
            other => CliError::Engine(other.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_count_error_is_a_config_error() {
        let err: CliError = GameError::InvalidPlayerCount {
            count: 13,
            min: 2,
            max: 12,
        }
        .into();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("13"));
    }

    #[test]
    fn empty_deck_is_an_engine_error() {
        let err: CliError = GameError::EmptyDeck.into();
        assert!(matches!(err, CliError::Engine(_)));
    }
}
