use std::path::PathBuf;
use thiserror::Error;

/// Errors that can end the game during bootstrap or rendering
#[derive(Debug, Error)]
pub enum GameError {
    /// Any SDL call that reports failure as a string
    #[error("SDL error: {0}")]
    Sdl(String),

    /// An image or sound file could not be loaded
    #[error("Failed to load {}: {message}", .path.display())]
    Asset { path: PathBuf, message: String },

    /// Config file exists but is not valid JSON for `GameConfig`
    #[error("Invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Config parsed but holds values the game cannot run with
    #[error("Invalid config value: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<String> for GameError {
    fn from(message: String) -> Self {
        GameError::Sdl(message)
    }
}

pub type GameResult<T> = Result<T, GameError>;
