//! Error types for pokedex

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pokedex operations
#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid measurement: '{0}'")]
    InvalidMeasure(String),

    #[error("Invalid CSV record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for pokedex operations
pub type Result<T> = std::result::Result<T, PokedexError>;

impl PokedexError {
    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an invalid measurement error
    pub fn measure(text: impl Into<String>) -> Self {
        Self::InvalidMeasure(text.into())
    }

    /// Create an invalid record error
    pub fn record(line: u64, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            line,
            reason: reason.into(),
        }
    }
}
