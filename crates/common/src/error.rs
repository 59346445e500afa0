//! Error types

use thiserror::Error;

/// Main error type for the webhook trigger
#[derive(Error, Debug)]
pub enum Error {
    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Host API error: {0}")]
    Host(String),

    #[error("Notifier error: {0}")]
    Notifier(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
