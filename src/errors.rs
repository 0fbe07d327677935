//! Unified error type for FreteSmart.
//!
//! Domain failures use struct variants; library errors convert through `#[from]`
//! so `?` works across the database, serialization and HTTP layers.

use thiserror::Error;

/// Every error the crate can surface.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Database driver or query failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// The durable trip document exists but cannot be used
    #[error("Storage error: {message}")]
    Storage {
        /// What went wrong
        message: String,
    },

    /// JSON encoding or decoding failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No trip carries the requested id
    #[error("Trip not found: {id}")]
    TripNotFound {
        /// The id that was looked up
        id: String,
    },

    /// A draft submission is missing required route fields
    #[error("Invalid trip: {message}")]
    InvalidDraft {
        /// Which field is wrong
        message: String,
    },

    /// The AI service answered with something unusable
    #[error("Analysis error: {message}")]
    Analysis {
        /// What went wrong
        message: String,
    },

    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or invalid environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Failure while building a text reply
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Serenity/Poise framework error
    #[error("Discord framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
