// src/error.rs

//! Unified error handling for the snoop application.

use std::fmt;

use thiserror::Error;

/// Result type alias for snoop operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// No usable input source was given
    #[error("Input error: {0}")]
    Input(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP fetch failed
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Staged resource could not be read
    #[error("Read error for {path}: {message}")]
    Read { path: String, message: String },

    /// Document conversion failed
    #[error("Conversion error for {path}: {message}")]
    Conversion { path: String, message: String },

    /// Staging area error
    #[error("Staging error: {0}")]
    Staging(String),
}

impl AppError {
    /// Create an input error.
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    /// Create a read error for a staged resource.
    pub fn read(path: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Read {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a conversion error for a staged resource.
    pub fn conversion(path: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Conversion {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a staging error.
    pub fn staging(message: impl Into<String>) -> Self {
        Self::Staging(message.into())
    }
}
