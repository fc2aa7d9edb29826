//! Error types for `tickets_rust`.
//!
//! Core failures arrive as [`TicketError`] and are wrapped unchanged; the
//! remaining variants belong to the adapters (config, CLI, HTTP server).

use std::path::PathBuf;
use thiserror::Error;
use tickets_lib::TicketError;

/// Application-level error.
#[derive(Error, Debug)]
pub enum AppError {
    /// Failure reported by the ticket core.
    #[error(transparent)]
    Ticket(#[from] TicketError),

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    // === Workspace Errors ===
    /// `init` would overwrite an existing tickets file.
    #[error("Tickets file already exists: {} (use --force to overwrite)", path.display())]
    AlreadyInitialized { path: PathBuf },

    /// One or more doctor checks reported an error.
    #[error("Doctor found {0} error(s)")]
    ChecksFailed(usize),

    // === Server Errors ===
    /// The HTTP server could not start or stopped abnormally.
    #[error("Server error: {0}")]
    Server(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }
}

/// Result type using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
