//! Error types for `tickets-lib`.
//!
//! The core reports failures only through `TicketError`; translating them
//! into exit codes or HTTP responses is left to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for ticket operations.
#[derive(Error, Debug)]
pub enum TicketError {
    // === Validation Errors ===
    /// Caller-supplied ticket breaks a business rule.
    #[error("{message}")]
    Validation { field: String, message: String },

    // === Not Found Errors ===
    /// No ticket with the given ID exists in the collection.
    #[error("Ticket with ID: {id} not found.")]
    TicketNotFound { id: String },

    /// The backing store itself is absent.
    #[error("File not found: {}", .0.display())]
    StoreNotFound(PathBuf),

    // === Storage Errors ===
    /// Stored content is not a valid ticket collection.
    #[error("Error reading tickets from file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the backing file failed.
    #[error("Error writing tickets to file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The collection could not be encoded.
    #[error("Error serializing tickets: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl TicketError {
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for both a missing store and a missing ticket.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::TicketNotFound { .. } | Self::StoreNotFound(_))
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Result type using `TicketError`.
pub type Result<T> = std::result::Result<T, TicketError>;
