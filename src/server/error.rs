//! Translation of core failures into HTTP responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tickets_lib::TicketError;

/// Message for a missing tickets file on the read endpoints.
pub const STORE_NOT_FOUND_MESSAGE: &str = "Tickets file not found.";
/// Message for an unparseable tickets file.
pub const PARSE_ERROR_MESSAGE: &str = "Error reading ticket data.";
/// Message for any malformed or incomplete POST body.
pub const INVALID_TICKET_MESSAGE: &str = "Invalid ticket data provided.";

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorPayload,
}

#[derive(Debug, Serialize)]
struct ErrorPayload {
    code: &'static str,
    message: String,
}

/// An error response: status, stable code and human message.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_request", message)
    }

    pub fn ticket_not_found(id: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("Ticket with ID: {id} not found."),
        )
    }

    pub fn invalid_json(rejection: &JsonRejection) -> Self {
        tracing::warn!(reason = %rejection.body_text(), "rejected request body");
        Self::invalid_request(INVALID_TICKET_MESSAGE)
    }

    /// Translation for read endpoints: a missing store reads as "not found".
    pub fn from_read(err: TicketError) -> Self {
        match err {
            TicketError::StoreNotFound(ref path) => {
                tracing::warn!(path = %path.display(), "no ticket file found");
                Self::new(StatusCode::NOT_FOUND, "store_not_found", STORE_NOT_FOUND_MESSAGE)
            }
            other => Self::from_write(other),
        }
    }

    /// Translation for write endpoints: a missing store is a server fault.
    pub fn from_write(err: TicketError) -> Self {
        match err {
            TicketError::Validation { message, .. } => {
                Self::new(StatusCode::BAD_REQUEST, "validation_failed", message)
            }
            TicketError::TicketNotFound { id } => Self::ticket_not_found(&id),
            TicketError::StoreNotFound(path) => {
                tracing::error!(path = %path.display(), "ticket file missing on write");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "store_not_found",
                    STORE_NOT_FOUND_MESSAGE,
                )
            }
            err @ TicketError::Parse { .. } => {
                tracing::error!(error = %err, "failed to parse ticket data");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "parse_error",
                    PARSE_ERROR_MESSAGE,
                )
            }
            err @ TicketError::Io { .. } => {
                tracing::error!(error = %err, "ticket file I/O failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "io_error",
                    "Error accessing ticket data.",
                )
            }
            err @ TicketError::Serialize(_) => {
                tracing::error!(error = %err, "failed to encode tickets");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred.",
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorPayload {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}
