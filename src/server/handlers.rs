//! Ticket endpoint handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use tickets_lib::Ticket;

use super::AppState;
use super::error::{ApiError, INVALID_TICKET_MESSAGE};

type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// Body returned after a successful create.
#[derive(Debug, Serialize)]
pub struct Created {
    message: String,
    #[serde(rename = "TicketID")]
    ticket_id: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn list_tickets(State(state): State<AppState>) -> ApiResult<Json<Vec<Ticket>>> {
    tracing::info!("listing tickets");
    let tickets = state
        .service
        .get_all_tickets()
        .await
        .map_err(ApiError::from_read)?;
    tracing::debug!(count = tickets.len(), "tickets loaded");
    Ok(Json(tickets))
}

pub async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Ticket>> {
    tracing::info!(ticket_id = %id, "fetching ticket");
    state
        .service
        .get_ticket_by_id(&id)
        .await
        .map_err(ApiError::from_read)?
        .map(Json)
        .ok_or_else(|| ApiError::ticket_not_found(&id))
}

/// Fields the create endpoint insists on before the service sees the ticket.
fn has_required_fields(ticket: &Ticket) -> bool {
    [
        ticket.id(),
        ticket.description.as_deref().unwrap_or_default(),
        ticket.status(),
        ticket.priority(),
    ]
    .iter()
    .all(|field| !field.trim().is_empty())
}

pub async fn create_ticket(
    State(state): State<AppState>,
    payload: Result<Json<Ticket>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Created>)> {
    let Json(mut ticket) = payload.map_err(|rejection| ApiError::invalid_json(&rejection))?;

    if !has_required_fields(&ticket) {
        tracing::warn!("invalid ticket data received: missing required fields");
        return Err(ApiError::invalid_request(INVALID_TICKET_MESSAGE));
    }

    ticket.stamp(Utc::now());
    let ticket_id = ticket.id().to_string();

    let _guard = state.write_gate.lock().await;
    state
        .service
        .add_ticket(ticket)
        .await
        .map_err(ApiError::from_write)?;

    tracing::info!(ticket_id = %ticket_id, "ticket added");
    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: format!("Ticket added successfully: {ticket_id}"),
            ticket_id,
        }),
    ))
}

pub async fn update_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Ticket>, JsonRejection>,
) -> ApiResult<Json<Ticket>> {
    let Json(mut ticket) = payload.map_err(|rejection| ApiError::invalid_json(&rejection))?;

    if ticket.id().trim().is_empty() {
        ticket.ticket_id = Some(id.clone());
    } else if !ticket.has_id(&id) {
        return Err(ApiError::invalid_request(format!(
            "TicketID '{}' does not match path '{id}'",
            ticket.id()
        )));
    }

    let _guard = state.write_gate.lock().await;
    state
        .service
        .update_ticket(ticket)
        .await
        .map_err(ApiError::from_write)?;
    tracing::info!(ticket_id = %id, "ticket updated");

    state
        .service
        .get_ticket_by_id(&id)
        .await
        .map_err(ApiError::from_read)?
        .map(Json)
        .ok_or_else(|| ApiError::ticket_not_found(&id))
}

pub async fn delete_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let _guard = state.write_gate.lock().await;
    let removed = state
        .service
        .delete_ticket(&id)
        .await
        .map_err(ApiError::from_write)?;

    if removed {
        tracing::info!(ticket_id = %id, "ticket deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::ticket_not_found(&id))
    }
}

/// Root of the API; lists the routes.
pub async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "service": "tickets",
        "version": env!("CARGO_PKG_VERSION"),
        "routes": [
            "GET /health",
            "GET /api/tickets",
            "GET /api/tickets/{id}",
            "POST /api/tickets",
            "PUT /api/tickets/{id}",
            "DELETE /api/tickets/{id}",
        ],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let complete = Ticket {
            status: Some("Open".to_string()),
            priority: Some("High".to_string()),
            ..Ticket::new("1", "Desc")
        };
        assert!(has_required_fields(&complete));

        let mut missing_priority = complete.clone();
        missing_priority.priority = Some(" ".to_string());
        assert!(!has_required_fields(&missing_priority));

        let mut missing_description = complete.clone();
        missing_description.description = None;
        assert!(!has_required_fields(&missing_description));

        let mut missing_status = complete.clone();
        missing_status.status = None;
        assert!(!has_required_fields(&missing_status));

        let mut missing_id = complete;
        missing_id.ticket_id = None;
        assert!(!has_required_fields(&missing_id));
    }
}
