//! HTTP adapter for the ticket service.
//!
//! Routes:
//! - `GET /health`
//! - `GET|POST /api/tickets`
//! - `GET|PUT|DELETE /api/tickets/:id`
//!
//! Writes inside one server process are serialised through a single gate so
//! concurrent requests cannot interleave their load/save cycles. Other
//! processes writing the same file are not coordinated.

mod error;
mod handlers;

pub use error::{ApiError, INVALID_TICKET_MESSAGE, PARSE_ERROR_MESSAGE, STORE_NOT_FOUND_MESSAGE};

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tickets_lib::{JsonFileStore, StoreRepository, TicketService, TicketStore};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::{AppError, Result};

/// Shared handler state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub service: TicketService,
    write_gate: Arc<Mutex<()>>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        let repository = Arc::new(StoreRepository::new(store));
        Self {
            service: TicketService::new(repository),
            write_gate: Arc::new(Mutex::new(())),
        }
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route(
            "/api/tickets",
            get(handlers::list_tickets).post(handlers::create_ticket),
        )
        .route(
            "/api/tickets/:id",
            get(handlers::get_ticket)
                .put(handlers::update_ticket)
                .delete(handlers::delete_ticket),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the tickets file cannot be prepared, the address
/// cannot be bound, or the server fails.
pub async fn serve(config: &Config) -> Result<()> {
    let store = JsonFileStore::new(&config.tickets_path);
    if config.create_if_missing && store.create_if_missing().await? {
        tracing::info!(path = %config.tickets_path.display(), "created empty tickets file");
    }

    let app = router(AppState::new(Arc::new(store)));
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| AppError::Server(format!("failed to bind {}: {e}", config.bind)))?;

    tracing::info!(
        addr = %config.bind,
        path = %config.tickets_path.display(),
        "ticket API listening"
    );
    eprintln!("Listening on http://{}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
