//! `tickets-lib`: ticket store, repository and service.
//!
//! The whole ticket collection lives in one JSON array. Each operation loads
//! it, works on an in-memory copy and, for writes, saves it back.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use tickets_lib::{JsonFileStore, StoreRepository, Ticket, TicketService};
//!
//! # async fn demo() -> tickets_lib::Result<()> {
//! let store = Arc::new(JsonFileStore::new("tickets.json"));
//! let service = TicketService::new(Arc::new(StoreRepository::new(store)));
//!
//! service.add_ticket(Ticket::new("T-1", "Printer on fire")).await?;
//! let ticket = service.get_ticket_by_id("T-1").await?;
//! assert_eq!(ticket.as_ref().map(Ticket::status), Some("New"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod store;

pub use error::{Result, TicketError};
pub use model::{Comment, STATUS_NEW, Ticket, User};
pub use repository::{StoreRepository, TicketRepository};
pub use service::{TicketService, validate_and_prepare};
pub use store::{JsonFileStore, MemoryStore, TicketStore};
