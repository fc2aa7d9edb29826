//! CRUD over the full ticket collection.
//!
//! Every operation loads the whole collection, works on the in-memory copy,
//! and (for mutations) saves the whole collection back. Nothing is cached
//! between calls.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Result, TicketError};
use crate::model::Ticket;
use crate::store::TicketStore;

/// Ticket persistence operations.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// All stored tickets, possibly empty.
    async fn get_all(&self) -> Result<Vec<Ticket>>;

    /// First ticket whose ID equals `id`, or `None`. An empty `id` matches nothing.
    async fn get_by_id(&self, id: &str) -> Result<Option<Ticket>>;

    /// Append `ticket`. IDs are not checked for uniqueness.
    async fn add(&self, ticket: Ticket) -> Result<()>;

    /// Overwrite `Description`, `Status` and `Priority` of the first ticket
    /// with a matching ID.
    ///
    /// # Errors
    ///
    /// `TicketNotFound` if no ticket has that ID.
    async fn update(&self, ticket: Ticket) -> Result<()>;

    /// Remove the first ticket with a matching ID. Returns whether one was
    /// removed. An empty `id` removes nothing.
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// `TicketRepository` over any `TicketStore`.
#[derive(Clone)]
pub struct StoreRepository {
    store: Arc<dyn TicketStore>,
}

impl StoreRepository {
    #[must_use]
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<dyn TicketStore> {
        &self.store
    }
}

impl std::fmt::Debug for StoreRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreRepository").finish_non_exhaustive()
    }
}

#[async_trait]
impl TicketRepository for StoreRepository {
    async fn get_all(&self) -> Result<Vec<Ticket>> {
        self.store.load().await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Ticket>> {
        if id.is_empty() {
            return Ok(None);
        }
        let tickets = self.store.load().await?;
        Ok(tickets.into_iter().find(|t| t.has_id(id)))
    }

    async fn add(&self, ticket: Ticket) -> Result<()> {
        let mut tickets = self.store.load().await?;
        tickets.push(ticket);
        self.store.save(&tickets).await
    }

    async fn update(&self, ticket: Ticket) -> Result<()> {
        let id = ticket.id().to_string();
        let mut tickets = self.store.load().await?;
        let existing = tickets
            .iter_mut()
            .find(|t| !id.is_empty() && t.has_id(&id))
            .ok_or(TicketError::TicketNotFound { id })?;

        // Dates, user references and comments stay as stored
        existing.description = ticket.description;
        existing.status = ticket.status;
        existing.priority = ticket.priority;

        self.store.save(&tickets).await
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        if id.is_empty() {
            return Ok(false);
        }
        let mut tickets = self.store.load().await?;
        let Some(pos) = tickets.iter().position(|t| t.has_id(id)) else {
            return Ok(false);
        };
        tickets.remove(pos);
        self.store.save(&tickets).await?;
        Ok(true)
    }
}
