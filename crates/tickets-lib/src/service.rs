//! Business rules in front of the repository.
//!
//! Writes are validated and normalised first; reads are passed through.

use std::sync::Arc;

use crate::error::{Result, TicketError};
use crate::model::{STATUS_NEW, Ticket};
use crate::repository::TicketRepository;

/// Check that `ticket` may be written and normalise it.
///
/// Every accepted ticket leaves with `Status = "New"`, whatever it carried
/// before. This applies to updates as well as creates.
///
/// # Errors
///
/// Returns `Validation` if the description is absent, empty or whitespace only.
pub fn validate_and_prepare(mut ticket: Ticket) -> Result<Ticket> {
    if ticket.has_blank_description() {
        return Err(TicketError::validation(
            "description",
            "Ticket description cannot be empty",
        ));
    }

    ticket.status = Some(STATUS_NEW.to_string());
    Ok(ticket)
}

/// Ticket operations exposed to adapters.
#[derive(Clone)]
pub struct TicketService {
    repository: Arc<dyn TicketRepository>,
}

impl std::fmt::Debug for TicketService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketService").finish_non_exhaustive()
    }
}

impl TicketService {
    #[must_use]
    pub fn new(repository: Arc<dyn TicketRepository>) -> Self {
        Self { repository }
    }

    /// See [`validate_and_prepare`].
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the description is blank.
    pub fn validate_and_prepare(ticket: Ticket) -> Result<Ticket> {
        validate_and_prepare(ticket)
    }

    pub async fn get_all_tickets(&self) -> Result<Vec<Ticket>> {
        self.repository.get_all().await
    }

    pub async fn get_ticket_by_id(&self, id: &str) -> Result<Option<Ticket>> {
        self.repository.get_by_id(id).await
    }

    /// Validate, then append.
    ///
    /// # Errors
    ///
    /// `Validation` before any I/O, otherwise whatever the repository returns.
    pub async fn add_ticket(&self, ticket: Ticket) -> Result<()> {
        let ticket = validate_and_prepare(ticket)?;
        self.repository.add(ticket).await
    }

    /// Validate, then update in place.
    ///
    /// # Errors
    ///
    /// `Validation` before any I/O, `TicketNotFound` if the ID is unknown.
    pub async fn update_ticket(&self, ticket: Ticket) -> Result<()> {
        let ticket = validate_and_prepare(ticket)?;
        self.repository.update(ticket).await
    }

    pub async fn delete_ticket(&self, id: &str) -> Result<bool> {
        self.repository.delete(id).await
    }
}
