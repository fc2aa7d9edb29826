use serde::{Deserialize, Serialize};
use tickets_lib::Ticket;

/// Ticket with its comment count for list views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketWithCounts {
    #[serde(flatten)]
    pub ticket: Ticket,
    #[serde(rename = "CommentCount")]
    pub comment_count: usize,
}

impl From<Ticket> for TicketWithCounts {
    fn from(ticket: Ticket) -> Self {
        let comment_count = ticket.comment_count();
        Self {
            ticket,
            comment_count,
        }
    }
}

/// Result of a create/update/delete command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResult {
    pub action: String,
    pub ticket_id: String,
    /// False only for a delete that matched nothing.
    pub changed: bool,
}

impl MutationResult {
    #[must_use]
    pub fn new(action: &str, ticket_id: &str, changed: bool) -> Self {
        Self {
            action: action.to_string(),
            ticket_id: ticket_id.to_string(),
            changed,
        }
    }
}
