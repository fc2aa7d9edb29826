//! Output formatting for `tickets_rust`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//!
//! # JSON Output Types
//!
//! - [`TicketWithCounts`] - Ticket with its comment count (list)
//! - [`MutationResult`] - Outcome of create/update/delete

mod output;
mod text;

pub use output::{MutationResult, TicketWithCounts};
pub use text::{format_label, format_status_icon, format_ticket_details, format_ticket_line};
