//! List command implementation.

use crate::cli::CommandContext;
use crate::error::Result;
use crate::format::{TicketWithCounts, format_ticket_line};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the tickets file is missing or unreadable.
pub async fn execute(ctx: &CommandContext) -> Result<()> {
    let tickets = ctx.service().get_all_tickets().await?;
    tracing::debug!(count = tickets.len(), "loaded tickets");

    if ctx.json {
        let with_counts: Vec<TicketWithCounts> =
            tickets.into_iter().map(TicketWithCounts::from).collect();
        ctx.print_json(&with_counts)?;
    } else if tickets.is_empty() {
        println!("No tickets found.");
    } else {
        for ticket in &tickets {
            println!("{}", format_ticket_line(ticket));
        }
        println!("\n{} ticket(s)", tickets.len());
    }

    Ok(())
}
