//! Update command implementation.

use tickets_lib::Ticket;

use crate::cli::{CommandContext, UpdateArgs};
use crate::error::Result;
use crate::format::MutationResult;

/// Execute the update command.
///
/// Only description, priority and status change; status is reset to "New".
///
/// # Errors
///
/// Returns an error if validation fails, the ticket is unknown, or the
/// tickets file cannot be updated.
pub async fn execute(args: UpdateArgs, ctx: &CommandContext) -> Result<()> {
    let service = ctx.service();

    // Without --priority the stored value is read first. That is a separate
    // load from the one inside update_ticket, so a write by another process
    // in between can be overwritten with the priority read here.
    let priority = match args.priority {
        Some(priority) => Some(priority),
        // An unknown ID leaves this empty; the update below reports it
        None => service
            .get_ticket_by_id(&args.id)
            .await?
            .and_then(|t| t.priority),
    };

    let ticket = Ticket {
        priority,
        ..Ticket::new(args.id.clone(), args.description)
    };
    service.update_ticket(ticket).await?;
    tracing::info!(ticket_id = %args.id, "ticket updated");

    if ctx.json {
        ctx.print_json(&MutationResult::new("update", &args.id, true))?;
    } else {
        println!("Updated {}", args.id);
    }
    Ok(())
}
