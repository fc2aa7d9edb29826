//! Create command implementation.

use chrono::Utc;
use tickets_lib::Ticket;

use crate::cli::{CommandContext, CreateArgs};
use crate::error::Result;
use crate::format::MutationResult;

/// Execute the create command.
///
/// The status is always stored as "New"; the service sets it.
///
/// # Errors
///
/// Returns an error if validation fails or the tickets file cannot be updated.
pub async fn execute(args: CreateArgs, ctx: &CommandContext) -> Result<()> {
    let mut ticket = Ticket {
        priority: Some(args.priority),
        created_by_user_id: args.created_by,
        assigned_to_user_id: args.assign,
        ..Ticket::new(args.id, args.description)
    };
    ticket.stamp(Utc::now());

    let id = ticket.id().to_string();
    let description = ticket.description.clone().unwrap_or_default();

    ctx.service().add_ticket(ticket).await?;
    tracing::info!(ticket_id = %id, "ticket created");

    if ctx.json {
        ctx.print_json(&MutationResult::new("create", &id, true))?;
    } else {
        println!("Created {id}: {}", description.trim());
    }
    Ok(())
}
