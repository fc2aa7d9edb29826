//! Show command implementation.

use tickets_lib::TicketError;

use crate::cli::{CommandContext, ShowArgs};
use crate::error::Result;
use crate::format::format_ticket_details;

/// Execute the show command.
///
/// # Errors
///
/// Returns an error if the tickets file is unreadable or any ID is unknown.
pub async fn execute(args: &ShowArgs, ctx: &CommandContext) -> Result<()> {
    let service = ctx.service();

    let mut details = Vec::with_capacity(args.ids.len());
    for id in &args.ids {
        let ticket = service
            .get_ticket_by_id(id)
            .await?
            .ok_or_else(|| TicketError::TicketNotFound { id: id.clone() })?;
        details.push(ticket);
    }

    if ctx.json {
        ctx.print_json(&details)?;
    } else {
        for (i, ticket) in details.iter().enumerate() {
            if i > 0 {
                println!("----------------------------------------");
            }
            print!("{}", format_ticket_details(ticket));
        }
    }

    Ok(())
}
