//! Delete command implementation.

use crate::cli::{CommandContext, DeleteArgs};
use crate::error::Result;
use crate::format::MutationResult;

/// Execute the delete command. An unknown ID is reported, not treated as failure.
///
/// # Errors
///
/// Returns an error if the tickets file is missing, unreadable or unwritable.
pub async fn execute(args: &DeleteArgs, ctx: &CommandContext) -> Result<()> {
    let removed = ctx.service().delete_ticket(&args.id).await?;
    tracing::info!(ticket_id = %args.id, removed, "delete finished");

    if ctx.json {
        ctx.print_json(&MutationResult::new("delete", &args.id, removed))?;
    } else if removed {
        println!("Deleted {}", args.id);
    } else {
        println!("No ticket with ID: {}", args.id);
    }
    Ok(())
}
