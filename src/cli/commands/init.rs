//! Init command implementation.

use serde_json::json;
use tickets_lib::TicketStore;

use crate::cli::{CommandContext, InitArgs};
use crate::error::{AppError, Result};

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if the tickets file exists (without `--force`) or cannot be written.
pub async fn execute(args: &InitArgs, ctx: &CommandContext) -> Result<()> {
    let store = ctx.store();
    let path = store.path().to_path_buf();

    if store.exists().await? && !args.force {
        return Err(AppError::AlreadyInitialized { path });
    }

    store.create_empty().await?;
    tracing::info!(path = %path.display(), force = args.force, "initialized tickets file");

    if ctx.json {
        ctx.print_json(&json!({ "path": path.display().to_string(), "initialized": true }))?;
    } else {
        println!("Initialized empty ticket store at {}", path.display());
    }
    Ok(())
}
