//! Serve command implementation.

use crate::cli::CommandContext;
use crate::error::Result;
use crate::server;

/// Execute the serve command. Runs until interrupted.
///
/// # Errors
///
/// Returns an error if the server cannot start.
pub async fn execute(ctx: &CommandContext) -> Result<()> {
    server::serve(&ctx.config).await
}
