//! Version command implementation.

use serde::Serialize;

use crate::cli::CommandContext;
use crate::error::Result;

#[derive(Serialize)]
struct VersionOutput<'a> {
    version: &'a str,
    build: &'a str,
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let build = if cfg!(debug_assertions) {
        "dev"
    } else {
        "release"
    };

    if ctx.json {
        ctx.print_json(&VersionOutput { version, build })?;
    } else {
        println!("tk {version} ({build})");
    }
    Ok(())
}
