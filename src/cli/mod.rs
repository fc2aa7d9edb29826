//! Command-line interface for `tickets_rust`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tickets_lib::{JsonFileStore, StoreRepository, TicketService};

use crate::config::{CliOverrides, Config};
use crate::logging;

/// `tickets_rust` (tk) - file-backed ticket tracker.
#[derive(Parser, Debug)]
#[command(name = "tk")]
#[command(
    author,
    version,
    about = "File-backed ticket tracker (JSON store + HTTP API)",
    long_about = None,
    after_help = "All tickets live in one JSON array; every command reads and rewrites the whole file."
)]
pub struct Cli {
    /// Path to the tickets file
    #[arg(long, global = true, env = "TICKETS_FILE")]
    pub file: Option<PathBuf>,

    /// Path to a YAML config file
    #[arg(long, global = true, env = "TICKETS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty tickets file
    Init(InitArgs),

    /// Create a new ticket
    Create(CreateArgs),

    /// Update a ticket's description and priority
    Update(UpdateArgs),

    /// Delete a ticket
    Delete(DeleteArgs),

    /// List tickets
    List,

    /// Show ticket details
    Show(ShowArgs),

    /// Run the HTTP API
    Serve(ServeArgs),

    /// Check the tickets file for problems
    Doctor,

    /// Show version information
    Version,
}

#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Overwrite an existing tickets file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// Ticket ID
    pub id: String,

    /// Ticket description
    pub description: String,

    /// Priority label
    #[arg(short, long, default_value = "Medium")]
    pub priority: String,

    /// ID of the reporting user
    #[arg(long)]
    pub created_by: Option<String>,

    /// ID of the assigned user
    #[arg(long)]
    pub assign: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
    /// Ticket ID
    pub id: String,

    /// New description
    #[arg(short, long)]
    pub description: String,

    /// New priority label (keeps the stored one if omitted)
    #[arg(short, long)]
    pub priority: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct DeleteArgs {
    /// Ticket ID
    pub id: String,
}

#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Ticket IDs
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "TICKETS_BIND")]
    pub bind: Option<SocketAddr>,

    /// Fail requests instead of creating a missing tickets file
    #[arg(long)]
    pub no_create: bool,
}

impl Cli {
    /// Collect flag values that override config file settings.
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        let (bind, create_if_missing) = match &self.command {
            Some(Commands::Serve(args)) => (args.bind, args.no_create.then_some(false)),
            _ => (None, None),
        };
        CliOverrides {
            config: self.config.clone(),
            tickets_path: self.file.clone(),
            bind,
            create_if_missing,
            log_json: self.log_json,
        }
    }
}

/// Everything a command needs: resolved config and output mode.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    pub json: bool,
}

impl CommandContext {
    #[must_use]
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.config.tickets_path)
    }

    #[must_use]
    pub fn service(&self) -> TicketService {
        let store = std::sync::Arc::new(self.store());
        TicketService::new(std::sync::Arc::new(StoreRepository::new(store)))
    }

    /// Print `value` as pretty JSON on stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> crate::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if configuration, logging setup or the command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.overrides())?;
    logging::init_logging(cli.verbose, cli.quiet, config.log_format)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let ctx = CommandContext {
        config,
        json: cli.json,
    };
    tracing::debug!(path = %ctx.config.tickets_path.display(), "resolved tickets file");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match cli.command {
        Some(command) => runtime.block_on(dispatch(command, &ctx))?,
        None => println!("tk - file-backed ticket tracker. Use --help for usage."),
    }

    Ok(())
}

async fn dispatch(command: Commands, ctx: &CommandContext) -> crate::Result<()> {
    tracing::debug!(command = command.name(), "dispatching");
    match command {
        Commands::Init(args) => commands::init::execute(&args, ctx).await,
        Commands::Create(args) => commands::create::execute(args, ctx).await,
        Commands::Update(args) => commands::update::execute(args, ctx).await,
        Commands::Delete(args) => commands::delete::execute(&args, ctx).await,
        Commands::List => commands::list::execute(ctx).await,
        Commands::Show(args) => commands::show::execute(&args, ctx).await,
        Commands::Serve(_) => commands::serve::execute(ctx).await,
        Commands::Doctor => commands::doctor::execute(ctx).await,
        Commands::Version => commands::version::execute(ctx),
    }
}

impl Commands {
    const fn name(&self) -> &'static str {
        match self {
            Self::Init(_) => "init",
            Self::Create(_) => "create",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
            Self::List => "list",
            Self::Show(_) => "show",
            Self::Serve(_) => "serve",
            Self::Doctor => "doctor",
            Self::Version => "version",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from([
            "tk",
            "--file",
            "data.json",
            "serve",
            "--bind",
            "127.0.0.1:9999",
            "--no-create",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.tickets_path, Some(PathBuf::from("data.json")));
        assert_eq!(overrides.bind, Some("127.0.0.1:9999".parse().unwrap()));
        assert_eq!(overrides.create_if_missing, Some(false));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tk", "list", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_create_defaults_priority() {
        let cli = Cli::try_parse_from(["tk", "create", "T1", "Broken printer"]).unwrap();
        let Some(Commands::Create(args)) = cli.command else {
            panic!("expected create");
        };
        assert_eq!(args.priority, "Medium");
        assert_eq!(args.description, "Broken printer");
    }

    #[test]
    fn test_show_requires_id() {
        assert!(Cli::try_parse_from(["tk", "show"]).is_err());
    }
}
