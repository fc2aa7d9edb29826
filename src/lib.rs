//! `tickets_rust` - file-backed ticket tracker
//!
//! Adapters around the `tickets_lib` core: the `tk` command line and an
//! HTTP API over the same JSON tickets file.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`server`] - HTTP API using axum
//! - [`config`] - Layered configuration (defaults, YAML file, env, flags)
//! - [`logging`] - tracing subscriber setup
//! - [`error`] - Application error type
//! - [`format`] - Output formatting (text, JSON)

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod server;

pub use error::{AppError, Result};
