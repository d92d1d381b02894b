//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and builds the process runner
//! from the resolved settings.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod state;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
