//! External command execution.
//!
//! Probes never spawn processes themselves; they go through a
//! [`CommandRunner`]. [`SystemRunner`] runs real processes, and
//! [`ScriptedRunner`] replays canned results for tests.

pub mod mock;
pub mod runner;

pub use mock::ScriptedRunner;
pub use runner::{command_line, CommandRunner, Execution, SystemRunner};
