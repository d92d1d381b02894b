//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::report::DoctorTheme;
use crate::shell::{CommandRunner, SystemRunner};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
    theme: DoctorTheme,
}

impl CommandDispatcher {
    /// Create a new dispatcher with resolved settings.
    pub fn new(settings: Settings, theme: DoctorTheme) -> Self {
        Self { settings, theme }
    }

    /// Dispatch a command against the real system.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        let runner = SystemRunner::new().with_timeout(self.settings.probe_timeout);
        self.dispatch_with(cli, &runner, out)
    }

    /// Dispatch a command, probing through `runner`.
    pub fn dispatch_with(
        &self,
        cli: &Cli,
        runner: &dyn CommandRunner,
        out: &mut dyn Write,
    ) -> Result<CommandResult> {
        debug!(command = ?cli.command, settings = ?self.settings, "dispatching");

        match &cli.command {
            Some(Commands::Check) | None => {
                let cmd = super::check::CheckCommand::new(
                    runner,
                    &self.settings.sdk_root,
                    self.theme.clone(),
                );
                cmd.execute(out)
            }
            Some(Commands::State) => {
                let cmd = super::state::StateCommand::new(runner, &self.settings.sdk_root);
                cmd.execute(out)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(out)
            }
        }
    }
}
