//! The `motion-doctor state` command.
//!
//! Dumps what the probes saw, before any evaluation, as pretty JSON.

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::probes::ProbeSet;
use crate::shell::CommandRunner;

use super::dispatcher::{Command, CommandResult};

/// Prints raw probe outcomes.
pub struct StateCommand<'a> {
    runner: &'a dyn CommandRunner,
    sdk_root: &'a Path,
}

impl<'a> StateCommand<'a> {
    /// Create a new state command.
    pub fn new(runner: &'a dyn CommandRunner, sdk_root: &'a Path) -> Self {
        Self { runner, sdk_root }
    }
}

impl Command for StateCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let observations = ProbeSet::new(self.runner, self.sdk_root).run();
        serde_json::to_writer_pretty(&mut *out, &observations)?;
        writeln!(out)?;
        Ok(CommandResult::success())
    }
}
