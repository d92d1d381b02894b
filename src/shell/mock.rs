//! Scripted command runner for testing.
//!
//! [`ScriptedRunner`] replays canned [`Execution`]s keyed by the full
//! command line, so the whole pipeline can be exercised without any of the
//! probed tools installed. Unscripted commands behave like missing binaries.

use std::cell::RefCell;
use std::collections::HashMap;

use super::runner::{command_line, CommandRunner, Execution};

/// A [`CommandRunner`] that returns pre-recorded executions.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    script: HashMap<String, Execution>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    /// Create a runner with no scripted commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script an arbitrary execution for a command line such as `"motion --version"`.
    pub fn on(mut self, command: &str, execution: Execution) -> Self {
        self.script.insert(command.to_string(), execution);
        self
    }

    /// Script a successful run that prints `output` on stdout.
    pub fn stdout(self, command: &str, output: &str) -> Self {
        self.on(
            command,
            Execution::Success {
                stdout: output.to_string(),
                stderr: String::new(),
            },
        )
    }

    /// Script a successful run that prints `output` on stderr.
    pub fn stderr(self, command: &str, output: &str) -> Self {
        self.on(
            command,
            Execution::Success {
                stdout: String::new(),
                stderr: output.to_string(),
            },
        )
    }

    /// Command lines run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether a command line has been run.
    pub fn was_called(&self, command: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == command)
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Execution {
        let line = command_line(program, args);
        let execution = self
            .script
            .get(&line)
            .cloned()
            .unwrap_or(Execution::NotFound);
        self.calls.borrow_mut().push(line);
        execution
    }
}
