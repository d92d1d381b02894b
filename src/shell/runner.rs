//! External command execution for probes.
//!
//! Every probe goes through a [`CommandRunner`]. The runner executes one
//! command synchronously, captures stdout and stderr, and classifies how
//! the execution went. It never retries and never interprets output.

use std::io::{self, Read};
#[cfg(unix)]
use std::os::unix::process::CommandExt;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

/// How often a child is polled while a timeout is armed.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Classified result of running one external command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Execution {
    /// The command ran and exited with code 0.
    Success { stdout: String, stderr: String },

    /// The command ran but exited non-zero (or was killed by a signal).
    Failure {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// The executable could not be located.
    NotFound,

    /// The OS refused to launch the process for any other reason.
    SystemFailure { message: String },

    /// The command was still running when the timeout elapsed and was killed.
    TimedOut { after: Duration },
}

/// Runs external commands on behalf of probes.
///
/// Implemented by [`SystemRunner`] for real processes and by
/// [`ScriptedRunner`](super::ScriptedRunner) for tests.
pub trait CommandRunner {
    /// Run `program` with `args` and wait for it to finish.
    fn run(&self, program: &str, args: &[&str]) -> Execution;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    /// Create a runner that waits for commands indefinitely.
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill commands that run longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Execution {
        let line = command_line(program, args);
        debug!(command = %line, "running probe command");

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let execution = match self.timeout {
            None => match cmd.output() {
                Ok(output) => classify(
                    output.status,
                    String::from_utf8_lossy(&output.stdout).into_owned(),
                    String::from_utf8_lossy(&output.stderr).into_owned(),
                ),
                Err(err) => launch_error(err),
            },
            Some(limit) => run_with_timeout(cmd, limit),
        };

        debug!(command = %line, outcome = outcome_name(&execution), "probe command finished");
        execution
    }
}

/// Join a program and its arguments the way a user would type them.
pub fn command_line(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

fn classify(status: ExitStatus, stdout: String, stderr: String) -> Execution {
    if status.success() {
        Execution::Success { stdout, stderr }
    } else {
        Execution::Failure {
            code: status.code(),
            stdout,
            stderr,
        }
    }
}

fn launch_error(err: io::Error) -> Execution {
    if err.kind() == io::ErrorKind::NotFound {
        Execution::NotFound
    } else {
        Execution::SystemFailure {
            message: err.to_string(),
        }
    }
}

fn outcome_name(execution: &Execution) -> &'static str {
    match execution {
        Execution::Success { .. } => "success",
        Execution::Failure { .. } => "failure",
        Execution::NotFound => "not_found",
        Execution::SystemFailure { .. } => "system_failure",
        Execution::TimedOut { .. } => "timed_out",
    }
}

fn run_with_timeout(mut cmd: Command, limit: Duration) -> Execution {
    // The tool and everything it spawns share one process group, so a
    // timeout takes down wrapper scripts together with their children.
    #[cfg(unix)]
    cmd.process_group(0);

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => return launch_error(err),
    };

    // Pipes are drained on their own threads so a chatty child can't block
    // on a full pipe while we poll for its exit.
    let stdout_reader = child.stdout.take().map(spawn_reader);
    let stderr_reader = child.stderr.take().map(spawn_reader);

    // A limit too large to represent never expires.
    let deadline = Instant::now().checked_add(limit);
    let expired = || deadline.is_some_and(|d| Instant::now() >= d);

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if expired() => {
                terminate(&mut child);
                return Execution::TimedOut { after: limit };
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(err) => {
                terminate(&mut child);
                return Execution::SystemFailure {
                    message: err.to_string(),
                };
            }
        }
    };

    // A descendant left running in the background still holds the pipes.
    while !(drained(&stdout_reader) && drained(&stderr_reader)) {
        if expired() {
            kill_group(child.id());
            return Execution::TimedOut { after: limit };
        }
        thread::sleep(POLL_INTERVAL);
    }

    classify(status, join_reader(stdout_reader), join_reader(stderr_reader))
}

/// Kill the child's whole process group and reap the child.
///
/// Reader threads are not joined afterwards; they finish on their own once
/// the last process holding the pipes is gone.
fn terminate(child: &mut Child) {
    kill_group(child.id());
    let _ = child.kill();
    let _ = child.wait();
}

#[cfg(unix)]
fn kill_group(pid: u32) {
    // SAFETY: killpg only sends a signal. The child was spawned with
    // process_group(0), so its pid is also its process group id.
    unsafe {
        libc::killpg(pid as libc::pid_t, libc::SIGKILL);
    }
}

#[cfg(not(unix))]
fn kill_group(_pid: u32) {}

fn drained(reader: &Option<JoinHandle<String>>) -> bool {
    reader.as_ref().is_none_or(JoinHandle::is_finished)
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}
