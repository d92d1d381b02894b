//! Probe outcome types.
//!
//! A [`ProbeOutcome`] records what a probe saw, never whether that is
//! acceptable. Classification happens later in [`crate::evaluate`].

use serde::Serialize;
use tracing::{debug, warn};

use crate::shell::{command_line, CommandRunner, Execution};
use crate::version::ParseError;

/// The result of attempting to detect one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProbeOutcome<V> {
    /// The tool is installed and reported a parseable version.
    Present { value: V },

    /// The tool is not installed (or its prerequisite is missing).
    Absent,

    /// The tool exists but could not be run to completion.
    ExecutionFailed {
        source: FailureSource,
        message: String,
    },

    /// The tool ran but printed something the parser did not recognize.
    Unparseable { output: String, reason: String },
}

impl<V> ProbeOutcome<V> {
    /// Wrap a detected value.
    pub fn present(value: V) -> Self {
        ProbeOutcome::Present { value }
    }

    /// The detected value, if the tool is present.
    pub fn value(&self) -> Option<&V> {
        match self {
            ProbeOutcome::Present { value } => Some(value),
            _ => None,
        }
    }

    /// Whether the tool is present.
    pub fn is_present(&self) -> bool {
        matches!(self, ProbeOutcome::Present { .. })
    }
}

/// Who reported an execution failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureSource {
    /// The tool ran and exited non-zero.
    Tool,
    /// The OS could not launch the tool.
    System,
    /// The tool did not finish before the probe timeout.
    Timeout,
}

/// Which output stream a tool prints its version on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Stdout,
    /// Stderr, falling back to stdout when stderr holds no parseable
    /// version (blank, or only JVM banners such as `Picked up ...`).
    Stderr,
}

/// Run a command and turn its execution into an outcome.
///
/// Not-found maps to [`ProbeOutcome::Absent`]; a zero exit hands the chosen
/// channel to `parse`.
pub fn probe_command<V, F>(
    runner: &dyn CommandRunner,
    program: &str,
    args: &[&str],
    channel: Channel,
    parse: F,
) -> ProbeOutcome<V>
where
    F: Fn(&str) -> Result<V, ParseError>,
{
    match runner.run(program, args) {
        Execution::Success { stdout, stderr } => match parse_channel(channel, stdout, stderr, parse) {
            Ok(value) => ProbeOutcome::present(value),
            Err((text, err)) => {
                warn!(
                    command = %command_line(program, args),
                    error = %err,
                    "unrecognized tool output"
                );
                ProbeOutcome::Unparseable {
                    output: text.trim().to_string(),
                    reason: err.to_string(),
                }
            }
        },
        Execution::Failure {
            code,
            stdout,
            stderr,
        } => ProbeOutcome::ExecutionFailed {
            source: FailureSource::Tool,
            message: failure_message(code, &stdout, &stderr),
        },
        Execution::NotFound => {
            debug!(program, "not installed");
            ProbeOutcome::Absent
        }
        Execution::SystemFailure { message } => ProbeOutcome::ExecutionFailed {
            source: FailureSource::System,
            message,
        },
        Execution::TimedOut { after } => ProbeOutcome::ExecutionFailed {
            source: FailureSource::Timeout,
            message: format!("no response after {}s", after.as_secs_f32()),
        },
    }
}

/// Describe a non-zero exit using whatever the tool printed.
/// Parse the channel's text. On failure, returns the text that was shown to
/// the parser alongside the error.
fn parse_channel<V, F>(
    channel: Channel,
    stdout: String,
    stderr: String,
    parse: F,
) -> Result<V, (String, ParseError)>
where
    F: Fn(&str) -> Result<V, ParseError>,
{
    match channel {
        Channel::Stdout => parse(&stdout).map_err(|err| (stdout, err)),
        Channel::Stderr => match parse(&stderr) {
            Ok(value) => Ok(value),
            Err(_) if stderr.trim().is_empty() => parse(&stdout).map_err(|err| (stdout, err)),
            Err(err) => parse(&stdout).map_err(|_| (stderr, err)),
        },
    }
}

fn failure_message(code: Option<i32>, stdout: &str, stderr: &str) -> String {
    let printed = [stderr, stdout]
        .into_iter()
        .flat_map(str::lines)
        .map(str::trim)
        .find(|line| !line.is_empty());

    match (printed, code) {
        (Some(line), _) => line.to_string(),
        (None, Some(code)) => format!("exited with code {}", code),
        (None, None) => "terminated by signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ScriptedRunner;
    use crate::version::parse_motion_version;
    use crate::version::ReleaseVersion;
    use std::time::Duration;

    fn motion(runner: &ScriptedRunner) -> ProbeOutcome<ReleaseVersion> {
        probe_command(runner, "motion", &["--version"], Channel::Stdout, parse_motion_version)
    }

    #[test]
    fn success_is_parsed_into_present() {
        let runner = ScriptedRunner::new().stdout("motion --version", "9.4\n");
        assert_eq!(motion(&runner), ProbeOutcome::present(ReleaseVersion::new(9, 4)));
    }

    #[test]
    fn not_found_is_absent() {
        let runner = ScriptedRunner::new();
        assert_eq!(motion(&runner), ProbeOutcome::Absent);
    }

    #[test]
    fn non_zero_exit_is_tool_failure_with_stderr() {
        let runner = ScriptedRunner::new().on(
            "motion --version",
            Execution::Failure {
                code: Some(1),
                stdout: String::new(),
                stderr: "License expired\n".to_string(),
            },
        );
        assert_eq!(
            motion(&runner),
            ProbeOutcome::ExecutionFailed {
                source: FailureSource::Tool,
                message: "License expired".to_string(),
            }
        );
    }

    #[test]
    fn silent_failure_reports_exit_code() {
        let runner = ScriptedRunner::new().on(
            "motion --version",
            Execution::Failure {
                code: Some(70),
                stdout: String::new(),
                stderr: String::new(),
            },
        );
        match motion(&runner) {
            ProbeOutcome::ExecutionFailed { message, .. } => {
                assert_eq!(message, "exited with code 70")
            }
            other => panic!("Expected ExecutionFailed, got {:?}", other),
        }
    }

    #[test]
    fn launch_error_is_system_failure() {
        let runner = ScriptedRunner::new().on(
            "motion --version",
            Execution::SystemFailure {
                message: "Permission denied (os error 13)".to_string(),
            },
        );
        assert_eq!(
            motion(&runner),
            ProbeOutcome::ExecutionFailed {
                source: FailureSource::System,
                message: "Permission denied (os error 13)".to_string(),
            }
        );
    }

    #[test]
    fn timeout_is_its_own_source() {
        let runner = ScriptedRunner::new().on(
            "motion --version",
            Execution::TimedOut {
                after: Duration::from_secs(5),
            },
        );
        assert_eq!(
            motion(&runner),
            ProbeOutcome::ExecutionFailed {
                source: FailureSource::Timeout,
                message: "no response after 5s".to_string(),
            }
        );
    }

    #[test]
    fn garbage_output_is_unparseable_not_zero() {
        let runner = ScriptedRunner::new().stdout("motion --version", "oops\n");
        match motion(&runner) {
            ProbeOutcome::Unparseable { output, reason } => {
                assert_eq!(output, "oops");
                assert!(reason.contains("major.minor"));
            }
            other => panic!("Expected Unparseable, got {:?}", other),
        }
    }

    #[test]
    fn stderr_banner_falls_back_to_stdout_version() {
        let runner = ScriptedRunner::new().on(
            "motion --version",
            Execution::Success {
                stdout: "9.4\n".to_string(),
                stderr: "Picked up JAVA_TOOL_OPTIONS: -Dfile.encoding=UTF-8\n".to_string(),
            },
        );
        let outcome =
            probe_command(&runner, "motion", &["--version"], Channel::Stderr, parse_motion_version);
        assert_eq!(outcome, ProbeOutcome::present(ReleaseVersion::new(9, 4)));
    }

    #[test]
    fn stderr_channel_reports_stderr_when_neither_parses() {
        let runner = ScriptedRunner::new().on(
            "motion --version",
            Execution::Success {
                stdout: "nothing useful\n".to_string(),
                stderr: "broken\n".to_string(),
            },
        );
        let outcome =
            probe_command(&runner, "motion", &["--version"], Channel::Stderr, parse_motion_version);
        match outcome {
            ProbeOutcome::Unparseable { output, .. } => assert_eq!(output, "broken"),
            other => panic!("Expected Unparseable, got {:?}", other),
        }
    }

    #[test]
    fn stderr_channel_falls_back_to_stdout() {
        let runner = ScriptedRunner::new().stdout("motion --version", "9.4\n");
        let outcome =
            probe_command(&runner, "motion", &["--version"], Channel::Stderr, parse_motion_version);
        assert!(outcome.is_present());
    }

    #[test]
    fn value_accessor() {
        let present = ProbeOutcome::present(3);
        let absent: ProbeOutcome<i32> = ProbeOutcome::Absent;
        assert_eq!(present.value(), Some(&3));
        assert_eq!(absent.value(), None);
    }
}
