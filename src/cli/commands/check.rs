//! The `motion-doctor check` command.

use std::io::Write;
use std::path::Path;

use crate::doctor::Doctor;
use crate::error::Result;
use crate::report::{DoctorTheme, ReportWriter};
use crate::shell::CommandRunner;

use super::dispatcher::{Command, CommandResult};

/// Probes the toolchain and prints the report.
///
/// Sections are written as they are diagnosed, so a slow tool late in the
/// run doesn't hold back what is already known. Problems found are part of
/// the report, not a command failure.
pub struct CheckCommand<'a> {
    runner: &'a dyn CommandRunner,
    sdk_root: &'a Path,
    theme: DoctorTheme,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(runner: &'a dyn CommandRunner, sdk_root: &'a Path, theme: DoctorTheme) -> Self {
        Self {
            runner,
            sdk_root,
            theme,
        }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let mut writer = ReportWriter::new(out, self.theme.clone());
        Doctor::new(self.runner, self.sdk_root).write_report(&mut writer)?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ScriptedRunner;

    #[test]
    fn missing_toolchain_still_succeeds() {
        let runner = ScriptedRunner::new();
        let cmd = CheckCommand::new(&runner, Path::new("/nonexistent"), DoctorTheme::plain());
        let mut out = Vec::new();

        let result = cmd.execute(&mut out).unwrap();
        assert!(result.success);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("RubyMotion            : Not installed"));
        assert!(output.contains("iOS SDKs              : None"));
    }

    #[test]
    fn plain_theme_writes_no_escape_codes() {
        let runner = ScriptedRunner::new().stdout("motion --version", "9.4\n");
        let cmd = CheckCommand::new(&runner, Path::new("/nonexistent"), DoctorTheme::plain());
        let mut out = Vec::new();
        cmd.execute(&mut out).unwrap();
        assert!(!String::from_utf8(out).unwrap().contains('\u{1b}'));
    }
}
