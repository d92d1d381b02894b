//! The diagnostic pipeline: probe, evaluate, report.
//!
//! [`Doctor`] runs one section's tools, evaluates them and hands the
//! finished [`Section`] on before touching the next section's tools.
//! Cross-probe context is threaded through as it becomes known (the
//! detected RubyMotion release picks the expected Xcode). Every run starts
//! from scratch.
//!
//! # Example
//!
//! ```
//! use motion_doctor::doctor::Doctor;
//! use motion_doctor::report::{render_to_string, DoctorTheme};
//! use motion_doctor::shell::ScriptedRunner;
//!
//! let runner = ScriptedRunner::new().stdout("motion --version", "9.4\n");
//! let doctor = Doctor::new(&runner, "/nonexistent");
//! let report = doctor.examine_with_env(|_| Err(std::env::VarError::NotPresent));
//!
//! let text = render_to_string(&report, DoctorTheme::plain()).unwrap();
//! assert!(text.contains("RubyMotion            : 9.4"));
//! ```

use std::convert::Infallible;
use std::env::VarError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::evaluate::{
    evaluate_java_home, evaluate_javac, evaluate_motion, evaluate_os, evaluate_rbenv,
    evaluate_rubies, evaluate_sdks, evaluate_xcode, evaluate_xcode_path, evaluate_xcode_select,
    XCODE_BASELINE,
};
use crate::probes::{all_sdk_versions, java_home, tools};
use crate::report::{Report, ReportWriter, Section};
use crate::shell::CommandRunner;

/// Title printed at the top of every report.
pub const REPORT_TITLE: &str = "RubyMotion Doctor";

/// Runs the full pipeline.
pub struct Doctor<'a> {
    runner: &'a dyn CommandRunner,
    sdk_root: PathBuf,
}

impl<'a> Doctor<'a> {
    /// Create a doctor that runs tools through `runner` and reads SDKs under `sdk_root`.
    pub fn new(runner: &'a dyn CommandRunner, sdk_root: impl AsRef<Path>) -> Self {
        Self {
            runner,
            sdk_root: sdk_root.as_ref().to_path_buf(),
        }
    }

    /// Probe and evaluate against the real environment.
    pub fn examine(&self) -> Report {
        self.examine_with_env(|key: &str| std::env::var(key))
    }

    /// Probe and evaluate with a custom env var lookup function.
    pub fn examine_with_env<F>(&self, env_fn: F) -> Report
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let mut sections = Vec::new();
        let collected: Result<(), Infallible> = self.each_section(&env_fn, |section| {
            sections.push(section);
            Ok(())
        });
        if let Err(never) = collected {
            match never {}
        }

        let report = Report::new(REPORT_TITLE, sections);
        info!(problems = report.has_problems(), "diagnosis complete");
        report
    }

    /// Check the real environment, writing each section as soon as its
    /// tools have answered.
    pub fn write_report<W: Write>(&self, writer: &mut ReportWriter<W>) -> io::Result<()> {
        self.write_report_with_env(writer, |key: &str| std::env::var(key))
    }

    /// Streaming variant of [`Doctor::examine_with_env`].
    pub fn write_report_with_env<W, F>(
        &self,
        writer: &mut ReportWriter<W>,
        env_fn: F,
    ) -> io::Result<()>
    where
        W: Write,
        F: Fn(&str) -> Result<String, VarError>,
    {
        writer.write_title(REPORT_TITLE)?;
        let mut problems = false;
        self.each_section(&env_fn, |section| {
            problems |= section.has_problems();
            writer.write_section(&section)
        })?;
        info!(problems, "diagnosis complete");
        writer.finish()
    }

    /// Run, evaluate and emit the sections in report order.
    ///
    /// Tools run in the same order as [`crate::probes::ProbeSet`]. Stops at
    /// the first error `emit` returns.
    fn each_section<F, E>(
        &self,
        env_fn: &F,
        mut emit: impl FnMut(Section) -> Result<(), E>,
    ) -> Result<(), E>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let runner = self.runner;

        let os = tools::os_release(runner);
        emit(Section::new("System", vec![evaluate_os(&os)]))?;

        let motion = tools::motion_version(runner);
        let mut rubymotion = vec![evaluate_motion(&motion)];
        rubymotion.extend(all_sdk_versions(&self.sdk_root).iter().map(evaluate_sdks));
        emit(Section::new("RubyMotion", rubymotion))?;

        let rbenv = tools::rbenv_version(runner);
        let rubies = tools::rbenv_rubies(runner);
        emit(Section::new(
            "Ruby",
            vec![evaluate_rbenv(&rbenv), evaluate_rubies(&rubies)],
        ))?;

        let xcode_select = tools::xcode_select_version(runner);
        let xcode_path = tools::xcode_select_path(runner);
        let xcode = tools::xcodebuild_version(runner, &xcode_path);
        emit(Section::new(
            "Xcode",
            vec![
                evaluate_xcode_select(&xcode_select),
                evaluate_xcode_path(&xcode_path),
                evaluate_xcode(&xcode, &motion, &XCODE_BASELINE),
            ],
        ))?;

        let javac = tools::javac_version(runner);
        let java_home = java_home(env_fn);
        emit(Section::new(
            "Java",
            vec![
                evaluate_javac(&javac),
                evaluate_java_home(java_home.as_deref()),
            ],
        ))
    }
}
