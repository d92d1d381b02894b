//! Tool detection.
//!
//! Each probe answers "what is installed?" and nothing else. Probes run
//! one after another on the calling thread, and a failing probe only
//! affects its own outcome.
//!
//! # Modules
//!
//! - [`outcome`] - The tagged [`ProbeOutcome`] every probe produces
//! - [`tools`] - Probes that run a tool and parse its version
//! - [`environment`] - Probes that read SDK directories and `JAVA_HOME`
//!
//! # Example
//!
//! ```
//! use motion_doctor::probes::ProbeSet;
//! use motion_doctor::shell::ScriptedRunner;
//!
//! let runner = ScriptedRunner::new().stdout("motion --version", "9.4\n");
//! let observations = ProbeSet::new(&runner, "/nonexistent")
//!     .run_with_env(|_| Err(std::env::VarError::NotPresent));
//!
//! assert!(observations.motion.is_present());
//! assert!(!observations.rbenv.is_present());
//! ```

pub mod environment;
pub mod outcome;
pub mod tools;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::shell::CommandRunner;
use crate::version::{ActivePath, BuildNumber, JdkVersion, OsRelease, ReleaseVersion, SemVer};

pub use environment::{
    all_sdk_versions, java_home, sdk_versions, Platform, SdkListing, DEFAULT_SDK_ROOT,
    JAVA_HOME_VAR,
};
pub use outcome::{probe_command, Channel, FailureSource, ProbeOutcome};

/// Everything the probes saw during one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observations {
    pub os: ProbeOutcome<OsRelease>,
    pub motion: ProbeOutcome<ReleaseVersion>,
    pub sdks: Vec<SdkListing>,
    pub rbenv: ProbeOutcome<SemVer>,
    pub rubies: ProbeOutcome<Vec<String>>,
    pub xcode_select: ProbeOutcome<BuildNumber>,
    pub xcode_path: ProbeOutcome<ActivePath>,
    pub xcode: ProbeOutcome<SemVer>,
    pub javac: ProbeOutcome<JdkVersion>,
    pub java_home: Option<PathBuf>,
}

/// The fixed set of probes, bound to a runner and SDK root.
pub struct ProbeSet<'a> {
    runner: &'a dyn CommandRunner,
    sdk_root: PathBuf,
}

impl<'a> ProbeSet<'a> {
    /// Create a probe set.
    pub fn new(runner: &'a dyn CommandRunner, sdk_root: impl AsRef<Path>) -> Self {
        Self {
            runner,
            sdk_root: sdk_root.as_ref().to_path_buf(),
        }
    }

    /// Run every probe against the real process environment.
    pub fn run(&self) -> Observations {
        self.run_with_env(|key: &str| std::env::var(key))
    }

    /// Run every probe with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn run_with_env<F>(&self, env_fn: F) -> Observations
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let runner = self.runner;

        let os = tools::os_release(runner);
        let motion = tools::motion_version(runner);
        let sdks = all_sdk_versions(&self.sdk_root);
        let rbenv = tools::rbenv_version(runner);
        let rubies = tools::rbenv_rubies(runner);
        let xcode_select = tools::xcode_select_version(runner);
        let xcode_path = tools::xcode_select_path(runner);
        let xcode = tools::xcodebuild_version(runner, &xcode_path);
        let javac = tools::javac_version(runner);
        let java_home = java_home(&env_fn);

        Observations {
            os,
            motion,
            sdks,
            rbenv,
            rubies,
            xcode_select,
            xcode_path,
            xcode,
            javac,
            java_home,
        }
    }
}
