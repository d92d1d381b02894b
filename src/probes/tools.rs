//! Command-based probes, one per monitored tool.

use crate::shell::CommandRunner;
use crate::version::{
    parse_javac_version, parse_motion_version, parse_rbenv_rubies, parse_rbenv_version,
    parse_sw_vers, parse_xcode_select_path, parse_xcode_select_version, parse_xcodebuild_version,
    ActivePath, BuildNumber, JdkVersion, OsRelease, ReleaseVersion, SemVer,
};

use super::outcome::{probe_command, Channel, ProbeOutcome};

/// `sw_vers`
pub fn os_release(runner: &dyn CommandRunner) -> ProbeOutcome<OsRelease> {
    probe_command(runner, "sw_vers", &[], Channel::Stdout, parse_sw_vers)
}

/// `motion --version`
pub fn motion_version(runner: &dyn CommandRunner) -> ProbeOutcome<ReleaseVersion> {
    probe_command(
        runner,
        "motion",
        &["--version"],
        Channel::Stdout,
        parse_motion_version,
    )
}

/// `rbenv --version`
pub fn rbenv_version(runner: &dyn CommandRunner) -> ProbeOutcome<SemVer> {
    probe_command(
        runner,
        "rbenv",
        &["--version"],
        Channel::Stdout,
        parse_rbenv_version,
    )
}

/// `rbenv versions --bare`
pub fn rbenv_rubies(runner: &dyn CommandRunner) -> ProbeOutcome<Vec<String>> {
    probe_command(
        runner,
        "rbenv",
        &["versions", "--bare"],
        Channel::Stdout,
        |stdout| Ok(parse_rbenv_rubies(stdout)),
    )
}

/// `xcode-select --version`
pub fn xcode_select_version(runner: &dyn CommandRunner) -> ProbeOutcome<BuildNumber> {
    probe_command(
        runner,
        "xcode-select",
        &["--version"],
        Channel::Stdout,
        parse_xcode_select_version,
    )
}

/// `xcode-select --print-path`
pub fn xcode_select_path(runner: &dyn CommandRunner) -> ProbeOutcome<ActivePath> {
    probe_command(
        runner,
        "xcode-select",
        &["--print-path"],
        Channel::Stdout,
        parse_xcode_select_path,
    )
}

/// `xcodebuild -version`
///
/// Only runs when xcode-select resolved a developer directory; otherwise
/// `xcodebuild` would just print the "requires Xcode" stub and the tool is
/// reported as absent.
pub fn xcodebuild_version(
    runner: &dyn CommandRunner,
    active_path: &ProbeOutcome<ActivePath>,
) -> ProbeOutcome<SemVer> {
    if !active_path.is_present() {
        return ProbeOutcome::Absent;
    }

    probe_command(
        runner,
        "xcodebuild",
        &["-version"],
        Channel::Stdout,
        parse_xcodebuild_version,
    )
}

/// `javac -version`. JDK 8 prints on stderr, JDK 9+ on stdout, and the JVM
/// may put a `Picked up JAVA_TOOL_OPTIONS` banner on stderr either way.
pub fn javac_version(runner: &dyn CommandRunner) -> ProbeOutcome<JdkVersion> {
    probe_command(
        runner,
        "javac",
        &["-version"],
        Channel::Stderr,
        parse_javac_version,
    )
}
