//! Per-tool classification rules.
//!
//! Every function here is pure: probe outcome in, sealed group out. Each
//! outcome tag maps to exactly one branch.

use std::path::Path;

use crate::probes::{FailureSource, Platform, ProbeOutcome, SdkListing};
use crate::version::{ActivePath, BuildNumber, JdkVersion, OsRelease, ReleaseVersion, SemVer};

use super::baseline::CompatibilityBaseline;
use super::finding::{Finding, FindingGroup, Severity};

/// Build number printed by the xcode-select that ships with supported Xcodes.
pub const XCODE_SELECT_BUILD: u32 = 2349;

/// Oldest macOS release (major, minor) the toolchain supports.
pub const MINIMUM_OS: (u32, u32) = (10, 15);

const NOT_INSTALLED: &str = "Not installed";

/// Map an outcome to a finding, delegating only the present case.
fn classify<V>(
    outcome: &ProbeOutcome<V>,
    absent: impl FnOnce() -> Finding,
    present: impl FnOnce(&V) -> Finding,
) -> Finding {
    match outcome {
        ProbeOutcome::Present { value } => present(value),
        ProbeOutcome::Absent => absent(),
        ProbeOutcome::ExecutionFailed { source, message } => execution_failed(*source, message),
        ProbeOutcome::Unparseable { reason, .. } => unparseable(reason),
    }
}

fn unparseable(reason: &str) -> Finding {
    Finding::bad("Unrecognized output").with_note(reason)
}

fn execution_failed(source: FailureSource, message: &str) -> Finding {
    let note = match source {
        FailureSource::Tool => format!("tool reports: {}", message),
        FailureSource::System => format!("system reports: {}", message),
        FailureSource::Timeout => format!("timed out: {}", message),
    };
    Finding::bad("Error").with_note(note)
}

/// Compare a detected version with the expected one.
///
/// Equal is Good. Same major.minor with a newer patch is Maybe. Anything
/// else, including an older patch, is Bad.
pub fn compare_to_expected(actual: &SemVer, expected: &SemVer) -> Finding {
    let finding = Finding::good(actual.to_string());
    if actual == expected {
        return finding;
    }

    let severity = if actual.same_release(expected) && actual.patch > expected.patch {
        Severity::Maybe
    } else {
        Severity::Bad
    };

    finding
        .with_severity(severity)
        .with_note(format!("expected {}", expected))
}

/// `sw_vers`: informational unless older than [`MINIMUM_OS`].
pub fn evaluate_os(outcome: &ProbeOutcome<OsRelease>) -> FindingGroup {
    let finding = classify(
        outcome,
        || Finding::bad("Unknown").with_note("sw_vers not found"),
        |os| {
            let finding = Finding::neutral(os.to_string());
            if (os.version.major, os.version.minor) < MINIMUM_OS {
                finding
                    .with_severity(Severity::Bad)
                    .with_note(format!("minimum supported is {}.{}", MINIMUM_OS.0, MINIMUM_OS.1))
            } else {
                finding
            }
        },
    );
    FindingGroup::single("macOS", finding)
}

/// `motion --version`: required.
pub fn evaluate_motion(outcome: &ProbeOutcome<ReleaseVersion>) -> FindingGroup {
    let finding = classify(
        outcome,
        || Finding::bad(NOT_INSTALLED),
        |release| Finding::good(release.to_string()),
    );
    FindingGroup::single("RubyMotion", finding)
}

/// One group per platform listing the SDK versions found.
pub fn evaluate_sdks(listing: &SdkListing) -> FindingGroup {
    FindingGroup::from_findings(
        sdk_label(listing.platform),
        listing.versions.iter().map(|v| Finding::neutral(v.as_str())),
    )
}

fn sdk_label(platform: Platform) -> String {
    format!("{} SDKs", platform.name())
}

/// `rbenv --version`: optional.
pub fn evaluate_rbenv(outcome: &ProbeOutcome<SemVer>) -> FindingGroup {
    let finding = classify(
        outcome,
        || Finding::maybe(NOT_INSTALLED).with_note("Recommended, but not required"),
        |version| Finding::good(version.to_string()),
    );
    FindingGroup::single("rbenv", finding)
}

/// `rbenv versions --bare`: one line per installed Ruby.
pub fn evaluate_rubies(outcome: &ProbeOutcome<Vec<String>>) -> FindingGroup {
    let findings = match outcome {
        ProbeOutcome::Present { value } => {
            value.iter().map(|v| Finding::neutral(v.as_str())).collect()
        }
        ProbeOutcome::Absent => Vec::new(),
        ProbeOutcome::ExecutionFailed { source, message } => {
            vec![execution_failed(*source, message)]
        }
        ProbeOutcome::Unparseable { reason, .. } => vec![unparseable(reason)],
    };
    FindingGroup::from_findings("Ruby versions", findings)
}

/// `xcode-select --version`: must be exactly [`XCODE_SELECT_BUILD`].
pub fn evaluate_xcode_select(outcome: &ProbeOutcome<BuildNumber>) -> FindingGroup {
    let finding = classify(
        outcome,
        || Finding::bad(NOT_INSTALLED),
        |build| check_build_number(*build, XCODE_SELECT_BUILD),
    );
    FindingGroup::single("xcode-select", finding)
}

/// Exact match against one known-good build number.
pub fn check_build_number(actual: BuildNumber, expected: u32) -> Finding {
    if actual.0 == expected {
        Finding::good(actual.to_string())
    } else {
        Finding::bad(actual.to_string()).with_note(format!("expected {}", expected))
    }
}

/// `xcode-select --print-path`: which developer directory is active.
pub fn evaluate_xcode_path(outcome: &ProbeOutcome<ActivePath>) -> FindingGroup {
    let finding = classify(
        outcome,
        || Finding::bad("Not set"),
        |path| classify_developer_dir(&path.0),
    );
    FindingGroup::single("Developer directory", finding)
}

/// Classify a developer directory by where it lives.
pub fn classify_developer_dir(path: &Path) -> Finding {
    let display = path.display().to_string();

    if display.contains("CommandLineTools") {
        Finding::bad(display).with_note("Command Line Tools only")
    } else if display.contains("Xcode-beta.app") {
        Finding::maybe(display).with_note("beta release")
    } else if display.contains("Xcode.app") {
        Finding::good(display)
    } else {
        Finding::maybe(display).with_note("custom path detected")
    }
}

/// `xcodebuild -version` checked against the baseline for the detected
/// RubyMotion release.
pub fn evaluate_xcode(
    outcome: &ProbeOutcome<SemVer>,
    motion: &ProbeOutcome<ReleaseVersion>,
    baseline: &CompatibilityBaseline,
) -> FindingGroup {
    let expected = baseline.expected_for(motion.value().copied());
    let finding = classify(
        outcome,
        || Finding::bad(NOT_INSTALLED),
        |actual| match expected {
            Some(expected) => compare_to_expected(actual, &expected),
            None => Finding::neutral(actual.to_string()),
        },
    );
    FindingGroup::single("Xcode", finding)
}

/// `javac -version`: only needed for Android builds.
pub fn evaluate_javac(outcome: &ProbeOutcome<JdkVersion>) -> FindingGroup {
    let finding = classify(
        outcome,
        || Finding::maybe(NOT_INSTALLED).with_note("Required for Android builds"),
        |version| Finding::good(version.to_string()),
    );
    FindingGroup::single("javac", finding)
}

/// `JAVA_HOME`: the raw value when set.
pub fn evaluate_java_home(value: Option<&Path>) -> FindingGroup {
    let finding = match value {
        Some(path) => Finding::neutral(path.display().to_string()),
        None => Finding::bad("Not set"),
    };
    FindingGroup::single("JAVA_HOME", finding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::baseline::{BaselineEntry, XCODE_BASELINE};
    use std::path::PathBuf;

    fn only(group: &FindingGroup) -> &Finding {
        assert_eq!(group.findings().len(), 1);
        &group.findings()[0]
    }

    #[test]
    fn exact_match_is_good_without_note() {
        let finding = compare_to_expected(&SemVer::new(9, 4, 0), &SemVer::new(9, 4, 0));
        assert_eq!(finding.severity(), Severity::Good);
        assert!(finding.note().is_none());
    }

    #[test]
    fn newer_patch_is_maybe() {
        let finding = compare_to_expected(&SemVer::new(9, 4, 1), &SemVer::new(9, 4, 0));
        assert_eq!(finding.severity(), Severity::Maybe);
        assert_eq!(finding.note(), Some("expected 9.4.0"));
    }

    #[test]
    fn older_minor_is_bad() {
        let finding = compare_to_expected(&SemVer::new(9, 3, 0), &SemVer::new(9, 4, 0));
        assert_eq!(finding.severity(), Severity::Bad);
        assert_eq!(finding.note(), Some("expected 9.4.0"));
    }

    #[test]
    fn older_patch_is_bad() {
        let finding = compare_to_expected(&SemVer::new(9, 4, 0), &SemVer::new(9, 4, 2));
        assert_eq!(finding.severity(), Severity::Bad);
    }

    #[test]
    fn newer_major_with_higher_patch_is_bad() {
        let finding = compare_to_expected(&SemVer::new(10, 4, 3), &SemVer::new(9, 4, 0));
        assert_eq!(finding.severity(), Severity::Bad);
    }

    #[test]
    fn xcode_uses_baseline_for_detected_release() {
        static ENTRIES: [BaselineEntry; 1] = [BaselineEntry {
            release: ReleaseVersion::new(7, 0),
            expected: SemVer::new(9, 4, 0),
        }];
        let baseline = CompatibilityBaseline::new(&ENTRIES);
        let motion = ProbeOutcome::present(ReleaseVersion::new(7, 0));

        let group = evaluate_xcode(&ProbeOutcome::present(SemVer::new(9, 4, 1)), &motion, &baseline);
        assert_eq!(only(&group).severity(), Severity::Maybe);
        assert_eq!(only(&group).note(), Some("expected 9.4.0"));
    }

    #[test]
    fn xcode_without_motion_uses_newest_baseline() {
        let newest = XCODE_BASELINE.newest().unwrap();
        let group = evaluate_xcode(
            &ProbeOutcome::present(newest),
            &ProbeOutcome::Absent,
            &XCODE_BASELINE,
        );
        assert_eq!(only(&group).severity(), Severity::Good);
    }

    #[test]
    fn xcode_absent_is_bad_not_installed() {
        let group = evaluate_xcode(&ProbeOutcome::Absent, &ProbeOutcome::Absent, &XCODE_BASELINE);
        assert_eq!(only(&group).severity(), Severity::Bad);
        assert_eq!(only(&group).value(), "Not installed");
    }

    #[test]
    fn xcode_with_empty_baseline_is_informational() {
        let baseline = CompatibilityBaseline::new(&[]);
        let group = evaluate_xcode(
            &ProbeOutcome::present(SemVer::new(15, 0, 0)),
            &ProbeOutcome::Absent,
            &baseline,
        );
        assert_eq!(only(&group).severity(), Severity::Neutral);
    }

    #[test]
    fn build_number_must_match_exactly() {
        let good = check_build_number(BuildNumber(2349), 2349);
        assert_eq!(good.severity(), Severity::Good);
        assert!(good.note().is_none());

        let bad = check_build_number(BuildNumber(2350), 2349);
        assert_eq!(bad.severity(), Severity::Bad);
        assert_eq!(bad.note(), Some("expected 2349"));
    }

    #[test]
    fn xcode_select_uses_known_build() {
        let group = evaluate_xcode_select(&ProbeOutcome::present(BuildNumber(2349)));
        assert_eq!(only(&group).severity(), Severity::Good);
        assert_eq!(only(&group).value(), "2349");
    }

    #[test]
    fn command_line_tools_path_is_bad() {
        let finding = classify_developer_dir(Path::new("/Library/Developer/CommandLineTools"));
        assert_eq!(finding.severity(), Severity::Bad);
    }

    #[test]
    fn xcode_app_path_is_good() {
        let finding = classify_developer_dir(Path::new("/Applications/Xcode.app/Contents/Developer"));
        assert_eq!(finding.severity(), Severity::Good);
        assert!(finding.note().is_none());
    }

    #[test]
    fn xcode_beta_path_is_maybe() {
        let finding =
            classify_developer_dir(Path::new("/Applications/Xcode-beta.app/Contents/Developer"));
        assert_eq!(finding.severity(), Severity::Maybe);
    }

    #[test]
    fn other_path_is_custom() {
        let finding = classify_developer_dir(Path::new("/opt/xcode/15/Developer"));
        assert_eq!(finding.severity(), Severity::Maybe);
        assert_eq!(finding.note(), Some("custom path detected"));
    }

    #[test]
    fn missing_motion_is_bad() {
        let group = evaluate_motion(&ProbeOutcome::Absent);
        assert_eq!(only(&group).severity(), Severity::Bad);
        assert_eq!(only(&group).value(), "Not installed");
    }

    #[test]
    fn missing_rbenv_is_recommended() {
        let group = evaluate_rbenv(&ProbeOutcome::Absent);
        assert_eq!(only(&group).severity(), Severity::Maybe);
        assert_eq!(only(&group).note(), Some("Recommended, but not required"));
    }

    #[test]
    fn tool_failure_note_names_the_tool() {
        let group = evaluate_motion(&ProbeOutcome::ExecutionFailed {
            source: FailureSource::Tool,
            message: "License expired".to_string(),
        });
        assert_eq!(only(&group).severity(), Severity::Bad);
        assert_eq!(only(&group).note(), Some("tool reports: License expired"));
    }

    #[test]
    fn system_failure_note_names_the_system() {
        let group = evaluate_javac(&ProbeOutcome::ExecutionFailed {
            source: FailureSource::System,
            message: "Permission denied".to_string(),
        });
        assert_eq!(only(&group).severity(), Severity::Bad);
        assert_eq!(only(&group).note(), Some("system reports: Permission denied"));
    }

    #[test]
    fn timeout_is_bad() {
        let group = evaluate_rbenv(&ProbeOutcome::ExecutionFailed {
            source: FailureSource::Timeout,
            message: "no response after 5s".to_string(),
        });
        assert_eq!(only(&group).severity(), Severity::Bad);
        assert_eq!(only(&group).note(), Some("timed out: no response after 5s"));
    }

    #[test]
    fn unparseable_output_is_bad_with_reason() {
        let group = evaluate_xcode_select(&ProbeOutcome::Unparseable {
            output: "what".to_string(),
            reason: "no xcode-select version prefix in \"what\"".to_string(),
        });
        assert_eq!(only(&group).severity(), Severity::Bad);
        assert_eq!(only(&group).value(), "Unrecognized output");
        assert!(only(&group).note().unwrap().contains("prefix"));
    }

    #[test]
    fn empty_rubies_is_none_sentinel() {
        for outcome in [ProbeOutcome::Absent, ProbeOutcome::present(Vec::new())] {
            let group = evaluate_rubies(&outcome);
            assert_eq!(only(&group).value(), "None");
            assert_eq!(only(&group).severity(), Severity::Neutral);
        }
    }

    #[test]
    fn rubies_keep_detection_order() {
        let group = evaluate_rubies(&ProbeOutcome::present(vec![
            "3.2.2".to_string(),
            "2.7.8".to_string(),
        ]));
        let values: Vec<&str> = group.findings().iter().map(Finding::value).collect();
        assert_eq!(values, vec!["3.2.2", "2.7.8"]);
        assert!(group
            .findings()
            .iter()
            .all(|f| f.severity() == Severity::Neutral));
    }

    #[test]
    fn rubies_failure_is_bad() {
        let group = evaluate_rubies(&ProbeOutcome::ExecutionFailed {
            source: FailureSource::Tool,
            message: "rbenv: no such command `versions'".to_string(),
        });
        assert_eq!(only(&group).severity(), Severity::Bad);
    }

    #[test]
    fn empty_sdk_listing_is_none_sentinel() {
        let group = evaluate_sdks(&SdkListing {
            platform: Platform::Tvos,
            versions: Vec::new(),
        });
        assert_eq!(group.label(), "tvOS SDKs");
        assert_eq!(only(&group).value(), "None");
    }

    #[test]
    fn sdk_listing_has_one_finding_per_version() {
        let group = evaluate_sdks(&SdkListing {
            platform: Platform::Ios,
            versions: vec!["17.0".to_string(), "16.4".to_string()],
        });
        assert_eq!(group.findings().len(), 2);
        assert_eq!(group.findings()[1].value(), "16.4");
    }

    #[test]
    fn java_home_set_is_neutral_raw_value() {
        let path = PathBuf::from("/Library/Java/Home");
        let group = evaluate_java_home(Some(path.as_path()));
        assert_eq!(only(&group).severity(), Severity::Neutral);
        assert_eq!(only(&group).value(), "/Library/Java/Home");
    }

    #[test]
    fn java_home_unset_is_bad() {
        let group = evaluate_java_home(None);
        assert_eq!(only(&group).severity(), Severity::Bad);
        assert_eq!(only(&group).value(), "Not set");
    }

    #[test]
    fn supported_os_is_neutral() {
        let group = evaluate_os(&ProbeOutcome::present(OsRelease {
            version: SemVer::new(13, 4, 0),
            build: "22F66".to_string(),
        }));
        assert_eq!(only(&group).severity(), Severity::Neutral);
        assert_eq!(only(&group).value(), "13.4.0 (22F66)");
    }

    #[test]
    fn old_os_is_bad() {
        let group = evaluate_os(&ProbeOutcome::present(OsRelease {
            version: SemVer::new(10, 14, 6),
            build: "18G103".to_string(),
        }));
        assert_eq!(only(&group).severity(), Severity::Bad);
        assert_eq!(only(&group).note(), Some("minimum supported is 10.15"));
    }

    #[test]
    fn absent_never_produces_good() {
        let groups = [
            evaluate_os(&ProbeOutcome::Absent),
            evaluate_motion(&ProbeOutcome::Absent),
            evaluate_rbenv(&ProbeOutcome::Absent),
            evaluate_rubies(&ProbeOutcome::Absent),
            evaluate_xcode_select(&ProbeOutcome::Absent),
            evaluate_xcode_path(&ProbeOutcome::Absent),
            evaluate_xcode(&ProbeOutcome::Absent, &ProbeOutcome::Absent, &XCODE_BASELINE),
            evaluate_javac(&ProbeOutcome::Absent),
            evaluate_java_home(None),
        ];
        for group in &groups {
            for finding in group.findings() {
                assert_ne!(
                    finding.severity(),
                    Severity::Good,
                    "{} produced Good for an absent tool",
                    group.label()
                );
            }
        }
    }

    #[test]
    fn good_findings_never_carry_notes() {
        let groups = [
            evaluate_motion(&ProbeOutcome::present(ReleaseVersion::new(9, 4))),
            evaluate_rbenv(&ProbeOutcome::present(SemVer::new(1, 2, 0))),
            evaluate_xcode_select(&ProbeOutcome::present(BuildNumber(2349))),
            evaluate_xcode_path(&ProbeOutcome::present(ActivePath(PathBuf::from(
                "/Applications/Xcode.app/Contents/Developer",
            )))),
        ];
        for group in &groups {
            let finding = only(group);
            assert_eq!(finding.severity(), Severity::Good);
            assert!(finding.note().is_none());
        }
    }
}
