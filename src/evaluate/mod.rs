//! Severity classification of probe outcomes.
//!
//! Probes say what is installed; this module decides whether that is
//! acceptable. Evaluation is a pure mapping from
//! [`ProbeOutcome`](crate::probes::ProbeOutcome) (plus cross-probe context)
//! to a sealed [`FindingGroup`].
//!
//! # Modules
//!
//! - [`finding`] - Findings, severities, and groups
//! - [`baseline`] - Compatibility baselines between tool versions
//! - [`rules`] - Per-tool classification rules

pub mod baseline;
pub mod finding;
pub mod rules;

pub use baseline::{BaselineEntry, CompatibilityBaseline, XCODE_BASELINE};
pub use finding::{Finding, FindingGroup, GroupBuilder, Severity, NONE_SENTINEL};
pub use rules::{
    check_build_number, classify_developer_dir, compare_to_expected, evaluate_java_home,
    evaluate_javac, evaluate_motion, evaluate_os, evaluate_rbenv, evaluate_rubies, evaluate_sdks,
    evaluate_xcode, evaluate_xcode_path, evaluate_xcode_select, MINIMUM_OS, XCODE_SELECT_BUILD,
};
