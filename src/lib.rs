//! motion-doctor - A RubyMotion toolchain health check.
//!
//! motion-doctor probes the tools a RubyMotion build depends on (the
//! `motion` compiler, rbenv and its Rubies, Xcode, the JDK, installed
//! SDKs), checks what it finds against known-good versions, and prints a
//! color-coded report.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration file loading and settings resolution
//! - [`doctor`] - The probe, evaluate, report pipeline
//! - [`error`] - Error types and result aliases
//! - [`evaluate`] - Severity classification of probe outcomes
//! - [`probes`] - Tool and environment detection
//! - [`report`] - Report structure, rendering, and colors
//! - [`shell`] - External command execution
//! - [`version`] - Version types and tool output parsers
//!
//! # Example
//!
//! ```
//! use motion_doctor::evaluate::{compare_to_expected, Severity};
//! use motion_doctor::version::parse_xcodebuild_version;
//!
//! let actual = parse_xcodebuild_version("Xcode 14.3.1\nBuild version 14E300c\n").unwrap();
//! let expected = parse_xcodebuild_version("Xcode 14.3\n").unwrap();
//! let finding = compare_to_expected(&actual, &expected);
//! assert_eq!(finding.severity(), Severity::Maybe);
//! assert_eq!(finding.note(), Some("expected 14.3.0"));
//! ```

pub mod cli;
pub mod config;
pub mod doctor;
pub mod error;
pub mod evaluate;
pub mod probes;
pub mod report;
pub mod shell;
pub mod version;

pub use error::{DoctorError, Result};
