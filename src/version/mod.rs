//! Structured version values and the parsers that produce them.
//!
//! Every probed tool prints its version in its own shape. The parsers in
//! [`parse`] turn that free-form text into the typed values below, or a
//! [`ParseError`] when the output is not what the tool normally prints.
//! Raw version strings never travel past this module.

pub mod parse;

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

pub use parse::{
    parse_javac_version, parse_motion_version, parse_rbenv_rubies, parse_rbenv_version,
    parse_sw_vers, parse_xcode_select_path, parse_xcode_select_version, parse_xcodebuild_version,
    ParseError,
};

/// A `major.minor` release, as printed by `motion --version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ReleaseVersion {
    pub major: u32,
    pub minor: u32,
}

impl ReleaseVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// A `major.minor.patch` version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SemVer {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemVer {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Whether both versions share major and minor components.
    pub fn same_release(&self, other: &SemVer) -> bool {
        self.major == other.major && self.minor == other.minor
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A JDK version such as `1.8.0_292` (build after the underscore) or `17.0.2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct JdkVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: Option<u32>,
}

impl fmt::Display for JdkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(build) = self.build {
            write!(f, "_{}", build)?;
        }
        Ok(())
    }
}

/// The integer build number reported by `xcode-select --version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BuildNumber(pub u32);

impl fmt::Display for BuildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operating system release reported by `sw_vers`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OsRelease {
    /// Product version, e.g. `13.4.0`.
    pub version: SemVer,
    /// Build identifier, e.g. `22F66`.
    pub build: String,
}

impl fmt::Display for OsRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.version, self.build)
    }
}

/// The developer directory selected by `xcode-select --print-path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActivePath(pub PathBuf);

impl fmt::Display for ActivePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_version_displays_major_minor() {
        assert_eq!(ReleaseVersion::new(9, 4).to_string(), "9.4");
    }

    #[test]
    fn semver_displays_all_components() {
        assert_eq!(SemVer::new(15, 0, 1).to_string(), "15.0.1");
    }

    #[test]
    fn semver_same_release_ignores_patch() {
        assert!(SemVer::new(9, 4, 0).same_release(&SemVer::new(9, 4, 7)));
        assert!(!SemVer::new(9, 4, 0).same_release(&SemVer::new(9, 3, 0)));
        assert!(!SemVer::new(9, 4, 0).same_release(&SemVer::new(10, 4, 0)));
    }

    #[test]
    fn jdk_version_displays_build_when_present() {
        let legacy = JdkVersion {
            major: 1,
            minor: 8,
            patch: 0,
            build: Some(292),
        };
        let modern = JdkVersion {
            major: 17,
            minor: 0,
            patch: 2,
            build: None,
        };
        assert_eq!(legacy.to_string(), "1.8.0_292");
        assert_eq!(modern.to_string(), "17.0.2");
    }

    #[test]
    fn os_release_displays_version_and_build() {
        let os = OsRelease {
            version: SemVer::new(13, 4, 0),
            build: "22F66".to_string(),
        };
        assert_eq!(os.to_string(), "13.4.0 (22F66)");
    }

    #[test]
    fn active_path_displays_path() {
        let path = ActivePath(PathBuf::from("/Applications/Xcode.app/Contents/Developer"));
        assert_eq!(path.to_string(), "/Applications/Xcode.app/Contents/Developer");
    }
}
