//! Tool-specific version extraction.
//!
//! | Tool                        | Channel | Shape                           |
//! |-----------------------------|---------|---------------------------------|
//! | `motion --version`          | stdout  | `9.4`                           |
//! | `rbenv --version`           | stdout  | `rbenv 1.2.0`                   |
//! | `rbenv versions --bare`     | stdout  | one Ruby per line               |
//! | `xcode-select --version`    | stdout  | `xcode-select version 2349.`    |
//! | `xcode-select --print-path` | stdout  | `/Applications/Xcode.app/...`   |
//! | `xcodebuild -version`       | stdout  | `Xcode 15.0` + `Build version`  |
//! | `javac -version`            | stderr  | `javac 1.8.0_292`               |
//! | `sw_vers`                   | stdout  | `ProductVersion:` / `BuildVersion:` lines |

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::{ActivePath, BuildNumber, JdkVersion, OsRelease, ReleaseVersion, SemVer};

/// Prefix printed by `xcode-select --version` before the build number.
const XCODE_SELECT_PREFIX: &str = "xcode-select version ";

static RELEASE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.(\d+)$").expect("RELEASE_REGEX must compile")
});

/// Output did not have the shape the tool normally prints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The tool printed nothing on the expected channel.
    #[error("no output")]
    Empty,

    /// An expected field was absent.
    #[error("no {what} in {line:?}")]
    Missing { what: &'static str, line: String },

    /// A field was present but not a valid number or version.
    #[error("{value:?} is not a valid {what}")]
    Invalid { what: &'static str, value: String },
}

/// Parse `motion --version`: the first `major.minor` token on the first line.
pub fn parse_motion_version(stdout: &str) -> Result<ReleaseVersion, ParseError> {
    let line = first_line(stdout)?;
    let caps = line
        .split_whitespace()
        .find_map(|token| RELEASE_REGEX.captures(token))
        .ok_or_else(|| ParseError::Missing {
            what: "major.minor version",
            line: line.to_string(),
        })?;

    Ok(ReleaseVersion::new(
        number(&caps[1], "major version")?,
        number(&caps[2], "minor version")?,
    ))
}

/// Parse `rbenv --version`: the second token as `major.minor.patch`.
///
/// Development builds append a `git describe` suffix (`1.2.0-16-gc4395e5`),
/// which is ignored.
pub fn parse_rbenv_version(stdout: &str) -> Result<SemVer, ParseError> {
    let line = first_line(stdout)?;
    let token = second_token(line, "rbenv version")?;
    let (major, minor, patch) = dotted(strip_suffix(token), "rbenv version", 3)?;
    Ok(SemVer::new(major, minor, patch))
}

/// Parse `rbenv versions --bare`: one installed Ruby per non-empty line.
pub fn parse_rbenv_rubies(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `xcode-select --version`: `xcode-select version 2349.`
pub fn parse_xcode_select_version(stdout: &str) -> Result<BuildNumber, ParseError> {
    let line = first_line(stdout)?;
    let rest = line
        .strip_prefix(XCODE_SELECT_PREFIX)
        .ok_or_else(|| ParseError::Missing {
            what: "xcode-select version prefix",
            line: line.to_string(),
        })?;
    let digits = rest.trim().trim_end_matches('.');
    Ok(BuildNumber(number(digits, "xcode-select build number")?))
}

/// Parse `xcode-select --print-path`: a single path line.
pub fn parse_xcode_select_path(stdout: &str) -> Result<ActivePath, ParseError> {
    let line = first_line(stdout)?;
    Ok(ActivePath(PathBuf::from(line)))
}

/// Parse `xcodebuild -version`: the second token of the first line.
///
/// Xcode omits a zero patch (`Xcode 15.0`), which is read as `15.0.0`.
pub fn parse_xcodebuild_version(stdout: &str) -> Result<SemVer, ParseError> {
    let line = first_line(stdout)?;
    let token = second_token(line, "Xcode version")?;
    let (major, minor, patch) = dotted(token, "Xcode version", 2)?;
    Ok(SemVer::new(major, minor, patch))
}

/// Parse `javac -version`, which prints to stderr by convention.
///
/// The version is the second token of the `javac` line; any JVM banner
/// lines printed before it (`Picked up _JAVA_OPTIONS: ...`) are skipped.
/// A legacy `1.8.0_292` patch segment carries the build after the underscore.
pub fn parse_javac_version(output: &str) -> Result<JdkVersion, ParseError> {
    let line = output
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("javac"))
        .map(Ok)
        .unwrap_or_else(|| first_line(output))?;
    let token = strip_suffix(second_token(line, "javac version")?);

    let (version, build) = match token.split_once('_') {
        Some((version, build)) => (version, Some(number(build, "javac build number")?)),
        None => (token, None),
    };
    let (major, minor, patch) = dotted(version, "javac version", 1)?;

    Ok(JdkVersion {
        major,
        minor,
        patch,
        build,
    })
}

/// Parse `sw_vers`: product version and build identifier.
///
/// ```text
/// ProductName:    macOS
/// ProductVersion: 13.4
/// BuildVersion:   22F66
/// ```
///
/// Fields are looked up by key, so the `ProductVersionExtra` line that
/// Rapid Security Responses add does not shift the build identifier.
pub fn parse_sw_vers(stdout: &str) -> Result<OsRelease, ParseError> {
    if stdout.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let product = field(stdout, "ProductVersion:")?;
    let build = field(stdout, "BuildVersion:")?;
    let (major, minor, patch) = dotted(product, "product version", 2)?;

    Ok(OsRelease {
        version: SemVer::new(major, minor, patch),
        build: build.to_string(),
    })
}

fn first_line(output: &str) -> Result<&str, ParseError> {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or(ParseError::Empty)
}

fn second_token<'a>(line: &'a str, what: &'static str) -> Result<&'a str, ParseError> {
    line.split_whitespace()
        .nth(1)
        .ok_or_else(|| ParseError::Missing {
            what,
            line: line.to_string(),
        })
}

fn field<'a>(output: &'a str, key: &'static str) -> Result<&'a str, ParseError> {
    output
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(key))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ParseError::Missing {
            what: key.trim_end_matches(':'),
            line: output.trim().to_string(),
        })
}

/// Drop a pre-release or `git describe` suffix: `1.2.0-16-gc4395e5` → `1.2.0`.
fn strip_suffix(token: &str) -> &str {
    token.split('-').next().unwrap_or(token)
}

/// Split a dotted version into three components.
///
/// At least `required` components must be present; missing trailing
/// components are zero. More than three is rejected.
fn dotted(token: &str, what: &'static str, required: usize) -> Result<(u32, u32, u32), ParseError> {
    let invalid = || ParseError::Invalid {
        what,
        value: token.to_string(),
    };

    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() < required || parts.len() > 3 {
        return Err(invalid());
    }

    let mut components = [0u32; 3];
    for (slot, part) in components.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|_| invalid())?;
    }

    Ok((components[0], components[1], components[2]))
}

fn number(value: &str, what: &'static str) -> Result<u32, ParseError> {
    value.parse().map_err(|_| ParseError::Invalid {
        what,
        value: value.to_string(),
    })
}
