//! Probes that read the filesystem or environment instead of running a tool.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// Environment variable naming the JDK installation root.
pub const JAVA_HOME_VAR: &str = "JAVA_HOME";

/// Default location of the RubyMotion SDK data.
pub const DEFAULT_SDK_ROOT: &str = "/Library/RubyMotion/data";

static SDK_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(\.\d+)*$").expect("SDK_VERSION_REGEX must compile")
});

/// A platform RubyMotion ships SDK support for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Osx,
    Tvos,
    Watchos,
    Android,
}

impl Platform {
    /// All platforms in report order.
    pub const ALL: [Platform; 5] = [
        Platform::Ios,
        Platform::Osx,
        Platform::Tvos,
        Platform::Watchos,
        Platform::Android,
    ];

    /// Subdirectory of the SDK root holding this platform's versions.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Osx => "osx",
            Platform::Tvos => "tvos",
            Platform::Watchos => "watchos",
            Platform::Android => "android",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Osx => "macOS",
            Platform::Tvos => "tvOS",
            Platform::Watchos => "watchOS",
            Platform::Android => "Android",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// SDK versions found for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SdkListing {
    pub platform: Platform,
    pub versions: Vec<String>,
}

/// List the SDK version directories for `platform` under `sdk_root`.
///
/// Only subdirectories named like `17.0` or `10.3.1` count. Versions come
/// back in directory-listing order. A missing root or platform directory
/// means nothing is installed, so the result is empty.
pub fn sdk_versions(sdk_root: &Path, platform: Platform) -> SdkListing {
    let dir = sdk_root.join(platform.dir_name());
    let versions = match fs::read_dir(&dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| SDK_VERSION_REGEX.is_match(name))
            .collect(),
        Err(err) => {
            debug!(dir = %dir.display(), error = %err, "no SDK directory");
            Vec::new()
        }
    };

    SdkListing { platform, versions }
}

/// SDK listings for every platform under `sdk_root`.
pub fn all_sdk_versions(sdk_root: &Path) -> Vec<SdkListing> {
    Platform::ALL
        .iter()
        .map(|platform| sdk_versions(sdk_root, *platform))
        .collect()
}

/// Read `JAVA_HOME` through `env_fn`.
///
/// An empty value counts as unset.
pub fn java_home<F>(env_fn: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    env_fn(JAVA_HOME_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}
