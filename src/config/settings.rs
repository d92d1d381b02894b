//! Effective settings after layering flags over the config file.

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::config::schema::DoctorConfig;
use crate::probes::DEFAULT_SDK_ROOT;

/// Values supplied on the command line (or their env var fallbacks).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub sdk_root: Option<PathBuf>,
    pub probe_timeout_secs: Option<u64>,
}

/// Settings the doctor actually runs with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub sdk_root: PathBuf,
    pub probe_timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sdk_root: PathBuf::from(DEFAULT_SDK_ROOT),
            probe_timeout: None,
        }
    }
}

impl Settings {
    /// Resolve settings: overrides win over the file, the file over defaults.
    ///
    /// A timeout of zero seconds disables the timeout.
    pub fn resolve(config: &DoctorConfig, overrides: &Overrides) -> Self {
        let defaults = Self::default();

        let sdk_root = overrides
            .sdk_root
            .clone()
            .or_else(|| config.sdk_root.clone())
            .unwrap_or(defaults.sdk_root);

        let probe_timeout = overrides
            .probe_timeout_secs
            .or(config.probe_timeout_secs)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .or(defaults.probe_timeout);

        Self {
            sdk_root,
            probe_timeout,
        }
    }
}
