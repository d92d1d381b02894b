//! Configuration file schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Contents of `~/.motion-doctor.yml`.
///
/// Every field is optional; unset fields fall through to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DoctorConfig {
    /// Directory holding the per-platform SDK folders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk_root: Option<PathBuf>,

    /// Seconds to wait for each probed tool before killing it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe_timeout_secs: Option<u64>,
}
