//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::schema::DoctorConfig;
use crate::error::{DoctorError, Result};

/// File name of the user config, looked up in the home directory.
pub const USER_CONFIG_FILE: &str = ".motion-doctor.yml";

/// Find the user's config at `~/.motion-doctor.yml`.
pub fn find_user_config() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(USER_CONFIG_FILE);
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid or has unknown fields.
pub fn load_config_file(path: &Path) -> Result<DoctorConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DoctorError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DoctorError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`DoctorConfig`].
///
/// A blank file is an empty config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<DoctorConfig> {
    if content.trim().is_empty() {
        return Ok(DoctorConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| DoctorError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit path must exist. Without one, the user config is loaded if
/// present and defaults are used otherwise.
pub fn load_config(config_override: Option<&Path>) -> Result<DoctorConfig> {
    load_config_from(config_override, find_user_config())
}

fn load_config_from(
    config_override: Option<&Path>,
    discovered: Option<PathBuf>,
) -> Result<DoctorConfig> {
    let path = match config_override {
        Some(path) => path.to_path_buf(),
        None => match discovered {
            Some(path) => path,
            None => {
                debug!("no config file found, using defaults");
                return Ok(DoctorConfig::default());
            }
        },
    };

    debug!(path = %path.display(), "loading config");
    load_config_file(&path)
}
