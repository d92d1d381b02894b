//! Configuration loading for motion-doctor.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layering of flags over the file in [`settings`]
//!
//! # Example
//!
//! ```
//! use motion_doctor::config::{load_config, Overrides, Settings};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("doctor.yml");
//! fs::write(&path, "probe_timeout_secs: 5").unwrap();
//!
//! let config = load_config(Some(&path)).unwrap();
//! let settings = Settings::resolve(&config, &Overrides::default());
//! assert_eq!(settings.probe_timeout.unwrap().as_secs(), 5);
//! ```
//!
//! # Configuration File Location
//!
//! The file named by `--config`, else `~/.motion-doctor.yml` when it
//! exists. Flags override the file; the file overrides defaults.

pub mod loader;
pub mod schema;
pub mod settings;

pub use loader::{find_user_config, load_config, load_config_file, parse_config, USER_CONFIG_FILE};
pub use schema::DoctorConfig;
pub use settings::{Overrides, Settings};
