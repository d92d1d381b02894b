//! Error types for motion-doctor operations.
//!
//! This module defines [`DoctorError`], the error type for everything that
//! sits around the diagnostic pipeline (argument handling, config loading,
//! writing the report), and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe failures are never errors: they are captured as
//!   [`ProbeOutcome`](crate::probes::ProbeOutcome) data and reported as
//!   findings
//! - Use `DoctorError` for failures that stop the command itself
//! - Use `anyhow::Error` (via `DoctorError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for motion-doctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to serialize collected probe state.
    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for motion-doctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;
