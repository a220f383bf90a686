//! Error types for install-helper operations.
//!
//! This module defines [`InstallHelperError`], the error type used by the
//! probe internals, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Errors never cross the exported DLL boundary; they are folded into a
//!   [`ProbeOutcome`](crate::probe::ProbeOutcome) and then into a plain bool
//! - [`InstallHelperError::RootUnresolved`] is the only error that alerts the user
//! - Every other variant is a silent negative for the installer

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for install-helper operations.
#[derive(Debug, Error)]
pub enum InstallHelperError {
    /// The Program Files special folder could not be resolved.
    #[error("Could not resolve the Program Files folder: {reason}")]
    RootUnresolved { reason: String },

    /// The probe path would not fit in the platform path buffer.
    #[error("Probe path is {len} characters, over the limit of {max}: {path}")]
    PathTooLong {
        path: PathBuf,
        len: usize,
        max: usize,
    },

    /// Directory enumeration could not start at the SDK path.
    #[error("Cannot enumerate SDK directory {path}: {source}")]
    SdkDirUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InstallHelperError {
    /// Whether this failure should be surfaced to the user with an alert.
    pub fn is_fatal(&self) -> bool {
        matches!(self, InstallHelperError::RootUnresolved { .. })
    }
}

/// Result type alias for install-helper operations.
pub type Result<T> = std::result::Result<T, InstallHelperError>;
