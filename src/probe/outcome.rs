//! Probe outcome types.
//!
//! A probe run produces a [`ProbeOutcome`] describing why the runtime was or
//! was not found. The exported entry point only ever sees
//! [`ProbeOutcome::is_installed`].

use serde::Serialize;
use std::path::PathBuf;

/// The result of one probe run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// The version token matched.
    Installed {
        /// Directory that was enumerated.
        probe_path: PathBuf,
        /// Matching entry name. `None` when the probe path itself matched.
        entry: Option<String>,
    },

    /// Enumeration ran to the end without a match.
    NoMatch {
        /// Directory that was enumerated.
        probe_path: PathBuf,
        /// Number of entries looked at.
        entries_scanned: usize,
    },

    /// Enumeration could not start (missing directory, access denied,
    /// over-long path).
    SdkDirUnavailable {
        /// Directory that was attempted.
        probe_path: PathBuf,
        /// OS or validation error text.
        reason: String,
    },

    /// The install root could not be resolved. The user has been alerted.
    RootUnresolved {
        /// Why resolution failed.
        reason: String,
    },
}

impl ProbeOutcome {
    /// Whether the runtime counts as installed.
    pub fn is_installed(&self) -> bool {
        matches!(self, ProbeOutcome::Installed { .. })
    }

    /// Whether this is the user-notified failure.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProbeOutcome::RootUnresolved { .. })
    }

    /// Process exit code for the diagnostic CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            ProbeOutcome::Installed { .. } => 0,
            ProbeOutcome::RootUnresolved { .. } => 2,
            _ => 1,
        }
    }

    /// One-line summary.
    pub fn summary(&self) -> String {
        match self {
            ProbeOutcome::Installed {
                probe_path,
                entry: Some(entry),
            } => format!("Found {} in {}", entry, probe_path.display()),
            ProbeOutcome::Installed {
                probe_path,
                entry: None,
            } => format!("Probe path {} matched", probe_path.display()),
            ProbeOutcome::NoMatch {
                probe_path,
                entries_scanned,
            } => format!(
                "No matching SDK in {} ({} entries scanned)",
                probe_path.display(),
                entries_scanned
            ),
            ProbeOutcome::SdkDirUnavailable { probe_path, reason } => {
                format!("Cannot read {}: {}", probe_path.display(), reason)
            }
            ProbeOutcome::RootUnresolved { reason } => {
                format!("Program Files could not be resolved: {}", reason)
            }
        }
    }
}

/// One entry found under the SDK directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SdkEntry {
    /// File name of the entry.
    pub name: String,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Whether the entry name contains the version token.
    pub matches: bool,
}
