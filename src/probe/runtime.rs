//! Runtime presence probe.
//!
//! Resolves the install root, appends the SDK subpath, enumerates the
//! directory and tests the version token. The first match wins. Every
//! failure is a negative result; only a root that cannot be resolved raises
//! an alert, and it raises exactly one.

use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};

use crate::config::{MatchMode, ProbeConfig, MAX_PATH};
use crate::error::{InstallHelperError, Result};
use crate::notify::Notifier;
use crate::probe::locator::InstallRoot;
use crate::probe::outcome::{ProbeOutcome, SdkEntry};

/// Alert title for the path-resolution failure.
pub const FATAL_TITLE: &str = "Sorry";

/// Alert body for the path-resolution failure.
pub const FATAL_MESSAGE: &str = "InstallHelper Fatal Error [THIS IS A BUG] - \
SHGetSpecialFolderPath for Program Files failed. The installation is now going to fail sorry";

/// Probes for an installed runtime under an install root.
pub struct RuntimeProbe<'a> {
    root: &'a dyn InstallRoot,
    notifier: &'a dyn Notifier,
    config: ProbeConfig,
}

impl<'a> RuntimeProbe<'a> {
    /// Create a new probe.
    pub fn new(
        root: &'a dyn InstallRoot,
        notifier: &'a dyn Notifier,
        config: ProbeConfig,
    ) -> Self {
        Self {
            root,
            notifier,
            config,
        }
    }

    /// Get the probe configuration.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Build the directory to enumerate: resolved root plus SDK subpath.
    ///
    /// Intermediate directories are not checked for existence.
    pub fn probe_path(&self) -> Result<PathBuf> {
        let root = self.root.resolve()?;
        tracing::debug!("Resolved {} to {}", self.root.describe(), root.display());

        let path = root.join(&self.config.sdk_subpath);
        check_path_length(&path)?;
        Ok(path)
    }

    /// Run the probe.
    pub fn check(&self) -> ProbeOutcome {
        let probe_path = match self.probe_path() {
            Ok(path) => path,
            Err(InstallHelperError::RootUnresolved { reason }) => {
                tracing::warn!("Install root unresolved: {}", reason);
                self.notifier.alert(FATAL_TITLE, FATAL_MESSAGE);
                return ProbeOutcome::RootUnresolved { reason };
            }
            Err(err) => {
                let probe_path = match &err {
                    InstallHelperError::PathTooLong { path, .. } => path.clone(),
                    _ => PathBuf::new(),
                };
                tracing::debug!("{}", err);
                return ProbeOutcome::SdkDirUnavailable {
                    probe_path,
                    reason: err.to_string(),
                };
            }
        };

        let entries = match enumerate(&probe_path) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!("{}", err);
                return ProbeOutcome::SdkDirUnavailable {
                    probe_path,
                    reason: err.to_string(),
                };
            }
        };

        let mut entries_scanned = 0;
        for entry in entries {
            entries_scanned += 1;
            let name = entry.file_name().to_string_lossy().into_owned();
            tracing::debug!("Checking SDK entry {}", name);

            if let Some(matched) = self.match_entry(&probe_path, name) {
                tracing::debug!("Version token '{}' matched", self.config.version_token);
                return ProbeOutcome::Installed {
                    probe_path,
                    entry: matched,
                };
            }
        }

        tracing::debug!(
            "No match for '{}' after {} entries",
            self.config.version_token,
            entries_scanned
        );
        ProbeOutcome::NoMatch {
            probe_path,
            entries_scanned,
        }
    }

    /// Run the probe and collapse the outcome to installed / not installed.
    pub fn is_installed(&self) -> bool {
        self.check().is_installed()
    }

    /// List every entry under the probe path with its match flag.
    ///
    /// Sorted by name. Never alerts; an unresolved root is returned as an error.
    pub fn list_entries(&self) -> Result<Vec<SdkEntry>> {
        let probe_path = self.probe_path()?;
        let mut listed: Vec<SdkEntry> = enumerate(&probe_path)?
            .map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                SdkEntry {
                    matches: name.contains(&self.config.version_token),
                    is_dir: entry.file_type().map(|t| t.is_dir()).unwrap_or(false),
                    name,
                }
            })
            .collect();
        listed.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(listed)
    }

    /// Test one enumerated entry.
    ///
    /// Returns `Some(entry)` on a match, where `entry` is `None` when the
    /// probe path rather than the entry name produced it.
    fn match_entry(&self, probe_path: &Path, name: String) -> Option<Option<String>> {
        let token = self.config.version_token.as_str();
        match self.config.match_mode {
            MatchMode::EntryName => name.contains(token).then_some(Some(name)),
            MatchMode::ProbePath => probe_path
                .to_string_lossy()
                .contains(token)
                .then_some(None),
        }
    }
}

/// Start enumerating `path`.
///
/// The iterator ends at the first read error; a failed cursor is not read again.
fn enumerate(path: &Path) -> Result<impl Iterator<Item = DirEntry>> {
    let reader = fs::read_dir(path).map_err(|source| InstallHelperError::SdkDirUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(reader.map_while(|entry| entry.ok()))
}

/// Reject paths that would not fit in a `MAX_PATH` buffer with its terminator.
fn check_path_length(path: &Path) -> Result<()> {
    let len = path.as_os_str().to_string_lossy().encode_utf16().count();
    if len >= MAX_PATH {
        return Err(InstallHelperError::PathTooLong {
            path: path.to_path_buf(),
            len,
            max: MAX_PATH - 1,
        });
    }
    Ok(())
}
