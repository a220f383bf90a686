//! Probe configuration.
//!
//! The exported DLL entry point always runs with [`ProbeConfig::default`].
//! The diagnostic CLI builds a config from its flags so support staff can
//! point the probe at another root or token without rebuilding.

use serde::Serialize;
use std::path::PathBuf;

/// Version token searched for by default.
pub const DEFAULT_VERSION_TOKEN: &str = "7.0";

/// SDK location relative to Program Files.
pub const DEFAULT_SDK_SUBPATH: &str = "dotnet\\sdk\\";

/// Maximum path length, in UTF-16 code units, including the terminator.
pub const MAX_PATH: usize = 260;

/// What the version token is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Test each enumerated entry's file name.
    #[default]
    EntryName,
    /// Test the constructed probe path once per enumerated entry.
    ///
    /// Reproduces the first InstallHelper release, where the result depends
    /// only on the probe path text and not on what the directory contains.
    ProbePath,
}

/// Settings for a single probe run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeConfig {
    /// Substring that marks a matching SDK.
    pub version_token: String,
    /// Path appended to the resolved root.
    pub sdk_subpath: PathBuf,
    /// How matching is performed.
    pub match_mode: MatchMode,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            version_token: DEFAULT_VERSION_TOKEN.to_string(),
            sdk_subpath: PathBuf::from(sdk_subpath_for_host()),
            match_mode: MatchMode::default(),
        }
    }
}

impl ProbeConfig {
    /// Replace the version token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.version_token = token.into();
        self
    }

    /// Replace the match mode.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Replace the SDK subpath.
    pub fn with_sdk_subpath(mut self, subpath: impl Into<PathBuf>) -> Self {
        self.sdk_subpath = subpath.into();
        self
    }
}

/// The SDK subpath with separators native to the host.
///
/// Backslashes are literal characters on Unix, so non-Windows hosts (tests,
/// the CLI pointed at a copied tree) get forward slashes instead.
fn sdk_subpath_for_host() -> String {
    if cfg!(windows) {
        DEFAULT_SDK_SUBPATH.to_string()
    } else {
        DEFAULT_SDK_SUBPATH.replace('\\', "/")
    }
}
