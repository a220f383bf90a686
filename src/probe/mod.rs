//! Runtime presence detection.
//!
//! This module answers one question for the installer: is the .NET 7 SDK
//! installed under Program Files?
//!
//! # Modules
//!
//! - [`locator`] - Install root resolution (Program Files special folder)
//! - [`outcome`] - Probe outcome types
//! - [`runtime`] - The probe itself
//!
//! # Example
//!
//! ```no_run
//! use install_helper::probe::probe_runtime_installed;
//!
//! if !probe_runtime_installed() {
//!     println!(".NET 7 SDK not found");
//! }
//! ```

pub mod locator;
pub mod outcome;
pub mod runtime;

pub use locator::{FixedRoot, InstallRoot, ProgramFilesFolder, UnresolvableRoot};
pub use outcome::{ProbeOutcome, SdkEntry};
pub use runtime::{RuntimeProbe, FATAL_MESSAGE, FATAL_TITLE};

use crate::config::ProbeConfig;
use crate::notify::DialogNotifier;

/// Check for the .NET 7 SDK with the installer's default wiring.
///
/// Resolves Program Files through the shell, alerts through a message box
/// if that fails, and matches SDK directory names against `7.0`.
pub fn probe_runtime_installed() -> bool {
    let root = ProgramFilesFolder;
    let notifier = DialogNotifier;
    RuntimeProbe::new(&root, &notifier, ProbeConfig::default()).is_installed()
}
