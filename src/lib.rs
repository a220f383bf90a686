//! install-helper - Detect an installed .NET 7 SDK before an install runs.
//!
//! Installer scripting cannot run managed code until it knows a runtime is
//! present, so this crate builds a native DLL exporting `IsNet7Installed`.
//! The same probe is available as a library and through a diagnostic CLI.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Probe configuration and defaults
//! - [`error`] - Error types and result aliases
//! - [`ffi`] - Exported DLL entry points
//! - [`notify`] - User-facing alerts (message box, console, mock)
//! - [`probe`] - Install root resolution and the runtime probe
//! - [`ui`] - Terminal output for the CLI
//!
//! # Example
//!
//! ```
//! use install_helper::config::ProbeConfig;
//! use install_helper::notify::MockNotifier;
//! use install_helper::probe::{FixedRoot, RuntimeProbe};
//!
//! let root = FixedRoot::new("/nonexistent/program-files");
//! let notifier = MockNotifier::new();
//! let probe = RuntimeProbe::new(&root, &notifier, ProbeConfig::default());
//!
//! // No SDK directory: a silent negative, no alert.
//! assert!(!probe.is_installed());
//! assert_eq!(notifier.alert_count(), 0);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod ffi;
pub mod notify;
pub mod probe;
pub mod ui;

pub use error::{InstallHelperError, Result};
pub use probe::probe_runtime_installed;
