//! User-facing alerts.
//!
//! The probe raises at most one alert per run, on the Program Files
//! resolution failure. How the alert reaches the user depends on the host:
//!
//! - [`DialogNotifier`] - modal message box when loaded by the installer
//! - [`ConsoleNotifier`] - styled stderr line for the diagnostic CLI
//! - [`MockNotifier`] - captures alerts for assertions

pub mod dialog;
pub mod mock;
pub mod terminal;

pub use dialog::DialogNotifier;
pub use mock::MockNotifier;
pub use terminal::ConsoleNotifier;

/// Receives blocking diagnostic alerts.
pub trait Notifier {
    /// Show an alert and return once the user has seen it.
    fn alert(&self, title: &str, message: &str);
}
