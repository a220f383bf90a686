//! Mock notifier for testing.
//!
//! # Example
//!
//! ```
//! use install_helper::notify::{MockNotifier, Notifier};
//!
//! let notifier = MockNotifier::new();
//! notifier.alert("Sorry", "Program Files is gone");
//! assert_eq!(notifier.alert_count(), 1);
//! assert_eq!(notifier.alerts()[0].0, "Sorry");
//! ```

use std::cell::RefCell;

use super::Notifier;

/// Captures alerts instead of showing them.
#[derive(Debug, Default)]
pub struct MockNotifier {
    alerts: RefCell<Vec<(String, String)>>,
}

impl MockNotifier {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured `(title, message)` pairs.
    pub fn alerts(&self) -> Vec<(String, String)> {
        self.alerts.borrow().clone()
    }

    /// Number of alerts raised.
    pub fn alert_count(&self) -> usize {
        self.alerts.borrow().len()
    }
}

impl Notifier for MockNotifier {
    fn alert(&self, title: &str, message: &str) {
        self.alerts
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
    }
}
