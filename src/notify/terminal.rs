//! Terminal notifier for the diagnostic CLI.

use console::Style;

use super::Notifier;

/// Writes alerts to stderr instead of opening a dialog.
#[derive(Debug, Clone)]
pub struct ConsoleNotifier {
    style: Style,
}

impl ConsoleNotifier {
    /// Create a notifier, styled unless `NO_COLOR` or a non-terminal stderr.
    pub fn new() -> Self {
        let colors = std::env::var_os("NO_COLOR").is_none() && console::Term::stderr().is_term();
        Self::with_colors(colors)
    }

    /// Create a notifier with colors forced on or off.
    pub fn with_colors(colors: bool) -> Self {
        let style = if colors {
            Style::new().yellow().bold()
        } else {
            Style::new()
        };
        Self { style }
    }

    /// Render an alert line.
    pub fn format_alert(&self, title: &str, message: &str) -> String {
        format!("{} {}", self.style.apply_to(format!("⚠ {}:", title)), message)
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn alert(&self, title: &str, message: &str) {
        eprintln!("{}", self.format_alert(title, message));
    }
}
