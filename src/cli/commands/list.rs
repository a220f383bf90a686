//! List command implementation.
//!
//! The `install-helper list` command shows every entry under the SDK
//! directory and which ones contain the version token.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::config::MatchMode;
use crate::error::Result;
use crate::notify::ConsoleNotifier;
use crate::probe::{RuntimeProbe, SdkEntry};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

#[derive(Debug, Serialize)]
struct ListReport<'r> {
    root: String,
    version_token: &'r str,
    entries: &'r [SdkEntry],
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.args.probe.install_root();
        // Listing never alerts; the notifier only satisfies the probe.
        let notifier = ConsoleNotifier::new();
        let config = self.args.probe.config(MatchMode::EntryName);
        let probe = RuntimeProbe::new(root.as_ref(), &notifier, config);

        let entries = match probe.list_entries() {
            Ok(entries) => entries,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };
        let token = probe.config().version_token.as_str();

        if self.args.json {
            let report = ListReport {
                root: root.describe(),
                version_token: token,
                entries: &entries,
            };
            ui.raw(&serde_json::to_string_pretty(&report)?);
            return Ok(CommandResult::success());
        }

        for entry in &entries {
            let marker = if entry.matches { "✓" } else { "·" };
            let kind = if entry.is_dir { "" } else { " (file)" };
            ui.message(&format!("  {} {}{}", marker, entry.name, kind));
        }

        let matching = entries.iter().filter(|e| e.matches).count();
        ui.message(&format!(
            "{} entries, {} matching '{}'",
            entries.len(),
            matching,
            token
        ));

        Ok(CommandResult::success())
    }
}
