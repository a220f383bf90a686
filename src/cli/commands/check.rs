//! Check command implementation.
//!
//! The `install-helper check` command runs the same probe the installer
//! runs and reports the outcome. Exit code 0 means installed, 1 not
//! installed, 2 Program Files could not be resolved.

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::config::{MatchMode, ProbeConfig};
use crate::error::Result;
use crate::notify::Notifier;
use crate::probe::{ProbeOutcome, RuntimeProbe};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand<'a> {
    args: CheckArgs,
    notifier: &'a dyn Notifier,
}

/// JSON shape of `check --json`.
#[derive(Debug, Serialize)]
struct CheckReport<'r> {
    installed: bool,
    root: String,
    config: &'r ProbeConfig,
    outcome: &'r ProbeOutcome,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(args: CheckArgs, notifier: &'a dyn Notifier) -> Self {
        Self { args, notifier }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.args.probe.install_root();
        let config = self.args.probe.config(self.args.match_mode());
        let probe = RuntimeProbe::new(root.as_ref(), self.notifier, config);

        let outcome = probe.check();

        if self.args.json {
            let report = CheckReport {
                installed: outcome.is_installed(),
                root: root.describe(),
                config: probe.config(),
                outcome: &outcome,
            };
            ui.raw(&serde_json::to_string_pretty(&report)?);
        } else {
            if probe.config().match_mode == MatchMode::ProbePath {
                ui.warning("Legacy matching: the token is tested against the probe path");
            }
            match &outcome {
                ProbeOutcome::Installed { .. } => ui.success(&outcome.summary()),
                ProbeOutcome::RootUnresolved { .. } => ui.error(&outcome.summary()),
                _ => {
                    ui.warning(&outcome.summary());
                    ui.message(&format!(
                        "The installer will report that no '{}' SDK is installed.",
                        probe.config().version_token
                    ));
                }
            }
        }

        Ok(CommandResult::from_exit_code(outcome.exit_code()))
    }
}
