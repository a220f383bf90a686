//! Shell completions generation.
//!
//! The `install-helper completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    /// Render the completion script for the configured shell.
    pub fn render(&self) -> crate::error::Result<String> {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, "install-helper", &mut buf);
        String::from_utf8(buf).map_err(|e| anyhow::Error::from(e).into())
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        ui.raw(&self.render()?);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap_complete::Shell;

    #[test]
    fn generates_bash_completions() {
        let cmd = CompletionsCommand::new(CompletionsArgs { shell: Shell::Bash });
        let output = cmd.render().unwrap();
        assert!(output.contains("install-helper"));
        assert!(output.contains("complete"));
    }

    #[test]
    fn generates_powershell_completions() {
        let cmd = CompletionsCommand::new(CompletionsArgs {
            shell: Shell::PowerShell,
        });
        let output = cmd.render().unwrap();
        assert!(output.contains("install-helper"));
    }

    #[test]
    fn execute_writes_script() {
        let cmd = CompletionsCommand::new(CompletionsArgs { shell: Shell::Zsh });
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        assert_eq!(ui.raw_output().len(), 1);
    }
}
