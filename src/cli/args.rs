//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{MatchMode, ProbeConfig};
use crate::probe::{FixedRoot, InstallRoot, ProgramFilesFolder};

/// install-helper - Detect an installed .NET 7 SDK the way the installer does.
#[derive(Debug, Parser)]
#[command(name = "install-helper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether the runtime is installed (default if no command specified)
    Check(CheckArgs),

    /// List entries in the SDK directory
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where and what to probe.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProbeArgs {
    /// Use this directory instead of the Program Files special folder
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Version token to search for
    #[arg(
        long,
        env = "INSTALL_HELPER_TOKEN",
        value_name = "TEXT",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub token: Option<String>,
}

impl ProbeArgs {
    /// The install root selected by these arguments.
    pub fn install_root(&self) -> Box<dyn InstallRoot> {
        match &self.root {
            Some(path) => Box::new(FixedRoot::new(path)),
            None => Box::new(ProgramFilesFolder),
        }
    }

    /// Probe configuration with any overrides applied.
    pub fn config(&self, mode: MatchMode) -> ProbeConfig {
        let config = ProbeConfig::default().with_match_mode(mode);
        match &self.token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub probe: ProbeArgs,

    /// Match the token against the probe path instead of entry names
    #[arg(long)]
    pub legacy_match: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    /// The match mode selected by `--legacy-match`.
    pub fn match_mode(&self) -> MatchMode {
        if self.legacy_match {
            MatchMode::ProbePath
        } else {
            MatchMode::EntryName
        }
    }
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub probe: ProbeArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::parse_from(["install-helper"]);
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn check_parses_probe_flags() {
        let cli = Cli::parse_from([
            "install-helper",
            "check",
            "--root",
            "/pf",
            "--token",
            "8.0",
            "--legacy-match",
            "--json",
        ]);
        let Some(Commands::Check(args)) = cli.command else {
            panic!("Expected Check command");
        };
        assert_eq!(args.probe.root, Some(PathBuf::from("/pf")));
        assert_eq!(args.probe.token.as_deref(), Some("8.0"));
        assert!(args.json);
        assert_eq!(args.match_mode(), MatchMode::ProbePath);
    }

    #[test]
    fn empty_token_is_rejected() {
        let result = Cli::try_parse_from(["install-helper", "check", "--token", ""]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["install-helper", "list", "--quiet", "--debug"]);
        assert!(cli.quiet);
        assert!(cli.debug);
    }

    #[test]
    fn probe_args_apply_token_override() {
        let args = ProbeArgs {
            root: None,
            token: Some("6.0".to_string()),
        };
        let config = args.config(MatchMode::EntryName);
        assert_eq!(config.version_token, "6.0");
    }

    #[test]
    fn probe_args_default_to_program_files() {
        let args = ProbeArgs::default();
        assert!(args.install_root().describe().contains("Program Files"));
        assert_eq!(args.config(MatchMode::EntryName), ProbeConfig::default());
    }

    #[test]
    fn probe_args_root_selects_fixed_root() {
        let args = ProbeArgs {
            root: Some(PathBuf::from("/pf")),
            token: None,
        };
        assert!(args.install_root().describe().contains("/pf"));
    }
}
