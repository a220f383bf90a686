//! Command-line interface for install-helper.
//!
//! The binary exists for support and QA: it runs the probe the installer
//! runs, from a terminal, and explains the result.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, ListArgs, ProbeArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
