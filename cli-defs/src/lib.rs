//! Shared CLI type definitions for lisa build and runtime.
//!
//! This crate provides the command-line types used by both the `build.rs`
//! script (for man page generation) and the runtime's help rendering.
//! Keeping them in a separate crate lets the build script render
//! documentation without pulling in the runtime's configuration and logging
//! stack.
//!
//! Clap's automatic `help` subcommand and `--version` flag are disabled: the
//! runtime owns those spellings so it can accept the historical aliases
//! (`-v`, `-version`) that clap cannot express.

use clap::{Parser, Subcommand};

/// Name used for the binary, the man page and usage lines.
pub const BIN_NAME: &str = "lisa";

/// Top-level CLI entry point consumed by binaries.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = BIN_NAME,
    about = "Orchestrate coding-agent sessions",
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands exposed by `lisa`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print version info.
    Version,
    /// Show help for a command.
    Help {
        /// Command path to describe, for example `version`.
        topic: Vec<String>,
    },
}
