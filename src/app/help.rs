//! Help and usage rendering.

use std::io::{self, Write};

use clap::{Command, CommandFactory};
use cli_defs::Cli;

/// The fully built command tree, so nested help carries full usage lines.
fn command() -> Command {
    let mut cmd = Cli::command();
    cmd.build();
    cmd
}

pub(super) fn write_usage(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", command().render_help())
}

/// Render help for `topic`, a space-separated command path where the empty
/// path is the top level. Returns `false` when no such command exists.
pub(super) fn write_topic(out: &mut impl Write, topic: &str) -> io::Result<bool> {
    let mut root = command();
    let Some(cmd) = find_topic(&mut root, topic) else {
        writeln!(out, "no help available for {topic:?}")?;
        return Ok(false);
    };
    write!(out, "{}", cmd.render_help())?;
    Ok(true)
}

fn find_topic<'a>(root: &'a mut Command, topic: &str) -> Option<&'a mut Command> {
    topic
        .split_whitespace()
        .try_fold(root, |cmd, name| cmd.find_subcommand_mut(name))
}
