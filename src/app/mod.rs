//! The application's front door.
//!
//! [`Lisa`] is the [`Application`] the binary hands to the entry shim. A run
//! loads configuration, starts logging and routes the arguments:
//!
//! - no arguments print usage and fail;
//! - `version`, `--version`, `-version` and `-v` print the build identity
//!   and ignore whatever follows;
//! - `help`, `--help` and `-h` print help for the remaining words;
//! - anything else is reported as an unknown command.
//!
//! Only the first argument selects the route. Help text is rendered from the
//! shared `cli-defs` definitions. Business commands live behind this
//! dispatcher and are out of scope for this crate.

mod error;
mod help;

use std::{
    ffi::OsString,
    io::{self, Write},
};

use cli_defs::BIN_NAME;
pub use error::AppError;
use tracing::{debug, warn};

use crate::{
    build_info::{self, BuildInfo, BuildInfoError, IdentityStore},
    config::AppConfig,
    logging,
    shim::Application,
};

/// Exit status for a successful run.
pub const SUCCESS: i32 = 0;
/// Exit status for usage errors and failed runs.
pub const FAILURE: i32 = 1;

/// The `lisa` application.
#[derive(Debug)]
pub struct Lisa {
    store: &'static IdentityStore,
    rejected_identity: Option<BuildInfoError>,
}

impl Lisa {
    /// An application whose build identity lives in `store` rather than the
    /// process-wide one.
    #[must_use]
    pub const fn with_store(store: &'static IdentityStore) -> Self {
        Self {
            store,
            rejected_identity: None,
        }
    }
}

impl Default for Lisa {
    fn default() -> Self { Self::with_store(build_info::process_store()) }
}

impl Application for Lisa {
    fn set_build_info(&mut self, version: &str, commit: &str, date: &str) {
        // Logging is not up yet; the rejection is reported once `run` starts.
        self.rejected_identity = self
            .store
            .install(BuildInfo::new(version, commit, date))
            .err();
    }

    fn run(self, args: Vec<OsString>) -> i32 {
        let config = match AppConfig::load() {
            Ok(config) => config,
            Err(err) => return report(&err.into()),
        };
        if !logging::init(&config) {
            debug!("keeping previously installed log subscriber");
        }
        if let Some(err) = self.rejected_identity {
            warn!(error = %err, "build identity installed twice");
        }

        let identity = self.store.current();
        debug!(%identity, ?args, "dispatching");
        let outcome = dispatch(
            &args,
            identity,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        );
        match outcome {
            Ok(status) => status,
            Err(err) => report(&err),
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "final error report for the process"
)]
fn report(err: &AppError) -> i32 {
    eprintln!("{BIN_NAME}: {err}");
    FAILURE
}

/// Route `args` and return the exit status.
///
/// Command output goes to `stdout`; usage, help and diagnostics go to
/// `stderr`. `identity` is what the version commands print.
///
/// # Errors
///
/// Returns [`AppError::Output`] if either stream cannot be written.
pub fn dispatch(
    args: &[OsString],
    identity: &BuildInfo,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> Result<i32, AppError> {
    let Some(first) = args.first() else {
        help::write_usage(stderr)?;
        return Ok(FAILURE);
    };
    let rest = args.get(1..).unwrap_or_default();
    let word = first.to_string_lossy();

    if is_version_flag(&word) {
        write_version(stdout, identity)?;
        return Ok(SUCCESS);
    }
    if is_help_flag(&word) {
        return show_help(stderr, &join_words(rest));
    }
    writeln!(stderr, "unknown command: {word}\n")?;
    help::write_usage(stderr)?;
    Ok(FAILURE)
}

fn show_help(stderr: &mut impl Write, topic: &str) -> Result<i32, AppError> {
    let status = if help::write_topic(stderr, topic)? {
        SUCCESS
    } else {
        FAILURE
    };
    Ok(status)
}

fn write_version(out: &mut impl Write, identity: &BuildInfo) -> io::Result<()> {
    writeln!(out, "{BIN_NAME} {identity}")
}

fn is_version_flag(arg: &str) -> bool {
    matches!(arg, "version" | "--version" | "-version" | "-v")
}

fn is_help_flag(arg: &str) -> bool { matches!(arg, "help" | "--help" | "-h") }

fn join_words(words: &[OsString]) -> String {
    words
        .iter()
        .map(|word| word.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    struct Outcome {
        status: i32,
        stdout: String,
        stderr: String,
    }

    #[fixture]
    fn identity() -> BuildInfo {
        BuildInfo::new("1.0.0", "abcdef", "2024-01-01")
    }

    fn front_door(identity: &BuildInfo, args: &[&str]) -> Result<Outcome, AppError> {
        let args: Vec<OsString> = args.iter().map(OsString::from).collect();
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let status = dispatch(&args, identity, &mut stdout, &mut stderr)?;
        Ok(Outcome {
            status,
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        })
    }

    #[rstest]
    fn no_arguments_prints_usage(identity: BuildInfo) -> Result<(), AppError> {
        let outcome = front_door(&identity, &[])?;
        assert_eq!(outcome.status, FAILURE);
        assert!(outcome.stdout.is_empty());
        assert!(outcome.stderr.contains("Usage: lisa"), "{}", outcome.stderr);
        Ok(())
    }

    #[rstest]
    #[case(&["version"])]
    #[case(&["--version"])]
    #[case(&["-version"])]
    #[case(&["-v"])]
    #[case(&["-v", "ignored"])]
    #[case(&["version", "extra"])]
    #[case(&["version", "--help"])]
    fn version_spellings_print_identity(
        identity: BuildInfo,
        #[case] args: &[&str],
    ) -> Result<(), AppError> {
        let outcome = front_door(&identity, args)?;
        assert_eq!(outcome.status, SUCCESS);
        assert_eq!(
            outcome.stdout,
            "lisa 1.0.0 (commit abcdef, built 2024-01-01)\n"
        );
        assert!(outcome.stderr.is_empty());
        Ok(())
    }

    #[rstest]
    fn unstamped_version_line() -> Result<(), AppError> {
        let outcome = front_door(&BuildInfo::UNSTAMPED, &["version"])?;
        assert_eq!(outcome.stdout, "lisa dev (commit none, built unknown)\n");
        Ok(())
    }

    #[rstest]
    #[case(&["help"])]
    #[case(&["--help"])]
    #[case(&["-h"])]
    fn help_spellings_print_top_level(
        identity: BuildInfo,
        #[case] args: &[&str],
    ) -> Result<(), AppError> {
        let outcome = front_door(&identity, args)?;
        assert_eq!(outcome.status, SUCCESS);
        assert!(outcome.stderr.contains("Commands:"), "{}", outcome.stderr);
        Ok(())
    }

    #[rstest]
    #[case(&["help", "version"])]
    #[case(&["-h", "version"])]
    fn help_for_known_topic(identity: BuildInfo, #[case] args: &[&str]) -> Result<(), AppError> {
        let outcome = front_door(&identity, args)?;
        assert_eq!(outcome.status, SUCCESS);
        assert!(
            outcome.stderr.contains("Print version info"),
            "{}",
            outcome.stderr
        );
        Ok(())
    }

    #[rstest]
    #[case(&["help", "nosuch"], "nosuch")]
    #[case(&["help", "-h"], "-h")]
    #[case(&["help", "--foo"], "--foo")]
    #[case(&["--help", "session", "spawn"], "session spawn")]
    fn help_for_unknown_topic_fails(
        identity: BuildInfo,
        #[case] args: &[&str],
        #[case] topic: &str,
    ) -> Result<(), AppError> {
        let outcome = front_door(&identity, args)?;
        assert_eq!(outcome.status, FAILURE);
        assert_eq!(
            outcome.stderr,
            format!("no help available for \"{topic}\"\n")
        );
        Ok(())
    }

    #[rstest]
    #[case("frobnicate")]
    #[case("--bogus")]
    #[case("x")]
    fn unknown_command_prints_usage(identity: BuildInfo, #[case] cmd: &str) -> Result<(), AppError> {
        let outcome = front_door(&identity, &[cmd, "y"])?;
        assert_eq!(outcome.status, FAILURE);
        assert!(outcome.stdout.is_empty());
        assert!(
            outcome
                .stderr
                .starts_with(&format!("unknown command: {cmd}\n\n")),
            "{}",
            outcome.stderr
        );
        assert!(outcome.stderr.contains("Usage: lisa"), "{}", outcome.stderr);
        Ok(())
    }

    #[rstest]
    fn second_identity_is_rejected_and_kept_for_run() {
        static STORE: IdentityStore = IdentityStore::new();
        let mut app = Lisa::with_store(&STORE);

        app.set_build_info("1.0.0", "abcdef", "2024-01-01");
        assert!(app.rejected_identity.is_none());

        app.set_build_info(" 2.0.0 ", "", "");
        assert_eq!(
            app.rejected_identity,
            Some(BuildInfoError::AlreadyInstalled {
                installed: Box::new(BuildInfo::new("1.0.0", "abcdef", "2024-01-01")),
                rejected: Box::new(BuildInfo::new("2.0.0", "none", "unknown")),
            })
        );
        assert_eq!(STORE.current().version(), "1.0.0");
    }
}
