//! Bridge between process entry and the application.
//!
//! [`start`] installs the build stamp, forwards the argument vector minus
//! the program name, and hands back whatever status the application
//! returns. The binary passes that status straight to
//! [`std::process::exit`]; keeping termination out of [`start`] lets tests
//! drive the bridge with a stand-in [`Application`].

use std::ffi::OsString;

use crate::build_info::BuildStamp;

/// The seam between the entry shim and the application core.
pub trait Application {
    /// Install the build identity. Called once, before [`Application::run`].
    fn set_build_info(&mut self, version: &str, commit: &str, date: &str);

    /// Execute the application with `args` (program name already removed)
    /// and return the process exit status.
    ///
    /// Taking `self` by value means an application can only be run once.
    fn run(self, args: Vec<OsString>) -> i32;
}

/// Install `stamp` into `app`, run it with `os_args[1..]`, and return its
/// exit status unchanged.
///
/// Arguments are forwarded as OS strings, so non-UTF-8 input reaches the
/// application untouched.
pub fn start<A, I, T>(mut app: A, stamp: BuildStamp, os_args: I) -> i32
where
    A: Application,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    app.set_build_info(stamp.version, stamp.commit, stamp.date);
    let args = os_args.into_iter().skip(1).map(Into::into).collect();
    app.run(args)
}
