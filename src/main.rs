//! Binary entry point for `lisa`.
//!
//! The application lives in `lisa::app`, so this binary only forwards the
//! build stamp and process arguments and exits with the returned status.

use std::{env, process};

use lisa::{app::Lisa, build_info::BuildStamp, shim};

fn main() {
    let status = shim::start(Lisa::default(), BuildStamp::current(), env::args_os());
    process::exit(status);
}
