//! Core library for the `lisa` command-line front end.
//!
//! The binary is a thin entry shim: it stamps the build identity into the
//! application and hands over the process arguments via [`shim::start`].
//! Everything else lives here so it can be exercised without spawning a
//! process.

pub mod app;
pub mod build_info;
pub mod config;
pub mod logging;
pub mod shim;
