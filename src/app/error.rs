//! Error types surfaced by the front door.

use std::io;

use thiserror::Error;

/// Failures that end a run with [`super::FAILURE`].
#[derive(Debug, Error)]
pub enum AppError {
    /// A configuration source was malformed or held a value of the wrong type.
    #[error("failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),
    /// Writing command output failed, e.g. on a closed pipe.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
