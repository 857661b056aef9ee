//! Build identity for the running binary.
//!
//! Two layers live here. [`BuildStamp`] holds the three labels baked into
//! the binary at compile time from the `LISA_BUILD_VERSION`,
//! `LISA_BUILD_COMMIT` and `LISA_BUILD_DATE` environment variables.
//! [`BuildInfo`] is the normalised identity the application installs once
//! into an [`IdentityStore`], normally the process-wide [`process_store`],
//! and reads back with [`current`].

use std::{borrow::Cow, fmt, sync::OnceLock};

use thiserror::Error;

/// Version label used when the build is not stamped.
pub const DEFAULT_VERSION: &str = "dev";
/// Commit label used when the build is not stamped.
pub const DEFAULT_COMMIT: &str = "none";
/// Date label used when the build is not stamped.
pub const DEFAULT_DATE: &str = "unknown";

/// Compile-time build labels, before normalisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildStamp {
    /// Release version, for example `1.4.0`.
    pub version: &'static str,
    /// Source revision the binary was built from.
    pub commit: &'static str,
    /// Build date.
    pub date: &'static str,
}

impl BuildStamp {
    /// Labels of a binary built without any stamping.
    pub const UNSTAMPED: Self = Self {
        version: DEFAULT_VERSION,
        commit: DEFAULT_COMMIT,
        date: DEFAULT_DATE,
    };

    /// Labels stamped into this binary by the build environment.
    #[must_use]
    pub const fn current() -> Self {
        Self {
            version: or_default(option_env!("LISA_BUILD_VERSION"), DEFAULT_VERSION),
            commit: or_default(option_env!("LISA_BUILD_COMMIT"), DEFAULT_COMMIT),
            date: or_default(option_env!("LISA_BUILD_DATE"), DEFAULT_DATE),
        }
    }
}

const fn or_default(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(value) => value,
        None => default,
    }
}

/// Normalised build identity.
///
/// Each label is trimmed; a label that is blank after trimming keeps its
/// default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    version: Cow<'static, str>,
    commit: Cow<'static, str>,
    date: Cow<'static, str>,
}

impl BuildInfo {
    /// Identity observed before anything has been installed.
    pub const UNSTAMPED: Self = Self {
        version: Cow::Borrowed(DEFAULT_VERSION),
        commit: Cow::Borrowed(DEFAULT_COMMIT),
        date: Cow::Borrowed(DEFAULT_DATE),
    };

    /// Build an identity from raw labels.
    #[must_use]
    pub fn new(version: &str, commit: &str, date: &str) -> Self {
        Self {
            version: normalise(version, DEFAULT_VERSION),
            commit: normalise(commit, DEFAULT_COMMIT),
            date: normalise(date, DEFAULT_DATE),
        }
    }

    /// Release version label.
    #[must_use]
    pub fn version(&self) -> &str { &self.version }

    /// Source revision label.
    #[must_use]
    pub fn commit(&self) -> &str { &self.commit }

    /// Build date label.
    #[must_use]
    pub fn date(&self) -> &str { &self.date }
}

impl Default for BuildInfo {
    fn default() -> Self { Self::UNSTAMPED }
}

impl From<BuildStamp> for BuildInfo {
    fn from(stamp: BuildStamp) -> Self { Self::new(stamp.version, stamp.commit, stamp.date) }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (commit {}, built {})",
            self.version, self.commit, self.date
        )
    }
}

fn normalise(raw: &str, default: &'static str) -> Cow<'static, str> {
    match raw.trim() {
        "" => Cow::Borrowed(default),
        trimmed => Cow::Owned(trimmed.to_owned()),
    }
}

/// Errors raised while installing the build identity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildInfoError {
    /// An identity was already installed; the new one was discarded.
    #[error("build identity already installed as {installed}; ignoring {rejected}")]
    AlreadyInstalled {
        /// Identity that remains in effect.
        installed: Box<BuildInfo>,
        /// Identity that was refused.
        rejected: Box<BuildInfo>,
    },
}

static UNSTAMPED_INFO: BuildInfo = BuildInfo::UNSTAMPED;
static PROCESS: IdentityStore = IdentityStore::new();

/// Write-once holder for a [`BuildInfo`].
#[derive(Debug, Default)]
pub struct IdentityStore {
    slot: OnceLock<BuildInfo>,
}

impl IdentityStore {
    /// An empty store; reads observe [`BuildInfo::UNSTAMPED`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Install `info` unless an identity is already present.
    ///
    /// # Errors
    ///
    /// Returns [`BuildInfoError::AlreadyInstalled`] if an identity was
    /// installed earlier. The earlier identity stays in effect.
    pub fn install(&self, info: BuildInfo) -> Result<(), BuildInfoError> {
        self.slot
            .set(info)
            .map_err(|rejected| BuildInfoError::AlreadyInstalled {
                installed: Box::new(self.current().clone()),
                rejected: Box::new(rejected),
            })
    }

    /// The installed identity, or [`BuildInfo::UNSTAMPED`].
    #[must_use]
    pub fn current(&self) -> &BuildInfo { self.slot.get().unwrap_or(&UNSTAMPED_INFO) }
}

/// The process-wide store the application installs its identity into.
#[must_use]
pub const fn process_store() -> &'static IdentityStore { &PROCESS }

/// The process-wide build identity, or [`BuildInfo::UNSTAMPED`] if none has
/// been installed yet.
#[must_use]
pub fn current() -> &'static BuildInfo { PROCESS.current() }
