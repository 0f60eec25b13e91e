// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by a strategy run.
///
/// The first error aborts the rest of the enumeration. Artifacts written for
/// earlier permutations stay on disk.
#[derive(Debug, Error)]
pub enum PermuteError {
    /// An input file does not exist, is not a regular file, or cannot be read.
    #[error("invalid input {}: {reason}", path.display())]
    InvalidInput {
        /// Offending input path.
        path: PathBuf,
        /// Why the path was rejected.
        reason: String,
    },
    /// An output path already exists and could not be removed.
    #[error("destination {} already exists and could not be removed: {source}", path.display())]
    DestinationConflict {
        /// Output path that could not be cleared.
        path: PathBuf,
        /// Underlying removal failure.
        #[source]
        source: io::Error,
    },
    /// Read/write failure on the destination filesystem.
    #[error("i/o error at {}: {source}", path.display())]
    Io {
        /// Path being accessed when the failure happened.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: io::Error,
    },
    /// The merge tool could not be started or exited unsuccessfully.
    #[error("merge tool {program} failed: {detail}")]
    SubprocessFailure {
        /// Program that was invoked.
        program: String,
        /// Spawn error or exit status description.
        detail: String,
    },
    /// No strategy is registered under the requested name.
    #[error("strategy not registered: {0}")]
    UnknownStrategy(String),
}

impl PermuteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_input(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
