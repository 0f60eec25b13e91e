// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Token granularities layered over the shared generator.
//!
//! Every strategy follows the same shape: split raw inputs into tokens, sort
//! them ascending, then materialize the current arrangement and [`advance`]
//! until the permutations run out. Only the tokenizer and the materializer
//! differ:
//!
//! | Strategy | Token | Artifact |
//! |---|---|---|
//! | [`CharacterStrategy`] | `char` of one input | `permutations-Character-<N>.txt` per input |
//! | [`StringStrategy`] | whole input string | `permutations-String.txt` |
//! | [`FileStrategy`] | input file path | `permutations-Audio-<N>.<ext>` per permutation |
//!
//! [`advance`]: crate::generator::advance

mod character;
mod file;
mod string;

pub use character::CharacterStrategy;
pub use file::FileStrategy;
pub use string::StringStrategy;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tempfile::NamedTempFile;

use crate::generator::{Visit, Walk};
use crate::PermuteError;

/// A permutation strategy: one token granularity plus how each ordering is
/// written out.
pub trait Strategy: Send + Sync {
    /// Registry key and display name.
    fn name(&self) -> &'static str;

    /// One-paragraph description of the inputs this strategy expects.
    fn prompt(&self) -> &'static str;

    /// Enumerate `inputs` into `destination`, checking `stop` between
    /// permutations.
    fn run_until(
        &self,
        inputs: &[String],
        destination: &Destination,
        stop: &StopSignal,
    ) -> Result<RunReport, PermuteError>;

    /// Enumerate `inputs` into `destination` to exhaustion.
    fn run(&self, inputs: &[String], destination: &Destination) -> Result<RunReport, PermuteError> {
        self.run_until(inputs, destination, &StopSignal::new())
    }
}

/// Output directory, checked to exist and accept writes before a run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    dir: PathBuf,
}

impl Destination {
    /// Validate `dir` as an output directory.
    ///
    /// Fails with [`PermuteError::Io`] when the path is missing, is not a
    /// directory, or does not accept a new file from this process.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PermuteError> {
        let dir = dir.into();
        let meta = fs::metadata(&dir).map_err(|e| PermuteError::io(&dir, e))?;
        if !meta.is_dir() {
            return Err(PermuteError::io(
                &dir,
                io::Error::new(io::ErrorKind::NotADirectory, "destination is not a directory"),
            ));
        }
        // Permission bits say nothing about the effective user; try a write.
        NamedTempFile::new_in(&dir)
            .and_then(NamedTempFile::close)
            .map_err(|e| PermuteError::io(&dir, e))?;
        Ok(Self { dir })
    }

    /// The validated directory.
    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Path of `file_name` inside the destination.
    pub fn join(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.dir.join(file_name)
    }
}

/// Cooperative cancellation handle shared between a front end and a run.
///
/// Clones observe the same flag. Strategies consult it between permutations
/// and never interrupt a write or merge that is already in flight. A signal
/// built with [`StopSignal::with_limit`] also raises itself once that many
/// permutations have been produced.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    inner: Arc<StopState>,
}

#[derive(Debug, Default)]
struct StopState {
    raised: AtomicBool,
    remaining: Option<AtomicU64>,
}

impl StopSignal {
    /// A signal that only stops when [`StopSignal::raise`] is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// A signal that raises itself after `limit` permutations.
    pub fn with_limit(limit: u64) -> Self {
        Self {
            inner: Arc::new(StopState {
                raised: AtomicBool::new(limit == 0),
                remaining: Some(AtomicU64::new(limit)),
            }),
        }
    }

    /// Ask the run to stop before its next permutation.
    pub fn raise(&self) {
        self.inner.raised.store(true, Ordering::SeqCst);
    }

    /// Whether a stop has been requested.
    pub fn is_raised(&self) -> bool {
        self.inner.raised.load(Ordering::SeqCst)
    }

    /// Record one produced permutation and decide whether to go on.
    pub(crate) fn after_permutation(&self) -> Visit {
        if let Some(remaining) = &self.inner.remaining {
            let before = remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .unwrap_or(0);
            if before <= 1 {
                self.raise();
            }
        }
        if self.is_raised() {
            Visit::Stop
        } else {
            Visit::Continue
        }
    }
}

/// What one strategy run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Artifacts in the order they were finished.
    pub artifacts: Vec<PathBuf>,
    /// Permutations materialized across all artifacts.
    pub permutations: u64,
    /// `true` when a stop request cut the enumeration short.
    pub stopped: bool,
}

impl RunReport {
    pub(crate) fn stopped() -> Self {
        Self {
            stopped: true,
            ..Self::default()
        }
    }

    pub(crate) fn absorb(&mut self, walk: Walk) {
        self.permutations += walk.visited;
        self.stopped |= walk.stopped;
    }
}
