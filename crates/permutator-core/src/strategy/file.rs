// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{Destination, RunReport, StopSignal, Strategy};
use crate::generator::{for_each_permutation, Visit};
use crate::merge::{MergeCollaborator, MergeRequest};
use crate::sink::remove_existing;
use crate::PermuteError;

/// Permutes a list of audio files and asks a [`MergeCollaborator`] to merge
/// each ordering into `permutations-Audio-<N>.<ext>`, N counting
/// permutations from 1.
///
/// Every input path is checked before the first merge; one bad path fails
/// the whole call with nothing written. A failed merge ends the run, leaving
/// earlier artifacts in place.
#[derive(Clone)]
pub struct FileStrategy {
    merger: Arc<dyn MergeCollaborator>,
}

impl std::fmt::Debug for FileStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStrategy")
            .field("extension", &self.merger.extension())
            .finish_non_exhaustive()
    }
}

impl FileStrategy {
    /// Registry key.
    pub const NAME: &'static str = "Audio";

    /// Build a strategy that merges through `merger`.
    pub fn new(merger: Arc<dyn MergeCollaborator>) -> Self {
        Self { merger }
    }

    /// File name for the `index`-th permutation (1-based).
    pub fn file_name(index: u64, extension: &str) -> String {
        format!("permutations-Audio-{index}.{extension}")
    }
}

/// Reject anything that is not an existing, readable regular file.
fn check_readable(input: &str) -> Result<(), PermuteError> {
    let path = Path::new(input);
    let meta = fs::metadata(path)
        .map_err(|e| PermuteError::invalid_input(path, format!("cannot stat: {e}")))?;
    if !meta.is_file() {
        return Err(PermuteError::invalid_input(path, "not a regular file"));
    }
    File::open(path)
        .map(drop)
        .map_err(|e| PermuteError::invalid_input(path, format!("not readable: {e}")))
}

impl Strategy for FileStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn prompt(&self) -> &'static str {
        "Input two or more paths to audio files. Each ordering of the files will be merged \
         and written as a new file."
    }

    fn run_until(
        &self,
        inputs: &[String],
        destination: &Destination,
        stop: &StopSignal,
    ) -> Result<RunReport, PermuteError> {
        info!(strategy = Self::NAME, inputs = inputs.len(), "permuting files");
        inputs.iter().try_for_each(|input| check_readable(input))?;
        if stop.is_raised() {
            return Ok(RunReport::stopped());
        }

        let mut tokens = inputs.to_vec();
        tokens.sort_unstable();

        let mut artifacts = Vec::new();
        let walk = for_each_permutation(&mut tokens, |perm| -> Result<Visit, PermuteError> {
            let index = artifacts.len() as u64 + 1;
            let output = destination.join(Self::file_name(index, self.merger.extension()));
            remove_existing(&output)?;
            debug!(index, output = %output.display(), "merging permutation");
            self.merger
                .merge(&MergeRequest {
                    output: &output,
                    inputs: perm,
                })
                .inspect_err(|err| warn!(index, %err, "merge failed, ending run"))?;
            artifacts.push(output);
            Ok(stop.after_permutation())
        })?;

        let mut report = RunReport {
            artifacts,
            ..RunReport::default()
        };
        report.absorb(walk);
        info!(
            artifacts = report.artifacts.len(),
            stopped = report.stopped,
            "file run finished"
        );
        Ok(report)
    }
}
