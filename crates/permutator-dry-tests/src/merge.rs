// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Recording stand-in for the external merge tool.

use permutator_core::{MergeCollaborator, MergeRequest, PermuteError};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// One recorded merge invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCall {
    /// Requested output path.
    pub output: PathBuf,
    /// Inputs in the order they were handed over.
    pub inputs: Vec<String>,
}

/// [`MergeCollaborator`] that records every call and writes the input list
/// (one path per line) to the requested output instead of merging audio.
///
/// Clones share the same call log, so a test can keep one handle while the
/// strategy owns another.
///
/// # Example
///
/// ```
/// use permutator_core::{MergeCollaborator, MergeRequest};
/// use permutator_dry_tests::RecordingMerger;
///
/// let dir = tempfile::tempdir().unwrap();
/// let merger = RecordingMerger::new();
/// let out = dir.path().join("out.mp3");
/// let inputs = vec!["a.mp3".to_owned()];
/// merger.merge(&MergeRequest { output: &out, inputs: &inputs }).unwrap();
/// assert_eq!(merger.call_count(), 1);
/// ```
#[derive(Clone)]
pub struct RecordingMerger {
    extension: String,
    inner: Arc<Mutex<RecordingMergerInner>>,
}

#[derive(Default)]
struct RecordingMergerInner {
    calls: Vec<MergeCall>,
    fail_on_call: Option<usize>,
}

impl Default for RecordingMerger {
    fn default() -> Self {
        Self::with_extension("mp3")
    }
}

impl RecordingMerger {
    /// Recorder producing `.mp3` artifacts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder producing artifacts with `extension`.
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            inner: Arc::new(Mutex::new(RecordingMergerInner::default())),
        }
    }

    /// Make the `call`-th invocation (1-based) fail like a nonzero exit.
    pub fn fail_on_call(&self, call: usize) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.fail_on_call = Some(call);
    }

    /// All invocations so far, including the failing one.
    pub fn calls(&self) -> Vec<MergeCall> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Number of invocations so far.
    pub fn call_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .len()
    }
}

impl MergeCollaborator for RecordingMerger {
    fn extension(&self) -> &str {
        &self.extension
    }

    fn merge(&self, request: &MergeRequest<'_>) -> Result<(), PermuteError> {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.calls.push(MergeCall {
            output: request.output.to_path_buf(),
            inputs: request.inputs.to_vec(),
        });
        let call = inner.calls.len();
        if inner.fail_on_call == Some(call) {
            return Err(PermuteError::SubprocessFailure {
                program: "recording-merger".into(),
                detail: format!("exited with status 1 on call {call}"),
            });
        }

        let mut body = request.inputs.join("\n");
        body.push('\n');
        fs::write(request.output, body).map_err(|source| PermuteError::Io {
            path: request.output.to_path_buf(),
            source,
        })
    }
}
