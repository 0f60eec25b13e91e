// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Boundary to the external tool that merges one ordering of input files into
//! a single artifact.
//!
//! The core only needs "merge these inputs, in this order, into that path".
//! [`ProcessMerger`] answers it by spawning a configured program once per
//! permutation; tests substitute their own [`MergeCollaborator`].

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use shell_escape::escape;
use tracing::debug;

use crate::PermuteError;

/// One merge invocation: write `inputs`, concatenated in order, to `output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRequest<'a> {
    /// Final artifact path inside the destination directory.
    pub output: &'a Path,
    /// Input file paths in permutation order.
    pub inputs: &'a [String],
}

/// Something that can merge an ordered list of files into one artifact.
pub trait MergeCollaborator: Send + Sync {
    /// File extension (without the dot) of the artifacts this collaborator
    /// produces.
    fn extension(&self) -> &str;

    /// Produce `request.output`. Any failure aborts the surrounding run.
    fn merge(&self, request: &MergeRequest<'_>) -> Result<(), PermuteError>;
}

/// Location and calling convention of an external merge program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeTool {
    /// Program to execute (looked up on `PATH` when not absolute).
    pub program: PathBuf,
    /// Arguments placed before the output path.
    pub leading_args: Vec<String>,
    /// Extension of produced artifacts.
    pub extension: String,
    /// Suffix the tool appends to the output file stem, if any. mp3wrap, for
    /// one, writes `<stem>_MP3WRAP.mp3` no matter what it is asked for.
    pub output_suffix: Option<String>,
}

impl Default for MergeTool {
    fn default() -> Self {
        Self {
            program: PathBuf::from("mp3wrap"),
            leading_args: Vec::new(),
            extension: "mp3".into(),
            output_suffix: Some("_MP3WRAP".into()),
        }
    }
}

impl MergeTool {
    /// The full invocation for `request`, shell-quoted for display.
    ///
    /// Tokens containing spaces or shell metacharacters come back
    /// single-quoted, so the line can be pasted into a shell as-is.
    pub fn command_line(&self, request: &MergeRequest<'_>) -> String {
        let program = self.program.to_string_lossy();
        let output = request.output.to_string_lossy();
        std::iter::once(program.as_ref())
            .chain(self.leading_args.iter().map(String::as_str))
            .chain(std::iter::once(output.as_ref()))
            .chain(request.inputs.iter().map(String::as_str))
            .map(|token| escape(Cow::Borrowed(token)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Where the tool actually writes when it applies [`Self::output_suffix`].
    pub fn produced_path(&self, output: &Path) -> PathBuf {
        let Some(suffix) = &self.output_suffix else {
            return output.to_path_buf();
        };
        let stem = output
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = match output.extension() {
            Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
            None => format!("{stem}{suffix}"),
        };
        output.with_file_name(name)
    }
}

/// [`MergeCollaborator`] that runs a [`MergeTool`] as a child process and
/// waits for it.
#[derive(Debug, Clone, Default)]
pub struct ProcessMerger {
    tool: MergeTool,
}

impl ProcessMerger {
    /// Wrap `tool`.
    pub fn new(tool: MergeTool) -> Self {
        Self { tool }
    }

    fn failure(&self, detail: impl Into<String>) -> PermuteError {
        PermuteError::SubprocessFailure {
            program: self.tool.program.display().to_string(),
            detail: detail.into(),
        }
    }
}

impl MergeCollaborator for ProcessMerger {
    fn extension(&self) -> &str {
        &self.tool.extension
    }

    fn merge(&self, request: &MergeRequest<'_>) -> Result<(), PermuteError> {
        debug!(command = %self.tool.command_line(request), "invoking merge tool");

        let output = Command::new(&self.tool.program)
            .args(&self.tool.leading_args)
            .arg(request.output)
            .args(request.inputs)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.failure(format!("could not start: {e}")))?;

        if !output.status.success() {
            let status = match output.status.code() {
                Some(code) => format!("exited with status {code}"),
                None => "terminated by signal".to_owned(),
            };
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            debug!(%status, stderr, "merge tool exited unsuccessfully");
            return Err(if stderr.is_empty() {
                self.failure(status)
            } else {
                self.failure(format!("{status}: {stderr}"))
            });
        }

        let produced = self.tool.produced_path(request.output);
        if produced != request.output {
            fs::rename(&produced, request.output).map_err(|e| PermuteError::io(&produced, e))?;
        } else if !request.output.exists() {
            return Err(self.failure(format!(
                "no output written to {}",
                request.output.display()
            )));
        }
        Ok(())
    }
}
