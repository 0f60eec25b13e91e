// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Line-oriented text output with overwrite semantics.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::PermuteError;

/// Newline-terminated record writer for one output file.
///
/// Creating a sink replaces whatever file already sits at the path; it never
/// appends. Bytes are only guaranteed on disk once [`OutputSink::finish`]
/// returns, so prefer [`OutputSink::scoped`], which finishes on every path.
#[derive(Debug)]
pub struct OutputSink {
    path: PathBuf,
    writer: BufWriter<File>,
    records: u64,
}

impl OutputSink {
    /// Remove any existing file at `path` and open a fresh one for writing.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, PermuteError> {
        let path = path.into();
        remove_existing(&path)?;
        let file = File::create(&path).map_err(|e| PermuteError::io(&path, e))?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
            records: 0,
        })
    }

    /// Open a sink at `path`, hand it to `body`, then flush and close it
    /// whether or not `body` succeeded.
    ///
    /// An error from `body` takes precedence over a flush error.
    pub fn scoped<T, F>(path: impl Into<PathBuf>, body: F) -> Result<T, PermuteError>
    where
        F: FnOnce(&mut Self) -> Result<T, PermuteError>,
    {
        let mut sink = Self::create(path)?;
        let outcome = body(&mut sink);
        let closed = sink.finish();
        let value = outcome?;
        closed?;
        Ok(value)
    }

    /// Append `record` followed by `\n`.
    pub fn write_line(&mut self, record: &str) -> Result<(), PermuteError> {
        self.writer
            .write_all(record.as_bytes())
            .and_then(|()| self.writer.write_all(b"\n"))
            .map_err(|e| PermuteError::io(&self.path, e))?;
        self.records += 1;
        Ok(())
    }

    /// Number of records written so far.
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Flush buffered bytes, sync them, and close the file.
    pub fn finish(self) -> Result<(), PermuteError> {
        let Self { path, writer, .. } = self;
        let file = writer
            .into_inner()
            .map_err(|e| PermuteError::io(&path, e.into_error()))?;
        file.sync_all().map_err(|e| PermuteError::io(&path, e))
    }
}

/// Delete `path` if it exists. A missing file is fine; anything else that
/// prevents removal is a [`PermuteError::DestinationConflict`].
pub(crate) fn remove_existing(path: &Path) -> Result<(), PermuteError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(PermuteError::DestinationConflict {
            path: path.to_path_buf(),
            source,
        }),
    }
}
