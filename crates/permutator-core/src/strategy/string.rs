// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use tracing::info;

use super::{Destination, RunReport, StopSignal, Strategy};
use crate::generator::{for_each_permutation, Visit};
use crate::sink::OutputSink;
use crate::PermuteError;

/// Permutes whole input strings against each other, leaving each string
/// intact. Every ordering becomes one space-joined line of
/// `permutations-String.txt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringStrategy;

impl StringStrategy {
    /// Registry key.
    pub const NAME: &'static str = "String";
    /// The single output file.
    pub const FILE_NAME: &'static str = "permutations-String.txt";
}

impl Strategy for StringStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn prompt(&self) -> &'static str {
        "Input two or more strings. Each will be permuted with other strings, but will itself \
         be left unchanged. Use the Character permutator to permute the characters within a \
         string."
    }

    fn run_until(
        &self,
        inputs: &[String],
        destination: &Destination,
        stop: &StopSignal,
    ) -> Result<RunReport, PermuteError> {
        info!(strategy = Self::NAME, inputs = inputs.len(), "permuting strings");
        if stop.is_raised() {
            return Ok(RunReport::stopped());
        }

        let path = destination.join(Self::FILE_NAME);
        let mut tokens = inputs.to_vec();
        tokens.sort_unstable();

        let walk = OutputSink::scoped(&path, |sink| {
            for_each_permutation(&mut tokens, |perm| -> Result<Visit, PermuteError> {
                sink.write_line(&perm.join(" "))?;
                Ok(stop.after_permutation())
            })
        })?;

        let mut report = RunReport::default();
        report.absorb(walk);
        report.artifacts.push(path);
        info!(
            permutations = report.permutations,
            stopped = report.stopped,
            "string run finished"
        );
        Ok(report)
    }
}
