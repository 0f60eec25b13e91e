// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use tracing::{debug, info};

use super::{Destination, RunReport, StopSignal, Strategy};
use crate::generator::{for_each_permutation, Visit};
use crate::sink::OutputSink;
use crate::PermuteError;

/// Permutes the characters of each input string on its own.
///
/// Inputs are never permuted against each other: input `N` (1-based) is
/// exhausted into `permutations-Character-<N>.txt` before input `N + 1`
/// starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterStrategy;

impl CharacterStrategy {
    /// Registry key.
    pub const NAME: &'static str = "Character";

    /// File name for the `index`-th input (1-based).
    pub fn file_name(index: usize) -> String {
        format!("permutations-Character-{index}.txt")
    }
}

impl Strategy for CharacterStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn prompt(&self) -> &'static str {
        "Input one or more strings. Each will have its characters permuted, but will not be \
         permuted with other strings. Use the String permutator to permute the strings with \
         each other."
    }

    fn run_until(
        &self,
        inputs: &[String],
        destination: &Destination,
        stop: &StopSignal,
    ) -> Result<RunReport, PermuteError> {
        info!(
            strategy = Self::NAME,
            inputs = inputs.len(),
            dest = %destination.path().display(),
            "permuting characters"
        );
        let mut report = RunReport::default();

        for (index, input) in inputs.iter().enumerate() {
            if stop.is_raised() {
                report.stopped = true;
                break;
            }
            let path = destination.join(Self::file_name(index + 1));
            let mut tokens: Vec<char> = input.chars().collect();
            tokens.sort_unstable();

            let mut line = String::with_capacity(input.len());
            let walk = OutputSink::scoped(&path, |sink| {
                for_each_permutation(&mut tokens, |perm| -> Result<Visit, PermuteError> {
                    line.clear();
                    line.extend(perm);
                    sink.write_line(&line)?;
                    Ok(stop.after_permutation())
                })
            })?;

            debug!(path = %path.display(), permutations = walk.visited, "wrote character permutations");
            report.absorb(walk);
            report.artifacts.push(path);
        }

        info!(
            artifacts = report.artifacts.len(),
            permutations = report.permutations,
            stopped = report.stopped,
            "character run finished"
        );
        Ok(report)
    }
}
