// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! permutator-core: enumerate every distinct ordering of a token sequence and
//! materialize each ordering as a line, a file, or a merged artifact.
//!
//! The crate is split leaf-first:
//!
//! - [`generator`]: in-place lexicographic successor over `&mut [T]`.
//! - [`sink`]: scoped, overwrite-on-create text output.
//! - [`merge`]: boundary to the external merge tool used for audio files.
//! - [`strategy`]: the three token granularities (`Character`, `String`,
//!   `Audio`) driving the generator.
//! - [`registry`]: static name → strategy table and the front-end entry point.
//!
//! Everything runs on the caller's thread. One permutation is produced,
//! written, and discarded before the next one exists, so memory stays O(n)
//! no matter how large n! gets.
#![forbid(unsafe_code)]

mod error;
pub mod generator;
pub mod merge;
pub mod registry;
pub mod sink;
pub mod strategy;

pub use error::PermuteError;
pub use generator::{advance, distinct_permutations, for_each_permutation, pivot, Visit, Walk};
pub use merge::{MergeCollaborator, MergeRequest, MergeTool, ProcessMerger};
pub use registry::StrategyRegistry;
pub use sink::OutputSink;
pub use strategy::{
    CharacterStrategy, Destination, FileStrategy, RunReport, StopSignal, Strategy, StringStrategy,
};
