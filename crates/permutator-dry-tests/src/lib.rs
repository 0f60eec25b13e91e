// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for Permutator crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake for testing without filesystem
//! - [`fixtures`] - Input file layout helpers
//! - [`merge`] - Recording stand-in for the external merge tool

pub mod config;
pub mod fixtures;
pub mod merge;

pub use config::InMemoryConfigStore;
pub use fixtures::{read_lines, write_inputs};
pub use merge::{MergeCall, RecordingMerger};
