// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved preferences for Permutator front ends.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Config key the prefs blob is stored under.
pub const PREFS_KEY: &str = "permutator-prefs";

/// Everything a front end remembers between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PermutatorPrefs {
    /// External merge tool used by the Audio strategy.
    pub merge_tool: MergeToolPrefs,
    /// Destination used by the previous successful run.
    pub last_destination: Option<PathBuf>,
}

/// How to invoke the external merge tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeToolPrefs {
    /// Program name or path.
    pub program: String,
    /// Arguments placed before the output path.
    pub leading_args: Vec<String>,
    /// Extension of merged artifacts (no dot).
    pub extension: String,
    /// Suffix the tool appends to output stems, if any.
    pub output_suffix: Option<String>,
}

impl Default for MergeToolPrefs {
    fn default() -> Self {
        Self {
            program: "mp3wrap".into(),
            leading_args: Vec::new(),
            extension: "mp3".into(),
            output_suffix: Some("_MP3WRAP".into()),
        }
    }
}
