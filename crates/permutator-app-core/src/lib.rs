// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for Permutator front ends (config, prefs).
//! Keeps CLI/UI adapters thin and storage-agnostic.

pub mod config;
pub mod prefs;
