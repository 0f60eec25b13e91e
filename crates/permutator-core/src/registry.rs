// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Name → strategy table consumed by front ends.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::merge::MergeCollaborator;
use crate::strategy::{
    CharacterStrategy, Destination, FileStrategy, RunReport, StopSignal, Strategy, StringStrategy,
};
use crate::PermuteError;

/// Registered strategies keyed by [`Strategy::name`].
///
/// Built once from a static list. Registering a name that is already present
/// replaces the earlier strategy; the displaced one is handed back.
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    entries: BTreeMap<&'static str, Arc<dyn Strategy>>,
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

impl StrategyRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the three built-in strategies, with audio merges
    /// routed through `merger`.
    pub fn with_defaults(merger: Arc<dyn MergeCollaborator>) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(CharacterStrategy));
        registry.register(Arc::new(StringStrategy));
        registry.register(Arc::new(FileStrategy::new(merger)));
        registry
    }

    /// Insert `strategy` under its own name. Later registrations win.
    pub fn register(&mut self, strategy: Arc<dyn Strategy>) -> Option<Arc<dyn Strategy>> {
        let name = strategy.name();
        let displaced = self.entries.insert(name, strategy);
        if displaced.is_some() {
            debug!(name, "strategy re-registered; previous entry replaced");
        }
        displaced
    }

    /// Strategy registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Strategy>> {
        self.entries.get(name)
    }

    /// Registered names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Registered strategies in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Strategy>> + '_ {
        self.entries.values()
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Front-end entry point: look up `name`, validate `destination_dir`, and
    /// run the strategy over `inputs` to exhaustion.
    pub fn run(
        &self,
        name: &str,
        inputs: &[String],
        destination_dir: impl Into<PathBuf>,
    ) -> Result<RunReport, PermuteError> {
        self.run_until(name, inputs, destination_dir, &StopSignal::new())
    }

    /// As [`StrategyRegistry::run`], honouring `stop` between permutations.
    pub fn run_until(
        &self,
        name: &str,
        inputs: &[String],
        destination_dir: impl Into<PathBuf>,
        stop: &StopSignal,
    ) -> Result<RunReport, PermuteError> {
        let strategy = self
            .get(name)
            .ok_or_else(|| PermuteError::UnknownStrategy(name.to_owned()))?;
        let destination = Destination::open(destination_dir)?;
        strategy.run_until(inputs, &destination, stop)
    }
}
