// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use std::collections::HashMap;

use permutator_app_core::config::{ConfigError, ConfigService};
use permutator_app_core::prefs::{PermutatorPrefs, PREFS_KEY};
use permutator_dry_tests::InMemoryConfigStore;

#[test]
fn missing_key_loads_as_none() {
    let service = ConfigService::new(InMemoryConfigStore::new());
    let loaded: Option<PermutatorPrefs> = service.load(PREFS_KEY).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn empty_blob_loads_as_default() {
    let mut data = HashMap::new();
    data.insert(PREFS_KEY.to_owned(), Vec::new());
    let service = ConfigService::new(InMemoryConfigStore::with_data(data));
    let prefs: PermutatorPrefs = service.load_or_default(PREFS_KEY).unwrap();
    assert_eq!(prefs, PermutatorPrefs::default());
}

#[test]
fn saved_prefs_come_back() {
    let service = ConfigService::new(InMemoryConfigStore::new());
    let mut prefs = PermutatorPrefs::default();
    prefs.merge_tool.program = "/opt/bin/mp3wrap".into();
    prefs.last_destination = Some("/tmp/out".into());

    service.save(PREFS_KEY, &prefs).unwrap();
    let loaded: PermutatorPrefs = service.load_or_default(PREFS_KEY).unwrap();

    assert_eq!(loaded, prefs);
    assert_eq!(service.store().save_count(), 1);
    let raw = service.store().raw(PREFS_KEY).unwrap();
    assert!(String::from_utf8(raw).unwrap().contains("\n  \"merge_tool\""));
}

#[test]
fn corrupt_blob_is_a_serde_error() {
    let mut data = HashMap::new();
    data.insert(PREFS_KEY.to_owned(), b"{not json".to_vec());
    let service = ConfigService::new(InMemoryConfigStore::with_data(data));
    let err = service.load::<PermutatorPrefs>(PREFS_KEY).unwrap_err();
    assert!(matches!(err, ConfigError::Serde(_)));
}

#[test]
fn store_failures_propagate() {
    let store = InMemoryConfigStore::new();
    store.set_fail_on_load(true);
    let service = ConfigService::new(store);
    assert!(matches!(
        service.load::<PermutatorPrefs>(PREFS_KEY),
        Err(ConfigError::Other(_))
    ));
}
