// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Exercises the subprocess merger against `/bin/sh` one-liners.
#![cfg(unix)]
#![allow(missing_docs)]
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use permutator_core::{
    MergeCollaborator, MergeRequest, MergeTool, PermuteError, ProcessMerger, StrategyRegistry,
};
use permutator_dry_tests::write_inputs;

fn sh(script: &str, output_suffix: Option<&str>) -> ProcessMerger {
    ProcessMerger::new(MergeTool {
        program: PathBuf::from("sh"),
        // `sh -c SCRIPT OUTPUT INPUT...` binds OUTPUT to $0 and the inputs to $@.
        leading_args: vec!["-c".into(), script.into()],
        extension: "mp3".into(),
        output_suffix: output_suffix.map(str::to_owned),
    })
}

#[test]
fn concatenates_inputs_in_request_order() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = write_inputs(dir.path(), &["one", "two"]).unwrap();
    let reversed: Vec<String> = inputs.iter().rev().cloned().collect();
    let out = dir.path().join("merged.mp3");

    sh(r#"cat "$@" > "$0""#, None)
        .merge(&MergeRequest {
            output: &out,
            inputs: &reversed,
        })
        .unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "twoone");
}

#[test]
fn suffixed_output_is_renamed_into_place() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = write_inputs(dir.path(), &["x"]).unwrap();
    let out = dir.path().join("permutations-Audio-1.mp3");

    sh(r#"cat "$@" > "${0%.mp3}_MP3WRAP.mp3""#, Some("_MP3WRAP"))
        .merge(&MergeRequest {
            output: &out,
            inputs: &inputs,
        })
        .unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "x");
    assert!(!dir.path().join("permutations-Audio-1_MP3WRAP.mp3").exists());
}

#[test]
fn nonzero_exit_is_a_subprocess_failure() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.mp3");

    let err = sh("echo broken >&2; exit 3", None)
        .merge(&MergeRequest {
            output: &out,
            inputs: &[],
        })
        .unwrap_err();

    match err {
        PermuteError::SubprocessFailure { detail, .. } => {
            assert_eq!(detail, "exited with status 3: broken");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn silent_success_without_output_is_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing.mp3");

    let err = sh("exit 0", None)
        .merge(&MergeRequest {
            output: &out,
            inputs: &[],
        })
        .unwrap_err();

    assert!(matches!(err, PermuteError::SubprocessFailure { .. }));
}

#[test]
fn audio_strategy_end_to_end() {
    let inputs_dir = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let inputs = write_inputs(inputs_dir.path(), &["b", "a"]).unwrap();
    let registry = StrategyRegistry::with_defaults(Arc::new(sh(r#"cat "$@" > "$0""#, None)));

    let report = registry.run("Audio", &inputs, out_dir.path()).unwrap();

    assert_eq!(report.permutations, 2);
    assert_eq!(
        fs::read_to_string(out_dir.path().join("permutations-Audio-1.mp3")).unwrap(),
        "ab"
    );
    assert_eq!(
        fs::read_to_string(out_dir.path().join("permutations-Audio-2.mp3")).unwrap(),
        "ba"
    );
}
