// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn permutator(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("permutator").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(config_dir);
    cmd
}

#[test]
fn list_shows_every_strategy() {
    let cfg = tempfile::tempdir().unwrap();
    permutator(cfg.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Audio"))
        .stdout(predicate::str::contains("Character"))
        .stdout(predicate::str::contains("String"));
}

#[test]
fn print_writes_orderings_to_stdout() {
    let cfg = tempfile::tempdir().unwrap();
    permutator(cfg.path())
        .args(["print", "--chars", "cba"])
        .assert()
        .success()
        .stdout("abc\nacb\nbac\nbca\ncab\ncba\n");
}

#[test]
fn count_handles_duplicates() {
    let cfg = tempfile::tempdir().unwrap();
    permutator(cfg.path())
        .args(["count", "x", "y", "x"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn run_character_writes_file_and_lists_it() {
    let cfg = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    permutator(cfg.path())
        .args(["run", "Character", "--dest"])
        .arg(dest.path())
        .arg("ba")
        .assert()
        .success()
        .stdout(predicate::str::contains("permutations-Character-1.txt"));

    assert_eq!(
        fs::read_to_string(dest.path().join("permutations-Character-1.txt")).unwrap(),
        "ab\nba\n"
    );
}

#[test]
fn run_with_limit_reports_the_stop() {
    let cfg = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    permutator(cfg.path())
        .args(["run", "String", "--limit", "2", "--dest"])
        .arg(dest.path())
        .args(["a", "b", "c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stopped after 2 permutations"));

    assert_eq!(
        fs::read_to_string(dest.path().join("permutations-String.txt")).unwrap(),
        "a b c\na c b\n"
    );
}

#[test]
fn run_into_missing_destination_fails() {
    let cfg = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    permutator(cfg.path())
        .args(["run", "String", "--dest"])
        .arg(dest.path().join("nope"))
        .arg("a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("i/o error"));
}

#[test]
fn audio_with_missing_input_writes_nothing() {
    let cfg = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    permutator(cfg.path())
        .args(["run", "Audio", "--dest"])
        .arg(dest.path())
        .arg(dest.path().join("ghost.mp3"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input"));

    assert_eq!(fs::read_dir(dest.path()).unwrap().count(), 0);
}

#[test]
fn merge_tool_settings_persist() {
    let cfg = tempfile::tempdir().unwrap();
    permutator(cfg.path())
        .args([
            "config",
            "set-merge-tool",
            "--merge-tool",
            "sox",
            "--extension",
            "wav",
            "--no-output-suffix",
        ])
        .assert()
        .success();

    permutator(cfg.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""program": "sox""#))
        .stdout(predicate::str::contains(r#""extension": "wav""#))
        .stdout(predicate::str::contains(r#""output_suffix": null"#));
}

#[test]
fn remembered_destination_is_reused() {
    let cfg = tempfile::tempdir().unwrap();
    let dest = tempfile::tempdir().unwrap();
    permutator(cfg.path())
        .args(["run", "String", "--dest"])
        .arg(dest.path())
        .arg("solo")
        .assert()
        .success();

    permutator(cfg.path())
        .args(["run", "Character", "xy"])
        .assert()
        .success();

    assert!(dest.path().join("permutations-Character-1.txt").exists());
}
