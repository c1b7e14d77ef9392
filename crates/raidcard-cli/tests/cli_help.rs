use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("raidcard")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("share"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_share_help_shows_pick_format() {
    cargo_bin_cmd!("raidcard")
        .args(["share", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SLOT=NAME[@SERVER]"))
        .stdout(predicate::str::contains("--raid"));
}

#[test]
fn test_share_requires_a_pick() {
    cargo_bin_cmd!("raidcard")
        .args(["share", "board.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--pick"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("raidcard")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}
