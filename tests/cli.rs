use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Working directory with a minimal `words/` layout: one adjective and one
/// noun so the output of a successful run is fully predictable.
fn fixture_dir() -> TempDir {
    let tmp = TempDir::new().expect("create temp dir");
    write(
        tmp.path(),
        "words/builtin/core.json",
        r#"{"adjectives": ["red"], "nouns": ["fox"]}"#,
    );
    write(tmp.path(), "words/extension/passgen_modules.json", "[]");
    tmp
}

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("passgen").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn prints_deterministic_passphrase_from_single_word_lists() {
    let dir = fixture_dir();
    cmd(&dir)
        .args(["-o", "print"])
        .assert()
        .success()
        .stdout("RedRedFox\n");
}

#[test]
fn respects_explicit_counts() {
    let dir = fixture_dir();
    cmd(&dir)
        .args(["-a", "1", "-N", "2", "-o", "print"])
        .assert()
        .success()
        .stdout("RedFoxRedFox\n");
}

#[test]
fn zero_counts_mean_defaults() {
    let dir = fixture_dir();
    cmd(&dir)
        .args(["-a", "0", "-N", "0", "-o", "print"])
        .assert()
        .success()
        .stdout("RedRedFox\n");
}

#[test]
fn negative_counts_are_rejected_at_parse() {
    let dir = fixture_dir();
    cmd(&dir)
        .args(["-a", "-1", "-o", "print"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("error"));
}

#[test]
fn appends_a_number_between_0_and_127() {
    let dir = fixture_dir();
    cmd(&dir)
        .args(["-n", "-o", "print"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^RedRedFox(\d{1,3})\n$").unwrap());
}

#[test]
fn unknown_output_option_fails_without_printing() {
    let dir = fixture_dir();
    cmd(&dir)
        .args(["--output", "banana"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("unknown output option 'banana'"));
}

#[test]
fn builtins_flag_skips_a_missing_manifest() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "words/builtin/core.json",
        r#"{"adjectives": ["red"], "nouns": ["fox"]}"#,
    );
    // no words/extension at all
    cmd(&tmp)
        .args(["-b", "-o", "print"])
        .assert()
        .success()
        .stdout("RedRedFox\n");
}

#[test]
fn extension_module_overrides_builtin_category() {
    let dir = fixture_dir();
    write(
        dir.path(),
        "words/extension/passgen_modules.json",
        r#"["animals"]"#,
    );
    write(
        dir.path(),
        "words/extension/animals/nouns.json",
        r#"{"nouns": ["owl"]}"#,
    );
    cmd(&dir)
        .args(["-o", "print"])
        .assert()
        .success()
        .stdout("RedRedOwl\n");
}

#[test]
fn missing_word_directory_is_fatal() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["-o", "print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn empty_noun_list_is_fatal() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "words/builtin/core.json",
        r#"{"adjectives": ["red"], "nouns": []}"#,
    );
    cmd(&tmp)
        .args(["-b", "-o", "print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no words available in category 'nouns'"));
}
