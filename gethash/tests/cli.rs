// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Runs the `gethash` binary end to end.

use assert_cmd::Command;

const INPUT: &str = "a|KSkzSFYsJVRNKFJAQA==\n\
                     plain\n\
                     c|KSlCUEMoJTxeKFIxMg==\n";

fn gethash() -> Command { Command::cargo_bin("gethash").unwrap() }

#[test]
fn test_decodes_stdin() {
    gethash()
        .write_stdin("id|JShCVEMqIiAg\n")
        .assert()
        .success()
        .stdout("id|42\n");
}

#[test]
fn test_missing_newline_is_added_at_the_end() {
    gethash()
        .write_stdin("id|JShCVEMqIiAg")
        .assert()
        .success()
        .stdout("id|42\n");
}

#[test]
fn test_decodes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hashes.txt");
    std::fs::write(&path, INPUT).unwrap();

    gethash()
        .arg(&path)
        .assert()
        .success()
        .stdout("a|42\nplain\nc|712\n");
}

#[test]
fn test_mark_policy() {
    gethash()
        .args(["--on-error", "mark"])
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("a|42\nplain|!missing-delimiter\nc|712\n");
}

#[test]
fn test_skip_policy() {
    gethash()
        .args(["--on-error", "skip"])
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("a|42\nc|712\n");
}

#[test]
fn test_strict_fails_on_bad_line() {
    gethash()
        .arg("--strict")
        .write_stdin(INPUT)
        .assert()
        .code(1)
        .stdout("a|42\nplain\nc|712\n");
}

#[test]
fn test_strict_passes_clean_input() {
    gethash()
        .arg("--strict")
        .write_stdin("id|JShCVEMqIiAg\n")
        .assert()
        .success();
}

#[test]
fn test_verbose_reports_failures_on_stderr() {
    let output = gethash()
        .arg("--verbose")
        .write_stdin(INPUT)
        .output()
        .unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("<stdin>:2:"));
    assert!(stderr.contains("1 failed"));
}

#[test]
fn test_follow_matches_batch() {
    gethash()
        .arg("--follow")
        .write_stdin(INPUT)
        .assert()
        .success()
        .stdout("a|42\nplain\nc|712\n");
}

#[test]
fn test_unreadable_file_fails_but_others_decode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hashes.txt");
    std::fs::write(&path, "id|JShCVEMqIiAg\n").unwrap();

    gethash()
        .arg(dir.path().join("missing.txt"))
        .arg(&path)
        .assert()
        .code(1)
        .stdout("id|42\n");
}

#[test]
fn test_log_file_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("gethash.log");

    gethash()
        .arg("-l")
        .arg("--log-file")
        .arg(&log_file)
        .write_stdin("id|JShCVEMqIiAg\n")
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log_file).unwrap();
    assert!(contents.contains("Decoded output"));
}
