#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CLOCKED_OUT_LOG: &str = "i 1970-01-01 00:00:00 unix-epoch:start\no 1970-01-01 00:00:00\n";

fn punchclock(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("punchclock").unwrap();
    cmd.env("PUNCHCLOCK_CONFIG_DIR", config_dir)
        .env_remove("PUNCHCLOCK_LOG");
    cmd
}

#[test]
fn test_help_exits_zero() {
    let temp = TempDir::new().unwrap();
    punchclock(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("in"));
}

#[test]
fn test_in_appends_line_with_accounts() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("log.timeclock");
    fs::write(&log, "").unwrap();

    punchclock(temp.path())
        .args(["--file", log.to_str().unwrap()])
        .args(["in", "--at", "1970-01-01 12:00:00", "INBOX", "meeting"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clocked in: i 1970-01-01 12:00:00 INBOX:meeting"));

    assert_eq!(
        fs::read_to_string(&log).unwrap(),
        "i 1970-01-01 12:00:00 INBOX:meeting\n"
    );
}

#[test]
fn test_in_without_accounts() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("log.timeclock");
    fs::write(&log, "").unwrap();

    punchclock(temp.path())
        .args(["in", "--at", "1970-01-01T12:00:00", "-f", log.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&log).unwrap(), "i 1970-01-01 12:00:00\n");
}

#[test]
fn test_in_uses_log_in_current_directory_by_default() {
    let temp = TempDir::new().unwrap();
    let workdir = temp.path().join("work");
    fs::create_dir_all(&workdir).unwrap();
    fs::write(workdir.join("log.timeclock"), "").unwrap();

    punchclock(&temp.path().join("config"))
        .current_dir(&workdir)
        .args(["in", "--at", "1970-01-01 12:00:00", "-d", "/", "a", "b"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(workdir.join("log.timeclock")).unwrap(),
        "i 1970-01-01 12:00:00 a/b\n"
    );
}

#[test]
fn test_in_with_missing_file_fails_without_creating_it() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("file-does-not-exist.txt");

    punchclock(temp.path())
        .args(["-f", log.to_str().unwrap(), "in"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("- file:"))
        .stderr(predicate::str::contains("does not exist"));

    assert!(!log.exists());
}

#[test]
fn test_in_with_directory_fails() {
    let temp = TempDir::new().unwrap();

    punchclock(temp.path())
        .args(["-f", temp.path().to_str().unwrap(), "in"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("is not a file"));
}

#[test]
fn test_in_with_bad_timestamp_is_usage_error() {
    let temp = TempDir::new().unwrap();

    punchclock(temp.path())
        .args(["in", "--at", "noon"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_append_probe_keeps_history() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("config");
    let log = temp.path().join("log.timeclock");
    fs::write(&log, CLOCKED_OUT_LOG).unwrap();

    punchclock(&config_dir)
        .args(["config", "write-probe", "append"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set write-probe = append"));

    punchclock(&config_dir)
        .args(["-f", log.to_str().unwrap()])
        .args(["in", "--at", "1970-01-01 12:00:00", "INBOX", "meeting"])
        .assert()
        .success();

    let content = fs::read_to_string(&log).unwrap();
    assert_eq!(content.lines().count(), 3);
    assert_eq!(
        content,
        format!("{}i 1970-01-01 12:00:00 INBOX:meeting\n", CLOCKED_OUT_LOG)
    );
}

#[test]
fn test_default_probe_truncates_before_append() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("log.timeclock");
    fs::write(&log, CLOCKED_OUT_LOG).unwrap();

    punchclock(temp.path())
        .args(["-f", log.to_str().unwrap(), "in", "--at", "1970-01-01 12:00:00"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&log).unwrap(), "i 1970-01-01 12:00:00\n");
}

#[test]
fn test_configured_file_and_delimiter() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("config");
    let log = temp.path().join("work.timeclock");
    fs::write(&log, "").unwrap();

    punchclock(&config_dir)
        .args(["config", "file", log.to_str().unwrap()])
        .assert()
        .success();
    punchclock(&config_dir)
        .args(["config", "delimiter", "."])
        .assert()
        .success();

    punchclock(&config_dir)
        .args(["in", "--at", "1970-01-01 12:00:00", "client", "project"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&log).unwrap(),
        "i 1970-01-01 12:00:00 client.project\n"
    );
}

#[test]
fn test_config_show_all() {
    let temp = TempDir::new().unwrap();

    punchclock(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("delimiter = :"))
        .stdout(predicate::str::contains("write-probe = truncate"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    punchclock(temp.path())
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key"));
}

// No locking: two sequential runs simply append in order. Concurrent runs
// against one log may interleave and are not covered here.
#[test]
fn test_in_twice_appends_twice() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("config");
    let log = temp.path().join("log.timeclock");
    fs::write(&log, "").unwrap();

    punchclock(&config_dir)
        .args(["config", "write-probe", "append"])
        .assert()
        .success();

    for _ in 0..2 {
        punchclock(&config_dir)
            .args(["-f", log.to_str().unwrap(), "in", "--at", "1970-01-01 12:00:00", "x"])
            .assert()
            .success();
    }

    assert_eq!(
        fs::read_to_string(&log).unwrap(),
        "i 1970-01-01 12:00:00 x\ni 1970-01-01 12:00:00 x\n"
    );
}
