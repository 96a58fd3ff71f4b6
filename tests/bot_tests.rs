use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{current_log_file, rib, setup_data_dir};

const TOKEN: &str = "SLACK_BOT_TOKEN";

#[test]
fn test_version_command() {
    let dir = setup_data_dir("version");

    rib()
        .env(TOKEN, "xoxb-test")
        .args(["--data-dir", &dir, "run"])
        .write_stdin("version\n")
        .assert()
        .success()
        .stdout(contains("Thanks for asking! I'm running"));
}

#[test]
fn test_record_and_summarize_current_month() {
    let dir = setup_data_dir("record_and_summarize");

    rib()
        .env(TOKEN, "xoxb-test")
        .args(["--data-dir", &dir, "run"])
        .write_stdin("add 30m host.example.com SW\nadd 1h nocomment HW\nget_current_month\n")
        .assert()
        .success()
        .stdout(contains(
            "*New interrupt successfully registered:* `30m0s` - `host.example.com`",
        ))
        .stdout(contains(
            "*New interrupt successfully registered:* `1h0m0s` - `nocomment`",
        ))
        .stdout(contains("Total count: 2"))
        .stdout(contains("Total time : 1h30m0s"));

    // two lines landed in the current month's file
    let content = std::fs::read_to_string(current_log_file(&dir)).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("\"fqdn\":\"host.example.com\""));
    assert!(content.contains("\"category\":\"HW\""));
}

#[test]
fn test_summarize_empty_month() {
    let dir = setup_data_dir("summarize_empty");

    rib()
        .env(TOKEN, "xoxb-test")
        .args(["--data-dir", &dir, "run"])
        .write_stdin("get_current_month\n")
        .assert()
        .success()
        .stdout(contains("Total count: 0"))
        .stdout(contains("Total time : 0s"));
}

#[test]
fn test_summarize_is_idempotent() {
    let dir = setup_data_dir("summarize_idempotent");

    let output = |input: &str| {
        let out = rib()
            .env(TOKEN, "xoxb-test")
            .args(["--data-dir", &dir, "run"])
            .write_stdin(input.to_string())
            .output()
            .unwrap();
        String::from_utf8(out.stdout).unwrap()
    };

    output("add 45m host.example.com OTHER\n");
    let first = output("get_current_month\n");
    let second = output("get_current_month\n");
    assert_eq!(first, second);
    assert!(first.contains("Total count: 1"));
    assert!(first.contains("Total time : 45m0s"));
}

#[test]
fn test_negative_duration_rejected_no_write() {
    let dir = setup_data_dir("negative_duration");

    rib()
        .env(TOKEN, "xoxb-test")
        .args(["--data-dir", &dir, "run"])
        .write_stdin("add -5m x HW\n")
        .assert()
        .success()
        .stdout(contains(":warning:"))
        .stdout(contains("negative time"));

    // rejected before the store was touched
    assert!(!current_log_file(&dir).exists());
}

#[test]
fn test_unparseable_duration_rejected() {
    let dir = setup_data_dir("unparseable_duration");

    rib()
        .env(TOKEN, "xoxb-test")
        .args(["--data-dir", &dir, "run"])
        .write_stdin("add notaduration x HW\n")
        .assert()
        .success()
        .stdout(contains(":warning:"))
        .stdout(contains("Impossible to parse duration"));

    assert!(!current_log_file(&dir).exists());
}

#[test]
fn test_unknown_category_never_dispatched() {
    let dir = setup_data_dir("unknown_category");

    // the grammar only admits HW|SW|OTHER|UNK; anything else is ignored
    rib()
        .env(TOKEN, "xoxb-test")
        .args(["--data-dir", &dir, "run"])
        .write_stdin("add 30m host.example.com BANANA\n")
        .assert()
        .success()
        .stdout(contains("registered").not());

    assert!(!current_log_file(&dir).exists());
}

#[test]
fn test_unmatched_lines_are_ignored() {
    let dir = setup_data_dir("unmatched_lines");

    rib()
        .env(TOKEN, "xoxb-test")
        .args(["--data-dir", &dir, "run"])
        .write_stdin("hello there\n\nsummarize please\n")
        .assert()
        .success()
        .stdout(contains(":warning:").not());
}

#[test]
fn test_missing_token_is_fatal() {
    let dir = setup_data_dir("missing_token");

    rib()
        .env_remove(TOKEN)
        .args(["--data-dir", &dir, "run"])
        .write_stdin("version\n")
        .assert()
        .failure()
        .stderr(contains("SLACK_BOT_TOKEN"));
}

#[test]
fn test_empty_token_is_fatal() {
    let dir = setup_data_dir("empty_token");

    rib()
        .env(TOKEN, "  ")
        .args(["--data-dir", &dir, "run"])
        .write_stdin("version\n")
        .assert()
        .failure()
        .stderr(contains("SLACK_BOT_TOKEN"));
}

#[test]
fn test_init_and_config_print() {
    let home = setup_data_dir("init_home");
    let dir = setup_data_dir("init_data");

    rib()
        .env("HOME", &home)
        .args(["--data-dir", &dir, "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    rib()
        .env("HOME", &home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("data_dir"))
        .stdout(contains("token_var"));

    rib()
        .env("HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("is valid"));
}
