//! End-to-end CLI tests for chatlens.
//!
//! These tests run the actual binary with various arguments and check its
//! output files, stdout and exit status.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const CHAT: &str = "\
12/1/24, 9:00 am - Alice created group \"Weekend\"
12/1/24, 9:00 am - Alice added Bob
12/1/24, 9:01 am - Alice: Good morning ☀️
12/1/24, 9:03 am - Bob: Morning! Plans for today?
Maybe lunch
13/1/24, 12:15 pm - Alice: <Media omitted>
13/1/24, 11:45 pm - Bob: see https://example.com 😂😂
3/2/2024, 12:05 am - Carol: Hello; with \"quotes\"
3/2/24, 8:30 pm - Alice: good night
";

/// Creates a temporary directory with export fixtures.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    fs::write(dir.path().join("chat.txt"), CHAT).unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();
    fs::write(dir.path().join("not_a_chat.txt"), "hello\nworld\n").unwrap();
    fs::write(
        dir.path().join("preamble.txt"),
        "Chat history with Bob\n1/1/24, 9:00 am - Bob: Hi\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("bad_date.txt"),
        "1/1/24, 9:00 am - Bob: Hi\n31/2/24, 9:00 am - Bob: no such day\n",
    )
    .unwrap();
    fs::write(dir.path().join("stop.txt"), "good\nmorning\n").unwrap();

    dir
}

fn chatlens_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatlens"));
    Command::from_std(cmd)
}

fn path_in(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Export
// ============================================================================

mod export {
    use super::*;

    #[test]
    fn test_export_csv() {
        let fixtures = setup_fixtures();
        let input = path_in(&fixtures, "chat.txt");
        let output = path_in(&fixtures, "out.csv");

        chatlens_cmd()
            .args(["export", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"))
            .stdout(predicate::str::contains("7 messages"));

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("Timestamp;Sender;Body"));
        assert!(content.contains("2024-01-12 09:01;Alice;Good morning ☀️"));
        assert!(content.contains("group_notification;Alice added Bob"));
        assert!(content.contains("\"Morning! Plans for today?\nMaybe lunch\""));
        // suppressed notice
        assert!(!content.contains("created group"));
    }

    #[test]
    fn test_export_json_with_calendar() {
        let fixtures = setup_fixtures();
        let input = path_in(&fixtures, "chat.txt");
        let output = path_in(&fixtures, "out.json");

        chatlens_cmd()
            .args([
                "export",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "-f",
                "json",
                "--calendar",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        let records = parsed.as_array().unwrap();
        assert_eq!(records.len(), 7);

        let last_bob = &records[4];
        assert_eq!(last_bob["sender"], "Bob");
        assert_eq!(last_bob["hour"], 23);
        assert_eq!(last_bob["hour_bucket"], "23-00");
        assert_eq!(last_bob["weekday_name"], "Saturday");

        let carol = &records[5];
        assert_eq!(carol["hour"], 0);
        assert_eq!(carol["timestamp"], "2024-02-03 00:05");
    }

    #[test]
    fn test_export_jsonl() {
        let fixtures = setup_fixtures();
        let input = path_in(&fixtures, "chat.txt");
        let output = path_in(&fixtures, "out.jsonl");

        chatlens_cmd()
            .args([
                "export",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "-f",
                "jsonl",
                "--no-timestamps",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 7);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("timestamp").is_none());
        }
    }

    #[test]
    fn test_default_output_follows_format() {
        let fixtures = setup_fixtures();
        let input = path_in(&fixtures, "chat.txt");

        chatlens_cmd()
            .current_dir(fixtures.path())
            .args(["export", input.to_str().unwrap(), "-f", "jsonl"])
            .assert()
            .success()
            .stdout(predicate::str::contains("chat_records.jsonl"));

        assert!(fixtures.path().join("chat_records.jsonl").exists());
    }

    #[test]
    fn test_export_filters() {
        let fixtures = setup_fixtures();
        let input = path_in(&fixtures, "chat.txt");
        let output = path_in(&fixtures, "alice.csv");

        chatlens_cmd()
            .args([
                "export",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--user",
                "Alice",
                "--after",
                "2024-01-13",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("2 records after filtering"));

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("<Media omitted>"));
        assert!(content.contains("good night"));
        assert!(!content.contains("Bob"));
    }

    #[test]
    fn test_keep_system() {
        let fixtures = setup_fixtures();
        let input = path_in(&fixtures, "chat.txt");
        let output = path_in(&fixtures, "all.csv");

        chatlens_cmd()
            .args([
                "export",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--keep-system",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("created group"));
    }

    #[test]
    fn test_skip_preamble() {
        let fixtures = setup_fixtures();
        let input = path_in(&fixtures, "preamble.txt");
        let output = path_in(&fixtures, "out.csv");

        chatlens_cmd()
            .args([
                "export",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--skip-preamble",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("Bob;Hi"));
    }
}

// ============================================================================
// Report
// ============================================================================

mod report {
    use super::*;

    #[test]
    fn test_report_to_stdout() {
        let fixtures = setup_fixtures();
        let input = path_in(&fixtures, "chat.txt");

        let output = chatlens_cmd()
            .args(["report", input.to_str().unwrap()])
            .output()
            .unwrap();
        assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["selection"], "Overall");
        assert_eq!(report["stats"]["messages"], 7);
        assert_eq!(report["stats"]["media"], 1);
        assert_eq!(report["stats"]["links"], 1);
        assert_eq!(report["emojis"][0]["emoji"], "😂");
        assert_eq!(report["emojis"][0]["count"], 2);
        assert_eq!(report["monthly_timeline"][1]["label"], "February-2024");
    }

    #[test]
    fn test_report_for_user_with_stopwords() {
        let fixtures = setup_fixtures();
        let input = path_in(&fixtures, "chat.txt");
        let stop = path_in(&fixtures, "stop.txt");
        let output = path_in(&fixtures, "alice.json");

        chatlens_cmd()
            .args([
                "report",
                input.to_str().unwrap(),
                "--user",
                "Alice",
                "--stopwords",
                stop.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Report for Alice (3 messages)"));

        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let words: Vec<&str> = report["common_words"]
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["label"].as_str().unwrap())
            .collect();
        assert!(!words.contains(&"good"));
        assert!(words.contains(&"night"));
    }

    #[test]
    fn test_report_unknown_user_is_empty_not_error() {
        let fixtures = setup_fixtures();
        let input = path_in(&fixtures, "chat.txt");

        let output = chatlens_cmd()
            .args(["report", input.to_str().unwrap(), "--user", "Nobody"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["stats"]["messages"], 0);
        assert_eq!(report["heatmap"]["rows"].as_array().unwrap().len(), 0);
    }
}

// ============================================================================
// Error Handling
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_missing_file() {
        chatlens_cmd()
            .args(["export", "/definitely/not/here.txt"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error:"));
    }

    #[test]
    fn test_empty_file() {
        let fixtures = setup_fixtures();
        let input = path_in(&fixtures, "empty.txt");

        chatlens_cmd()
            .args(["report", input.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid input"));
    }

    #[test]
    fn test_not_a_chat() {
        let fixtures = setup_fixtures();
        let input = path_in(&fixtures, "not_a_chat.txt");

        chatlens_cmd()
            .args(["report", input.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No messages found"));
    }

    #[test]
    fn test_preamble_without_flag() {
        let fixtures = setup_fixtures();
        let input = path_in(&fixtures, "preamble.txt");

        chatlens_cmd()
            .args(["report", input.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Stream alignment"));
    }

    #[test]
    fn test_invalid_calendar_date() {
        let fixtures = setup_fixtures();
        let input = path_in(&fixtures, "bad_date.txt");

        chatlens_cmd()
            .args(["report", input.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid timestamp '31/2/24, 9:00 am'"));
    }

    #[test]
    fn test_invalid_filter_date() {
        let fixtures = setup_fixtures();
        let input = path_in(&fixtures, "chat.txt");

        chatlens_cmd()
            .args(["export", input.to_str().unwrap(), "--after", "13-01-2024"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_unknown_format() {
        let fixtures = setup_fixtures();
        let input = path_in(&fixtures, "chat.txt");

        chatlens_cmd()
            .args(["export", input.to_str().unwrap(), "-f", "xml"])
            .assert()
            .failure();
    }

    #[test]
    fn test_invalid_log_level() {
        let fixtures = setup_fixtures();
        let input = path_in(&fixtures, "chat.txt");

        chatlens_cmd()
            .args(["--log-level", "chatlens=loudest", "report", input.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Configuration error"));
    }
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn test_help() {
    chatlens_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("report"));
}

#[test]
fn test_version() {
    chatlens_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
