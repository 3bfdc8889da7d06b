// Chunk: docs/chunks/cli_driver - Command-line front end over the editing core

//! End-to-end runs of the `lite-pad` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn lite_pad(settings_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lite-pad"))
        .args(args)
        .env("LITE_PAD_SETTINGS", settings_dir.join("settings.json"))
        .env_remove("LITE_PAD_LOG")
        .output()
        .expect("failed to run lite-pad")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "lite-pad failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn write(dir: &TempDir, name: &str, text: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_upper_prints_result() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "a.txt", "hello\nworld");
    let out = stdout(&lite_pad(dir.path(), &["upper", &file]));
    assert_eq!(out, "HELLO\nWORLD");
    assert_eq!(fs::read_to_string(&file).unwrap(), "hello\nworld");
}

#[test]
fn test_sort_in_place_with_selection() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "fruit.txt", "banana\nApple\ncherry");
    lite_pad(dir.path(), &["sort", &file, "--select", "0..15", "--in-place"]);
    assert_eq!(fs::read_to_string(&file).unwrap(), "Apple\nbanana\ncherry");
}

#[test]
fn test_unique_and_join() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "dups.txt", "b\na\nb\nc\na");
    let out = stdout(&lite_pad(dir.path(), &["unique", &file, "--select", "0..9"]));
    assert_eq!(out, "b\na\nc");

    let file = write(&dir, "lines.txt", "foo\nbar\nbaz");
    let out = stdout(&lite_pad(dir.path(), &["join", &file]));
    assert_eq!(out, "foo bar baz");
}

#[test]
fn test_stats_and_average_are_localized() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "nums.txt", "3 x 5 notanumber 2.5");

    let out = stdout(&lite_pad(dir.path(), &["average", &file]));
    assert_eq!(out.trim(), "Out of 3 parsed numbers, the average is 3.5");

    let out = stdout(&lite_pad(dir.path(), &["--lang", "hr", "stats", &file]));
    assert!(out.contains("Znakovi (s razmacima): 20"), "{out}");
    assert!(out.contains("Retci: 1"), "{out}");
}

#[test]
fn test_status_line() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "s.txt", "ab\ncd");
    let out = stdout(&lite_pad(dir.path(), &["status", &file, "--select", "1..4"]));
    assert_eq!(out.trim(), "Length: 5  Ln: 2  Col: 1  Sel: 3  Off: 4");
}

#[test]
fn test_set_language_persists() {
    let dir = TempDir::new().unwrap();
    let out = stdout(&lite_pad(dir.path(), &["set-language", "de"]));
    assert_eq!(out.trim(), "Startsprache gesetzt auf Deutsch");

    let out = stdout(&lite_pad(dir.path(), &["languages"]));
    assert!(out.contains("* de\tDeutsch"), "{out}");
    assert!(out.contains("  en\tEnglish"), "{out}");
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");
    let output = lite_pad(dir.path(), &["upper", &missing.to_string_lossy()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error reading file"));
}

#[test]
fn test_unknown_language_fails() {
    let dir = TempDir::new().unwrap();
    let output = lite_pad(dir.path(), &["--lang", "tlh", "languages"]);
    assert!(!output.status.success());
}
