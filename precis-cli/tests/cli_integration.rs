//! Integration tests for the precis CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn precis() -> Command {
    Command::cargo_bin("precis").unwrap()
}

#[test]
fn test_summarize_article() {
    precis()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("article.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deep learning algorithms can analyze medical images",
        ))
        .stdout(predicate::str::contains("Original: 177 words, 11 sentences"))
        .stdout(predicate::str::contains("Summary: 59 words, 3 sentences"))
        .stdout(predicate::str::contains("Compression: 33.3%"));
}

#[test]
fn test_summarize_single_sentence() {
    precis()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("article.txt"))
        .arg("-n")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Banks use machine learning models to analyze transaction data in real-time, identifying suspicious patterns and preventing fraudulent activities.\n",
        ))
        .stdout(predicate::str::contains("Compression: 10.2%"));
}

#[test]
fn test_short_input_rejected() {
    precis()
        .arg("summarize")
        .arg("-t")
        .arg("Too short text")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Error: Please provide at least 10 words",
        ))
        .stderr(predicate::str::contains("Summarization failed for 1 input(s)"));
}

#[test]
fn test_json_envelope() {
    let output = precis()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("article.txt"))
        .arg("-f")
        .arg("json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["summary"].as_str().unwrap().ends_with("fraudulent activities."));
    assert_eq!(value["stats"]["original_words"], 177);
    assert_eq!(value["stats"]["original_sentences"], 11);
    assert_eq!(value["stats"]["summary_words"], 59);
    assert_eq!(value["stats"]["summary_sentences"], 3);
    assert_eq!(value["stats"]["compression"], 33.3);
}

#[test]
fn test_json_error_envelope() {
    let output = precis()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("short.txt"))
        .arg("-f")
        .arg("json")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["error"], "Please provide at least 10 words");
}

#[test]
fn test_fragment_count_quirk() {
    precis()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("article.txt"))
        .arg("--fragment-count")
        .assert()
        .success()
        .stdout(predicate::str::contains("Original: 177 words, 12 sentences"))
        .stdout(predicate::str::contains("Summary: 59 words, 4 sentences"));
}

#[test]
fn test_three_sentences_verbatim() {
    precis()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("three-sentences.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "The committee reviewed every proposal submitted this year. Several projects received additional funding for research! Will the remaining proposals be reconsidered next spring?\n",
        ))
        .stdout(predicate::str::contains("Compression: 100.0%"));
}

#[test]
fn test_stdin_input() {
    let text = fs::read_to_string(fixture_path("article.txt")).unwrap();

    precis()
        .arg("summarize")
        .write_stdin(text)
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary: 59 words, 3 sentences"));
}

#[test]
fn test_markdown_output() {
    precis()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("article.txt"))
        .arg("-f")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("## Summary\n"))
        .stdout(predicate::str::contains("- **Compression:** 33.3%"))
        .stdout(predicate::str::contains("*Summarized: 1, failed: 0*"));
}

#[test]
fn test_glob_pattern_labels_each_input() {
    precis()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("*.txt"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("==> tests/fixtures/article.txt <=="))
        .stdout(predicate::str::contains("==> tests/fixtures/short.txt <=="))
        .stdout(predicate::str::contains(
            "Error: Please provide at least 10 words",
        ));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("summary.txt");

    precis()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("article.txt"))
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("Compression: 33.3%"));
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("precis.toml");
    fs::write(
        &config_file,
        "[summarizer]\nmax_sentences = 1\n\n[output]\ndefault_format = \"json\"\npretty_json = false\n",
    )
    .unwrap();

    precis()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("article.txt"))
        .arg("-c")
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "{\"summary\":\"Banks use machine learning models",
        ))
        .stdout(predicate::str::contains("\"compression\":10.2"));
}

#[test]
fn test_invalid_file() {
    precis()
        .arg("summarize")
        .arg("-i")
        .arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_zero_sentences_rejected() {
    precis()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("article.txt"))
        .arg("-n")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_sentences must be greater than 0"));
}

#[test]
fn test_stats_command() {
    precis()
        .arg("stats")
        .arg("-i")
        .arg(fixture_path("article.txt"))
        .arg("--top")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "tests/fixtures/article.txt: 177 words, 11 sentences",
        ));
}

#[test]
fn test_generate_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("precis.toml");

    precis()
        .arg("generate-config")
        .arg("-o")
        .arg(&config_file)
        .assert()
        .success();

    precis()
        .arg("summarize")
        .arg("-i")
        .arg(fixture_path("article.txt"))
        .arg("-c")
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary: 59 words, 3 sentences"));
}

#[test]
fn test_list_formats() {
    precis()
        .arg("list")
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_list_stop_words() {
    precis()
        .arg("list")
        .arg("stop-words")
        .assert()
        .success()
        .stdout(predicate::str::contains("the\n"))
        .stdout(predicate::str::contains("with\n"));
}

#[test]
fn test_help_command() {
    precis()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extractive text summarization"));
}

#[test]
fn test_sample_command() {
    let expected = fs::read_to_string(fixture_path("article.txt")).unwrap();

    precis()
        .arg("sample")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_summarize_sample() {
    precis()
        .arg("summarize")
        .arg("--sample")
        .assert()
        .success()
        .stdout(predicate::str::contains("Original: 177 words, 11 sentences"))
        .stdout(predicate::str::contains("Compression: 33.3%"));
}

#[test]
fn test_stats_uses_config_vocabulary() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("precis.toml");
    fs::write(
        &config_file,
        "[summarizer]\nmin_word_length = 2\nstop_words = [\"rust\"]\n",
    )
    .unwrap();

    precis()
        .arg("stats")
        .arg("-t")
        .arg("Rust is fast. Rust is safe. Go is fast too.")
        .arg("-c")
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("  is (3)"))
        .stdout(predicate::str::contains("  go (1)"))
        .stdout(predicate::str::contains("rust").not());
}
