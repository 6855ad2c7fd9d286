//! Integration tests for the wordcase CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn wordcase() -> Command {
    Command::cargo_bin("wordcase").unwrap()
}

#[test]
fn test_convert_text_arguments() {
    wordcase()
        .args(["convert", "-s", "camel", "hello world example", "HELLO WORLD"])
        .assert()
        .success()
        .stdout("helloWorldExample\nhelloWorld\n");
}

#[test]
fn test_default_style_is_snake() {
    wordcase()
        .args(["convert", "HELLO WORLD EXAMPLE"])
        .assert()
        .success()
        .stdout("hello_world_example\n");
}

#[test]
fn test_convert_with_locale() {
    wordcase()
        .args(["convert", "-s", "constant", "-l", "fr", "héllo wôrld éxample"])
        .assert()
        .success()
        .stdout("HÉLLO_WÔRLD_ÉXAMPLE\n");

    wordcase()
        .args(["convert", "-s", "constant", "-l", "tr", "istanbul"])
        .assert()
        .success()
        .stdout("İSTANBUL\n");
}

#[test]
fn test_custom_delimiter() {
    wordcase()
        .args([
            "convert",
            "--delimiter=-",
            "--capitalize-words",
            "-l",
            "fr",
            "héllo wôrld éxample",
        ])
        .assert()
        .success()
        .stdout("Héllo-Wôrld-Éxample\n");
}

#[test]
fn test_capitalize_words_requires_delimiter() {
    wordcase()
        .args(["convert", "-s", "snake", "--capitalize-words", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--capitalize-words requires --delimiter"));
}

#[test]
fn test_convert_file_lines() {
    wordcase()
        .args(["convert", "-s", "kebab", "-i"])
        .arg(fixture_path("english-identifiers.txt"))
        .assert()
        .success()
        .stdout("user-id\nfirst-name\nhttp-response-code\n");
}

#[test]
fn test_glob_pattern() {
    wordcase()
        .args(["convert", "-q", "-s", "pascal", "-i"])
        .arg(fixture_path("*.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("UserId"))
        .stdout(predicate::str::contains("HélloWôrldÉxample"));
}

#[test]
fn test_stdin_input() {
    wordcase()
        .args(["convert", "-s", "constant"])
        .write_stdin("first name\nlast name\n")
        .assert()
        .success()
        .stdout("FIRST_NAME\nLAST_NAME\n");
}

#[test]
fn test_json_output() {
    wordcase()
        .args(["convert", "-s", "snake", "-f", "json", "Hello World"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"input\": \"Hello World\""))
        .stdout(predicate::str::contains("\"output\": \"hello_world\""));
}

#[test]
fn test_markdown_output() {
    wordcase()
        .args(["convert", "-s", "kebab", "-f", "markdown", "Hello World"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Hello World | `hello-world` |"))
        .stdout(predicate::str::contains("*Total conversions: 1*"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    wordcase()
        .args(["convert", "-s", "camel", "-o"])
        .arg(&output_file)
        .arg("some input text")
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert_eq!(content, "someInputText\n");
}

#[test]
fn test_config_file_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("wordcase.toml");
    fs::write(
        &config_file,
        "[conversion]\ndelimiter = \" \"\ncapitalize_words = true\nlocale = \"fr\"\n",
    )
    .unwrap();

    wordcase()
        .args(["convert", "-c"])
        .arg(&config_file)
        .arg("héllo_wôrld")
        .assert()
        .success()
        .stdout("Héllo Wôrld\n");
}

#[test]
fn test_flags_override_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("wordcase.toml");
    fs::write(&config_file, "[conversion]\nstyle = \"kebab\"\n").unwrap();

    wordcase()
        .args(["convert", "-s", "constant", "-c"])
        .arg(&config_file)
        .arg("a b")
        .assert()
        .success()
        .stdout("A_B\n");
}

#[test]
fn test_invalid_locale() {
    wordcase()
        .args(["convert", "-l", "not a locale", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid locale tag"));
}

#[test]
fn test_invalid_file() {
    wordcase()
        .args(["convert", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_help_command() {
    wordcase()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("word case conversion"));
}

#[test]
fn test_list_styles() {
    wordcase()
        .args(["list", "styles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("camel"))
        .stdout(predicate::str::contains("HELLO_WORLD_EXAMPLE"));
}

#[test]
fn test_list_formats() {
    wordcase()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("json"));
}

#[test]
fn test_generate_then_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("wordcase.toml");

    wordcase()
        .args(["generate-config", "-l", "tr", "-s", "pascal", "-o"])
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    wordcase()
        .args(["validate", "-c"])
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Locale: tr"));

    wordcase()
        .args(["convert", "-c"])
        .arg(&config_file)
        .arg("izmir city")
        .assert()
        .success()
        .stdout("İzmirCity\n");
}

#[test]
fn test_validate_rejects_bad_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    fs::write(&config_file, "[conversion]\nstyle = \"sponge\"\n").unwrap();

    wordcase()
        .args(["validate", "-c"])
        .arg(&config_file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_convert_rejects_capitalize_without_delimiter_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("wordcase.toml");
    fs::write(&config_file, "[conversion]\ncapitalize_words = true\n").unwrap();

    wordcase()
        .args(["convert", "-c"])
        .arg(&config_file)
        .arg("hello world")
        .assert()
        .failure()
        .stderr(predicate::str::contains("capitalize_words requires a delimiter"));

    wordcase()
        .args(["validate", "-c"])
        .arg(&config_file)
        .assert()
        .failure();
}

#[test]
fn test_generate_config_rejects_unknown_style() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("wordcase.toml");

    wordcase()
        .args(["generate-config", "-s", "sponge", "-o"])
        .arg(&config_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown case style 'sponge'"));

    assert!(!config_file.exists());
}

#[test]
fn test_generate_config_rejects_malformed_locale() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("wordcase.toml");

    wordcase()
        .args(["generate-config", "-l", "x\"y", "-o"])
        .arg(&config_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid locale tag"));

    assert!(!config_file.exists());
}

#[test]
fn test_style_flag_accepts_aliases() {
    wordcase()
        .args(["convert", "-s", "camelCase", "hello world"])
        .assert()
        .success()
        .stdout("helloWorld\n");

    wordcase()
        .args(["convert", "--style", "screaming-snake", "hello world"])
        .assert()
        .success()
        .stdout("HELLO_WORLD\n");
}
