//! Integration tests for brdoc workflows
//!
//! These tests drive the binary end to end: configured defaults feed
//! `generate`, and its output is fed back through `validate`, `unmask`
//! and `mask`.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper function to create a brdoc command with an isolated HOME
fn brdoc(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("brdoc"));
    cmd.env("HOME", home.path());
    cmd
}

/// Helper to write `~/.config/brdoc/config.toml`
fn write_config(home: &TempDir, content: &str) {
    let dir = home.path().join(".config").join("brdoc");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), content).unwrap();
}

fn generated(home: &TempDir, args: &[&str]) -> Vec<String> {
    let output = brdoc(home).arg("generate").args(args).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_generated_values_validate_for_every_document() {
    let home = TempDir::new().unwrap();
    let list = brdoc(&home).args(["--json", "list"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&list.stdout).unwrap();

    for entry in json["strategies"].as_array().unwrap() {
        let document = entry["document"].as_str().unwrap();
        let values = generated(&home, &[document, "-n", "5", "--seed", "11"]);
        assert_eq!(values.len(), 5);

        brdoc(&home)
            .arg("validate")
            .arg(document)
            .args(&values)
            .assert()
            .success();
    }
}

#[test]
fn test_config_sets_generate_defaults() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[generate]\nmasked = true\ncount = 3\n");

    let values = generated(&home, &["ie-rs", "--seed", "2"]);
    assert_eq!(values.len(), 3);
    assert!(values.iter().all(|v| v.len() == 11 && v.as_bytes()[3] == b'/'));
}

#[test]
fn test_flags_override_config_count() {
    let home = TempDir::new().unwrap();
    write_config(&home, "[generate]\ncount = 3\n");

    assert_eq!(generated(&home, &["cnh", "-n", "1"]).len(), 1);
}

#[test]
fn test_broken_config_falls_back_to_defaults() {
    let home = TempDir::new().unwrap();
    write_config(&home, "this is not toml = = =");

    let values = generated(&home, &["cpf"]);
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].len(), 11);
}

#[test]
fn test_masked_output_round_trips_through_unmask_and_mask() {
    let home = TempDir::new().unwrap();
    let masked = generated(&home, &["cnpj", "--masked", "--seed", "8"]);
    let masked = &masked[0];

    let unmasked = brdoc(&home).args(["unmask", "cnpj", masked]).output().unwrap();
    let canonical = String::from_utf8(unmasked.stdout).unwrap();
    let canonical = canonical.trim();

    brdoc(&home)
        .args(["mask", "cnpj", canonical])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{masked}\n")));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let home = TempDir::new().unwrap();
    brdoc(&home)
        .env_remove("RUST_LOG")
        .args(["--verbose", "generate", "cpf", "--seed", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("seeding generator with 1"));
}
