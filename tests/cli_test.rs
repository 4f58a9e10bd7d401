// ABOUTME: Exit-code tests for the generate-demo-data and validate-demo-data binaries
// ABOUTME: Runs the built executables against temporary files and checks status and output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use fitness_demo_data::config::generator::{
    ENV_BODY_FAT_FLUCTUATION, ENV_BODY_FAT_INCLUSION, ENV_WEIGHT_FLUCTUATION,
    ENV_WEIGHT_INCLUSION, ENV_WORKOUT_INCLUSION,
};
use fitness_demo_data::Language;
use serde_json::{json, Value};

use common::{generate, test_config};

const GENERATOR_VARS: [&str; 5] = [
    ENV_WEIGHT_FLUCTUATION,
    ENV_BODY_FAT_FLUCTUATION,
    ENV_WEIGHT_INCLUSION,
    ENV_BODY_FAT_INCLUSION,
    ENV_WORKOUT_INCLUSION,
];

fn generator() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_generate-demo-data"));
    command.env("RUST_LOG", "warn");
    for key in GENERATOR_VARS {
        command.env_remove(key);
    }
    command
}

fn validator() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_validate-demo-data"));
    command.env("RUST_LOG", "warn");
    command
}

fn validate(path: &Path) -> Output {
    validator().arg(path).output().expect("validator should run")
}

fn write_generated(path: &Path, edit: impl FnOnce(&mut Value)) {
    let bundle = generate(test_config(3, Language::English), Some(23));
    let mut doc = serde_json::to_value(&bundle).unwrap();
    edit(&mut doc);
    fs::write(path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
}

#[test]
fn test_generate_with_validate_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("demo.json");

    let output = generator()
        .args(["--days", "7", "--english", "--validate", "--seed", "3", "--output"])
        .arg(&output_path)
        .output()
        .expect("generator should run");

    assert_eq!(output.status.code(), Some(0), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Export is valid for import"), "{stdout}");
    assert!(output_path.exists());

    let revalidated = validate(&output_path);
    assert_eq!(revalidated.status.code(), Some(0));
}

#[test]
fn test_generate_rejects_oversized_noise_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("demo.json");

    let output = generator()
        .env(ENV_WEIGHT_FLUCTUATION, "1e308")
        .arg("--output")
        .arg(&output_path)
        .output()
        .expect("generator should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("weight_fluctuation"), "{stderr}");
    assert!(!output_path.exists());
}

#[test]
fn test_generate_rejects_zero_days() {
    let output = generator()
        .args(["--days", "0"])
        .output()
        .expect("generator should run");
    assert_ne!(output.status.code(), Some(0));
}

#[test]
fn test_validator_without_arguments_exits_one() {
    let output = validator().output().expect("validator should run");
    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_validator_with_extra_arguments_exits_one() {
    let output = validator()
        .args(["a.json", "b.json"])
        .output()
        .expect("validator should run");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_validator_help_exits_zero() {
    let output = validator().arg("--help").output().expect("validator should run");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_validator_on_unparseable_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"version\": \"1.0\", ").unwrap();

    let output = validate(&path);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1, "{stdout}");
}

#[test]
fn test_validator_on_missing_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = validate(&dir.path().join("absent.json"));
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_validator_on_multi_food_meal_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two_foods.json");
    write_generated(&path, |doc| {
        doc["data"]["nutrition"][0]["meals"][0]["foods"] = json!(["A", "B"]);
    });

    let output = validate(&path);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("must list exactly one food, found 2"), "{stdout}");
    assert!(stdout.contains("Export is NOT valid for import"), "{stdout}");
}

#[test]
fn test_validator_on_generated_file_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated.json");
    write_generated(&path, |_| {});

    let output = validate(&path);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches('✓').count(), 6, "{stdout}");
}
