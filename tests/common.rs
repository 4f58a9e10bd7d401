// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, a fixed reference time, and generator helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitness_demo_data`

use std::env;
use std::sync::Once;

use chrono::{NaiveDate, NaiveDateTime};
use fitness_demo_data::config::GeneratorConfig;
use fitness_demo_data::generators::DemoDataGenerator;
use fitness_demo_data::models::ExportBundle;
use fitness_demo_data::Language;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed "now" so dates in assertions are stable
pub fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 15)
        .unwrap()
        .and_hms_micro_opt(8, 30, 0, 123_456)
        .unwrap()
}

/// Default configuration over a fixed reference time
pub fn test_config(days: u32, language: Language) -> GeneratorConfig {
    GeneratorConfig {
        days,
        language,
        reference_time: reference_time(),
        ..GeneratorConfig::default()
    }
}

/// Generate a bundle, seeded when `seed` is given
pub fn generate(config: GeneratorConfig, seed: Option<u64>) -> ExportBundle {
    init_test_logging();
    DemoDataGenerator::seeded(config, seed).unwrap().generate()
}
