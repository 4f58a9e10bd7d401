// ABOUTME: Main library entry point for the fitness demo data tools
// ABOUTME: Synthetic export generation, import-format validation, and export file I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Demo Data
//!
//! Tooling for testing the mobile app's data import. The generator builds a
//! synthetic history of weights, body fat, workouts, and nutrition; the
//! validator checks any JSON file against the import format.
//!
//! ## Architecture
//!
//! - **Generators**: biased random walks for body measurements, sampled
//!   workouts with keyed completion flags, per-food nutrition slices
//! - **Validation**: pure structural checks over a parsed JSON value
//! - **Export**: pretty JSON file output and dataset statistics
//! - **Config**: generator settings from defaults, environment, and CLI flags
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitness_demo_data::config::GeneratorConfig;
//! use fitness_demo_data::generators::DemoDataGenerator;
//! use fitness_demo_data::validation::validate_bundle;
//!
//! # fn main() -> fitness_demo_data::DemoResult<()> {
//! let config = GeneratorConfig::from_env()?;
//! let mut generator = DemoDataGenerator::seeded(config, Some(7))?;
//! let bundle = generator.generate();
//! assert!(validate_bundle(&bundle)?.is_valid());
//! # Ok(())
//! # }
//! ```

/// Generator configuration loaded from defaults and environment
pub mod config;

/// Export file output and dataset statistics
pub mod export;

/// Synthetic data generators
pub mod generators;

/// Structured logging setup
pub mod logging;

/// Import-format validation of export documents
pub mod validation;

pub use fitness_demo_core::{constants, models, templates, DemoDataError, DemoResult, Language};
