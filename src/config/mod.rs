// ABOUTME: Configuration module for the demo data generator
// ABOUTME: Defaults, environment overrides, and range checks for generator settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Generator settings and their environment overrides
pub mod generator;

pub use generator::{GeneratorConfig, InclusionProbabilities};
