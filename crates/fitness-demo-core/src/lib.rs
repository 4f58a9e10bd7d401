// ABOUTME: Core interchange types for the fitness demo data tools
// ABOUTME: Foundation crate with export models, template tables, constants, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Demo Core
//!
//! Shared types for the demo data generator and the import-format validator.
//! The JSON shape defined here is the durable interchange contract with the
//! mobile application's import screen, so it changes rarely and lives in its
//! own crate.
//!
//! ## Modules
//!
//! - **models**: `ExportBundle` and the record types it carries
//! - **templates**: fixed workout and meal templates for both language sets
//! - **constants**: physiological ranges, drift values, and CLI defaults
//! - **errors**: `DemoDataError` for I/O, JSON, and configuration failures

/// Error type shared by the generator and validator
pub mod errors;

/// Value ranges, drift parameters, and defaults organized by domain
pub mod constants;

/// Export bundle and record models
pub mod models;

/// Workout and meal template tables for the Chinese and English sets
pub mod templates;

pub use errors::{DemoDataError, DemoResult};
pub use models::{
    BodyFatRecord, ExportBundle, ExportData, MealSlice, NutritionDay, UserSettings, WeightRecord,
    WorkoutEntry, WorkoutsByDay,
};
pub use templates::{Language, MealTemplate, WorkoutTemplate};
