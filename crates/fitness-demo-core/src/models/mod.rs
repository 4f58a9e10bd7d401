// ABOUTME: Export data models shared by the generator and the validator
// ABOUTME: Re-exports the bundle envelope and every record type it carries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain records computed once per run and serialized. Field names follow the
//! camelCase keys the mobile app's importer expects.
//!
//! ## Core Models
//!
//! - `ExportBundle`: envelope with `version`, `exportDate`, and `data`
//! - `WeightRecord`, `BodyFatRecord`: one daily body measurement each
//! - `WorkoutEntry`, `WorkoutsByDay`: sampled workouts keyed by calendar date
//! - `NutritionDay`, `MealSlice`: daily calorie summary and per-food slices
//! - `UserSettings`: fixed demo profile

mod export;
mod measurements;
mod nutrition;
mod workout;

/// Serde adapter for microsecond-precision naive timestamps
pub mod timestamp;

pub use export::{ExportBundle, ExportData, UserSettings};
pub use measurements::{BodyFatRecord, WeightRecord};
pub use nutrition::{MealSlice, NutritionDay};
pub use workout::{WorkoutEntry, WorkoutsByDay};
