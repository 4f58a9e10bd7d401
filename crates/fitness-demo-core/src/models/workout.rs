// ABOUTME: Workout entries and the per-day workout map of the export format
// ABOUTME: WorkoutEntry carries a timestamp, template name, set count, and completion flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// One sampled workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEntry {
    /// When the workout was logged
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,
    /// Template name, in the active language
    pub name: String,
    /// Number of sets from the template
    pub sets: u32,
    /// Whether the workout was completed
    pub is_completed: bool,
}

/// Workouts keyed by calendar date
///
/// Days without workouts are absent. Keys serialize as `YYYY-MM-DD` and
/// iterate in chronological order.
pub type WorkoutsByDay = BTreeMap<NaiveDate, Vec<WorkoutEntry>>;
