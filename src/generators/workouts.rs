// ABOUTME: Workout history generator sampling distinct templates per day
// ABOUTME: Selection uses the ambient RNG; completion flags come from the keyed hash
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDateTime;
use fitness_demo_core::constants::export::DATE_FORMAT;
use fitness_demo_core::constants::workouts::{MAX_PER_DAY, MIN_PER_DAY};
use fitness_demo_core::{WorkoutEntry, WorkoutTemplate, WorkoutsByDay};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::keyed::is_workout_completed;
use super::{day_timestamps, include_day};
use crate::config::GeneratorConfig;

/// Sample one day's workouts: 1 to 4 distinct templates, without replacement
pub fn sample_day<R: Rng + ?Sized>(
    timestamp: NaiveDateTime,
    templates: &[WorkoutTemplate],
    rng: &mut R,
) -> Vec<WorkoutEntry> {
    if templates.is_empty() {
        return Vec::new();
    }
    let count = rng.gen_range(MIN_PER_DAY..=MAX_PER_DAY).min(templates.len());
    let date_key = timestamp.format(DATE_FORMAT).to_string();

    templates
        .choose_multiple(rng, count)
        .map(|template| WorkoutEntry {
            date: timestamp,
            name: template.name.to_owned(),
            sets: template.sets,
            is_completed: is_workout_completed(&date_key, template.name),
        })
        .collect()
}

/// Generate the workout map for every configured day
///
/// Days with no sampled workouts are left out of the map.
pub fn generate_workouts<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> WorkoutsByDay {
    let templates = config.language.workout_templates();
    let mut by_day = WorkoutsByDay::new();

    for timestamp in day_timestamps(config) {
        if !include_day(config.inclusion.workouts, rng) {
            continue;
        }
        let entries = sample_day(timestamp, templates, rng);
        if !entries.is_empty() {
            by_day.insert(timestamp.date(), entries);
        }
    }

    debug!(
        days = by_day.len(),
        entries = by_day.values().map(Vec::len).sum::<usize>(),
        "generated workouts"
    );
    by_day
}
