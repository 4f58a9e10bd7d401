// ABOUTME: Constants for the demo export format and its generation rules
// ABOUTME: Physiological ranges, trend drifts, calorie bounds, and CLI defaults by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list.

/// Export envelope
pub mod export {
    /// Literal schema version written to every export
    pub const FORMAT_VERSION: &str = "1.0";
    /// Calendar date format for record dates and workout map keys
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
    /// Naive local timestamp format with microsecond precision
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
    /// Lenient timestamp format accepted when reading exports back
    pub const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
}

/// Trend probabilities shared by the weight and body-fat walks
pub mod trend {
    /// Probability that a day's drift points downward
    pub const DOWNWARD_PROBABILITY: f64 = 0.6;
}

/// Body weight walk
pub mod weight {
    /// Lowest weight the walk may reach (kg)
    pub const MIN_KG: f64 = 50.0;
    /// Highest weight the walk may reach (kg)
    pub const MAX_KG: f64 = 100.0;
    /// Daily drift on a downward day (kg)
    pub const DRIFT_DOWN_KG: f64 = -0.05;
    /// Daily drift on an upward day (kg)
    pub const DRIFT_UP_KG: f64 = 0.02;
    /// Default starting weight (kg)
    pub const DEFAULT_INITIAL_KG: f64 = 70.0;
    /// Default daily noise bound (kg)
    pub const DEFAULT_FLUCTUATION_KG: f64 = 0.5;
}

/// Body fat walk
pub mod body_fat {
    /// Lowest body fat the walk may reach (%)
    pub const MIN_PERCENT: f64 = 5.0;
    /// Highest body fat the walk may reach (%)
    pub const MAX_PERCENT: f64 = 35.0;
    /// Daily drift on a downward day (%)
    pub const DRIFT_DOWN_PERCENT: f64 = -0.03;
    /// Daily drift on an upward day (%)
    pub const DRIFT_UP_PERCENT: f64 = 0.01;
    /// Default starting body fat (%)
    pub const DEFAULT_INITIAL_PERCENT: f64 = 18.0;
    /// Default daily noise bound (%)
    pub const DEFAULT_FLUCTUATION_PERCENT: f64 = 0.3;
}

/// Workout sampling
pub mod workouts {
    /// Fewest workouts sampled for a training day
    pub const MIN_PER_DAY: usize = 1;
    /// Most workouts sampled for a training day
    pub const MAX_PER_DAY: usize = 4;
    /// Keyed value a workout must exceed to count as completed
    pub const COMPLETION_THRESHOLD: f64 = 0.4;
}

/// Nutrition sampling
pub mod nutrition {
    /// Lower bound of the per-meal calorie variation factor
    pub const CALORIE_VARIATION_MIN: f64 = 0.8;
    /// Upper bound of the per-meal calorie variation factor
    pub const CALORIE_VARIATION_MAX: f64 = 1.2;
    /// Lowest daily calories burned
    pub const CALORIES_BURNED_MIN: u32 = 300;
    /// Highest daily calories burned
    pub const CALORIES_BURNED_MAX: u32 = 600;
    /// Lowest daily calorie goal
    pub const CALORIE_GOAL_MIN: u32 = 1800;
    /// Highest daily calorie goal
    pub const CALORIE_GOAL_MAX: u32 = 2200;
}

/// Fixed demo profile written to `userSettings`
pub mod demo_user {
    /// Age in years
    pub const AGE: u32 = 25;
    /// Height in centimeters
    pub const HEIGHT_CM: u32 = 175;
    /// Gender label understood by the app
    pub const GENDER: &str = "male";
    /// Activity level label understood by the app
    pub const ACTIVITY_LEVEL: &str = "moderate";
    /// Fitness goal label understood by the app
    pub const FITNESS_GOAL: &str = "lose_weight";
}

/// Command-line defaults
pub mod defaults {
    /// Days of history generated when `--days` is omitted
    pub const DAYS: u32 = 90;
    /// Output file written when `--output` is omitted
    pub const OUTPUT_FILE: &str = "fitness_demo_data.json";
    /// Inclusion probability for per-day record kinds
    pub const INCLUSION_PROBABILITY: f64 = 1.0;
}
