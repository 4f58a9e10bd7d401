// ABOUTME: Generator settings for series bounds, language, reference time, and inclusion hooks
// ABOUTME: Loaded from defaults, overlaid by FITNESS_DEMO_* environment variables, then CLI flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;

use chrono::{Local, NaiveDate, NaiveDateTime};
use fitness_demo_core::constants::{body_fat, defaults, weight};
use fitness_demo_core::{DemoDataError, DemoResult, Language};

/// Environment variable overriding the weight noise bound (kg)
pub const ENV_WEIGHT_FLUCTUATION: &str = "FITNESS_DEMO_WEIGHT_FLUCTUATION";
/// Environment variable overriding the body-fat noise bound (%)
pub const ENV_BODY_FAT_FLUCTUATION: &str = "FITNESS_DEMO_BODY_FAT_FLUCTUATION";
/// Environment variable overriding the weight inclusion probability
pub const ENV_WEIGHT_INCLUSION: &str = "FITNESS_DEMO_WEIGHT_INCLUSION";
/// Environment variable overriding the body-fat inclusion probability
pub const ENV_BODY_FAT_INCLUSION: &str = "FITNESS_DEMO_BODY_FAT_INCLUSION";
/// Environment variable overriding the workout inclusion probability
pub const ENV_WORKOUT_INCLUSION: &str = "FITNESS_DEMO_WORKOUT_INCLUSION";

/// Probability that a day gets a record of each kind
///
/// All default to 1.0, which yields one record per day. Nutrition has no
/// hook and is always generated daily.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InclusionProbabilities {
    /// Weight records
    pub weights: f64,
    /// Body fat records
    pub body_fat: f64,
    /// Workout days
    pub workouts: f64,
}

impl Default for InclusionProbabilities {
    fn default() -> Self {
        Self {
            weights: defaults::INCLUSION_PROBABILITY,
            body_fat: defaults::INCLUSION_PROBABILITY,
            workouts: defaults::INCLUSION_PROBABILITY,
        }
    }
}

/// Settings for one generator run
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of days, ending on the reference date
    pub days: u32,
    /// Starting weight (kg)
    pub initial_weight: f64,
    /// Daily weight noise bound (kg)
    pub weight_fluctuation: f64,
    /// Starting body fat (%)
    pub initial_body_fat: f64,
    /// Daily body-fat noise bound (%)
    pub body_fat_fluctuation: f64,
    /// Template and label set
    pub language: Language,
    /// Instant treated as "now"; the last generated day is its date
    pub reference_time: NaiveDateTime,
    /// Per-kind inclusion probabilities
    pub inclusion: InclusionProbabilities,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            days: defaults::DAYS,
            initial_weight: weight::DEFAULT_INITIAL_KG,
            weight_fluctuation: weight::DEFAULT_FLUCTUATION_KG,
            initial_body_fat: body_fat::DEFAULT_INITIAL_PERCENT,
            body_fat_fluctuation: body_fat::DEFAULT_FLUCTUATION_PERCENT,
            language: Language::default(),
            reference_time: Local::now().naive_local(),
            inclusion: InclusionProbabilities::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load defaults overlaid by `FITNESS_DEMO_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a variable is set but is not a number
    pub fn from_env() -> DemoResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load defaults overlaid by values from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a value is present but is not a number
    pub fn from_lookup<F>(lookup: F) -> DemoResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |key: &'static str, current: f64| -> DemoResult<f64> {
            lookup(key).map_or(Ok(current), |raw| {
                raw.trim()
                    .parse::<f64>()
                    .map_err(|e| DemoDataError::invalid_config(key, format!("'{raw}': {e}")))
            })
        };

        config.weight_fluctuation = read(ENV_WEIGHT_FLUCTUATION, config.weight_fluctuation)?;
        config.body_fat_fluctuation = read(ENV_BODY_FAT_FLUCTUATION, config.body_fat_fluctuation)?;
        config.inclusion.weights = read(ENV_WEIGHT_INCLUSION, config.inclusion.weights)?;
        config.inclusion.body_fat = read(ENV_BODY_FAT_INCLUSION, config.inclusion.body_fat)?;
        config.inclusion.workouts = read(ENV_WORKOUT_INCLUSION, config.inclusion.workouts)?;

        Ok(config)
    }

    /// Calendar date of the last generated day
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.reference_time.date()
    }

    /// Check every setting against its accepted range
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first rejected setting
    pub fn validate(&self) -> DemoResult<()> {
        if self.days == 0 {
            return Err(DemoDataError::invalid_config("days", "must be at least 1"));
        }

        require_finite("initial_weight", self.initial_weight)?;
        require_finite("initial_body_fat", self.initial_body_fat)?;
        require_bound(
            "weight_fluctuation",
            self.weight_fluctuation,
            weight::MAX_KG - weight::MIN_KG,
        )?;
        require_bound(
            "body_fat_fluctuation",
            self.body_fat_fluctuation,
            body_fat::MAX_PERCENT - body_fat::MIN_PERCENT,
        )?;
        require_probability("inclusion.weights", self.inclusion.weights)?;
        require_probability("inclusion.body_fat", self.inclusion.body_fat)?;
        require_probability("inclusion.workouts", self.inclusion.workouts)?;

        Ok(())
    }
}

fn require_finite(field: &'static str, value: f64) -> DemoResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DemoDataError::invalid_config(field, "must be a finite number"))
    }
}

/// Noise bounds may not exceed the width of the clamp range they feed
fn require_bound(field: &'static str, value: f64, max: f64) -> DemoResult<()> {
    if (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(DemoDataError::invalid_config(
            field,
            format!("must be within [0, {max}], got {value}"),
        ))
    }
}

fn require_probability(field: &'static str, value: f64) -> DemoResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(DemoDataError::invalid_config(
            field,
            format!("must be within [0, 1], got {value}"),
        ))
    }
}
