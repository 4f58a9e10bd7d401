// ABOUTME: Weight and body-fat series as downward-biased random walks with hard bounds
// ABOUTME: Each day adds a trend drift and uniform noise, then clamps and rounds to one decimal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitness_demo_core::constants::{body_fat, trend, weight};
use fitness_demo_core::{BodyFatRecord, WeightRecord};
use rand::Rng;
use tracing::debug;

use super::{day_timestamps, include_day};
use crate::config::GeneratorConfig;

/// Walk parameters for one measurement kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesParams {
    /// Starting value
    pub initial: f64,
    /// Uniform noise bound; noise is drawn from `[-fluctuation, fluctuation]`
    pub fluctuation: f64,
    /// Drift applied on a downward day (negative)
    pub drift_down: f64,
    /// Drift applied on an upward day (positive)
    pub drift_up: f64,
    /// Lowest reachable value
    pub min: f64,
    /// Highest reachable value
    pub max: f64,
}

impl SeriesParams {
    /// Weight walk from the configured start and noise bound
    #[must_use]
    pub fn weight(config: &GeneratorConfig) -> Self {
        Self {
            initial: config.initial_weight,
            fluctuation: config.weight_fluctuation,
            drift_down: weight::DRIFT_DOWN_KG,
            drift_up: weight::DRIFT_UP_KG,
            min: weight::MIN_KG,
            max: weight::MAX_KG,
        }
    }

    /// Body-fat walk from the configured start and noise bound
    #[must_use]
    pub fn body_fat(config: &GeneratorConfig) -> Self {
        Self {
            initial: config.initial_body_fat,
            fluctuation: config.body_fat_fluctuation,
            drift_down: body_fat::DRIFT_DOWN_PERCENT,
            drift_up: body_fat::DRIFT_UP_PERCENT,
            min: body_fat::MIN_PERCENT,
            max: body_fat::MAX_PERCENT,
        }
    }
}

/// Draw the day's trend: downward with probability 0.6
pub fn draw_drift<R: Rng + ?Sized>(params: &SeriesParams, rng: &mut R) -> f64 {
    if rng.gen_bool(trend::DOWNWARD_PROBABILITY) {
        params.drift_down
    } else {
        params.drift_up
    }
}

/// Advance the walk by one day
pub fn walk_step<R: Rng + ?Sized>(current: f64, params: &SeriesParams, rng: &mut R) -> f64 {
    let drift = draw_drift(params, rng);
    let noise = rng.gen_range(-params.fluctuation..=params.fluctuation);
    round_to_tenth((current + drift + noise).clamp(params.min, params.max))
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Run the walk over the configured days, returning `(day index, value)` for included days
///
/// The walk advances on every day, including days the inclusion hook skips.
fn walk<R: Rng + ?Sized>(
    params: &SeriesParams,
    days: u32,
    inclusion: f64,
    rng: &mut R,
) -> Vec<(usize, f64)> {
    let mut current = params.initial;
    let mut values = Vec::with_capacity(days as usize);
    for day in 0..days as usize {
        current = walk_step(current, params, rng);
        if include_day(inclusion, rng) {
            values.push((day, current));
        }
    }
    values
}

/// Generate one weight record per day, oldest first
pub fn generate_weight_series<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<WeightRecord> {
    let params = SeriesParams::weight(config);
    let dates: Vec<_> = day_timestamps(config).map(|ts| ts.date()).collect();
    let records: Vec<_> = walk(&params, config.days, config.inclusion.weights, rng)
        .into_iter()
        .map(|(day, weight)| WeightRecord {
            date: dates[day],
            weight,
        })
        .collect();

    debug!(
        records = records.len(),
        first = records.first().map(|r| r.weight),
        last = records.last().map(|r| r.weight),
        "generated weight series"
    );
    records
}

/// Generate one body-fat record per day, oldest first
pub fn generate_body_fat_series<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<BodyFatRecord> {
    let params = SeriesParams::body_fat(config);
    let dates: Vec<_> = day_timestamps(config).map(|ts| ts.date()).collect();
    let records: Vec<_> = walk(&params, config.days, config.inclusion.body_fat, rng)
        .into_iter()
        .map(|(day, body_fat_percentage)| BodyFatRecord {
            date: dates[day],
            body_fat_percentage,
        })
        .collect();

    debug!(
        records = records.len(),
        first = records.first().map(|r| r.body_fat_percentage),
        last = records.last().map(|r| r.body_fat_percentage),
        "generated body fat series"
    );
    records
}
