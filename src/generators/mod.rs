// ABOUTME: Synthetic export generator combining body series, workouts, and nutrition
// ABOUTME: One ambient RNG drives sampling; completion flags use a separate keyed derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Demo Data Generation
//!
//! Every collection covers the same window of `days` calendar days ending on
//! the reference date, oldest first. The generators are generic over the RNG
//! so tests can pass a seeded `StdRng` while the binary draws from entropy.

/// Keyed (date, name) hashing for workout completion
pub mod keyed;

/// Nutrition days with per-food meal slices
pub mod nutrition;

/// Weight and body-fat random walks
pub mod series;

/// Daily workout sampling
pub mod workouts;

pub use keyed::{is_workout_completed, keyed_unit_interval};
pub use nutrition::generate_nutrition;
pub use series::{generate_body_fat_series, generate_weight_series, SeriesParams};
pub use workouts::generate_workouts;

use chrono::{Duration, NaiveDateTime};
use fitness_demo_core::{DemoResult, ExportBundle, ExportData, UserSettings};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::GeneratorConfig;

/// Timestamps of every generated day, oldest first
///
/// Day `i` is the reference time shifted back by `days - 1 - i` days, so the
/// last timestamp is the reference time itself.
pub fn day_timestamps(config: &GeneratorConfig) -> impl Iterator<Item = NaiveDateTime> + '_ {
    (0..config.days)
        .rev()
        .map(|offset| config.reference_time - Duration::days(i64::from(offset)))
}

/// Inclusion hook: skip the draw entirely when the probability is 1
pub(crate) fn include_day<R: Rng + ?Sized>(probability: f64, rng: &mut R) -> bool {
    probability >= 1.0 || (probability > 0.0 && rng.gen_bool(probability))
}

/// Builds a complete export from a validated configuration
pub struct DemoDataGenerator<R: Rng> {
    config: GeneratorConfig,
    rng: R,
}

impl DemoDataGenerator<StdRng> {
    /// Create a generator with a seeded RNG, or one drawn from entropy
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration fails validation
    pub fn seeded(config: GeneratorConfig, seed: Option<u64>) -> DemoResult<Self> {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self::new(config, rng)
    }
}

impl<R: Rng> DemoDataGenerator<R> {
    /// Create a generator over an explicit RNG
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration fails validation
    pub fn new(config: GeneratorConfig, rng: R) -> DemoResult<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Configuration this generator runs with
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a complete export bundle
    pub fn generate(&mut self) -> ExportBundle {
        info!(
            days = self.config.days,
            language = %self.config.language,
            initial_weight = self.config.initial_weight,
            initial_body_fat = self.config.initial_body_fat,
            "generating demo data"
        );

        let weights = generate_weight_series(&self.config, &mut self.rng);
        let body_fat = generate_body_fat_series(&self.config, &mut self.rng);
        let workouts = generate_workouts(&self.config, &mut self.rng);
        let nutrition = generate_nutrition(&self.config, &mut self.rng);

        ExportBundle::new(
            self.config.reference_time,
            ExportData {
                weights,
                body_fat,
                workouts,
                nutrition,
                user_settings: UserSettings::demo(self.config.language),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_timestamps_end_on_reference_time() {
        let config = GeneratorConfig {
            days: 3,
            ..GeneratorConfig::default()
        };
        let stamps: Vec<_> = day_timestamps(&config).collect();
        assert_eq!(stamps.len(), 3);
        assert_eq!(stamps[2], config.reference_time);
        assert_eq!(stamps[0], config.reference_time - Duration::days(2));
    }

    #[test]
    fn test_include_day_edges() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!((0..100).all(|_| include_day(1.0, &mut rng)));
        assert!((0..100).all(|_| !include_day(0.0, &mut rng)));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GeneratorConfig {
            days: 0,
            ..GeneratorConfig::default()
        };
        assert!(DemoDataGenerator::seeded(config, Some(1)).is_err());
    }

    #[test]
    fn test_same_seed_same_bundle() {
        let config = GeneratorConfig {
            days: 20,
            ..GeneratorConfig::default()
        };
        let first = DemoDataGenerator::seeded(config.clone(), Some(99))
            .unwrap()
            .generate();
        let second = DemoDataGenerator::seeded(config, Some(99))
            .unwrap()
            .generate();
        assert_eq!(first, second);
    }
}
