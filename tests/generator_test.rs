// ABOUTME: Integration tests for the demo data generator
// ABOUTME: Covers window shape, value bounds, workout sampling, and nutrition slice invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashSet;

use chrono::Duration;
use fitness_demo_data::config::GeneratorConfig;
use fitness_demo_data::constants::{body_fat, weight, workouts};
use fitness_demo_data::generators::{is_workout_completed, DemoDataGenerator};
use fitness_demo_data::validation::validate_bundle;
use fitness_demo_data::Language;

use common::{generate, reference_time, test_config};

#[test]
fn test_single_day_export() {
    let bundle = generate(test_config(1, Language::Chinese), None);
    let today = reference_time().date();
    let data = &bundle.data;

    assert_eq!(bundle.version, "1.0");
    assert_eq!(bundle.export_date, reference_time());

    assert_eq!(data.weights.len(), 1);
    assert_eq!(data.weights[0].date, today);
    assert_eq!(data.body_fat.len(), 1);
    assert_eq!(data.body_fat[0].date, today);

    assert_eq!(data.workouts.len(), 1);
    let todays = data.workouts.get(&today).expect("workouts for today");
    assert!((workouts::MIN_PER_DAY..=workouts::MAX_PER_DAY).contains(&todays.len()));
    assert!(todays.iter().all(|w| w.date == reference_time()));

    assert_eq!(data.nutrition.len(), 1);
    assert_eq!(data.nutrition[0].date, today);
}

#[test]
fn test_window_covers_every_day_oldest_first() {
    let days = 30;
    let bundle = generate(test_config(days, Language::English), Some(5));
    let data = &bundle.data;
    let first = reference_time().date() - Duration::days(i64::from(days) - 1);

    assert_eq!(data.weights.len(), 30);
    assert_eq!(data.body_fat.len(), 30);
    assert_eq!(data.nutrition.len(), 30);
    assert_eq!(data.workouts.len(), 30);

    assert_eq!(data.weights[0].date, first);
    assert_eq!(data.nutrition[0].date, first);
    assert_eq!(data.workouts.keys().next(), Some(&first));
    assert!(data.weights.windows(2).all(|w| w[0].date < w[1].date));
}

#[test]
fn test_generated_exports_always_validate() {
    for (days, language, seed) in [
        (1, Language::Chinese, 1),
        (7, Language::English, 2),
        (90, Language::Chinese, 3),
        (365, Language::English, 4),
    ] {
        let bundle = generate(test_config(days, language), Some(seed));
        let report = validate_bundle(&bundle).unwrap();
        assert!(report.is_valid(), "days={days} language={language}\n{report}");
    }
}

#[test]
fn test_series_stay_within_clamp_ranges() {
    let config = GeneratorConfig {
        initial_weight: 99.9,
        initial_body_fat: 5.1,
        weight_fluctuation: 5.0,
        body_fat_fluctuation: 5.0,
        ..test_config(365, Language::Chinese)
    };
    let bundle = generate(config, Some(11));

    assert!(bundle
        .data
        .weights
        .iter()
        .all(|r| (weight::MIN_KG..=weight::MAX_KG).contains(&r.weight)));
    assert!(bundle
        .data
        .body_fat
        .iter()
        .all(|r| (body_fat::MIN_PERCENT..=body_fat::MAX_PERCENT).contains(&r.body_fat_percentage)));
}

#[test]
fn test_series_values_have_one_decimal() {
    let bundle = generate(test_config(60, Language::Chinese), Some(8));
    for record in &bundle.data.weights {
        let scaled = record.weight * 10.0;
        assert!((scaled - scaled.round()).abs() < 1e-9, "{}", record.weight);
    }
}

#[test]
fn test_workouts_are_distinct_templates_per_day() {
    let bundle = generate(test_config(120, Language::English), Some(21));
    let names: HashSet<&str> = Language::English
        .workout_templates()
        .iter()
        .map(|t| t.name)
        .collect();

    for entries in bundle.data.workouts.values() {
        let day_names: HashSet<&str> = entries.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(day_names.len(), entries.len(), "duplicate workout on one day");
        assert!(day_names.is_subset(&names));
    }
}

#[test]
fn test_completion_flags_match_keyed_derivation() {
    let config = test_config(45, Language::Chinese);
    let first = generate(config.clone(), None);
    let second = generate(config, None);

    for bundle in [&first, &second] {
        for (date, entries) in &bundle.data.workouts {
            let key = date.format("%Y-%m-%d").to_string();
            for workout in entries {
                assert_eq!(workout.is_completed, is_workout_completed(&key, &workout.name));
            }
        }
    }
}

#[test]
fn test_unseeded_runs_vary_template_selection() {
    let config = test_config(60, Language::Chinese);
    let first = generate(config.clone(), None);
    let second = generate(config, None);
    assert_ne!(first.data.workouts, second.data.workouts);
}

#[test]
fn test_nutrition_slices_hold_one_food_and_sum_to_intake() {
    let bundle = generate(test_config(90, Language::Chinese), Some(13));

    for day in &bundle.data.nutrition {
        assert!(!day.meals.is_empty());
        assert!(day.meals.iter().all(|slice| slice.foods.len() == 1));
        assert_eq!(day.calorie_intake, day.slice_total());
        assert!((300..=600).contains(&day.calories_burned));
        assert!((1800..=2200).contains(&day.calorie_goal));
    }
}

#[test]
fn test_english_user_settings() {
    let bundle = generate(test_config(3, Language::English), Some(2));
    let settings = &bundle.data.user_settings;
    assert_eq!(settings.name, "Demo User");
    assert_eq!(settings.age, 25);
    assert_eq!(settings.height, 175);
    assert_eq!(settings.fitness_goal, "lose_weight");
}

#[test]
fn test_zero_inclusion_drops_records_but_keeps_nutrition() {
    let mut config = test_config(20, Language::English);
    config.inclusion.weights = 0.0;
    config.inclusion.workouts = 0.0;
    let bundle = generate(config, Some(4));

    assert!(bundle.data.weights.is_empty());
    assert!(bundle.data.workouts.is_empty());
    assert_eq!(bundle.data.body_fat.len(), 20);
    assert_eq!(bundle.data.nutrition.len(), 20);
    assert!(validate_bundle(&bundle).unwrap().is_valid());
}

#[test]
fn test_invalid_probability_is_rejected() {
    let mut config = test_config(20, Language::English);
    config.inclusion.body_fat = 1.5;
    assert!(DemoDataGenerator::seeded(config, Some(1)).is_err());
}

#[test]
fn test_widest_accepted_noise_generates() {
    let config = GeneratorConfig {
        weight_fluctuation: weight::MAX_KG - weight::MIN_KG,
        body_fat_fluctuation: body_fat::MAX_PERCENT - body_fat::MIN_PERCENT,
        ..test_config(30, Language::English)
    };
    let bundle = generate(config, Some(19));
    assert_eq!(bundle.data.weights.len(), 30);
    assert!(validate_bundle(&bundle).unwrap().is_valid());
}

#[test]
fn test_overflowing_noise_is_rejected_before_generation() {
    let config = GeneratorConfig {
        weight_fluctuation: 1e308,
        ..test_config(5, Language::English)
    };
    assert!(DemoDataGenerator::seeded(config, Some(1)).is_err());
}
