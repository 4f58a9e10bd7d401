// ABOUTME: Nutrition history generator emitting one meal slice per food
// ABOUTME: Varies template calories by +/-20% and splits them exactly across the meal's foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use fitness_demo_core::constants::nutrition::{
    CALORIES_BURNED_MAX, CALORIES_BURNED_MIN, CALORIE_GOAL_MAX, CALORIE_GOAL_MIN,
    CALORIE_VARIATION_MAX, CALORIE_VARIATION_MIN,
};
use fitness_demo_core::{MealSlice, MealTemplate, NutritionDay};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::day_timestamps;
use crate::config::GeneratorConfig;

/// Split `total` calories across `food_count` foods
///
/// Every food gets `total / food_count`; the remainder goes to the last food,
/// so the shares always sum to `total`.
#[must_use]
pub fn split_calories(total: u32, food_count: usize) -> Vec<u32> {
    let Ok(count) = u32::try_from(food_count) else {
        return Vec::new();
    };
    if count == 0 {
        return Vec::new();
    }
    let share = total / count;
    let mut shares = vec![share; food_count];
    if let Some(last) = shares.last_mut() {
        *last += total % count;
    }
    shares
}

/// Expand a meal template into one slice per food
#[must_use]
pub fn expand_meal(template: &MealTemplate, actual_calories: u32) -> Vec<MealSlice> {
    template
        .foods
        .iter()
        .zip(split_calories(actual_calories, template.foods.len()))
        .map(|(food, calories)| MealSlice::single(template.label, *food, calories))
        .collect()
}

/// Apply the per-meal variation factor, flooring to whole calories
pub fn vary_calories<R: Rng + ?Sized>(base: u32, rng: &mut R) -> u32 {
    let factor = rng.gen_range(CALORIE_VARIATION_MIN..=CALORIE_VARIATION_MAX);
    (f64::from(base) * factor).floor() as u32
}

/// Generate one day's nutrition entry
pub fn sample_day<R: Rng + ?Sized>(
    date: NaiveDate,
    templates: &[MealTemplate],
    rng: &mut R,
) -> NutritionDay {
    let meal_count = if templates.is_empty() {
        0
    } else {
        rng.gen_range(1..=templates.len())
    };

    let selected: Vec<MealTemplate> = templates
        .choose_multiple(rng, meal_count)
        .copied()
        .collect();

    let mut meals = Vec::new();
    for template in &selected {
        let actual = vary_calories(template.calories, rng);
        meals.extend(expand_meal(template, actual));
    }

    let calorie_intake = meals.iter().map(|slice| slice.calories).sum();
    NutritionDay {
        date,
        calorie_intake,
        calories_burned: rng.gen_range(CALORIES_BURNED_MIN..=CALORIES_BURNED_MAX),
        calorie_goal: rng.gen_range(CALORIE_GOAL_MIN..=CALORIE_GOAL_MAX),
        meals,
    }
}

/// Generate one nutrition entry per configured day, oldest first
pub fn generate_nutrition<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<NutritionDay> {
    let templates = config.language.meal_templates();
    let days: Vec<NutritionDay> = day_timestamps(config)
        .map(|timestamp| sample_day(timestamp.date(), templates, rng))
        .collect();

    debug!(
        days = days.len(),
        slices = days.iter().map(|d| d.meals.len()).sum::<usize>(),
        "generated nutrition"
    );
    days
}
