// ABOUTME: Daily nutrition summaries and per-food meal slices for the export format
// ABOUTME: The importer creates one meal entry per slice, so each slice holds exactly one food
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One food's share of a meal
///
/// Several slices may share the same meal label when a meal template lists
/// more than one food.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSlice {
    /// Meal type label (breakfast, lunch, ...), in the active language
    pub name: String,
    /// Exactly one food name
    pub foods: Vec<String>,
    /// Calories allotted to this food
    pub calories: u32,
}

impl MealSlice {
    /// Create a slice holding a single food
    #[must_use]
    pub fn single(name: impl Into<String>, food: impl Into<String>, calories: u32) -> Self {
        Self {
            name: name.into(),
            foods: vec![food.into()],
            calories,
        }
    }
}

/// Calorie summary for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionDay {
    /// Calendar date
    pub date: NaiveDate,
    /// Sum of all meal slice calories
    pub calorie_intake: u32,
    /// Calories burned through activity
    pub calories_burned: u32,
    /// Daily calorie target
    pub calorie_goal: u32,
    /// Per-food meal slices
    pub meals: Vec<MealSlice>,
}

impl NutritionDay {
    /// Sum the calories of every meal slice
    #[must_use]
    pub fn slice_total(&self) -> u32 {
        self.meals.iter().map(|slice| slice.calories).sum()
    }
}
