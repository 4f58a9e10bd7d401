// ABOUTME: Fixed workout and meal templates in the Chinese and English sets
// ABOUTME: Language selects which set names workouts, meal labels, foods, and the demo user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Templates
//!
//! Both sets are index-aligned: entry `i` of the Chinese table is the same
//! exercise or meal as entry `i` of the English table.

use std::fmt;

/// A predefined workout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutTemplate {
    /// Exercise name
    pub name: &'static str,
    /// Number of sets
    pub sets: u32,
}

/// A predefined meal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealTemplate {
    /// Meal type label
    pub label: &'static str,
    /// Foods eaten, in order
    pub foods: &'static [&'static str],
    /// Base calories before variation
    pub calories: u32,
}

const fn workout(name: &'static str, sets: u32) -> WorkoutTemplate {
    WorkoutTemplate { name, sets }
}

const WORKOUTS_ZH: [WorkoutTemplate; 13] = [
    workout("俯卧撑", 4),
    workout("深蹲", 4),
    workout("平板支撑", 3),
    workout("引体向上", 3),
    workout("卷腹", 4),
    workout("二头弯举", 3),
    workout("三头下压", 3),
    workout("哑铃划船", 4),
    workout("箭步蹲", 4),
    workout("负重深蹲", 4),
    workout("颈前推举", 3),
    workout("侧平举", 3),
    workout("腿举", 4),
];

const WORKOUTS_EN: [WorkoutTemplate; 13] = [
    workout("Push-ups", 4),
    workout("Squats", 4),
    workout("Plank", 3),
    workout("Pull-ups", 3),
    workout("Crunches", 4),
    workout("Bicep Curls", 3),
    workout("Tricep Dips", 3),
    workout("Dumbbell Rows", 4),
    workout("Lunges", 4),
    workout("Weighted Squats", 4),
    workout("Overhead Press", 3),
    workout("Lateral Raises", 3),
    workout("Leg Press", 4),
];

const MEALS_ZH: [MealTemplate; 4] = [
    MealTemplate {
        label: "早餐",
        foods: &["鸡蛋", "牛奶", "面包"],
        calories: 400,
    },
    MealTemplate {
        label: "午餐",
        foods: &["米饭", "蔬菜", "鸡胸肉"],
        calories: 650,
    },
    MealTemplate {
        label: "晚餐",
        foods: &["面条", "沙拉", "牛肉"],
        calories: 550,
    },
    MealTemplate {
        label: "加餐",
        foods: &["水果", "坚果"],
        calories: 200,
    },
];

const MEALS_EN: [MealTemplate; 4] = [
    MealTemplate {
        label: "Breakfast",
        foods: &["Eggs", "Milk", "Bread"],
        calories: 400,
    },
    MealTemplate {
        label: "Lunch",
        foods: &["Rice", "Vegetables", "Chicken Breast"],
        calories: 650,
    },
    MealTemplate {
        label: "Dinner",
        foods: &["Pasta", "Salad", "Beef"],
        calories: 550,
    },
    MealTemplate {
        label: "Snack",
        foods: &["Fruits", "Nuts"],
        calories: 200,
    },
];

/// Language set used for names and labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// Simplified Chinese names (default)
    #[default]
    Chinese,
    /// English names
    English,
}

impl Language {
    /// Map the generator's `--english` switch to a language
    #[must_use]
    pub const fn from_english_flag(english: bool) -> Self {
        if english {
            Self::English
        } else {
            Self::Chinese
        }
    }

    /// Workout templates for this language
    #[must_use]
    pub const fn workout_templates(self) -> &'static [WorkoutTemplate] {
        match self {
            Self::Chinese => &WORKOUTS_ZH,
            Self::English => &WORKOUTS_EN,
        }
    }

    /// Meal templates for this language
    #[must_use]
    pub const fn meal_templates(self) -> &'static [MealTemplate] {
        match self {
            Self::Chinese => &MEALS_ZH,
            Self::English => &MEALS_EN,
        }
    }

    /// Display name of the demo user
    #[must_use]
    pub const fn demo_user_name(self) -> &'static str {
        match self {
            Self::Chinese => "演示用户",
            Self::English => "Demo User",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chinese => write!(f, "Chinese"),
            Self::English => write!(f, "English"),
        }
    }
}
