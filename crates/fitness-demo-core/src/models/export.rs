// ABOUTME: Export bundle envelope and the fixed demo user profile
// ABOUTME: Top-level JSON shape consumed by the mobile app's data import
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{timestamp, BodyFatRecord, NutritionDay, WeightRecord, WorkoutsByDay};
use crate::constants::{demo_user, export::FORMAT_VERSION};
use crate::templates::Language;

/// Fixed demo profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height: u32,
    /// Gender label
    pub gender: String,
    /// Activity level label
    pub activity_level: String,
    /// Fitness goal label
    pub fitness_goal: String,
}

impl UserSettings {
    /// Demo profile for a language set; only the name differs between sets
    #[must_use]
    pub fn demo(language: Language) -> Self {
        Self {
            name: language.demo_user_name().to_owned(),
            age: demo_user::AGE,
            height: demo_user::HEIGHT_CM,
            gender: demo_user::GENDER.to_owned(),
            activity_level: demo_user::ACTIVITY_LEVEL.to_owned(),
            fitness_goal: demo_user::FITNESS_GOAL.to_owned(),
        }
    }
}

/// The five data collections of an export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    /// Daily weights, oldest first
    pub weights: Vec<WeightRecord>,
    /// Daily body fat, oldest first
    pub body_fat: Vec<BodyFatRecord>,
    /// Workouts keyed by date
    pub workouts: WorkoutsByDay,
    /// Daily nutrition, oldest first
    pub nutrition: Vec<NutritionDay>,
    /// Demo profile
    pub user_settings: UserSettings,
}

/// Complete export file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    /// Schema version, always `"1.0"`
    pub version: String,
    /// When the export was produced
    #[serde(with = "timestamp")]
    pub export_date: NaiveDateTime,
    /// Exported collections
    pub data: ExportData,
}

impl ExportBundle {
    /// Wrap collected data in a versioned envelope
    #[must_use]
    pub fn new(export_date: NaiveDateTime, data: ExportData) -> Self {
        Self {
            version: FORMAT_VERSION.to_owned(),
            export_date,
            data,
        }
    }
}
