// ABOUTME: Section-by-section structural checks for export documents
// ABOUTME: Each check stops at the first problem in its section and summarizes what it saw
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::{Map, Value};

use super::report::SectionSummary;
use super::rules::{
    expect_array, expect_kind, ExpectedKind, RecordView, RuleResult, ValidationError,
};
use super::Section;

const ENVELOPE_FIELDS: [&str; 3] = ["version", "exportDate", "data"];
const DATA_FIELDS: [&str; 5] = ["weights", "bodyFat", "workouts", "nutrition", "userSettings"];
const WEIGHT_FIELDS: [&str; 2] = ["date", "weight"];
const BODY_FAT_FIELDS: [&str; 2] = ["date", "bodyFatPercentage"];
const WORKOUT_FIELDS: [&str; 4] = ["date", "name", "sets", "isCompleted"];
const NUTRITION_FIELDS: [&str; 5] = [
    "date",
    "calorieIntake",
    "caloriesBurned",
    "calorieGoal",
    "meals",
];
const MEAL_FIELDS: [&str; 3] = ["name", "foods", "calories"];

/// Check the envelope and return the `data` object
pub fn check_top_level(root: &Value) -> RuleResult<&Map<String, Value>> {
    let section = Section::TopLevel;
    let envelope = RecordView::new(section, "$".to_owned(), root)?;
    envelope.require_all(&ENVELOPE_FIELDS)?;
    envelope.typed("version", ExpectedKind::String)?;
    envelope.typed("exportDate", ExpectedKind::String)?;

    let data = RecordView::new(section, "data".to_owned(), envelope.field("data")?)?;
    data.require_all(&DATA_FIELDS)?;
    Ok(data.fields())
}

/// Check `data.weights`
pub fn check_weights(value: &Value) -> RuleResult<SectionSummary> {
    let section = Section::Weights;
    let records = expect_array(section, "data.weights", value)?;
    for (index, item) in records.iter().enumerate() {
        let record = RecordView::new(section, format!("data.weights[{index}]"), item)?;
        record.require_all(&WEIGHT_FIELDS)?;
        record.typed("date", ExpectedKind::String)?;
        record.typed("weight", ExpectedKind::Number)?;
    }
    Ok(SectionSummary::Records {
        count: records.len(),
    })
}

/// Check `data.bodyFat`
pub fn check_body_fat(value: &Value) -> RuleResult<SectionSummary> {
    let section = Section::BodyFat;
    let records = expect_array(section, "data.bodyFat", value)?;
    for (index, item) in records.iter().enumerate() {
        let record = RecordView::new(section, format!("data.bodyFat[{index}]"), item)?;
        record.require_all(&BODY_FAT_FIELDS)?;
        record.typed("date", ExpectedKind::String)?;
        record.typed("bodyFatPercentage", ExpectedKind::Number)?;
    }
    Ok(SectionSummary::Records {
        count: records.len(),
    })
}

/// Check `data.workouts`, a map from date to a list of workouts
pub fn check_workouts(value: &Value) -> RuleResult<SectionSummary> {
    let section = Section::Workouts;
    let workouts_view = RecordView::new(section, "data.workouts".to_owned(), value)?;
    let by_day = workouts_view.fields();

    let mut entries = 0;
    for (date_key, day_value) in by_day {
        let day_path = workouts_view.child_path(date_key);
        let workouts = expect_array(section, &day_path, day_value)?;
        for (index, item) in workouts.iter().enumerate() {
            let workout = RecordView::new(section, format!("{day_path}[{index}]"), item)?;
            workout.require_all(&WORKOUT_FIELDS)?;
            workout.typed("date", ExpectedKind::String)?;
            workout.typed("name", ExpectedKind::String)?;
            workout.typed("sets", ExpectedKind::Integer)?;
            workout.typed("isCompleted", ExpectedKind::Boolean)?;
        }
        entries += workouts.len();
    }

    Ok(SectionSummary::Workouts {
        days: by_day.len(),
        entries,
    })
}

/// Check one meal slice, including the single-food rule
fn check_meal(section: Section, path: String, item: &Value) -> RuleResult<()> {
    let meal = RecordView::new(section, path, item)?;
    meal.require_all(&MEAL_FIELDS)?;
    let label = meal.typed("name", ExpectedKind::String)?;
    let foods = meal.array("foods")?;
    if foods.len() != 1 {
        return Err(ValidationError::FoodCount {
            section,
            path: meal.path().to_owned(),
            meal: label.as_str().unwrap_or("?").to_owned(),
            count: foods.len(),
        });
    }
    expect_kind(
        section,
        &format!("{}.foods[0]", meal.path()),
        &foods[0],
        ExpectedKind::String,
    )?;
    meal.typed("calories", ExpectedKind::Number)?;
    Ok(())
}

/// Check `data.nutrition`
pub fn check_nutrition(value: &Value) -> RuleResult<SectionSummary> {
    let section = Section::Nutrition;
    let days = expect_array(section, "data.nutrition", value)?;
    let mut slices = 0;

    for (index, item) in days.iter().enumerate() {
        let day = RecordView::new(section, format!("data.nutrition[{index}]"), item)?;
        day.require_all(&NUTRITION_FIELDS)?;
        day.typed("date", ExpectedKind::String)?;
        day.typed("calorieIntake", ExpectedKind::Number)?;
        day.typed("caloriesBurned", ExpectedKind::Number)?;
        day.typed("calorieGoal", ExpectedKind::Number)?;

        let meals = day.array("meals")?;
        for (meal_index, meal) in meals.iter().enumerate() {
            check_meal(section, format!("{}.meals[{meal_index}]", day.path()), meal)?;
        }
        slices += meals.len();
    }

    Ok(SectionSummary::Nutrition {
        days: days.len(),
        slices,
    })
}

/// Check `data.userSettings`
pub fn check_user_settings(value: &Value) -> RuleResult<SectionSummary> {
    let section = Section::UserSettings;
    let settings = RecordView::new(section, "data.userSettings".to_owned(), value)?;
    Ok(SectionSummary::Settings {
        fields: settings.fields().len(),
    })
}
