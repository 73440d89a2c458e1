// ABOUTME: Shared fixture builders for the integration test suite
// ABOUTME: Constructs days, entries, and week windows with known macro shapes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)] // not every test binary uses every helper

use chrono::{Local, NaiveDate, TimeZone};
use macrocoach::models::{DailyFoodLog, FoodLogEntry, MacroTotals, MealType};
use uuid::Uuid;

/// Default day targets used across fixtures
pub fn targets() -> MacroTotals {
    MacroTotals::new(2000.0, 150.0, 200.0, 70.0)
}

/// Build an entry on `date` at `hour` local
pub fn entry_on(
    date: NaiveDate,
    hour: u32,
    name: &str,
    calories: f64,
    meal_type: MealType,
) -> FoodLogEntry {
    use chrono::Datelike;
    FoodLogEntry {
        id: Uuid::new_v4(),
        name: name.into(),
        serving_size: 100.0,
        serving_unit: "g".into(),
        calories,
        protein: calories * 0.075, // keeps protein% tracking calorie%
        carbs: calories * 0.1,
        fat: calories * 0.035,
        meal_type,
        logged_at: Local
            .with_ymd_and_hms(date.year(), date.month(), date.day(), hour, 0, 0)
            .unwrap(),
    }
}

/// Build a day from its entries, totals derived
pub fn day_from_entries(date: NaiveDate, entries: Vec<FoodLogEntry>) -> DailyFoodLog {
    let totals = MacroTotals::from_entries(&entries);
    DailyFoodLog {
        totals,
        entries,
        ..DailyFoodLog::empty(date, targets())
    }
}

/// A day with `meal_count` generic meals of 500 kcal each
pub fn logged_day(date: NaiveDate, meal_count: usize) -> DailyFoodLog {
    let meals = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];
    let entries = (0..meal_count)
        .map(|i| {
            entry_on(
                date,
                8 + (i as u32) * 4,
                &format!("Meal {i}"),
                500.0,
                meals[i % meals.len()],
            )
        })
        .collect();
    day_from_entries(date, entries)
}

/// Local date helper for June 2026 fixtures
pub fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, day).unwrap()
}

/// A fully-logged week ending (and including) `end`, oldest first
pub fn full_week_ending(end: NaiveDate) -> Vec<DailyFoodLog> {
    (0..7)
        .rev()
        .map(|offset| logged_day(end - chrono::Days::new(offset), 3))
        .collect()
}
