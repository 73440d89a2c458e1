// ABOUTME: Recent and frequently-repeated food suggestions for quick re-logging
// ABOUTME: Two deliberately distinct aggregations: first-occurrence macros vs true averages
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

//! # Recency/Frequency Food Recommender
//!
//! Aggregates a week of logged entries into suggestions for one-tap
//! re-logging. Two related but distinct operations live here:
//!
//! - [`get_recent_foods`] groups by food name only and carries the macros of
//!   the **first occurrence** encountered.
//! - [`get_quick_log_suggestions`] groups by (food name, meal type), requires
//!   three occurrences, and computes the **arithmetic mean** of each macro.
//!
//! The asymmetry (first-occurrence vs averaged) is shipped product behavior;
//! the two must not be unified.

use crate::constants::limits;
use crate::models::{DailyFoodLog, FoodLogEntry, MealType};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A recently-logged food for the quick re-log list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentFood {
    /// Display name (first occurrence's casing)
    pub name: String,
    /// Serving size of the first occurrence
    pub serving_size: f64,
    /// Serving unit of the first occurrence
    pub serving_unit: String,
    /// Macros of the first occurrence (not an average)
    pub calories: f64,
    /// Protein grams of the first occurrence
    pub protein: f64,
    /// Carb grams of the first occurrence
    pub carbs: f64,
    /// Fat grams of the first occurrence
    pub fat: f64,
    /// Occurrences across the supplied week
    pub times_logged: usize,
    /// Most recent logging time seen
    pub last_logged: DateTime<Local>,
}

/// A (food, meal) habit strong enough to suggest outright
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickLogSuggestion {
    /// Display name (first occurrence's casing)
    pub name: String,
    /// Meal this habit belongs to
    pub meal_type: MealType,
    /// Occurrences across the supplied week
    pub times_logged: usize,
    /// Arithmetic mean calories across occurrences
    pub avg_calories: f64,
    /// Arithmetic mean protein grams
    pub avg_protein: f64,
    /// Arithmetic mean carb grams
    pub avg_carbs: f64,
    /// Arithmetic mean fat grams
    pub avg_fat: f64,
    /// Most recent logging time seen
    pub last_logged: DateTime<Local>,
}

fn normalized(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Iterate all entries of the week in day order, then logging order
fn week_entries(week_logs: &[DailyFoodLog]) -> impl Iterator<Item = &FoodLogEntry> {
    week_logs.iter().flat_map(|l| l.entries.iter())
}

/// Top foods from the past week by occurrence count, at most 5.
///
/// Groups by trimmed, case-insensitive name. The representative record keeps
/// the macros of the first occurrence encountered; only `last_logged`
/// advances as later occurrences are seen. Ties in count preserve encounter
/// order (stable sort over input iteration order).
#[must_use]
pub fn get_recent_foods(week_logs: &[DailyFoodLog]) -> Vec<RecentFood> {
    // Encounter order matters for the tie-break, so a Vec with linear lookup
    // stands in for a map; a week of entries is small.
    let mut groups: Vec<(String, RecentFood)> = Vec::new();

    for entry in week_entries(week_logs) {
        let key = normalized(&entry.name);
        if let Some((_, food)) = groups.iter_mut().find(|(k, _)| *k == key) {
            food.times_logged += 1;
            food.last_logged = food.last_logged.max(entry.logged_at);
        } else {
            groups.push((
                key,
                RecentFood {
                    name: entry.name.clone(),
                    serving_size: entry.serving_size,
                    serving_unit: entry.serving_unit.clone(),
                    calories: entry.calories,
                    protein: entry.protein,
                    carbs: entry.carbs,
                    fat: entry.fat,
                    times_logged: 1,
                    last_logged: entry.logged_at,
                },
            ));
        }
    }

    let mut foods: Vec<RecentFood> = groups.into_iter().map(|(_, f)| f).collect();
    foods.sort_by(|a, b| b.times_logged.cmp(&a.times_logged));
    foods.truncate(limits::RECENT_FOODS_CAP);
    foods
}

struct SuggestionAccumulator {
    name: String,
    meal_type: MealType,
    count: usize,
    calories_sum: f64,
    protein_sum: f64,
    carbs_sum: f64,
    fat_sum: f64,
    last_logged: DateTime<Local>,
}

/// Strong (food, meal) habits from the past week, at most 3.
///
/// Groups by (normalized name, meal type); a pair qualifies at three or more
/// occurrences. Macros are the exact arithmetic mean across all occurrences.
/// Sorted by count descending, then recency descending.
#[must_use]
pub fn get_quick_log_suggestions(week_logs: &[DailyFoodLog]) -> Vec<QuickLogSuggestion> {
    let mut groups: Vec<((String, MealType), SuggestionAccumulator)> = Vec::new();

    for entry in week_entries(week_logs) {
        let key = (normalized(&entry.name), entry.meal_type);
        if let Some((_, acc)) = groups.iter_mut().find(|(k, _)| *k == key) {
            acc.count += 1;
            acc.calories_sum += entry.calories;
            acc.protein_sum += entry.protein;
            acc.carbs_sum += entry.carbs;
            acc.fat_sum += entry.fat;
            acc.last_logged = acc.last_logged.max(entry.logged_at);
        } else {
            groups.push((
                key,
                SuggestionAccumulator {
                    name: entry.name.clone(),
                    meal_type: entry.meal_type,
                    count: 1,
                    calories_sum: entry.calories,
                    protein_sum: entry.protein,
                    carbs_sum: entry.carbs,
                    fat_sum: entry.fat,
                    last_logged: entry.logged_at,
                },
            ));
        }
    }

    let mut suggestions: Vec<QuickLogSuggestion> = groups
        .into_iter()
        .filter(|(_, acc)| acc.count >= limits::QUICK_LOG_MIN_OCCURRENCES)
        .map(|(_, acc)| {
            // Safe: count is at least the qualification minimum, never zero
            let n = acc.count as f64;
            QuickLogSuggestion {
                name: acc.name,
                meal_type: acc.meal_type,
                times_logged: acc.count,
                avg_calories: acc.calories_sum / n,
                avg_protein: acc.protein_sum / n,
                avg_carbs: acc.carbs_sum / n,
                avg_fat: acc.fat_sum / n,
                last_logged: acc.last_logged,
            }
        })
        .collect();

    suggestions.sort_by(|a, b| {
        b.times_logged
            .cmp(&a.times_logged)
            .then_with(|| b.last_logged.cmp(&a.last_logged))
    });
    suggestions.truncate(limits::QUICK_LOG_CAP);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MacroTotals;
    use chrono::{NaiveDate, TimeZone};
    use uuid::Uuid;

    fn entry(name: &str, calories: f64, meal: MealType, day: u32, hour: u32) -> FoodLogEntry {
        FoodLogEntry {
            id: Uuid::new_v4(),
            name: name.into(),
            serving_size: 100.0,
            serving_unit: "g".into(),
            calories,
            protein: 20.0,
            carbs: 10.0,
            fat: 5.0,
            meal_type: meal,
            logged_at: Local.with_ymd_and_hms(2026, 6, day, hour, 0, 0).unwrap(),
        }
    }

    fn week(entries: Vec<FoodLogEntry>) -> Vec<DailyFoodLog> {
        let date = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        let mut log = DailyFoodLog::empty(date, MacroTotals::default());
        log.totals = MacroTotals::from_entries(&entries);
        log.entries = entries;
        vec![log]
    }

    #[test]
    fn recent_foods_rank_by_count() {
        let logs = week(vec![
            entry("Rice", 200.0, MealType::Lunch, 15, 12),
            entry("Chicken Breast", 240.0, MealType::Lunch, 15, 12),
            entry("chicken breast ", 250.0, MealType::Dinner, 15, 19),
            entry("CHICKEN BREAST", 260.0, MealType::Dinner, 15, 20),
        ]);
        let foods = get_recent_foods(&logs);
        assert_eq!(foods[0].name, "Chicken Breast");
        assert_eq!(foods[0].times_logged, 3);
        assert_eq!(foods[1].name, "Rice");
    }

    #[test]
    fn recent_foods_keep_first_occurrence_macros() {
        let logs = week(vec![
            entry("Oats", 300.0, MealType::Breakfast, 14, 8),
            entry("Oats", 350.0, MealType::Breakfast, 15, 8),
        ]);
        let foods = get_recent_foods(&logs);
        assert!((foods[0].calories - 300.0).abs() < f64::EPSILON);
        assert_eq!(
            foods[0].last_logged,
            Local.with_ymd_and_hms(2026, 6, 15, 8, 0, 0).unwrap()
        );
    }

    #[test]
    fn recent_foods_cap_at_five_with_stable_ties() {
        let names = ["A", "B", "C", "D", "E", "F", "G"];
        let entries = names
            .iter()
            .map(|n| entry(n, 100.0, MealType::Snack, 15, 10))
            .collect();
        let foods = get_recent_foods(&week(entries));
        assert_eq!(foods.len(), 5);
        // All counts equal: encounter order survives the stable sort.
        let got: Vec<_> = foods.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(got, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn quick_log_requires_three_occurrences() {
        let logs = week(vec![
            entry("Eggs", 150.0, MealType::Breakfast, 13, 8),
            entry("Eggs", 150.0, MealType::Breakfast, 14, 8),
        ]);
        assert!(get_quick_log_suggestions(&logs).is_empty());
    }

    #[test]
    fn quick_log_averages_macros_exactly() {
        let logs = week(vec![
            entry("Eggs", 100.0, MealType::Breakfast, 13, 8),
            entry("Eggs", 110.0, MealType::Breakfast, 14, 8),
            entry("Eggs", 120.0, MealType::Breakfast, 15, 8),
        ]);
        let suggestions = get_quick_log_suggestions(&logs);
        assert_eq!(suggestions.len(), 1);
        assert!((suggestions[0].avg_calories - 110.0).abs() < f64::EPSILON);
        assert_eq!(suggestions[0].times_logged, 3);
    }

    #[test]
    fn quick_log_splits_same_food_across_meals() {
        // Same food at two meals: each pair is counted separately.
        let logs = week(vec![
            entry("Yogurt", 90.0, MealType::Breakfast, 13, 8),
            entry("Yogurt", 90.0, MealType::Breakfast, 14, 8),
            entry("Yogurt", 90.0, MealType::Breakfast, 15, 8),
            entry("Yogurt", 90.0, MealType::Snack, 15, 16),
        ]);
        let suggestions = get_quick_log_suggestions(&logs);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].meal_type, MealType::Breakfast);
    }

    #[test]
    fn quick_log_sorts_by_count_then_recency() {
        let logs = week(vec![
            entry("Eggs", 150.0, MealType::Breakfast, 12, 8),
            entry("Eggs", 150.0, MealType::Breakfast, 13, 8),
            entry("Eggs", 150.0, MealType::Breakfast, 14, 8),
            entry("Rice", 200.0, MealType::Lunch, 12, 12),
            entry("Rice", 200.0, MealType::Lunch, 13, 12),
            entry("Rice", 200.0, MealType::Lunch, 15, 12),
        ]);
        let suggestions = get_quick_log_suggestions(&logs);
        // Equal counts: Rice was logged more recently (day 15 vs 14).
        assert_eq!(suggestions[0].name, "Rice");
        assert_eq!(suggestions[1].name, "Eggs");
    }
}
