// ABOUTME: Core data models for food logging: entries, daily logs, and macro totals
// ABOUTME: Defines the two input shapes every analyzer consumes (one day, one week of days)
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

//! # Data Models
//!
//! Core data structures shared by every analyzer in the crate. The backend
//! returns a single day's log or a 7-day window of daily logs; everything the
//! intelligence layer produces is derived from these two shapes.
//!
//! ## Design Principles
//!
//! - **Read-only snapshots**: analyzers never mutate the logs they are given
//! - **Trusted totals**: `DailyFoodLog::totals` is authoritative; consumers do
//!   not re-sum entries
//! - **Serializable**: all models round-trip through JSON for the backend API

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four tracked macro quantities. A pure value type: always derived from
/// entries or supplied as a target, never independently persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Kilocalories
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

impl MacroTotals {
    /// Create totals from the four macro quantities
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Sum the macros of a slice of entries
    #[must_use]
    pub fn from_entries(entries: &[FoodLogEntry]) -> Self {
        entries.iter().fold(Self::default(), |acc, e| Self {
            calories: acc.calories + e.calories,
            protein: acc.protein + e.protein,
            carbs: acc.carbs + e.carbs,
            fat: acc.fat + e.fat,
        })
    }
}

impl std::ops::Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

/// Which meal an entry was logged against. Wire format matches the backend's
/// lowercase strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Anything in between
    Snack,
}

impl MealType {
    /// Display label used by prompts and reminders
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

/// A single logged food item. Immutable once created (deletion aside); owned
/// by the day extracted from `logged_at` in local time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogEntry {
    /// Backend-assigned entry id
    pub id: Uuid,
    /// Food name as entered or matched
    pub name: String,
    /// Serving size in `serving_unit`s
    pub serving_size: f64,
    /// Unit for the serving size ("g", "cup", "piece", ...)
    pub serving_unit: String,
    /// Kilocalories for this serving
    pub calories: f64,
    /// Protein grams for this serving
    pub protein: f64,
    /// Carbohydrate grams for this serving
    pub carbs: f64,
    /// Fat grams for this serving
    pub fat: f64,
    /// Meal this entry was logged against
    pub meal_type: MealType,
    /// When the user logged it, local time
    pub logged_at: DateTime<Local>,
}

/// One calendar day's nutrition record as returned by the backend.
///
/// `totals` is authoritative and must equal the sum of the entries' macros;
/// analyzers trust it rather than re-deriving. `targets` may differ from
/// `base_targets` when the backend applied an adaptive daily adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyFoodLog {
    /// The day this log covers (local calendar date)
    pub date: NaiveDate,
    /// Entries ordered by logging time
    #[serde(default)]
    pub entries: Vec<FoodLogEntry>,
    /// Summed macros for the day
    #[serde(default)]
    pub totals: MacroTotals,
    /// The day's goal
    #[serde(default)]
    pub targets: MacroTotals,
    /// The user's baseline targets before any daily adjustment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_targets: Option<MacroTotals>,
    /// Delta applied to the baseline for this day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_adjustment: Option<MacroTotals>,
    /// Human-readable explanation of the adjustment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustment_message: Option<String>,
}

impl DailyFoodLog {
    /// An empty log for `date` with the given targets
    #[must_use]
    pub fn empty(date: NaiveDate, targets: MacroTotals) -> Self {
        Self {
            date,
            entries: Vec::new(),
            totals: MacroTotals::default(),
            targets,
            base_targets: None,
            daily_adjustment: None,
            adjustment_message: None,
        }
    }

    /// Whether anything was logged on this day
    #[must_use]
    pub fn has_entries(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Whether an entry tagged with `meal_type` already exists today
    #[must_use]
    pub fn has_meal(&self, meal_type: MealType) -> bool {
        self.entries.iter().any(|e| e.meal_type == meal_type)
    }

    /// Timestamp of the last entry by logging time
    #[must_use]
    pub fn last_logged_at(&self) -> Option<DateTime<Local>> {
        self.entries.iter().map(|e| e.logged_at).max()
    }
}
