// ABOUTME: Prioritized quick-action selection gated by hour windows and logged data
// ABOUTME: Also hosts the single what-to-do-right-now prompt and its throttle helper
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

//! # Contextual Action / Prompt Selector
//!
//! Maintains a fixed catalog of candidate quick actions, each with a static
//! priority and optional hour-window and data gates. Selection is: evaluate
//! every gate, keep what passes, stable-sort by priority descending
//! (declaration order breaks ties), truncate to the caller's cap.
//!
//! Priority note: the generic log-food action carries 100 and deliberately
//! outranks the meal-specific log actions at 95. The ordering looks reversed
//! but is the shipped product behavior; preserve it.

use crate::clock::TimeProvider;
use crate::config::ActionSelectorConfig;
use crate::constants::{meal_windows, milestones};
use crate::models::{DailyFoodLog, MealType};
use chrono::{DateTime, Local};
use serde::Serialize;

/// A conditionally-gated shortcut surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    /// Stable identifier consumed by the UI router
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    /// Static priority; higher surfaces first
    pub priority: u8,
}

/// At most one contextual prompt for the current moment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeBasedPrompt {
    /// Stable identifier for shown-state tracking
    pub id: &'static str,
    /// Prompt copy shown to the user
    pub message: String,
    /// Meal the prompt nudges toward, when applicable
    pub meal_type: Option<MealType>,
}

struct Candidate {
    action: QuickAction,
    eligible: bool,
}

const fn action(id: &'static str, title: &'static str, priority: u8) -> QuickAction {
    QuickAction {
        id,
        title,
        priority,
    }
}

fn in_window(hour: u32, window: (u32, u32)) -> bool {
    hour >= window.0 && hour < window.1
}

/// Select the quick actions to surface right now, at most `max` of them.
///
/// `today_log` may be `None` when the fetch degraded; that counts as a day
/// with zero entries. Returned actions are in non-increasing priority order.
#[must_use]
pub fn select_actions(
    today_log: Option<&DailyFoodLog>,
    current_streak: u32,
    clock: &dyn TimeProvider,
    max: usize,
) -> Vec<QuickAction> {
    let hour = clock.hour();
    let has_meal = |meal: MealType| today_log.is_some_and(|l| l.has_meal(meal));
    let no_entries = today_log.is_none_or(|l| !l.has_entries());

    // Declaration order is the tie-break, so the catalog is written once,
    // top priority first within each tier.
    let candidates = [
        Candidate {
            action: action("log_food", "Log food", 100),
            eligible: true,
        },
        Candidate {
            action: action("log_breakfast", "Log breakfast", 95),
            eligible: in_window(hour, meal_windows::BREAKFAST) && !has_meal(MealType::Breakfast),
        },
        Candidate {
            action: action("log_lunch", "Log lunch", 95),
            eligible: in_window(hour, meal_windows::LUNCH) && !has_meal(MealType::Lunch),
        },
        Candidate {
            action: action("log_snack", "Log a snack", 95),
            eligible: in_window(hour, meal_windows::SNACK) && !has_meal(MealType::Snack),
        },
        Candidate {
            action: action("log_dinner", "Log dinner", 95),
            eligible: in_window(hour, meal_windows::DINNER) && !has_meal(MealType::Dinner),
        },
        Candidate {
            action: action("progress_photo", "Take a progress photo", 90),
            eligible: milestones::PROGRESS_PHOTO_STREAKS.contains(&current_streak),
        },
        Candidate {
            action: action("meal_plan", "See today's meal plan", 85),
            eligible: no_entries,
        },
        Candidate {
            action: action("scan_barcode", "Scan a barcode", 80),
            eligible: true,
        },
        Candidate {
            action: action("log_water", "Log water", 70),
            eligible: true,
        },
        Candidate {
            action: action("log_mood", "Log mood", 60),
            eligible: true,
        },
        Candidate {
            action: action("coach_chat", "Ask your coach", 50),
            eligible: true,
        },
        Candidate {
            action: action("photo_timeline", "View photo timeline", 40),
            eligible: true,
        },
    ];

    let mut selected: Vec<QuickAction> = candidates
        .into_iter()
        .filter(|c| c.eligible)
        .map(|c| c.action)
        .collect();
    // Stable sort: ties keep catalog declaration order.
    selected.sort_by(|a, b| b.priority.cmp(&a.priority));
    selected.truncate(max);
    selected
}

/// Dashboard variant of [`select_actions`], capped at the configured
/// dashboard display size
#[must_use]
pub fn select_dashboard_actions(
    today_log: Option<&DailyFoodLog>,
    current_streak: u32,
    clock: &dyn TimeProvider,
    config: &ActionSelectorConfig,
) -> Vec<QuickAction> {
    select_actions(today_log, current_streak, clock, config.dashboard_cap)
}

/// Evaluate the mutually exclusive hour-range rules and return at most one
/// prompt: the first rule in listed order whose hour range and data
/// conditions both match. `None` when nothing fires.
#[must_use]
pub fn current_prompt(
    today_log: Option<&DailyFoodLog>,
    clock: &dyn TimeProvider,
) -> Option<TimeBasedPrompt> {
    let hour = clock.hour();
    let has_meal = |meal: MealType| today_log.is_some_and(|l| l.has_meal(meal));
    let entry_count = today_log.map_or(0, |l| l.entries.len());

    if (6..10).contains(&hour) && !has_meal(MealType::Breakfast) {
        return Some(TimeBasedPrompt {
            id: "morning_breakfast",
            message: "Good morning! What's for breakfast?".into(),
            meal_type: Some(MealType::Breakfast),
        });
    }
    if (10..11).contains(&hour) && entry_count == 0 {
        return Some(TimeBasedPrompt {
            id: "midmorning_catchup",
            message: "Nothing logged yet today. Catch up before lunch?".into(),
            meal_type: None,
        });
    }
    if (11..14).contains(&hour) && !has_meal(MealType::Lunch) {
        return Some(TimeBasedPrompt {
            id: "lunch_reminder",
            message: "Lunchtime. Log it while it's fresh.".into(),
            meal_type: Some(MealType::Lunch),
        });
    }
    if (14..17).contains(&hour) && !has_meal(MealType::Snack) && entry_count > 0 {
        return Some(TimeBasedPrompt {
            id: "afternoon_snack",
            message: "Afternoon dip? A planned snack beats an unplanned one.".into(),
            meal_type: Some(MealType::Snack),
        });
    }
    if (17..20).contains(&hour) && !has_meal(MealType::Dinner) {
        return Some(TimeBasedPrompt {
            id: "dinner_reminder",
            message: "Dinner time - log it to close out the day.".into(),
            meal_type: Some(MealType::Dinner),
        });
    }
    if (20..23).contains(&hour) && entry_count < 3 {
        return Some(TimeBasedPrompt {
            id: "evening_review",
            message: "Quick evening check: anything you ate but didn't log?".into(),
            meal_type: None,
        });
    }
    None
}

/// Recommend suppressing a new prompt when one was already shown within the
/// configured throttle window.
#[must_use]
pub fn should_throttle(
    last_shown: Option<DateTime<Local>>,
    clock: &dyn TimeProvider,
    config: &ActionSelectorConfig,
) -> bool {
    last_shown.is_some_and(|at| {
        (clock.now() - at).num_hours() < config.prompt_throttle_hours
    })
}
