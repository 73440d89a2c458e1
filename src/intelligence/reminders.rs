// ABOUTME: Meal reminder schedule computation from today's log and preferences
// ABOUTME: Process-wide handler registration is explicit init/shutdown, no import-time effects
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

//! # Reminder Planner
//!
//! Computes what the local notification schedule *should be* for the rest of
//! today; actually scheduling with the OS is the embedding app's job. A
//! reminder is skipped when its meal is already logged or its hour has
//! passed, and an evening summary fires only on thin logging days.
//!
//! Handler registration is process-wide but explicit: call [`init`] once at
//! app start and [`shutdown`] on teardown. Nothing registers itself as a
//! side effect of being linked in.

use crate::clock::TimeProvider;
use crate::config::ReminderConfig;
use crate::models::{DailyFoodLog, MealType};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// What a reminder is nudging toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    /// Log a specific meal
    Meal(MealType),
    /// Evening review of a thin logging day
    EveningSummary,
}

/// One planned local notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealReminder {
    /// What the reminder nudges toward
    pub kind: ReminderKind,
    /// Local hour to fire at, today
    pub hour: u32,
    /// Notification copy
    pub message: String,
}

static HANDLER_READY: AtomicBool = AtomicBool::new(false);

/// Register the process-wide reminder handler. Call once at app start;
/// calling again is a no-op.
pub fn init() {
    if HANDLER_READY.swap(true, Ordering::SeqCst) {
        tracing::debug!("reminder handler already initialized");
    } else {
        tracing::info!("reminder handler initialized");
    }
}

/// Tear the handler down. Safe to call without a prior [`init`].
pub fn shutdown() {
    HANDLER_READY.store(false, Ordering::SeqCst);
}

/// Whether [`init`] has been called
#[must_use]
pub fn is_initialized() -> bool {
    HANDLER_READY.load(Ordering::SeqCst)
}

/// Plan the rest of today's reminders.
///
/// `today_log` may be `None` when the fetch degraded; that plans the full
/// remaining schedule. Reminders are returned in firing order.
#[must_use]
pub fn plan_reminders(
    today_log: Option<&DailyFoodLog>,
    config: &ReminderConfig,
    clock: &dyn TimeProvider,
) -> Vec<MealReminder> {
    let hour_now = clock.hour();
    let has_meal = |meal: MealType| today_log.is_some_and(|l| l.has_meal(meal));
    let entry_count = today_log.map_or(0, |l| l.entries.len());

    let meal_slots = [
        (MealType::Breakfast, config.breakfast_hour),
        (MealType::Lunch, config.lunch_hour),
        (MealType::Dinner, config.dinner_hour),
    ];

    let mut planned: Vec<MealReminder> = meal_slots
        .into_iter()
        .filter(|&(meal, hour)| hour > hour_now && !has_meal(meal))
        .map(|(meal, hour)| MealReminder {
            kind: ReminderKind::Meal(meal),
            hour,
            message: format!("Time to log your {}", meal.label()),
        })
        .collect();

    if config.summary_hour > hour_now && entry_count < config.summary_min_entries {
        planned.push(MealReminder {
            kind: ReminderKind::EveningSummary,
            hour: config.summary_hour,
            message: "Light logging day - anything to add before bed?".into(),
        });
    }

    planned.sort_by_key(|r| r.hour);
    planned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::{FoodLogEntry, MacroTotals};
    use chrono::{Local, NaiveDate, TimeZone};
    use uuid::Uuid;

    fn log_with_breakfast() -> DailyFoodLog {
        let date = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        let mut log = DailyFoodLog::empty(date, MacroTotals::default());
        log.entries.push(FoodLogEntry {
            id: Uuid::new_v4(),
            name: "Oats".into(),
            serving_size: 60.0,
            serving_unit: "g".into(),
            calories: 220.0,
            protein: 8.0,
            carbs: 40.0,
            fat: 4.0,
            meal_type: MealType::Breakfast,
            logged_at: Local.with_ymd_and_hms(2026, 6, 15, 8, 0, 0).unwrap(),
        });
        log
    }

    #[test]
    fn morning_plan_covers_remaining_meals() {
        let clock = FixedClock::at(2026, 6, 15, 7, 0);
        let planned = plan_reminders(None, &ReminderConfig::default(), &clock);
        let kinds: Vec<_> = planned.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ReminderKind::Meal(MealType::Breakfast),
                ReminderKind::Meal(MealType::Lunch),
                ReminderKind::Meal(MealType::Dinner),
                ReminderKind::EveningSummary,
            ]
        );
        assert!(planned.windows(2).all(|w| w[0].hour <= w[1].hour));
    }

    #[test]
    fn logged_meal_drops_its_reminder() {
        let clock = FixedClock::at(2026, 6, 15, 7, 0);
        let log = log_with_breakfast();
        let planned = plan_reminders(Some(&log), &ReminderConfig::default(), &clock);
        assert!(planned
            .iter()
            .all(|r| r.kind != ReminderKind::Meal(MealType::Breakfast)));
    }

    #[test]
    fn past_hours_are_skipped() {
        let clock = FixedClock::at(2026, 6, 15, 19, 0);
        let planned = plan_reminders(None, &ReminderConfig::default(), &clock);
        // Only the 20:00 summary remains after dinner hour has passed.
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].kind, ReminderKind::EveningSummary);
    }

    #[test]
    fn summary_skipped_on_well_logged_days() {
        let clock = FixedClock::at(2026, 6, 15, 19, 0);
        let mut log = log_with_breakfast();
        let mut second = log.entries[0].clone();
        second.meal_type = MealType::Lunch;
        log.entries.push(second);
        let planned = plan_reminders(Some(&log), &ReminderConfig::default(), &clock);
        assert!(planned.is_empty());
    }

    #[test]
    fn init_is_idempotent() {
        shutdown();
        assert!(!is_initialized());
        init();
        init();
        assert!(is_initialized());
        shutdown();
        assert!(!is_initialized());
    }
}
