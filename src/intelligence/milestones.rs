// ABOUTME: Exact-match milestone detection for meal counts, streaks, and perfect days/weeks
// ABOUTME: Stateless; shown-state tracking belongs to the caller
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

//! # Milestone Detector
//!
//! Pure lookup against fixed trigger tables. Triggers are **exact match**,
//! not "at least": a user whose total jumps from 9 to 11 meals skips the
//! 10-meal milestone entirely. That is documented product behavior, not a
//! defect to fix here.
//!
//! Multiple milestones may fire at once; all qualifying ones are returned in
//! declaration order (meal count, streak, perfect week, perfect day) and the
//! caller decides how many to display. This function keeps no
//! "already shown" state.

use crate::clock::TimeProvider;
use crate::config::AdherenceConfig;
use crate::constants::adherence::WEEK_DAYS;
use crate::constants::milestones::{MEAL_COUNT_MILESTONES, STREAK_MILESTONES};
use crate::intelligence::adherence::is_perfect_day;
use crate::models::DailyFoodLog;
use serde::{Deserialize, Serialize};

/// What kind of threshold a milestone crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneKind {
    /// Exact total-meals-logged count reached
    MealCount,
    /// Exact streak length reached
    Streak,
    /// All seven days of the week logged, detected on Sunday
    PerfectWeek,
    /// All four macros on target today
    PerfectDay,
}

/// A one-shot threshold-triggered event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Stable identifier, e.g. `10_meals` or `streak_7`
    pub id: String,
    /// Threshold kind
    pub kind: MilestoneKind,
    /// Celebration copy
    pub title: String,
}

/// Detect every milestone that fires right now.
///
/// `total_meals_logged` is the lifetime meal count from the backend;
/// `week_logs` is the rolling 7-day window ending today.
#[must_use]
pub fn detect_milestones(
    today_log: Option<&DailyFoodLog>,
    week_logs: &[DailyFoodLog],
    total_meals_logged: u32,
    current_streak: u32,
    clock: &dyn TimeProvider,
    config: &AdherenceConfig,
) -> Vec<Milestone> {
    let mut fired = Vec::new();

    if MEAL_COUNT_MILESTONES.contains(&total_meals_logged) {
        fired.push(Milestone {
            id: format!("{total_meals_logged}_meals"),
            kind: MilestoneKind::MealCount,
            title: meal_count_title(total_meals_logged),
        });
    }

    if STREAK_MILESTONES.contains(&current_streak) {
        fired.push(Milestone {
            id: format!("streak_{current_streak}"),
            kind: MilestoneKind::Streak,
            title: format!("{current_streak}-day streak. Keep the chain going!"),
        });
    }

    // End-of-week boundary: the perfect-week banner only makes sense once
    // the week is complete, so it is gated on today being Sunday. Distinct
    // dates, not log count: the window may carry duplicate dates.
    let mut logged_dates: Vec<_> = week_logs
        .iter()
        .filter(|l| l.has_entries())
        .map(|l| l.date)
        .collect();
    logged_dates.sort_unstable();
    logged_dates.dedup();
    if logged_dates.len() >= WEEK_DAYS && clock.is_sunday() {
        fired.push(Milestone {
            id: "perfect_week".into(),
            kind: MilestoneKind::PerfectWeek,
            title: "Perfect week: all 7 days logged!".into(),
        });
    }

    if let Some(today) = today_log {
        if is_perfect_day(&today.totals, &today.targets, config) {
            fired.push(Milestone {
                id: "perfect_day".into(),
                kind: MilestoneKind::PerfectDay,
                title: "Perfect day: every macro on target!".into(),
            });
        }
    }

    fired
}

fn meal_count_title(count: u32) -> String {
    match count {
        1 => "First meal logged. The journey starts here!".into(),
        _ => format!("{count} meals logged. Consistency pays off!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::{FoodLogEntry, MacroTotals, MealType};
    use chrono::{Local, NaiveDate, TimeZone};
    use uuid::Uuid;

    fn logged_day(day: u32) -> DailyFoodLog {
        let date = NaiveDate::from_ymd_opt(2026, 6, day).unwrap();
        let mut log = DailyFoodLog::empty(date, MacroTotals::new(1000.0, 100.0, 100.0, 100.0));
        log.entries.push(FoodLogEntry {
            id: Uuid::new_v4(),
            name: "Meal".into(),
            serving_size: 1.0,
            serving_unit: "plate".into(),
            calories: 1000.0,
            protein: 95.0,
            carbs: 98.0,
            fat: 101.0,
            meal_type: MealType::Dinner,
            logged_at: Local.with_ymd_and_hms(2026, 6, day, 19, 0, 0).unwrap(),
        });
        log.totals = MacroTotals::new(1000.0, 95.0, 98.0, 101.0);
        log
    }

    // 2026-06-14 is a Sunday.
    fn sunday_clock() -> FixedClock {
        FixedClock::at(2026, 6, 14, 20, 0)
    }

    #[test]
    fn meal_count_is_exact_match_only() {
        let clock = sunday_clock();
        let config = AdherenceConfig::default();
        let at = |count| detect_milestones(None, &[], count, 0, &clock, &config);
        assert!(at(9).iter().all(|m| m.kind != MilestoneKind::MealCount));
        assert!(at(11).iter().all(|m| m.kind != MilestoneKind::MealCount));
        let fired = at(10);
        assert_eq!(fired[0].id, "10_meals");
    }

    #[test]
    fn streak_milestones_fire_on_exact_lengths() {
        let clock = sunday_clock();
        let config = AdherenceConfig::default();
        let fired = detect_milestones(None, &[], 0, 7, &clock, &config);
        assert_eq!(fired[0].id, "streak_7");
        assert!(detect_milestones(None, &[], 0, 8, &clock, &config).is_empty());
    }

    #[test]
    fn perfect_week_needs_sunday_and_all_days() {
        let config = AdherenceConfig::default();
        let week: Vec<_> = (8..=14).map(logged_day).collect();

        let fired = detect_milestones(None, &week, 0, 0, &sunday_clock(), &config);
        assert!(fired.iter().any(|m| m.kind == MilestoneKind::PerfectWeek));

        // Same window on a Saturday does not fire.
        let saturday = FixedClock::at(2026, 6, 13, 20, 0);
        let fired = detect_milestones(None, &week, 0, 0, &saturday, &config);
        assert!(fired.iter().all(|m| m.kind != MilestoneKind::PerfectWeek));

        // A missed day on Sunday does not fire either.
        let mut gappy = week.clone();
        gappy[3].entries.clear();
        let fired = detect_milestones(None, &gappy, 0, 0, &sunday_clock(), &config);
        assert!(fired.iter().all(|m| m.kind != MilestoneKind::PerfectWeek));
    }

    #[test]
    fn perfect_week_counts_distinct_dates() {
        // Seven logged logs, but one date twice and one day absent: only
        // six distinct days, so the week is not perfect.
        let config = AdherenceConfig::default();
        let mut week: Vec<_> = (8..=14).map(logged_day).collect();
        week[3] = logged_day(12);
        let fired = detect_milestones(None, &week, 0, 0, &sunday_clock(), &config);
        assert!(fired.iter().all(|m| m.kind != MilestoneKind::PerfectWeek));
    }

    #[test]
    fn perfect_day_tracks_the_on_target_band() {
        let config = AdherenceConfig::default();
        let clock = FixedClock::at(2026, 6, 10, 20, 0);
        let today = logged_day(10);
        let fired = detect_milestones(Some(&today), &[], 0, 0, &clock, &config);
        assert!(fired.iter().any(|m| m.kind == MilestoneKind::PerfectDay));

        let mut off = today.clone();
        off.totals.protein = 80.0;
        let fired = detect_milestones(Some(&off), &[], 0, 0, &clock, &config);
        assert!(fired.iter().all(|m| m.kind != MilestoneKind::PerfectDay));
    }

    #[test]
    fn multiple_milestones_keep_declaration_order() {
        let config = AdherenceConfig::default();
        let week: Vec<_> = (8..=14).map(logged_day).collect();
        let today = logged_day(14);
        let fired = detect_milestones(Some(&today), &week, 50, 7, &sunday_clock(), &config);
        let kinds: Vec<_> = fired.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MilestoneKind::MealCount,
                MilestoneKind::Streak,
                MilestoneKind::PerfectWeek,
                MilestoneKind::PerfectDay,
            ]
        );
    }
}
