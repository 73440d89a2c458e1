// ABOUTME: Integration tests for milestone detection wired through the streak engine
// ABOUTME: Drives detect_milestones with calendar-derived streaks instead of raw counts
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{day_from_entries, entry_on, full_week_ending, june, logged_day, targets};
use macrocoach::clock::FixedClock;
use macrocoach::config::{AdherenceConfig, StreakConfig};
use macrocoach::intelligence::{detect_milestones, streak_status, MilestoneKind};
use macrocoach::models::{DailyFoodLog, MacroTotals, MealType};

// 2026-06-14 is a Sunday.
fn sunday_evening() -> FixedClock {
    FixedClock::at(2026, 6, 14, 20, 0)
}

#[test]
fn test_seven_day_streak_from_calendar_fires_streak_milestone() {
    let clock = sunday_evening();
    let week = full_week_ending(june(14));
    let status = streak_status(&week, 0, &clock, &StreakConfig::default());
    assert_eq!(status.current_streak, 7);

    let fired = detect_milestones(
        week.last(),
        &week,
        0,
        status.current_streak,
        &clock,
        &AdherenceConfig::default(),
    );
    assert!(fired.iter().any(|m| m.id == "streak_7"));
    // A full window on Sunday also completes the week.
    assert!(fired.iter().any(|m| m.kind == MilestoneKind::PerfectWeek));
}

#[test]
fn test_perfect_week_requires_sunday() {
    let week = full_week_ending(june(13));
    let saturday = FixedClock::at(2026, 6, 13, 20, 0);
    let fired = detect_milestones(None, &week, 0, 0, &saturday, &AdherenceConfig::default());
    assert!(fired.iter().all(|m| m.kind != MilestoneKind::PerfectWeek));
}

#[test]
fn test_perfect_week_requires_all_seven_days() {
    let mut week = full_week_ending(june(14));
    week[2] = DailyFoodLog::empty(week[2].date, targets());
    let fired = detect_milestones(
        None,
        &week,
        0,
        0,
        &sunday_evening(),
        &AdherenceConfig::default(),
    );
    assert!(fired.iter().all(|m| m.kind != MilestoneKind::PerfectWeek));
}

#[test]
fn test_perfect_week_needs_seven_distinct_logged_dates() {
    // Seven logs with entries, but a duplicated date hides a missing day.
    let mut week = full_week_ending(june(14));
    week[2] = logged_day(june(12), 2);
    let fired = detect_milestones(
        None,
        &week,
        0,
        0,
        &sunday_evening(),
        &AdherenceConfig::default(),
    );
    assert!(fired.iter().all(|m| m.kind != MilestoneKind::PerfectWeek));
}

#[test]
fn test_meal_count_milestones_are_exact() {
    let clock = FixedClock::at(2026, 6, 10, 20, 0);
    let config = AdherenceConfig::default();
    for count in [1, 10, 50, 100, 250, 500, 1000] {
        let fired = detect_milestones(None, &[], count, 0, &clock, &config);
        assert_eq!(fired.len(), 1, "count {count}");
        assert_eq!(fired[0].kind, MilestoneKind::MealCount);
    }
    for count in [0, 2, 9, 11, 99, 101, 999, 1001] {
        let fired = detect_milestones(None, &[], count, 0, &clock, &config);
        assert!(fired.is_empty(), "count {count}");
    }
}

#[test]
fn test_streak_milestone_table() {
    let clock = FixedClock::at(2026, 6, 10, 20, 0);
    let config = AdherenceConfig::default();
    for streak in [3, 7, 14, 30, 50, 100] {
        let fired = detect_milestones(None, &[], 0, streak, &clock, &config);
        assert_eq!(fired.len(), 1, "streak {streak}");
        assert_eq!(fired[0].id, format!("streak_{streak}"));
    }
    for streak in [1, 2, 4, 15, 29, 101] {
        assert!(
            detect_milestones(None, &[], 0, streak, &clock, &config).is_empty(),
            "streak {streak}"
        );
    }
}

#[test]
fn test_perfect_day_fires_from_real_entries() {
    // Entries landing exactly on target across all four macros.
    let date = june(10);
    let mut today = day_from_entries(date, Vec::new());
    today.entries = vec![entry_on(date, 12, "Meal prep bowl", 1000.0, MealType::Lunch)];
    today.totals = MacroTotals::new(2000.0, 150.0, 200.0, 70.0);

    let clock = FixedClock::at(2026, 6, 10, 20, 0);
    let fired = detect_milestones(
        Some(&today),
        &[],
        0,
        0,
        &clock,
        &AdherenceConfig::default(),
    );
    assert!(fired.iter().any(|m| m.kind == MilestoneKind::PerfectDay));

    // Drop fat below 85% of target and the day is no longer perfect.
    today.totals.fat = 50.0;
    let fired = detect_milestones(
        Some(&today),
        &[],
        0,
        0,
        &clock,
        &AdherenceConfig::default(),
    );
    assert!(fired.iter().all(|m| m.kind != MilestoneKind::PerfectDay));
}
