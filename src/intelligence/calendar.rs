// ABOUTME: Week calendar construction and consecutive-day streak computation
// ABOUTME: Handles late-evening grace windows and streak-freeze availability
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

//! # Calendar/Streak Engine
//!
//! Builds a rolling 7-day presence calendar from a week of daily logs and
//! computes the consecutive-day logging streak. A streak survives the
//! midnight boundary in two ways:
//!
//! - **Grace window**: if yesterday's last entry landed at or after 18:00
//!   local and nothing is logged today yet, today counts as "not yet broken"
//!   until 12:00 local. Grace does not itself count as a logged day.
//! - **Freeze**: an earned allowance that covers one fully-missed day. One is
//!   earned per 7 consecutive streak days, capped at 2 usable per rolling
//!   month. Consumption state lives in the backend; this engine only reports
//!   availability.

use crate::clock::TimeProvider;
use crate::config::StreakConfig;
use crate::models::DailyFoodLog;
use chrono::{Datelike, Days, Timelike};
use serde::{Deserialize, Serialize};

/// One day within the rolling 7-day window. Derived, read-only; recomputed
/// on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Local calendar date
    pub date: chrono::NaiveDate,
    /// Short day-of-week label ("Mon", "Tue", ...)
    pub weekday_label: String,
    /// Day of month, 1-31
    pub day_number: u32,
    /// Whether any entry was logged on this day
    pub has_entries: bool,
    /// Number of entries logged on this day
    pub entry_count: usize,
    /// Whether this slot is today
    pub is_today: bool,
    /// Whether a grace window keeps this (empty) day unbroken
    pub grace_active: bool,
    /// Whether a streak freeze covers this missed day
    pub freeze_applied: bool,
}

/// Streak summary for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakStatus {
    /// Current consecutive-day streak
    pub current_streak: u32,
    /// Freezes earned and under the monthly cap
    pub freezes_usable: u32,
    /// Freezes still available after this month's usage
    pub freezes_available: u32,
    /// Whether today is riding a grace window
    pub grace_active: bool,
}

/// Build the 7-day presence calendar: today and the 6 preceding local days,
/// oldest first. Days are matched by exact date equality; on duplicate dates
/// in `week_logs` the first match wins. A day with no matching log, or a
/// matching log with no entries, is marked `has_entries = false`.
///
/// Exactly one returned day has `is_today == true`. An empty `week_logs`
/// produces a calendar of all-false days.
#[must_use]
pub fn generate_week_calendar(
    week_logs: &[DailyFoodLog],
    clock: &dyn TimeProvider,
    config: &StreakConfig,
) -> Vec<CalendarDay> {
    let today = clock.today();
    let grace_today = grace_window_active(week_logs, clock, config);

    (0..7)
        .rev()
        .map(|offset| {
            let date = today - Days::new(offset);
            let is_today = offset == 0;
            // First match wins on duplicates.
            let log = week_logs.iter().find(|l| l.date == date);
            let entry_count = log.map_or(0, |l| l.entries.len());
            CalendarDay {
                date,
                weekday_label: date.format("%a").to_string(),
                day_number: date.day(),
                has_entries: entry_count > 0,
                entry_count,
                is_today,
                grace_active: is_today && entry_count == 0 && grace_today,
                freeze_applied: false,
            }
        })
        .collect()
}

/// Count the consecutive-day streak from a presence calendar.
///
/// Scans from the most recent day backward. A day with entries, or covered
/// by a freeze, extends the streak. Today riding an active grace window is
/// skipped without breaking the scan but does not increment the count. The
/// scan stops at the first day with none of those flags.
#[must_use]
pub fn calculate_streak(calendar: &[CalendarDay]) -> u32 {
    let mut streak = 0;
    for day in calendar.iter().rev() {
        if day.has_entries || day.freeze_applied {
            streak += 1;
        } else if day.is_today && day.grace_active {
            // Not yet broken, but not a logged day either.
            continue;
        } else {
            break;
        }
    }
    streak
}

/// Freezes still available this month: one earned per
/// `freeze_earn_interval_days` of streak, capped at `freeze_monthly_cap`,
/// minus what was already used, floored at zero.
#[must_use]
pub fn freezes_available(streak: u32, used_this_month: u32, config: &StreakConfig) -> u32 {
    let earned = if config.freeze_earn_interval_days == 0 {
        0
    } else {
        streak / config.freeze_earn_interval_days
    };
    earned
        .min(config.freeze_monthly_cap)
        .saturating_sub(used_this_month)
}

/// Full streak summary combining calendar scan and freeze economics
#[must_use]
pub fn streak_status(
    week_logs: &[DailyFoodLog],
    freezes_used_this_month: u32,
    clock: &dyn TimeProvider,
    config: &StreakConfig,
) -> StreakStatus {
    let calendar = generate_week_calendar(week_logs, clock, config);
    let current_streak = calculate_streak(&calendar);
    let earned = if config.freeze_earn_interval_days == 0 {
        0
    } else {
        current_streak / config.freeze_earn_interval_days
    };
    StreakStatus {
        current_streak,
        freezes_usable: earned.min(config.freeze_monthly_cap),
        freezes_available: freezes_available(current_streak, freezes_used_this_month, config),
        grace_active: calendar.last().is_some_and(|d| d.grace_active),
    }
}

/// Whether today is inside an active, unexpired grace window: yesterday's
/// last entry at or after the earn hour, nothing logged today, and the
/// current hour still before the expiry hour.
fn grace_window_active(
    week_logs: &[DailyFoodLog],
    clock: &dyn TimeProvider,
    config: &StreakConfig,
) -> bool {
    let today = clock.today();
    if clock.hour() >= config.grace_expiry_hour {
        return false;
    }
    let today_logged = week_logs
        .iter()
        .find(|l| l.date == today)
        .is_some_and(DailyFoodLog::has_entries);
    if today_logged {
        return false;
    }
    let yesterday = today - Days::new(1);
    week_logs
        .iter()
        .find(|l| l.date == yesterday)
        .and_then(DailyFoodLog::last_logged_at)
        .is_some_and(|at| at.hour() >= config.grace_earn_hour)
}
