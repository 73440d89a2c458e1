// ABOUTME: Fixed product constants: adherence bands, milestone tables, hour windows
// ABOUTME: Single source of truth shared by the analyzers and their tests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

//! Product constants used throughout the intelligence layer.
//!
//! These values encode product decisions, not science: the adherence bands
//! drive feedback tone, the milestone tables are exact-match trigger points,
//! and the hour windows gate meal-specific prompts and actions.

/// Adherence band boundaries, in percent of target.
///
/// Five canonical bands: way-under, slightly-under, on-target, slightly-over,
/// way-over. Shared by per-macro feedback and perfect-day detection.
pub mod adherence {
    /// Lower bound of the on-target band (inclusive)
    pub const ON_TARGET_MIN: f64 = 95.0;

    /// Upper bound of the on-target band (inclusive)
    pub const ON_TARGET_MAX: f64 = 105.0;

    /// Upper bound of the slightly-over band (inclusive); above is way-over
    pub const SLIGHTLY_OVER_MAX: f64 = 115.0;

    /// Lower bound of the slightly-under band (inclusive); below is way-under
    pub const SLIGHTLY_UNDER_MIN: f64 = 85.0;

    /// Days in the analysis window
    pub const WEEK_DAYS: usize = 7;

    /// Minimum logged days before a week trend is classified
    pub const MIN_DAYS_FOR_TREND: usize = 4;
}

/// Streak mechanics: grace windows and freeze economics
pub mod streaks {
    /// A last entry at or after this local hour on the prior day earns a
    /// grace window for today
    pub const GRACE_EARN_HOUR: u32 = 18;

    /// Grace expires at this local hour (exclusive) on the current day
    pub const GRACE_EXPIRY_HOUR: u32 = 12;

    /// One freeze is earned per this many consecutive streak days
    pub const FREEZE_EARN_INTERVAL_DAYS: u32 = 7;

    /// Usable freezes are capped at this many per rolling month
    pub const FREEZE_MONTHLY_CAP: u32 = 2;
}

/// Exact-match milestone trigger tables.
///
/// Triggers fire only on the exact count: a user who jumps from 9 to 11
/// logged meals skips the 10-meal milestone. Documented product behavior.
pub mod milestones {
    /// Total-meals-logged trigger points
    pub const MEAL_COUNT_MILESTONES: [u32; 7] = [1, 10, 50, 100, 250, 500, 1000];

    /// Streak-length trigger points
    pub const STREAK_MILESTONES: [u32; 6] = [3, 7, 14, 30, 50, 100];

    /// Streak lengths at which the progress-photo quick action surfaces
    pub const PROGRESS_PHOTO_STREAKS: [u32; 5] = [7, 14, 30, 60, 90];
}

/// Local-hour windows gating meal-specific actions and prompts.
/// Each window is half-open: `[start, end)`.
pub mod meal_windows {
    /// Breakfast window
    pub const BREAKFAST: (u32, u32) = (6, 11);

    /// Lunch window
    pub const LUNCH: (u32, u32) = (11, 15);

    /// Afternoon snack window
    pub const SNACK: (u32, u32) = (15, 17);

    /// Dinner window
    pub const DINNER: (u32, u32) = (17, 21);
}

/// Output size caps for the selectors and recommenders
pub mod limits {
    /// Quick actions shown on the dashboard
    pub const DASHBOARD_ACTION_CAP: usize = 3;

    /// Quick actions returned by the general API
    pub const ACTION_CAP: usize = 6;

    /// Recent foods returned for quick re-logging
    pub const RECENT_FOODS_CAP: usize = 5;

    /// Quick-log suggestions returned
    pub const QUICK_LOG_CAP: usize = 3;

    /// Occurrences required before a (food, meal) pair becomes a suggestion
    pub const QUICK_LOG_MIN_OCCURRENCES: usize = 3;

    /// Minimum hours between two surfaced prompts
    pub const PROMPT_THROTTLE_HOURS: i64 = 2;
}
