// ABOUTME: Intelligence layer: stateless analyzers over daily/weekly food logs
// ABOUTME: Re-exports every engine's entry points and output record types
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

//! # Intelligence Module
//!
//! Deterministic, pure analyzers that classify a user's logging history into
//! streaks, trends, milestones, and time-of-day-triggered suggestions. All of
//! them consume the same two shapes (one day's log, a 7-day window of logs),
//! never mutate their input, and degrade to conservative defaults on missing
//! or malformed data rather than returning errors.

/// Week calendar, streaks, grace windows, and freeze economics
pub mod calendar;

/// Macro adherence percentages, banding, and week-over-week trend
pub mod adherence;

/// Prioritized quick actions and the time-of-day prompt
pub mod actions;

/// Exact-match milestone detection
pub mod milestones;

/// Coach message generation with injectable randomness
pub mod messages;

/// Recency/frequency food suggestions for quick re-logging
pub mod recommendations;

/// Meal reminder schedule computation
pub mod reminders;

pub use actions::{
    current_prompt, select_actions, select_dashboard_actions, should_throttle, QuickAction,
    TimeBasedPrompt,
};
pub use adherence::{
    analyze_week, day_adherence, is_perfect_day, AdherenceBand, DayAdherence, WeekTrend,
    WeeklyTrend,
};
pub use calendar::{
    calculate_streak, freezes_available, generate_week_calendar, streak_status, CalendarDay,
    StreakStatus,
};
pub use messages::{daily_feedback, trend_feedback, CoachMessage, MessageTone};
pub use milestones::{detect_milestones, Milestone, MilestoneKind};
pub use recommendations::{
    get_quick_log_suggestions, get_recent_foods, QuickLogSuggestion, RecentFood,
};
pub use reminders::{plan_reminders, MealReminder, ReminderKind};
