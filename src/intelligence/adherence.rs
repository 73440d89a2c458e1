// ABOUTME: Macro adherence percentages, band classification, and week trend detection
// ABOUTME: The five adherence bands here are the canonical ones used by all feedback
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

//! # Adherence & Trend Analyzer
//!
//! Computes per-macro adherence (`100 × total / target`), classifies it into
//! the five canonical bands, and detects week-over-week trend direction from
//! a 7-day window. Calories and protein are the primary signals: a day's
//! overall adherence is the mean of those two.
//!
//! A macro target of zero (or below) means "no target set" for that macro:
//! its adherence is `None` and banding is skipped, never an infinity.

use crate::config::AdherenceConfig;
use crate::constants::adherence::WEEK_DAYS;
use crate::models::{DailyFoodLog, MacroTotals};
use serde::{Deserialize, Serialize};

/// The five canonical adherence bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdherenceBand {
    /// Below 85% of target
    WayUnder,
    /// 85% to just under 95%
    SlightlyUnder,
    /// 95% to 105% inclusive
    OnTarget,
    /// Just over 105% up to 115%
    SlightlyOver,
    /// Above 115%
    WayOver,
}

impl AdherenceBand {
    /// Classify an adherence percentage into its band
    #[must_use]
    pub fn classify(percent: f64, config: &AdherenceConfig) -> Self {
        if percent < config.slightly_under_min {
            Self::WayUnder
        } else if percent < config.on_target_min {
            Self::SlightlyUnder
        } else if percent <= config.on_target_max {
            Self::OnTarget
        } else if percent <= config.slightly_over_max {
            Self::SlightlyOver
        } else {
            Self::WayOver
        }
    }
}

/// Week-over-week trend direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekTrend {
    /// No days logged in the window
    New,
    /// Logging frequency holding level (or too few days to call it)
    Steady,
    /// More logged days in the back half of the window
    Improving,
    /// Fewer logged days in the back half of the window
    Declining,
}

/// Per-day adherence breakdown. `None` fields mean the target was unset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayAdherence {
    /// The day this breakdown covers
    pub date: chrono::NaiveDate,
    /// Calorie adherence percent
    pub calories: Option<f64>,
    /// Protein adherence percent
    pub protein: Option<f64>,
    /// Carb adherence percent
    pub carbs: Option<f64>,
    /// Fat adherence percent
    pub fat: Option<f64>,
    /// Mean of calorie and protein adherence (the primary signals)
    pub overall: Option<f64>,
}

/// Week-level analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrend {
    /// Days in the window with at least one entry
    pub days_logged: usize,
    /// `100 × days_logged / 7`
    pub adherence_rate: f64,
    /// Week-over-week trend direction
    pub trend: WeekTrend,
    /// The logged day whose overall adherence sits closest to 100%
    pub best_day: Option<DayAdherence>,
    /// Breakdown for every logged day, window order
    pub days: Vec<DayAdherence>,
}

/// Adherence percent for one macro, or `None` when the target is unset
fn macro_adherence(total: f64, target: f64) -> Option<f64> {
    if target > 0.0 {
        Some(100.0 * total / target)
    } else {
        None
    }
}

/// Full adherence breakdown for one day
#[must_use]
pub fn day_adherence(log: &DailyFoodLog) -> DayAdherence {
    let calories = macro_adherence(log.totals.calories, log.targets.calories);
    let protein = macro_adherence(log.totals.protein, log.targets.protein);
    let overall = match (calories, protein) {
        (Some(c), Some(p)) => Some(f64::midpoint(c, p)),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    };
    DayAdherence {
        date: log.date,
        calories,
        protein,
        carbs: macro_adherence(log.totals.carbs, log.targets.carbs),
        fat: macro_adherence(log.totals.fat, log.targets.fat),
        overall,
    }
}

/// Whether all four macros of a day sit in the on-target band simultaneously.
/// Any unset target disqualifies the day.
#[must_use]
pub fn is_perfect_day(totals: &MacroTotals, targets: &MacroTotals, config: &AdherenceConfig) -> bool {
    [
        macro_adherence(totals.calories, targets.calories),
        macro_adherence(totals.protein, targets.protein),
        macro_adherence(totals.carbs, targets.carbs),
        macro_adherence(totals.fat, targets.fat),
    ]
    .iter()
    .all(|adherence| {
        adherence.is_some_and(|pct| {
            AdherenceBand::classify(pct, config) == AdherenceBand::OnTarget
        })
    })
}

/// Analyze a 7-day window of logs into a [`WeeklyTrend`].
///
/// Trend classification needs at least `min_days_for_trend` logged days; it
/// compares the logged-day counts of the first three window slots against the
/// last three, a 3-vs-3 split that leaves the middle day out entirely.
/// Zero days yields `New`; one to three yields `Steady`. An empty or
/// missing window degrades to the all-zero result rather than erroring.
#[must_use]
pub fn analyze_week(week_logs: &[DailyFoodLog], config: &AdherenceConfig) -> WeeklyTrend {
    let days: Vec<DayAdherence> = week_logs
        .iter()
        .filter(|l| l.has_entries())
        .map(day_adherence)
        .collect();
    let days_logged = days.len();
    // Safe: days_logged is at most WEEK_DAYS
    let adherence_rate = 100.0 * days_logged as f64 / WEEK_DAYS as f64;

    let trend = if days_logged == 0 {
        WeekTrend::New
    } else if days_logged < config.min_days_for_trend {
        WeekTrend::Steady
    } else {
        let logged_in = |range: std::ops::Range<usize>| {
            week_logs
                .iter()
                .enumerate()
                .filter(|(i, l)| range.contains(i) && l.has_entries())
                .count()
        };
        let pivot = WEEK_DAYS / 2;
        let first_half = logged_in(0..pivot);
        let second_half = logged_in(pivot + 1..WEEK_DAYS);
        match second_half.cmp(&first_half) {
            std::cmp::Ordering::Greater => WeekTrend::Improving,
            std::cmp::Ordering::Less => WeekTrend::Declining,
            std::cmp::Ordering::Equal => WeekTrend::Steady,
        }
    };

    let best_day = days
        .iter()
        .filter(|d| d.overall.is_some())
        .min_by(|a, b| {
            let dist =
                |d: &DayAdherence| (d.overall.unwrap_or(f64::MAX) - 100.0).abs();
            dist(a).total_cmp(&dist(b))
        })
        .copied();

    if days_logged == 0 {
        tracing::debug!("analyze_week: empty window, returning new-user trend");
    }

    WeeklyTrend {
        days_logged,
        adherence_rate,
        trend,
        best_day,
        days,
    }
}
