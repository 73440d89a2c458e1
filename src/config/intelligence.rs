// ABOUTME: Tunable knobs for the streak, adherence, action, and reminder engines
// ABOUTME: Serde-deserializable with validated environment overrides and sane defaults
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

//! # Intelligence Configuration
//!
//! Every analyzer reads its thresholds from here rather than hard-coding
//! them. Defaults mirror the product constants in [`crate::constants`];
//! deployments can override individual knobs via `MACROCOACH_*` environment
//! variables. The validated global is initialized once and shared.

use crate::constants::{adherence, limits, meal_windows, streaks};
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration loading and validation failures
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric knob is outside its meaningful range
    #[error("value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// An environment override could not be parsed
    #[error("invalid environment value for {0}")]
    InvalidEnvValue(&'static str),
}

/// Streak engine tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakConfig {
    /// Last-entry local hour on the prior day that earns a grace window
    pub grace_earn_hour: u32,
    /// Local hour (exclusive) at which an earned grace window expires
    pub grace_expiry_hour: u32,
    /// Consecutive streak days per earned freeze
    pub freeze_earn_interval_days: u32,
    /// Usable freezes per rolling month
    pub freeze_monthly_cap: u32,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            grace_earn_hour: streaks::GRACE_EARN_HOUR,
            grace_expiry_hour: streaks::GRACE_EXPIRY_HOUR,
            freeze_earn_interval_days: streaks::FREEZE_EARN_INTERVAL_DAYS,
            freeze_monthly_cap: streaks::FREEZE_MONTHLY_CAP,
        }
    }
}

/// Adherence banding and trend tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdherenceConfig {
    /// Lower bound of the on-target band, percent (inclusive)
    pub on_target_min: f64,
    /// Upper bound of the on-target band, percent (inclusive)
    pub on_target_max: f64,
    /// Upper bound of the slightly-over band, percent (inclusive)
    pub slightly_over_max: f64,
    /// Lower bound of the slightly-under band, percent (inclusive)
    pub slightly_under_min: f64,
    /// Logged days required before a week trend is classified
    pub min_days_for_trend: usize,
}

impl Default for AdherenceConfig {
    fn default() -> Self {
        Self {
            on_target_min: adherence::ON_TARGET_MIN,
            on_target_max: adherence::ON_TARGET_MAX,
            slightly_over_max: adherence::SLIGHTLY_OVER_MAX,
            slightly_under_min: adherence::SLIGHTLY_UNDER_MIN,
            min_days_for_trend: adherence::MIN_DAYS_FOR_TREND,
        }
    }
}

/// Quick-action selection tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionSelectorConfig {
    /// Cap applied by the dashboard consumer
    pub dashboard_cap: usize,
    /// Cap applied by the general API
    pub api_cap: usize,
    /// Minimum hours between two surfaced prompts
    pub prompt_throttle_hours: i64,
}

impl Default for ActionSelectorConfig {
    fn default() -> Self {
        Self {
            dashboard_cap: limits::DASHBOARD_ACTION_CAP,
            api_cap: limits::ACTION_CAP,
            prompt_throttle_hours: limits::PROMPT_THROTTLE_HOURS,
        }
    }
}

/// Meal reminder schedule tunables. Hours are local, one nominal reminder
/// hour per meal window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Nominal breakfast reminder hour
    pub breakfast_hour: u32,
    /// Nominal lunch reminder hour
    pub lunch_hour: u32,
    /// Nominal dinner reminder hour
    pub dinner_hour: u32,
    /// Evening summary hour, fires when fewer than `summary_min_entries` exist
    pub summary_hour: u32,
    /// Entry count below which the evening summary fires
    pub summary_min_entries: usize,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            breakfast_hour: meal_windows::BREAKFAST.0 + 2,
            lunch_hour: meal_windows::LUNCH.0 + 1,
            dinner_hour: meal_windows::DINNER.0 + 1,
            summary_hour: 20,
            summary_min_entries: 2,
        }
    }
}

/// Top-level configuration for the intelligence layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Streak engine knobs
    pub streak: StreakConfig,
    /// Adherence analyzer knobs
    pub adherence: AdherenceConfig,
    /// Action selector knobs
    pub actions: ActionSelectorConfig,
    /// Reminder planner knobs
    pub reminders: ReminderConfig,
}

static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

impl IntelligenceConfig {
    /// Shared global configuration, loaded once. Falls back to defaults if
    /// environment overrides are malformed.
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment overrides on top of defaults
    ///
    /// # Errors
    /// Returns an error if an override cannot be parsed or fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(hour) = parse_env_u32("MACROCOACH_GRACE_EARN_HOUR")? {
            config.streak.grace_earn_hour = hour;
        }
        if let Some(hour) = parse_env_u32("MACROCOACH_GRACE_EXPIRY_HOUR")? {
            config.streak.grace_expiry_hour = hour;
        }
        if let Some(cap) = parse_env_u32("MACROCOACH_FREEZE_MONTHLY_CAP")? {
            config.streak.freeze_monthly_cap = cap;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate band ordering and hour ranges
    ///
    /// # Errors
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.adherence.on_target_min >= self.adherence.on_target_max {
            return Err(ConfigError::ValueOutOfRange(
                "on_target_min must be below on_target_max",
            ));
        }
        if self.adherence.slightly_under_min >= self.adherence.on_target_min {
            return Err(ConfigError::ValueOutOfRange(
                "slightly_under_min must be below on_target_min",
            ));
        }
        if self.adherence.slightly_over_max <= self.adherence.on_target_max {
            return Err(ConfigError::ValueOutOfRange(
                "slightly_over_max must be above on_target_max",
            ));
        }
        if self.streak.grace_earn_hour > 23 || self.streak.grace_expiry_hour > 23 {
            return Err(ConfigError::ValueOutOfRange("grace hours must be 0-23"));
        }
        Ok(())
    }
}

fn parse_env_u32(key: &'static str) -> Result<Option<u32>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse::<u32>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvValue(key)),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn band_ordering_is_enforced() {
        let mut config = IntelligenceConfig::default();
        config.adherence.on_target_min = 110.0;
        assert!(config.validate().is_err());
    }
}
