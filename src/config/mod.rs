// ABOUTME: Configuration module for the coaching engine
// ABOUTME: Groups per-engine tunables behind a single IntelligenceConfig
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

/// Per-engine tunables with environment overrides
pub mod intelligence;

pub use intelligence::{
    ActionSelectorConfig, AdherenceConfig, ConfigError, IntelligenceConfig, ReminderConfig,
    StreakConfig,
};
