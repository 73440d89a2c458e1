// ABOUTME: Library entry point for the Macrocoach nutrition coaching engine
// ABOUTME: Pure analyzers over food-log history plus a thin backend/cache layer
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

#![deny(unsafe_code)]

//! # Macrocoach
//!
//! Client-side intelligence for a nutrition coaching app: deterministic
//! analyzers that turn a daily/weekly food-log history into streaks,
//! adherence trends, milestones, contextual prompts, and quick-log
//! suggestions ready for a dashboard to render.
//!
//! ## Design
//!
//! - **Pure core**: every analyzer is a synchronous function over an
//!   externally-owned, read-only snapshot; no I/O, no shared mutable state
//! - **Graceful degradation**: missing or malformed input yields conservative
//!   defaults (zero streak, empty lists, no prompt), never a panic or error
//! - **Injectable time and randomness**: wall-clock branching goes through
//!   [`clock::TimeProvider`] and message selection through a caller-supplied
//!   RNG, so every hour boundary and phrase pick is testable
//!
//! ## Quick start
//!
//! ```
//! use macrocoach::clock::FixedClock;
//! use macrocoach::config::IntelligenceConfig;
//! use macrocoach::intelligence::{analyze_week, calculate_streak, generate_week_calendar};
//!
//! let config = IntelligenceConfig::default();
//! let clock = FixedClock::at(2026, 6, 15, 9, 0);
//! let week = Vec::new(); // normally fetched from the backend
//!
//! let calendar = generate_week_calendar(&week, &clock, &config.streak);
//! assert_eq!(calendar.len(), 7);
//! assert_eq!(calculate_streak(&calendar), 0);
//!
//! let trend = analyze_week(&week, &config.adherence);
//! assert_eq!(trend.days_logged, 0);
//! ```

/// Backend API client and response envelope
pub mod api;

/// Per-day key-value cache for once-per-day values
pub mod cache;

/// Injectable current-time provider
pub mod clock;

/// Engine configuration and validation
pub mod config;

/// Fixed product constants (bands, milestone tables, hour windows)
pub mod constants;

/// Unified error handling
pub mod errors;

/// Stateless analyzers over food-log history
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Core data models
pub mod models;

/// Once-per-day external value services
pub mod services;

pub use errors::{CoachError, CoachResult};
pub use models::{DailyFoodLog, FoodLogEntry, MacroTotals, MealType};
