// ABOUTME: Service layer for once-per-day external values
// ABOUTME: Currently hosts the daily quote read-through cache
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

/// Daily motivational quote with per-day caching
pub mod daily_quote;

pub use daily_quote::{DailyQuote, DailyQuoteService, QuoteSource};
