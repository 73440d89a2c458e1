// ABOUTME: Unified error type and result alias for the coaching engine
// ABOUTME: Covers API transport, envelope, serialization, and cache failures
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

//! # Error Handling
//!
//! One error type for the whole crate. Rule-engine functions never return
//! errors for bad data (they degrade to conservative defaults); `CoachError`
//! surfaces only from the API boundary and the cache layer, where a
//! user-initiated mutation genuinely failed.

use thiserror::Error;

/// Result alias used throughout the crate
pub type CoachResult<T> = Result<T, CoachError>;

/// Unified error type for API and cache operations
#[derive(Debug, Error)]
pub enum CoachError {
    /// Backend returned `success: false` with an optional message
    #[error("api error: {0}")]
    Api(String),

    /// Transport-level failure talking to the backend
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Payload could not be (de)serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Cache read or write failed
    #[error("cache error: {0}")]
    Cache(String),

    /// Caller supplied input the API cannot accept
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl CoachError {
    /// Best-effort human-readable message for user-facing alerts
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(msg) => msg.clone(),
            Self::Http(_) => "Could not reach the server. Please try again.".into(),
            Self::Serialization(_) | Self::Cache(_) => {
                "Something went wrong on our side. Please try again.".into()
            }
            Self::InvalidInput(msg) => msg.clone(),
        }
    }
}
