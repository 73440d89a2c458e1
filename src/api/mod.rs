// ABOUTME: Async client for the remote food-log backend with uniform response envelope
// ABOUTME: Read paths degrade to safe defaults; user-initiated mutations surface errors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

//! # Backend API Client
//!
//! Thin async layer over the remote backend. Every response is wrapped in
//! the uniform envelope `{ success, data?, error? }`.
//!
//! Error policy mirrors the product behavior: read paths (today's log, the
//! week window, profile) swallow failures, log a warning, and return empty
//! defaults so the intelligence layer always receives a usable snapshot.
//! User-initiated mutations (create entry, delete entry, save profile)
//! return an error for the UI to surface.

use crate::errors::{CoachError, CoachResult};
use crate::models::{DailyFoodLog, FoodLogEntry, MealType};
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use uuid::Uuid;

/// Uniform backend response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the call succeeded server-side
    pub success: bool,
    /// Payload, present on success. The explicit default path keeps serde
    /// from inferring a `T: Default` bound on the `Deserialize` impl.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    /// Human-readable failure reason
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the envelope into a result
    ///
    /// # Errors
    /// `success: false` or a missing payload maps to [`CoachError::Api`].
    pub fn into_result(self) -> CoachResult<T> {
        if self.success {
            self.data
                .ok_or_else(|| CoachError::Api("missing payload in successful response".into()))
        } else {
            Err(CoachError::Api(
                self.error.unwrap_or_else(|| "unknown error".into()),
            ))
        }
    }
}

/// User profile fields the coaching screens read and write
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Stated goal ("lose", "maintain", "gain")
    pub goal: Option<String>,
    /// Weekly training days preference
    pub training_days_per_week: Option<u8>,
}

/// Condensed view of the active training plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlanSummary {
    /// Plan identifier
    pub id: Uuid,
    /// Plan title
    pub title: String,
    /// Weeks in the plan
    pub weeks: u8,
    /// Sessions per week
    pub sessions_per_week: u8,
    /// Current week, 1-based
    pub current_week: u8,
}

/// Today's scheduled workout, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodaysWorkout {
    /// Workout identifier
    pub id: Uuid,
    /// Workout title
    pub title: String,
    /// Estimated duration in minutes
    pub duration_minutes: u32,
    /// Whether the user already completed it
    pub completed: bool,
}

/// One personal-record entry on the records screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecordEntry {
    /// Exercise name
    pub exercise: String,
    /// Best value (unit depends on the exercise)
    pub value: f64,
    /// Unit label ("kg", "reps", "km")
    pub unit: String,
    /// When the record was set
    pub achieved_at: DateTime<Local>,
}

/// Payload for logging a new entry
#[derive(Debug, Clone, Serialize)]
pub struct NewFoodLogEntry {
    /// Food name
    pub name: String,
    /// Serving size
    pub serving_size: f64,
    /// Serving unit
    pub serving_unit: String,
    /// Kilocalories
    pub calories: f64,
    /// Protein grams
    pub protein: f64,
    /// Carb grams
    pub carbs: f64,
    /// Fat grams
    pub fat: f64,
    /// Meal the entry belongs to
    pub meal_type: MealType,
}

/// Async client for the food-log backend
#[derive(Debug, Clone)]
pub struct CoachApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CoachApiClient {
    /// Create a client against `base_url`
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: Url) -> CoachResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> CoachResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| CoachError::InvalidInput(format!("bad endpoint {path}: {e}")))
    }

    async fn get_enveloped<T: serde::de::DeserializeOwned>(&self, path: &str) -> CoachResult<T> {
        let url = self.endpoint(path)?;
        let envelope: ApiResponse<T> = self.http.get(url).send().await?.json().await?;
        envelope.into_result()
    }

    /// Today's log; degrades to `None` on any failure
    pub async fn get_today_log(&self) -> Option<DailyFoodLog> {
        match self.get_enveloped("logs/today").await {
            Ok(log) => Some(log),
            Err(e) => {
                tracing::warn!("today log fetch degraded to empty: {e}");
                None
            }
        }
    }

    /// The 7-day window ending `end_date`; degrades to an empty vec
    pub async fn get_week_logs(&self, end_date: NaiveDate) -> Vec<DailyFoodLog> {
        let path = format!("logs/week?end={}", end_date.format("%Y-%m-%d"));
        match self.get_enveloped(&path).await {
            Ok(logs) => logs,
            Err(e) => {
                tracing::warn!("week log fetch degraded to empty: {e}");
                Vec::new()
            }
        }
    }

    /// Profile fields; degrades to `None`
    pub async fn get_profile(&self) -> Option<Profile> {
        match self.get_enveloped("profile").await {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!("profile fetch degraded to empty: {e}");
                None
            }
        }
    }

    /// Active training plan summary; degrades to `None`
    pub async fn get_training_plan(&self) -> Option<TrainingPlanSummary> {
        match self.get_enveloped("training/plan").await {
            Ok(plan) => Some(plan),
            Err(e) => {
                tracing::warn!("training plan fetch degraded to empty: {e}");
                None
            }
        }
    }

    /// Today's workout; degrades to `None`
    pub async fn get_todays_workout(&self) -> Option<TodaysWorkout> {
        match self.get_enveloped("training/today").await {
            Ok(workout) => Some(workout),
            Err(e) => {
                tracing::warn!("workout fetch degraded to empty: {e}");
                None
            }
        }
    }

    /// Personal records; degrades to an empty vec
    pub async fn get_personal_records(&self) -> Vec<PersonalRecordEntry> {
        match self.get_enveloped("training/records").await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("personal records fetch degraded to empty: {e}");
                Vec::new()
            }
        }
    }

    /// Save profile fields. User-initiated: failures surface to the caller.
    ///
    /// # Errors
    /// Transport failures and `success: false` envelopes.
    pub async fn update_profile(&self, profile: &Profile) -> CoachResult<Profile> {
        let url = self.endpoint("profile")?;
        let envelope: ApiResponse<Profile> = self
            .http
            .post(url)
            .json(profile)
            .send()
            .await?
            .json()
            .await?;
        envelope.into_result()
    }

    /// Log a new entry. User-initiated: failures surface to the caller.
    ///
    /// # Errors
    /// Transport failures and `success: false` envelopes.
    pub async fn create_entry(&self, entry: &NewFoodLogEntry) -> CoachResult<FoodLogEntry> {
        let url = self.endpoint("logs/entries")?;
        let envelope: ApiResponse<FoodLogEntry> = self
            .http
            .post(url)
            .json(entry)
            .send()
            .await?
            .json()
            .await?;
        envelope.into_result()
    }

    /// Delete an entry by id. User-initiated: failures surface to the caller.
    ///
    /// # Errors
    /// Transport failures and `success: false` envelopes.
    pub async fn delete_entry(&self, id: Uuid) -> CoachResult<()> {
        let url = self.endpoint(&format!("logs/entries/{id}"))?;
        let envelope: ApiResponse<serde_json::Value> =
            self.http.delete(url).send().await?.json().await?;
        envelope.into_result().map(|_| ())
    }
}
