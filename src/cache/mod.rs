// ABOUTME: Per-day key-value cache abstraction for once-per-day computed values
// ABOUTME: Pluggable backend trait with an in-memory implementation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

//! # Day Cache
//!
//! Small key-value cache for values computed or fetched once per calendar
//! day (the daily quote, for example). Keys embed the date, so entries
//! invalidate themselves by date rollover; nothing is evicted early.
//!
//! The trait is async and pluggable so the embedding app can back it with
//! the platform's persistent key-value store; [`MemoryDayCache`] covers
//! tests and ephemeral use.

use crate::errors::{CoachError, CoachResult};
use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Build the canonical per-day key, e.g. `daily_quote_2026-06-15`
#[must_use]
pub fn day_key(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}_{}", date.format("%Y-%m-%d"))
}

/// Pluggable per-day key-value store
#[async_trait::async_trait]
pub trait DayCache: Send + Sync {
    /// Read and deserialize a value, `None` on miss
    async fn get_raw(&self, key: &str) -> CoachResult<Option<String>>;

    /// Serialize and write a value
    async fn set_raw(&self, key: &str, value: String) -> CoachResult<()>;
}

/// Typed read helper over any [`DayCache`]
///
/// # Errors
/// Propagates cache and deserialization failures.
pub async fn get_typed<T: DeserializeOwned>(
    cache: &dyn DayCache,
    key: &str,
) -> CoachResult<Option<T>> {
    match cache.get_raw(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Typed write helper over any [`DayCache`]
///
/// # Errors
/// Propagates cache and serialization failures.
pub async fn set_typed<T: Serialize + Sync>(
    cache: &dyn DayCache,
    key: &str,
    value: &T,
) -> CoachResult<()> {
    cache.set_raw(key, serde_json::to_string(value)?).await
}

/// In-memory [`DayCache`] backed by a `tokio::sync::RwLock`
#[derive(Debug, Clone, Default)]
pub struct MemoryDayCache {
    store: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryDayCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DayCache for MemoryDayCache {
    async fn get_raw(&self, key: &str) -> CoachResult<Option<String>> {
        Ok(self.store.read().await.get(key).cloned())
    }

    async fn set_raw(&self, key: &str, value: String) -> CoachResult<()> {
        self.store
            .write()
            .await
            .insert(key.to_owned(), value);
        Ok(())
    }
}

/// File-backed [`DayCache`] writing one JSON map per store, for dev tooling
#[derive(Debug, Clone)]
pub struct FileDayCache {
    path: std::path::PathBuf,
    inner: MemoryDayCache,
}

impl FileDayCache {
    /// Open (or create) a cache file
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be read or parsed.
    pub async fn open(path: impl Into<std::path::PathBuf>) -> CoachResult<Self> {
        let path = path.into();
        let inner = MemoryDayCache::new();
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => {
                let entries: HashMap<String, String> = serde_json::from_str(&raw)?;
                let mut store = inner.store.write().await;
                store.extend(entries);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(CoachError::Cache(format!("read {}: {e}", path.display()))),
        }
        Ok(Self { path, inner })
    }

    async fn persist(&self) -> CoachResult<()> {
        let store = self.inner.store.read().await;
        let raw = serde_json::to_string_pretty(&*store)?;
        drop(store);
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| CoachError::Cache(format!("write {}: {e}", self.path.display())))
    }
}

#[async_trait::async_trait]
impl DayCache for FileDayCache {
    async fn get_raw(&self, key: &str) -> CoachResult<Option<String>> {
        self.inner.get_raw(key).await
    }

    async fn set_raw(&self, key: &str, value: String) -> CoachResult<()> {
        self.inner.set_raw(key, value).await?;
        self.persist().await
    }
}
