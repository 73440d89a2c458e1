// ABOUTME: Once-per-day motivational quote with read-through day cache
// ABOUTME: Cache key rolls over by date; a miss fetches and writes through
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

//! # Daily Quote Service
//!
//! The dashboard shows one motivational quote per calendar day. The quote is
//! cached under `daily_quote_<YYYY-MM-DD>`; the key's date component is the
//! only invalidation mechanism. On a cache miss the configured source is
//! fetched and the result written through. A fetch failure falls back to a
//! built-in quote so the dashboard never renders an empty card.

use crate::cache::{day_key, get_typed, set_typed, DayCache};
use crate::clock::TimeProvider;
use crate::errors::CoachResult;
use serde::{Deserialize, Serialize};
use url::Url;

const CACHE_PREFIX: &str = "daily_quote";

const FALLBACK_QUOTE: (&str, &str) = (
    "Small daily choices beat big occasional efforts.",
    "Macrocoach",
);

/// A quote and its author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyQuote {
    /// Quote text
    pub quote: String,
    /// Attributed author
    pub author: String,
}

/// Where fresh quotes come from
#[async_trait::async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch a fresh quote
    async fn fetch(&self) -> CoachResult<DailyQuote>;
}

/// HTTP-backed quote source
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpQuoteSource {
    /// Create a source against `endpoint`
    #[must_use]
    pub fn new(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }
}

#[async_trait::async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch(&self) -> CoachResult<DailyQuote> {
        let quote = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await?
            .json()
            .await?;
        Ok(quote)
    }
}

/// Read-through daily quote service
pub struct DailyQuoteService<C, S> {
    cache: C,
    source: S,
}

impl<C: DayCache, S: QuoteSource> DailyQuoteService<C, S> {
    /// Build the service from a cache and a source
    #[must_use]
    pub const fn new(cache: C, source: S) -> Self {
        Self { cache, source }
    }

    /// Today's quote: cached copy if present, otherwise fetch and write
    /// through. Falls back to the built-in quote when both cache and source
    /// fail; this path never errors.
    pub async fn today(&self, clock: &dyn TimeProvider) -> DailyQuote {
        let key = day_key(CACHE_PREFIX, clock.today());

        match get_typed::<DailyQuote>(&self.cache, &key).await {
            Ok(Some(cached)) => return cached,
            Ok(None) => {}
            Err(e) => tracing::warn!("quote cache read failed: {e}"),
        }

        match self.source.fetch().await {
            Ok(fresh) => {
                if let Err(e) = set_typed(&self.cache, &key, &fresh).await {
                    tracing::warn!("quote write-through failed: {e}");
                }
                fresh
            }
            Err(e) => {
                tracing::warn!("quote fetch failed, using fallback: {e}");
                DailyQuote {
                    quote: FALLBACK_QUOTE.0.into(),
                    author: FALLBACK_QUOTE.1.into(),
                }
            }
        }
    }
}
