//! Quote fetcher for the ZenQuotes API.
//!
//! Two modes: a daily quote cached in-process for 24 hours, and a random
//! quote that hits the network on every call. Both endpoints answer with a
//! single-element JSON array of `{"q", "a"}` objects.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::error::{QuoteError, QuoteResult};
use crate::types::Quote;

/// Default upstream API base
pub const ZEN_QUOTES_BASE_URL: &str = "https://zenquotes.io/api";

/// How long a fetched daily quote stays fresh, in seconds (24 hours)
pub const DAILY_CACHE_TTL_SECS: i64 = 86_400;

/// A daily quote together with the instant it was fetched
#[derive(Debug, Clone)]
struct CachedDaily {
    quote: Quote,
    fetched_at: DateTime<Utc>,
}

impl CachedDaily {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        (now - self.fetched_at).num_seconds() < DAILY_CACHE_TTL_SECS
    }
}

/// HTTP client for the upstream quote API.
///
/// Holds a `reqwest::Client` (connection pooling) and the daily-quote cache.
#[derive(Debug)]
pub struct QuoteFetcher {
    client: reqwest::Client,
    base_url: String,
    daily: Mutex<Option<CachedDaily>>,
}

impl QuoteFetcher {
    /// Create a fetcher against `base_url` (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            daily: Mutex::new(None),
        }
    }

    /// Fetch the "quote of the day".
    ///
    /// The result is cached for [`DAILY_CACHE_TTL_SECS`]; repeated calls
    /// within that window return the cached value without touching the
    /// network. A stale-but-cached value surviving slightly past midnight
    /// is accepted by design.
    pub async fn fetch_daily(&self) -> QuoteResult<Quote> {
        let now = Utc::now();
        if let Some(cached) = self.daily.lock().as_ref() {
            if cached.is_fresh(now) {
                tracing::debug!("serving daily quote from cache");
                return Ok(cached.quote.clone());
            }
        }

        let quote = self.fetch("today").await?;
        *self.daily.lock() = Some(CachedDaily {
            quote: quote.clone(),
            fetched_at: now,
        });
        Ok(quote)
    }

    /// Fetch a random quote. Never cached; every call hits the network.
    pub async fn fetch_random(&self) -> QuoteResult<Quote> {
        self.fetch("random").await
    }

    async fn fetch(&self, endpoint: &str) -> QuoteResult<Quote> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(%url, "fetching quote");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "upstream returned an error status");
            return Err(QuoteError::Upstream(status.as_u16()));
        }

        let body = response.text().await?;
        parse_quote_body(&body)
    }
}

/// Parse a quote endpoint body: a single-element array of quote objects.
fn parse_quote_body(body: &str) -> QuoteResult<Quote> {
    let quotes: Vec<Quote> =
        serde_json::from_str(body).map_err(|e| QuoteError::Parse(e.to_string()))?;
    quotes
        .into_iter()
        .next()
        .ok_or_else(|| QuoteError::Parse("empty quote array".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_parse_single_element_array() {
        let quote = parse_quote_body(r#"[{"q": "Be here now.", "a": "Ram Dass"}]"#).unwrap();
        assert_eq!(quote.text, "Be here now.");
        assert_eq!(quote.author, "Ram Dass");
    }

    #[test]
    fn test_parse_takes_first_element() {
        let quote =
            parse_quote_body(r#"[{"q": "First.", "a": "A"}, {"q": "Second.", "a": "B"}]"#)
                .unwrap();
        assert_eq!(quote.text, "First.");
    }

    #[test]
    fn test_parse_empty_array_fails() {
        let err = parse_quote_body("[]").unwrap_err();
        assert!(matches!(err, QuoteError::Parse(_)));
    }

    #[test]
    fn test_parse_non_array_fails() {
        // ZenQuotes answers rate-limited callers with a bare object
        let err = parse_quote_body(r#"{"error": "Too many requests."}"#).unwrap_err();
        assert!(matches!(err, QuoteError::Parse(_)));
    }

    #[test]
    fn test_parse_missing_fields_fails() {
        let err = parse_quote_body(r#"[{"q": "No author here"}]"#).unwrap_err();
        assert!(matches!(err, QuoteError::Parse(_)));
    }

    #[test]
    fn test_daily_cache_freshness_window() {
        let fetched_at = Utc::now();
        let cached = CachedDaily {
            quote: Quote {
                text: "Cached.".to_string(),
                author: "Nobody".to_string(),
            },
            fetched_at,
        };

        assert!(cached.is_fresh(fetched_at));
        assert!(cached.is_fresh(fetched_at + Duration::seconds(DAILY_CACHE_TTL_SECS - 1)));
        assert!(!cached.is_fresh(fetched_at + Duration::seconds(DAILY_CACHE_TTL_SECS)));
    }
}
