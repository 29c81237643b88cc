//! InspireFlow Core Library
//!
//! Quote fetching and cooldown gating for the ZenQuotes API.
//!
//! ## Overview
//!
//! InspireFlow shows a daily quote and lets the user request random quotes.
//! The upstream API allows roughly 5 requests per 30 seconds, so every
//! user-triggered fetch passes through a [`CooldownGate`]: a small piece of
//! stateful logic that locks for a fixed window after each successful fetch
//! and persists its unlock timestamp in a session-scoped store so the lock
//! survives page navigation.
//!
//! The gate is advisory. The real rate limit is enforced upstream; the gate
//! is a courtesy mechanism, not a correctness guarantee.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::Utc;
//! use inspireflow_core::{CooldownGate, QuoteFetcher, SessionStore, COOLDOWN_SECS};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = QuoteFetcher::new(inspireflow_core::ZEN_QUOTES_BASE_URL);
//!     let gate = CooldownGate::new(SessionStore::new());
//!
//!     let quote = fetcher.fetch_daily().await?;
//!     println!("\"{}\" — {}", quote.text, quote.author);
//!
//!     let now = Utc::now();
//!     if !gate.is_locked(now) {
//!         let fresh = fetcher.fetch_random().await?;
//!         gate.trigger(now, COOLDOWN_SECS);
//!         println!("\"{}\" — {}", fresh.text, fresh.author);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cooldown;
pub mod error;
pub mod fetcher;
pub mod session;
pub mod types;

// Re-exports
pub use cooldown::{
    CooldownGate, COOLDOWN_SECS, UPSTREAM_BUDGET_WINDOW_SECS, UPSTREAM_REQUEST_BUDGET,
};
pub use error::{QuoteError, QuoteResult};
pub use fetcher::{QuoteFetcher, DAILY_CACHE_TTL_SECS, ZEN_QUOTES_BASE_URL};
pub use session::SessionStore;
pub use types::Quote;
