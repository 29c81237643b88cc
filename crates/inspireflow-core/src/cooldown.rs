//! Cooldown gate for user-triggered quote fetches.
//!
//! The ZenQuotes API allows roughly [`UPSTREAM_REQUEST_BUDGET`] requests per
//! [`UPSTREAM_BUDGET_WINDOW_SECS`] seconds. The gate approximates that budget
//! client-side: after each successful user-triggered fetch it locks for
//! [`COOLDOWN_SECS`] seconds, and while locked, further triggers are rejected.
//!
//! The unlock timestamp lives in two places: a transient in-memory copy for
//! immediate UI feedback, and the [`SessionStore`] so the lock survives page
//! navigation. [`CooldownGate::restore_on_load`] reconciles the two on every
//! page mount.
//!
//! All methods take an explicit `now` so callers (and tests) control the
//! clock. The gate is advisory only; the real limit is enforced upstream.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::session::SessionStore;

/// Seconds the gate stays locked after a triggered fetch
pub const COOLDOWN_SECS: u64 = 7;

/// Advisory upstream budget: requests allowed per window (informational)
pub const UPSTREAM_REQUEST_BUDGET: u32 = 5;

/// Advisory upstream budget: window length in seconds (informational)
pub const UPSTREAM_BUDGET_WINDOW_SECS: u64 = 30;

/// Session store key holding the unlock timestamp (ms since epoch, as string)
const UNLOCK_KEY: &str = "quote.cooldown.unlock_at";

/// Cooldown gate over a session-scoped unlock timestamp.
///
/// Cloneable handle; clones share the same transient state and store.
#[derive(Debug, Clone)]
pub struct CooldownGate {
    store: SessionStore,
    /// Transient copy of the unlock instant, ms since epoch. 0 = never locked.
    unlock_at_ms: Arc<Mutex<i64>>,
}

impl CooldownGate {
    /// Create a gate backed by `store`
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            unlock_at_ms: Arc::new(Mutex::new(0)),
        }
    }

    /// True iff the unlock instant lies strictly in the future
    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        *self.unlock_at_ms.lock() > now.timestamp_millis()
    }

    /// Remaining lock time in whole seconds, rounded up for display.
    /// Zero when unlocked.
    pub fn remaining(&self, now: DateTime<Utc>) -> u64 {
        let left_ms = *self.unlock_at_ms.lock() - now.timestamp_millis();
        if left_ms <= 0 {
            0
        } else {
            (left_ms as u64).div_ceil(1000)
        }
    }

    /// Start a cooldown of `duration_secs` from `now`.
    ///
    /// Silent no-op when already locked: the unlock timestamp is never
    /// moved while a cooldown is active, which keeps it monotonically
    /// non-decreasing for the lifetime of the lock.
    pub fn trigger(&self, now: DateTime<Utc>, duration_secs: u64) {
        let mut unlock = self.unlock_at_ms.lock();
        if *unlock > now.timestamp_millis() {
            tracing::debug!(remaining_ms = *unlock - now.timestamp_millis(), "cooldown trigger ignored while locked");
            return;
        }
        *unlock = now.timestamp_millis() + (duration_secs as i64) * 1000;
        self.store.set(UNLOCK_KEY, unlock.to_string());
        tracing::debug!(unlock_at_ms = *unlock, duration_secs, "cooldown started");
    }

    /// Re-derive the gate state from the session store.
    ///
    /// Called on every page mount. Returns the remaining lock time in whole
    /// seconds (zero when unlocked). Expired or garbled entries are dropped.
    /// Idempotent: calling twice with the same `now` yields the same value.
    pub fn restore_on_load(&self, now: DateTime<Utc>) -> u64 {
        let persisted = match self.store.get(UNLOCK_KEY) {
            Some(raw) => match raw.parse::<i64>() {
                Ok(ms) => ms,
                Err(_) => {
                    tracing::warn!(raw = %raw, "dropping unparseable cooldown entry");
                    self.store.remove(UNLOCK_KEY);
                    return 0;
                }
            },
            None => return 0,
        };

        if persisted > now.timestamp_millis() {
            *self.unlock_at_ms.lock() = persisted;
        } else {
            // Expired naturally; clear so the next mount short-circuits.
            self.store.remove(UNLOCK_KEY);
        }
        self.remaining(now)
    }
}
