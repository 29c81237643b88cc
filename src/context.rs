//! Context providers for InspireFlow.
//!
//! Provides the quote fetcher and cooldown gate to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let fetcher = use_fetcher();
//! let gate = use_cooldown_gate();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use inspireflow_core::{CooldownGate, QuoteFetcher};

/// Shared fetcher type for context.
///
/// The fetcher is internally synchronized (its daily cache sits behind a
/// mutex), so a plain `Arc` is enough for components to share it.
pub type SharedFetcher = Arc<QuoteFetcher>;

/// Hook to access the quote fetcher from context.
pub fn use_fetcher() -> Signal<SharedFetcher> {
    use_context::<Signal<SharedFetcher>>()
}

/// Hook to access the cooldown gate from context.
///
/// The gate is a cloneable handle; every page sees the same session-scoped
/// unlock timestamp.
pub fn use_cooldown_gate() -> Signal<CooldownGate> {
    use_context::<Signal<CooldownGate>>()
}
