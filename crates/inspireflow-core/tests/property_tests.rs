//! Property-based tests for the cooldown gate
//!
//! Uses proptest to verify the gate's invariants under arbitrary clocks
//! and durations.

use chrono::{DateTime, TimeZone, Utc};
use inspireflow_core::{CooldownGate, SessionStore};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Plausible wall-clock instants (2001..2286, second precision)
fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (1_000_000_000i64..10_000_000_000i64)
        .prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

/// Cooldown durations from zero up to a full minute
fn duration_strategy() -> impl Strategy<Value = u64> {
    0u64..60
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Immediately after a trigger, remaining equals the full duration,
    /// and exactly `duration` seconds later the gate is unlocked.
    #[test]
    fn trigger_sets_exact_window(now in instant_strategy(), dur in duration_strategy()) {
        let gate = CooldownGate::new(SessionStore::new());
        gate.trigger(now, dur);

        prop_assert_eq!(gate.remaining(now), dur);
        let expiry = now + chrono::Duration::seconds(dur as i64);
        prop_assert_eq!(gate.remaining(expiry), 0);
        prop_assert!(!gate.is_locked(expiry));
    }

    /// Whenever the gate is locked, trigger is a no-op: the remaining
    /// time observed before and after the call is identical.
    #[test]
    fn trigger_noop_while_locked(
        t0 in instant_strategy(),
        dur in 1u64..60,
        elapsed in 0i64..59,
        retrigger_dur in duration_strategy(),
    ) {
        let gate = CooldownGate::new(SessionStore::new());
        gate.trigger(t0, dur);

        let later = t0 + chrono::Duration::seconds(elapsed);
        let before = gate.remaining(later);
        if gate.is_locked(later) {
            gate.trigger(later, retrigger_dur);
            prop_assert_eq!(gate.remaining(later), before);
        }
    }

    /// The unlock instant never decreases while a lock is active:
    /// remaining at a later clock is never larger than at an earlier one.
    #[test]
    fn remaining_monotonically_decreases(
        t0 in instant_strategy(),
        dur in duration_strategy(),
        e1 in 0i64..120,
        e2 in 0i64..120,
    ) {
        let gate = CooldownGate::new(SessionStore::new());
        gate.trigger(t0, dur);

        let (early, late) = if e1 <= e2 { (e1, e2) } else { (e2, e1) };
        let r_early = gate.remaining(t0 + chrono::Duration::seconds(early));
        let r_late = gate.remaining(t0 + chrono::Duration::seconds(late));
        prop_assert!(r_late <= r_early);
    }

    /// A gate restored from the session store reports the same remaining
    /// time as the in-memory gate it is reconstructing, and restoring
    /// twice at the same instant yields identical values.
    #[test]
    fn restore_matches_in_memory_gate(
        t0 in instant_strategy(),
        dur in duration_strategy(),
        elapsed in 0i64..120,
    ) {
        let store = SessionStore::new();
        let original = CooldownGate::new(store.clone());
        original.trigger(t0, dur);

        let now = t0 + chrono::Duration::seconds(elapsed);
        let restored = CooldownGate::new(store);
        let first = restored.restore_on_load(now);
        prop_assert_eq!(first, original.remaining(now));
        prop_assert_eq!(restored.restore_on_load(now), first);
    }
}
