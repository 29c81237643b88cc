//! Edge case and boundary condition tests
//!
//! Verifies the gate against unusual session-store contents and
//! boundary clock values.

use chrono::{DateTime, TimeZone, Utc};
use inspireflow_core::{CooldownGate, SessionStore};

const UNLOCK_KEY: &str = "quote.cooldown.unlock_at";

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

/// A store entry that is not a number is dropped, not propagated.
#[test]
fn test_garbled_store_entry_is_dropped() {
    for garbage in ["", "soon", "12.5", "0x10", " 1700000000000"] {
        let store = SessionStore::new();
        store.set(UNLOCK_KEY, garbage);

        let gate = CooldownGate::new(store.clone());
        assert_eq!(gate.restore_on_load(at(0)), 0, "input: {garbage:?}");
        assert_eq!(store.get(UNLOCK_KEY), None, "input: {garbage:?}");
    }
}

/// An ancient timestamp restores as unlocked and clears itself.
#[test]
fn test_long_expired_entry_clears() {
    let store = SessionStore::new();
    store.set(UNLOCK_KEY, "1000"); // one second past epoch

    let gate = CooldownGate::new(store.clone());
    assert_eq!(gate.restore_on_load(at(0)), 0);
    assert_eq!(store.get(UNLOCK_KEY), None);
}

/// A far-future timestamp (clock skew, tampering) restores as locked;
/// the gate reports it faithfully rather than clamping.
#[test]
fn test_far_future_entry_restores_locked() {
    let store = SessionStore::new();
    let far = at(3600).timestamp_millis();
    store.set(UNLOCK_KEY, far.to_string());

    let gate = CooldownGate::new(store);
    assert_eq!(gate.restore_on_load(at(0)), 3600);
    assert!(gate.is_locked(at(0)));
    assert!(!gate.is_locked(at(3600)));
}

/// Sub-second remainders display as the next whole second.
#[test]
fn test_subsecond_boundary_rounds_up() {
    let store = SessionStore::new();
    let gate = CooldownGate::new(store);
    gate.trigger(at(0), 7);

    let ms = |offset_ms: i64| {
        Utc.timestamp_millis_opt(at(0).timestamp_millis() + offset_ms)
            .unwrap()
    };
    assert_eq!(gate.remaining(ms(6_999)), 1);
    assert_eq!(gate.remaining(ms(7_000)), 0);
    assert_eq!(gate.remaining(ms(7_001)), 0);
}

/// Zero-duration trigger leaves the gate unlocked but still records
/// the instant, so a re-trigger at the same `now` is allowed.
#[test]
fn test_zero_duration_trigger() {
    let gate = CooldownGate::new(SessionStore::new());
    gate.trigger(at(0), 0);

    assert!(!gate.is_locked(at(0)));
    assert_eq!(gate.remaining(at(0)), 0);

    gate.trigger(at(0), 7);
    assert!(gate.is_locked(at(0)));
}
