//! Quote Box Component
//!
//! Displays the current quote and author. When `show_button` is set it also
//! renders the "Get new quote" control, which fetches a random quote through
//! the cooldown gate.
//!
//! The box is a small state machine held in signals:
//! - Idle: not loading, no cooldown - the button is enabled
//! - Loading: a fetch is in flight - the button is disabled
//! - Locked: cooldown > 0 - the button shows "Wait Ns" and ticks down
//!
//! A failed fetch keeps the old quote, surfaces a dismissible error banner
//! and returns to Idle without consuming cooldown.

use chrono::Utc;
use dioxus::prelude::*;
use inspireflow_core::{Quote, COOLDOWN_SECS};

use crate::context::{use_cooldown_gate, use_fetcher};

#[derive(Props, Clone, PartialEq)]
pub struct QuoteBoxProps {
    /// The quote shown before the user refreshes anything
    pub initial_quote: Quote,
    /// Whether to render the "Get new quote" button
    #[props(default = false)]
    pub show_button: bool,
}

/// Quote Box component
#[component]
pub fn QuoteBox(props: QuoteBoxProps) -> Element {
    let fetcher = use_fetcher();
    let gate = use_cooldown_gate();

    // State
    let mut quote = use_signal(|| props.initial_quote.clone());
    let mut loading = use_signal(|| false);
    let mut error: Signal<Option<String>> = use_signal(|| None);
    // Seed the countdown from the session store, so a cooldown started on
    // another page (or before a navigation) is still honored here.
    let mut cooldown = use_signal(|| gate().restore_on_load(Utc::now()));

    // Countdown tick: while locked, re-read the gate once per second.
    // Each run schedules a single sleep; the spawned task is scoped to this
    // component, so teardown cancels it and no timer outlives the box.
    use_effect(move || {
        if cooldown() > 0 {
            spawn(async move {
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                cooldown.set(gate().remaining(Utc::now()));
            });
        }
    });

    // Refresh handler: only acts from Idle. The button is disabled outside
    // Idle, but the gate is checked again here so a locked gate never lets
    // a fetch reach the network.
    let on_new_quote = move |_| {
        if loading() {
            return;
        }
        let now = Utc::now();
        if gate().is_locked(now) {
            return;
        }

        loading.set(true);
        error.set(None);

        spawn(async move {
            match fetcher().fetch_random().await {
                Ok(fresh) => {
                    quote.set(fresh);
                    // Only a successful fetch consumes cooldown.
                    let now = Utc::now();
                    gate().trigger(now, COOLDOWN_SECS);
                    cooldown.set(gate().remaining(now));
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to fetch a new quote");
                    error.set(Some("Failed to fetch a new quote.".to_string()));
                }
            }
            loading.set(false);
        });
    };

    let button_label = if loading() {
        "Loading...".to_string()
    } else if cooldown() > 0 {
        format!("Wait {}s", cooldown())
    } else {
        "Get new quote".to_string()
    };

    rsx! {
        div { class: "quote-box",
            p { class: "quote-text", "{quote().text}" }
            hr { class: "quote-divider" }
            p { class: "quote-author", "{quote().author}" }

            if let Some(msg) = error() {
                div { class: "quote-error", role: "alert",
                    span { "{msg}" }
                    button {
                        r#type: "button",
                        class: "quote-error-dismiss",
                        "aria-label": "Dismiss error",
                        onclick: move |_| error.set(None),
                        "\u{2715}"
                    }
                }
            }

            if props.show_button {
                button {
                    r#type: "button",
                    class: if loading() || cooldown() > 0 { "btn-new-quote disabled" } else { "btn-new-quote" },
                    disabled: loading() || cooldown() > 0,
                    onclick: on_new_quote,
                    "{button_label}"
                }
            }
        }
    }
}
