use std::sync::Arc;

use dioxus::prelude::*;
use inspireflow_core::{CooldownGate, QuoteFetcher, SessionStore};

use crate::context::SharedFetcher;
use crate::pages::{Daily, Random};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Daily quote page (static quote of the day)
/// - `/random` - Random quote page with the "Get new quote" button
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Daily {},
    #[route("/random")]
    Random {},
}

/// Root application component.
///
/// Provides global styles, the quote fetcher, the session-scoped cooldown
/// gate, and routing. The session store lives here so the cooldown survives
/// navigation between pages for as long as the app runs.
#[component]
pub fn App() -> Element {
    let fetcher: Signal<SharedFetcher> =
        use_signal(|| Arc::new(QuoteFetcher::new(crate::get_api_base())));
    let gate: Signal<CooldownGate> = use_signal(|| CooldownGate::new(SessionStore::new()));

    // Provide fetcher and gate context to all child components
    use_context_provider(|| fetcher);
    use_context_provider(|| gate);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
