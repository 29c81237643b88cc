//! Daily quote page - the landing view.
//!
//! Fetches the quote of the day before showing the quote box; the fetcher
//! caches the result for 24 hours, so revisiting this page within the day
//! does not touch the network.

use dioxus::prelude::*;

use crate::components::{Footer, Header, QuoteBox, TodayDate};
use crate::context::use_fetcher;

/// Daily quote page component.
///
/// No refresh control: the quote of the day changes once per day. A failed
/// initial fetch is fatal to this page render since there is no fallback
/// content to show.
#[component]
pub fn Daily() -> Element {
    let fetcher = use_fetcher();

    let initial = use_resource(move || async move { fetcher().fetch_daily().await });

    match &*initial.read_unchecked() {
        Some(Ok(quote)) => rsx! {
            div { class: "page",
                Header {}
                main { class: "page-body",
                    TodayDate {}
                    QuoteBox { initial_quote: quote.clone() }
                }
                Footer {}
            }
        },
        Some(Err(e)) => {
            tracing::error!(error = %e, "failed to load the daily quote");
            rsx! {
                div { class: "page",
                    Header {}
                    main { class: "page-body",
                        p { class: "page-error", "Failed to fetch the daily quote. Please try again later." }
                    }
                    Footer {}
                }
            }
        }
        None => rsx! {
            div { class: "page",
                Header {}
                main { class: "page-body",
                    p { class: "page-loading", "Loading..." }
                }
                Footer {}
            }
        },
    }
}
