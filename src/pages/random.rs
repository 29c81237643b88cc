//! Random quote page.
//!
//! Seeds the quote box with a fresh random quote and enables the
//! "Get new quote" button. Every refresh goes through the cooldown gate.

use dioxus::prelude::*;

use crate::components::{Footer, Header, QuoteBox};
use crate::context::use_fetcher;

/// Random quote page component.
///
/// The initial quote is fetched uncached before the box renders; a failed
/// initial fetch is fatal to this page render.
#[component]
pub fn Random() -> Element {
    let fetcher = use_fetcher();

    let initial = use_resource(move || async move { fetcher().fetch_random().await });

    match &*initial.read_unchecked() {
        Some(Ok(quote)) => rsx! {
            div { class: "page",
                Header {}
                main { class: "page-body page-body-centered",
                    QuoteBox { initial_quote: quote.clone(), show_button: true }
                }
                Footer {}
            }
        },
        Some(Err(e)) => {
            tracing::error!(error = %e, "failed to load a random quote");
            rsx! {
                div { class: "page",
                    Header {}
                    main { class: "page-body",
                        p { class: "page-error", "Failed to fetch a random quote. Please try again later." }
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
