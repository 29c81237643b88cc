//! Footer Component
//!
//! Attribution to the upstream quote API and its advisory request budget,
//! bottom right of the page.

use dioxus::prelude::*;
use inspireflow_core::{UPSTREAM_BUDGET_WINDOW_SECS, UPSTREAM_REQUEST_BUDGET};

/// Footer component
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            p { class: "footer-attribution",
                "Quotes powered by "
                a {
                    href: "https://zenquotes.io/",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "ZenQuotes.io"
                }
            }
            p { class: "footer-limit",
                "(API Limit: {UPSTREAM_REQUEST_BUDGET} requests/{UPSTREAM_BUDGET_WINDOW_SECS}s)"
            }
        }
    }
}
