//! Header Component
//!
//! Word mark on the left, a single navigation button on the right.
//! On the daily page the button leads to the random quote page and back.

use dioxus::prelude::*;

use crate::app::Route;

/// Header component
#[component]
pub fn Header() -> Element {
    let navigator = use_navigator();
    let route = use_route::<Route>();

    let on_random_page = matches!(route, Route::Random {});

    let handle_navigate = move |_| {
        if on_random_page {
            navigator.push(Route::Daily {});
        } else {
            navigator.push(Route::Random {});
        }
    };

    rsx! {
        header { class: "site-header",
            div { class: "site-logo", "InspireFlow" }
            button {
                r#type: "button",
                class: "btn-nav",
                onclick: handle_navigate,
                "aria-label": if on_random_page { "Go to Daily Quote" } else { "Go to Random Quote" },
                if on_random_page { "Daily Quote" } else { "Random Quote" }
            }
        }
    }
}
