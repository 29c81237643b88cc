//! Today Date Component
//!
//! Shows the current local date, e.g. "Saturday, October 25, 2025".

use chrono::Local;
use dioxus::prelude::*;

/// Today's date, formatted for the daily page header
#[component]
pub fn TodayDate() -> Element {
    let formatted = Local::now().format("%A, %B %-d, %Y").to_string();

    rsx! {
        div { class: "today-date", "{formatted}" }
    }
}
