#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use inspireflow_core::ZEN_QUOTES_BASE_URL;

/// Global upstream API base, set from command line
static API_BASE: OnceLock<String> = OnceLock::new();

/// Get the upstream API base URL (set from command line or default)
pub fn get_api_base() -> String {
    API_BASE
        .get()
        .cloned()
        .unwrap_or_else(|| ZEN_QUOTES_BASE_URL.to_string())
}

/// InspireFlow - daily and random quotes from ZenQuotes
#[derive(Parser, Debug)]
#[command(name = "inspireflow-desktop")]
#[command(about = "InspireFlow - a daily dose of inspiration")]
struct Args {
    /// Upstream quote API base URL (no trailing slash)
    #[arg(long)]
    api_base: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(base) = args.api_base {
        let _ = API_BASE.set(base.trim_end_matches('/').to_string());
    }

    tracing::info!(api_base = %get_api_base(), "Starting InspireFlow");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("InspireFlow")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
