//! Color constants for the InspireFlow palette.
//!
//! Warm editorial aesthetic: parchment backgrounds, ink-gray type,
//! sunrise gradients on the controls.

#![allow(dead_code)]

// === PARCHMENT (Backgrounds) ===
pub const PARCHMENT: &str = "#fdf8f0";
pub const PARCHMENT_DEEP: &str = "#f7efe2";

// === INK (Text) ===
pub const INK: &str = "#374151";
pub const INK_SOFT: &str = "#4b5563";
pub const INK_MUTED: &str = "#6b7280";

// === SUNRISE (Navigation accents) ===
pub const SUNRISE_PINK: &str = "#f472b6";
pub const SUNRISE_ROSE: &str = "#f9a8d4";
pub const SUNRISE_GOLD: &str = "#fde047";

// === DUSK (Refresh button) ===
pub const DUSK_INDIGO: &str = "#4f46e5";
pub const DUSK_PURPLE: &str = "#6b21a8";
pub const DUSK_PINK: &str = "#ec4899";

// === SEMANTIC ===
pub const DANGER: &str = "#b91c1c";
pub const DANGER_BG: &str = "#fef2f2";
