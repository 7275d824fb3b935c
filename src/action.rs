//! Actions - intents from the user and results from async tasks

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherSnapshot;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Location category =====
    /// Intent: select a new location (raw text, passed through untouched)
    LocationSubmit(String),

    // ===== Weather category =====
    /// Intent: (re)fetch weather for the selected location
    WeatherFetch,

    /// Result: service returned current conditions
    WeatherDidLoad { seq: u64, snapshot: WeatherSnapshot },

    /// Result: service answered with its own error payload
    WeatherDidReject { seq: u64, message: String },

    /// Result: transport failure or unreadable payload
    WeatherDidFail { seq: u64, error: String },

    // ===== Search category =====
    /// Open the location search overlay
    SearchOpen,

    /// Close the overlay without submitting
    SearchClose,

    /// Search input text changed
    SearchQueryChange(String),

    /// Submit the search input as the new location
    SearchQuerySubmit(String),

    // ===== UI category =====
    /// Expand or collapse the details dropdown
    UiToggleDetails,

    /// Viewport width changed (in width units)
    UiViewportResize { width: u32 },

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for loading animation
    Tick,

    /// Exit the application
    Quit,
}
