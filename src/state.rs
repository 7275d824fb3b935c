//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::viewport;

/// Location shown on first launch
pub const DEFAULT_LOCATION: &str = "London";

/// Current conditions for one query, replaced wholesale on every response
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub condition_code: i64,
    pub condition_text: Option<String>,
    pub temp_c: f64,
    pub humidity: i64,
    pub wind_kph: f64,
    pub uv: f64,
}

/// Presentation-only flags
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ViewState {
    /// Details dropdown expanded
    pub details_open: bool,
    /// Last observed viewport width, in pixels
    pub viewport_width: u32,
    pub compact: bool,
}

impl ViewState {
    pub fn with_width(width: u32) -> Self {
        Self {
            details_open: false,
            viewport_width: width,
            compact: viewport::is_compact(width),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_width(viewport::DEFAULT_WIDTH)
    }
}

/// Animation timing for the header gradient seam.
pub const LOADING_ANIM_TICK_MS: u64 = 15;
pub const LOADING_ANIM_CYCLE_TICKS: u32 = 60;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Query (visible in debug) ---
    /// Raw location string, passed to the service as-is
    #[debug(section = "Query", label = "Location")]
    pub selected_location: String,

    /// Tag of the most recently issued request
    #[debug(section = "Query", label = "Request")]
    pub request_seq: u64,

    /// Weather lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Weather", label = "Data", debug_fmt)]
    pub weather: DataResource<WeatherSnapshot>,

    /// Refresh of the same location in progress (keeps showing current data)
    #[debug(section = "Weather", label = "Refreshing")]
    pub is_refreshing: bool,

    #[debug(section = "View", label = "Layout", debug_fmt)]
    pub view: ViewState,

    // --- Animation internals (skipped) ---
    /// Animation frame counter (for gradient seam)
    #[debug(skip)]
    pub tick_count: u32,

    /// Remaining ticks to finish the current animation cycle after loading
    #[debug(skip)]
    pub loading_anim_ticks_remaining: u32,

    // --- Search mode (skipped) ---
    #[debug(skip)]
    pub search_mode: bool,

    #[debug(skip)]
    pub search_query: String,
}

impl AppState {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            selected_location: location.into(),
            request_seq: 0,
            weather: DataResource::Empty,
            is_refreshing: false,
            view: ViewState::default(),
            tick_count: 0,
            loading_anim_ticks_remaining: 0,
            search_mode: false,
            search_query: String::new(),
        }
    }

    pub fn with_viewport_width(mut self, width: u32) -> Self {
        self.view = ViewState::with_width(width);
        self
    }

    /// Name to show in the header: the resolved name once known, else the raw query
    pub fn display_name(&self) -> &str {
        match self.weather.data() {
            Some(snapshot) if !snapshot.location_name.is_empty() => &snapshot.location_name,
            _ => &self.selected_location,
        }
    }

    pub fn loading_anim_active(&self) -> bool {
        self.weather.is_loading() || self.is_refreshing || self.loading_anim_ticks_remaining > 0
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_LOCATION)
    }
}
