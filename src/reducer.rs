//! Reducer - pure function: (state, action) -> DispatchResult

use tracing::{debug, info, warn};
use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, LOADING_ANIM_CYCLE_TICKS};
use crate::viewport;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Location actions =====
        Action::LocationSubmit(location) => {
            if location == state.selected_location {
                return DispatchResult::unchanged();
            }
            state.selected_location = location;
            state.weather = DataResource::Loading;
            state.is_refreshing = false;
            issue_fetch(state)
        }

        // ===== Weather actions =====
        Action::WeatherFetch => {
            if state.weather.is_loaded() {
                state.is_refreshing = true;
            } else {
                state.weather = DataResource::Loading;
            }
            issue_fetch(state)
        }

        Action::WeatherDidLoad { seq, snapshot } => {
            if !is_current(state, seq) {
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Loaded(snapshot);
            finish_request(state);
            DispatchResult::changed()
        }

        Action::WeatherDidReject { seq, message } => {
            if !is_current(state, seq) {
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Failed(message);
            finish_request(state);
            DispatchResult::changed()
        }

        Action::WeatherDidFail { seq, error } => {
            if !is_current(state, seq) {
                return DispatchResult::unchanged();
            }
            warn!(
                location = %state.selected_location,
                seq,
                %error,
                "weather request failed"
            );
            state.weather = DataResource::Empty;
            finish_request(state);
            DispatchResult::changed()
        }

        // ===== Search actions =====
        Action::SearchOpen => {
            state.search_mode = true;
            state.search_query.clear();
            DispatchResult::changed()
        }

        Action::SearchClose => {
            state.search_mode = false;
            state.search_query.clear();
            DispatchResult::changed()
        }

        Action::SearchQueryChange(query) => {
            state.search_query = query;
            DispatchResult::changed()
        }

        Action::SearchQuerySubmit(query) => {
            state.search_mode = false;
            state.search_query.clear();
            let result = reducer(state, Action::LocationSubmit(query));
            if result.changed {
                result
            } else {
                DispatchResult::changed()
            }
        }

        // ===== UI actions =====
        Action::UiToggleDetails => {
            state.view.details_open = !state.view.details_open;
            DispatchResult::changed()
        }

        Action::UiViewportResize { width } => {
            if width == state.view.viewport_width {
                return DispatchResult::unchanged();
            }
            state.view.viewport_width = width;
            state.view.compact = viewport::is_compact(width);
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            let animating = state.loading_anim_active();
            if animating {
                state.tick_count = state.tick_count.wrapping_add(1);
                if state.loading_anim_ticks_remaining > 0 {
                    state.loading_anim_ticks_remaining -= 1;
                }
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Tag a new request for the selected location and declare the fetch.
fn issue_fetch(state: &mut AppState) -> DispatchResult<Effect> {
    state.request_seq += 1;
    state.tick_count = 0;
    state.loading_anim_ticks_remaining = 0;
    info!(location = %state.selected_location, seq = state.request_seq, "requesting weather");
    DispatchResult::changed_with(Effect::FetchWeather {
        seq: state.request_seq,
        location: state.selected_location.clone(),
    })
}

/// Last-submitted-wins: only the latest issued request may update state.
fn is_current(state: &AppState, seq: u64) -> bool {
    if seq == state.request_seq {
        return true;
    }
    debug!(
        seq,
        latest = state.request_seq,
        "dropping superseded weather response"
    );
    false
}

fn finish_request(state: &mut AppState) {
    state.is_refreshing = false;
    state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
}

fn ticks_to_phase_zero(tick_count: u32) -> u32 {
    let cycle = LOADING_ANIM_CYCLE_TICKS.max(1);
    if tick_count == 0 {
        return cycle;
    }
    let remainder = tick_count % cycle;
    if remainder == 0 { 0 } else { cycle - remainder }
}
