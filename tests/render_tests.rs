//! Render tests using RenderHarness
//!
//! Large text is FIGlet art, so assertions stick to the plain-text rows:
//! descriptions, details, hints and error messages.

use solar::{
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    state::{AppState, ViewState, WeatherSnapshot},
};
use tui_dispatch::{DataResource, testing::*};

fn london() -> WeatherSnapshot {
    WeatherSnapshot {
        location_name: "London".into(),
        condition_code: 1000,
        condition_text: Some("Sunny".into()),
        temp_c: 14.0,
        humidity: 72,
        wind_kph: 19.1,
        uv: 3.0,
    }
}

fn render(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = WeatherDisplay;

    render.render_to_string_plain(|frame| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

#[test]
fn test_render_loading_state() {
    let state = AppState {
        weather: DataResource::Loading,
        ..Default::default()
    };

    let output = render(&state, 60, 24);

    assert!(output.contains("Loading..."), "Should show loading text");
}

#[test]
fn test_render_initial_state() {
    let output = render(&AppState::default(), 50, 20);

    assert!(
        output.contains("to fetch weather"),
        "Should show fetch prompt"
    );
}

#[test]
fn test_render_help_bar() {
    let output = render(&AppState::default(), 80, 24);

    assert!(output.contains("refresh"), "Should show refresh hint");
    assert!(output.contains("search"), "Should show search hint");
    assert!(output.contains("details"), "Should show details hint");
    assert!(output.contains("quit"), "Should show quit hint");
}

#[test]
fn test_render_compact_reading() {
    let state = AppState {
        weather: DataResource::Loaded(london()),
        view: ViewState {
            details_open: true,
            ..ViewState::with_width(400)
        },
        ..Default::default()
    };

    let output = render(&state, 40, 20);

    assert!(output.contains("London"), "Should show plain location name");
    assert!(output.contains("14°C"), "Should show temperature verbatim");
    assert!(output.contains("Sunny"), "Should show condition text");
    assert!(output.contains("Humidity: 72%"), "Should show humidity");
    assert!(output.contains("Wind Speed: 19.1 km/h"), "Should show wind");
    assert!(output.contains("UV Index: 3"), "Should show UV");
}

#[test]
fn test_render_details_collapsed_by_default() {
    let state = AppState {
        weather: DataResource::Loaded(london()),
        ..Default::default()
    };

    let output = render(&state, 80, 30);

    assert!(output.contains("Details"), "Should show dropdown header");
    assert!(!output.contains("Humidity"), "Items hidden while closed");
}

#[test]
fn test_render_details_open_wide() {
    let state = AppState {
        weather: DataResource::Loaded(london()),
        view: ViewState {
            details_open: true,
            ..ViewState::default()
        },
        ..Default::default()
    };

    let output = render(&state, 100, 30);

    assert!(output.contains("Humidity: 72%"), "Should show humidity");
    assert!(output.contains("UV Index: 3"), "Should show UV");
    assert!(output.contains("hide details"), "Hint follows toggle state");
}

#[test]
fn test_render_details_stack_when_columns_are_narrow() {
    // 800 width units is the wide layout, but only 50 columns are available
    let state = AppState {
        weather: DataResource::Loaded(london()),
        view: ViewState {
            details_open: true,
            ..ViewState::with_width(800)
        },
        ..Default::default()
    };
    assert!(!state.view.compact);

    let output = render(&state, 50, 30);

    assert!(output.contains("Humidity: 72%"), "Should show humidity");
    assert!(output.contains("Wind Speed: 19.1 km/h"), "Should show wind");
    assert!(output.contains("UV Index: 3"), "Should show UV");
}

#[test]
fn test_render_unresolved_location() {
    let state = AppState {
        selected_location: "Zzzznotaplace".into(),
        weather: DataResource::Failed("No matching location found.".into()),
        ..Default::default()
    };

    let output = render(&state, 50, 20);

    assert!(
        output.contains("No matching location found."),
        "Should show service message verbatim"
    );
    assert!(!output.contains("°C"), "No temperature on error");
    assert!(!output.contains('\u{26a0}'), "No icon on error");
    assert!(output.contains("search again"), "Should show search hint");
}

#[test]
fn test_render_unknown_condition_falls_back() {
    let state = AppState {
        weather: DataResource::Loaded(WeatherSnapshot {
            condition_code: 4242,
            condition_text: None,
            ..london()
        }),
        view: ViewState::with_width(320),
        ..Default::default()
    };

    let output = render(&state, 40, 20);

    assert!(output.contains("Unknown"), "Should label unknown conditions");
    assert!(output.contains("14°C"), "Should still show temperature");
}
