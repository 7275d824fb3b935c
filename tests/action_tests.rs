//! Action and state tests using EffectStore and TestHarness

use solar::{
    action::Action,
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    condition::{IconCategory, classify},
    effect::Effect,
    reducer::reducer,
    state::{AppState, WeatherSnapshot},
};
use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, NumericComponentId, assert_emitted, assert_not_emitted};

fn snapshot(name: &str, code: i64) -> WeatherSnapshot {
    WeatherSnapshot {
        location_name: name.into(),
        condition_code: code,
        condition_text: None,
        temp_c: 14.0,
        humidity: 72,
        wind_kph: 19.1,
        uv: 3.0,
    }
}

#[test]
fn test_reducer_weather_fetch() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    assert!(store.state().weather.is_empty());

    let result = store.dispatch(Action::WeatherFetch);
    assert!(result.changed, "State should change");
    assert!(store.state().weather.is_loading());
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(
        &result.effects[0],
        Effect::FetchWeather { seq: 1, location } if location == "London"
    ));
}

#[test]
fn test_london_loads_clear() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    store.dispatch(Action::WeatherFetch);
    store.dispatch(Action::WeatherDidLoad {
        seq: 1,
        snapshot: snapshot("London", 1000),
    });

    let loaded = store.state().weather.data().expect("snapshot stored");
    assert_eq!(classify(loaded.condition_code), IconCategory::Clear);
    assert_eq!(loaded.temp_c, 14.0);
    assert_eq!(loaded.humidity, 72);
    assert_eq!(loaded.wind_kph, 19.1);
    assert_eq!(loaded.uv, 3.0);
}

#[test]
fn test_new_snapshot_replaces_old() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    store.dispatch(Action::WeatherFetch);
    store.dispatch(Action::WeatherDidLoad {
        seq: 1,
        snapshot: snapshot("London", 1000),
    });
    store.dispatch(Action::LocationSubmit("Bergen".into()));
    assert!(store.state().weather.is_loading());

    store.dispatch(Action::WeatherDidLoad {
        seq: 2,
        snapshot: snapshot("Bergen", 1195),
    });
    let loaded = store.state().weather.data().expect("snapshot stored");
    assert_eq!(loaded.location_name, "Bergen");
    assert_eq!(classify(loaded.condition_code), IconCategory::HeavyRain);
}

#[test]
fn test_details_toggle_parity() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    for presses in 1..=5 {
        store.dispatch(Action::UiToggleDetails);
        assert_eq!(store.state().view.details_open, presses % 2 == 1);
    }
}

#[test]
fn test_compact_threshold() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    store.dispatch(Action::UiViewportResize { width: 769 });
    assert!(!store.state().view.compact);

    store.dispatch(Action::UiViewportResize { width: 768 });
    assert!(store.state().view.compact);
}

#[test]
fn test_details_independent_of_layout_and_data() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    store.dispatch(Action::UiToggleDetails);
    store.dispatch(Action::UiViewportResize { width: 300 });
    store.dispatch(Action::LocationSubmit("Lima".into()));
    store.dispatch(Action::WeatherDidReject {
        seq: 1,
        message: "No matching location found.".into(),
    });

    assert!(store.state().view.details_open);
}

#[test]
fn test_component_keyboard_events() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherDisplay;

    let actions = harness.send_keys::<NumericComponentId, _, _>("d", |state, event| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(1);
    actions.assert_first(Action::UiToggleDetails);
}

#[test]
fn test_component_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherDisplay;

    let actions = harness.send_keys::<NumericComponentId, _, _>("r q d", |state, event| {
        let props = WeatherDisplayProps {
            state,
            is_focused: false,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_action_categories() {
    let did_load = Action::WeatherDidLoad {
        seq: 1,
        snapshot: WeatherSnapshot::default(),
    };
    let toggle = Action::UiToggleDetails;
    let tick = Action::Tick;

    assert_eq!(did_load.category(), Some("weather_did"));
    assert_eq!(toggle.category(), Some("ui"));
    assert_eq!(tick.category(), None);

    assert!(did_load.is_weather_did());
    assert!(toggle.is_ui());
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![
        Action::WeatherFetch,
        Action::WeatherDidReject {
            seq: 1,
            message: "No matching location found.".into(),
        },
    ];

    assert_emitted!(actions, Action::WeatherFetch);
    assert_emitted!(actions, Action::WeatherDidReject { .. });
    assert_not_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::WeatherDidFail { .. });
}
