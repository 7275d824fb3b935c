use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, WeatherBody, WeatherBodyProps};
use crate::action::Action;
use crate::state::AppState;

pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Top-level screen: weather body over a key-hint bar
#[derive(Default)]
pub struct WeatherDisplay;

fn key_action(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Char('r') | KeyCode::F(5) => Action::WeatherFetch,
        KeyCode::Char('/') | KeyCode::Char('s') => Action::SearchOpen,
        KeyCode::Char('d') | KeyCode::Char(' ') => Action::UiToggleDetails,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

fn hints(details_open: bool) -> [StatusBarHint<'static>; 4] {
    let details = if details_open {
        "hide details"
    } else {
        "details"
    };
    [
        StatusBarHint::new("r", "refresh"),
        StatusBarHint::new("/", "search"),
        StatusBarHint::new("d", details),
        StatusBarHint::new("q", "quit"),
    ]
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        match event {
            EventKind::Key(key) if props.is_focused => key_action(key.code),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]);
        let [body_area, bar_area] = layout.areas(area);

        WeatherBody.render(frame, body_area, WeatherBodyProps { state: props.state });

        let hints = hints(props.state.view.details_open);
        <StatusBar as Component<Action>>::render(
            &mut StatusBar::new(),
            frame,
            bar_area,
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&hints),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    fn press(key_str: &str, is_focused: bool) -> Vec<Action> {
        let state = AppState::default();
        WeatherDisplay
            .handle_event(
                &EventKind::Key(key(key_str)),
                WeatherDisplayProps {
                    state: &state,
                    is_focused,
                },
            )
            .into_iter()
            .collect()
    }

    #[test]
    fn test_refresh_keys() {
        let actions = press("r", true);
        actions.assert_count(1);
        actions.assert_first(Action::WeatherFetch);
    }

    #[test]
    fn test_search_and_details_keys() {
        press("/", true).assert_first(Action::SearchOpen);
        press("d", true).assert_first(Action::UiToggleDetails);
        press("x", true).assert_empty();
    }

    #[test]
    fn test_quit_key() {
        press("q", true).assert_first(Action::Quit);
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        press("r", false).assert_empty();
        press("d", false).assert_empty();
    }
}
