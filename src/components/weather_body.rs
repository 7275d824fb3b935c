use artbox::{
    Alignment as ArtAlignment, Fill, LinearGradient, Renderer, fonts, integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use tui_dispatch::DataResource;

use super::location_header::{HEADER_OVERHEAD, gradient_colors};
use super::{Component, DetailsDropdown, DetailsDropdownProps, LocationHeader, LocationHeaderProps};
use crate::action::Action;
use crate::condition::{self, IconCategory};
use crate::sprites::{self, SpriteSize};
use crate::state::{AppState, WeatherSnapshot};

pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

/// Fixed rows: blank + blank + description.
const LAYOUT_FIXED: u16 = 3;

/// Text cap tiers: (header_cap, temp_cap).
/// terminus(6), miniwi(4), plain(1) with HEADER_OVERHEAD added to header.
const TEXT_TIERS: [(u16, u16); 3] = [
    (6 + HEADER_OVERHEAD, 6),
    (4 + HEADER_OVERHEAD, 4),
    (1 + HEADER_OVERHEAD, 1),
];

struct LayoutSizing {
    sprite: Option<SpriteSize>,
    sprite_h: u16,
    header_cap: u16,
    temp_cap: u16,
    details_h: u16,
}

/// Try to fit the largest sprite by progressively shrinking text caps.
/// Only falls to emoji when no sprite fits even with plain text.
fn compute_layout(area_height: u16, details_h: u16) -> LayoutSizing {
    for &(hcap, tcap) in &TEXT_TIERS {
        let budget = area_height.saturating_sub(hcap + tcap + LAYOUT_FIXED + details_h);
        if let Some(size) = SpriteSize::for_height(budget) {
            return LayoutSizing {
                sprite: Some(size),
                sprite_h: size.height(),
                header_cap: hcap,
                temp_cap: tcap,
                details_h,
            };
        }
    }
    let (hcap, tcap) = TEXT_TIERS[0];
    LayoutSizing {
        sprite: None,
        sprite_h: 1,
        header_cap: hcap,
        temp_cap: tcap,
        details_h,
    }
}

// ============================================================================
// Component
// ============================================================================

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        match WeatherView::from_state(state) {
            WeatherView::Error(error) => render_error(frame, area, error),
            WeatherView::Ready(snapshot) if state.view.compact => {
                render_compact(frame, area, state, snapshot);
            }
            WeatherView::Ready(snapshot) => {
                // Width units may be pixels; the details row still needs the columns
                let stacked = !DetailsDropdown::fits_side_by_side(snapshot, area.width);
                let details_h = DetailsDropdown::height(state.view.details_open, stacked);
                let sizing = compute_layout(area.height, details_h);
                render_wide(frame, area, state, snapshot, &sizing, stacked);
            }
            WeatherView::Loading => {
                render_placeholder(frame, area, state, Line::from("Loading...").centered());
            }
            WeatherView::Empty => render_placeholder(frame, area, state, empty_hint()),
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut header = LocationHeader;
    header.render(
        frame,
        area,
        LocationHeaderProps {
            name: state.display_name(),
            query: &state.selected_location,
            temperature: state.weather.data().map(|w| w.temp_c),
            is_animating: state.loading_anim_active(),
            tick_count: state.tick_count,
        },
    );
}

fn make_layout(area: Rect, sizing: &LayoutSizing) -> std::rc::Rc<[Rect]> {
    Layout::vertical([
        Constraint::Max(sizing.header_cap),
        Constraint::Length(1),
        Constraint::Length(sizing.sprite_h),
        Constraint::Length(1),
        Constraint::Max(sizing.temp_cap),
        Constraint::Length(1),
        Constraint::Length(sizing.details_h),
    ])
    .flex(Flex::Center)
    .split(area)
}

fn description(snapshot: &WeatherSnapshot, category: IconCategory) -> String {
    if let Some(text) = &snapshot.condition_text {
        return text.clone();
    }
    condition::condition_label(snapshot.condition_code)
        .unwrap_or(category.label())
        .to_string()
}

fn render_details(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    snapshot: &WeatherSnapshot,
    stacked: bool,
) {
    let mut details = DetailsDropdown;
    details.render(
        frame,
        area,
        DetailsDropdownProps {
            snapshot,
            is_open: state.view.details_open,
            stacked,
        },
    );
}

fn render_wide(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    snapshot: &WeatherSnapshot,
    sizing: &LayoutSizing,
    stacked: bool,
) {
    let chunks = make_layout(area, sizing);
    // Classified at render time from the stored code
    let category = condition::classify(snapshot.condition_code);

    render_header(frame, chunks[0], state);

    match sizing.sprite {
        Some(size) => {
            let art = Paragraph::new(sprites::get_sprite(category, size))
                .alignment(Alignment::Center);
            frame.render_widget(art, chunks[2]);
        }
        None => {
            let emoji = Line::from(category.emoji()).centered();
            frame.render_widget(Paragraph::new(emoji), chunks[2]);
        }
    }

    let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(temperature_gradient(snapshot.temp_c));
    frame.render_widget(
        ArtBox::new(&renderer, &format_temperature(snapshot.temp_c)),
        chunks[4],
    );

    let desc = Line::from(vec![Span::styled(
        description(snapshot, category),
        Style::default().fg(Color::Gray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(desc), chunks[5]);

    render_details(frame, chunks[6], state, snapshot, stacked);
}

/// Narrow layout: plain text only, details stacked.
fn render_compact(frame: &mut Frame, area: Rect, state: &AppState, snapshot: &WeatherSnapshot) {
    let category = condition::classify(snapshot.condition_code);
    let details_h = DetailsDropdown::height(state.view.details_open, true);
    let chunks = Layout::vertical([
        Constraint::Length(1), // name
        Constraint::Length(1), // blank
        Constraint::Length(1), // icon + temperature
        Constraint::Length(1), // description
        Constraint::Length(1), // blank
        Constraint::Length(details_h),
    ])
    .flex(Flex::Center)
    .split(area);

    let name = Line::from(vec![Span::styled(
        state.display_name().to_string(),
        Style::default().fg(Color::White).bold(),
    )])
    .centered();
    frame.render_widget(Paragraph::new(name), chunks[0]);

    let reading = Line::from(vec![
        Span::raw(format!("{}  ", category.emoji())),
        Span::styled(
            format_temperature(snapshot.temp_c),
            Style::default()
                .fg(temperature_color(snapshot.temp_c))
                .bold(),
        ),
    ])
    .centered();
    frame.render_widget(Paragraph::new(reading), chunks[2]);

    let desc = Line::from(vec![Span::styled(
        description(snapshot, category),
        Style::default().fg(Color::Gray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(desc), chunks[3]);

    render_details(frame, chunks[5], state, snapshot, true);
}

fn render_placeholder(frame: &mut Frame, area: Rect, state: &AppState, message: Line<'static>) {
    if state.view.compact {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .split(area);
        let name = Line::from(state.selected_location.clone())
            .bold()
            .centered();
        frame.render_widget(Paragraph::new(name), chunks[0]);
        frame.render_widget(Paragraph::new(message), chunks[2]);
        return;
    }

    let sizing = compute_layout(area.height, 0);
    let chunks = make_layout(area, &sizing);
    render_header(frame, chunks[0], state);
    frame.render_widget(Paragraph::new(message), chunks[5]);
}

fn empty_hint() -> Line<'static> {
    Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("/", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" to search or ", Style::default().fg(Color::DarkGray)),
        Span::styled("r", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" to fetch weather", Style::default().fg(Color::DarkGray)),
    ])
    .centered()
}

/// Service error message, shown as-is. No icon or temperature.
fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )])
            .centered(),
        ),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("/", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to search again", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[2],
    );
}

// ============================================================================
// Helpers
// ============================================================================

enum WeatherView<'a> {
    Error(&'a str),
    Ready(&'a WeatherSnapshot),
    Loading,
    Empty,
}

impl<'a> WeatherView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match &state.weather {
            DataResource::Failed(error) => WeatherView::Error(error),
            DataResource::Loaded(snapshot) => WeatherView::Ready(snapshot),
            DataResource::Loading => WeatherView::Loading,
            DataResource::Empty => WeatherView::Empty,
        }
    }
}

/// Temperature as the service reports it, in °C
pub fn format_temperature(celsius: f64) -> String {
    format!("{celsius}°C")
}

/// Flat color for plain-text temperatures, matching the gradient bands
fn temperature_color(celsius: f64) -> Color {
    match celsius {
        t if t < 0.0 => Color::Rgb(150, 200, 255),
        t if t < 15.0 => Color::Rgb(100, 180, 255),
        t if t < 25.0 => Color::Rgb(100, 200, 150),
        t if t < 35.0 => Color::Rgb(255, 180, 80),
        _ => Color::Rgb(255, 100, 80),
    }
}

fn temperature_gradient(celsius: f64) -> Fill {
    let (start, end) = gradient_colors(Some(celsius));
    Fill::Linear(LinearGradient::horizontal(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_temperature_is_verbatim() {
        assert_eq!(format_temperature(14.0), "14°C");
        assert_eq!(format_temperature(-3.5), "-3.5°C");
    }

    #[test]
    fn test_description_prefers_service_text() {
        let mut snapshot = WeatherSnapshot {
            condition_code: 1009,
            condition_text: Some("Overcast skies".into()),
            ..Default::default()
        };
        assert_eq!(
            description(&snapshot, IconCategory::Cloudy),
            "Overcast skies"
        );

        snapshot.condition_text = None;
        assert_eq!(description(&snapshot, IconCategory::Cloudy), "Overcast");

        snapshot.condition_code = 7;
        assert_eq!(description(&snapshot, IconCategory::Unknown), "Unknown");
    }

    #[test]
    fn test_compute_layout_shrinks_text_before_sprite() {
        let roomy = compute_layout(40, 2);
        assert_eq!(roomy.sprite, Some(SpriteSize::Large));
        assert_eq!(roomy.header_cap, TEXT_TIERS[0].0);

        let tight = compute_layout(8, 2);
        assert_eq!(tight.sprite, None);
        assert_eq!(tight.sprite_h, 1);
    }
}
