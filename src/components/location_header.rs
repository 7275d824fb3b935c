use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, ColorStop, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::LOADING_ANIM_CYCLE_TICKS;

pub struct LocationHeader;

pub struct LocationHeaderProps<'a> {
    /// Resolved name, or the raw query before the first response
    pub name: &'a str,
    /// The location string as submitted
    pub query: &'a str,
    pub temperature: Option<f64>,
    pub is_animating: bool,
    pub tick_count: u32,
}

/// Overhead inside the header area: 1 spacer + 1 query line.
/// The FIGlet name gets `area.height - HEADER_OVERHEAD`.
pub const HEADER_OVERHEAD: u16 = 2;

pub(crate) fn gradient_colors(temp: Option<f64>) -> (ArtColor, ArtColor) {
    match temp {
        Some(t) if t < 0.0 => (ArtColor::rgb(150, 200, 255), ArtColor::rgb(200, 230, 255)),
        Some(t) if t < 15.0 => (ArtColor::rgb(100, 180, 255), ArtColor::rgb(150, 220, 200)),
        Some(t) if t < 25.0 => (ArtColor::rgb(100, 200, 150), ArtColor::rgb(255, 220, 100)),
        Some(t) if t < 35.0 => (ArtColor::rgb(255, 180, 80), ArtColor::rgb(255, 120, 80)),
        Some(_) => (ArtColor::rgb(255, 100, 80), ArtColor::rgb(255, 60, 60)),
        // No data yet
        None => (ArtColor::rgb(180, 180, 180), ArtColor::rgb(220, 220, 220)),
    }
}

/// Width of the loading highlight, as a fraction of the header.
const SHIMMER_BAND: f32 = 0.12;
const HEADER_ANGLE: f32 = 5.0;

/// Temperature gradient, with a light band at `shimmer` while loading.
fn header_fill(colors: (ArtColor, ArtColor), shimmer: Option<f32>) -> Fill {
    let (start, end) = colors;
    let Some(center) = shimmer else {
        return Fill::Linear(LinearGradient::new(
            HEADER_ANGLE,
            vec![ColorStop::new(0.0, start), ColorStop::new(1.0, end)],
        ));
    };

    let at = |pos: f32| start.interpolate(end, pos);
    let lo = (center - SHIMMER_BAND).max(0.0);
    let hi = (center + SHIMMER_BAND).min(1.0);
    let peak = at(center).interpolate(ArtColor::rgb(255, 255, 255), 0.6);
    let stops = vec![
        ColorStop::new(0.0, start),
        ColorStop::new(lo, at(lo)),
        ColorStop::new(center, peak),
        ColorStop::new(hi, at(hi)),
        ColorStop::new(1.0, end),
    ];
    Fill::Linear(LinearGradient::new(HEADER_ANGLE, stops))
}

/// Position of the shimmer band for a tick, in `0.0..1.0`.
fn shimmer_position(tick_count: u32) -> f32 {
    let cycle = LOADING_ANIM_CYCLE_TICKS.max(1);
    (tick_count % cycle) as f32 / cycle as f32
}

impl Component<Action> for LocationHeader {
    type Props<'a> = LocationHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // FIGlet name, artbox picks the best font
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Query as submitted
        ])
        .split(area);

        let shimmer = props
            .is_animating
            .then(|| shimmer_position(props.tick_count));
        let fill = header_fill(gradient_colors(props.temperature), shimmer);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(fill);

        frame.render_widget(ArtBox::new(&renderer, props.name), chunks[0]);

        let query_line = Line::from(vec![
            Span::styled("search: ", Style::default().fg(Color::DarkGray)),
            Span::styled(props.query.to_string(), Style::default().fg(Color::Gray)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(query_line), chunks[2]);
    }
}
