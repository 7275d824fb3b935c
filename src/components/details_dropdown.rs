use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::WeatherSnapshot;

/// Collapsible humidity / wind / UV panel
pub struct DetailsDropdown;

pub struct DetailsDropdownProps<'a> {
    pub snapshot: &'a WeatherSnapshot,
    pub is_open: bool,
    /// One item per row instead of a single shared row
    pub stacked: bool,
}

impl DetailsDropdown {
    /// Rows needed for the given flags: header plus items when open.
    pub fn height(is_open: bool, stacked: bool) -> u16 {
        match (is_open, stacked) {
            (false, _) => 1,
            (true, false) => 2,
            (true, true) => 4,
        }
    }

    /// Whether all three items fit on one row of `columns` cells.
    pub fn fits_side_by_side(snapshot: &WeatherSnapshot, columns: u16) -> bool {
        side_by_side_line(snapshot).width() <= usize::from(columns)
    }
}

fn detail_items(snapshot: &WeatherSnapshot) -> [(&'static str, &'static str, String); 3] {
    [
        ("\u{1f4a7}", "Humidity", format!("{}%", snapshot.humidity)),
        ("\u{1f32c}", "Wind Speed", format!("{} km/h", snapshot.wind_kph)),
        ("\u{2600}", "UV Index", format!("{}", snapshot.uv)),
    ]
}

fn item_spans(icon: &'static str, label: &'static str, value: String) -> Vec<Span<'static>> {
    vec![
        Span::raw(format!("{icon} ")),
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ]
}

fn side_by_side_line(snapshot: &WeatherSnapshot) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, (icon, label, value)) in detail_items(snapshot).into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("    "));
        }
        spans.extend(item_spans(icon, label, value));
    }
    Line::from(spans).centered()
}

impl Component<Action> for DetailsDropdown {
    type Props<'a> = DetailsDropdownProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let row_count = Self::height(props.is_open, props.stacked);
        let constraints = vec![Constraint::Length(1); usize::from(row_count)];
        let rows = Layout::vertical(constraints).split(area);

        let arrow = if props.is_open { "\u{25b4}" } else { "\u{25be}" };
        let header = Line::from(vec![
            Span::styled("Details ", Style::default().fg(Color::Gray).bold()),
            Span::styled(arrow, Style::default().fg(Color::Cyan)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(header), rows[0]);

        if !props.is_open {
            return;
        }

        if props.stacked {
            for (row, (icon, label, value)) in rows[1..].iter().zip(detail_items(props.snapshot)) {
                let line = Line::from(item_spans(icon, label, value)).centered();
                frame.render_widget(Paragraph::new(line), *row);
            }
        } else {
            frame.render_widget(Paragraph::new(side_by_side_line(props.snapshot)), rows[1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            location_name: "London".into(),
            condition_code: 1000,
            condition_text: None,
            temp_c: 14.0,
            humidity: 72,
            wind_kph: 19.1,
            uv: 3.0,
        }
    }

    fn render(is_open: bool, stacked: bool) -> String {
        let mut render = RenderHarness::new(80, 6);
        let mut component = DetailsDropdown;
        let snapshot = snapshot();
        render.render_to_string_plain(|frame| {
            let props = DetailsDropdownProps {
                snapshot: &snapshot,
                is_open,
                stacked,
            };
            component.render(frame, frame.area(), props);
        })
    }

    #[test]
    fn test_closed_shows_header_only() {
        let output = render(false, false);
        assert!(output.contains("Details"));
        assert!(!output.contains("Humidity"));
    }

    #[test]
    fn test_open_shows_values_verbatim() {
        for stacked in [false, true] {
            let output = render(true, stacked);
            assert!(output.contains("Humidity: 72%"), "{output}");
            assert!(output.contains("Wind Speed: 19.1 km/h"), "{output}");
            assert!(output.contains("UV Index: 3"), "{output}");
        }
    }

    #[test]
    fn test_height() {
        assert_eq!(DetailsDropdown::height(false, true), 1);
        assert_eq!(DetailsDropdown::height(true, false), 2);
        assert_eq!(DetailsDropdown::height(true, true), 4);
    }

    #[test]
    fn test_fits_side_by_side_follows_columns() {
        let snapshot = snapshot();
        assert!(DetailsDropdown::fits_side_by_side(&snapshot, 80));
        assert!(!DetailsDropdown::fits_side_by_side(&snapshot, 50));
    }
}
