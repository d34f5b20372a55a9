use crate::models::DaySummary;
use crate::ui::components::{WeatherCard, CARD_HEIGHT};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const TITLE: &str = "🌤 Pronóstico del Clima";

pub struct ForecastScreen<'a> {
    pub location_name: &'a str,
    pub days: &'a [DaySummary],
    pub scroll: usize,
}

impl<'a> ForecastScreen<'a> {
    pub fn new(location_name: &'a str, days: &'a [DaySummary]) -> Self {
        Self {
            location_name,
            days,
            scroll: 0,
        }
    }

    pub fn with_scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for ForecastScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Location
                Constraint::Length(1),
                Constraint::Min(CARD_HEIGHT), // Cards
                Constraint::Length(1),        // Nav
            ])
            .split(area);

        Paragraph::new(Span::styled(TITLE, Theme::title()))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        Paragraph::new(Span::styled(
            format!("📍 {}", self.location_name),
            Theme::subtitle(),
        ))
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

        self.render_cards(chunks[3], buf);

        let nav = Line::from(vec![
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("Desplazar ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Salir", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[4], buf);
    }
}

impl ForecastScreen<'_> {
    fn render_cards(&self, area: Rect, buf: &mut Buffer) {
        if self.days.is_empty() {
            Paragraph::new(Span::styled("Sin datos de pronóstico", Theme::dim()))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        // Cards span 95% of the width, centered
        let column = Layout::horizontal([Constraint::Percentage(95)])
            .flex(Flex::Center)
            .split(area)[0];

        let visible = (column.height / CARD_HEIGHT).max(1) as usize;
        let start = self.scroll.min(self.days.len() - 1);

        for (slot, day) in self.days.iter().skip(start).take(visible).enumerate() {
            let card_area = Rect {
                x: column.x,
                y: column.y + slot as u16 * CARD_HEIGHT,
                width: column.width,
                height: CARD_HEIGHT.min(column.height),
            };
            WeatherCard::new(day).render(card_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ForecastSample, WeatherCondition};
    use chrono::NaiveDate;

    fn days(count: u32) -> Vec<DaySummary> {
        (1..=count)
            .map(|d| {
                let sample = ForecastSample {
                    dt_txt: format!("2024-05-{:02} 00:00:00", d),
                    temp_max: 10.0 + 5.0 * d as f64,
                    temp_min: 8.0,
                    pop: 0.0,
                    condition: WeatherCondition {
                        icon: "01d".into(),
                        description: "cielo claro".into(),
                    },
                };
                DaySummary::seed(NaiveDate::from_ymd_opt(2024, 5, d).unwrap(), &sample)
            })
            .collect()
    }

    fn screen_text(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_title_location_and_cards_in_order() {
        let area = Rect::new(0, 0, 60, 40);
        let mut buf = Buffer::empty(area);
        let days = days(5);

        ForecastScreen::new("Huejutla de Reyes", &days).render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains("Pronóstico del Clima"));
        assert!(text.contains("Huejutla de Reyes"));
        let positions: Vec<usize> = days
            .iter()
            .map(|d| text.find(&d.headline()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn scroll_skips_leading_cards() {
        let area = Rect::new(0, 0, 60, 11);
        let mut buf = Buffer::empty(area);
        let days = days(5);

        ForecastScreen::new("Huejutla de Reyes", &days)
            .with_scroll(2)
            .render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(!text.contains(&days[0].headline()));
        assert!(text.contains(&days[2].headline()));
    }

    #[test]
    fn empty_forecast_shows_placeholder() {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);

        ForecastScreen::new("Huejutla de Reyes", &[]).render(area, &mut buf);

        assert!(screen_text(&buf).contains("Sin datos de pronóstico"));
    }
}
