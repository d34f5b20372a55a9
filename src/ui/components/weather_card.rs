use crate::models::DaySummary;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Rows a card occupies, borders included
pub const CARD_HEIGHT: u16 = 6;

/// One day of the forecast, tinted by its high temperature
pub struct WeatherCard<'a> {
    day: &'a DaySummary,
}

impl<'a> WeatherCard<'a> {
    pub fn new(day: &'a DaySummary) -> Self {
        Self { day }
    }
}

impl Widget for WeatherCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let bg = Theme::card_color(self.day.temp_max);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().bg(bg).fg(Theme::FG));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(4)])
            .split(inner);

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(Span::styled(self.day.headline(), bold)),
            Line::from(Span::styled(
                self.day.condition.text.as_str(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(vec![
                Span::styled(format!("🌡 {}", self.day.temp_max_text()), bold),
                Span::styled(
                    format!(" / {}", self.day.temp_min_text()),
                    Style::default().fg(Theme::CARD_MUTED),
                ),
            ]),
            Line::from(Span::styled(self.day.rain_label(), bold)),
        ];
        Paragraph::new(lines).render(chunks[0], buf);

        let icon_area = crate::ui::center_rows(chunks[1], 1);
        Paragraph::new(self.day.condition.symbol())
            .alignment(Alignment::Center)
            .render(icon_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ForecastSample, WeatherCondition};
    use chrono::NaiveDate;

    fn day(temp_max: f64) -> DaySummary {
        let sample = ForecastSample {
            dt_txt: "2024-05-02 00:00:00".into(),
            temp_max,
            temp_min: 12.0,
            pop: 0.4,
            condition: WeatherCondition {
                icon: "10d".into(),
                description: "lluvia ligera".into(),
            },
        };
        DaySummary::seed(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(), &sample)
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn renders_day_details() {
        let area = Rect::new(0, 0, 50, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        let summary = day(24.0);

        WeatherCard::new(&summary).render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("Jueves - 2/5/2024"));
        assert!(row_text(&buf, 2).contains("lluvia ligera"));
        assert!(row_text(&buf, 3).contains("24.0°C"));
        assert!(row_text(&buf, 3).contains("/ 12.0°C"));
        assert!(row_text(&buf, 4).contains("40% prob. de lluvia"));
    }

    #[test]
    fn card_and_text_output_round_alike() {
        let area = Rect::new(0, 0, 50, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        let mut summary = day(24.25);
        summary.temp_min = 18.75;
        summary.rain_prob = 12.5;

        WeatherCard::new(&summary).render(area, &mut buf);

        assert!(row_text(&buf, 3).contains("24.3°C"));
        assert!(row_text(&buf, 3).contains("/ 18.8°C"));
        assert!(row_text(&buf, 4).contains("13% prob. de lluvia"));
        assert!(summary.temperature_label().contains("24.3°C / 18.8°C"));
    }

    #[test]
    fn background_follows_temperature_bucket() {
        let area = Rect::new(0, 0, 40, CARD_HEIGHT);
        for (temp, color) in [
            (15.0, Theme::CARD_COLD),
            (25.0, Theme::CARD_WARM),
            (33.0, Theme::CARD_HOT),
        ] {
            let mut buf = Buffer::empty(area);
            let summary = day(temp);
            WeatherCard::new(&summary).render(area, &mut buf);
            assert_eq!(buf[(20, 5)].bg, color);
        }
    }

    #[test]
    fn tiny_area_renders_nothing() {
        let area = Rect::new(0, 0, 8, 2);
        let mut buf = Buffer::empty(area);
        let summary = day(25.0);
        WeatherCard::new(&summary).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
