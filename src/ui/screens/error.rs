use crate::ui::{center_rows, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub const RETRY_LABEL: &str = "Reintentar";

pub struct ErrorScreen<'a> {
    message: &'a str,
}

impl<'a> ErrorScreen<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for ErrorScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Message and button
                Constraint::Length(1), // Nav
            ])
            .split(area);

        // Long provider messages wrap; leave room for a few lines
        let message_len = u16::try_from(self.message.chars().count()).unwrap_or(u16::MAX);
        let message_rows = (message_len / chunks[0].width.max(1)).saturating_add(1);
        let band = center_rows(chunks[0], message_rows.saturating_add(2));
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(message_rows),
                Constraint::Length(1),
                Constraint::Length(1), // Button
            ])
            .split(band);

        Paragraph::new(Span::styled(self.message, Theme::error()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(parts[0], buf);

        let button = Line::from(Span::styled(format!("  {}  ", RETRY_LABEL), Theme::button()));
        Paragraph::new(button)
            .alignment(Alignment::Center)
            .render(parts[2], buf);

        let nav = Line::from(vec![
            Span::styled("[r]", Theme::nav_key()),
            Span::styled("Reintentar ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Salir", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn shows_message_and_retry_button() {
        let area = Rect::new(0, 0, 50, 12);
        let mut buf = Buffer::empty(area);

        ErrorScreen::new("city not found").render(area, &mut buf);

        let rows = rows(&buf);
        let message_row = rows.iter().position(|r| r.contains("city not found")).unwrap();
        let button_row = rows
            .iter()
            .position(|r| r.trim() == RETRY_LABEL)
            .unwrap();
        assert!(button_row > message_row);
        assert!(rows[11].contains("[r]Reintentar"));
    }

    #[test]
    fn oversized_message_keeps_nav_bar() {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        let message = "x".repeat(70_000);

        ErrorScreen::new(&message).render(area, &mut buf);

        let rows = rows(&buf);
        assert!(rows[9].contains("[r]Reintentar"));
        assert!(rows.iter().any(|r| r.contains('x')));
    }

    #[test]
    fn message_is_drawn_in_error_color() {
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);

        ErrorScreen::new("X").render(area, &mut buf);

        let rows = rows(&buf);
        let y = rows.iter().position(|r| r.trim() == "X").unwrap() as u16;
        let x = rows[y as usize].find('X').unwrap() as u16;
        assert_eq!(buf[(x, y)].fg, Theme::ERROR);
    }
}
