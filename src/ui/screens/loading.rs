use crate::ui::components::Spinner;
use crate::ui::{center_rows, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Paragraph, Widget},
};

pub const LOADING_TEXT: &str = "Cargando datos del clima...";

pub struct LoadingScreen {
    tick: usize,
}

impl LoadingScreen {
    pub fn new(tick: usize) -> Self {
        Self { tick }
    }
}

impl Widget for LoadingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let band = center_rows(area, 3);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Spinner
                Constraint::Length(1),
                Constraint::Length(1), // Label
            ])
            .split(band);

        Spinner::new(self.tick).render(chunks[0], buf);
        Paragraph::new(Span::styled(LOADING_TEXT, Theme::loading()))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}
