use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Span,
    widgets::{Paragraph, Widget},
};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Spinner {
    tick: usize,
}

impl Spinner {
    pub fn new(tick: usize) -> Self {
        Self { tick }
    }

    pub fn frame(&self) -> &'static str {
        FRAMES[self.tick % FRAMES.len()]
    }
}

impl Widget for Spinner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(self.frame(), Theme::loading()))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_cycle_with_tick() {
        assert_eq!(Spinner::new(0).frame(), "⠋");
        assert_eq!(Spinner::new(1).frame(), "⠙");
        assert_eq!(Spinner::new(10).frame(), "⠋");
    }
}
