pub mod components;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// A full-width band of `height` rows in the vertical middle of `area`
pub fn center_rows(area: Rect, height: u16) -> Rect {
    Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .split(area)[0]
}
