use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // Base colors
    pub const FG: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;
    pub const ACCENT: Color = Color::Rgb(0x00, 0x7A, 0xFF);
    pub const SUBTITLE: Color = Color::Gray;

    // Status colors
    pub const ERROR: Color = Color::Rgb(0xD0, 0x02, 0x1B);

    // Card backgrounds by daily high
    pub const CARD_COLD: Color = Color::Rgb(0x4A, 0x90, 0xE2);
    pub const CARD_WARM: Color = Color::Rgb(0xFF, 0xC1, 0x07);
    pub const CARD_HOT: Color = Color::Rgb(0xD0, 0x02, 0x1B);
    pub const CARD_MUTED: Color = Color::Rgb(0xEE, 0xEE, 0xEE);

    // Styles
    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(Self::SUBTITLE)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn loading() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR)
    }

    pub fn button() -> Style {
        Style::default()
            .bg(Self::ACCENT)
            .fg(Self::FG)
            .add_modifier(Modifier::BOLD)
    }

    /// Below 20°C cold, below 30°C warm, hot from 30°C up
    pub fn card_color(temp_max_c: f64) -> Color {
        if temp_max_c < 20.0 {
            Self::CARD_COLD
        } else if temp_max_c < 30.0 {
            Self::CARD_WARM
        } else {
            Self::CARD_HOT
        }
    }

    pub fn nav_key() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_label() -> Style {
        Style::default().fg(Self::DIM)
    }
}
