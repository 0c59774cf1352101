//! Color schemes shared by the drawing modules

use crate::types::HttpMethod;
use ratatui::style::{Color, Modifier, Style};

/// Get the color for an HTTP method
pub fn get_method_color(method: HttpMethod) -> Color {
    match method {
        HttpMethod::Get => Color::Green,
        HttpMethod::Post => Color::Blue,
        HttpMethod::Put => Color::Yellow,
        HttpMethod::Delete => Color::Red,
        HttpMethod::Patch => Color::Cyan,
    }
}

pub fn method_style(method: HttpMethod) -> Style {
    Style::default()
        .fg(get_method_color(method))
        .add_modifier(Modifier::BOLD)
}

pub fn focused_border() -> Color {
    Color::Cyan
}

pub fn unfocused_border() -> Color {
    Color::DarkGray
}

pub fn default_fg() -> Color {
    Color::White
}

pub fn heading(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Modal background
pub const MODAL_BG: Color = Color::Rgb(30, 30, 30);

/// Modal help text
pub const HELP_FG: Color = Color::Rgb(150, 150, 150);
