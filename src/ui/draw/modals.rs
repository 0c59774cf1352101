//! Modal dialog rendering
//!
//! - Session configuration modal (base URL + token)
//! - Request body editor modal

use super::styling::{HELP_FG, MODAL_BG};
use crate::session::SessionField;
use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Centered rectangle of the given size, clamped to `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn modal_block(title: &'static str, color: Color) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(MODAL_BG).fg(Color::White))
}

/// Render the session configuration modal (base URL + token)
pub fn render_config_modal(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let modal_width = (area.width as f32 * 0.7).min(90.0) as u16;
    let modal_area = centered_rect(area, modal_width, 12);

    frame.render_widget(Clear, modal_area);

    let block = modal_block(" Configure Session ", Color::Yellow);
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Length(1), // Base URL label
            Constraint::Length(1), // Base URL input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Token label
            Constraint::Length(1), // Token input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let desc = Paragraph::new(
        "Used by every endpoint's test call. Kept in memory for this session only.",
    )
    .style(Style::default().fg(Color::Gray))
    .wrap(Wrap { trim: true });
    frame.render_widget(desc, chunks[0]);

    let fields = [
        (SessionField::BaseUrl, &state.input.base_url_input, chunks[1], chunks[2]),
        (SessionField::Token, &state.input.token_input, chunks[4], chunks[5]),
    ];

    for (field, value, label_area, input_area) in fields {
        let active = state.input.active_field == field;

        let label_text = if active {
            format!("► {}:", field.label())
        } else {
            format!("  {}:", field.label())
        };
        let label = Paragraph::new(label_text).style(Style::default().fg(if active {
            Color::Yellow
        } else {
            Color::LightCyan
        }));
        frame.render_widget(label, label_area);

        // full value while editing, masked otherwise
        let shown = if field == SessionField::Token && !active {
            crate::session::mask_token(value)
        } else if active {
            format!("{value}_")
        } else {
            value.to_string()
        };
        let input = Paragraph::new(shown).style(if active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        });
        frame.render_widget(input, input_area);
    }

    let help = Paragraph::new(
        "Tab: Switch fields  |  Ctrl+L: Clear field  |  Enter: Apply  |  Esc: Cancel",
    )
    .style(Style::default().fg(HELP_FG))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[7]);
}

/// Render the request body editor modal for POST/PUT/PATCH
pub fn render_body_editor_modal(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let modal_width = (area.width as f32 * 0.8).min(100.0) as u16;
    let modal_height = (area.height as f32 * 0.7).min(30.0) as u16;
    let modal_area = centered_rect(area, modal_width, modal_height);

    frame.render_widget(Clear, modal_area);

    let block = modal_block(" Edit Request Body (JSON) ", Color::Green);
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status
            Constraint::Min(3),    // Editor
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let editor = &state.input.body_editor;
    let (line, col) = editor.cursor_line_col();

    let validity = match editor.validate_json() {
        Ok(()) => Span::styled("✓ valid JSON", Style::default().fg(Color::Green)),
        Err(e) => Span::styled(format!("✗ {e}"), Style::default().fg(Color::Red)),
    };
    let dirty = if editor.is_dirty() { " [modified]" } else { "" };
    let status = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Ln {}, Col {}{dirty}  ", line + 1, col + 1),
            Style::default().fg(Color::LightGreen),
        ),
        validity,
    ]));
    frame.render_widget(status, chunks[0]);

    // keep the cursor line in view
    let editor_area = chunks[1];
    let visible = editor_area.height.max(1) as usize;
    let scroll = line.saturating_sub(visible - 1);

    let body = Paragraph::new(editor.content().to_string())
        .style(Style::default().fg(Color::Yellow))
        .scroll((scroll as u16, 0));
    frame.render_widget(body, editor_area);

    let cursor_x = editor_area.x + (col as u16).min(editor_area.width.saturating_sub(1));
    let cursor_y = editor_area.y + (line - scroll) as u16;
    frame.set_cursor_position(Position::new(cursor_x, cursor_y));

    let help = Paragraph::new("Ctrl+S: Save  |  Ctrl+F: Format  |  Ctrl+L: Clear  |  Esc: Cancel")
        .style(Style::default().fg(HELP_FG))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 60, 10), Rect::new(20, 15, 60, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 20, 8);
        assert_eq!(centered_rect(area, 60, 12), area);
    }
}
