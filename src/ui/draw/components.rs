//! Reusable UI components
//!
//! Header, footer, search bar and the placeholder states of the endpoint list.

use super::styling;
use crate::session::SessionConfig;
use crate::state::AppState;
use crate::types::{InputMode, LoadingState, ViewMode};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Render the application header with load status and session readiness
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    catalog_source: &str,
    loading_state: &LoadingState,
    endpoints_count: usize,
    session: &SessionConfig,
) {
    let status_text = match loading_state {
        LoadingState::Idle => "Idle".to_string(),
        LoadingState::Loading => "Loading...".to_string(),
        LoadingState::Complete => format!("{endpoints_count} endpoints"),
        LoadingState::Error(_) => "Error".to_string(),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("apidoc-tryit - {catalog_source} [{status_text}] | "),
            Style::default().fg(Color::Cyan),
        ),
        readiness_span(session),
        Span::styled(session_details(session), Style::default().fg(Color::Cyan)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn readiness_span(session: &SessionConfig) -> Span<'static> {
    if session.is_ready() {
        Span::styled(
            "● Ready to test",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "○ Configuration pending",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }
}

fn session_details(session: &SessionConfig) -> String {
    let base_url = if session.base_url.is_empty() {
        "no base URL"
    } else {
        session.base_url.as_str()
    };

    if session.token.is_empty() {
        format!(" | {base_url} | no token | 'c':configure")
    } else {
        format!(" | {base_url} | {} | 'c':configure", session.masked_token())
    }
}

/// Render the search bar with active filter indication
pub fn render_search_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let is_active = matches!(state.input.mode, InputMode::Searching);

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if !state.search.query.is_empty() {
        Style::default().fg(Color::Green) // filter applied
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = if !state.search.query.is_empty() {
        let count = state.search.filtered.len();
        let total = state.data.widgets.len();
        format!(" Search [{count}/{total}] ")
    } else {
        " Search (/) ".to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let search_text = if is_active {
        format!("{}_", state.search.query)
    } else {
        state.search.query.clone()
    };

    frame.render_widget(Paragraph::new(search_text).block(block), area);
}

/// Render the footer with command help
pub fn render_footer(frame: &mut Frame, area: Rect, view_mode: &ViewMode) {
    let footer_text = match view_mode {
        ViewMode::Flat => {
            "Tab:Panel 1-3:View j/k:Nav Space:Run y:Yank | g:Group c:Config F5:Reload q:Quit"
        }
        ViewMode::Grouped => {
            "Tab:Panel 1-3:View j/k:Nav Space:Run/Toggle y:Yank | g:Ungroup c:Config F5:Reload q:Quit"
        }
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}

pub fn render_loading_spinner(frame: &mut Frame, area: Rect, spinner_index: usize) {
    let loading_text = format!(
        "{} Loading endpoint catalog\n\nPlease wait...",
        SPINNER[spinner_index % SPINNER.len()]
    );

    let loading = Paragraph::new(loading_text)
        .style(Style::default().fg(Color::Yellow))
        .block(endpoints_block());

    frame.render_widget(loading, area);
}

pub fn render_error_message(frame: &mut Frame, area: Rect, error: &str) {
    let error_msg = format!("✗ {error}\n\nPress [F5] to reload");

    let error_widget = Paragraph::new(error_msg)
        .style(Style::default().fg(Color::Red))
        .wrap(ratatui::widgets::Wrap { trim: false })
        .block(endpoints_block());

    frame.render_widget(error_widget, area);
}

pub fn render_empty_message(frame: &mut Frame, area: Rect) {
    let empty = Paragraph::new("No endpoints in catalog\n\nPress [F5] to reload")
        .style(styling::muted())
        .block(endpoints_block());

    frame.render_widget(empty, area);
}

pub fn render_no_search_results(frame: &mut Frame, area: Rect) {
    let empty = Paragraph::new("No matching endpoints\n\nPress [Esc] or [Ctrl+L] to clear search")
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("[1] Search Results"),
        );

    frame.render_widget(empty, area);
}

fn endpoints_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title("[1] Endpoints")
}
