//! Main panel rendering
//!
//! - Endpoints panel (left side) - flat or grouped list
//! - Details panel (right side) - the selected widget's three views

use super::components::{
    render_empty_message, render_error_message, render_loading_spinner, render_no_search_results,
};
use super::{styling, tabs};
use crate::state::AppState;
use crate::types::{LoadingState, PanelFocus, RenderItem, ViewMode, ViewTab};
use crate::widget::EndpointWidget;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the left panel with endpoint list (flat or grouped)
pub fn render_endpoints_panel(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    spinner_index: usize,
    list_state: &mut ListState,
) {
    match &state.data.loading_state {
        LoadingState::Loading => render_loading_spinner(frame, area, spinner_index),
        LoadingState::Error(error) => render_error_message(frame, area, error),
        LoadingState::Complete | LoadingState::Idle => {
            if state.active_indices().is_empty() {
                if !state.search.query.is_empty() {
                    render_no_search_results(frame, area);
                } else {
                    render_empty_message(frame, area);
                }
            } else {
                render_list(frame, area, state, list_state);
            }
        }
    }
}

/// Render the right panel with the selected widget
pub fn render_details_panel(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    selected_index: usize,
) {
    let border_color = if state.ui.panel_focus == PanelFocus::Details {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    let block = Block::default()
        .title("[2] Details")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match &state.data.loading_state {
        LoadingState::Loading => {
            let loading =
                Paragraph::new("Loading endpoints...").style(Style::default().fg(Color::Yellow));
            frame.render_widget(loading, inner_area);
            return;
        }
        LoadingState::Error(e) => {
            let error = Paragraph::new(format!("Error loading catalog:\n\n{e}"))
                .style(Style::default().fg(Color::Red));
            frame.render_widget(error, inner_area);
            return;
        }
        _ => {}
    }

    let Some(widget) = state.get_selected_widget(selected_index) else {
        let empty = Paragraph::new("No endpoint selected").style(styling::muted());
        frame.render_widget(empty, inner_area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content area
        ])
        .split(inner_area);

    render_tab_bar(frame, chunks[0], widget);

    match widget.tab() {
        ViewTab::Description => tabs::render_description_tab(frame, chunks[1], widget, state),
        ViewTab::Test => tabs::render_test_tab(frame, chunks[1], widget, state),
        ViewTab::Example => tabs::render_example_tab(frame, chunks[1], widget, state),
    }
}

fn endpoint_line(widget: &EndpointWidget, indent: &'static str) -> Line<'static> {
    let descriptor = widget.descriptor();
    let mut spans = vec![
        Span::raw(indent),
        Span::styled(
            format!("{:7}", descriptor.method.as_str()),
            styling::method_style(descriptor.method),
        ),
        Span::raw(" "),
        Span::raw(descriptor.path.clone()),
    ];

    if !descriptor.title.is_empty() {
        spans.push(Span::styled(
            format!("  {}", descriptor.title),
            styling::muted(),
        ));
    }
    if widget.is_in_flight() {
        spans.push(Span::styled(" …", Style::default().fg(Color::Yellow)));
    }

    Line::from(spans)
}

fn render_list(frame: &mut Frame, area: Rect, state: &AppState, list_state: &mut ListState) {
    let render_items = state.get_render_items();
    let grouped = matches!(state.ui.view_mode, ViewMode::Grouped);

    let items: Vec<ListItem> = render_items
        .iter()
        .map(|item| match item {
            RenderItem::SectionHeader {
                name,
                count,
                expanded,
            } => {
                let icon = if *expanded { "▼" } else { "▶" };
                ListItem::new(Line::from(Span::styled(
                    format!("{icon} {name} ({count})"),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )))
            }
            RenderItem::Endpoint { index } => {
                let indent = if grouped { "  " } else { "" };
                ListItem::new(endpoint_line(&state.data.widgets[*index], indent))
            }
        })
        .collect();

    let border_color = if state.ui.panel_focus == PanelFocus::EndpointsList {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    let title = if grouped {
        format!("[1] Endpoints - {} sections", state.grouped_indices().len())
    } else {
        format!("[1] Endpoints ({})", state.active_indices().len())
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, list_state);
}

/// Render the tab bar showing [ Description ] [ Test ] [ Example ]
fn render_tab_bar(frame: &mut Frame, area: Rect, widget: &EndpointWidget) {
    let separator = Style::default().fg(Color::DarkGray);
    let mut spans = vec![Span::styled("[ ", separator)];

    for (idx, tab) in ViewTab::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" ] [ ", separator));
        }

        let style = if *tab == widget.tab() {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(styling::default_fg())
        };

        let label = if *tab == ViewTab::Test && widget.is_in_flight() {
            "Test (...)".to_string()
        } else {
            tab.title().to_string()
        };
        spans.push(Span::styled(label, style));
    }
    spans.push(Span::styled(" ]", separator));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
