//! Tab rendering for the details panel
//!
//! - Description tab (method, path, prose, parameter reference)
//! - Test tab (URL preview, inline parameter editing, body, run trigger, outcome)
//! - Example tab (formatted response example)

use super::styling;
use crate::format::format_json;
use crate::state::AppState;
use crate::types::{ParamDescriptor, ParamEditMode, ParamKind, TestOutcome};
use crate::widget::EndpointWidget;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Body lines shown before the preview is cut off
const BODY_PREVIEW_LINES: usize = 5;

pub fn render_description_tab(
    frame: &mut Frame,
    area: Rect,
    widget: &EndpointWidget,
    state: &AppState,
) {
    let descriptor = widget.descriptor();
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(
                descriptor.method.as_str(),
                styling::method_style(descriptor.method),
            ),
            Span::raw(" "),
            Span::raw(descriptor.path.clone()),
        ]),
        Line::from(""),
    ];

    if !descriptor.title.is_empty() {
        lines.push(Line::from(Span::styled(
            descriptor.title.clone(),
            styling::heading(Color::White),
        )));
    }
    if let Some(section) = &descriptor.section {
        lines.push(Line::from(vec![
            Span::styled("Section: ", Style::default().fg(Color::Cyan)),
            Span::raw(section.clone()),
        ]));
    }
    if !descriptor.description.is_empty() {
        lines.push(Line::from(""));
        lines.extend(
            descriptor
                .description
                .lines()
                .map(|line| Line::from(line.to_string())),
        );
    }

    push_param_reference(&mut lines, "Path Parameters:", Color::Magenta, &descriptor.path_params);
    push_param_reference(&mut lines, "Query Parameters:", Color::Cyan, &descriptor.query_params);

    if descriptor.method.supports_body() {
        lines.push(Line::from(""));
        let note = if descriptor.request_body.is_some() {
            "example provided, edit it on the Test tab"
        } else {
            "free-form JSON, write it on the Test tab"
        };
        lines.push(Line::from(vec![
            Span::styled("Request Body: ", styling::heading(Color::Green)),
            Span::styled(note, styling::muted()),
        ]));
    }

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(styling::default_fg()))
        .scroll((state.ui.response_scroll as u16, 0));

    frame.render_widget(content, area);
}

fn push_param_reference(
    lines: &mut Vec<Line<'static>>,
    title: &'static str,
    color: Color,
    params: &[ParamDescriptor],
) {
    if params.is_empty() {
        return;
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(title, styling::heading(color))));
    for param in params {
        let required = if param.required { "*" } else { "" };
        let mut spans = vec![Span::styled(
            format!("  {}{required}", param.name),
            Style::default().fg(color),
        )];
        if !param.description.is_empty() {
            spans.push(Span::styled(
                format!("  {}", param.description),
                Style::default().fg(Color::Gray),
            ));
        }
        lines.push(Line::from(spans));
    }
}

pub fn render_test_tab(frame: &mut Frame, area: Rect, widget: &EndpointWidget, state: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    // ===== URL preview =====
    lines.push(Line::from(Span::styled(
        "Request URL:",
        styling::heading(Color::Cyan),
    )));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{} ", widget.method().as_str()),
            styling::method_style(widget.method()),
        ),
        Span::styled(
            widget.build_url(&state.session),
            Style::default().fg(Color::Yellow),
        ),
    ]));

    let missing = widget.missing_required_path_params();
    if !missing.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("⚠ required path params empty: {}", missing.join(", ")),
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(""));

    // ===== Parameters =====
    let params = widget.editable_params();
    if params.is_empty() {
        lines.push(Line::from(Span::styled(
            "No parameters defined for this endpoint",
            styling::muted(),
        )));
        lines.push(Line::from(""));
    } else {
        let descriptor = widget.descriptor();
        let mut last_kind = None;
        for (idx, (kind, name)) in params.iter().enumerate() {
            if last_kind != Some(*kind) {
                let (title, color) = match kind {
                    ParamKind::Path => ("Path Parameters:", Color::Magenta),
                    ParamKind::Query => ("Query Parameters:", Color::Cyan),
                };
                if last_kind.is_some() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(title, styling::heading(color))));
                last_kind = Some(*kind);
            }

            let is_editing = matches!(
                &state.input.param_edit_mode,
                ParamEditMode::Editing { kind: k, name: n } if k == kind && n == name
            );
            let value = if is_editing {
                state.input.param_edit_buffer.as_str()
            } else {
                widget.param_value(*kind, name)
            };
            let required = match kind {
                ParamKind::Path => &descriptor.path_params,
                ParamKind::Query => &descriptor.query_params,
            }
            .iter()
            .any(|p| p.name == *name && p.required);

            lines.push(build_param_line(
                name,
                *kind,
                value,
                required,
                state.ui.selected_param_index == idx,
                is_editing,
            ));
        }
        lines.push(Line::from(""));
    }

    // ===== Request body =====
    if widget.shows_body_editor() {
        lines.push(Line::from(vec![
            Span::styled("Request Body:", styling::heading(Color::Green)),
            Span::raw("  "),
            Span::styled("[Press 'b' to edit]", styling::muted()),
        ]));

        if widget.body().is_empty() {
            lines.push(Line::from(Span::styled(
                "  (empty, no body will be sent)",
                styling::muted(),
            )));
        } else {
            let body_lines: Vec<&str> = widget.body().lines().collect();
            for line in body_lines.iter().take(BODY_PREVIEW_LINES) {
                lines.push(Line::from(Span::styled(
                    format!("  {line}"),
                    Style::default().fg(Color::Yellow),
                )));
            }
            if body_lines.len() > BODY_PREVIEW_LINES {
                lines.push(Line::from(Span::styled(
                    "  ... (press 'b' to edit)",
                    styling::muted(),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    // ===== Trigger =====
    lines.push(trigger_line(widget, state.session.is_ready()));
    lines.push(Line::from(""));

    // ===== Outcome =====
    if let Some(outcome) = widget.outcome() {
        lines.extend(outcome_lines(outcome, state.ui.yank_flash));
        lines.push(Line::from(""));
    }

    let help_text = match &state.input.param_edit_mode {
        ParamEditMode::Viewing if widget.shows_body_editor() => {
            "j/k: Navigate  |  e: Edit param  |  b: Edit body  |  Space: Run  |  y: Yank"
        }
        ParamEditMode::Viewing => "j/k: Navigate  |  e: Edit param  |  Space: Run  |  y: Yank",
        ParamEditMode::Editing { .. } => "Type to edit  |  Enter: Confirm  |  Esc: Cancel",
    };
    lines.push(Line::from(Span::styled(help_text, styling::muted())));

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.ui.response_scroll as u16, 0));

    frame.render_widget(content, area);
}

pub fn render_example_tab(
    frame: &mut Frame,
    area: Rect,
    widget: &EndpointWidget,
    state: &AppState,
) {
    let mut lines: Vec<Line> = Vec::new();

    let title_style = if state.ui.yank_flash {
        Style::default()
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        styling::heading(Color::Cyan)
    };
    lines.push(Line::from(Span::styled("Response example:", title_style)));
    lines.push(Line::from(""));

    let example = &widget.descriptor().response_example;
    if example.is_null() {
        lines.push(Line::from(Span::styled(
            "No response example documented",
            styling::muted(),
        )));
    } else {
        lines.extend(
            format_json(example)
                .lines()
                .map(|line| Line::from(line.to_string())),
        );
    }

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.ui.response_scroll as u16, 0));

    frame.render_widget(content, area);
}

fn trigger_line(widget: &EndpointWidget, ready: bool) -> Line<'static> {
    // a running call keeps its label even if the session was cleared meanwhile
    if widget.is_in_flight() {
        return Line::from(Span::styled(
            "[ Testing... ]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    if ready {
        Line::from(vec![
            Span::styled(
                "[ Run test ]",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("Space/Enter", styling::muted()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[ Run test ]", styling::muted()),
            Span::raw("  "),
            Span::styled(
                "disabled: press 'c' to set the base URL and token",
                Style::default().fg(Color::Yellow),
            ),
        ])
    }
}

/// Text shown for a stored outcome: status line and pretty body, or the error
pub fn outcome_text(outcome: &TestOutcome) -> String {
    match outcome {
        TestOutcome::Success {
            status,
            status_text,
            data,
        } => format!("Status: {status} {status_text}\n\n{}", format_json(data)),
        TestOutcome::Failure { error } => format!("Error: {error}"),
    }
}

fn outcome_lines(outcome: &TestOutcome, flash: bool) -> Vec<Line<'static>> {
    let header_style = |color: Color| {
        if flash {
            Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            styling::heading(color)
        }
    };

    let text = outcome_text(outcome);
    let mut text_lines = text.lines();
    let mut lines = Vec::new();

    match outcome {
        TestOutcome::Success { status, .. } => {
            let color = if (200..300).contains(status) {
                Color::Green
            } else {
                Color::Yellow
            };
            if let Some(first) = text_lines.next() {
                lines.push(Line::from(Span::styled(first.to_string(), header_style(color))));
            }
            lines.extend(text_lines.map(|line| Line::from(line.to_string())));
        }
        TestOutcome::Failure { .. } => {
            if let Some(first) = text_lines.next() {
                lines.push(Line::from(Span::styled(
                    first.to_string(),
                    header_style(Color::Red),
                )));
            }
            lines.extend(
                text_lines
                    .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(Color::Red)))),
            );
        }
    }

    lines
}

/// Build a single parameter row of the Test tab
fn build_param_line(
    name: &str,
    kind: ParamKind,
    current_value: &str,
    required: bool,
    is_selected: bool,
    is_editing: bool,
) -> Line<'static> {
    let required_str = if required { "*" } else { "" };
    let indicator = if is_selected { "→ " } else { "  " };

    let value_display = if is_editing {
        format!("[{current_value}▊]")
    } else if current_value.is_empty() {
        "[_____]".to_string()
    } else {
        format!("[{current_value}]")
    };

    let indicator_style = if is_selected {
        Style::default().fg(Color::Yellow)
    } else {
        styling::muted()
    };

    let base_color = match kind {
        ParamKind::Path => Color::Magenta,
        ParamKind::Query => Color::Cyan,
    };
    let name_style = if is_selected {
        Style::default().fg(base_color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(match kind {
            ParamKind::Path => Color::Rgb(180, 100, 180), // dimmed magenta
            ParamKind::Query => Color::White,
        })
    };

    let value_style = if is_editing {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if is_selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };

    Line::from(vec![
        Span::styled(indicator, indicator_style),
        Span::styled(format!("{name}{required_str}: "), name_style),
        Span::styled(value_display, value_style),
    ])
}
