use crate::state::AppState;
use crate::types::{InputMode, ParamEditMode, ParamKind, PanelFocus, ViewMode, ViewTab};

/// Represents all possible state-changing actions in the application
/// This pattern separates input handling from state mutations, making the code
/// more testable. Anything with side effects (network, clipboard) stays in the
/// event handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Navigation actions
    NavigateToPanel(PanelFocus),
    SelectTab { widget: usize, tab: ViewTab },
    NavigateTabForward { widget: usize },
    NavigateTabBackward { widget: usize },
    NavigateParamUp,
    NavigateParamDown { count: usize },

    // Scrolling actions
    ScrollUp,
    ScrollDown,

    // View mode actions
    ToggleViewMode,
    ToggleSectionExpanded(String),

    // Session configuration modal
    EnterConfigMode,
    ExitConfigMode,
    SwitchConfigField,
    AppendToConfigInput(String),
    BackspaceConfigInput,
    ClearConfigInput,
    DeleteWordConfigInput,
    ApplyConfig,

    // Search
    EnterSearchMode,
    ExitSearchMode,
    AppendToSearchQuery(String),
    BackspaceSearchQuery,
    ClearSearchQuery,

    // Parameter editing actions
    StartEditingParam {
        widget: usize,
        kind: ParamKind,
        name: String,
    },
    AppendToParamBuffer(String),
    BackspaceParamBuffer,
    ClearParamBuffer,
    ConfirmParamEdit { widget: usize },
    CancelParamEdit,

    // Body editor
    OpenBodyEditor { widget: usize },
    SaveBody { widget: usize },
    CancelBodyEdit,

    // State reset actions
    ResetParamIndex,
    ResetResponseScroll,
}

/// Lines moved per scroll action (Ctrl+U / Ctrl+D)
const SCROLL_STEP: usize = 5;

/// Apply an action to the application state
/// This is a pure state transformation function that mutates AppState based on the action
/// All state mutations should go through this function to maintain consistency
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        // Navigation
        AppAction::NavigateToPanel(panel) => {
            state.ui.panel_focus = panel;
        }
        AppAction::SelectTab { widget, tab } => {
            if let Some(w) = state.data.widgets.get_mut(widget) {
                w.select_tab(tab);
            }
            state.ui.panel_focus = PanelFocus::Details;
            state.ui.selected_param_index = 0;
            state.ui.response_scroll = 0;
        }
        AppAction::NavigateTabForward { widget } => {
            let Some(w) = state.data.widgets.get_mut(widget) else {
                return;
            };
            match (state.ui.panel_focus.clone(), w.tab()) {
                (PanelFocus::EndpointsList, _) => {
                    state.ui.panel_focus = PanelFocus::Details;
                    w.select_tab(ViewTab::Description);
                }
                (PanelFocus::Details, ViewTab::Example) => {
                    state.ui.panel_focus = PanelFocus::EndpointsList;
                }
                (PanelFocus::Details, _) => {
                    w.next_tab();
                }
            }
            state.ui.selected_param_index = 0;
            state.ui.response_scroll = 0;
        }
        AppAction::NavigateTabBackward { widget } => {
            let Some(w) = state.data.widgets.get_mut(widget) else {
                return;
            };
            match (state.ui.panel_focus.clone(), w.tab()) {
                (PanelFocus::EndpointsList, _) => {
                    state.ui.panel_focus = PanelFocus::Details;
                    w.select_tab(ViewTab::Example);
                }
                (PanelFocus::Details, ViewTab::Description) => {
                    state.ui.panel_focus = PanelFocus::EndpointsList;
                }
                (PanelFocus::Details, _) => {
                    w.prev_tab();
                }
            }
            state.ui.selected_param_index = 0;
            state.ui.response_scroll = 0;
        }
        AppAction::NavigateParamUp => {
            state.ui.selected_param_index = state.ui.selected_param_index.saturating_sub(1);
        }
        AppAction::NavigateParamDown { count } => {
            if state.ui.selected_param_index + 1 < count {
                state.ui.selected_param_index += 1;
            }
        }

        // Scrolling
        AppAction::ScrollUp => {
            state.ui.response_scroll = state.ui.response_scroll.saturating_sub(SCROLL_STEP);
        }
        AppAction::ScrollDown => {
            state.ui.response_scroll = state.ui.response_scroll.saturating_add(SCROLL_STEP);
        }

        // View mode
        AppAction::ToggleViewMode => {
            state.ui.view_mode = match state.ui.view_mode {
                ViewMode::Flat => ViewMode::Grouped,
                ViewMode::Grouped => ViewMode::Flat,
            };
        }
        AppAction::ToggleSectionExpanded(name) => {
            if !state.ui.expanded_sections.remove(&name) {
                state.ui.expanded_sections.insert(name);
            }
        }

        // Session configuration
        AppAction::EnterConfigMode => {
            state.input.mode = InputMode::EditingConfig;
            state.input.base_url_input = state.session.base_url.clone();
            state.input.token_input = state.session.token.clone();
            state.input.active_field = crate::session::SessionField::BaseUrl;
        }
        AppAction::ExitConfigMode => {
            state.input.mode = InputMode::Normal;
            state.input.base_url_input.clear();
            state.input.token_input.clear();
        }
        AppAction::SwitchConfigField => {
            state.input.active_field = state.input.active_field.other();
        }
        AppAction::AppendToConfigInput(text) => {
            state.input.active_input_mut().push_str(&text);
        }
        AppAction::BackspaceConfigInput => {
            state.input.active_input_mut().pop();
        }
        AppAction::ClearConfigInput => {
            state.input.active_input_mut().clear();
        }
        AppAction::DeleteWordConfigInput => {
            delete_word(state.input.active_input_mut());
        }
        AppAction::ApplyConfig => {
            use crate::session::SessionField;
            let base_url = std::mem::take(&mut state.input.base_url_input);
            let token = std::mem::take(&mut state.input.token_input);
            state.session.update(SessionField::BaseUrl, base_url);
            state.session.update(SessionField::Token, token);
            state.input.mode = InputMode::Normal;
        }

        // Search
        AppAction::EnterSearchMode => {
            state.input.mode = InputMode::Searching;
        }
        AppAction::ExitSearchMode => {
            state.input.mode = InputMode::Normal;
        }
        AppAction::AppendToSearchQuery(text) => {
            state.search.query.push_str(&text);
            state.update_filtered_endpoints();
        }
        AppAction::BackspaceSearchQuery => {
            state.search.query.pop();
            state.update_filtered_endpoints();
        }
        AppAction::ClearSearchQuery => {
            state.search.query.clear();
            state.update_filtered_endpoints();
        }

        // Parameter editing
        AppAction::StartEditingParam { widget, kind, name } => {
            state.input.param_edit_buffer = state
                .data
                .widgets
                .get(widget)
                .map(|w| w.param_value(kind, &name).to_string())
                .unwrap_or_default();
            state.input.param_edit_mode = ParamEditMode::Editing { kind, name };
        }
        AppAction::AppendToParamBuffer(text) => {
            state.input.param_edit_buffer.push_str(&text);
        }
        AppAction::BackspaceParamBuffer => {
            state.input.param_edit_buffer.pop();
        }
        AppAction::ClearParamBuffer => {
            state.input.param_edit_buffer.clear();
        }
        AppAction::ConfirmParamEdit { widget } => {
            let mode = std::mem::replace(&mut state.input.param_edit_mode, ParamEditMode::Viewing);
            let value = std::mem::take(&mut state.input.param_edit_buffer);
            if let (ParamEditMode::Editing { kind, name }, Some(w)) =
                (mode, state.data.widgets.get_mut(widget))
            {
                w.set_param_value(kind, &name, value);
            }
        }
        AppAction::CancelParamEdit => {
            state.input.param_edit_mode = ParamEditMode::Viewing;
            state.input.param_edit_buffer.clear();
        }

        // Body editor
        AppAction::OpenBodyEditor { widget } => {
            if let Some(w) = state.data.widgets.get(widget) {
                state.input.body_editor.load(w.body());
                state.input.mode = InputMode::EditingBody;
            }
        }
        AppAction::SaveBody { widget } => {
            if let Some(w) = state.data.widgets.get_mut(widget) {
                w.set_body(state.input.body_editor.content());
            }
            state.input.mode = InputMode::Normal;
        }
        AppAction::CancelBodyEdit => {
            state.input.mode = InputMode::Normal;
        }

        // State resets
        AppAction::ResetParamIndex => {
            state.ui.selected_param_index = 0;
        }
        AppAction::ResetResponseScroll => {
            state.ui.response_scroll = 0;
        }
    }
}

/// Delete the last word from a string (Ctrl+W behavior).
/// URL separators count as word boundaries.
fn delete_word(s: &mut String) {
    let trimmed_len = s.trim_end().len();
    s.truncate(trimmed_len);

    match s.rfind(|c: char| c.is_whitespace() || matches!(c, '/' | ':' | '.')) {
        Some(pos) => s.truncate(pos),
        None => s.clear(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionConfig, SessionField};
    use crate::types::{EndpointDescriptor, HttpMethod, ParamDescriptor};
    use crate::widget::EndpointWidget;
    use serde_json::Value;

    fn create_test_state() -> AppState {
        let mut state = AppState::new(SessionConfig::default());
        state.install_widgets(vec![EndpointWidget::new(EndpointDescriptor {
            method: HttpMethod::Post,
            path: "/users/{id}".to_string(),
            title: "Update user".to_string(),
            description: String::new(),
            section: Some("Users".to_string()),
            path_params: vec![ParamDescriptor {
                name: "id".to_string(),
                required: true,
                description: String::new(),
            }],
            query_params: vec![],
            request_body: Some("{}".to_string()),
            response_example: Value::Null,
        })]);
        state
    }

    #[test]
    fn test_navigate_to_panel() {
        let mut state = create_test_state();
        assert_eq!(state.ui.panel_focus, PanelFocus::EndpointsList);

        apply_action(AppAction::NavigateToPanel(PanelFocus::Details), &mut state);
        assert_eq!(state.ui.panel_focus, PanelFocus::Details);
    }

    #[test]
    fn test_navigate_tab_forward() {
        let mut state = create_test_state();

        apply_action(AppAction::NavigateTabForward { widget: 0 }, &mut state);
        assert_eq!(state.ui.panel_focus, PanelFocus::Details);
        assert_eq!(state.data.widgets[0].tab(), ViewTab::Description);

        apply_action(AppAction::NavigateTabForward { widget: 0 }, &mut state);
        assert_eq!(state.data.widgets[0].tab(), ViewTab::Test);

        apply_action(AppAction::NavigateTabForward { widget: 0 }, &mut state);
        assert_eq!(state.data.widgets[0].tab(), ViewTab::Example);

        apply_action(AppAction::NavigateTabForward { widget: 0 }, &mut state);
        assert_eq!(state.ui.panel_focus, PanelFocus::EndpointsList);
    }

    #[test]
    fn test_navigate_tab_backward() {
        let mut state = create_test_state();

        apply_action(AppAction::NavigateTabBackward { widget: 0 }, &mut state);
        assert_eq!(state.ui.panel_focus, PanelFocus::Details);
        assert_eq!(state.data.widgets[0].tab(), ViewTab::Example);

        apply_action(AppAction::NavigateTabBackward { widget: 0 }, &mut state);
        assert_eq!(state.data.widgets[0].tab(), ViewTab::Test);

        apply_action(AppAction::NavigateTabBackward { widget: 0 }, &mut state);
        assert_eq!(state.data.widgets[0].tab(), ViewTab::Description);

        apply_action(AppAction::NavigateTabBackward { widget: 0 }, &mut state);
        assert_eq!(state.ui.panel_focus, PanelFocus::EndpointsList);
    }

    #[test]
    fn test_navigate_tab_unknown_widget_is_ignored() {
        let mut state = create_test_state();
        apply_action(AppAction::NavigateTabForward { widget: 7 }, &mut state);
        assert_eq!(state.ui.panel_focus, PanelFocus::EndpointsList);
    }

    #[test]
    fn test_select_tab_focuses_details() {
        let mut state = create_test_state();
        apply_action(
            AppAction::SelectTab {
                widget: 0,
                tab: ViewTab::Test,
            },
            &mut state,
        );
        assert_eq!(state.ui.panel_focus, PanelFocus::Details);
        assert_eq!(state.data.widgets[0].tab(), ViewTab::Test);
    }

    #[test]
    fn test_toggle_view_mode() {
        let mut state = create_test_state();
        assert_eq!(state.ui.view_mode, ViewMode::Flat);

        apply_action(AppAction::ToggleViewMode, &mut state);
        assert_eq!(state.ui.view_mode, ViewMode::Grouped);

        apply_action(AppAction::ToggleViewMode, &mut state);
        assert_eq!(state.ui.view_mode, ViewMode::Flat);
    }

    #[test]
    fn test_toggle_section_expanded() {
        let mut state = create_test_state();

        apply_action(AppAction::ToggleSectionExpanded("Users".to_string()), &mut state);
        assert!(state.ui.expanded_sections.contains("Users"));

        apply_action(AppAction::ToggleSectionExpanded("Users".to_string()), &mut state);
        assert!(state.ui.expanded_sections.is_empty());
    }

    #[test]
    fn test_scroll_actions() {
        let mut state = create_test_state();
        state.ui.response_scroll = 10;

        apply_action(AppAction::ScrollDown, &mut state);
        assert_eq!(state.ui.response_scroll, 15);

        apply_action(AppAction::ScrollUp, &mut state);
        apply_action(AppAction::ScrollUp, &mut state);
        apply_action(AppAction::ScrollUp, &mut state);
        assert_eq!(state.ui.response_scroll, 0);
    }

    #[test]
    fn test_param_navigation_is_bounded() {
        let mut state = create_test_state();

        apply_action(AppAction::NavigateParamDown { count: 2 }, &mut state);
        apply_action(AppAction::NavigateParamDown { count: 2 }, &mut state);
        assert_eq!(state.ui.selected_param_index, 1);

        apply_action(AppAction::NavigateParamUp, &mut state);
        apply_action(AppAction::NavigateParamUp, &mut state);
        assert_eq!(state.ui.selected_param_index, 0);
    }

    #[test]
    fn test_config_modal_prefills_and_merges() {
        let mut state = create_test_state();

        apply_action(AppAction::EnterConfigMode, &mut state);
        assert_eq!(state.input.mode, InputMode::EditingConfig);
        assert_eq!(state.input.base_url_input, "https://api.sidis.com");
        assert_eq!(state.input.token_input, "");

        apply_action(AppAction::SwitchConfigField, &mut state);
        assert_eq!(state.input.active_field, SessionField::Token);
        apply_action(AppAction::AppendToConfigInput(" abc ".to_string()), &mut state);

        apply_action(AppAction::ApplyConfig, &mut state);
        assert_eq!(state.input.mode, InputMode::Normal);
        assert_eq!(state.session.base_url, "https://api.sidis.com");
        // stored exactly as typed
        assert_eq!(state.session.token, " abc ");
        assert!(state.session.is_ready());
    }

    #[test]
    fn test_config_modal_cancel_keeps_session() {
        let mut state = create_test_state();

        apply_action(AppAction::EnterConfigMode, &mut state);
        apply_action(AppAction::ClearConfigInput, &mut state);
        apply_action(AppAction::ExitConfigMode, &mut state);

        assert_eq!(state.session.base_url, "https://api.sidis.com");
        assert_eq!(state.input.base_url_input, "");
    }

    #[test]
    fn test_config_input_editing() {
        let mut state = create_test_state();
        apply_action(AppAction::EnterConfigMode, &mut state);

        apply_action(AppAction::DeleteWordConfigInput, &mut state);
        assert_eq!(state.input.base_url_input, "https://api.sidis");

        apply_action(AppAction::BackspaceConfigInput, &mut state);
        assert_eq!(state.input.base_url_input, "https://api.sidi");
    }

    #[test]
    fn test_param_edit_round_trip() {
        let mut state = create_test_state();

        apply_action(
            AppAction::StartEditingParam {
                widget: 0,
                kind: ParamKind::Path,
                name: "id".to_string(),
            },
            &mut state,
        );
        assert_eq!(state.input.param_edit_buffer, "");

        apply_action(AppAction::AppendToParamBuffer("421".to_string()), &mut state);
        apply_action(AppAction::BackspaceParamBuffer, &mut state);
        apply_action(AppAction::ConfirmParamEdit { widget: 0 }, &mut state);

        assert_eq!(state.input.param_edit_mode, ParamEditMode::Viewing);
        assert_eq!(state.data.widgets[0].path_value("id"), "42");

        // editing again starts from the stored value
        apply_action(
            AppAction::StartEditingParam {
                widget: 0,
                kind: ParamKind::Path,
                name: "id".to_string(),
            },
            &mut state,
        );
        assert_eq!(state.input.param_edit_buffer, "42");
    }

    #[test]
    fn test_cancel_param_edit() {
        let mut state = create_test_state();
        state.input.param_edit_mode = ParamEditMode::Editing {
            kind: ParamKind::Path,
            name: "id".to_string(),
        };
        state.input.param_edit_buffer = "test value".to_string();

        apply_action(AppAction::CancelParamEdit, &mut state);
        assert_eq!(state.input.param_edit_mode, ParamEditMode::Viewing);
        assert_eq!(state.input.param_edit_buffer, "");
        assert_eq!(state.data.widgets[0].path_value("id"), "");
    }

    #[test]
    fn test_body_editor_save_and_cancel() {
        let mut state = create_test_state();

        apply_action(AppAction::OpenBodyEditor { widget: 0 }, &mut state);
        assert_eq!(state.input.mode, InputMode::EditingBody);
        assert_eq!(state.input.body_editor.content(), "{}");

        state.input.body_editor.insert_str("x");
        apply_action(AppAction::CancelBodyEdit, &mut state);
        assert_eq!(state.data.widgets[0].body(), "{}");

        apply_action(AppAction::OpenBodyEditor { widget: 0 }, &mut state);
        state.input.body_editor.clear();
        state.input.body_editor.insert_str(r#"{"name":"Ana"}"#);
        apply_action(AppAction::SaveBody { widget: 0 }, &mut state);
        assert_eq!(state.input.mode, InputMode::Normal);
        assert_eq!(state.data.widgets[0].body(), r#"{"name":"Ana"}"#);
    }

    #[test]
    fn test_search_actions() {
        let mut state = create_test_state();

        apply_action(AppAction::EnterSearchMode, &mut state);
        assert_eq!(state.input.mode, InputMode::Searching);

        apply_action(AppAction::AppendToSearchQuery("nomatch".to_string()), &mut state);
        assert!(state.active_indices().is_empty());

        apply_action(AppAction::ClearSearchQuery, &mut state);
        apply_action(AppAction::AppendToSearchQuery("user".to_string()), &mut state);
        assert_eq!(state.active_indices(), vec![0]);

        apply_action(AppAction::BackspaceSearchQuery, &mut state);
        assert_eq!(state.search.query, "use");

        apply_action(AppAction::ExitSearchMode, &mut state);
        assert_eq!(state.input.mode, InputMode::Normal);
    }

    #[test]
    fn test_delete_word() {
        let mut s = "hello world foo".to_string();
        delete_word(&mut s);
        assert_eq!(s, "hello world");

        delete_word(&mut s);
        assert_eq!(s, "hello");

        delete_word(&mut s);
        assert_eq!(s, "");

        delete_word(&mut s);
        assert_eq!(s, "");
    }

    #[test]
    fn test_delete_word_with_trailing_space() {
        let mut s = "hello world   ".to_string();
        delete_word(&mut s);
        assert_eq!(s, "hello");
    }
}
